//! # Script Export
//!
//! Converts the editor scene into a standalone Python program that redraws it
//! with the `pyray` raylib binding.
//!
//! The generated file has a fixed layout: a header that opens a window, sets
//! up a camera and starts the frame loop, one statement per scene object in
//! scene order, then a footer that closes the loop and the window. The file
//! is never read back.
//!
//! ## Usage
//!
//! ```no_run
//! use raybuilder::export::{CodeExporter, DEFAULT_EXPORT_FILE};
//! use raybuilder::gfx::scene::{Scene, SceneObject};
//!
//! let mut scene = Scene::new();
//! scene.push(SceneObject::grid());
//!
//! let report = CodeExporter::default().export(&scene, DEFAULT_EXPORT_FILE)?;
//! println!("{report}");
//! # Ok::<(), raybuilder::export::ExportError>(())
//! ```

pub mod exporter;
pub mod python;
pub mod template;

pub use exporter::{CodeExporter, ExportError, ExportReport};

/// File name used when no destination is configured
pub const DEFAULT_EXPORT_FILE: &str = "generated_scene.py";

/// Which color argument exported draw calls carry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Fixed palette name per kind: cubes `rl.RED`, spheres `rl.BLUE`.
    /// Scripts may not match the colors shown in the editor.
    #[default]
    KindLiteral,
    /// `rl.Color(r, g, b, a)` built from the object's own color
    StoredColor,
}

/// Options controlling how objects are written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub color_mode: ColorMode,
}
