//! # RayBuilder Prelude
//!
//! Commonly used types in one import:
//!
//! ```rust
//! use raybuilder::prelude::*;
//!
//! let mut session = EditorSession::new(&EditorConfig::default().with_startup_grid(false));
//! session.add_cube();
//! let script = CodeExporter::default().render_script(session.scene());
//! assert!(script.contains("rl.draw_cube("));
//! ```

// Re-export core application types
pub use crate::app::EditorApp;
pub use crate::config::{EditorConfig, Theme, WindowConfig};
pub use crate::default;
pub use crate::error::EditorError;
pub use crate::session::{EditorAction, EditorSession, ExportStatus};

// Re-export scene and export types
pub use crate::export::{CodeExporter, ColorMode, ExportError, ExportOptions, ExportReport};
pub use crate::gfx::renderer::Renderer;
pub use crate::gfx::scene::{Primitive, PrimitiveKind, Rgba, Scene, SceneObject};

// Re-export common external dependencies
pub use cgmath::{Vector3, Zero};
