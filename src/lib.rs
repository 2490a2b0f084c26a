// src/lib.rs
//! RayBuilder
//!
//! A minimal 3D scene editor: place cubes and spheres over a reference grid,
//! look at them through an orbit camera and export the scene as a standalone
//! pyray script.

pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod gfx;
pub mod logging;
pub mod performance;
pub mod prelude;
pub mod session;
pub mod ui;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::EditorApp;
pub use config::EditorConfig;
pub use error::EditorError;

/// Creates an editor with the default configuration
pub fn default() -> Result<EditorApp, EditorError> {
    EditorApp::new(EditorConfig::default())
}
