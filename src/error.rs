//! Editor-level errors
//!
//! Everything the shell can fail with once it owns a window and a GPU
//! device. Scene mutation never fails; export failures surface as
//! [`ExportError`] and are wrapped here when they must stop the editor.

use thiserror::Error;

use crate::{export::ExportError, gfx::rendering::PipelineError};

#[derive(Error, Debug)]
pub enum EditorError {
    /// Event loop could not be created or exited abnormally
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// Window creation failed
    #[error("Window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    /// No drawable surface for the window
    #[error("Surface creation failed: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    /// Surface reports no usable texture format
    #[error("Surface supports no texture format")]
    UnsupportedSurface,

    /// No GPU adapter compatible with the surface
    #[error("No compatible GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("GPU device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("Pipeline creation failed: {0}")]
    Pipeline(#[from] PipelineError),

    /// ImGui platform or renderer failure
    #[error("UI error: {0}")]
    Ui(String),

    #[error(transparent)]
    Export(#[from] ExportError),

    /// The surface ran out of memory while acquiring a frame
    #[error("GPU out of memory")]
    OutOfMemory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_export_error_is_transparent() {
        let export = ExportError::Write {
            path: PathBuf::from("missing/generated_scene.py"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        let expected = export.to_string();
        let error: EditorError = export.into();
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_out_of_memory_message() {
        assert_eq!(EditorError::OutOfMemory.to_string(), "GPU out of memory");
    }
}
