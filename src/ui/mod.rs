//! # User Interface Module
//!
//! Dear ImGui overlay for the editor.
//!
//! - [`UiManager`] wires ImGui to winit and wgpu and tracks input capture,
//!   so camera controls only see events the UI does not want.
//! - [`editor_panel`] builds the toolbar, the properties panel and the FPS
//!   readout, returning the actions the user triggered this frame.

pub mod manager;
pub mod panel;

// Re-export main types
pub use manager::UiManager;
pub use panel::editor_panel;
