//! # Graphics Module
//!
//! Everything between the scene model and the screen.
//!
//! - **Scene Model** ([`scene`]) - Primitives, scene objects and the scene
//! - **Renderer Capability** ([`renderer`]) - The drawing interface objects use
//! - **Draw List** ([`draw_list`]) - CPU-side recording of one frame's geometry
//! - **Geometry** ([`geometry`]) - Unit meshes and wireframe layouts
//! - **Camera System** ([`camera`]) - Orbit camera with mouse controls
//! - **Rendering Pipeline** ([`rendering`]) - wgpu surface, pipelines and frames
//! - **Resource Management** ([`resources`]) - Depth buffer and camera bindings

pub mod camera;
pub mod draw_list;
pub mod geometry;
pub mod renderer;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::orbit_camera::OrbitCamera;
pub use draw_list::DrawList;
pub use renderer::Renderer;
pub use rendering::render_engine::RenderEngine;
