//! # Procedural Geometry Generation
//!
//! Unit-sized shapes that the draw list scales and translates into place:
//! filled meshes for solid primitives and line segments for wireframes.
//!
//! ## Supported Shapes
//!
//! - **Cube**: Unit cube mesh and its 12 edges
//! - **Sphere**: UV sphere mesh and latitude/longitude wireframe
//! - **Grid**: raylib-style ground grid line layout
//!
//! ## Usage
//!
//! ```rust
//! use raybuilder::gfx::geometry::{generate_cube, generate_sphere, cube_edges};
//!
//! let cube = generate_cube();
//! assert_eq!(cube.triangle_count(), 12);
//!
//! let sphere = generate_sphere(16, 16);
//! assert!(sphere.vertex_count() > 0);
//!
//! assert_eq!(cube_edges().len(), 12);
//! ```

pub mod primitives;

pub use primitives::*;

/// A line segment between two points
pub type Segment = [[f32; 3]; 2];

/// Indexed triangle mesh
#[derive(Debug, Clone)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Positions of every triangle corner in index order, ready for a
    /// non-indexed triangle list
    pub fn triangle_positions(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.indices.iter().map(|&i| self.vertices[i as usize])
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}
