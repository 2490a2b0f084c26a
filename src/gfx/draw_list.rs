//! CPU-side recording of one frame's draw calls.
//!
//! [`DrawList`] implements [`Renderer`] by tessellating every call into two
//! flat vertex streams, filled triangles and wireframe lines, which the
//! [`RenderEngine`](super::rendering::RenderEngine) uploads once per frame.

use cgmath::Vector3;

use super::{
    geometry::{self, GeometryData, Segment},
    renderer::Renderer,
    rendering::vertex::ColorVertex,
    scene::color::Rgba,
};

/// Resolution of solid spheres
const SPHERE_SEGMENTS: u32 = 16;

const GRID_AXIS_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
const GRID_LINE_COLOR: [f32; 4] = [0.75, 0.75, 0.75, 1.0];

pub struct DrawList {
    triangles: Vec<ColorVertex>,
    lines: Vec<ColorVertex>,
    unit_cube: GeometryData,
    unit_sphere: GeometryData,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
            lines: Vec::new(),
            unit_cube: geometry::generate_cube(),
            unit_sphere: geometry::generate_sphere(SPHERE_SEGMENTS, SPHERE_SEGMENTS),
        }
    }

    /// Drops recorded vertices but keeps the allocations for the next frame
    pub fn clear(&mut self) {
        self.triangles.clear();
        self.lines.clear();
    }

    /// Vertices of a non-indexed triangle list
    pub fn triangle_vertices(&self) -> &[ColorVertex] {
        &self.triangles
    }

    /// Vertices of a line list, two per segment
    pub fn line_vertices(&self) -> &[ColorVertex] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty() && self.lines.is_empty()
    }

    fn push_mesh(
        triangles: &mut Vec<ColorVertex>,
        mesh: &GeometryData,
        center: Vector3<f32>,
        scale: Vector3<f32>,
        color: [f32; 4],
    ) {
        triangles.extend(mesh.triangle_positions().map(|p| ColorVertex {
            position: transform(p, center, scale),
            color,
        }));
    }

    fn push_segments<I>(
        &mut self,
        segments: I,
        center: Vector3<f32>,
        scale: Vector3<f32>,
        color: [f32; 4],
    ) where
        I: IntoIterator<Item = Segment>,
    {
        for [a, b] in segments {
            self.lines.push(ColorVertex {
                position: transform(a, center, scale),
                color,
            });
            self.lines.push(ColorVertex {
                position: transform(b, center, scale),
                color,
            });
        }
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

fn transform(p: [f32; 3], center: Vector3<f32>, scale: Vector3<f32>) -> [f32; 3] {
    [
        center.x + p[0] * scale.x,
        center.y + p[1] * scale.y,
        center.z + p[2] * scale.z,
    ]
}

impl Renderer for DrawList {
    fn draw_cube(&mut self, center: Vector3<f32>, extents: Vector3<f32>, color: Rgba) {
        Self::push_mesh(
            &mut self.triangles,
            &self.unit_cube,
            center,
            extents,
            color.to_f32_array(),
        );
    }

    fn draw_cube_wires(&mut self, center: Vector3<f32>, extents: Vector3<f32>, color: Rgba) {
        self.push_segments(geometry::cube_edges(), center, extents, color.to_f32_array());
    }

    fn draw_sphere(&mut self, center: Vector3<f32>, radius: f32, color: Rgba) {
        Self::push_mesh(
            &mut self.triangles,
            &self.unit_sphere,
            center,
            Vector3::new(radius, radius, radius),
            color.to_f32_array(),
        );
    }

    fn draw_sphere_wires(
        &mut self,
        center: Vector3<f32>,
        radius: f32,
        rings: u32,
        slices: u32,
        color: Rgba,
    ) {
        self.push_segments(
            geometry::sphere_wire_segments(rings, slices),
            center,
            Vector3::new(radius, radius, radius),
            color.to_f32_array(),
        );
    }

    fn draw_grid(&mut self, slices: u32, spacing: f32) {
        let origin = Vector3::new(0.0, 0.0, 0.0);
        let unit = Vector3::new(1.0, 1.0, 1.0);

        for line in geometry::grid_lines(slices, spacing) {
            let color = if line.is_axis {
                GRID_AXIS_COLOR
            } else {
                GRID_LINE_COLOR
            };
            self.push_segments([line.segment], origin, unit, color);
        }
    }
}
