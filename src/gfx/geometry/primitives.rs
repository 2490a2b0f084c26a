//! # Primitive Shape Generation
//!
//! All shapes are unit sized and centered at the origin in a Y-up frame.

use super::{GeometryData, Segment};
use std::f32::consts::PI;

/// Generate a unit cube centered at the origin
///
/// Returns a cube with vertices from -0.5 to 0.5 on all axes, four vertices
/// per face so faces stay independent.
pub fn generate_cube() -> GeometryData {
    let mut data = GeometryData::new();

    #[rustfmt::skip]
    let positions = [
        // Front face
        [-0.5, -0.5,  0.5], [ 0.5, -0.5,  0.5], [ 0.5,  0.5,  0.5], [-0.5,  0.5,  0.5],
        // Back face
        [-0.5, -0.5, -0.5], [-0.5,  0.5, -0.5], [ 0.5,  0.5, -0.5], [ 0.5, -0.5, -0.5],
        // Left face
        [-0.5, -0.5, -0.5], [-0.5, -0.5,  0.5], [-0.5,  0.5,  0.5], [-0.5,  0.5, -0.5],
        // Right face
        [ 0.5, -0.5,  0.5], [ 0.5, -0.5, -0.5], [ 0.5,  0.5, -0.5], [ 0.5,  0.5,  0.5],
        // Top face
        [-0.5,  0.5,  0.5], [ 0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5], [-0.5,  0.5, -0.5],
        // Bottom face
        [-0.5, -0.5, -0.5], [ 0.5, -0.5, -0.5], [ 0.5, -0.5,  0.5], [-0.5, -0.5,  0.5],
    ];

    data.vertices = positions.to_vec();

    // Two triangles per face, counter-clockwise
    for face in 0..6u32 {
        let base = face * 4;
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a UV sphere with specified resolution
///
/// # Arguments
/// * `longitude_segments` - Number of vertical segments (longitude lines)
/// * `latitude_segments` - Number of horizontal segments (latitude lines)
///
/// Returns a sphere of radius 1.0 centered at the origin.
pub fn generate_sphere(longitude_segments: u32, latitude_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let long_segs = longitude_segments.max(3);
    let lat_segs = latitude_segments.max(2);

    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32; // 0 to PI
        let (sin_theta, cos_theta) = theta.sin_cos();

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32; // 0 to 2*PI
            let (sin_phi, cos_phi) = phi.sin_cos();

            data.vertices
                .push([sin_theta * cos_phi, cos_theta, sin_theta * sin_phi]);
        }
    }

    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * (long_segs + 1) + long;
            let second = first + long_segs + 1;

            data.indices.extend_from_slice(&[first, second, first + 1]);
            data.indices
                .extend_from_slice(&[second, second + 1, first + 1]);
        }
    }

    data
}

/// The 12 edges of the unit cube from [`generate_cube`]
pub fn cube_edges() -> [Segment; 12] {
    const H: f32 = 0.5;
    #[rustfmt::skip]
    let corners = [
        [-H, -H, -H], [ H, -H, -H], [ H, -H,  H], [-H, -H,  H], // bottom
        [-H,  H, -H], [ H,  H, -H], [ H,  H,  H], [-H,  H,  H], // top
    ];

    let pairs = [
        (0, 1), (1, 2), (2, 3), (3, 0),
        (4, 5), (5, 6), (6, 7), (7, 4),
        (0, 4), (1, 5), (2, 6), (3, 7),
    ];

    pairs.map(|(a, b)| [corners[a], corners[b]])
}

/// Wireframe of the unit sphere
///
/// Draws `rings` latitude circles between the poles, each split into
/// `slices` segments, plus `slices` meridians running pole to pole in
/// `rings + 1` segments.
pub fn sphere_wire_segments(rings: u32, slices: u32) -> Vec<Segment> {
    let slices = slices.max(3);
    let mut segments = Vec::with_capacity((rings * slices + slices * (rings + 1)) as usize);

    let point = |theta: f32, phi: f32| {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi]
    };

    let lat_step = PI / (rings + 1) as f32;
    let long_step = 2.0 * PI / slices as f32;

    // Latitude circles
    for ring in 1..=rings {
        let theta = ring as f32 * lat_step;
        for slice in 0..slices {
            segments.push([
                point(theta, slice as f32 * long_step),
                point(theta, (slice + 1) as f32 * long_step),
            ]);
        }
    }

    // Meridians
    for slice in 0..slices {
        let phi = slice as f32 * long_step;
        for step in 0..=rings {
            segments.push([
                point(step as f32 * lat_step, phi),
                point((step + 1) as f32 * lat_step, phi),
            ]);
        }
    }

    segments
}

/// A ground grid line and whether it runs through the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub segment: Segment,
    pub is_axis: bool,
}

/// Lines of a `slices` x `slices` grid on y = 0, centered on the origin.
///
/// Matches raylib's `DrawGrid`: `slices / 2` cells on each side of the
/// origin, one line along Z and one along X per step.
pub fn grid_lines(slices: u32, spacing: f32) -> Vec<GridLine> {
    let half = (slices / 2) as i32;
    let extent = half as f32 * spacing;
    let mut lines = Vec::with_capacity(((2 * half + 1) * 2) as usize);

    for i in -half..=half {
        let offset = i as f32 * spacing;
        let is_axis = i == 0;

        lines.push(GridLine {
            segment: [[offset, 0.0, -extent], [offset, 0.0, extent]],
            is_axis,
        });
        lines.push(GridLine {
            segment: [[-extent, 0.0, offset], [extent, 0.0, offset]],
            is_axis,
        });
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_generation() {
        let cube = generate_cube();
        assert_eq!(cube.vertices.len(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.triangle_positions().count(), 36);
    }

    #[test]
    fn test_sphere_generation() {
        let sphere = generate_sphere(8, 6);
        assert_eq!(sphere.vertices.len(), 9 * 7);
        assert_eq!(sphere.triangle_count(), 8 * 6 * 2);

        for v in &sphere.vertices {
            let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_cube_edges_have_unit_length() {
        for [a, b] in cube_edges() {
            let d: f32 = (0..3).map(|i| (a[i] - b[i]).abs()).sum();
            assert!((d - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_sphere_wire_segment_count() {
        // 10 rings of 10 segments + 10 meridians of 11 segments
        assert_eq!(sphere_wire_segments(10, 10).len(), 210);
    }

    #[test]
    fn test_grid_layout() {
        let lines = grid_lines(20, 1.0);
        assert_eq!(lines.len(), 42);
        assert_eq!(lines.iter().filter(|l| l.is_axis).count(), 2);

        let first = lines[0].segment;
        assert_eq!(first, [[-10.0, 0.0, -10.0], [-10.0, 0.0, 10.0]]);
    }
}
