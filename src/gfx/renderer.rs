//! Immediate-mode drawing interface used by scene objects.
//!
//! Scene objects never talk to the GPU directly. Each frame they issue calls
//! against a [`Renderer`], which is implemented by
//! [`DrawList`](super::draw_list::DrawList) for the viewport and by recording
//! renderers in tests.

use cgmath::Vector3;

use super::scene::color::Rgba;

/// The drawing primitives a scene needs from its environment.
pub trait Renderer {
    /// Filled axis-aligned box centered at `center` with full `extents`.
    fn draw_cube(&mut self, center: Vector3<f32>, extents: Vector3<f32>, color: Rgba);

    /// Outline (12 edges) of the same box as [`Renderer::draw_cube`].
    fn draw_cube_wires(&mut self, center: Vector3<f32>, extents: Vector3<f32>, color: Rgba);

    fn draw_sphere(&mut self, center: Vector3<f32>, radius: f32, color: Rgba);

    /// Wireframe sphere with `rings` horizontal and `slices` vertical segments.
    fn draw_sphere_wires(
        &mut self,
        center: Vector3<f32>,
        radius: f32,
        rings: u32,
        slices: u32,
        color: Rgba,
    );

    /// Ground-plane grid on y = 0 centered on the origin.
    fn draw_grid(&mut self, slices: u32, spacing: f32);
}

/// Test helper that records every call it receives.
#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Cube {
            center: Vector3<f32>,
            extents: Vector3<f32>,
            color: Rgba,
        },
        CubeWires {
            center: Vector3<f32>,
            extents: Vector3<f32>,
            color: Rgba,
        },
        Sphere {
            center: Vector3<f32>,
            radius: f32,
            color: Rgba,
        },
        SphereWires {
            center: Vector3<f32>,
            radius: f32,
            rings: u32,
            slices: u32,
            color: Rgba,
        },
        Grid {
            slices: u32,
            spacing: f32,
        },
    }

    #[derive(Debug, Default)]
    pub struct RecordingRenderer {
        pub calls: Vec<DrawCall>,
    }

    impl Renderer for RecordingRenderer {
        fn draw_cube(&mut self, center: Vector3<f32>, extents: Vector3<f32>, color: Rgba) {
            self.calls.push(DrawCall::Cube {
                center,
                extents,
                color,
            });
        }

        fn draw_cube_wires(&mut self, center: Vector3<f32>, extents: Vector3<f32>, color: Rgba) {
            self.calls.push(DrawCall::CubeWires {
                center,
                extents,
                color,
            });
        }

        fn draw_sphere(&mut self, center: Vector3<f32>, radius: f32, color: Rgba) {
            self.calls.push(DrawCall::Sphere {
                center,
                radius,
                color,
            });
        }

        fn draw_sphere_wires(
            &mut self,
            center: Vector3<f32>,
            radius: f32,
            rings: u32,
            slices: u32,
            color: Rgba,
        ) {
            self.calls.push(DrawCall::SphereWires {
                center,
                radius,
                rings,
                slices,
                color,
            });
        }

        fn draw_grid(&mut self, slices: u32, spacing: f32) {
            self.calls.push(DrawCall::Grid { slices, spacing });
        }
    }
}
