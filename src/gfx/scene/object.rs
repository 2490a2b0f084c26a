use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use cgmath::Vector3;

use crate::{
    export::{python, ColorMode},
    gfx::renderer::Renderer,
};

use super::color::Rgba;

/// Segment count used for the wireframe overlay drawn on top of spheres
pub const SPHERE_WIRE_SEGMENTS: u32 = 10;
/// Number of grid divisions drawn for a [`Primitive::Grid`]
pub const GRID_SLICES: u32 = 20;
/// Distance between grid lines
pub const GRID_SPACING: f32 = 1.0;

/// Shape and payload of a scene object.
///
/// Each variant carries exactly the data that kind uses, so a cube can never
/// hold a scalar size and a grid can never hold a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Cube {
        position: Vector3<f32>,
        /// Full width, height and depth
        extents: Vector3<f32>,
        color: Rgba,
    },
    Sphere {
        position: Vector3<f32>,
        radius: f32,
        color: Rgba,
    },
    Grid,
}

/// Payload-free discriminant of [`Primitive`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Cube,
    Sphere,
    Grid,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PrimitiveKind::Cube => "cube",
            PrimitiveKind::Sphere => "sphere",
            PrimitiveKind::Grid => "grid",
        })
    }
}

impl Primitive {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Cube { .. } => PrimitiveKind::Cube,
            Primitive::Sphere { .. } => PrimitiveKind::Sphere,
            Primitive::Grid => PrimitiveKind::Grid,
        }
    }
}

/// One renderable, exportable primitive in the scene.
///
/// Objects are immutable once created; the scene only ever appends them.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    primitive: Primitive,
    name: String,
}

impl SceneObject {
    /// Wraps `primitive` and gives it a name derived from its kind and the
    /// current time.
    ///
    /// Geometric parameters are not validated: negative extents or a zero
    /// radius are stored as given.
    pub fn new(primitive: Primitive) -> Self {
        let name = generate_name(primitive.kind(), SystemTime::now());
        Self { primitive, name }
    }

    pub fn cube(position: Vector3<f32>, extents: Vector3<f32>, color: Rgba) -> Self {
        Self::new(Primitive::Cube {
            position,
            extents,
            color,
        })
    }

    pub fn sphere(position: Vector3<f32>, radius: f32, color: Rgba) -> Self {
        Self::new(Primitive::Sphere {
            position,
            radius,
            color,
        })
    }

    pub fn grid() -> Self {
        Self::new(Primitive::Grid)
    }

    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.primitive.kind()
    }

    /// Display name, e.g. `cube_07123456`. Not unique and never used for lookup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Issues this object's draw calls.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        match self.primitive {
            Primitive::Cube {
                position,
                extents,
                color,
            } => {
                renderer.draw_cube(position, extents, color);
                renderer.draw_cube_wires(position, extents, Rgba::BLACK);
            }
            Primitive::Sphere {
                position,
                radius,
                color,
            } => {
                renderer.draw_sphere(position, radius, color);
                renderer.draw_sphere_wires(
                    position,
                    radius,
                    SPHERE_WIRE_SEGMENTS,
                    SPHERE_WIRE_SEGMENTS,
                    Rgba::BLACK,
                );
            }
            Primitive::Grid => renderer.draw_grid(GRID_SLICES, GRID_SPACING),
        }
    }

    /// The single script statement that redraws this object, without
    /// indentation.
    ///
    /// With [`ColorMode::KindLiteral`] cubes are always exported red and
    /// spheres blue, whatever color they carry in the editor. Kinds with no
    /// statement form produce a comment marker instead.
    pub fn to_export_text(&self, color_mode: ColorMode) -> String {
        match self.primitive {
            Primitive::Cube {
                position,
                extents,
                color,
            } => format!(
                "rl.draw_cube({}, {}, {}, {}, {})",
                python::vector3(position),
                python::float(extents.x),
                python::float(extents.y),
                python::float(extents.z),
                python::color(color_mode, color, "rl.RED"),
            ),
            Primitive::Sphere {
                position,
                radius,
                color,
            } => format!(
                "rl.draw_sphere({}, {}, {})",
                python::vector3(position),
                python::float(radius),
                python::color(color_mode, color, "rl.BLUE"),
            ),
            Primitive::Grid => python::unrecognized(&self.name),
        }
    }
}

fn generate_name(kind: PrimitiveKind, now: SystemTime) -> String {
    // Pre-epoch clocks yield zero
    let since_epoch = now.duration_since(UNIX_EPOCH).unwrap_or_default();
    format!(
        "{}_{:02}{:06}",
        kind,
        since_epoch.as_secs() % 60,
        since_epoch.subsec_micros()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::renderer::recording::{DrawCall, RecordingRenderer};
    use std::time::Duration;

    #[test]
    fn test_generated_name() {
        let at = UNIX_EPOCH + Duration::from_secs(125) + Duration::from_micros(42);
        assert_eq!(generate_name(PrimitiveKind::Sphere, at), "sphere_05000042");

        let object = SceneObject::grid();
        assert!(object.name().starts_with("grid_"));
        assert_eq!(object.name().len(), "grid_".len() + 8);
    }

    #[test]
    fn test_cube_render_calls() {
        let cube = SceneObject::cube(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(2.0, 2.0, 2.0),
            Rgba::BLUE,
        );
        let mut renderer = RecordingRenderer::default();
        cube.render(&mut renderer);

        assert_eq!(
            renderer.calls,
            vec![
                DrawCall::Cube {
                    center: Vector3::new(1.0, 2.0, 3.0),
                    extents: Vector3::new(2.0, 2.0, 2.0),
                    color: Rgba::BLUE,
                },
                DrawCall::CubeWires {
                    center: Vector3::new(1.0, 2.0, 3.0),
                    extents: Vector3::new(2.0, 2.0, 2.0),
                    color: Rgba::BLACK,
                },
            ]
        );
    }

    #[test]
    fn test_sphere_render_calls() {
        let sphere = SceneObject::sphere(Vector3::new(3.0, 2.0, 0.0), 1.5, Rgba::RED);
        let mut renderer = RecordingRenderer::default();
        sphere.render(&mut renderer);

        assert_eq!(renderer.calls.len(), 2);
        assert_eq!(
            renderer.calls[1],
            DrawCall::SphereWires {
                center: Vector3::new(3.0, 2.0, 0.0),
                radius: 1.5,
                rings: 10,
                slices: 10,
                color: Rgba::BLACK,
            }
        );
    }

    #[test]
    fn test_grid_render_ignores_payload() {
        let mut renderer = RecordingRenderer::default();
        SceneObject::grid().render(&mut renderer);

        assert_eq!(
            renderer.calls,
            vec![DrawCall::Grid {
                slices: 20,
                spacing: 1.0
            }]
        );
    }

    #[test]
    fn test_cube_export_uses_kind_literal() {
        let cube = SceneObject::cube(
            Vector3::new(0.0, 2.0, 0.0),
            Vector3::new(2.0, 2.0, 2.0),
            Rgba::new(12, 200, 31, 255),
        );
        assert_eq!(
            cube.to_export_text(ColorMode::KindLiteral),
            "rl.draw_cube(rl.Vector3(0, 2, 0), 2, 2, 2, rl.RED)"
        );
    }

    #[test]
    fn test_sphere_export() {
        let sphere = SceneObject::sphere(Vector3::new(3.0, 2.0, -0.25), 1.5, Rgba::RED);
        assert_eq!(
            sphere.to_export_text(ColorMode::KindLiteral),
            "rl.draw_sphere(rl.Vector3(3, 2, -0.25), 1.5, rl.BLUE)"
        );
        assert_eq!(
            sphere.to_export_text(ColorMode::StoredColor),
            "rl.draw_sphere(rl.Vector3(3, 2, -0.25), 1.5, rl.Color(230, 41, 55, 255))"
        );
    }

    #[test]
    fn test_grid_export_is_marker() {
        let grid = SceneObject::grid();
        let text = grid.to_export_text(ColorMode::KindLiteral);
        assert!(text.starts_with('#'));
        assert!(text.contains(grid.name()));
    }

    #[test]
    fn test_degenerate_sizes_are_accepted() {
        let cube = SceneObject::cube(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.5),
            Rgba::WHITE,
        );
        assert_eq!(
            cube.to_export_text(ColorMode::KindLiteral),
            "rl.draw_cube(rl.Vector3(0, 0, 0), -1, 0, 0.5, rl.RED)"
        );
    }
}
