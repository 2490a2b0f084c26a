use log::debug;

use crate::gfx::renderer::Renderer;

use super::object::{PrimitiveKind, SceneObject};

/// Ordered, append-only collection of scene objects.
///
/// Insertion order is both draw order and export order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Appends an object at the end of the scene
    pub fn push(&mut self, object: SceneObject) {
        debug!("adding '{}' to scene", object.name());
        self.objects.push(object);
    }

    /// Objects in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, SceneObject> {
        self.objects.iter()
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Draws every object in insertion order
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for object in &self.objects {
            object.render(renderer);
        }
    }

    /// Gets statistics about the scene
    pub fn statistics(&self) -> SceneStatistics {
        let mut stats = SceneStatistics {
            object_count: self.objects.len(),
            ..Default::default()
        };

        for object in &self.objects {
            match object.kind() {
                PrimitiveKind::Cube => stats.cube_count += 1,
                PrimitiveKind::Sphere => stats.sphere_count += 1,
                PrimitiveKind::Grid => stats.grid_count += 1,
            }
        }

        stats
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a SceneObject;
    type IntoIter = std::slice::Iter<'a, SceneObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Scene statistics for UI display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub cube_count: usize,
    pub sphere_count: usize,
    pub grid_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        renderer::recording::{DrawCall, RecordingRenderer},
        scene::color::Rgba,
    };
    use cgmath::Vector3;

    fn sample_scene() -> Scene {
        let mut scene = Scene::new();
        scene.push(SceneObject::grid());
        scene.push(SceneObject::cube(
            Vector3::new(0.0, 2.0, 0.0),
            Vector3::new(2.0, 2.0, 2.0),
            Rgba::RED,
        ));
        scene.push(SceneObject::sphere(Vector3::new(3.0, 2.0, 0.0), 1.5, Rgba::BLUE));
        scene
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let scene = sample_scene();
        let kinds: Vec<_> = scene.iter().map(SceneObject::kind).collect();
        assert_eq!(
            kinds,
            vec![PrimitiveKind::Grid, PrimitiveKind::Cube, PrimitiveKind::Sphere]
        );

        // Restartable: a second pass yields the same sequence
        let again: Vec<_> = (&scene).into_iter().map(SceneObject::kind).collect();
        assert_eq!(kinds, again);
    }

    #[test]
    fn test_render_in_order() {
        let scene = sample_scene();
        let mut renderer = RecordingRenderer::default();
        scene.render(&mut renderer);

        assert_eq!(renderer.calls.len(), 5);
        assert!(matches!(renderer.calls[0], DrawCall::Grid { .. }));
        assert!(matches!(renderer.calls[1], DrawCall::Cube { .. }));
        assert!(matches!(renderer.calls[2], DrawCall::CubeWires { .. }));
        assert!(matches!(renderer.calls[3], DrawCall::Sphere { .. }));
        assert!(matches!(renderer.calls[4], DrawCall::SphereWires { .. }));
    }

    #[test]
    fn test_statistics() {
        let stats = sample_scene().statistics();
        assert_eq!(
            stats,
            SceneStatistics {
                object_count: 3,
                cube_count: 1,
                sphere_count: 1,
                grid_count: 1,
            }
        );
        assert_eq!(Scene::new().statistics(), SceneStatistics::default());
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::default();
        assert!(scene.is_empty());
        assert_eq!(scene.len(), 0);
        assert_eq!(scene.iter().count(), 0);
    }
}
