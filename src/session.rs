//! Editor session state
//!
//! One [`EditorSession`] owns everything the editor mutates: the scene, the
//! exporter and the outcome of the most recent export. UI code never touches
//! the scene directly; it returns [`EditorAction`]s that the shell applies
//! here after the frame.

use std::path::{Path, PathBuf};

use cgmath::Vector3;
use log::error;

use crate::{
    config::EditorConfig,
    export::{CodeExporter, ExportError, ExportReport},
    gfx::{
        renderer::Renderer,
        scene::{Rgba, Scene, SceneObject},
    },
};

/// Requests raised by the editor panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    AddCube,
    AddSphere,
    Export,
}

/// Result of the last export, as shown in the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Succeeded(ExportReport),
    Failed(String),
}

pub struct EditorSession {
    scene: Scene,
    exporter: CodeExporter,
    export_path: PathBuf,
    last_export: Option<ExportStatus>,
}

impl EditorSession {
    /// Starts a session, seeding a reference grid if configured
    pub fn new(config: &EditorConfig) -> Self {
        let mut scene = Scene::new();
        if config.startup_grid {
            scene.push(SceneObject::grid());
        }

        Self {
            scene,
            exporter: CodeExporter::new(config.export),
            export_path: config.export_path.clone(),
            last_export: None,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    pub fn last_export(&self) -> Option<&ExportStatus> {
        self.last_export.as_ref()
    }

    /// Appends a 2x2x2 red cube centered at (0, 2, 0)
    pub fn add_cube(&mut self) {
        self.scene.push(SceneObject::cube(
            Vector3::new(0.0, 2.0, 0.0),
            Vector3::new(2.0, 2.0, 2.0),
            Rgba::RED,
        ));
    }

    /// Appends a blue sphere of radius 1.5 centered at (3, 2, 0)
    pub fn add_sphere(&mut self) {
        self.scene
            .push(SceneObject::sphere(Vector3::new(3.0, 2.0, 0.0), 1.5, Rgba::BLUE));
    }

    /// Writes the scene script to the configured destination
    pub fn export(&mut self) -> Result<ExportReport, ExportError> {
        match self.exporter.export(&self.scene, &self.export_path) {
            Ok(report) => {
                self.last_export = Some(ExportStatus::Succeeded(report.clone()));
                Ok(report)
            }
            Err(err) => {
                error!("Export failed: {err}");
                self.last_export = Some(ExportStatus::Failed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Applies one panel action
    pub fn apply(&mut self, action: EditorAction) -> Result<(), ExportError> {
        match action {
            EditorAction::AddCube => self.add_cube(),
            EditorAction::AddSphere => self.add_sphere(),
            EditorAction::Export => {
                self.export()?;
            }
        }
        Ok(())
    }

    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        self.scene.render(renderer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::renderer::recording::{DrawCall, RecordingRenderer};
    use crate::gfx::scene::{Primitive, PrimitiveKind};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "raybuilder_session_{}_{}.py",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_new_session_seeds_grid() {
        let session = EditorSession::new(&EditorConfig::default());
        assert_eq!(session.scene().len(), 1);
        assert_eq!(session.scene().objects()[0].kind(), PrimitiveKind::Grid);
        assert!(session.last_export().is_none());
    }

    #[test]
    fn test_new_session_without_grid() {
        let config = EditorConfig::default().with_startup_grid(false);
        let session = EditorSession::new(&config);
        assert!(session.scene().is_empty());
    }

    #[test]
    fn test_add_cube_and_sphere_use_fixed_parameters() {
        let config = EditorConfig::default().with_startup_grid(false);
        let mut session = EditorSession::new(&config);
        session.apply(EditorAction::AddCube).unwrap();
        session.apply(EditorAction::AddSphere).unwrap();

        let objects = session.scene().objects();
        assert_eq!(
            objects[0].primitive(),
            &Primitive::Cube {
                position: Vector3::new(0.0, 2.0, 0.0),
                extents: Vector3::new(2.0, 2.0, 2.0),
                color: Rgba::RED,
            }
        );
        assert_eq!(
            objects[1].primitive(),
            &Primitive::Sphere {
                position: Vector3::new(3.0, 2.0, 0.0),
                radius: 1.5,
                color: Rgba::BLUE,
            }
        );
    }

    #[test]
    fn test_export_records_success() {
        let path = temp_path("success");
        let config = EditorConfig::default().with_export_path(&path);
        let mut session = EditorSession::new(&config);
        session.add_cube();

        session.apply(EditorAction::Export).unwrap();

        match session.last_export() {
            Some(ExportStatus::Succeeded(report)) => {
                assert_eq!(report.path, path);
                assert_eq!(report.object_count, 2);
            }
            other => panic!("unexpected status {other:?}"),
        }
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("rl.draw_cube(rl.Vector3(0, 2, 0), 2, 2, 2, rl.RED)"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_export_failure_is_recorded_and_scene_kept() {
        let path = std::env::temp_dir()
            .join(format!("raybuilder_missing_{}", std::process::id()))
            .join("scene.py");
        let config = EditorConfig::default().with_export_path(&path);
        let mut session = EditorSession::new(&config);
        session.add_sphere();

        let err = session.apply(EditorAction::Export).unwrap_err();
        assert_eq!(err.path(), path.as_path());
        assert!(matches!(
            session.last_export(),
            Some(ExportStatus::Failed(_))
        ));
        assert_eq!(session.scene().len(), 2);
    }

    #[test]
    fn test_render_delegates_to_scene() {
        let mut session = EditorSession::new(&EditorConfig::default());
        session.add_cube();

        let mut renderer = RecordingRenderer::default();
        session.render(&mut renderer);

        assert!(matches!(renderer.calls.first(), Some(DrawCall::Grid { .. })));
        assert!(renderer
            .calls
            .iter()
            .any(|call| matches!(call, DrawCall::Cube { .. })));
    }
}
