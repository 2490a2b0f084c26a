use std::{
    fmt,
    path::{Path, PathBuf},
};

use log::info;

use crate::gfx::scene::Scene;

use super::{
    template::{FOOTER, HEADER, STATEMENT_INDENT},
    ExportOptions,
};

/// Error returned when the generated script cannot be written
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("failed to write scene script to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Destination the export was aimed at
    pub fn path(&self) -> &Path {
        match self {
            ExportError::Write { path, .. } => path,
        }
    }
}

/// Summary of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub object_count: usize,
    pub bytes_written: usize,
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wrote {} object(s) to {}",
            self.object_count,
            self.path.display()
        )
    }
}

/// Turns a [`Scene`] into a standalone pyray script.
///
/// The exporter holds no state besides its options: the same scene always
/// produces the same text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodeExporter {
    options: ExportOptions,
}

impl CodeExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ExportOptions {
        self.options
    }

    /// Builds the complete script: header, one statement per object in scene
    /// order, footer.
    pub fn render_script(&self, scene: &Scene) -> String {
        let mut script = String::with_capacity(HEADER.len() + FOOTER.len() + scene.len() * 64);
        script.push_str(HEADER);

        for object in scene {
            script.push_str(STATEMENT_INDENT);
            script.push_str(&object.to_export_text(self.options.color_mode));
            script.push('\n');
        }

        script.push_str(FOOTER);
        script
    }

    /// Writes the script for `scene` to `destination`, replacing any existing
    /// file.
    ///
    /// The whole document is produced before the file is touched and written
    /// in one call, so later changes to the scene never affect a finished
    /// export.
    pub fn export(
        &self,
        scene: &Scene,
        destination: impl AsRef<Path>,
    ) -> Result<ExportReport, ExportError> {
        let path = destination.as_ref();
        let script = self.render_script(scene);

        std::fs::write(path, &script).map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        let report = ExportReport {
            path: path.to_path_buf(),
            object_count: scene.len(),
            bytes_written: script.len(),
        };
        info!("Exported scene: {report}");

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        export::ColorMode,
        gfx::scene::{Rgba, SceneObject},
    };
    use cgmath::Vector3;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("raybuilder_{}_{}", std::process::id(), name))
    }

    /// Lines between the fixed header and footer
    fn body(script: &str) -> &str {
        let rest = script.strip_prefix(HEADER).expect("header missing");
        rest.strip_suffix(FOOTER).expect("footer missing")
    }

    fn cube_at(x: f32) -> SceneObject {
        SceneObject::cube(Vector3::new(x, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0), Rgba::RED)
    }

    #[test]
    fn test_order_preserved() {
        let mut scene = Scene::new();
        scene.push(cube_at(1.0));
        scene.push(SceneObject::sphere(Vector3::new(0.0, 0.0, 0.0), 2.0, Rgba::BLUE));
        scene.push(cube_at(3.0));

        let script = CodeExporter::default().render_script(&scene);
        let lines: Vec<&str> = body(&script).lines().collect();

        assert_eq!(
            lines,
            vec![
                "        rl.draw_cube(rl.Vector3(1, 0, 0), 1, 1, 1, rl.RED)",
                "        rl.draw_sphere(rl.Vector3(0, 0, 0), 2, rl.BLUE)",
                "        rl.draw_cube(rl.Vector3(3, 0, 0), 1, 1, 1, rl.RED)",
            ]
        );
    }

    #[test]
    fn test_header_and_footer_do_not_depend_on_scene() {
        let exporter = CodeExporter::default();
        let empty = exporter.render_script(&Scene::new());

        let mut scene = Scene::new();
        for i in 0..5 {
            scene.push(cube_at(i as f32));
        }
        let full = exporter.render_script(&scene);

        assert!(empty.starts_with(HEADER) && empty.ends_with(FOOTER));
        assert!(full.starts_with(HEADER) && full.ends_with(FOOTER));
        assert_eq!(body(&full).lines().count(), 5);
    }

    #[test]
    fn test_empty_scene_export() {
        let path = temp_path("empty.py");
        let report = CodeExporter::default()
            .export(&Scene::new(), &path)
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, format!("{HEADER}{FOOTER}"));
        assert_eq!(report.object_count, 0);
        assert_eq!(report.bytes_written, written.len());
        assert_eq!(report.path, path);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_export_is_idempotent() {
        let path = temp_path("idempotent.py");
        let mut scene = Scene::new();
        scene.push(SceneObject::grid());
        scene.push(cube_at(2.5));

        let exporter = CodeExporter::default();
        exporter.export(&scene, &path).unwrap();
        let first = std::fs::read(&path).unwrap();
        exporter.export(&scene, &path).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let path = temp_path("overwrite.py");
        std::fs::write(&path, "stale contents that are much longer than nothing").unwrap();

        CodeExporter::default()
            .export(&Scene::new(), &path)
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            format!("{HEADER}{FOOTER}")
        );
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unrecognized_object_keeps_neighbours() {
        let mut scene = Scene::new();
        scene.push(cube_at(1.0));
        let grid = SceneObject::grid();
        let grid_name = grid.name().to_string();
        scene.push(grid);
        scene.push(cube_at(2.0));

        let script = CodeExporter::default().render_script(&scene);
        let lines: Vec<&str> = body(&script).lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "        rl.draw_cube(rl.Vector3(1, 0, 0), 1, 1, 1, rl.RED)");
        assert_eq!(lines[1], format!("        # unrecognized object: {grid_name}"));
        assert_eq!(lines[2], "        rl.draw_cube(rl.Vector3(2, 0, 0), 1, 1, 1, rl.RED)");
    }

    #[test]
    fn test_literal_cube_scenario() {
        let path = temp_path("out.txt");
        let mut scene = Scene::new();
        scene.push(SceneObject::cube(
            Vector3::new(0.0, 2.0, 0.0),
            Vector3::new(2.0, 2.0, 2.0),
            Rgba::new(10, 220, 10, 255),
        ));

        CodeExporter::default().export(&scene, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();

        assert_eq!(
            body(&written),
            "        rl.draw_cube(rl.Vector3(0, 2, 0), 2, 2, 2, rl.RED)\n"
        );
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_stored_color_mode() {
        let mut scene = Scene::new();
        scene.push(SceneObject::cube(
            Vector3::new(0.0, 2.0, 0.0),
            Vector3::new(2.0, 2.0, 2.0),
            Rgba::new(10, 220, 10, 255),
        ));

        let exporter = CodeExporter::new(ExportOptions {
            color_mode: ColorMode::StoredColor,
        });
        assert_eq!(
            body(&exporter.render_script(&scene)),
            "        rl.draw_cube(rl.Vector3(0, 2, 0), 2, 2, 2, rl.Color(10, 220, 10, 255))\n"
        );
    }

    #[test]
    fn test_write_failure_is_reported() {
        let path = temp_path("missing_dir").join("nested").join("scene.py");

        let err = CodeExporter::default()
            .export(&Scene::new(), &path)
            .unwrap_err();

        assert_eq!(err.path(), path.as_path());
        let ExportError::Write { source, .. } = &err;
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("scene.py"));
    }

    #[test]
    fn test_export_is_a_snapshot() {
        let path = temp_path("snapshot.py");
        let mut scene = Scene::new();
        scene.push(cube_at(1.0));

        CodeExporter::default().export(&scene, &path).unwrap();
        scene.push(cube_at(9.0));

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(body(&written).lines().count(), 1);
        std::fs::remove_file(&path).ok();
    }
}
