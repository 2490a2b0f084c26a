//! Editor configuration
//!
//! Plain structs with defaults matching the stock editor layout, tweaked
//! through builder-style `with_*` methods.

use std::path::{Path, PathBuf};

use crate::{
    export::{ColorMode, ExportOptions, DEFAULT_EXPORT_FILE},
    gfx::scene::Rgba,
};

/// Main window size and title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            title: "RayBuilder - 3D Scene Generator".to_string(),
        }
    }
}

/// Dark editor palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Viewport clear color
    pub background: Rgba,
    pub panel: Rgba,
    pub border: Rgba,
    pub text: Rgba,
    /// Buttons
    pub accent: Rgba,
    pub hover: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgba::rgb(30, 30, 30),
            panel: Rgba::rgb(45, 45, 45),
            border: Rgba::rgb(60, 60, 60),
            text: Rgba::WHITE,
            accent: Rgba::rgb(66, 135, 245),
            hover: Rgba::rgb(70, 70, 70),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub window: WindowConfig,
    pub theme: Theme,
    /// Width of the properties panel on the right edge, in pixels
    pub panel_width: f32,
    /// Destination of the generated script
    pub export_path: PathBuf,
    pub export: ExportOptions,
    /// Seed new sessions with a reference grid
    pub startup_grid: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            theme: Theme::default(),
            panel_width: 250.0,
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            export: ExportOptions::default(),
            startup_grid: true,
        }
    }
}

impl EditorConfig {
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_panel_width(mut self, width: f32) -> Self {
        self.panel_width = width;
        self
    }

    pub fn with_export_path(mut self, path: impl AsRef<Path>) -> Self {
        self.export_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.export.color_mode = color_mode;
        self
    }

    pub fn with_startup_grid(mut self, enabled: bool) -> Self {
        self.startup_grid = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.window.width, 1200);
        assert_eq!(config.window.height, 800);
        assert_eq!(config.window.title, "RayBuilder - 3D Scene Generator");
        assert_eq!(config.panel_width, 250.0);
        assert_eq!(config.export_path, PathBuf::from("generated_scene.py"));
        assert_eq!(config.export.color_mode, ColorMode::KindLiteral);
        assert!(config.startup_grid);
        assert_eq!(config.theme.background, Rgba::rgb(30, 30, 30));
        assert_eq!(config.theme.accent, Rgba::rgb(66, 135, 245));
    }

    #[test]
    fn test_builder_methods() {
        let config = EditorConfig::default()
            .with_window_size(640, 480)
            .with_title("Scratch")
            .with_panel_width(300.0)
            .with_export_path("out/scene.py")
            .with_color_mode(ColorMode::StoredColor)
            .with_startup_grid(false);

        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);
        assert_eq!(config.window.title, "Scratch");
        assert_eq!(config.panel_width, 300.0);
        assert_eq!(config.export_path, PathBuf::from("out/scene.py"));
        assert_eq!(config.export.color_mode, ColorMode::StoredColor);
        assert!(!config.startup_grid);
    }
}
