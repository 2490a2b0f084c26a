// src/ui/panel.rs
//! Editor panels
//!
//! The toolbar with the add buttons, the properties panel on the right edge
//! and the FPS readout. Panels only read the session; clicks come back as
//! [`EditorAction`]s for the shell to apply after the frame.

use imgui::{Condition, Ui};

use crate::{
    config::EditorConfig,
    session::{EditorAction, EditorSession, ExportStatus},
};

const MARGIN: f32 = 10.0;
const ADD_BUTTON_SIZE: [f32; 2] = [100.0, 40.0];
const EXPORT_BUTTON_HEIGHT: f32 = 50.0;

/// Builds every editor window for this frame
///
/// # Arguments
/// * `ui` - ImGui UI context
/// * `session` - Session to display
/// * `config` - Layout and palette
/// * `fps` - Frames per second for the readout
pub fn editor_panel(
    ui: &Ui,
    session: &EditorSession,
    config: &EditorConfig,
    fps: f32,
) -> Vec<EditorAction> {
    let display_size = ui.io().display_size;
    // Guard against invalid display size (minimized window)
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return Vec::new();
    }

    let mut actions = Vec::new();
    toolbar(ui, &mut actions);
    properties_panel(ui, session, config, display_size, &mut actions);
    fps_overlay(ui, display_size, fps);
    actions
}

/// `+ CUBE` and `+ SPHERE` in the top-left corner
fn toolbar(ui: &Ui, actions: &mut Vec<EditorAction>) {
    ui.window("##toolbar")
        .position([MARGIN, MARGIN], Condition::Always)
        .always_auto_resize(true)
        .no_decoration()
        .bg_alpha(0.0)
        .build(|| {
            if ui.button_with_size("+ CUBE", ADD_BUTTON_SIZE) {
                actions.push(EditorAction::AddCube);
            }
            ui.same_line();
            if ui.button_with_size("+ SPHERE", ADD_BUTTON_SIZE) {
                actions.push(EditorAction::AddSphere);
            }
        });
}

fn properties_panel(
    ui: &Ui,
    session: &EditorSession,
    config: &EditorConfig,
    display_size: [f32; 2],
    actions: &mut Vec<EditorAction>,
) {
    let panel_width = config.panel_width.min(display_size[0]);

    ui.window("##properties")
        .position([display_size[0] - panel_width, 0.0], Condition::Always)
        .size([panel_width, display_size[1]], Condition::Always)
        .no_decoration()
        .movable(false)
        .build(|| {
            ui.text("PROPERTIES");
            ui.separator();

            let stats = session.scene().statistics();
            ui.text(format!("Objects: {}", stats.object_count));
            ui.text_colored(
                config.theme.border.to_f32_array(),
                format!(
                    "{} cube(s), {} sphere(s), {} grid(s)",
                    stats.cube_count, stats.sphere_count, stats.grid_count
                ),
            );
            ui.spacing();

            let list_height = (display_size[1] - 220.0).max(60.0);
            ui.child_window("object_list")
                .size([0.0, list_height])
                .border(true)
                .build(|| {
                    if session.scene().is_empty() {
                        ui.text_disabled("Scene is empty");
                    }
                    for (index, object) in session.scene().iter().enumerate() {
                        ui.text(format!("{index:>2}  {:<7}{}", object.kind(), object.name()));
                    }
                });

            ui.spacing();
            export_status(ui, session, config);

            let button_width = ui.content_region_avail()[0];
            ui.set_cursor_pos([
                ui.cursor_pos()[0],
                display_size[1] - EXPORT_BUTTON_HEIGHT - MARGIN,
            ]);
            if ui.button_with_size("EXPORT PY", [button_width, EXPORT_BUTTON_HEIGHT]) {
                actions.push(EditorAction::Export);
            }
        });
}

fn export_status(ui: &Ui, session: &EditorSession, config: &EditorConfig) {
    match session.last_export() {
        Some(ExportStatus::Succeeded(report)) => {
            ui.text_colored(config.theme.accent.to_f32_array(), "Exported");
            ui.text_wrapped(report.path.display().to_string());
        }
        Some(ExportStatus::Failed(message)) => {
            ui.text_colored([0.9, 0.3, 0.3, 1.0], "Export failed");
            ui.text_wrapped(message);
        }
        None => {
            ui.text_disabled(format!("Target: {}", session.export_path().display()));
        }
    }
}

/// FPS readout in the bottom-left corner
fn fps_overlay(ui: &Ui, display_size: [f32; 2], fps: f32) {
    ui.window("##fps")
        .position([MARGIN, display_size[1] - 30.0], Condition::Always)
        .always_auto_resize(true)
        .no_decoration()
        .no_inputs()
        .bg_alpha(0.0)
        .build(|| {
            ui.text_colored([0.0, 0.89, 0.19, 1.0], format!("{fps:.0} FPS"));
        });
}
