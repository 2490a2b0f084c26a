//! Fixed parts of the generated script.
//!
//! Object statements are inserted between [`HEADER`] and [`FOOTER`], inside
//! the body of the frame loop.

/// Indentation of a statement inside `main()`'s frame loop
pub const STATEMENT_INDENT: &str = "        ";

/// Window setup, camera and the start of the frame loop, ending with the
/// baseline ground grid.
pub const HEADER: &str = r#"
import pyray as rl

# Generated by RayBuilder
def main():
    rl.init_window(800, 600, "Generated Scene")
    rl.set_target_fps(60)

    camera = rl.Camera3D()
    camera.position = rl.Vector3(10.0, 10.0, 10.0)
    camera.target = rl.Vector3(0.0, 0.0, 0.0)
    camera.up = rl.Vector3(0.0, 1.0, 0.0)
    camera.fovy = 45.0
    camera.projection = rl.CAMERA_PERSPECTIVE

    while not rl.window_should_close():
        rl.update_camera(camera, rl.CAMERA_ORBITAL)

        rl.begin_drawing()
        rl.clear_background(rl.RAYWHITE)
        rl.begin_mode_3d(camera)

        rl.draw_grid(20, 1.0)
"#;

/// Closes the 3D context, draws the FPS counter, ends the loop and shuts the
/// window down.
pub const FOOTER: &str = r#"
        rl.end_mode_3d()
        rl.draw_fps(10, 10)
        rl.end_drawing()

    rl.close_window()

if __name__ == "__main__":
    main()
"#;
