//! Editor application shell
//!
//! Drives the winit event loop: creates the window, the render engine and
//! the UI on resume, routes input to ImGui or the camera, and runs one
//! draw-list/render/apply-actions cycle per redraw.

use cgmath::{Vector3, Zero};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{DeviceEvent, DeviceId, ElementState, Event, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    config::EditorConfig,
    error::EditorError,
    gfx::{
        camera::{CameraController, CameraManager, OrbitCamera},
        draw_list::DrawList,
        rendering::{FrameOutcome, RenderEngine},
    },
    performance::FrameStats,
    session::{EditorAction, EditorSession},
    ui::{editor_panel, UiManager},
};

/// Initial camera eye, looking at the origin
const CAMERA_EYE: [f32; 3] = [10.0, 10.0, 10.0];

pub struct EditorApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

struct AppState {
    config: EditorConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    camera_manager: CameraManager,
    session: EditorSession,
    draw_list: DrawList,
    frame_stats: FrameStats,
    fatal: Option<EditorError>,
}

impl EditorApp {
    /// Create a new editor with the given configuration
    pub fn new(config: EditorConfig) -> Result<Self, EditorError> {
        let event_loop = EventLoop::new()?;

        let aspect = config.window.width as f32 / config.window.height.max(1) as f32;
        let camera = OrbitCamera::looking_from(Vector3::from(CAMERA_EYE), Vector3::zero(), aspect);
        let controller = CameraController::new(0.005, 0.1);

        let session = EditorSession::new(&config);

        Ok(Self {
            event_loop,
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                ui_manager: None,
                camera_manager: CameraManager::new(camera, controller),
                session,
                draw_list: DrawList::new(),
                frame_stats: FrameStats::new(),
                fatal: None,
            },
        })
    }

    /// Runs the event loop until the window closes
    ///
    /// # Errors
    /// Returns the error that stopped the editor, if any
    pub fn run(mut self) -> Result<(), EditorError> {
        self.event_loop.set_control_flow(ControlFlow::Poll);
        self.event_loop.run_app(&mut self.app_state)?;

        match self.app_state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: EditorError) {
        log::error!("{err}");
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), EditorError> {
        let attributes = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));
        let window_handle = Arc::new(event_loop.create_window(attributes)?);
        self.window = Some(window_handle.clone());

        let (width, height) = window_handle.inner_size().into();
        let clear_color = self.config.theme.background.to_wgpu();

        let window_clone = window_handle.clone();
        let renderer = pollster::block_on(async move {
            RenderEngine::new(window_clone, width, height, clear_color).await
        })?;

        self.camera_manager
            .camera
            .resize_projection(width, height);

        let mut ui_manager = UiManager::new(
            renderer.device(),
            renderer.queue(),
            renderer.surface_format(),
            &window_handle,
            &self.config.theme,
        );
        ui_manager.update_display_size(width, height);

        log::info!("Editor ready ({width}x{height})");
        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(renderer);
        Ok(())
    }

    fn redraw(&mut self) -> Result<(), EditorError> {
        let (Some(render_engine), Some(window)) =
            (self.render_engine.as_mut(), self.window.as_ref())
        else {
            return Ok(());
        };

        self.frame_stats.tick();
        self.camera_manager.update();
        render_engine.update(self.camera_manager.camera.uniform);

        self.draw_list.clear();
        self.session.render(&mut self.draw_list);

        let mut actions: Vec<EditorAction> = Vec::new();
        let mut ui_result = Ok(());

        let outcome = match self.ui_manager.as_mut() {
            Some(ui_manager) => {
                let session = &self.session;
                let config = &self.config;
                let fps = self.frame_stats.fps();
                render_engine.render_frame(
                    &self.draw_list,
                    Some(|device: &wgpu::Device,
                          queue: &wgpu::Queue,
                          encoder: &mut wgpu::CommandEncoder,
                          color_attachment: &wgpu::TextureView| {
                        ui_result = ui_manager.draw(
                            device,
                            queue,
                            encoder,
                            window,
                            color_attachment,
                            |ui| actions = editor_panel(ui, session, config, fps),
                        );
                    }),
                )?
            }
            None => render_engine.render_frame(
                &self.draw_list,
                None::<
                    fn(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
                >,
            )?,
        };
        ui_result?;

        if outcome == FrameOutcome::Skipped {
            log::debug!("Frame skipped");
        }

        for action in actions {
            // Failures are logged and shown in the panel
            if let Err(err) = self.session.apply(action) {
                log::debug!("{action:?} failed: {err}");
            }
        }
        Ok(())
    }

    fn handle_keyboard(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        if event.state == ElementState::Pressed
            && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
        {
            event_loop.exit();
            return;
        }
        self.camera_manager.process_keyboard_event(event);
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.init_graphics(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // A drag that ends over the panel must still release the camera
        if let WindowEvent::MouseInput {
            state: ElementState::Released,
            button: MouseButton::Left,
            ..
        } = event
        {
            self.camera_manager.process_mouse_button(ElementState::Released);
        }

        // Handle UI input first
        if let Some(ui_manager) = self.ui_manager.as_mut() {
            let ui_event: Event<()> = Event::WindowEvent {
                window_id,
                event: event.clone(),
            };
            if ui_manager.handle_input(&window, &ui_event) {
                window.request_redraw();
                return;
            }
        }

        match event {
            WindowEvent::KeyboardInput { event, .. } => self.handle_keyboard(event_loop, &event),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.camera_manager.process_mouse_button(state);
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.camera_manager
                    .camera
                    .resize_projection(width, height);
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
                if let Some(ui_manager) = self.ui_manager.as_mut() {
                    ui_manager.update_display_size(width, height);
                }
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    self.fail(event_loop, err);
                }
            }
            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        // Camera ignores raw motion while the UI owns the mouse
        if let Some(ui_manager) = self.ui_manager.as_ref() {
            if ui_manager.wants_mouse() {
                return;
            }
        }

        self.camera_manager.process_event(&event, window);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
