use std::sync::Arc;

use winit::event::WindowEvent;
use winit::keyboard::{Key, NamedKey};
use winit::window::Window;

use crate::animation::WalkAnimation;
use crate::error::ViewerError;
use crate::renderer::Renderer;
use crate::renderer::camera::{CameraController, CameraState};
use crate::scene::{self, SceneOptions};
use crate::settings::Settings;
use crate::ui::{Ui, UiResponse};

pub struct App {
    pub window: Arc<Window>,
    renderer: Renderer,
    camera_controller: CameraController,
    walk: WalkAnimation,
    ui: Ui,
    egui_state: egui_winit::State,
    settings: Settings,
}

pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

impl App {
    pub async fn new(window: Arc<Window>) -> Result<Self, ViewerError> {
        let renderer = Renderer::new(&window).await?;

        let egui_ctx = renderer.egui_context();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::viewport::ViewportId::ROOT,
            &window,
            None,
            None,
            None,
        );

        let settings = Settings::load();

        let mut app = Self {
            window,
            renderer,
            camera_controller: CameraController::new(CameraState::default()),
            walk: WalkAnimation::new(),
            ui: Ui::new(),
            egui_state,
            settings,
        };

        app.renderer
            .set_background(app.settings.colors.background_color);

        Ok(app)
    }

    pub fn handle_event(&mut self, event: &WindowEvent) -> EventResponse {
        // Let egui see the event first; it may claim keyboard focus.
        let egui_response = self.egui_state.on_window_event(&self.window, event);

        match event {
            WindowEvent::CloseRequested => {
                return EventResponse {
                    repaint: false,
                    exit: true,
                };
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if egui_response.consumed {
                    return EventResponse {
                        repaint: egui_response.repaint,
                        exit: false,
                    };
                }
                if let Key::Named(named) = &event.logical_key {
                    if *named == NamedKey::Escape {
                        return EventResponse {
                            repaint: false,
                            exit: true,
                        };
                    }
                    if event.state.is_pressed() && self.camera_controller.on_key(named) {
                        return EventResponse {
                            repaint: true,
                            exit: false,
                        };
                    }
                }
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(*size);
                return EventResponse {
                    repaint: true,
                    exit: false,
                };
            }
            _ => {}
        }

        EventResponse {
            repaint: egui_response.repaint,
            exit: false,
        }
    }

    /// One animation step; invoked by the frame scheduler at a fixed cadence.
    pub fn tick(&mut self) {
        if !self.ui.is_paused() {
            self.walk.tick();
        }
    }

    pub fn reconfigure_surface(&mut self) {
        self.renderer.reconfigure();
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let raw_input = self.egui_state.take_egui_input(&self.window);
        let egui_ctx = self.renderer.egui_context();

        let pose = self.walk.pose();
        let camera = self.camera_controller.state().get_orientation();

        let mut ui_response = UiResponse {
            reset_camera: false,
            colors_changed: false,
        };

        let full_output = egui_ctx.run(raw_input, |ctx| {
            ui_response = self.ui.show(ctx, &mut self.settings, camera, &pose);
        });

        if ui_response.reset_camera {
            self.camera_controller.reset();
        }
        if ui_response.colors_changed {
            self.renderer
                .set_background(self.settings.colors.background_color);
        }

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [
                self.window.inner_size().width,
                self.window.inner_size().height,
            ],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        // Rebuild the frame's geometry from the current pose and upload it.
        let options = SceneOptions {
            show_path: self.settings.display.show_path,
            path_color: self.settings.colors.path_color,
        };
        let vertices = scene::build_scene(&pose, &options);
        self.renderer.upload_scene(&vertices);

        self.renderer.camera = self.camera_controller.state().clone();

        self.renderer
            .render(paint_jobs, full_output.textures_delta, screen_descriptor)
    }
}
