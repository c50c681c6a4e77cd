use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

mod animation;
mod app;
mod error;
mod renderer;
mod scene;
mod scheduler;
mod settings;
mod ui;

pub const CONFY_APP_NAME: &str = "robowalk-rs";

/// Redraw cadence; one animation step per interval.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

struct AppHandler {
    app: Option<app::App>,
    scheduler: scheduler::FrameScheduler,
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("RoboWalk-RS - Walking Robot Viewer")
            .with_inner_size(winit::dpi::LogicalSize::new(900.0, 900.0));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => window,
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(app::App::new(Arc::new(window))) {
            Ok(app) => self.app = Some(app),
            Err(e) => {
                log::error!("Failed to initialize viewer: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(app) = &mut self.app else { return };

        if let WindowEvent::RedrawRequested = event {
            match app.render() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    app.reconfigure_surface();
                }
                Err(e) => log::warn!("Render error: {e:?}"),
            }
            return;
        }

        let response = app.handle_event(&event);
        if response.repaint {
            app.window.request_redraw();
        }
        if response.exit {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            if self.scheduler.tick_due(Instant::now()) {
                app.tick();
                app.window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.scheduler.next_deadline()));
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new()?;

    let mut handler = AppHandler {
        app: None,
        scheduler: scheduler::FrameScheduler::new(FRAME_INTERVAL, Instant::now()),
    };

    event_loop.run_app(&mut handler)?;

    Ok(())
}
