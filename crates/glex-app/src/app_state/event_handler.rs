//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use super::core::GlexApp;

impl ApplicationHandler for GlexApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            self.failed = true;
            event_loop.exit();
            return;
        }

        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                tracing::info!("Escape pressed, exiting");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(gpu) = self.gpu.as_mut() {
                        gpu.resize(size.width, size.height);
                    }
                    if let Some(window) = self.window.clone() {
                        let scale_factor = window.scale_factor();
                        let logical = size.to_logical::<u32>(scale_factor);
                        self.sync_window_metrics(logical.width, logical.height, scale_factor);
                    }
                    tracing::debug!(
                        width = size.width,
                        height = size.height,
                        camera = ?self.scene.application().camera().position(),
                        "Window resized"
                    );
                    self.request_redraw();
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                tracing::debug!(scale_factor, "Scale factor changed");
                let (width, height) = self.scene.application().window_size();
                self.sync_window_metrics(width, height, scale_factor);
            }

            WindowEvent::RedrawRequested => {
                if !self.render_frame() {
                    self.failed = true;
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // The sphere spins continuously.
        self.request_redraw();
    }
}
