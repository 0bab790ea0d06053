//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use glex_renderer::GpuContext;

use super::core::GlexApp;

impl GlexApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_transparent(true)
            .with_inner_size(LogicalSize::new(window_config.width, window_config.height));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let gpu = match pollster::block_on(GpuContext::new(window.clone())) {
            Ok(gpu) => gpu,
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        };

        let scale_factor = window.scale_factor();
        let logical = window.inner_size().to_logical::<u32>(scale_factor);
        self.sync_window_metrics(logical.width, logical.height, scale_factor);

        tracing::info!(
            width = logical.width,
            height = logical.height,
            screen_scale = self.scene.application().screen_scale(),
            sphere_faces = self.scene.sphere().face_count(),
            "Window created and renderer initialized"
        );
        self.gpu = Some(gpu);
        self.window = Some(window);
        true
    }

    /// Push window size (logical pixels) and DPI scale into the application.
    /// Zero sizes (minimized windows) are ignored.
    pub(super) fn sync_window_metrics(&mut self, width: u32, height: u32, scale_factor: f64) {
        let app = self.scene.application_mut();
        if width > 0 && height > 0 {
            if let Err(e) = app.resize(width, height) {
                tracing::warn!("Ignoring window size {width}x{height}: {e}");
            }
        }

        let screen_scale = self.config.window.screen_scale * scale_factor as f32;
        if let Err(e) = app.set_screen_scale(screen_scale) {
            tracing::warn!("Ignoring screen scale {screen_scale}: {e}");
        }
    }
}
