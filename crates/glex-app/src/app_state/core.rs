//! GlexApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use glex_config::GlexConfig;
use glex_renderer::GpuContext;

use crate::scene::Scene;

use super::render::RenderErrorLog;

pub struct GlexApp {
    pub(super) config: GlexConfig,
    pub(super) scene: Scene,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) gpu: Option<GpuContext>,

    pub(super) started: Instant,
    pub(super) render_errors: RenderErrorLog,
    // Set when setup or rendering hit an unrecoverable error
    pub(super) failed: bool,
}

impl GlexApp {
    pub fn new(config: GlexConfig, scene: Scene) -> Self {
        Self {
            config,
            scene,
            window: None,
            gpu: None,
            started: Instant::now(),
            render_errors: RenderErrorLog::default(),
            failed: false,
        }
    }

    /// Whether the event loop stopped because of an error.
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub(super) fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
