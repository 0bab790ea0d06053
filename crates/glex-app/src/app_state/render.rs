//! Frame rendering logic.

use glex_renderer::ContextError;

use super::core::GlexApp;

/// Tracks the scene error currently being reported, so an error that repeats
/// every frame is logged once.
#[derive(Debug, Default)]
pub(super) struct RenderErrorLog {
    current: Option<String>,
}

impl RenderErrorLog {
    /// Record a failure. Returns `true` if it differs from the one already
    /// reported.
    pub(super) fn failed(&mut self, message: String) -> bool {
        if self.current.as_deref() == Some(message.as_str()) {
            return false;
        }
        self.current = Some(message);
        true
    }

    /// Record a successful frame. Returns `true` if an error was pending.
    pub(super) fn recovered(&mut self) -> bool {
        self.current.take().is_some()
    }
}

impl GlexApp {
    /// Render one frame into the window surface.
    ///
    /// Returns `false` when the error is unrecoverable and the app should exit.
    pub(super) fn render_frame(&mut self) -> bool {
        let Some(gpu) = self.gpu.as_mut() else {
            return true;
        };

        match gpu.begin_frame() {
            Ok(()) => {}
            Err(ContextError::OutOfMemory) => {
                tracing::error!("GPU out of memory, exiting");
                return false;
            }
            Err(e) => {
                tracing::warn!("Skipping frame: {e}");
                return true;
            }
        }

        let elapsed = self.started.elapsed().as_secs_f32();
        match self.scene.render(gpu, elapsed) {
            Ok(()) => {
                if self.render_errors.recovered() {
                    tracing::info!("Rendering recovered");
                }
            }
            Err(e) => {
                let message = e.to_string();
                if self.render_errors.failed(message.clone()) {
                    tracing::error!("Render error: {message}");
                } else {
                    tracing::debug!("Render error repeated: {message}");
                }
            }
        }

        if let Err(e) = gpu.end_frame() {
            tracing::error!("Failed to submit frame: {e}");
        }
        true
    }
}
