//! Offscreen run mode: render frames into a [`HeadlessContext`] and report
//! what was drawn.

use glex_common::{GlexError, Result};
use glex_config::GlexConfig;
use glex_renderer::HeadlessContext;

use crate::scene::Scene;

/// Simulated frame interval.
const FRAME_SECONDS: f32 = 1.0 / 60.0;

/// Largest framebuffer the headless run will allocate (4096×4096, ~320 MiB
/// of color and depth).
pub const MAX_HEADLESS_PIXELS: u64 = 4096 * 4096;

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessReport {
    pub frames: u32,
    pub framebuffer: (u32, u32),
    pub replays: usize,
    pub faces_per_frame: usize,
    pub live_lists: usize,
}

pub fn run(config: &GlexConfig, frames: u32) -> Result<HeadlessReport> {
    let mut scene = Scene::from_config(config)?;
    let (width, height) = scene.application().effective_size();
    let framebuffer = (
        u32::try_from(width).map_err(|_| invalid_size(width, height))?,
        u32::try_from(height).map_err(|_| invalid_size(width, height))?,
    );
    if u64::from(framebuffer.0) * u64::from(framebuffer.1) > MAX_HEADLESS_PIXELS {
        return Err(invalid_size(width, height));
    }
    let mut ctx = HeadlessContext::new(framebuffer.0, framebuffer.1);

    tracing::info!(
        frames,
        width = framebuffer.0,
        height = framebuffer.1,
        "Starting headless run"
    );

    let mut replays = 0;
    let mut faces_per_frame = 0;
    for frame in 0..frames {
        scene.render(&mut ctx, frame as f32 * FRAME_SECONDS)?;
        let drawn = ctx.take_replayed();
        replays += drawn.len();
        faces_per_frame = drawn.iter().map(|r| r.faces.len()).sum();
        tracing::trace!(frame, faces = faces_per_frame, "frame rendered");
    }

    let report = HeadlessReport {
        frames,
        framebuffer: ctx.size(),
        replays,
        faces_per_frame,
        live_lists: ctx.live_lists(),
    };
    tracing::info!(?report, "Headless run complete");
    Ok(report)
}

fn invalid_size(width: i32, height: i32) -> GlexError {
    GlexError::InvalidWindowSize {
        width: width as i64,
        height: height as i64,
    }
}
