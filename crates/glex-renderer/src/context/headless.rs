//! In-memory graphics context.
//!
//! Keeps a color and depth framebuffer, the matrix and viewport state, and a
//! log of every list replay. Nothing is rasterized; replays are recorded
//! with the state they were issued under so callers can inspect exactly
//! what a GPU context would have drawn.

use crate::matrix::Mat4;
use crate::sphere::Face;

use super::{
    ClearBuffers, ClearColor, ContextError, ContextState, DisplayList, GraphicsContext, ListId,
    ListRegistry, MatrixMode, Viewport,
};

/// Depth value written by a depth clear.
pub const DEFAULT_CLEAR_DEPTH: f32 = 1.0;

/// One `call_list` as observed by the headless context.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayedList {
    pub list: ListId,
    pub faces: Vec<Face>,
    pub projection: Mat4,
    pub model_view: Mat4,
    pub viewport: Viewport,
}

pub struct HeadlessContext {
    width: u32,
    height: u32,
    current: bool,
    state: ContextState,
    color: Vec<[f32; 4]>,
    depth: Vec<f32>,
    lists: ListRegistry<Vec<Face>>,
    replayed: Vec<ReplayedList>,
}

impl HeadlessContext {
    /// A current context with a `width`×`height` framebuffer.
    pub fn new(width: u32, height: u32) -> Self {
        let pixels = width as usize * height as usize;
        Self {
            width,
            height,
            current: true,
            state: ContextState::new(width, height),
            color: vec![[0.0; 4]; pixels],
            depth: vec![DEFAULT_CLEAR_DEPTH; pixels],
            lists: ListRegistry::new(),
            replayed: Vec::new(),
        }
    }

    pub fn make_current(&mut self) {
        self.current = true;
    }

    pub fn release_current(&mut self) {
        self.current = false;
    }

    pub fn is_current(&self) -> bool {
        self.current
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        self.offset(x, y).map(|i| self.color[i])
    }

    pub fn depth_at(&self, x: u32, y: u32) -> Option<f32> {
        self.offset(x, y).map(|i| self.depth[i])
    }

    pub fn color_buffer(&self) -> &[[f32; 4]] {
        &self.color
    }

    pub fn depth_buffer(&self) -> &[f32] {
        &self.depth
    }

    pub fn clear_color(&self) -> ClearColor {
        self.state.clear_color
    }

    pub fn replayed(&self) -> &[ReplayedList] {
        &self.replayed
    }

    /// Drain the replay log, e.g. once per simulated frame.
    pub fn take_replayed(&mut self) -> Vec<ReplayedList> {
        std::mem::take(&mut self.replayed)
    }

    /// Lists still alive after collecting every dropped handle.
    pub fn live_lists(&mut self) -> usize {
        self.lists.collect_released();
        self.lists.len()
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    fn ensure_current(&mut self) -> Result<(), ContextError> {
        self.lists.collect_released();
        if self.current {
            Ok(())
        } else {
            Err(ContextError::NotCurrent)
        }
    }
}

impl GraphicsContext for HeadlessContext {
    fn set_viewport(&mut self, viewport: Viewport) -> Result<(), ContextError> {
        self.ensure_current()?;
        self.state.viewport = viewport;
        Ok(())
    }

    fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    fn load_matrix(&mut self, mode: MatrixMode, matrix: &Mat4) -> Result<(), ContextError> {
        self.ensure_current()?;
        *self.state.matrix_mut(mode) = *matrix;
        Ok(())
    }

    fn matrix(&self, mode: MatrixMode) -> Mat4 {
        *self.state.matrix(mode)
    }

    fn set_clear_color(&mut self, color: ClearColor) -> Result<(), ContextError> {
        self.ensure_current()?;
        self.state.clear_color = color;
        Ok(())
    }

    fn clear(&mut self, buffers: ClearBuffers) -> Result<(), ContextError> {
        self.ensure_current()?;
        // Clears ignore the viewport, as in GL.
        if buffers.color {
            let c = self.state.clear_color;
            self.color.fill([c.r, c.g, c.b, c.a]);
        }
        if buffers.depth {
            self.depth.fill(DEFAULT_CLEAR_DEPTH);
        }
        Ok(())
    }

    fn create_list(&mut self, faces: &[Face]) -> Result<DisplayList, ContextError> {
        self.ensure_current()?;
        let list = self.lists.insert(faces.to_vec(), faces.len());
        tracing::debug!(
            list = list.id().index(),
            faces = faces.len(),
            "created display list"
        );
        Ok(list)
    }

    fn call_list(&mut self, list: &DisplayList) -> Result<(), ContextError> {
        self.ensure_current()?;
        let faces = self.lists.get(list)?.clone();
        self.replayed.push(ReplayedList {
            list: list.id(),
            faces,
            projection: self.state.projection,
            model_view: self.state.model_view,
            viewport: self.state.viewport,
        });
        Ok(())
    }
}
