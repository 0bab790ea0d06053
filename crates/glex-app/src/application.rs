//! Window-size bookkeeping and the projection/clear helpers built on it.
//!
//! All reshapes read the stored window size and screen scale, validate the
//! resulting pixel size, and only then touch the graphics context. A
//! rejected reshape leaves the context exactly as it was. Camera changes are
//! staged on a copy and kept only once the context has accepted them.

use glex_common::{GlexError, Result};
use glex_config::schema::WindowConfig;
use glex_renderer::{
    Camera, ClearBuffers, ClearColor, GraphicsContext, Projection, Viewport,
};

/// Near-transparent black.
pub const CLEAR_COLOR: ClearColor = ClearColor::new(0.0, 0.0, 0.0, 0.75);

#[derive(Debug, Clone)]
pub struct Application {
    window_width: u32,
    window_height: u32,
    screen_scale: f32,
    camera: Camera,
}

impl Application {
    pub fn new(width: u32, height: u32, screen_scale: f32) -> Result<Self> {
        check_window_size(width, height)?;
        check_scale(screen_scale)?;
        Ok(Self {
            window_width: width,
            window_height: height,
            screen_scale,
            camera: Camera::default(),
        })
    }

    pub fn from_config(config: &WindowConfig) -> Result<Self> {
        Self::new(config.width, config.height, config.screen_scale)
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    pub fn screen_scale(&self) -> f32 {
        self.screen_scale
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Record a new window size, in logical pixels.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        check_window_size(width, height)?;
        self.window_width = width;
        self.window_height = height;
        Ok(())
    }

    pub fn set_screen_scale(&mut self, screen_scale: f32) -> Result<()> {
        check_scale(screen_scale)?;
        self.screen_scale = screen_scale;
        Ok(())
    }

    /// Window size multiplied by the screen scale, truncated toward zero.
    pub fn effective_size(&self) -> (i32, i32) {
        (
            (self.window_width as f32 * self.screen_scale) as i32,
            (self.window_height as f32 * self.screen_scale) as i32,
        )
    }

    /// Perspective projection and full viewport for the effective size.
    pub fn reshape_frustum<C: GraphicsContext + ?Sized>(&mut self, ctx: &mut C) -> Result<()> {
        let (width, height) = self.effective_size();
        check_pixel_size(width, height)?;

        let mut camera = self.camera;
        camera.set_projection(Projection::perspective_for(width, height));
        ctx.set_viewport(Viewport::new(0, 0, width, height))?;
        camera.apply_projection(ctx)?;
        self.camera = camera;
        Ok(())
    }

    /// Pixel-space orthographic projection with an untranslated model-view.
    ///
    /// The projection always spans the window size; `scale` only widens the
    /// viewport horizontally.
    pub fn reshape_ortho<C: GraphicsContext + ?Sized>(
        &mut self,
        ctx: &mut C,
        scale: f32,
    ) -> Result<()> {
        check_scale(scale)?;
        let width = (self.window_width as f32 * scale * self.screen_scale) as i32;
        let height = (self.window_height as f32 * self.screen_scale) as i32;
        check_pixel_size(width, height)?;

        let mut camera = self.camera;
        camera.set_projection(Projection::screen_ortho(
            self.window_width,
            self.window_height,
        ));
        camera.apply_projection(ctx)?;
        camera.translate_to(0.0, 0.0, 0.0);
        camera.apply_view(ctx)?;
        ctx.set_viewport(Viewport::new(0, 0, width, height))?;
        self.camera = camera;
        Ok(())
    }

    /// Replace the model-view with a plain translation.
    pub fn translate_frustum<C: GraphicsContext + ?Sized>(
        &mut self,
        ctx: &mut C,
        x: f32,
        y: f32,
        z: f32,
    ) -> Result<()> {
        let mut camera = self.camera;
        camera.translate_to(x, y, z);
        camera.apply_view(ctx)?;
        self.camera = camera;
        Ok(())
    }

    /// Clear color and depth to [`CLEAR_COLOR`].
    pub fn clear<C: GraphicsContext + ?Sized>(&self, ctx: &mut C) -> Result<()> {
        ctx.set_clear_color(CLEAR_COLOR)?;
        ctx.clear(ClearBuffers::COLOR_AND_DEPTH)?;
        Ok(())
    }
}

fn check_window_size(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(GlexError::InvalidWindowSize {
            width: width as i64,
            height: height as i64,
        });
    }
    Ok(())
}

fn check_pixel_size(width: i32, height: i32) -> Result<()> {
    if width <= 0 || height <= 0 {
        return Err(GlexError::InvalidWindowSize {
            width: width as i64,
            height: height as i64,
        });
    }
    Ok(())
}

fn check_scale(scale: f32) -> Result<()> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(GlexError::InvalidScale(scale));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glex_renderer::matrix::{translate, IDENTITY};
    use glex_renderer::projection::{FRUSTUM_FAR, FRUSTUM_HALF_WIDTH, FRUSTUM_NEAR, ORTHO_DEPTH};
    use glex_renderer::{ClipBounds, HeadlessContext, MatrixMode, Orientation};

    fn ctx() -> HeadlessContext {
        HeadlessContext::new(64, 64)
    }

    #[test]
    fn frustum_viewport_truncates_scaled_size() {
        let mut app = Application::new(1001, 999, 0.7).unwrap();
        let mut ctx = ctx();
        app.reshape_frustum(&mut ctx).unwrap();
        assert_eq!(ctx.viewport(), Viewport::new(0, 0, 700, 699));
    }

    #[test]
    fn frustum_uses_fixed_planes_and_aspect() {
        let mut app = Application::new(1280, 800, 1.5).unwrap();
        let mut ctx = ctx();
        app.reshape_frustum(&mut ctx).unwrap();

        assert_eq!(ctx.viewport(), Viewport::new(0, 0, 1920, 1200));
        let projection = app.camera().projection();
        assert_eq!(projection.aspect(), 1200.0 / 1920.0);
        assert_eq!(
            *projection.bounds(),
            ClipBounds {
                left: -FRUSTUM_HALF_WIDTH,
                right: FRUSTUM_HALF_WIDTH,
                bottom: -FRUSTUM_HALF_WIDTH * (1200.0 / 1920.0),
                top: FRUSTUM_HALF_WIDTH * (1200.0 / 1920.0),
                near: FRUSTUM_NEAR,
                far: FRUSTUM_FAR,
            }
        );
        assert_eq!(ctx.matrix(MatrixMode::Projection), projection.matrix());
    }

    #[test]
    fn frustum_aspect_tracks_window_ratio() {
        for (w, h) in [(640, 480), (300, 900), (1024, 1024), (1917, 1033)] {
            let mut app = Application::new(w, h, 1.0).unwrap();
            app.reshape_frustum(&mut ctx()).unwrap();
            assert_eq!(app.camera().projection().aspect(), h as f32 / w as f32);
        }
    }

    #[test]
    fn ortho_viewport_scales_width_only() {
        let mut app = Application::new(800, 600, 2.0).unwrap();
        let mut ctx = ctx();
        app.reshape_ortho(&mut ctx, 1.5).unwrap();
        assert_eq!(ctx.viewport(), Viewport::new(0, 0, 2400, 1200));
    }

    #[test]
    fn ortho_bounds_span_window() {
        let mut app = Application::new(800, 600, 2.0).unwrap();
        let mut ctx = ctx();
        app.reshape_ortho(&mut ctx, 0.5).unwrap();

        assert_eq!(
            *app.camera().projection().bounds(),
            ClipBounds {
                left: 0.0,
                right: 800.0,
                bottom: 0.0,
                top: 600.0,
                near: -ORTHO_DEPTH,
                far: ORTHO_DEPTH,
            }
        );
        assert_eq!(
            ctx.matrix(MatrixMode::Projection),
            Projection::screen_ortho(800, 600).matrix()
        );
    }

    #[test]
    fn ortho_resets_model_view() {
        let mut app = Application::new(800, 600, 1.0).unwrap();
        let mut ctx = ctx();
        app.translate_frustum(&mut ctx, 4.0, 5.0, -6.0).unwrap();
        app.reshape_ortho(&mut ctx, 1.0).unwrap();
        assert_eq!(ctx.matrix(MatrixMode::ModelView), IDENTITY);
        assert_eq!(app.camera().position(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn translate_replaces_model_view() {
        let mut app = Application::new(800, 600, 1.0).unwrap();
        let mut ctx = ctx();
        ctx.load_matrix(MatrixMode::ModelView, &translate(9.0, 9.0, 9.0))
            .unwrap();
        app.translate_frustum(&mut ctx, 1.0, 2.0, -3.0).unwrap();
        assert_eq!(
            ctx.matrix(MatrixMode::ModelView),
            translate(1.0, 2.0, -3.0)
        );
    }

    #[test]
    fn translate_discards_camera_rotation() {
        let mut app = Application::new(800, 600, 1.0).unwrap();
        app.camera.set_orientation(Orientation::new(0.0, 30.0, 0.0));
        let mut ctx = ctx();
        app.translate_frustum(&mut ctx, 0.0, 0.0, -3.0).unwrap();
        assert_eq!(ctx.matrix(MatrixMode::ModelView), translate(0.0, 0.0, -3.0));
    }

    #[test]
    fn clear_fills_color_and_depth() {
        let app = Application::new(800, 600, 1.0).unwrap();
        let mut ctx = HeadlessContext::new(3, 2);
        app.clear(&mut ctx).unwrap();
        assert_eq!(ctx.clear_color(), CLEAR_COLOR);
        assert!(ctx.color_buffer().iter().all(|p| *p == [0.0, 0.0, 0.0, 0.75]));
        assert!(ctx.depth_buffer().iter().all(|d| *d == 1.0));
    }

    #[test]
    fn zero_effective_size_is_rejected_before_any_call() {
        let mut app = Application::new(1, 1, 0.5).unwrap();
        let mut ctx = ctx();
        let before = ctx.viewport();

        let err = app.reshape_frustum(&mut ctx).unwrap_err();
        assert!(matches!(
            err,
            GlexError::InvalidWindowSize {
                width: 0,
                height: 0
            }
        ));
        assert_eq!(ctx.viewport(), before);
        assert_eq!(ctx.matrix(MatrixMode::Projection), IDENTITY);
    }

    #[test]
    fn ortho_rejects_bad_scale_before_any_call() {
        let mut app = Application::new(800, 600, 1.0).unwrap();
        let mut ctx = ctx();
        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                app.reshape_ortho(&mut ctx, scale),
                Err(GlexError::InvalidScale(_))
            ));
        }
        assert_eq!(ctx.matrix(MatrixMode::Projection), IDENTITY);

        // Valid scale, but the scaled width still truncates to zero.
        let mut tiny = Application::new(2, 600, 1.0).unwrap();
        assert!(matches!(
            tiny.reshape_ortho(&mut ctx, 0.25),
            Err(GlexError::InvalidWindowSize { width: 0, height: 600 })
        ));
    }

    #[test]
    fn construction_validates_inputs() {
        assert!(Application::new(0, 600, 1.0).is_err());
        assert!(Application::new(800, 0, 1.0).is_err());
        assert!(Application::new(u32::MAX, 600, 1.0).is_err());
        assert!(matches!(
            Application::new(800, 600, f32::NAN),
            Err(GlexError::InvalidScale(_))
        ));
        assert!(Application::new(800, 600, -2.0).is_err());
    }

    #[test]
    fn resize_and_rescale() {
        let mut app = Application::new(800, 600, 1.0).unwrap();
        app.resize(1024, 768).unwrap();
        app.set_screen_scale(2.0).unwrap();
        assert_eq!(app.window_size(), (1024, 768));
        assert_eq!(app.effective_size(), (2048, 1536));

        assert!(app.resize(0, 768).is_err());
        assert!(app.set_screen_scale(0.0).is_err());
        assert_eq!(app.window_size(), (1024, 768));
        assert_eq!(app.screen_scale(), 2.0);
    }

    #[test]
    fn from_config_uses_window_section() {
        let config = WindowConfig::default();
        let app = Application::from_config(&config).unwrap();
        assert_eq!(app.window_size(), (1280, 800));
    }

    #[test]
    fn context_errors_surface() {
        let mut app = Application::new(800, 600, 1.0).unwrap();
        let mut ctx = ctx();
        ctx.release_current();
        assert!(matches!(
            app.reshape_frustum(&mut ctx),
            Err(GlexError::Context(_))
        ));
        assert!(matches!(app.clear(&mut ctx), Err(GlexError::Context(_))));
    }

    #[test]
    fn failed_translate_keeps_camera_position() {
        let mut app = Application::new(800, 600, 1.0).unwrap();
        let mut ctx = ctx();
        app.translate_frustum(&mut ctx, 1.0, 2.0, -3.0).unwrap();
        ctx.release_current();

        assert!(matches!(
            app.translate_frustum(&mut ctx, 7.0, 8.0, 9.0),
            Err(GlexError::Context(_))
        ));
        assert_eq!(app.camera().position(), [1.0, 2.0, -3.0]);
    }

    #[test]
    fn failed_reshape_keeps_camera_projection() {
        let mut app = Application::new(800, 600, 1.0).unwrap();
        let mut ctx = ctx();
        app.reshape_frustum(&mut ctx).unwrap();
        let before = *app.camera();
        ctx.release_current();

        app.resize(300, 900).unwrap();
        assert!(app.reshape_frustum(&mut ctx).is_err());
        assert!(app.reshape_ortho(&mut ctx, 1.0).is_err());
        assert_eq!(*app.camera(), before);
    }
}
