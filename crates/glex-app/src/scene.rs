//! The demo scene: a spinning sphere under the configured projection.

use glex_common::Result;
use glex_config::schema::{CameraConfig, GlexConfig, ProjectionConfig, ProjectionMode, SeedKind};
use glex_renderer::{GraphicsContext, Orientation, Seed, Sphere};

use crate::application::Application;

pub struct Scene {
    application: Application,
    sphere: Sphere,
    projection: ProjectionConfig,
    camera: CameraConfig,
    rotation_speed: f32,
}

impl Scene {
    pub fn from_config(config: &GlexConfig) -> Result<Self> {
        let application = Application::from_config(&config.window)?;
        let seed = match config.sphere.seed {
            SeedKind::Octahedron => Seed::Octahedron,
            SeedKind::Icosahedron => Seed::Icosahedron,
        };
        let sphere = Sphere::with_seed(config.sphere.radius, seed, config.sphere.subdivision)?;
        tracing::debug!(?sphere, "scene sphere");

        Ok(Self {
            application,
            sphere,
            projection: config.projection.clone(),
            camera: config.camera.clone(),
            rotation_speed: config.sphere.rotation_speed,
        })
    }

    pub fn application(&self) -> &Application {
        &self.application
    }

    pub fn application_mut(&mut self) -> &mut Application {
        &mut self.application
    }

    pub fn sphere(&self) -> &Sphere {
        &self.sphere
    }

    /// Draw one frame, `elapsed` seconds after start.
    pub fn render<C: GraphicsContext + ?Sized>(&mut self, ctx: &mut C, elapsed: f32) -> Result<()> {
        self.application.clear(ctx)?;

        match self.projection.mode {
            ProjectionMode::Frustum => {
                self.application.reshape_frustum(ctx)?;
                let CameraConfig { x, y, z } = self.camera;
                self.application.translate_frustum(ctx, x, y, z)?;
            }
            ProjectionMode::Ortho => {
                self.application
                    .reshape_ortho(ctx, self.projection.ortho_scale)?;
                // Ortho units are window pixels; centre the sphere.
                let (width, height) = self.application.window_size();
                self.application.translate_frustum(
                    ctx,
                    width as f32 / 2.0,
                    height as f32 / 2.0,
                    0.0,
                )?;
            }
        }

        let angle = (self.rotation_speed * elapsed) % 360.0;
        self.sphere.set_orientation(Orientation::new(0.0, angle, 0.0));
        self.sphere.draw(ctx)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glex_renderer::matrix::translate;
    use glex_renderer::{HeadlessContext, MatrixMode, Viewport};

    fn small_config() -> GlexConfig {
        let mut config = GlexConfig::default();
        config.window.width = 320;
        config.window.height = 240;
        config.sphere.subdivision = 2;
        config
    }

    #[test]
    fn frustum_frame_draws_sphere_behind_camera_translation() {
        let mut scene = Scene::from_config(&small_config()).unwrap();
        let mut ctx = HeadlessContext::new(320, 240);
        scene.render(&mut ctx, 0.0).unwrap();

        let replayed = ctx.replayed();
        assert_eq!(replayed.len(), 1);
        assert_eq!(replayed[0].faces.len(), 8 * 16);
        assert_eq!(replayed[0].model_view, translate(0.0, 0.0, -3.0));
        assert_eq!(replayed[0].viewport, Viewport::new(0, 0, 320, 240));
        assert_eq!(ctx.pixel(0, 0), Some([0.0, 0.0, 0.0, 0.75]));
    }

    #[test]
    fn ortho_frame_centres_sphere() {
        let mut config = small_config();
        config.projection.mode = ProjectionMode::Ortho;
        config.sphere.radius = 50.0;
        let mut scene = Scene::from_config(&config).unwrap();
        let mut ctx = HeadlessContext::new(320, 240);
        scene.render(&mut ctx, 0.0).unwrap();

        let replayed = &ctx.replayed()[0];
        assert_eq!(replayed.model_view, translate(160.0, 120.0, 0.0));
        assert_eq!(replayed.viewport, Viewport::new(0, 0, 320, 240));
    }

    #[test]
    fn sphere_spins_with_time_and_keeps_one_list() {
        let mut scene = Scene::from_config(&small_config()).unwrap();
        let mut ctx = HeadlessContext::new(320, 240);
        scene.render(&mut ctx, 0.0).unwrap();
        scene.render(&mut ctx, 1.0).unwrap();

        let replayed = ctx.replayed();
        assert_ne!(replayed[0].model_view, replayed[1].model_view);
        assert_eq!(replayed[0].list, replayed[1].list);
        assert_eq!(replayed[0].faces, replayed[1].faces);
        assert_eq!(ctx.live_lists(), 1);
        assert_eq!(scene.sphere().orientation().y, 30.0);
        // Rotation is applied on top of the camera and then undone.
        assert_eq!(
            ctx.matrix(MatrixMode::ModelView),
            translate(0.0, 0.0, -3.0)
        );
    }

    #[test]
    fn resize_changes_next_frame_viewport() {
        let mut scene = Scene::from_config(&small_config()).unwrap();
        scene.application_mut().resize(640, 480).unwrap();
        let mut ctx = HeadlessContext::new(640, 480);
        scene.render(&mut ctx, 0.0).unwrap();
        assert_eq!(ctx.replayed()[0].viewport, Viewport::new(0, 0, 640, 480));
    }

    #[test]
    fn invalid_sphere_config_is_rejected() {
        let mut config = small_config();
        config.sphere.radius = -1.0;
        assert!(Scene::from_config(&config).is_err());

        let mut config = small_config();
        config.sphere.subdivision = 12;
        assert!(Scene::from_config(&config).is_err());
    }
}
