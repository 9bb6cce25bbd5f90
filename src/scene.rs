//! Owned scene context and the per-frame update.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::camera::CameraRig;
use crate::error::ConfigError;
use crate::interaction::{FlyIn, FlyInStage, Overlay};
use crate::params::{AnimationConfig, FlyInConfig, PlaneConfig, SceneParams};
use crate::picking::Hit;
use crate::plane::{HoverFlashes, PlaneMesh};
use crate::starfield::StarField;

/// Everything that is drawn or animated, owned in one place
pub struct Scene {
    pub plane: PlaneMesh,
    pub stars: StarField,
    pub camera: CameraRig,
    pub overlay: Overlay,
    flashes: HoverFlashes,
    fly_in: FlyIn,
    fly_in_config: FlyInConfig,
    animation: AnimationConfig,
    /// Last pointer position in normalized device coordinates
    pointer: Option<Vec2>,
    /// Frame-count based animation clock
    time: f32,
    rng: StdRng,
}

impl Scene {
    /// Build the scene; `seed` makes plane jitter and star placement reproducible
    pub fn new(params: SceneParams, aspect: f32, seed: Option<u64>) -> Result<Self, ConfigError> {
        params.validate()?;

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let plane = PlaneMesh::generate(&params.plane, &mut rng);
        let stars = StarField::generate(&params.stars, &mut rng);
        log::info!(
            "scene: plane {} vertices / {} triangles, {} stars",
            plane.vertex_count(),
            plane.triangle_count(),
            stars.len()
        );

        Ok(Self {
            plane,
            stars,
            camera: CameraRig::new(&params.camera, aspect),
            overlay: Overlay::new(),
            flashes: HoverFlashes::new(params.hover),
            fly_in: FlyIn::new(params.fly_in.clone()),
            fly_in_config: params.fly_in,
            animation: params.animation,
            pointer: None,
            time: 0.0,
            rng,
        })
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.pointer = Some(ndc);
    }

    /// Record a pointer position given in surface pixels (origin top-left)
    pub fn set_pointer_from_pixels(&mut self, x: f64, y: f64, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let ndc = Vec2::new(
            (x / width as f64 * 2.0 - 1.0) as f32,
            (-(y / height as f64) * 2.0 + 1.0) as f32,
        );
        self.set_pointer(ndc);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.set_aspect(width as f32 / height as f32);
        }
    }

    /// Start the fly-through and fade the overlay; ignored after the first call
    pub fn trigger(&mut self) -> bool {
        if !self.fly_in.trigger(&self.camera) {
            return false;
        }
        self.overlay.fade_out(self.fly_in_config.overlay_fade_s);
        true
    }

    pub fn fly_in_stage(&self) -> FlyInStage {
        self.fly_in.stage()
    }

    pub fn active_flashes(&self) -> usize {
        self.flashes.len()
    }

    /// Face under the pointer, if any
    pub fn pick(&self) -> Option<Hit> {
        let ndc = self.pointer?;
        self.plane.raycast(&self.camera.ray_through_ndc(ndc))
    }

    /// Advance one frame; `dt_s` is the wall-clock frame time for tweens and delays
    ///
    /// Rendering reads none of the state the clock drives, so the caller draws the
    /// frame first and then ticks.
    pub fn tick(&mut self, dt_s: f32) {
        self.time += self.animation.time_step;

        self.flashes.advance(dt_s, &mut self.plane);
        if let Some(hit) = self.pick() {
            self.flashes.start(hit.face, &mut self.plane);
        }

        self.plane
            .displace(self.time, self.animation.displacement_amplitude);

        self.overlay.advance(dt_s);
        self.fly_in.advance(dt_s, &mut self.camera);

        if self.camera.forward_move != 0.0 {
            let distance = self.camera.forward_move * self.time * self.animation.forward_speed;
            self.camera.translate_z(-distance);
        }
    }

    /// Swap in a freshly generated plane and hand the previous one back to the caller
    pub fn regenerate_plane(&mut self, config: PlaneConfig) -> Result<PlaneMesh, ConfigError> {
        config.validate()?;

        // Flashes index into the old topology
        self.flashes.clear();
        let mut plane = PlaneMesh::generate(&config, &mut self.rng);
        plane.displace(self.time, self.animation.displacement_amplitude);
        log::info!(
            "plane regenerated: {}x{} with {}x{} segments",
            config.width,
            config.height,
            config.width_segments,
            config.height_segments
        );

        Ok(std::mem::replace(&mut self.plane, plane))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const DT: f32 = 1.0 / 60.0;

    fn small_scene() -> Scene {
        let params = SceneParams {
            plane: PlaneConfig {
                width: 10.0,
                height: 10.0,
                width_segments: 4,
                height_segments: 4,
                ..PlaneConfig::default()
            },
            ..SceneParams::default()
        };
        Scene::new(params, 1.0, Some(42)).expect("valid params")
    }

    fn flashed_vertices(scene: &Scene) -> Vec<u32> {
        let base = scene.plane.config().color;
        (0..scene.plane.vertex_count())
            .filter(|&i| scene.plane.color(i) != base)
            .map(|i| i as u32)
            .collect()
    }

    #[test]
    fn test_clock_is_frame_count_based() {
        let mut scene = small_scene();
        for _ in 0..10 {
            scene.tick(0.5);
        }
        assert!((scene.time() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_no_pointer_no_flash() {
        let mut scene = small_scene();
        scene.tick(DT);
        assert_eq!(scene.active_flashes(), 0);
        assert!(flashed_vertices(&scene).is_empty());
    }

    #[test]
    fn test_missed_ray_never_flashes() {
        let mut scene = small_scene();
        scene.set_pointer(Vec2::new(1.0, 1.0));
        assert!(scene.pick().is_none());

        scene.tick(DT);
        assert_eq!(scene.active_flashes(), 0);
        assert!(flashed_vertices(&scene).is_empty());
    }

    #[test]
    fn test_hit_flashes_exactly_the_hit_face() {
        let mut scene = small_scene();
        scene.set_pointer(Vec2::ZERO);
        let hit = scene.pick().expect("pointer at the plane centre");

        scene.tick(DT);
        assert_eq!(scene.active_flashes(), 1);

        let mut expected = hit.face.to_vec();
        expected.sort_unstable();
        expected.dedup();
        assert_eq!(flashed_vertices(&scene), expected);
    }

    #[test]
    fn test_pointer_pixels_to_ndc() {
        let mut scene = small_scene();
        scene.set_pointer_from_pixels(0.0, 0.0, 800, 600);
        assert_eq!(scene.pointer(), Some(Vec2::new(-1.0, 1.0)));

        scene.set_pointer_from_pixels(400.0, 300.0, 800, 600);
        assert_eq!(scene.pointer(), Some(Vec2::ZERO));

        scene.set_pointer_from_pixels(800.0, 600.0, 800, 600);
        assert_eq!(scene.pointer(), Some(Vec2::new(1.0, -1.0)));
    }

    #[test]
    fn test_z_untouched_every_frame() {
        let mut scene = small_scene();
        for _ in 0..100 {
            scene.tick(DT);
            for i in 0..scene.plane.vertex_count() {
                assert_eq!(
                    scene.plane.position(i).z,
                    scene.plane.original_position(i).z
                );
            }
        }
    }

    #[test]
    fn test_fly_through_accelerates_after_launch() {
        let mut scene = small_scene();
        assert!(scene.trigger());
        assert!(!scene.trigger());

        while scene.fly_in_stage() != FlyInStage::Flying {
            scene.tick(DT);
            assert!(scene.time() < 10.0, "fly-in never launched");
        }
        assert!(scene.overlay.opacity() < 1.0);

        let mut last = scene.camera.position;
        let mut last_step = 0.0;
        for _ in 0..10 {
            scene.tick(DT);
            let step = scene.camera.position.distance(last);
            assert!(step > last_step);
            last = scene.camera.position;
            last_step = step;
        }
    }

    #[test]
    fn test_parked_camera_stays_put() {
        let mut scene = small_scene();
        for _ in 0..100 {
            scene.tick(DT);
        }
        assert_eq!(scene.camera.position, Vec3::new(0.0, 0.0, 50.0));
    }

    #[test]
    fn test_regenerate_returns_previous_plane() {
        let mut scene = small_scene();
        scene.set_pointer(Vec2::ZERO);
        scene.tick(DT);
        assert_eq!(scene.active_flashes(), 1);

        let config = scene.plane.config().with_segment_delta(2);
        let previous = scene.regenerate_plane(config).expect("valid config");

        assert_eq!(previous.vertex_count(), 5 * 5);
        assert_eq!(scene.plane.vertex_count(), 7 * 7);
        assert_eq!(scene.active_flashes(), 0);
    }

    #[test]
    fn test_regenerate_rejects_invalid_config() {
        let mut scene = small_scene();
        let config = PlaneConfig {
            width_segments: 0,
            ..scene.plane.config().clone()
        };
        assert!(scene.regenerate_plane(config).is_err());
        assert_eq!(scene.plane.vertex_count(), 5 * 5);
    }
}
