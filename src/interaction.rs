//! One-shot fly-through triggered from the UI, and the overlay it dismisses.

use crate::camera::CameraRig;
use crate::params::FlyInConfig;
use crate::tween::{Easing, Tween};

/// Where the fly-through sequence currently is
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlyInStage {
    /// Not yet triggered
    Idle,
    /// Camera moving in to the approach Z
    Approaching,
    /// Approach done, counting down to launch
    Waiting { remaining_s: f32 },
    /// Forward-move flag set; camera accelerates every frame
    Flying,
}

/// Camera fly-through: approach, tilt, then launch after a delay
pub struct FlyIn {
    config: FlyInConfig,
    stage: FlyInStage,
    approach: Option<Tween<f32>>,
    tilt: Option<Tween<f32>>,
}

impl FlyIn {
    pub fn new(config: FlyInConfig) -> Self {
        Self {
            config,
            stage: FlyInStage::Idle,
            approach: None,
            tilt: None,
        }
    }

    pub fn stage(&self) -> FlyInStage {
        self.stage
    }

    pub fn is_triggered(&self) -> bool {
        self.stage != FlyInStage::Idle
    }

    /// Start the sequence from the camera's current pose
    ///
    /// Returns `false` (and does nothing) once the sequence has already started.
    pub fn trigger(&mut self, camera: &CameraRig) -> bool {
        if self.is_triggered() {
            return false;
        }

        self.approach = Some(Tween::new(
            camera.position.z,
            self.config.approach_z,
            self.config.approach_duration_s,
        ));
        self.stage = FlyInStage::Approaching;
        log::info!("fly-in triggered");
        true
    }

    /// Advance the sequence by `dt_s` seconds, driving the camera
    pub fn advance(&mut self, dt_s: f32, camera: &mut CameraRig) {
        // A tilt started last frame begins moving this frame
        if let Some(tilt) = &mut self.tilt {
            camera.rotation.x = tilt.advance(dt_s);
            if tilt.is_finished() {
                self.tilt = None;
            }
        }

        match self.stage {
            FlyInStage::Idle | FlyInStage::Flying => {}
            FlyInStage::Approaching => {
                let Some(approach) = &mut self.approach else {
                    return;
                };
                camera.position.z = approach.advance(dt_s);

                // Every approach step restarts the tilt from the current angle
                self.tilt = Some(Tween::new(
                    camera.rotation.x,
                    self.config.tilt_x,
                    self.config.tilt_duration_s,
                ));

                if approach.is_finished() {
                    self.approach = None;
                    self.stage = FlyInStage::Waiting {
                        remaining_s: self.config.launch_delay_s,
                    };
                    log::debug!(
                        "approach complete, launching in {}s",
                        self.config.launch_delay_s
                    );
                }
            }
            FlyInStage::Waiting { remaining_s } => {
                let remaining_s = remaining_s - dt_s;
                if remaining_s <= 0.0 {
                    camera.forward_move = 1.0;
                    self.stage = FlyInStage::Flying;
                    log::info!("forward motion engaged");
                } else {
                    self.stage = FlyInStage::Waiting { remaining_s };
                }
            }
        }
    }
}

/// Informational veil drawn over the scene until the fly-through starts
pub struct Overlay {
    opacity: f32,
    fade: Option<Tween<f32>>,
}

impl Overlay {
    pub fn new() -> Self {
        Self {
            opacity: 1.0,
            fade: None,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn fade_out(&mut self, duration_s: f32) {
        self.fade = Some(Tween::new(self.opacity, 0.0, duration_s).with_easing(Easing::Linear));
    }

    pub fn advance(&mut self, dt_s: f32) {
        if let Some(fade) = &mut self.fade {
            self.opacity = fade.advance(dt_s);
            if fade.is_finished() {
                self.fade = None;
            }
        }
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CameraConfig;

    const DT: f32 = 1.0 / 60.0;

    fn camera() -> CameraRig {
        CameraRig::new(&CameraConfig::default(), 16.0 / 9.0)
    }

    #[test]
    fn test_idle_does_nothing() {
        let mut fly_in = FlyIn::new(FlyInConfig::default());
        let mut cam = camera();
        for _ in 0..600 {
            fly_in.advance(DT, &mut cam);
        }
        assert_eq!(fly_in.stage(), FlyInStage::Idle);
        assert_eq!(cam.position.z, 50.0);
        assert_eq!(cam.forward_move, 0.0);
    }

    #[test]
    fn test_trigger_is_one_shot() {
        let mut fly_in = FlyIn::new(FlyInConfig::default());
        let cam = camera();
        assert!(fly_in.trigger(&cam));
        assert!(!fly_in.trigger(&cam));
    }

    #[test]
    fn test_launch_waits_for_approach_and_delay() {
        let config = FlyInConfig::default();
        let mut fly_in = FlyIn::new(config.clone());
        let mut cam = camera();
        fly_in.trigger(&cam);

        let mut elapsed = 0.0;
        let mut approach_done_at = None;
        let mut launched_at = None;
        for _ in 0..600 {
            fly_in.advance(DT, &mut cam);
            elapsed += DT;

            if approach_done_at.is_none() && matches!(fly_in.stage(), FlyInStage::Waiting { .. })
            {
                approach_done_at = Some(elapsed);
                assert_eq!(cam.position.z, config.approach_z);
            }
            if launched_at.is_none() && cam.forward_move > 0.0 {
                launched_at = Some(elapsed);
            }
            if approach_done_at.is_none() {
                assert_eq!(cam.forward_move, 0.0);
            }
        }

        let approach_done_at = approach_done_at.expect("approach completes");
        let launched_at = launched_at.expect("forward motion starts");
        assert!(approach_done_at >= config.approach_duration_s - 1e-4);
        assert!(launched_at - approach_done_at >= config.launch_delay_s - 1e-4);
        assert_eq!(fly_in.stage(), FlyInStage::Flying);
        assert_eq!(cam.forward_move, 1.0);
    }

    #[test]
    fn test_tilt_settles_after_last_approach_step() {
        let config = FlyInConfig::default();
        let mut fly_in = FlyIn::new(config.clone());
        let mut cam = camera();
        fly_in.trigger(&cam);

        let mut frames = 0;
        while fly_in.stage() == FlyInStage::Approaching {
            fly_in.advance(DT, &mut cam);
            frames += 1;
        }
        assert!(cam.rotation.x > 0.0);
        assert!(cam.rotation.x < config.tilt_x);

        // Half a tilt duration after the trigger the angle is still moving
        while (frames as f32) * DT < config.tilt_duration_s {
            fly_in.advance(DT, &mut cam);
            frames += 1;
        }
        assert!(cam.rotation.x < config.tilt_x);

        // Settles one full tilt duration after the approach ends
        for _ in 0..((config.tilt_duration_s / DT) as usize + 2) {
            fly_in.advance(DT, &mut cam);
        }
        assert_eq!(cam.rotation.x, config.tilt_x);
    }

    #[test]
    fn test_tilt_reaches_target() {
        let config = FlyInConfig::default();
        let mut fly_in = FlyIn::new(config.clone());
        let mut cam = camera();
        fly_in.trigger(&cam);

        // First frame starts the tilt without moving it
        fly_in.advance(DT, &mut cam);
        assert_eq!(cam.rotation.x, 0.0);

        fly_in.advance(DT, &mut cam);
        assert!(cam.rotation.x > 0.0);

        for _ in 0..120 {
            fly_in.advance(DT, &mut cam);
        }
        assert_eq!(cam.rotation.x, config.tilt_x);
    }

    #[test]
    fn test_overlay_fades_out() {
        let mut overlay = Overlay::new();
        overlay.advance(DT);
        assert_eq!(overlay.opacity(), 1.0);

        overlay.fade_out(0.5);
        overlay.advance(0.25);
        assert_eq!(overlay.opacity(), 0.5);

        overlay.advance(0.25);
        assert_eq!(overlay.opacity(), 0.0);
        assert!(!overlay.is_visible());
    }
}
