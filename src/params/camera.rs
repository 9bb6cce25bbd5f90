//! Camera projection and fly-through configuration.

use glam::Vec3;

use crate::error::ConfigError;

/// Perspective camera configuration
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    /// Must reach the star field (offset 600 + spread 450)
    pub far_plane: f32,

    /// Initial camera position (world units)
    /// Looks down -Z at the plane from 50 units away
    pub position: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            position: Vec3::new(0.0, 0.0, 50.0),
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::FieldOfView(self.fov_degrees));
        }
        if !(self.near_plane > 0.0 && self.far_plane > self.near_plane) {
            return Err(ConfigError::ClipPlanes {
                near: self.near_plane,
                far: self.far_plane,
            });
        }
        Ok(())
    }
}

/// Fly-through sequence started by the UI trigger
#[derive(Debug, Clone)]
pub struct FlyInConfig {
    /// Camera Z the approach tween ends at (world units)
    pub approach_z: f32,

    /// Duration of the approach tween (seconds)
    pub approach_duration_s: f32,

    /// Camera pitch (rotation about X) the tilt tween ends at (radians)
    /// 1.5 rad ≈ 86° = looking almost straight up at the stars
    pub tilt_x: f32,

    /// Duration of the tilt tween (seconds)
    pub tilt_duration_s: f32,

    /// Wait between the approach finishing and forward motion starting (seconds)
    pub launch_delay_s: f32,

    /// Duration of the overlay fade-out (seconds)
    pub overlay_fade_s: f32,
}

impl Default for FlyInConfig {
    fn default() -> Self {
        Self {
            approach_z: 30.0,
            approach_duration_s: 0.25,
            tilt_x: 1.5,
            tilt_duration_s: 0.5,
            launch_delay_s: 1.0,
            overlay_fade_s: 0.5,
        }
    }
}

impl FlyInConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("approach_duration_s", self.approach_duration_s),
            ("tilt_duration_s", self.tilt_duration_s),
            ("launch_delay_s", self.launch_delay_s),
            ("overlay_fade_s", self.overlay_fade_s),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::Duration { name, value });
            }
        }
        Ok(())
    }
}
