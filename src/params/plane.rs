//! Plane geometry, hover flash and vertex animation parameters.

use glam::Vec3;
use std::ops::RangeInclusive;

use crate::error::ConfigError;

/// Accepted plane width/height (world units)
pub const PLANE_EXTENT_RANGE: RangeInclusive<f32> = 1.0..=500.0;

/// Accepted subdivision count per axis
pub const PLANE_SEGMENT_RANGE: RangeInclusive<u32> = 1..=100;

/// Plane geometry configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneConfig {
    /// Plane width along X (world units)
    pub width: f32,

    /// Plane height along Y (world units)
    pub height: f32,

    /// Number of cells along X (vertices per row = width_segments + 1)
    pub width_segments: u32,

    /// Number of cells along Y (vertices per column = height_segments + 1)
    pub height_segments: u32,

    /// Half-extent of the one-time random jitter applied per axis (world units)
    /// 1.5 = vertices move up to ±1.5 from their grid position
    pub jitter: f32,

    /// Base vertex color (linear RGB, each channel 0..=1)
    pub color: Vec3,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
            width_segments: 50,
            height_segments: 50,
            jitter: 1.5,
            color: Vec3::new(0.19, 0.35, 0.3),
        }
    }
}

impl PlaneConfig {
    /// Check every field against the ranges the tuning controls allow
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if !PLANE_EXTENT_RANGE.contains(&value) {
                return Err(ConfigError::PlaneExtent {
                    axis,
                    value,
                    min: *PLANE_EXTENT_RANGE.start(),
                    max: *PLANE_EXTENT_RANGE.end(),
                });
            }
        }

        for (axis, value) in [
            ("width", self.width_segments),
            ("height", self.height_segments),
        ] {
            if !PLANE_SEGMENT_RANGE.contains(&value) {
                return Err(ConfigError::Subdivisions {
                    axis,
                    value,
                    min: *PLANE_SEGMENT_RANGE.start(),
                    max: *PLANE_SEGMENT_RANGE.end(),
                });
            }
        }

        for (channel, value) in ['r', 'g', 'b'].into_iter().zip(self.color.to_array()) {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ColorChannel { channel, value });
            }
        }

        if !(self.jitter >= 0.0 && self.jitter.is_finite()) {
            return Err(ConfigError::Jitter(self.jitter));
        }

        Ok(())
    }

    /// Same plane with both subdivision counts shifted by `delta`, clamped to the valid range
    pub fn with_segment_delta(&self, delta: i32) -> Self {
        let shift = |segments: u32| {
            let min = *PLANE_SEGMENT_RANGE.start() as i64;
            let max = *PLANE_SEGMENT_RANGE.end() as i64;
            (segments as i64 + delta as i64).clamp(min, max) as u32
        };

        Self {
            width_segments: shift(self.width_segments),
            height_segments: shift(self.height_segments),
            ..self.clone()
        }
    }
}

/// Hover flash parameters
#[derive(Debug, Clone)]
pub struct HoverConfig {
    /// Color a face flashes to when the pointer ray hits it (linear RGB)
    pub hovered_color: Vec3,

    /// Time for the flash to decay back to the plane color (seconds)
    pub duration_s: f32,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            hovered_color: Vec3::new(0.4, 0.5, 0.4),
            duration_s: 0.5,
        }
    }
}

/// Per-frame animation constants
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// Animation clock increment per frame (dimensionless, frame-count based)
    pub time_step: f32,

    /// Displacement amplitude of the vertex wobble (world units)
    pub displacement_amplitude: f32,

    /// Forward travel multiplier once the fly-through starts
    /// Distance per frame = forward_move * animation_time * this
    pub forward_speed: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            time_step: 0.01,
            displacement_amplitude: 0.005,
            forward_speed: 3.0,
        }
    }
}
