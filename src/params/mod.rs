//! Parameter definitions with units and documented semantics.
//!
//! All magic numbers of the scene live here with:
//! - Units (world units, seconds, radians, linear RGB)
//! - Documented ranges and meanings
//! - `validate` where a value has a hard range

mod camera;
mod plane;
mod render;

// Re-export all types
pub use camera::{CameraConfig, FlyInConfig};
pub use plane::{AnimationConfig, HoverConfig, PlaneConfig};
pub use render::{RenderConfig, StarFieldConfig, MAX_STAR_COUNT, MAX_VERTEX_BUFFER_BYTES};

use crate::error::ConfigError;

/// Everything needed to build a [`crate::scene::Scene`]
#[derive(Debug, Clone, Default)]
pub struct SceneParams {
    pub plane: PlaneConfig,
    pub hover: HoverConfig,
    pub animation: AnimationConfig,
    pub stars: StarFieldConfig,
    pub camera: CameraConfig,
    pub fly_in: FlyInConfig,
}

impl SceneParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.plane.validate()?;
        self.stars.validate()?;
        self.fly_in.validate()?;
        self.camera.validate()
    }
}
