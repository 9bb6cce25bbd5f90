//! Rendering and star field configuration.

use glam::Vec3;

use crate::error::ConfigError;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Initial window width (pixels)
    pub window_width: u32,

    /// Initial window height (pixels)
    pub window_height: u32,

    /// Direction towards the key light, and its intensity
    pub key_light: [f32; 4],

    /// Direction towards the back light, and its intensity
    pub back_light: [f32; 4],

    /// Overlay veil color (linear RGBA) at full opacity
    pub overlay_color: [f32; 4],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            key_light: [0.0, -1.0, 1.0, 1.0],
            back_light: [0.0, 0.0, -1.0, 1.0],
            overlay_color: [0.0, 0.0, 0.0, 0.55],
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::WindowSize {
                width: self.window_width,
                height: self.window_height,
            });
        }
        Ok(())
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }
}

/// Largest vertex buffer every adapter accepts (wgpu's default `max_buffer_size`)
pub const MAX_VERTEX_BUFFER_BYTES: u64 = 256 << 20;

/// Star count whose vertex buffer still fits in [`MAX_VERTEX_BUFFER_BYTES`]
pub const MAX_STAR_COUNT: usize =
    MAX_VERTEX_BUFFER_BYTES as usize / std::mem::size_of::<[f32; 3]>();

/// Star field configuration
#[derive(Debug, Clone)]
pub struct StarFieldConfig {
    /// Number of stars
    pub count: usize,

    /// Edge length of the cube the stars are scattered in (world units)
    /// 900 = every coordinate within ±450
    pub spread: f32,

    /// World-space offset of the whole field
    /// Raised 600 units so the field sits above the plane
    pub offset: Vec3,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            spread: 900.0,
            offset: Vec3::new(0.0, 600.0, 0.0),
        }
    }
}

impl StarFieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count > MAX_STAR_COUNT {
            return Err(ConfigError::StarCount {
                value: self.count,
                max: MAX_STAR_COUNT,
            });
        }
        if !self.spread.is_finite() || self.spread <= 0.0 {
            return Err(ConfigError::StarSpread(self.spread));
        }
        Ok(())
    }
}
