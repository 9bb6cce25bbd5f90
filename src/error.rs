//! Error types for configuration and startup.

use thiserror::Error;

/// A configuration value outside the range the scene supports
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("plane {axis} must be within {min}..={max}, got {value}")]
    PlaneExtent {
        axis: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("plane {axis} subdivisions must be within {min}..={max}, got {value}")]
    Subdivisions {
        axis: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("color channel {channel} must be within 0..=1, got {value}")]
    ColorChannel { channel: char, value: f32 },

    #[error("plane jitter must be a finite non-negative distance, got {0}")]
    Jitter(f32),

    #[error("{name} must be a finite non-negative duration, got {value}")]
    Duration { name: &'static str, value: f32 },

    #[error("field of view must be within (0, 180) degrees, got {0}")]
    FieldOfView(f32),

    #[error("clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    ClipPlanes { near: f32, far: f32 },

    #[error("star count must be at most {max}, got {value}")]
    StarCount { value: usize, max: usize },

    #[error("star spread must be a finite positive distance, got {0}")]
    StarSpread(f32),

    #[error("window size must be non-zero, got {width}x{height}")]
    WindowSize { width: u32, height: u32 },
}

/// Fatal startup errors
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create render surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no GPU adapter can present to the render surface")]
    NoAdapter,

    #[error("render surface reports no supported texture format")]
    NoSurfaceFormat,

    #[error("failed to request device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}
