//! Driftscape library - animated low-poly plane with hover flashes and a camera fly-through

pub mod camera;
pub mod cli;
pub mod error;
pub mod interaction;
pub mod params;
pub mod picking;
pub mod plane;
pub mod rendering;
pub mod scene;
pub mod starfield;
pub mod tween;
