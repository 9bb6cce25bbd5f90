//! Command-line argument parsing.

use clap::Parser;
use glam::Vec3;

use crate::error::ConfigError;
use crate::params::{PlaneConfig, RenderConfig, SceneParams, StarFieldConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "driftscape")]
#[command(about = "Animated low-poly plane under a starfield", long_about = None)]
pub struct Args {
    /// Plane width (world units, 1-500)
    #[arg(long, value_name = "UNITS")]
    pub width: Option<f32>,

    /// Plane height (world units, 1-500)
    #[arg(long, value_name = "UNITS")]
    pub height: Option<f32>,

    /// Plane subdivisions along X (1-100)
    #[arg(long, value_name = "COUNT")]
    pub width_segments: Option<u32>,

    /// Plane subdivisions along Y (1-100)
    #[arg(long, value_name = "COUNT")]
    pub height_segments: Option<u32>,

    /// Plane base color as three channels in 0-1
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"])]
    pub color: Option<Vec<f32>>,

    /// Number of stars in the backdrop
    #[arg(long, value_name = "COUNT")]
    pub stars: Option<usize>,

    /// Seed for plane jitter and star placement (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial window width (pixels)
    #[arg(long, value_name = "PIXELS")]
    pub window_width: Option<u32>,

    /// Initial window height (pixels)
    #[arg(long, value_name = "PIXELS")]
    pub window_height: Option<u32>,
}

impl Args {
    /// Scene parameters with command-line overrides applied
    pub fn scene_params(&self) -> Result<SceneParams, ConfigError> {
        let defaults = PlaneConfig::default();
        let plane = PlaneConfig {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            width_segments: self.width_segments.unwrap_or(defaults.width_segments),
            height_segments: self.height_segments.unwrap_or(defaults.height_segments),
            color: match self.color.as_deref() {
                Some(&[r, g, b]) => Vec3::new(r, g, b),
                _ => defaults.color,
            },
            ..defaults
        };

        let stars = StarFieldConfig {
            count: self.stars.unwrap_or(StarFieldConfig::default().count),
            ..StarFieldConfig::default()
        };

        let params = SceneParams {
            plane,
            stars,
            ..SceneParams::default()
        };
        params.validate()?;
        Ok(params)
    }

    /// Render configuration with command-line overrides applied
    pub fn render_config(&self) -> Result<RenderConfig, ConfigError> {
        let defaults = RenderConfig::default();
        let config = RenderConfig {
            window_width: self.window_width.unwrap_or(defaults.window_width),
            window_height: self.window_height.unwrap_or(defaults.window_height),
            ..defaults
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let args = Args::try_parse_from(["driftscape"]).unwrap();
        let params = args.scene_params().unwrap();

        assert_eq!(params.plane, PlaneConfig::default());
        assert_eq!(params.stars.count, 10_000);
        assert_eq!(args.seed, None);
        assert_eq!(args.render_config().unwrap().window_width, 1280);
    }

    #[test]
    fn test_plane_overrides() {
        let args = Args::try_parse_from([
            "driftscape",
            "--width",
            "120",
            "--width-segments",
            "12",
            "--color",
            "0.5",
            "0.25",
            "1",
            "--stars",
            "64",
            "--seed",
            "7",
        ])
        .unwrap();
        let params = args.scene_params().unwrap();

        assert_eq!(params.plane.width, 120.0);
        assert_eq!(params.plane.height, 400.0);
        assert_eq!(params.plane.width_segments, 12);
        assert_eq!(params.plane.color, Vec3::new(0.5, 0.25, 1.0));
        assert_eq!(params.stars.count, 64);
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn test_color_needs_three_channels() {
        assert!(Args::try_parse_from(["driftscape", "--color", "0.5", "0.5"]).is_err());
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let args = Args::try_parse_from(["driftscape", "--height-segments", "101"]).unwrap();
        assert!(matches!(
            args.scene_params(),
            Err(ConfigError::Subdivisions { axis: "height", .. })
        ));

        let args = Args::try_parse_from(["driftscape", "--stars", "30000000"]).unwrap();
        assert!(matches!(
            args.scene_params(),
            Err(ConfigError::StarCount {
                value: 30_000_000,
                ..
            })
        ));

        let args = Args::try_parse_from(["driftscape", "--window-width", "0"]).unwrap();
        assert!(args.render_config().is_err());
    }
}
