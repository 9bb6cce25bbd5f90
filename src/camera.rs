//! Perspective camera rig with Euler rotation and picking rays.

use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

use crate::params::CameraConfig;
use crate::picking::Ray;

/// Camera position, orientation and projection
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub position: Vec3,

    /// Euler angles in radians, applied in X, Y, Z order
    pub rotation: Vec3,

    /// Forward-move flag (0 = parked, 1 = flying)
    /// Scales the per-frame forward translation
    pub forward_move: f32,

    fov_degrees: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl CameraRig {
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            position: config.position,
            rotation: Vec3::ZERO,
            forward_move: 0.0,
            fov_degrees: config.fov_degrees,
            aspect,
            near: config.near_plane,
            far: config.far_plane,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Move along the camera's local Z axis (negative = forward, the way the camera looks)
    pub fn translate_z(&mut self, distance: f32) {
        self.position += self.orientation() * Vec3::Z * distance;
    }

    /// Camera-to-world transform
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position)
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.world_matrix().inverse()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    pub fn view_proj_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Picking ray from the camera through a point in normalized device coordinates
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv_view_proj = self.view_proj_matrix().inverse();
        // Any depth inside the frustum lies on the same ray
        let through = inv_view_proj.project_point3(Vec3::new(ndc.x, ndc.y, 0.5));
        Ray::new(self.position, through - self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        a.abs_diff_eq(b, 1e-4)
    }

    #[test]
    fn test_default_camera_looks_down_negative_z() {
        let camera = CameraRig::new(&CameraConfig::default(), 16.0 / 9.0);
        let ray = camera.ray_through_ndc(Vec2::ZERO);

        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, 50.0));
        assert!(approx(ray.direction, Vec3::NEG_Z));
    }

    #[test]
    fn test_ndc_corner_ray_matches_field_of_view() {
        let config = CameraConfig::default();
        let camera = CameraRig::new(&config, 1.0);
        let ray = camera.ray_through_ndc(Vec2::new(0.0, 1.0));

        // Top edge of the frustum is half the vertical FOV above the view axis
        let half_fov = (config.fov_degrees / 2.0).to_radians();
        let angle = ray.direction.angle_between(Vec3::NEG_Z);
        assert!((angle - half_fov).abs() < 1e-3);
        assert!(ray.direction.y > 0.0);
    }

    #[test]
    fn test_translate_z_follows_rotation() {
        let mut camera = CameraRig::new(&CameraConfig::default(), 1.0);
        camera.translate_z(-10.0);
        assert!(approx(camera.position, Vec3::new(0.0, 0.0, 40.0)));

        // Pitched up by 90°, forward points along +Y
        camera.rotation.x = std::f32::consts::FRAC_PI_2;
        camera.translate_z(-10.0);
        assert!(approx(camera.position, Vec3::new(0.0, 10.0, 40.0)));
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let camera = CameraRig::new(&CameraConfig::default(), 16.0 / 9.0);
        let view_proj = camera.view_proj_matrix();

        assert_ne!(view_proj, Mat4::IDENTITY);
        assert_ne!(view_proj, Mat4::ZERO);
        assert!(view_proj.is_finite());
    }

    #[test]
    fn test_invalid_aspect_is_ignored() {
        let mut camera = CameraRig::new(&CameraConfig::default(), 2.0);
        camera.set_aspect(0.0);
        assert_eq!(camera.aspect(), 2.0);
    }
}
