//! Perspective camera looking at the planet group.

use glam::{Mat4, Vec3};
use orbit_config::SceneConfig;
use tracing::debug;

/// A perspective camera on the +Z axis looking towards the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneCamera {
    pub position: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect_ratio: f32,
    /// Near clip plane distance (always positive).
    pub near: f32,
    /// Far clip plane distance (always positive, > near).
    pub far: f32,
}

impl SceneCamera {
    pub fn from_config(config: &SceneConfig, width: u32, height: u32) -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, config.camera_distance),
            fov_y: config.camera_fov_deg.to_radians(),
            aspect_ratio: 1.0,
            near: config.camera_near,
            far: config.camera_far,
        };
        camera.resize(width, height);
        camera
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.near, self.far)
    }

    /// Combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Normalized device coordinates of a world-space point. Smaller `z` is
    /// nearer the camera.
    pub fn project(&self, point: Vec3) -> Vec3 {
        self.view_projection_matrix().project_point3(point)
    }

    /// Update the aspect ratio after the drawing surface changed size.
    ///
    /// A zero-sized surface (minimised window) leaves the ratio untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            debug!(width, height, "ignoring degenerate resize");
            return;
        }
        self.aspect_ratio = width as f32 / height as f32;
    }
}
