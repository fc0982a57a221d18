//! The assembled scene and its per-frame and per-resize updates.

use glam::Vec3;
use orbit_config::SceneConfig;
use tracing::{info, warn};

use crate::backdrop::{EnvironmentMap, StarBackdrop};
use crate::camera::SceneCamera;
use crate::layout::OrbitLayout;
use crate::spin::PlanetSpin;

/// Everything the renderer needs to draw the carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub layout: OrbitLayout,
    pub backdrop: StarBackdrop,
    pub environment: EnvironmentMap,
    pub camera: SceneCamera,
    pub spin: PlanetSpin,
    /// Device pixel ratio cap for the drawing surface.
    pub max_pixel_ratio: f32,
}

impl Scene {
    /// Assemble the scene for a surface of `width` x `height` logical pixels.
    pub fn build(config: &SceneConfig, width: u32, height: u32) -> Self {
        let layout = OrbitLayout::from_config(config);
        let spin = PlanetSpin::new(layout.len(), config.spin_rate);
        let scene = Self {
            backdrop: StarBackdrop::from_config(config),
            environment: EnvironmentMap::from_config(config),
            camera: SceneCamera::from_config(config, width, height),
            layout,
            spin,
            max_pixel_ratio: config.max_pixel_ratio,
        };
        let outermost = scene.layout.orbit_radius
            + scene.layout.planets.iter().map(|p| p.radius).fold(0.0, f32::max);
        let camera_distance = scene.camera.position.length();
        if !scene.backdrop.encloses(outermost) || !scene.backdrop.encloses(camera_distance) {
            warn!(
                star_radius = scene.backdrop.radius,
                outermost,
                "Star backdrop does not enclose the planets and camera"
            );
        }
        info!(
            planets = scene.layout.len(),
            orbit_radius = scene.layout.orbit_radius,
            environment = %scene.environment.url,
            hdr = scene.environment.is_high_dynamic_range(),
            "Scene built"
        );
        scene
    }

    /// Index of the planet nearest the camera with the group at `rotation`.
    pub fn front_planet(&self, rotation: Vec3) -> Option<usize> {
        self.layout
            .world_positions(rotation)
            .into_iter()
            .map(|p| self.camera.project(p).z)
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }

    /// Per-frame update with the total seconds since start.
    pub fn tick(&mut self, elapsed_secs: f32) {
        self.spin.tick(elapsed_secs);
    }

    /// Surface resized to `width` x `height` logical pixels.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// Pixel ratio to render at on a device reporting `device_ratio`.
    pub fn pixel_ratio(&self, device_ratio: f64) -> f64 {
        pixel_ratio(device_ratio, f64::from(self.max_pixel_ratio))
    }
}

/// Clamp a device pixel ratio to `max`. Non-positive or non-finite readings
/// fall back to 1.
pub fn pixel_ratio(device_ratio: f64, max: f64) -> f64 {
    if !device_ratio.is_finite() || device_ratio <= 0.0 {
        return 1.0;
    }
    device_ratio.min(max)
}
