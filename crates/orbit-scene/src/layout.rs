//! Placement of the orbiting planets.

use glam::{EulerRot, Mat4, Vec3};
use orbit_config::{PlanetEntry, SceneConfig};

/// Surface description of a single planet sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetSlot {
    /// Color texture path, relative to the asset root.
    pub texture: String,
    /// Color texture is authored in sRGB.
    pub srgb: bool,
    pub metalness: f32,
    pub roughness: f32,
    pub radius: f32,
    /// Width and height segments of the sphere mesh.
    pub segments: u32,
}

impl PlanetSlot {
    fn from_entry(entry: &PlanetEntry, radius: f32, segments: u32) -> Self {
        Self {
            texture: entry.texture.clone(),
            srgb: true,
            metalness: entry.metalness,
            roughness: entry.roughness,
            radius,
            segments,
        }
    }
}

/// Planets evenly spaced on a circle in the group's XZ plane.
///
/// Planet `i` of `n` sits at angle `i / n * 2π` measured from +X towards +Z.
/// The group as a whole carries an initial tilt about X.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitLayout {
    pub orbit_radius: f32,
    /// Initial group rotation about X, radians.
    pub tilt: f32,
    pub planets: Vec<PlanetSlot>,
}

impl OrbitLayout {
    pub fn from_config(config: &SceneConfig) -> Self {
        let planets = config
            .planets
            .iter()
            .map(|e| PlanetSlot::from_entry(e, config.planet_radius, config.planet_segments))
            .collect();
        Self {
            orbit_radius: config.orbit_radius,
            tilt: config.group_tilt,
            planets,
        }
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Positions inside the group, before the group's own rotation.
    pub fn local_positions(&self) -> Vec<Vec3> {
        let n = self.planets.len();
        (0..n)
            .map(|i| {
                let angle = i as f32 / n as f32 * std::f32::consts::TAU;
                Vec3::new(
                    self.orbit_radius * angle.cos(),
                    0.0,
                    self.orbit_radius * angle.sin(),
                )
            })
            .collect()
    }

    /// Initial Euler rotation of the group (XYZ order).
    pub fn initial_rotation(&self) -> Vec3 {
        Vec3::new(self.tilt, 0.0, 0.0)
    }

    /// Planet positions in world space with the group at the XYZ Euler
    /// `rotation`.
    pub fn world_positions(&self, rotation: Vec3) -> Vec<Vec3> {
        let transform = Mat4::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z);
        self.local_positions()
            .into_iter()
            .map(|p| transform.transform_point3(p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn layout() -> OrbitLayout {
        OrbitLayout::from_config(&SceneConfig::default())
    }

    #[test]
    fn test_default_layout() {
        let l = layout();
        assert_eq!(l.len(), 4);
        assert!(l.planets.iter().all(|p| p.srgb && p.segments == 32));
        assert!((l.planets[0].radius - 1.3).abs() < 1e-6);
    }

    #[test]
    fn test_planets_on_circle() {
        let l = layout();
        let positions = l.local_positions();
        assert!((positions[0] - Vec3::new(4.5, 0.0, 0.0)).length() < 1e-5);
        assert!((positions[1] - Vec3::new(0.0, 0.0, 4.5)).length() < 1e-5);
        assert!((positions[2] - Vec3::new(-4.5, 0.0, 0.0)).length() < 1e-5);
        for p in &positions {
            assert!((p.length() - 4.5).abs() < 1e-5);
        }
    }

    #[test]
    fn test_quarter_turn_moves_each_planet_to_next_slot() {
        let mut l = layout();
        l.tilt = 0.0;
        let rest = l.world_positions(Vec3::ZERO);
        let turned = l.world_positions(Vec3::new(0.0, -FRAC_PI_2, 0.0));
        for i in 0..rest.len() {
            let next = rest[(i + 1) % rest.len()];
            assert!((turned[i] - next).length() < 1e-4, "planet {i} at {:?}", turned[i]);
        }
    }

    #[test]
    fn test_tilt_lifts_planets_off_plane() {
        let l = layout();
        let world = l.world_positions(l.initial_rotation());
        // Planet 1 sits on +Z; tilting about X moves it out of the XZ plane.
        assert!(world[1].y.abs() > 0.5);
        assert!(world[0].y.abs() < 1e-5);
    }

    #[test]
    fn test_empty_layout() {
        let config = SceneConfig {
            planets: Vec::new(),
            ..SceneConfig::default()
        };
        let l = OrbitLayout::from_config(&config);
        assert!(l.is_empty());
        assert!(l.local_positions().is_empty());
    }
}
