//! Starfield backdrop and image-based lighting environment.

use orbit_config::SceneConfig;

/// An inverted, textured sphere surrounding the scene.
///
/// Rendered from the inside (back faces only) at partial opacity.
#[derive(Debug, Clone, PartialEq)]
pub struct StarBackdrop {
    pub texture: String,
    pub radius: f32,
    pub segments: u32,
    /// Material opacity in `[0, 1]`.
    pub opacity: f32,
}

impl StarBackdrop {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            texture: config.star_texture.clone(),
            radius: config.star_radius,
            segments: config.star_segments,
            opacity: config.star_opacity.clamp(0.0, 1.0),
        }
    }

    /// Whether a point at `distance` from the origin is inside the backdrop.
    pub fn encloses(&self, distance: f32) -> bool {
        distance < self.radius
    }
}

/// How an environment image wraps around the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
    EquirectangularReflection,
}

/// HDR environment used for reflections and lighting.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentMap {
    pub url: String,
    pub mapping: Mapping,
    /// Also draw the environment as the visible background.
    pub as_background: bool,
}

impl EnvironmentMap {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            url: config.environment_url.clone(),
            mapping: Mapping::EquirectangularReflection,
            as_background: config.environment_as_background,
        }
    }

    /// `.hdr` and `.exr` images carry linear radiance; anything else is
    /// treated as a display-referred image.
    pub fn is_high_dynamic_range(&self) -> bool {
        let lower = self.url.to_ascii_lowercase();
        lower.ends_with(".hdr") || lower.ends_with(".exr")
    }
}
