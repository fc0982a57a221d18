//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level showcase configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Scene composition: planets, backdrop, environment, camera.
    pub scene: SceneConfig,
    /// Scroll interaction settings.
    pub scroll: ScrollConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Window title.
    pub title: String,
}

/// One orbiting planet's surface description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetEntry {
    /// Color texture path, relative to the asset root.
    pub texture: String,
    /// PBR metalness; high values make the environment reflections visible.
    pub metalness: f32,
    /// PBR roughness.
    pub roughness: f32,
}

/// Scene composition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Radius of each orbiting planet.
    pub planet_radius: f32,
    /// Width and height segment count of each planet sphere.
    pub planet_segments: u32,
    /// Radius of the circle the planets sit on.
    pub orbit_radius: f32,
    /// Tilt of the planet group about the X axis, in radians.
    pub group_tilt: f32,
    /// Planets in orbit order.
    pub planets: Vec<PlanetEntry>,
    /// Starfield backdrop texture path.
    pub star_texture: String,
    /// Radius of the inverted starfield sphere.
    pub star_radius: f32,
    /// Segment count of the starfield sphere.
    pub star_segments: u32,
    /// Starfield material opacity.
    pub star_opacity: f32,
    /// HDRI used as the lighting environment.
    pub environment_url: String,
    /// Also show the HDRI as the visible background.
    pub environment_as_background: bool,
    /// Vertical field of view in degrees.
    pub camera_fov_deg: f32,
    /// Near clip distance.
    pub camera_near: f32,
    /// Far clip distance.
    pub camera_far: f32,
    /// Camera distance from the origin along +Z.
    pub camera_distance: f32,
    /// Per-frame spin factor applied to total elapsed seconds.
    pub spin_rate: f32,
    /// Upper bound on the device pixel ratio used for the drawing surface.
    pub max_pixel_ratio: f32,
}

/// Scroll interaction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    /// Minimum milliseconds between two fired transitions.
    pub throttle_delay_ms: u64,
    /// Number of phases in the scroll cycle.
    pub cycle_length: u32,
    /// Duration of every transition animation in seconds.
    pub transition_secs: f32,
    /// Group yaw decrement per transition, in radians.
    pub group_step: f32,
    /// Heading offset decrement per transition, in percent of own height.
    pub heading_step_percent: f32,
    /// Easing curve name understood by the animation collaborator.
    pub ease: String,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Write JSON logs to the log directory in debug builds.
    pub file_logging: bool,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fullscreen: false,
            title: "Orbit Showcase".to_string(),
        }
    }
}

impl Default for PlanetEntry {
    fn default() -> Self {
        Self {
            texture: String::new(),
            metalness: 0.6,
            roughness: 0.2,
        }
    }
}

impl PlanetEntry {
    fn textured(path: &str) -> Self {
        Self {
            texture: path.to_string(),
            ..Self::default()
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            planet_radius: 1.3,
            planet_segments: 32,
            orbit_radius: 4.5,
            group_tilt: 0.2,
            planets: vec![
                PlanetEntry::textured("planets_resources/resources/csilla/color.png"),
                PlanetEntry::textured("planets_resources/resources/earth/map.jpg"),
                PlanetEntry::textured("planets_resources/resources/venus/map.jpg"),
                PlanetEntry::textured("planets_resources/resources/volcanic/color.png"),
            ],
            star_texture: "planets_resources/resources/stars.jpg".to_string(),
            star_radius: 50.0,
            star_segments: 64,
            star_opacity: 0.2,
            environment_url:
                "https://dl.polyhaven.org/file/ph-assets/HDRIs/hdr/2k/smelting_tower_02_2k.hdr"
                    .to_string(),
            environment_as_background: false,
            camera_fov_deg: 25.0,
            camera_near: 0.1,
            camera_far: 100.0,
            camera_distance: 9.0,
            spin_rate: 0.0002,
            max_pixel_ratio: 2.0,
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            throttle_delay_ms: 2000,
            cycle_length: 4,
            transition_secs: 1.0,
            group_step: std::f32::consts::FRAC_PI_2,
            heading_step_percent: 100.0,
            ease: "power2.inOut".to_string(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            file_logging: true,
        }
    }
}

// --- Validation ---

impl Config {
    /// Reject values that parse but cannot produce a sensible scene.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &'static str, reason: &'static str| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        };
        let scene = &self.scene;

        if self.window.width == 0 || self.window.height == 0 {
            return invalid("window", "width and height must be non-zero");
        }
        if scene.planet_radius <= 0.0 || scene.orbit_radius <= 0.0 {
            return invalid("scene.planet_radius", "planet and orbit radii must be positive");
        }
        if scene.planet_segments < 3 || scene.star_segments < 3 {
            return invalid("scene.planet_segments", "spheres need at least 3 segments");
        }
        if scene.star_radius <= scene.orbit_radius + scene.planet_radius
            || scene.star_radius <= scene.camera_distance
        {
            return invalid("scene.star_radius", "backdrop must enclose the planets and camera");
        }
        if !(scene.camera_near > 0.0 && scene.camera_near < scene.camera_far) {
            return invalid("scene.camera_near", "need 0 < camera_near < camera_far");
        }
        if !(scene.camera_fov_deg > 0.0 && scene.camera_fov_deg < 180.0) {
            return invalid("scene.camera_fov_deg", "field of view must be in (0, 180)");
        }
        if scene.max_pixel_ratio < 1.0 {
            return invalid("scene.max_pixel_ratio", "must be at least 1");
        }
        Ok(())
    }
}

// --- Load / Save / Reload ---

/// File name inside the config directory.
pub const CONFIG_FILE: &str = "config.ron";

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = ron::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Load `config.ron` from `config_dir`, writing the defaults there first if
    /// the file does not exist yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(CONFIG_FILE);
        if !path.exists() {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Wrote default config to {}", path.display());
            return Ok(config);
        }
        let config = read_config(&path)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write this config as pretty RON to `config_dir/config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        };
        std::fs::create_dir_all(config_dir).map_err(write_err)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let text = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        let path = config_dir.join(CONFIG_FILE);
        std::fs::write(&path, text).map_err(|source| ConfigError::Write { path, source })
    }

    /// Re-read the file; `Some` only when its contents differ from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let fresh = read_config(&config_dir.join(CONFIG_FILE))?;
        if &fresh == self {
            return Ok(None);
        }
        log::info!("Config file changed, reloading");
        Ok(Some(fresh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("width: 1280"));
        assert!(ron_str.contains("throttle_delay_ms: 2000"));
        assert!(ron_str.contains("power2.inOut"));
    }

    #[test]
    fn test_default_scene_has_four_planets() {
        let scene = SceneConfig::default();
        assert_eq!(scene.planets.len(), 4);
        assert!(scene.planets[1].texture.ends_with("earth/map.jpg"));
        assert!(scene.planets.iter().all(|p| (p.metalness - 0.6).abs() < 1e-6));
    }

    #[test]
    fn test_default_scroll_matches_cycle() {
        let scroll = ScrollConfig::default();
        assert_eq!(scroll.cycle_length, 4);
        assert!((scroll.group_step * 4.0 - std::f32::consts::TAU).abs() < 1e-6);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(window: (), scene: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.scroll, ScrollConfig::default());
        assert_eq!(config.debug, DebugConfig::default());
    }

    #[test]
    fn test_partial_planet_entry_uses_default_material() {
        let ron_str = r#"(scene: (planets: [(texture: "a.png")]))"#;
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.scene.planets.len(), 1);
        assert_eq!(config.scene.planets[0].texture, "a.png");
        assert!((config.scene.planets[0].roughness - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.window.width = 1920;
        config.scroll.throttle_delay_ms = 1500;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.scroll.cycle_length = 6;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.map(|c| c.scroll.cycle_length), Some(6));
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ron"), "{{not valid}}").unwrap();
        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_backdrop_must_enclose_scene() {
        let mut config = Config::default();
        config.scene.star_radius = 5.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "scene.star_radius",
                ..
            }
        ));
    }

    #[test]
    fn test_inverted_clip_planes_rejected() {
        let mut config = Config::default();
        config.scene.camera_near = 200.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_file_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "(window: (width: 0))").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(err.to_string().contains("window"));
    }

    #[test]
    fn test_reload_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::default().reload(dir.path());
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// This is a comment\n(\n  // Another comment\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }
}
