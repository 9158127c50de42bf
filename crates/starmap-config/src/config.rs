//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Default config directory: `<platform config dir>/starmap`, or `./starmap`
/// when the platform has no config directory.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("starmap")
}

/// Top-level map configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Camera limits and animation timings.
    pub camera: CameraConfig,
    /// Orbit layout and body sizing.
    pub layout: LayoutConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Camera configuration shared by every map view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Smallest allowed zoom factor.
    pub min_zoom: f32,
    /// Largest allowed zoom factor.
    pub max_zoom: f32,
    /// Zoom change per scroll-wheel notch, also the snapping grid.
    pub zoom_step: f32,
    /// Zoom reached at the end of a "focus on body" animation.
    pub focus_zoom: f32,
    /// Seconds spent panning a selected body to the viewport center.
    pub center_duration: f32,
    /// Seconds spent zooming in once the body is centered.
    pub zoom_duration: f32,
    /// Seconds of the one-time tilt-in played when a view opens.
    pub tilt_duration: f32,
    /// Canvas shear reached by the tilt-in.
    pub target_tilt: f32,
    /// Pixels of content that must overhang each viewport edge while dragging.
    pub safe_margin: f32,
    /// Horizontal padding added on each side of the content bounds.
    pub content_padding_x: f32,
    /// Vertical padding added on each side of the content bounds.
    pub content_padding_y: f32,
}

/// Radius-to-pixel mapping for one size class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SizeScale {
    /// Radius mapped to `min_px`; smaller radii are clamped up.
    pub min_radius_km: f64,
    /// Radius mapped to `max_px`; larger radii are clamped down.
    pub max_radius_km: f64,
    /// Marker size of the smallest body in the class.
    pub min_px: f32,
    /// Marker size of the largest body in the class.
    pub max_px: f32,
    /// Exponent applied to the normalized log radius. Below 1 spreads the large end.
    pub perceptual_power: f64,
}

/// Size mapping per body class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SizeScaleTable {
    /// Central stars.
    pub star: SizeScale,
    /// Planets.
    pub planet: SizeScale,
    /// Moons.
    pub moon: SizeScale,
}

/// Orbit layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Screen radius, in pixels, of the widest orbit in a view.
    pub max_orbit_px: f32,
    /// Multiplier applied to inclinations before projecting them.
    pub inclination_amplification: f64,
    /// Seed for phase angles of bodies that have none. `None` draws fresh
    /// random phases for every new view.
    pub phase_seed: Option<u64>,
    /// Radius-to-pixel mapping per size class.
    pub sizes: SizeScaleTable,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter (e.g., "debug", "info", "starmap_camera=trace").
    pub log_level: String,
    /// Also write JSON logs to a file in debug builds.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.5,
            max_zoom: 4.0,
            zoom_step: 0.1,
            focus_zoom: 1.5,
            center_duration: 0.5,
            zoom_duration: 0.5,
            tilt_duration: 0.6,
            target_tilt: 0.2,
            safe_margin: 100.0,
            content_padding_x: 400.0,
            content_padding_y: 300.0,
        }
    }
}

impl Default for SizeScale {
    fn default() -> Self {
        SizeScaleTable::default().planet
    }
}

impl Default for SizeScaleTable {
    fn default() -> Self {
        Self {
            star: SizeScale {
                min_radius_km: 1.2e9,
                max_radius_km: 2.2e9,
                min_px: 104.0,
                max_px: 160.0,
                perceptual_power: 0.70,
            },
            planet: SizeScale {
                min_radius_km: 2_000.0,
                max_radius_km: 80_000.0,
                min_px: 44.0,
                max_px: 96.0,
                perceptual_power: 0.75,
            },
            moon: SizeScale {
                min_radius_km: 100.0,
                max_radius_km: 1_800.0,
                min_px: 18.0,
                max_px: 40.0,
                perceptual_power: 0.85,
            },
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_orbit_px: 480.0,
            inclination_amplification: 2.0,
            phase_seed: Some(0x5EED_0F_57A5),
            sizes: SizeScaleTable::default(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

// --- Validation ---

impl SizeScale {
    fn validate(&self, class: &str) -> Result<(), ConfigError> {
        if !(self.min_radius_km > 0.0 && self.min_radius_km < self.max_radius_km) {
            return Err(ConfigError::Invalid(format!(
                "{class}: radius domain [{}, {}] must be positive and increasing",
                self.min_radius_km, self.max_radius_km
            )));
        }
        if !(self.min_px >= 0.0 && self.min_px <= self.max_px) {
            return Err(ConfigError::Invalid(format!(
                "{class}: pixel range [{}, {}] must be non-negative and increasing",
                self.min_px, self.max_px
            )));
        }
        if !(self.perceptual_power > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "{class}: perceptual_power must be positive, got {}",
                self.perceptual_power
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Check invariants that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cam = &self.camera;
        if !(cam.min_zoom > 0.0 && cam.min_zoom <= cam.max_zoom) {
            return Err(ConfigError::Invalid(format!(
                "zoom range [{}, {}] must be positive and increasing",
                cam.min_zoom, cam.max_zoom
            )));
        }
        if cam.safe_margin < 0.0 || cam.content_padding_x < 0.0 || cam.content_padding_y < 0.0 {
            return Err(ConfigError::Invalid(
                "safe_margin and content padding must not be negative".to_string(),
            ));
        }
        if !(self.layout.max_orbit_px > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max_orbit_px must be positive, got {}",
                self.layout.max_orbit_px
            )));
        }
        self.layout.sizes.star.validate("star")?;
        self.layout.sizes.planet.validate("planet")?;
        self.layout.sizes.moon.validate("moon")?;
        Ok(())
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            config.validate()?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        new_config.validate()?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(4))
                .unwrap();
        assert!(ron_str.contains("max_zoom:"));
        assert!(ron_str.contains("max_orbit_px:"));
        assert!(ron_str.contains("perceptual_power:"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let ron_str = "(camera: (max_zoom: 8.0))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.camera.max_zoom, 8.0);
        assert_eq!(config.camera.min_zoom, 0.5);
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_size_classes_are_disjoint() {
        let t = SizeScaleTable::default();
        assert!(t.moon.max_radius_km < t.planet.min_radius_km);
        assert!(t.planet.max_radius_km < t.star.min_radius_km);
        assert!(t.moon.max_px < t.planet.min_px);
        assert!(t.planet.max_px < t.star.min_px);
    }

    #[test]
    fn test_inverted_zoom_range_rejected() {
        let mut config = Config::default();
        config.camera.min_zoom = 5.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_inverted_radius_domain_rejected() {
        let mut config = Config::default();
        config.layout.sizes.moon.max_radius_km = 50.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("moon"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.camera.focus_zoom = 2.0;
        config.layout.phase_seed = None;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "(camera: (min_zoom: 3.0, max_zoom: 1.0))",
        )
        .unwrap();
        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.camera.target_tilt = 0.35;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.unwrap().camera.target_tilt, 0.35);
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
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }
}
