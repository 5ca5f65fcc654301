use anyhow::Result;
use holoexpo_hero::Easing;
use holoexpo_particles::{ParticleConfig, ParticleConfigError};
use holoexpo_ui::{Countdown, CountdownError};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;
use tracing::warn;

const DEFAULT_LANDING_PATH: &str = "config/landing.toml";

/// Demo ticketing widget shown in the booking modal.
pub const DEFAULT_WIDGET_URL: &str = "https://konfhub.com/widget/holoexpo-demo?desc=false&secondaryBg=F7F7F7&ticketBg=F7F7F7&borderCl=F7F7F7&bg=FFFFFF&fontColor=1e1f24&ticketCl=1e1f24&btnColor=00f3ff&fontFamily=Inter&borderRadius=10&widget_type=standard";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Particles(#[from] ParticleConfigError),
    #[error(transparent)]
    EventStart(#[from] CountdownError),
    #[error("camera {field} must be positive, got {value}")]
    Camera { field: &'static str, value: f32 },
    #[error("camera near plane {near} must be closer than far plane {far}")]
    CameraPlanes { near: f32, far: f32 },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Camera distance from the icon plane along +Z.
    pub position_z: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            position_z: 8.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct IconsConfig {
    /// World z of the plane hover icons sit on.
    pub depth: f32,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self { depth: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ArmConfig {
    /// Curve the arm joints use when chasing the pointer.
    pub easing: Easing,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Event start, RFC 3339 or `YYYY-MM-DDTHH:MM:SS` (UTC).
    pub event_start: String,
    pub booking_widget_url: String,
    pub particles: ParticleConfig,
    pub camera: CameraConfig,
    pub icons: IconsConfig,
    pub arm: ArmConfig,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            event_start: "2026-12-01T10:00:00".to_string(),
            booking_widget_url: DEFAULT_WIDGET_URL.to_string(),
            particles: ParticleConfig::default(),
            camera: CameraConfig::default(),
            icons: IconsConfig::default(),
            arm: ArmConfig::default(),
        }
    }
}

impl LandingConfig {
    /// Load landing configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_LANDING_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    ///
    /// Sections that parse but fail validation are replaced by their defaults.
    pub fn load_from_path(path: &Path) -> Self {
        let config = match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<LandingConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    LandingConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_LANDING_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else {
                    warn!(
                        "Landing config not found at {}. Using defaults",
                        path.display()
                    );
                }
                LandingConfig::default()
            }
        };
        config.sanitized()
    }

    /// Save landing configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }

    /// Check every section. The event start is checked separately by
    /// [`LandingConfig::countdown`] since a bad date only hides the countdown.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.particles.validate()?;
        self.validate_camera()
    }

    fn validate_camera(&self) -> Result<(), ConfigError> {
        let camera = &self.camera;
        for (field, value) in [
            ("fov_degrees", camera.fov_degrees),
            ("position_z", camera.position_z - self.icons.depth),
            ("near", camera.near),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::Camera { field, value });
            }
        }
        if camera.fov_degrees >= 180.0 {
            return Err(ConfigError::Camera {
                field: "fov_degrees",
                value: camera.fov_degrees,
            });
        }
        if !(camera.far > camera.near) {
            return Err(ConfigError::CameraPlanes {
                near: camera.near,
                far: camera.far,
            });
        }
        Ok(())
    }

    /// Countdown for the configured event start.
    pub fn countdown(&self) -> Result<Countdown, ConfigError> {
        Ok(Countdown::parse(&self.event_start)?)
    }

    fn sanitized(mut self) -> Self {
        while let Err(err) = self.validate() {
            match err {
                ConfigError::Particles(_) => {
                    warn!("Invalid [particles] section: {err}. Using defaults");
                    self.particles = ParticleConfig::default();
                }
                ConfigError::Camera { .. } | ConfigError::CameraPlanes { .. } => {
                    warn!("Invalid [camera]/[icons] section: {err}. Using defaults");
                    self.camera = CameraConfig::default();
                    self.icons = IconsConfig::default();
                }
                ConfigError::EventStart(_) => break,
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "holoexpo_config_{}_{name}.toml",
            std::process::id()
        ))
    }

    #[test]
    fn defaults_are_valid() {
        let config = LandingConfig::default();
        config.validate().unwrap();
        assert!(config.countdown().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config: LandingConfig = toml::from_str(
            r#"
event_start = "2027-03-04T09:30:00Z"

[particles]
max_count = 40
"#,
        )
        .unwrap();
        assert_eq!(config.particles.max_count, 40);
        assert_eq!(config.particles.area_per_particle, 15000.0);
        assert_eq!(config.camera, CameraConfig::default());
        assert!(config.countdown().is_ok());
    }

    #[test]
    fn arm_easing_is_named_like_the_curves() {
        let config: LandingConfig = toml::from_str("[arm]\neasing = \"back.out\"\n").unwrap();
        assert_eq!(config.arm.easing, Easing::BackOut);
        assert_eq!(LandingConfig::default().arm.easing, Easing::Power1Out);
        assert!(toml::from_str::<LandingConfig>("[arm]\neasing = \"bounce\"\n").is_err());
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_path("round_trip");
        let mut config = LandingConfig::default();
        config.icons.depth = -1.5;
        config.arm.easing = Easing::Linear;
        config.save_to_path(&path).unwrap();
        let loaded = LandingConfig::load_from_path(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let loaded = LandingConfig::load_from_path(&temp_path("does_not_exist"));
        assert_eq!(loaded, LandingConfig::default());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let path = temp_path("malformed");
        fs::write(&path, "particles = [").unwrap();
        let loaded = LandingConfig::load_from_path(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, LandingConfig::default());
    }

    #[test]
    fn invalid_section_is_replaced() {
        let path = temp_path("invalid_section");
        fs::write(
            &path,
            "[particles]\narea_per_particle = 0.0\n\n[camera]\nnear = 5.0\nfar = 1.0\n",
        )
        .unwrap();
        let loaded = LandingConfig::load_from_path(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(loaded.particles, ParticleConfig::default());
        assert_eq!(loaded.camera, CameraConfig::default());
    }

    #[test]
    fn camera_behind_icon_plane_is_rejected() {
        let mut config = LandingConfig::default();
        config.icons.depth = 9.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Camera { field: "position_z", .. })
        ));
    }

    #[test]
    fn bad_event_start_is_reported() {
        let config = LandingConfig {
            event_start: "soon".into(),
            ..Default::default()
        };
        assert!(matches!(config.countdown(), Err(ConfigError::EventStart(_))));
    }
}
