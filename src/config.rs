use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::dynamics::state::SimConfig;
use crate::error::{Result, SimError};
use crate::vehicle::RocketConfig;

/// `[rocket]` table as written in a launch file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RocketSection {
    #[serde(default)]
    pub name: Option<String>,
    pub mass: f64,
    pub thrust: f64,
    pub burn_time: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct LaunchFile {
    rocket: RocketSection,
    #[serde(default)]
    sim: SimConfig,
}

/// A validated rocket plus integration settings.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub rocket: RocketConfig,
    pub sim: SimConfig,
}

impl LaunchConfig {
    /// Parse a TOML launch description:
    ///
    /// ```toml
    /// [rocket]
    /// name = "Sounding"
    /// mass = 50.0
    /// thrust = 1500.0
    /// burn_time = 5.0
    ///
    /// [sim]
    /// dt = 0.1
    /// ```
    pub fn from_toml(text: &str) -> Result<Self> {
        let file: LaunchFile =
            toml::from_str(text).map_err(|e| SimError::Config(e.to_string()))?;
        let section = file.rocket;
        let mut rocket = RocketConfig::new(section.mass, section.thrust, section.burn_time)?;
        if let Some(name) = section.name {
            rocket = rocket.named(name);
        }
        file.sim.validate()?;
        Ok(Self { rocket, sim: file.sim })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading launch config");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_file_parses() {
        let cfg = LaunchConfig::from_toml(
            r#"
            [rocket]
            name = "Test"
            mass = 50.0
            thrust = 1500.0
            burn_time = 5.0

            [sim]
            dt = 0.05
            max_steps = 5000
            "#,
        )
        .unwrap();
        assert_eq!(cfg.rocket.name(), "Test");
        assert_eq!(cfg.rocket.thrust(), 1500.0);
        assert_eq!(cfg.sim.dt, 0.05);
        assert_eq!(cfg.sim.max_steps, 5000);
    }

    #[test]
    fn sim_section_is_optional() {
        let cfg = LaunchConfig::from_toml(
            "[rocket]\nmass = 10.0\nthrust = 300.0\nburn_time = 2.0\n",
        )
        .unwrap();
        assert_eq!(cfg.sim, SimConfig::default());
        assert_eq!(cfg.rocket.name(), "Rocket");
    }

    #[test]
    fn partial_sim_section_keeps_defaults() {
        let cfg = LaunchConfig::from_toml(
            "[rocket]\nmass = 10.0\nthrust = 300.0\nburn_time = 2.0\n[sim]\ndt = 0.01\n",
        )
        .unwrap();
        assert_eq!(cfg.sim.max_steps, SimConfig::default().max_steps);
    }

    #[test]
    fn negative_mass_rejected() {
        let err = LaunchConfig::from_toml(
            "[rocket]\nmass = -10.0\nthrust = 300.0\nburn_time = 2.0\n",
        )
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidInput { field: "mass", .. }));
    }

    #[test]
    fn bad_step_rejected() {
        let err = LaunchConfig::from_toml(
            "[rocket]\nmass = 10.0\nthrust = 300.0\nburn_time = 2.0\n[sim]\ndt = 0.0\n",
        )
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidStep(_)));
    }

    #[test]
    fn misspelled_table_rejected() {
        let err = LaunchConfig::from_toml(
            "[rocket]\nmass = 10.0\nthrust = 300.0\nburn_time = 2.0\n[simm]\ndt = 0.01\n",
        )
        .unwrap_err();
        assert!(matches!(err, SimError::Config(ref msg) if msg.contains("simm")));
    }

    #[test]
    fn misspelled_sim_key_rejected() {
        let err = LaunchConfig::from_toml(
            "[rocket]\nmass = 10.0\nthrust = 300.0\nburn_time = 2.0\n[sim]\nstep = 0.01\n",
        )
        .unwrap_err();
        assert!(matches!(err, SimError::Config(ref msg) if msg.contains("step")));
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = LaunchConfig::from_toml("[rocket]\nmass = \"heavy\"\n").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }
}
