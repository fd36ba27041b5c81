use serde::Serialize;

use crate::dynamics::state::G;
use crate::error::{Result, SimError};

/// Fraction of the lift-off mass assumed to be propellant.
pub const PROPELLANT_MASS_FRACTION: f64 = 0.8;

// ---------------------------------------------------------------------------
// Rocket definition (single stage, constant thrust)
// ---------------------------------------------------------------------------

/// Static rocket parameters. Fields are private so every value that reaches
/// the engine has been through [`RocketConfig::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocketConfig {
    name: String,
    mass: f64,       // kg
    thrust: f64,     // N
    burn_time: f64,  // s
}

impl RocketConfig {
    /// Validate and build a rocket.
    ///
    /// Negative or non-finite values are input errors; a zero mass is a
    /// degenerate configuration (thrust/mass is undefined).
    pub fn new(mass: f64, thrust: f64, burn_time: f64) -> Result<Self> {
        check_value("mass", mass)?;
        check_value("thrust", thrust)?;
        check_value("burn_time", burn_time)?;
        if mass == 0.0 {
            return Err(SimError::DegenerateConfig(
                "mass must be strictly positive".into(),
            ));
        }
        Ok(Self {
            name: "Rocket".into(),
            mass,
            thrust,
            burn_time,
        })
    }

    /// Build from raw text fields, as typed into a form or passed on the
    /// command line.
    pub fn parse(mass: &str, thrust: &str, burn_time: &str) -> Result<Self> {
        Self::new(
            parse_field("mass", mass)?,
            parse_field("thrust", thrust)?,
            parse_field("burn_time", burn_time)?,
        )
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn thrust(&self) -> f64 {
        self.thrust
    }

    pub fn burn_time(&self) -> f64 {
        self.burn_time
    }

    pub fn propellant_mass_fraction(&self) -> f64 {
        PROPELLANT_MASS_FRACTION
    }

    /// Thrust-to-weight ratio at ignition.
    pub fn twr(&self) -> f64 {
        self.thrust / (self.mass * G)
    }
}

fn check_value(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SimError::invalid(field, format!("{value} is not a finite number")));
    }
    if value < 0.0 {
        return Err(SimError::invalid(field, format!("{value} is negative")));
    }
    Ok(())
}

fn parse_field(field: &'static str, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| SimError::invalid(field, format!("'{}' is not a number", text.trim())))
}

// ---------------------------------------------------------------------------
// Rocket builder
// ---------------------------------------------------------------------------

pub struct RocketBuilder {
    name: String,
    mass: f64,
    thrust: f64,
    burn_time: f64,
}

impl RocketBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mass: 0.0,
            thrust: 0.0,
            burn_time: 0.0,
        }
    }

    pub fn mass(mut self, v: f64) -> Self { self.mass = v; self }
    pub fn thrust(mut self, v: f64) -> Self { self.thrust = v; self }
    pub fn burn_time(mut self, v: f64) -> Self { self.burn_time = v; self }

    pub fn build(self) -> Result<RocketConfig> {
        Ok(RocketConfig::new(self.mass, self.thrust, self.burn_time)?.named(self.name))
    }
}

// ---------------------------------------------------------------------------
// Preset rockets
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    pub const NAMES: [&str; 3] = ["sounding", "heavy-lifter", "underpowered"];

    /// Small sounding rocket, TWR ~3.
    pub fn sounding() -> RocketConfig {
        RocketConfig {
            name: "Sounding".into(),
            mass: 50.0,
            thrust: 1500.0,
            burn_time: 5.0,
        }
    }

    /// Large vehicle with a long burn, TWR ~1.5.
    pub fn heavy_lifter() -> RocketConfig {
        RocketConfig {
            name: "Heavy Lifter".into(),
            mass: 20_000.0,
            thrust: 300_000.0,
            burn_time: 60.0,
        }
    }

    /// Thrust below weight: never leaves the pad.
    pub fn underpowered() -> RocketConfig {
        RocketConfig {
            name: "Underpowered".into(),
            mass: 1000.0,
            thrust: 5000.0,
            burn_time: 10.0,
        }
    }

    pub fn by_name(name: &str) -> Option<RocketConfig> {
        match name {
            "sounding" => Some(sounding()),
            "heavy-lifter" => Some(heavy_lifter()),
            "underpowered" => Some(underpowered()),
            _ => None,
        }
    }
}
