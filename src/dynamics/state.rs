use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G: f64 = 9.81; // constant gravitational acceleration, m/s^2

// ---------------------------------------------------------------------------
// Flight state
// ---------------------------------------------------------------------------

/// Mutable state of the rocket during a run. Positive is up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlightState {
    pub velocity: f64,      // m/s
    pub altitude: f64,      // m
    pub elapsed_time: f64,  // s
    pub max_altitude: f64,  // m, running maximum
    pub max_velocity: f64,  // m/s, running maximum
}

impl FlightState {
    /// Fold the current altitude and velocity into the running maxima.
    pub fn track_extrema(&mut self) {
        if self.altitude > self.max_altitude {
            self.max_altitude = self.altitude;
        }
        if self.velocity > self.max_velocity {
            self.max_velocity = self.velocity;
        }
    }

    pub fn sample(&self) -> Sample {
        Sample {
            time: self.elapsed_time,
            altitude: self.altitude,
            velocity: self.velocity,
        }
    }
}

// ---------------------------------------------------------------------------
// Recorded sample
// ---------------------------------------------------------------------------

/// One recorded point of the trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub time: f64,      // s
    pub altitude: f64,  // m
    pub velocity: f64,  // m/s
}

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub dt: f64,            // integration timestep, s
    pub max_steps: usize,   // hard stop
}

impl SimConfig {
    pub fn with_dt(dt: f64) -> Self {
        Self { dt, ..Self::default() }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidStep(self.dt));
        }
        if self.max_steps == 0 {
            return Err(SimError::Config("max_steps must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.1,
            max_steps: 1_000_000,
        }
    }
}
