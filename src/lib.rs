pub mod error;
pub mod dynamics;
pub mod vehicle;
pub mod sim;
pub mod analysis;
pub mod io;
pub mod config;

pub use error::{Result, SimError};

// Flat re-exports for callers that only need the engine and the analyzer
pub mod types {
    pub use crate::dynamics::state::{FlightState, Sample, SimConfig, G};
    pub use crate::vehicle::{RocketConfig, PROPELLANT_MASS_FRACTION};
    pub use crate::analysis::PerformanceMetrics;
    pub use crate::sim::FlightResult;
}

pub use analysis::analyze;
pub use sim::simulate;
