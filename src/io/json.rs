use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::analysis::{assess, Finding, PerformanceMetrics};
use crate::error::Result;
use crate::sim::{FlightResult, SimEvent};
use crate::vehicle::RocketConfig;

/// Summary of one run, serialized as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct FlightSummary<'a> {
    pub rocket: &'a RocketConfig,
    pub dt: f64,
    pub samples: usize,
    pub performance: PerformanceMetrics,
    pub events: Vec<SimEvent>,
    pub findings: Vec<Finding>,
}

impl<'a> FlightSummary<'a> {
    pub fn from_flight(flight: &'a FlightResult) -> Self {
        let performance = flight.metrics();
        FlightSummary {
            rocket: &flight.rocket,
            dt: flight.config.dt,
            samples: flight.trajectory.len(),
            performance,
            events: flight.events(),
            findings: assess(&performance),
        }
    }
}

/// Write a flight summary as pretty JSON.
pub fn write_summary<W: Write>(writer: &mut W, summary: &FlightSummary) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, summary)?;
    writeln!(writer)?;
    Ok(())
}

/// Write flight summary JSON to a file.
pub fn write_summary_file(path: impl AsRef<Path>, summary: &FlightSummary) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, summary)
}
