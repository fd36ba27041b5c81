use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::analysis::PerformanceMetrics;
use crate::error::{Result, SimError};
use crate::sim::FlightResult;

/// Write a flight to CSV.
///
/// Columns: `Time (s)`, `Altitude (m)`, optionally `Velocity (m/s)`, then
/// every metric. The metrics are written once per call and repeated on each
/// row so the file stays a single flat table. Floats use the shortest text
/// that parses back to the same value, so small steps keep distinct times.
pub fn write_flight<W: Write>(
    writer: &mut W,
    flight: &FlightResult,
    metrics: &PerformanceMetrics,
    include_velocity: bool,
) -> Result<()> {
    if flight.is_empty() {
        return Err(SimError::invalid("trajectory", "no simulation data to export"));
    }

    let entries = metrics.entries();

    write!(writer, "Time (s),Altitude (m)")?;
    if include_velocity {
        write!(writer, ",Velocity (m/s)")?;
    }
    for (label, _) in &entries {
        write!(writer, ",{label}")?;
    }
    writeln!(writer)?;

    let metric_cells: String = entries.iter().map(|(_, v)| format!(",{v}")).collect();

    for s in &flight.trajectory {
        write!(writer, "{},{}", s.time, s.altitude)?;
        if include_velocity {
            write!(writer, ",{}", s.velocity)?;
        }
        writeln!(writer, "{metric_cells}")?;
    }

    debug!(rows = flight.trajectory.len(), "wrote flight csv");
    Ok(())
}

/// Write a flight CSV to the given path.
pub fn write_flight_file(
    path: impl AsRef<Path>,
    flight: &FlightResult,
    metrics: &PerformanceMetrics,
    include_velocity: bool,
) -> Result<()> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_flight(&mut file, flight, metrics, include_velocity)?;
    file.flush()?;
    Ok(())
}
