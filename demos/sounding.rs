use rocketpath::dynamics::state::SimConfig;
use rocketpath::io::csv;
use rocketpath::io::json::{self, FlightSummary};
use rocketpath::sim;
use rocketpath::vehicle::presets;

fn main() -> anyhow::Result<()> {
    let rocket = presets::sounding();
    let config = SimConfig::with_dt(0.01);

    println!("Simulating {} ...", rocket.name());
    let flight = sim::simulate(&rocket, &config)?;

    let metrics = flight.metrics();
    println!("Apogee: {:.1} m", metrics.max_altitude_m);
    println!("Max velocity: {:.1} m/s", metrics.max_velocity_ms);
    println!("Flight time: {:.1} s", metrics.total_flight_time_s);

    csv::write_flight_file("sounding_trajectory.csv", &flight, &metrics, true)?;
    json::write_summary_file("sounding_summary.json", &FlightSummary::from_flight(&flight))?;

    println!("Exported: sounding_trajectory.csv, sounding_summary.json");
    Ok(())
}
