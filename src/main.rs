use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rocketpath::analysis::{assess, Severity};
use rocketpath::config::LaunchConfig;
use rocketpath::io;
use rocketpath::sim::{self, FlightResult};
use rocketpath::types::{RocketConfig, SimConfig};
use rocketpath::vehicle::presets;

/// Vertical flight simulation of a single-stage, constant-thrust rocket.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Lift-off mass (kg)
    #[arg(long)]
    mass: Option<String>,

    /// Constant thrust during the burn (N)
    #[arg(long)]
    thrust: Option<String>,

    /// Burn duration (s)
    #[arg(long)]
    burn_time: Option<String>,

    /// Start from a preset rocket: sounding, heavy-lifter, underpowered
    #[arg(long)]
    preset: Option<String>,

    /// TOML launch file with [rocket] and [sim] tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Integration step (s)
    #[arg(long)]
    dt: Option<f64>,

    /// Abort if the rocket has not landed after this many steps
    #[arg(long)]
    max_steps: Option<usize>,

    /// Export the trajectory and metrics as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Include the velocity column in the CSV export
    #[arg(long)]
    with_velocity: bool,

    /// Export a JSON flight summary
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let (rocket, config) = resolve(&cli)?;

    let flight = sim::simulate(&rocket, &config).context("simulation failed")?;
    print_report(&flight);

    if let Some(path) = &cli.csv {
        io::write_flight_file(path, &flight, &flight.metrics(), cli.with_velocity)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "trajectory saved");
    }
    if let Some(path) = &cli.json {
        io::write_summary_file(path, &io::FlightSummary::from_flight(&flight))
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "summary saved");
    }

    Ok(())
}

/// Merge launch file, preset and command-line values. Command-line values win.
fn resolve(cli: &Cli) -> anyhow::Result<(RocketConfig, SimConfig)> {
    let (base, mut config) = match (&cli.config, &cli.preset) {
        (Some(_), Some(_)) => bail!("--config and --preset are mutually exclusive"),
        (Some(path), None) => {
            let launch = LaunchConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?;
            (Some(launch.rocket), launch.sim)
        }
        (None, Some(name)) => {
            let rocket = presets::by_name(name).with_context(|| {
                format!("unknown preset '{}', expected one of {:?}", name, presets::NAMES)
            })?;
            (Some(rocket), SimConfig::default())
        }
        (None, None) => (None, SimConfig::default()),
    };

    let field = |given: &Option<String>, fallback: Option<f64>, flag: &str| {
        given
            .clone()
            .or_else(|| fallback.map(|v| v.to_string()))
            .with_context(|| format!("missing --{flag} (or use --preset / --config)"))
    };
    let mass = field(&cli.mass, base.as_ref().map(|r| r.mass()), "mass")?;
    let thrust = field(&cli.thrust, base.as_ref().map(|r| r.thrust()), "thrust")?;
    let burn_time = field(&cli.burn_time, base.as_ref().map(|r| r.burn_time()), "burn-time")?;

    let mut rocket = RocketConfig::parse(&mass, &thrust, &burn_time)?;
    if let Some(b) = &base {
        rocket = rocket.named(b.name());
    }

    if let Some(dt) = cli.dt {
        config.dt = dt;
    }
    if let Some(max_steps) = cli.max_steps {
        config.max_steps = max_steps;
    }
    config.validate()?;

    Ok((rocket, config))
}

fn print_report(flight: &FlightResult) {
    let rocket = &flight.rocket;
    let metrics = flight.metrics();

    println!();
    println!("====================================================================");
    println!("  ROCKET FLIGHT SIMULATION — {}", rocket.name());
    println!("====================================================================");
    println!();
    println!("  Rocket Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Mass:          {:>8.1} kg    Thrust:       {:>8.0} N",
        rocket.mass(),
        rocket.thrust()
    );
    println!(
        "  Burn time:     {:>8.1} s     TWR:          {:>8.2}",
        rocket.burn_time(),
        rocket.twr()
    );
    println!();

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    for event in flight.events() {
        let s = event.sample;
        println!(
            "  {:<9} t={:>6.1}s   alt={:>8.1}m   vel={:>7.1}m/s",
            event.kind.label(),
            s.time,
            s.altitude,
            s.velocity
        );
    }
    println!();

    println!("  Performance Metrics");
    println!("  ──────────────────────────────────────────────────────────────────");
    for (label, value) in metrics.entries() {
        println!("  {:<26} {:>12.2}", label, value);
    }
    println!();

    println!("  Analysis Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    for finding in assess(&metrics) {
        let marker = match finding.severity {
            Severity::Ok => " ",
            Severity::Advice => ">",
            Severity::Warning => "!",
        };
        println!("  {} {}", marker, finding.message);
    }
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    let trajectory = &flight.trajectory;
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  {:>7}  {:>9}  {:>9}  {:>7}", "t (s)", "alt (m)", "vel (m/s)", "phase");
    println!("  {}", "─".repeat(40));

    let phases = flight.phases();
    let sample_interval = (trajectory.len() / 30).max(1);
    for (i, (s, phase)) in trajectory.iter().zip(&phases).enumerate() {
        let print = i % sample_interval == 0
            || (s.time - rocket.burn_time()).abs() < flight.config.dt * 0.5
            || i == trajectory.len() - 1;
        if !print {
            continue;
        }
        println!(
            "  {:>7.2}  {:>9.1}  {:>9.1}  {:>7}",
            s.time,
            s.altitude,
            s.velocity,
            phase.label()
        );
    }

    println!();
    println!("  Simulation: {} steps, dt={} s", trajectory.len(), flight.config.dt);
    println!("====================================================================");
    println!();
}
