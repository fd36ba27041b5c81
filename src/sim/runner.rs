use tracing::{debug, info, warn};

use super::event::{detect_events, phases, Phase, SimEvent};
use super::integrator::euler_step;
use crate::analysis::{analyze, PerformanceMetrics};
use crate::dynamics::state::{FlightState, Sample, SimConfig};
use crate::error::{Result, SimError};
use crate::vehicle::RocketConfig;

// ---------------------------------------------------------------------------
// Flight result
// ---------------------------------------------------------------------------

/// Everything one run produced. Handed explicitly to analysis, rendering and
/// export; nothing about a run is kept anywhere else.
#[derive(Debug, Clone)]
pub struct FlightResult {
    pub rocket: RocketConfig,
    pub config: SimConfig,
    pub trajectory: Vec<Sample>,
    pub terminal: FlightState,
}

impl FlightResult {
    pub fn times(&self) -> Vec<f64> {
        self.trajectory.iter().map(|s| s.time).collect()
    }

    pub fn altitudes(&self) -> Vec<f64> {
        self.trajectory.iter().map(|s| s.altitude).collect()
    }

    pub fn velocities(&self) -> Vec<f64> {
        self.trajectory.iter().map(|s| s.velocity).collect()
    }

    /// The three series plus the terminal state, in that order.
    pub fn into_series(self) -> (Vec<f64>, Vec<f64>, Vec<f64>, FlightState) {
        let (times, altitudes, velocities) = (self.times(), self.altitudes(), self.velocities());
        (times, altitudes, velocities, self.terminal)
    }

    pub fn metrics(&self) -> PerformanceMetrics {
        analyze(&self.rocket, &self.terminal)
    }

    pub fn phases(&self) -> Vec<Phase> {
        phases(&self.trajectory, self.rocket.burn_time())
    }

    pub fn events(&self) -> Vec<SimEvent> {
        detect_events(&self.trajectory, self.rocket.burn_time())
    }

    pub fn is_empty(&self) -> bool {
        self.trajectory.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Full simulation loop
// ---------------------------------------------------------------------------

/// Fly `rocket` from the pad until the altitude first drops below zero.
///
/// The below-ground sample that ends the run is kept. Fails only on a bad
/// step size or when `config.max_steps` is reached before landing.
pub fn simulate(rocket: &RocketConfig, config: &SimConfig) -> Result<FlightResult> {
    config.validate()?;
    // Presets are built without going through RocketConfig::new.
    if rocket.mass() <= 0.0 {
        return Err(SimError::DegenerateConfig("mass must be strictly positive".into()));
    }

    debug!(
        rocket = rocket.name(),
        mass = rocket.mass(),
        thrust = rocket.thrust(),
        burn_time = rocket.burn_time(),
        dt = config.dt,
        "starting flight"
    );
    if rocket.twr() < 1.0 {
        warn!(twr = rocket.twr(), "thrust-to-weight below 1, rocket will not lift off");
    }

    let mut state = FlightState::default();
    let mut trajectory = Vec::new();

    while state.altitude >= 0.0 {
        if trajectory.len() >= config.max_steps {
            return Err(SimError::StepLimit { steps: config.max_steps });
        }
        euler_step(&mut state, rocket, config.dt);
        trajectory.push(state.sample());
    }

    info!(
        steps = trajectory.len(),
        apogee = state.max_altitude,
        flight_time = state.elapsed_time,
        "flight complete"
    );

    Ok(FlightResult {
        rocket: rocket.clone(),
        config: *config,
        trajectory,
        terminal: state,
    })
}

/// Run with the default 0.1 s step.
pub fn simulate_default(rocket: &RocketConfig) -> Result<FlightResult> {
    simulate(rocket, &SimConfig::default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::presets;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn sounding_flight() -> FlightResult {
        simulate(&presets::sounding(), &SimConfig::with_dt(0.1)).unwrap()
    }

    #[test]
    fn time_advances_by_one_step_per_sample() {
        let f = sounding_flight();
        assert_abs_diff_eq!(f.trajectory[0].time, 0.1, epsilon = 1e-12);
        for pair in f.trajectory.windows(2) {
            assert!(pair[1].time > pair[0].time);
            assert_abs_diff_eq!(pair[1].time - pair[0].time, 0.1, epsilon = 1e-9);
        }
    }

    #[test]
    fn run_ends_on_first_below_ground_sample() {
        let f = sounding_flight();
        let (last, rest) = f.trajectory.split_last().unwrap();
        assert!(last.altitude < 0.0);
        assert!(rest.iter().all(|s| s.altitude >= 0.0));
        assert_eq!(f.terminal.sample(), *last);
    }

    #[test]
    fn terminal_maxima_match_series() {
        let f = sounding_flight();
        let alt_max = f.trajectory.iter().map(|s| s.altitude).fold(0.0_f64, f64::max);
        let vel_max = f.trajectory.iter().map(|s| s.velocity).fold(0.0_f64, f64::max);
        assert_relative_eq!(f.terminal.max_altitude, alt_max);
        assert_relative_eq!(f.terminal.max_velocity, vel_max);
    }

    #[test]
    fn sounding_rocket_peaks_at_burnout() {
        let rocket = presets::sounding();
        let f = sounding_flight();
        let peak = f
            .trajectory
            .iter()
            .max_by(|a, b| a.velocity.total_cmp(&b.velocity))
            .unwrap();
        assert_abs_diff_eq!(peak.time, rocket.burn_time(), epsilon = 0.15);
        assert!(f.terminal.max_altitude > 0.0);
        assert!(f.terminal.elapsed_time > rocket.burn_time());
    }

    #[test]
    fn sounding_rocket_apogee_is_physical() {
        // Burnout ~101 m/s at ~252 m, ballistic coast adds ~520 m.
        let f = sounding_flight();
        assert!(f.terminal.max_altitude > 700.0, "apogee {}", f.terminal.max_altitude);
        assert!(f.terminal.max_altitude < 850.0, "apogee {}", f.terminal.max_altitude);
    }

    #[test]
    fn underpowered_rocket_stops_after_one_step() {
        let f = simulate(&presets::underpowered(), &SimConfig::default()).unwrap();
        assert_eq!(f.trajectory.len(), 1);
        assert!(f.trajectory[0].altitude < 0.0);
        assert!(f.trajectory.iter().all(|s| s.altitude <= 0.01));
        assert_eq!(f.terminal.max_altitude, 0.0);
        assert_eq!(f.terminal.max_velocity, 0.0);
    }

    #[test]
    fn zero_thrust_terminates_cleanly() {
        let rocket = RocketConfig::new(10.0, 0.0, 0.0).unwrap();
        let f = simulate_default(&rocket).unwrap();
        assert_eq!(f.trajectory.len(), 1);
    }

    #[test]
    fn rocket_config_is_untouched() {
        let rocket = presets::sounding();
        let before = rocket.clone();
        let f = simulate_default(&rocket).unwrap();
        assert_eq!(rocket, before);
        assert_eq!(f.rocket, before);
    }

    #[test]
    fn runs_are_deterministic() {
        let a = sounding_flight();
        let b = sounding_flight();
        assert_eq!(a.trajectory, b.trajectory);
        assert_eq!(a.terminal, b.terminal);
    }

    #[test]
    fn step_ceiling_is_reported() {
        let config = SimConfig { dt: 0.1, max_steps: 10 };
        let err = simulate(&presets::sounding(), &config).unwrap_err();
        assert!(matches!(err, SimError::StepLimit { steps: 10 }));
    }

    #[test]
    fn bad_step_is_reported() {
        let err = simulate(&presets::sounding(), &SimConfig::with_dt(0.0)).unwrap_err();
        assert!(matches!(err, SimError::InvalidStep(_)));
    }

    #[test]
    fn series_are_aligned() {
        let (t, a, v, terminal) = sounding_flight().into_series();
        assert_eq!(t.len(), a.len());
        assert_eq!(a.len(), v.len());
        assert_eq!(*t.last().unwrap(), terminal.elapsed_time);
    }

    #[test]
    fn finer_step_converges() {
        let rocket = presets::sounding();
        let coarse = simulate(&rocket, &SimConfig::with_dt(0.1)).unwrap();
        let fine = simulate(&rocket, &SimConfig::with_dt(0.01)).unwrap();
        let diff = (coarse.terminal.max_altitude - fine.terminal.max_altitude).abs();
        assert!(diff / fine.terminal.max_altitude < 0.05);
    }
}
