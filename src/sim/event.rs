use serde::Serialize;

use crate::dynamics::state::Sample;

// ---------------------------------------------------------------------------
// Flight phases
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Burn,
    Coast,
    Descent,
}

impl Phase {
    /// Classify a sample from the time its step started, which is what the
    /// thrust gate saw. Accumulated step times drift, so the sample's own
    /// stamp can land past `burn_time` on a step that still burned.
    pub fn of(sample: &Sample, step_start: f64, burn_time: f64) -> Phase {
        if step_start < burn_time {
            Phase::Burn
        } else if sample.velocity > 0.0 {
            Phase::Coast
        } else {
            Phase::Descent
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Burn => "BURN",
            Phase::Coast => "COAST",
            Phase::Descent => "DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Simulation events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventKind {
    Burnout,
    Apogee,
    Landing,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Burnout => "BURNOUT",
            EventKind::Apogee => "APOGEE",
            EventKind::Landing => "LANDING",
        }
    }
}

/// A discrete event and the sample at which it was observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimEvent {
    pub kind: EventKind,
    pub sample: Sample,
}

/// Inspects consecutive samples and reports events.
pub trait EventDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind>;
}

/// Fires on the last sample that burned: its step started before
/// `burn_time` and the next one will not.
pub struct BurnoutDetector {
    burn_time: f64,
    fired: bool,
}

impl BurnoutDetector {
    pub fn new(burn_time: f64) -> Self {
        Self { burn_time, fired: false }
    }
}

impl EventDetector for BurnoutDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        if prev.time < self.burn_time && current.time >= self.burn_time {
            self.fired = true;
            Some(EventKind::Burnout)
        } else {
            None
        }
    }
}

/// Velocity going from positive to non-positive.
pub struct ApogeeDetector;

impl EventDetector for ApogeeDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        if prev.velocity > 0.0 && current.velocity <= 0.0 {
            Some(EventKind::Apogee)
        } else {
            None
        }
    }
}

/// Altitude crossing below ground.
pub struct LandingDetector;

impl EventDetector for LandingDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        if prev.altitude >= 0.0 && current.altitude < 0.0 {
            Some(EventKind::Landing)
        } else {
            None
        }
    }
}

/// Phase of every sample, in trajectory order.
pub fn phases(trajectory: &[Sample], burn_time: f64) -> Vec<Phase> {
    let mut step_start = 0.0;
    trajectory
        .iter()
        .map(|s| {
            let phase = Phase::of(s, step_start, burn_time);
            step_start = s.time;
            phase
        })
        .collect()
}

/// Run the standard detectors over a trajectory. Events come out in time
/// order. The pad (t = 0, at rest) is the implicit previous sample of the
/// first record, so a rocket that never lifts off still lands.
pub fn detect_events(trajectory: &[Sample], burn_time: f64) -> Vec<SimEvent> {
    let mut detectors: Vec<Box<dyn EventDetector>> = vec![
        Box::new(BurnoutDetector::new(burn_time)),
        Box::new(ApogeeDetector),
        Box::new(LandingDetector),
    ];

    let pad = Sample { time: 0.0, altitude: 0.0, velocity: 0.0 };
    let mut events = Vec::new();
    let mut prev = &pad;
    for current in trajectory {
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(prev, current) {
                events.push(SimEvent { kind, sample: *current });
            }
        }
        prev = current;
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::acceleration;
    use crate::dynamics::state::{SimConfig, G};
    use crate::sim::simulate;
    use crate::vehicle::presets;

    fn sample(time: f64, altitude: f64, velocity: f64) -> Sample {
        Sample { time, altitude, velocity }
    }

    #[test]
    fn apogee_detected() {
        let mut det = ApogeeDetector;
        let prev = sample(10.0, 500.0, 2.0);
        let curr = sample(10.1, 500.1, -0.5);
        assert_eq!(det.check(&prev, &curr), Some(EventKind::Apogee));
    }

    #[test]
    fn burnout_fires_once() {
        let mut det = BurnoutDetector::new(1.0);
        let prev = sample(0.9, 10.0, 5.0);
        let curr = sample(1.0000000000000002, 10.5, 5.5);
        assert_eq!(det.check(&prev, &curr), Some(EventKind::Burnout));
        assert_eq!(det.check(&prev, &curr), None);
    }

    #[test]
    fn phases_follow_the_flight() {
        assert_eq!(Phase::of(&sample(1.0, 10.0, 20.0), 0.9, 5.0), Phase::Burn);
        assert_eq!(Phase::of(&sample(6.0, 10.0, 20.0), 5.9, 5.0), Phase::Coast);
        assert_eq!(Phase::of(&sample(6.0, 10.0, -1.0), 5.9, 5.0), Phase::Descent);
    }

    #[test]
    fn step_stamped_past_burnout_still_burns() {
        assert_eq!(Phase::of(&sample(5.1, 260.0, 103.0), 4.99999, 5.0), Phase::Burn);
        assert_eq!(Phase::of(&sample(5.2, 270.0, 102.0), 5.1, 5.0), Phase::Coast);
    }

    #[test]
    fn velocity_peak_is_the_last_burn_sample() {
        let rocket = presets::sounding();
        let f = simulate(&rocket, &SimConfig::default()).unwrap();
        let phases = phases(&f.trajectory, rocket.burn_time());
        let (peak_idx, peak) = f
            .trajectory
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.velocity.total_cmp(&b.1.velocity))
            .unwrap();
        assert_eq!(phases[peak_idx], Phase::Burn);
        assert_ne!(phases[peak_idx + 1], Phase::Burn);

        let burnout = f.events().into_iter().find(|e| e.kind == EventKind::Burnout).unwrap();
        assert_eq!(burnout.sample, *peak);
    }

    #[test]
    fn phase_agrees_with_thrust_gate() {
        let rocket = presets::sounding();
        let f = simulate(&rocket, &SimConfig::default()).unwrap();
        let phases = phases(&f.trajectory, rocket.burn_time());
        let mut step_start = 0.0;
        for (s, phase) in f.trajectory.iter().zip(&phases) {
            let thrusting = acceleration(&rocket, step_start) > -G;
            assert_eq!(thrusting, *phase == Phase::Burn, "t={}", s.time);
            step_start = s.time;
        }
    }

    #[test]
    fn sounding_flight_has_all_events_in_order() {
        let f = simulate(&presets::sounding(), &SimConfig::default()).unwrap();
        let kinds: Vec<EventKind> = f.events().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Burnout, EventKind::Apogee, EventKind::Landing]);
    }

    #[test]
    fn grounded_rocket_only_lands() {
        let f = simulate(&presets::underpowered(), &SimConfig::default()).unwrap();
        let kinds: Vec<EventKind> = f.events().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Landing]);
    }
}
