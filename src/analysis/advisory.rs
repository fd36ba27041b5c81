use serde::Serialize;

use super::metrics::PerformanceMetrics;

// Thresholds below which a metric gets a suggestion.
const MIN_GOOD_ALTITUDE: f64 = 1000.0;    // m
const MIN_GOOD_FLIGHT_TIME: f64 = 30.0;   // s
const MIN_GOOD_AVG_VELOCITY: f64 = 50.0;  // m/s
const MIN_LIFTOFF_TWR: f64 = 1.0;
const MIN_GOOD_ISP: f64 = 200.0;          // s

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Check {
    Altitude,
    FlightTime,
    AverageVelocity,
    ThrustToWeight,
    SpecificImpulse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Ok,
    Advice,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub check: Check,
    pub severity: Severity,
    pub message: &'static str,
}

impl Finding {
    fn new(check: Check, severity: Severity, message: &'static str) -> Self {
        Self { check, severity, message }
    }
}

/// One finding per check, in a fixed order.
pub fn assess(m: &PerformanceMetrics) -> Vec<Finding> {
    use Check::*;

    vec![
        if m.max_altitude_m < MIN_GOOD_ALTITUDE {
            Finding::new(Altitude, Severity::Advice, "Consider increasing thrust or reducing mass to achieve a higher altitude.")
        } else {
            Finding::new(Altitude, Severity::Ok, "The rocket achieved a high altitude.")
        },
        if m.total_flight_time_s < MIN_GOOD_FLIGHT_TIME {
            Finding::new(FlightTime, Severity::Advice, "The flight time is relatively short. Increase the burn time for longer flights.")
        } else {
            Finding::new(FlightTime, Severity::Ok, "The flight time is satisfactory.")
        },
        if m.average_velocity_ms < MIN_GOOD_AVG_VELOCITY {
            Finding::new(AverageVelocity, Severity::Advice, "The average velocity is low. Increasing thrust could improve this.")
        } else {
            Finding::new(AverageVelocity, Severity::Ok, "Good average velocity achieved.")
        },
        if m.thrust_to_weight < MIN_LIFTOFF_TWR {
            Finding::new(ThrustToWeight, Severity::Warning, "The thrust-to-weight ratio is below 1. The rocket may not lift off.")
        } else {
            Finding::new(ThrustToWeight, Severity::Ok, "The thrust-to-weight ratio is adequate for launch.")
        },
        if m.specific_impulse_s < MIN_GOOD_ISP {
            Finding::new(SpecificImpulse, Severity::Advice, "The specific impulse is low. Consider a more efficient engine design.")
        } else {
            Finding::new(SpecificImpulse, Severity::Ok, "The specific impulse indicates efficient engine performance.")
        },
    ]
}
