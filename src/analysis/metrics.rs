use serde::Serialize;

use crate::dynamics::state::{FlightState, G};
use crate::vehicle::RocketConfig;

/// Scalar performance figures for one flight.
///
/// Field order is the computation order. The serialized keys are the same
/// labels [`PerformanceMetrics::entries`] yields, so the JSON summary, the
/// CSV header and the report all name a metric the same way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceMetrics {
    #[serde(rename = "Max Altitude (m)")]
    pub max_altitude_m: f64,
    #[serde(rename = "Total Flight Time (s)")]
    pub total_flight_time_s: f64,
    #[serde(rename = "Max Velocity (m/s)")]
    pub max_velocity_ms: f64,
    /// Max altitude over flight time; a proxy, not the path-length average.
    #[serde(rename = "Average Velocity (m/s)")]
    pub average_velocity_ms: f64,
    #[serde(rename = "Thrust-to-Weight Ratio")]
    pub thrust_to_weight: f64,
    #[serde(rename = "Total Impulse (Ns)")]
    pub total_impulse_ns: f64,
    #[serde(rename = "Propellant Mass (kg)")]
    pub propellant_mass_kg: f64,
    #[serde(rename = "Mass Flow Rate (kg/s)")]
    pub mass_flow_rate_kgs: f64,
    #[serde(rename = "Specific Impulse (s)")]
    pub specific_impulse_s: f64,
}

impl PerformanceMetrics {
    /// Flat name -> value view, in computation order.
    pub fn entries(&self) -> [(&'static str, f64); 9] {
        [
            ("Max Altitude (m)", self.max_altitude_m),
            ("Total Flight Time (s)", self.total_flight_time_s),
            ("Max Velocity (m/s)", self.max_velocity_ms),
            ("Average Velocity (m/s)", self.average_velocity_ms),
            ("Thrust-to-Weight Ratio", self.thrust_to_weight),
            ("Total Impulse (Ns)", self.total_impulse_ns),
            ("Propellant Mass (kg)", self.propellant_mass_kg),
            ("Mass Flow Rate (kg/s)", self.mass_flow_rate_kgs),
            ("Specific Impulse (s)", self.specific_impulse_s),
        ]
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries().into_iter().find(|(l, _)| *l == label).map(|(_, v)| v)
    }
}

/// Derive the metrics from a rocket and the terminal state of its flight.
/// Every division is guarded; a guarded case yields 0.
pub fn analyze(rocket: &RocketConfig, terminal: &FlightState) -> PerformanceMetrics {
    let max_altitude = terminal.max_altitude;
    let total_flight_time = terminal.elapsed_time;
    let max_velocity = terminal.max_velocity;
    let average_velocity = if total_flight_time > 0.0 {
        max_altitude / total_flight_time
    } else {
        0.0
    };
    let thrust_to_weight = rocket.thrust() / (rocket.mass() * G);
    let total_impulse = rocket.thrust() * rocket.burn_time();
    let propellant_mass = rocket.mass() * rocket.propellant_mass_fraction();
    let mass_flow_rate = if rocket.burn_time() > 0.0 {
        propellant_mass / rocket.burn_time()
    } else {
        0.0
    };
    let weight_flow = mass_flow_rate * G;
    let specific_impulse = if weight_flow > 0.0 {
        rocket.thrust() / weight_flow
    } else {
        0.0
    };

    PerformanceMetrics {
        max_altitude_m: max_altitude,
        total_flight_time_s: total_flight_time,
        max_velocity_ms: max_velocity,
        average_velocity_ms: average_velocity,
        thrust_to_weight,
        total_impulse_ns: total_impulse,
        propellant_mass_kg: propellant_mass,
        mass_flow_rate_kgs: mass_flow_rate,
        specific_impulse_s: specific_impulse,
    }
}
