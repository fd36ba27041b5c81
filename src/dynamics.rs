pub mod state;

use crate::dynamics::state::G;
use crate::vehicle::RocketConfig;

// ---------------------------------------------------------------------------
// Equation of motion (1-D, vertical)
// ---------------------------------------------------------------------------

/// Net vertical acceleration at `elapsed_time`.
///
/// Forces modeled:
///   1. Thrust  — constant, only while `elapsed_time < burn_time`
///   2. Gravity — constant `G`, always down
pub fn acceleration(rocket: &RocketConfig, elapsed_time: f64) -> f64 {
    if elapsed_time < rocket.burn_time() {
        rocket.thrust() / rocket.mass() - G
    } else {
        -G
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
