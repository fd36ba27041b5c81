use crate::dynamics;
use crate::dynamics::state::FlightState;
use crate::vehicle::RocketConfig;

// ---------------------------------------------------------------------------
// Semi-implicit (symplectic) Euler
// ---------------------------------------------------------------------------

/// Advance `state` by one step of `dt`.
///
/// Velocity is updated first and the new velocity moves the altitude.
/// Extrema are folded in after the move.
pub fn euler_step(state: &mut FlightState, rocket: &RocketConfig, dt: f64) {
    let accel = dynamics::acceleration(rocket, state.elapsed_time);
    state.velocity += accel * dt;
    state.altitude += state.velocity * dt;
    state.elapsed_time += dt;
    state.track_extrema();
}
