pub mod integrator;
pub mod runner;
pub mod event;
pub mod playback;

pub use runner::{simulate, simulate_default, FlightResult};
pub use integrator::euler_step;
pub use event::{detect_events, phases, EventKind, Phase, SimEvent};
pub use playback::Playback;
