pub mod rocket;

pub use rocket::{presets, RocketBuilder, RocketConfig, PROPELLANT_MASS_FRACTION};
