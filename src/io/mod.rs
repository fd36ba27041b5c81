pub mod csv;
pub mod json;

pub use self::csv::{write_flight, write_flight_file};
pub use self::json::{write_summary, write_summary_file, FlightSummary};
