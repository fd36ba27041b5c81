pub mod metrics;
pub mod advisory;

pub use metrics::{analyze, PerformanceMetrics};
pub use advisory::{assess, Check, Finding, Severity};
