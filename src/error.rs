use thiserror::Error;

/// Errors reported by the flight engine, its input layer and the exporters.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Degenerate rocket configuration: {0}")]
    DegenerateConfig(String),

    #[error("Integration step must be positive and finite, got {0}")]
    InvalidStep(f64),

    #[error("Flight did not return to ground within {steps} steps")]
    StepLimit { steps: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SimError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SimError::InvalidInput { field, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
