use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Initial state has {actual} coordinates but the system has dimension {expected}.")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Unsupported state dimension {0}; expected 2 or 3.")]
    UnsupportedDimension(usize),

    #[error("Unknown preset `{0}`.")]
    UnknownPreset(String),
}

impl SolveError {
    pub(crate) fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        SolveError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
