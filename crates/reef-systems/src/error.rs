//! Error types for the simulated subsystems

/// Errors that can occur in subsystem operations
///
/// Unknown entity ids are silent no-ops throughout; only explicitly
/// validated input produces an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemsError {
    /// User-supplied input was rejected before any state changed
    InvalidInput {
        /// What was being validated
        field: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

impl std::fmt::Display for SystemsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, reason } => {
                write!(f, "invalid {}: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for SystemsError {}

/// Result type alias for subsystem operations
pub type SystemsResult<T> = Result<T, SystemsError>;
