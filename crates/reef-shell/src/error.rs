//! Shell error type

use std::fmt;

/// Errors surfaced by the shell session
#[derive(Debug)]
pub enum ShellError {
    /// An operation that needs a running session was called while off or booting
    NotRunning {
        /// The operation that was attempted
        op: &'static str,
    },
    /// Snapshot encoding or decoding failed
    Serialization(String),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::NotRunning { op } => {
                write!(f, "cannot {op}: session is not running")
            }
            ShellError::Serialization(msg) => write!(f, "snapshot serialization: {msg}"),
        }
    }
}

impl std::error::Error for ShellError {}

impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        ShellError::Serialization(err.to_string())
    }
}

/// Result alias for shell operations
pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ShellError::NotRunning { op: "open app" };
        assert_eq!(err.to_string(), "cannot open app: session is not running");
    }
}
