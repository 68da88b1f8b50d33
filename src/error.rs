//! Failure modes of a single scenario.
//!
//! The `Display` output of each variant is the exact text recorded in the
//! results file and printed in the failure summary.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TestFailure {
    /// The server answered, but not with the expected status.
    #[error("Expected {expected}, got {actual}")]
    StatusMismatch { expected: u16, actual: u16 },

    /// No complete response within the configured bound.
    #[error("Request timeout ({0}s)")]
    Timeout(u64),

    /// Any other transport failure: refused connection, DNS, bad URL, broken body.
    #[error("Error: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mismatch_message() {
        let failure = TestFailure::StatusMismatch {
            expected: 200,
            actual: 404,
        };
        assert_eq!(failure.to_string(), "Expected 200, got 404");
    }

    #[test]
    fn test_timeout_message() {
        assert_eq!(TestFailure::Timeout(10).to_string(), "Request timeout (10s)");
    }

    #[test]
    fn test_transport_message() {
        let failure = TestFailure::Transport("connection refused".to_string());
        assert_eq!(failure.to_string(), "Error: connection refused");
    }
}
