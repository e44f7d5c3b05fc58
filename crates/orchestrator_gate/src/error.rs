//! Error types for the orchestrator gate
//!
//! This module defines the error hierarchy for the orchestrator_gate crate using `thiserror`.
//!
//! None of these errors ever reach the hook host. On the hook path every
//! [`GateError`] degrades to an allow decision; only the `status` diagnostic
//! subcommand reports them to the user.
//!
//! # Error Variants
//!
//! - [`GateError::Decode`]: hook input was not a JSON object of the expected shape
//!   (auto-converts from `serde_json::Error`)
//! - [`GateError::Io`]: reading stdin or writing a reply failed
//!   (auto-converts from `std::io::Error`)
//! - [`GateError::Status`]: the `status` subcommand could not produce its report
//!
//! # Example
//!
//! ```rust
//! use orchestrator_gate::error::GateError;
//! use orchestrator_gate::hooks::HookInput;
//!
//! fn example() -> Result<HookInput, GateError> {
//!     // Auto-conversion from serde_json::Error
//!     let input: HookInput = serde_json::from_str("{ truncated")?;
//!     Ok(input)
//! }
//!
//! assert!(matches!(example(), Err(GateError::Decode(_))));
//! ```

use thiserror::Error;

/// The main error type for all orchestrator_gate operations
#[derive(Error, Debug)]
pub enum GateError {
    /// Failed to decode the hook input record
    ///
    /// Covers empty input, truncated JSON, non-object values and fields of
    /// the wrong type.
    #[error("Failed to decode hook input: {0}")]
    Decode(#[from] serde_json::Error),

    /// I/O operation failed
    ///
    /// Raised when stdin cannot be read or a reply cannot be written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The status report could not be produced
    #[error("Status check failed: {0}")]
    Status(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let gate_err: GateError = json_err.into();
        assert!(matches!(gate_err, GateError::Decode(_)));
        assert!(gate_err.to_string().starts_with("Failed to decode hook input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let gate_err: GateError = io_err.into();
        assert!(gate_err.to_string().contains("stdout closed"));
    }

    #[test]
    fn test_status_error_message() {
        let err = GateError::Status("cannot serialize report".to_string());
        assert_eq!(
            err.to_string(),
            "Status check failed: cannot serialize report"
        );
    }

    #[test]
    fn test_result_with_question_mark_io() {
        fn read_file() -> Result<String, GateError> {
            Ok(std::fs::read_to_string("/nonexistent/hook-input.json")?)
        }

        let err = read_file().unwrap_err();
        assert!(matches!(err, GateError::Io(_)));
    }
}
