//! Error types for tonegen.
//!
//! Defines the error codes and the error type used throughout the crate for
//! consistent error handling and reporting.

use std::fmt;

/// Error codes identifying the class of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A tone parameter is outside its valid range.
    /// Trigger: zero sample rate, non-positive duration or frequency,
    /// amplitude outside (0, 1], or an unparseable config file.
    InvalidParameter,

    /// Filesystem operation failed.
    /// Trigger: output directory cannot be created, file cannot be written,
    /// or config file cannot be read.
    Io,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::Io => "IO_ERROR",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => "Tone parameter is outside its valid range",
            ErrorCode::Io => "Filesystem operation failed",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => {
                "Use a positive sample rate, duration and frequency, and an amplitude \
                 between 0 (exclusive) and 1 (e.g., --sample-rate 48000 --amplitude 0.3)"
            }
            ErrorCode::Io => {
                "Check that the output directory is writable and the disk is not full, \
                 or choose another path with --output"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for tonegen operations.
#[derive(Debug)]
pub struct ToneError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ToneError {
    /// Creates a new ToneError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new ToneError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_PARAMETER error.
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidParameter,
            format!("Invalid {}: {}", name, reason.into()),
        )
    }

    /// Creates an IO_ERROR wrapping the underlying `std::io::Error`.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        let context = context.into();
        Self::with_source(ErrorCode::Io, format!("{}: {}", context, source), source)
    }

    /// Returns true if this error was caused by bad input rather than the filesystem.
    pub fn is_invalid_parameter(&self) -> bool {
        self.code == ErrorCode::InvalidParameter
    }
}

impl fmt::Display for ToneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for ToneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using ToneError.
pub type Result<T> = std::result::Result<T, ToneError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn error_code_as_str() {
        assert_eq!(ErrorCode::InvalidParameter.as_str(), "INVALID_PARAMETER");
        assert_eq!(ErrorCode::Io.as_str(), "IO_ERROR");
    }

    #[test]
    fn error_code_recovery_hints_not_empty() {
        assert!(!ErrorCode::InvalidParameter.recovery_hint().is_empty());
        assert!(!ErrorCode::Io.recovery_hint().is_empty());
        assert!(!ErrorCode::Io.description().is_empty());
    }

    #[test]
    fn tone_error_display() {
        let err = ToneError::invalid_parameter("sample rate", "must be positive, got 0");
        let text = err.to_string();
        assert!(text.contains("INVALID_PARAMETER"));
        assert!(text.contains("sample rate"));
        assert!(text.contains("Recovery:"));
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn io_error_keeps_source() {
        let cause = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ToneError::io("Failed to create directory debug-audio", cause);
        assert_eq!(err.code, ErrorCode::Io);
        assert!(err.message.contains("denied"));
        assert!(err.source().is_some());
        assert!(!err.is_invalid_parameter());
    }
}
