//! Color error types

use thiserror::Error;

/// Errors from strict hex parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Digit count (after stripping `#`) is neither 3 nor 6
    #[error("hex color must have 3 or 6 digits, got {0}")]
    InvalidLength(usize),

    /// A character that is not a hexadecimal digit
    #[error("invalid hex digit `{digit}` in `{input}`")]
    InvalidDigit { input: String, digit: char },
}

/// Result type for strict color parsing
pub type Result<T> = std::result::Result<T, ColorError>;
