//! Hex string parsing

use crate::color::Rgb;
use crate::error::{ColorError, Result};

/// Parse a hex color into RGB without validation.
///
/// Strips one leading `#` and expands 3-digit shorthand (`f0a` → `ff00aa`).
/// The digits are read as one integer and split into channels with
/// `>> 16 & 255`, `>> 8 & 255` and `& 255`.
///
/// Malformed input never fails. Only the leading run of hex digits is
/// read (none reads as 0) and the value keeps its low 32 bits, so garbage
/// in produces a well-formed but meaningless color out.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let value = if digits.chars().count() == 3 {
        let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
        parse_leading_hex(&expanded)
    } else {
        parse_leading_hex(digits)
    };

    Rgb::from_u32(value)
}

/// Whether `hex` is a well-formed `#RGB` / `#RRGGBB` color (`#` optional)
pub fn is_valid_hex(hex: &str) -> bool {
    Rgb::parse_hex(hex).is_ok()
}

impl Rgb {
    /// Strictly parse a `#RGB` / `#RRGGBB` color (`#` optional, any case).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidLength`] when the digit count is not 3
    /// or 6, and [`ColorError::InvalidDigit`] for non-hex characters.
    pub fn parse_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if let Some(digit) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit {
                input: hex.to_string(),
                digit,
            });
        }

        match digits.len() {
            3 | 6 => Ok(hex_to_rgb(digits)),
            len => Err(ColorError::InvalidLength(len)),
        }
    }
}

/// Read the leading run of hex digits as an integer, keeping the low 32 bits
fn parse_leading_hex(digits: &str) -> u32 {
    digits
        .chars()
        .map_while(|c| c.to_digit(16))
        .fold(0u32, |acc, d| (acc << 4) | d)
}
