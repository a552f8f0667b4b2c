//! Tint Color Math
//!
//! Pure, deterministic conversions between the three color representations
//! the theme engine works with:
//!
//! - **Hex**: `#RGB` / `#RRGGBB` strings (leading `#` optional on input)
//! - **RGB**: integer triples, one `u8` per channel
//! - **HSL**: hue in degrees `[0, 360)`, saturation and lightness in percent
//!
//! # Quick Start
//!
//! ```rust
//! use tint_color::{hex_to_rgb, hsl_to_hex, rgb_to_hsl};
//!
//! let rgb = hex_to_rgb("#10B981");
//! let hsl = rgb_to_hsl(rgb.r, rgb.g, rgb.b);
//!
//! // Same hue and saturation, much lighter
//! let tint = hsl_to_hex(hsl.h, hsl.s, 95.0);
//! assert!(tint.starts_with('#'));
//! ```
//!
//! # Lenient vs strict parsing
//!
//! [`hex_to_rgb`] never fails: malformed input degrades to whatever the
//! leading hex digits spell (often black). Use [`Rgb::parse_hex`] or
//! [`is_valid_hex`] at a boundary when the input should be checked first.
//!
//! Round trips through HSL are exact up to 8-bit quantization, so
//! `hsl_to_hex(rgb_to_hsl(hex_to_rgb(x)))` stays within ±1 per channel of `x`.

mod color;
mod error;
mod hex;

pub use color::{hsl_to_hex, rgb_to_hsl, Hsl, Rgb};
pub use error::{ColorError, Result};
pub use hex::{hex_to_rgb, is_valid_hex};
