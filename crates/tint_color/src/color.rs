//! RGB and HSL color types and conversions

use std::fmt;

/// 8-bit sRGB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a packed value (0xRRGGBB); bits above 24 are ignored
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Pack into 0xRRGGBB
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Convert to HSL
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Format as lowercase `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Largest per-channel difference to another color
    pub fn channel_distance(self, other: Rgb) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// HSL color
///
/// - `h`: hue in degrees, `[0, 360)`
/// - `s`: saturation in percent, `[0, 100]`
/// - `l`: lightness in percent, `[0, 100]`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Same hue and saturation at a different lightness
    pub const fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Convert to a lowercase `#rrggbb` string
    pub fn to_hex(self) -> String {
        hsl_to_hex(self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.1}, {:.1}%, {:.1}%)", self.h, self.s, self.l)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsl()
    }
}

/// Convert 8-bit sRGB channels to HSL.
///
/// Gray inputs (all channels equal) have no defined hue; they come back
/// with `h = 0` and `s = 0`.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new((sector * 60.0).rem_euclid(360.0), s * 100.0, l * 100.0)
}

/// Convert HSL (degrees, percent, percent) to a lowercase `#rrggbb` string.
///
/// Each channel is computed directly from the hue phase and chroma, then
/// rounded to the nearest byte:
///
/// ```text
/// a = s * min(l, 1 - l)
/// k = (n + h / 30) mod 12        n = 0 (R), 8 (G), 4 (B)
/// c = l - a * max(min(k - 3, 9 - k, 1), -1)
/// ```
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let l = l / 100.0;
    let a = s * l.min(1.0 - l) / 100.0;

    let channel = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        let c = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        to_byte(c)
    };

    Rgb::new(channel(0.0), channel(8.0), channel(4.0)).to_hex()
}

/// Scale a 0.0-1.0 channel to the nearest byte
fn to_byte(c: f64) -> u8 {
    // NaN saturates to 0
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex_to_rgb;
    use pretty_assertions::assert_eq;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    #[test]
    fn brand_green_fixture() {
        let rgb = hex_to_rgb("#10B981");
        assert_eq!(rgb, Rgb::new(16, 185, 129));

        let hsl = rgb.to_hsl();
        assert_close(hsl.h, 160.1, 0.5);
        assert_close(hsl.s, 84.1, 0.5);
        assert_close(hsl.l, 39.4, 0.5);
    }

    #[test]
    fn gray_has_no_hue_or_saturation() {
        let hsl = rgb_to_hsl(128, 128, 128);
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert!(!hsl.l.is_nan());
        assert_close(hsl.l, 50.2, 0.05);
    }

    #[test]
    fn black_and_white() {
        assert_eq!(rgb_to_hsl(0, 0, 0), Hsl::new(0.0, 0.0, 0.0));
        assert_eq!(rgb_to_hsl(255, 255, 255), Hsl::new(0.0, 0.0, 100.0));
    }

    #[test]
    fn primary_hues() {
        assert_close(rgb_to_hsl(255, 0, 0).h, 0.0, 1e-9);
        assert_close(rgb_to_hsl(0, 255, 0).h, 120.0, 1e-9);
        assert_close(rgb_to_hsl(0, 0, 255).h, 240.0, 1e-9);
        // Red max with blue above green wraps into the last sector
        assert_close(rgb_to_hsl(255, 0, 128).h, 329.9, 0.1);
    }

    #[test]
    fn saturation_uses_upper_formula_when_light() {
        // l > 0.5: s = d / (2 - max - min)
        let hsl = rgb_to_hsl(255, 200, 200);
        assert!(hsl.l > 50.0);
        assert_close(hsl.s, 100.0, 1e-9);
    }

    #[test]
    fn hsl_to_hex_known_values() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
        assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00ff00");
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), "#0000ff");
        assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), "#ffffff");
        assert_eq!(hsl_to_hex(0.0, 0.0, 0.0), "#000000");
        assert_eq!(hsl_to_hex(200.0, 0.0, 50.0), "#808080");
    }

    #[test]
    fn round_trips_brand_colors() {
        for hex in ["#10b981", "#059669", "#0f172a", "#ffffff", "#c86432"] {
            let rgb = hex_to_rgb(hex);
            let back = hex_to_rgb(&rgb.to_hsl().to_hex());
            assert!(
                rgb.channel_distance(back) <= 1,
                "{hex} came back as {back}"
            );
        }
    }

    #[test]
    fn display_formats() {
        assert_eq!(Rgb::new(16, 185, 129).to_string(), "#10b981");
        assert_eq!(
            Hsl::new(160.12, 84.07, 39.41).to_string(),
            "hsl(160.1, 84.1%, 39.4%)"
        );
    }

    #[test]
    fn packs_and_unpacks() {
        let rgb = Rgb::from_u32(0x10B981);
        assert_eq!(rgb.to_u32(), 0x10B981);
        assert_eq!(Rgb::from((1, 2, 3)), Rgb::new(1, 2, 3));
    }
}
