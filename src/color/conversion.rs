//! RGB to HSV conversion
//!
//! Provides the conversions used between sampling and scoring:
//! - averaged RGB (0-255) to HSV using the six-sector hexagonal hue
//! - hexadecimal color parsing and formatting
//!
//! All channels are `f64` so threshold comparisons downstream see the same
//! values a double-precision calculation produces.

use palette::Srgb;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{HarmonyError, Result};

/// Averaged RGB sample with channels in [0, 255]
///
/// Channels are floating point because an average over many pixels is
/// rarely a whole number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbSample {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RgbSample {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Hexadecimal representation, channels rounded to the nearest integer
    pub fn to_hex(&self) -> String {
        let srgb = Srgb::new(self.r / 255.0, self.g / 255.0, self.b / 255.0);
        srgb_to_hex(srgb)
    }
}

/// Hue/saturation/value color
///
/// `h` is in degrees within [0, 360), `s` and `v` are fractions in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsvColor {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl HsvColor {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

impl From<RgbSample> for HsvColor {
    fn from(sample: RgbSample) -> Self {
        ColorConverter::new().rgb_to_hsv(sample.r, sample.g, sample.b)
    }
}

/// Stateless converter between the RGB and HSV representations
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert RGB (0-255) to HSV
    ///
    /// Total over any finite triple. Channels outside [0, 255] are not
    /// rejected; the caller is responsible for the range.
    ///
    /// # Arguments
    ///
    /// * `r`, `g`, `b` - RGB values in range [0, 255]
    ///
    /// # Returns
    ///
    /// HSV color with hue wrapped into [0, 360)
    pub fn rgb_to_hsv(&self, r: f64, g: f64, b: f64) -> HsvColor {
        let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let v = max;
        let s = if max == 0.0 { 0.0 } else { delta / max };

        let sector = if delta == 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        let h = wrap_degrees(sector * 60.0);
        trace!(r, g, b, h, s, v, "converted sample to hsv");

        HsvColor { h, s, v }
    }

    /// Convert an averaged sample to HSV
    pub fn sample_to_hsv(&self, sample: RgbSample) -> HsvColor {
        self.rgb_to_hsv(sample.r, sample.g, sample.b)
    }

    /// Parse hexadecimal color string to an RGB sample
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex color string (e.g., "#FF0000" or "FF0000")
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the string is not six hex digits
    pub fn hex_to_rgb(&self, hex: &str) -> Result<RgbSample> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HarmonyError::invalid_parameter("hex color", hex));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| HarmonyError::invalid_parameter("hex color", hex))
        };

        Ok(RgbSample::new(
            channel(0..2)? as f64,
            channel(2..4)? as f64,
            channel(4..6)? as f64,
        ))
    }
}

/// Wrap an angle in degrees into [0, 360)
fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn srgb_to_hex(srgb: Srgb<f64>) -> String {
    let to_byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02X}{:02X}{:02X}",
        to_byte(srgb.red),
        to_byte(srgb.green),
        to_byte(srgb.blue)
    )
}
