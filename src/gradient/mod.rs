//! Gradient color math for track rendering
//!
//! The interpolation formula here is deliberately not standard linear
//! interpolation. Per channel it computes
//! `max(ca, cb) - |ca - cb| * value`, which starts from the brighter channel
//! at `value = 0` and walks toward the darker one as `value` grows. This is
//! the established visual contract for the "distance from white" gradients
//! used by the SNP coloration settings, and it is preserved exactly.
//!
//! Channel results are clamped to `[0, 255]`. The historical implementation
//! relied on hex-formatting wraparound for negative intermediates; that path
//! is unreachable for valid 0-255 channels and is replaced by explicit
//! clamping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SnptrackError;

/// An RGB color
///
/// Parses from `#RRGGBB` or `RRGGBB` hex and displays as lowercase
/// `#rrggbb`.
///
/// # Examples
///
/// ```
/// use snptrack::gradient::Rgb;
///
/// let color: Rgb = "#DAA520".parse().unwrap();
/// assert_eq!(color, Rgb::new(218, 165, 32));
/// assert_eq!(color.to_string(), "#daa520");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from raw channels
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// White (`#ffffff`)
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Black (`#000000`)
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
}

impl FromStr for Rgb {
    type Err = SnptrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SnptrackError::InvalidColor {
                value: s.to_string(),
            });
        }
        // Length and digit checks above make these parses infallible
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).unwrap_or_default()
        };
        Ok(Rgb::new(channel(0..2), channel(2..4), channel(4..6)))
    }
}

impl TryFrom<String> for Rgb {
    type Error = SnptrackError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Interpolate between two colors by the distance-from-brighter formula
///
/// `value` is clamped to `[0, 1]`. Per channel the result is
/// `max(ca, cb) - |ca - cb| * value`: at 0 the brighter channel wins outright,
/// at 1 the result is the darker channel. Fractional intermediates truncate
/// toward zero, then clamp to `[0, 255]`.
pub fn interpolate(value: f64, a: Rgb, b: Rgb) -> Rgb {
    let value = value.clamp(0.0, 1.0);
    let channel = |ca: u8, cb: u8| -> u8 {
        let (ca, cb) = (f64::from(ca), f64::from(cb));
        let out = ca.max(cb) - (ca - cb).abs() * value;
        out.trunc().clamp(0.0, 255.0) as u8
    };
    Rgb::new(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b))
}

/// Bucket a percentage in `[0, 1]` into one of `total_steps` equal bins
///
/// Linear scan over the bins; a value exactly on an upper boundary
/// `i * (1 / total_steps)` lands in bin `i - 1`, not `i`. Values at or below
/// 0 land in bin 0; values above 1 land in the last bin. `total_steps == 0`
/// yields 0.
pub fn step_position(percentage: f64, total_steps: u32) -> u32 {
    if total_steps == 0 {
        return 0;
    }
    let increment = 1.0 / f64::from(total_steps);
    for i in 1..=total_steps {
        if percentage <= increment * f64::from(i) {
            return i - 1;
        }
    }
    total_steps - 1
}

/// A gradient control point: a severity fraction and its two endpoint colors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Severity fraction in `[0, 1]`
    pub value: f64,
    /// First endpoint color
    pub color_a: Rgb,
    /// Second endpoint color
    pub color_b: Rgb,
}

impl ColorStop {
    /// Interpolate this stop's endpoints at its severity fraction
    pub fn interpolate(&self) -> Rgb {
        interpolate(self.value, self.color_a, self.color_b)
    }
}

/// A quantized white-to-base gradient with a fixed number of steps
///
/// Used by SNP coloration: a severity fraction is bucketed with
/// [`step_position`] and the bucket is rendered between white and the base
/// color, so the top bucket is exactly the base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientScale {
    /// Full-intensity color (the top step)
    pub base: Rgb,
    /// Number of gradient steps
    pub steps: u32,
}

impl GradientScale {
    /// Create a gradient scale
    pub const fn new(base: Rgb, steps: u32) -> Self {
        Self { base, steps }
    }

    /// Color for a severity fraction in `[0, 1]`
    ///
    /// With 0 steps the base color is returned unscaled.
    pub fn color_for_fraction(&self, fraction: f64) -> Rgb {
        if self.steps == 0 {
            return self.base;
        }
        let step = step_position(fraction, self.steps);
        let quantized = f64::from(step + 1) / f64::from(self.steps);
        interpolate(quantized, Rgb::WHITE, self.base)
    }
}
