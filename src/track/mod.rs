//! Track style resolution
//!
//! Ties classification to rendering colors: each [`ColorBucket`] maps to a
//! configurable [`Rgb`], optionally scaled through a quantized gradient by a
//! caller-supplied severity fraction. Defaults reproduce the original track
//! palette (red / goldenrod / blue / green).

use serde::{Deserialize, Serialize};

use crate::annotation::FeatureAnnotation;
use crate::classify::{classify, glyph_for, is_visible, ColorBucket, Glyph, TrackFilterConfig};
use crate::gradient::{GradientScale, Rgb};

/// Per-bucket colors and optional gradient settings for one track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackStyle {
    /// Color for HIGH-impact features
    pub high: Rgb,
    /// Color for MODERATE-impact features
    pub moderate: Rgb,
    /// Color for "mutation"-typed features with no impact keyword
    pub other_mutation: Rgb,
    /// Color for non-SNV-typed features with no impact keyword
    pub other_snv: Rgb,
    /// Color for default (SNV or untyped) features
    pub snv: Rgb,
    /// Gradient step count; `None` disables gradient scaling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_steps: Option<u32>,
}

impl Default for TrackStyle {
    fn default() -> Self {
        Self {
            high: Rgb::new(255, 0, 0),           // red
            moderate: Rgb::new(218, 165, 32),    // goldenrod
            other_mutation: Rgb::new(0, 0, 255), // blue
            other_snv: Rgb::new(0, 128, 0),      // green
            snv: Rgb::new(0, 0, 255),            // blue
            gradient_steps: None,
        }
    }
}

/// Resolved rendering style for one visible feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStyle {
    /// Glyph shape
    pub glyph: Glyph,
    /// Fill color
    pub color: Rgb,
}

impl TrackStyle {
    /// Create a style with the default palette
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable gradient scaling with the given step count
    pub fn with_gradient_steps(mut self, steps: u32) -> Self {
        self.gradient_steps = Some(steps);
        self
    }

    /// The configured color for a bucket
    pub fn bucket_color(&self, bucket: ColorBucket) -> Rgb {
        match bucket {
            ColorBucket::High => self.high,
            ColorBucket::Moderate => self.moderate,
            ColorBucket::OtherMutation => self.other_mutation,
            ColorBucket::OtherSnv => self.other_snv,
            ColorBucket::None => self.snv,
        }
    }

    /// Resolve the color for a bucket, gradient-scaled by severity
    ///
    /// Severity is only consulted when gradient steps are configured; without
    /// them the bucket color is returned unscaled.
    pub fn resolve_color(&self, bucket: ColorBucket, severity: Option<f64>) -> Rgb {
        let base = self.bucket_color(bucket);
        match (self.gradient_steps, severity) {
            (Some(steps), Some(fraction)) => {
                GradientScale::new(base, steps).color_for_fraction(fraction)
            }
            _ => base,
        }
    }

    /// Resolve the full rendering style for a feature
    ///
    /// Returns `None` when the feature is hidden under the given filter
    /// configuration.
    pub fn resolve(
        &self,
        feature: &FeatureAnnotation,
        config: &TrackFilterConfig,
        severity: Option<f64>,
    ) -> Option<RenderStyle> {
        if !is_visible(feature, config) {
            return None;
        }
        let classification = classify(feature);
        Some(RenderStyle {
            glyph: glyph_for(feature),
            color: self.resolve_color(classification.color_bucket, severity),
        })
    }
}
