//! Feature classification and visibility filtering
//!
//! Two independent rules drive track rendering:
//!
//! - **Coloring** ([`classify`]): impact keywords take precedence over feature
//!   type, in fixed order HIGH then MODERATE. A HIGH-tagged feature always
//!   colors as HIGH regardless of filter toggles.
//! - **Visibility** ([`is_visible`]): a feature can be hidden either by an
//!   impact-tier toggle or by the "show sites not passing filters" toggle.
//!   The two are evaluated orthogonally.
//!
//! The impact-tier rule carries a deliberate override for multi-tagged
//! annotations: a disabled tier only hides a feature when no *other enabled*
//! tier keyword also matches one of its effect strings. Disabling LOW
//! therefore does not hide a feature tagged both LOW and HIGH while HIGH
//! remains enabled. Disabling every tier hides all impact-tagged features;
//! the configuration does not prevent that state.
//!
//! All functions here are pure and total: they read a snapshot of the filter
//! configuration and never error on malformed annotation data.

use serde::{Deserialize, Serialize};

use crate::annotation::{FeatureAnnotation, Impact};

/// Display color bucket for a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorBucket {
    /// Any effect annotation carries the HIGH keyword
    High,
    /// No HIGH, but some effect carries MODERATE
    Moderate,
    /// No impact keyword; feature type is exactly "mutation"
    OtherMutation,
    /// No impact keyword; feature type present and not "SNV"
    OtherSnv,
    /// No impact keyword and default (SNV or untyped) feature
    None,
}

impl ColorBucket {
    /// The named track color for this bucket
    pub fn default_color(&self) -> &'static str {
        match self {
            ColorBucket::High => "red",
            ColorBucket::Moderate => "goldenrod",
            ColorBucket::OtherMutation => "blue",
            ColorBucket::OtherSnv => "green",
            ColorBucket::None => "blue",
        }
    }
}

/// Classification result for one feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Whether the feature passed site-level filters
    pub passes_filter: bool,
    /// Display color bucket
    pub color_bucket: ColorBucket,
}

/// Classify a feature into its color bucket and filter state
///
/// Impact precedence is evaluated in fixed order: any HIGH-tagged effect wins,
/// then MODERATE; otherwise the bucket falls back to the feature type. The
/// result is independent of any [`ImpactFilter`] state - filter toggles
/// affect visibility only, never coloring.
///
/// # Examples
///
/// ```
/// use snptrack::annotation::FeatureAnnotation;
/// use snptrack::classify::{classify, ColorBucket};
///
/// let feature = FeatureAnnotation::new().with_effect("G|missense|HIGH|BRCA1");
/// assert_eq!(classify(&feature).color_bucket, ColorBucket::High);
/// ```
pub fn classify(feature: &FeatureAnnotation) -> Classification {
    let is_high = feature.effects.iter().any(|e| Impact::High.matches(e));
    let is_moderate = feature.effects.iter().any(|e| Impact::Moderate.matches(e));

    let color_bucket = if is_high {
        ColorBucket::High
    } else if is_moderate {
        ColorBucket::Moderate
    } else {
        match feature.feature_type.as_deref() {
            Some("mutation") => ColorBucket::OtherMutation,
            Some(other) if other != "SNV" => ColorBucket::OtherSnv,
            _ => ColorBucket::None,
        }
    };

    Classification {
        passes_filter: feature.is_passing(),
        color_bucket,
    }
}

/// Per-tier enabled flags for the impact visibility filter
///
/// All tiers are enabled by default. The configuration is owned and mutated
/// by the caller between render passes; classification reads a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactFilter {
    enabled: [bool; 4],
}

impl Default for ImpactFilter {
    fn default() -> Self {
        Self { enabled: [true; 4] }
    }
}

impl ImpactFilter {
    /// Create a filter with all tiers enabled
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn index(tier: Impact) -> usize {
        match tier {
            Impact::High => 0,
            Impact::Moderate => 1,
            Impact::Low => 2,
            Impact::Modifier => 3,
        }
    }

    /// Whether a tier is enabled
    #[inline]
    pub fn is_enabled(&self, tier: Impact) -> bool {
        self.enabled[Self::index(tier)]
    }

    /// Enable or disable a tier
    pub fn set_enabled(&mut self, tier: Impact, enabled: bool) {
        self.enabled[Self::index(tier)] = enabled;
    }

    /// Disable a tier, returning self for chaining
    pub fn without(mut self, tier: Impact) -> Self {
        self.set_enabled(tier, false);
        self
    }

    /// Flip a tier's enabled flag
    pub fn toggle(&mut self, tier: Impact) {
        let index = Self::index(tier);
        self.enabled[index] = !self.enabled[index];
    }
}

/// Track-level visibility configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackFilterConfig {
    /// Impact-tier toggles
    pub impact: ImpactFilter,
    /// "Show sites not passing filters" toggle (on by default)
    pub show_filtered_sites: bool,
}

impl Default for TrackFilterConfig {
    fn default() -> Self {
        Self {
            impact: ImpactFilter::default(),
            show_filtered_sites: true,
        }
    }
}

impl TrackFilterConfig {
    /// Create a configuration with defaults (everything visible)
    pub fn new() -> Self {
        Self::default()
    }
}

/// Whether the impact-tier toggles hide this feature
///
/// A feature is hidden when some disabled tier's keyword matches one of its
/// effect strings and no enabled tier's keyword matches any of them. Features
/// with no effect annotations are never impact-hidden.
pub fn is_hidden_by_impact(feature: &FeatureAnnotation, filter: &ImpactFilter) -> bool {
    if feature.effects.is_empty() {
        return false;
    }

    // Any enabled tier that also matches keeps the feature visible
    let kept_by_enabled = Impact::ALL
        .iter()
        .any(|&tier| filter.is_enabled(tier) && feature.effects.iter().any(|e| tier.matches(e)));
    if kept_by_enabled {
        return false;
    }

    Impact::ALL
        .iter()
        .any(|&tier| !filter.is_enabled(tier) && feature.effects.iter().any(|e| tier.matches(e)))
}

/// Whether a feature is visible under the given configuration
///
/// The PASS rule and the impact rule are independent; either can hide the
/// feature. [`FilterState::Unknown`](crate::annotation::FilterState) counts
/// as not passing.
pub fn is_visible(feature: &FeatureAnnotation, config: &TrackFilterConfig) -> bool {
    if !config.show_filtered_sites && !feature.is_passing() {
        return false;
    }
    !is_hidden_by_impact(feature, &config.impact)
}

/// Glyph shape used to draw a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Glyph {
    /// Diamond glyph: passing SNV-typed (or untyped) features
    Diamond,
    /// Box glyph: non-SNV feature types and sites not passing filters
    Box,
}

/// Pick the glyph for a feature
///
/// The type check is a substring match ("SNV" anywhere in the type keeps the
/// diamond), unlike the exact-match comparisons used for coloring.
pub fn glyph_for(feature: &FeatureAnnotation) -> Glyph {
    let mut glyph = Glyph::Diamond;
    if let Some(feature_type) = &feature.feature_type {
        if !feature_type.contains("SNV") {
            glyph = Glyph::Box;
        }
    }
    if !feature.is_passing() {
        glyph = Glyph::Box;
    }
    glyph
}
