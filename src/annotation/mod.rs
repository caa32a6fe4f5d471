//! Feature-annotation data model
//!
//! A [`FeatureAnnotation`] is one genomic feature/variant as seen by a track:
//! a VCF-style filter state, a list of free-text effect annotations
//! (`ANN`/`EFF`-style), and an optional feature type. Raw filter and effect
//! values arrive from the wire either as a scalar string or as an array-like
//! wrapper; [`RawValue`] models that shape explicitly instead of probing at
//! runtime.
//!
//! Nothing in this module errors on malformed input: unusable values resolve
//! to [`FilterState::Unknown`], which downstream visibility rules treat as
//! not passing.

use serde::{Deserialize, Serialize};

/// A raw annotation value: scalar string or array-like list of strings
///
/// VCF `FILTER` and `ANN` fields reach the track layer in either shape
/// depending on the upstream adapter. Normalization joins list values with no
/// separator, matching how multi-valued filter fields are compared upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A single string value
    Scalar(String),
    /// An array-like wrapper of string values
    ValueList(Vec<String>),
}

impl RawValue {
    /// Collapse the value to a single comparison string
    ///
    /// Lists are concatenated with no separator.
    pub fn normalize(&self) -> String {
        match self {
            RawValue::Scalar(s) => s.clone(),
            RawValue::ValueList(values) => values.concat(),
        }
    }

    /// The value as a list of strings, cloning a scalar into a singleton
    pub fn to_list(&self) -> Vec<String> {
        match self {
            RawValue::Scalar(s) => vec![s.clone()],
            RawValue::ValueList(values) => values.clone(),
        }
    }

    /// Extract a raw value from wire-shaped JSON
    ///
    /// Accepts a string, an array of strings, or an object exposing a
    /// `values` array. Returns `None` for any other shape.
    pub fn from_json(value: &serde_json::Value) -> Option<RawValue> {
        match value {
            serde_json::Value::String(s) => Some(RawValue::Scalar(s.clone())),
            serde_json::Value::Array(items) => collect_strings(items).map(RawValue::ValueList),
            serde_json::Value::Object(map) => match map.get("values") {
                Some(serde_json::Value::Array(items)) => {
                    collect_strings(items).map(RawValue::ValueList)
                }
                _ => None,
            },
            _ => None,
        }
    }
}

fn collect_strings(items: &[serde_json::Value]) -> Option<Vec<String>> {
    items
        .iter()
        .map(|item| match item {
            serde_json::Value::String(s) => Some(s.clone()),
            _ => None,
        })
        .collect()
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Scalar(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Scalar(s)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(values: Vec<String>) -> Self {
        RawValue::ValueList(values)
    }
}

/// VCF-style site filter state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FilterState {
    /// Site passed all filters (also the state for an absent FILTER field)
    #[default]
    Pass,
    /// Site failed one or more filters
    Fail,
    /// Filter field was present but structurally unusable
    Unknown,
}

impl FilterState {
    /// Derive the filter state from an optional raw value
    ///
    /// An absent field means passing; anything not comparing
    /// case-insensitively to "PASS" means failing.
    pub fn from_raw(raw: Option<&RawValue>) -> FilterState {
        match raw {
            None => FilterState::Pass,
            Some(value) => {
                if value.normalize().eq_ignore_ascii_case("PASS") {
                    FilterState::Pass
                } else {
                    FilterState::Fail
                }
            }
        }
    }

    /// Derive the filter state from wire-shaped JSON
    ///
    /// JSON `null` means an absent field (passing); an unusable shape yields
    /// [`FilterState::Unknown`], which visibility rules treat as not passing.
    pub fn from_json(value: &serde_json::Value) -> FilterState {
        if value.is_null() {
            return FilterState::Pass;
        }
        match RawValue::from_json(value) {
            Some(raw) => FilterState::from_raw(Some(&raw)),
            None => FilterState::Unknown,
        }
    }

    /// Whether this state counts as passing
    #[inline]
    pub fn is_passing(self) -> bool {
        self == FilterState::Pass
    }
}

/// SnpEff-style impact tier attached to an effect annotation
///
/// Ordered by severity: `Modifier < Low < Moderate < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Impact {
    /// Modifier - minimal predicted impact.
    Modifier,
    /// Low impact.
    Low,
    /// Moderate impact.
    Moderate,
    /// High impact (likely deleterious).
    High,
}

impl Impact {
    /// All tiers in classification precedence order
    pub const ALL: [Impact; 4] = [Impact::High, Impact::Moderate, Impact::Low, Impact::Modifier];

    /// Get the impact as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::High => "HIGH",
            Impact::Moderate => "MODERATE",
            Impact::Low => "LOW",
            Impact::Modifier => "MODIFIER",
        }
    }

    /// Whether an effect annotation string carries this tier's keyword
    ///
    /// Case-sensitive substring match, as the annotations are authored.
    #[inline]
    pub fn matches(&self, effect: &str) -> bool {
        effect.contains(self.as_str())
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One genomic feature/variant record as consumed by a track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FeatureAnnotation {
    /// Site filter state
    #[serde(default)]
    pub filter: FilterState,
    /// Effect annotation strings, each optionally carrying an impact keyword
    #[serde(default)]
    pub effects: Vec<String>,
    /// Feature type (e.g. "SNV", "mutation"), if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_type: Option<String>,
}

impl FeatureAnnotation {
    /// Create an empty passing feature with no effects
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter state from a raw filter value
    pub fn with_filter_value(mut self, raw: RawValue) -> Self {
        self.filter = FilterState::from_raw(Some(&raw));
        self
    }

    /// Set the filter state directly
    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self
    }

    /// Append one effect annotation
    pub fn with_effect(mut self, effect: &str) -> Self {
        self.effects.push(effect.to_string());
        self
    }

    /// Set the effect annotations from a raw value
    pub fn with_effects(mut self, raw: RawValue) -> Self {
        self.effects = raw.to_list();
        self
    }

    /// Set the feature type
    pub fn with_type(mut self, feature_type: &str) -> Self {
        self.feature_type = Some(feature_type.to_string());
        self
    }

    /// Whether the feature passed site-level filters
    #[inline]
    pub fn is_passing(&self) -> bool {
        self.filter.is_passing()
    }

    /// The highest impact tier carried by any effect annotation, if any
    pub fn max_impact(&self) -> Option<Impact> {
        Impact::ALL
            .iter()
            .copied()
            .find(|tier| self.effects.iter().any(|e| tier.matches(e)))
    }
}
