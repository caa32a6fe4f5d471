//! Classification and visibility tests
//!
//! Covers the fixed HIGH/MODERATE precedence, the feature-type fallback, the
//! multi-tag visibility override, and the orthogonal PASS-site toggle.

use serde_json::json;
use snptrack::annotation::{FeatureAnnotation, FilterState, Impact, RawValue};
use snptrack::classify::{
    classify, glyph_for, is_hidden_by_impact, is_visible, ColorBucket, Glyph, ImpactFilter,
    TrackFilterConfig,
};

fn snpeff_effect(impact: &str) -> String {
    // Representative ANN-style pipe-delimited annotation
    format!("G|missense_variant|{}|BRCA1|ENSG00000012048", impact)
}

#[test]
fn high_wins_over_everything() {
    let feature = FeatureAnnotation::new()
        .with_effect(&snpeff_effect("MODIFIER"))
        .with_effect(&snpeff_effect("HIGH"))
        .with_effect(&snpeff_effect("MODERATE"))
        .with_type("mutation");
    assert_eq!(classify(&feature).color_bucket, ColorBucket::High);
}

#[test]
fn moderate_wins_over_type() {
    let feature = FeatureAnnotation::new()
        .with_effect(&snpeff_effect("MODERATE"))
        .with_type("mutation");
    assert_eq!(classify(&feature).color_bucket, ColorBucket::Moderate);
}

#[test]
fn low_and_modifier_fall_through_to_type() {
    let feature = FeatureAnnotation::new()
        .with_effect(&snpeff_effect("LOW"))
        .with_effect(&snpeff_effect("MODIFIER"))
        .with_type("SNV");
    assert_eq!(classify(&feature).color_bucket, ColorBucket::None);
}

#[test]
fn type_fallback_buckets() {
    assert_eq!(
        classify(&FeatureAnnotation::new().with_type("mutation")).color_bucket,
        ColorBucket::OtherMutation
    );
    assert_eq!(
        classify(&FeatureAnnotation::new().with_type("inversion")).color_bucket,
        ColorBucket::OtherSnv
    );
    assert_eq!(
        classify(&FeatureAnnotation::new().with_type("SNV")).color_bucket,
        ColorBucket::None
    );
    assert_eq!(
        classify(&FeatureAnnotation::new()).color_bucket,
        ColorBucket::None
    );
}

#[test]
fn impact_match_is_case_sensitive() {
    let feature = FeatureAnnotation::new().with_effect("G|missense|high|BRCA1");
    assert_eq!(classify(&feature).color_bucket, ColorBucket::None);
}

#[test]
fn high_classifies_high_even_when_high_tier_disabled() {
    // Filter toggles affect visibility, never coloring
    let feature = FeatureAnnotation::new().with_effect(&snpeff_effect("HIGH"));
    let filter = ImpactFilter::new().without(Impact::High);

    assert_eq!(classify(&feature).color_bucket, ColorBucket::High);
    assert!(is_hidden_by_impact(&feature, &filter));
}

#[test]
fn multi_tag_feature_survives_single_disabled_tier() {
    let feature = FeatureAnnotation::new()
        .with_effect(&snpeff_effect("LOW"))
        .with_effect(&snpeff_effect("HIGH"));
    let filter = ImpactFilter::new().without(Impact::Low);
    assert!(!is_hidden_by_impact(&feature, &filter));
}

#[test]
fn multi_tag_feature_hidden_when_both_tiers_disabled() {
    let feature = FeatureAnnotation::new()
        .with_effect(&snpeff_effect("LOW"))
        .with_effect(&snpeff_effect("HIGH"));
    let filter = ImpactFilter::new()
        .without(Impact::Low)
        .without(Impact::High);
    assert!(is_hidden_by_impact(&feature, &filter));
}

#[test]
fn multi_tag_in_one_effect_string_also_overrides() {
    // Both keywords in a single annotation string behave the same way
    let feature = FeatureAnnotation::new().with_effect("A|LOW|B|HIGH|C");
    let filter = ImpactFilter::new().without(Impact::Low);
    assert!(!is_hidden_by_impact(&feature, &filter));
}

#[test]
fn all_tiers_disabled_hides_any_tagged_feature() {
    let filter = ImpactFilter::new()
        .without(Impact::High)
        .without(Impact::Moderate)
        .without(Impact::Low)
        .without(Impact::Modifier);
    for impact in ["HIGH", "MODERATE", "LOW", "MODIFIER"] {
        let feature = FeatureAnnotation::new().with_effect(&snpeff_effect(impact));
        assert!(is_hidden_by_impact(&feature, &filter), "{}", impact);
    }
    // Untagged and effect-less features still show
    let untagged = FeatureAnnotation::new().with_effect("intergenic_region");
    assert!(!is_hidden_by_impact(&untagged, &filter));
    assert!(!is_hidden_by_impact(&FeatureAnnotation::new(), &filter));
}

#[test]
fn toggle_round_trips() {
    let mut filter = ImpactFilter::new();
    filter.toggle(Impact::Moderate);
    assert!(!filter.is_enabled(Impact::Moderate));
    filter.toggle(Impact::Moderate);
    assert!(filter.is_enabled(Impact::Moderate));
}

#[test]
fn pass_toggle_is_orthogonal_to_impact_toggles() {
    let failing_high = FeatureAnnotation::new()
        .with_filter(FilterState::Fail)
        .with_effect(&snpeff_effect("HIGH"));

    // Default config shows non-PASS sites
    assert!(is_visible(&failing_high, &TrackFilterConfig::new()));

    // Hiding non-PASS sites hides it despite the enabled HIGH tier
    let config = TrackFilterConfig {
        show_filtered_sites: false,
        ..TrackFilterConfig::new()
    };
    assert!(!is_visible(&failing_high, &config));

    // A passing LOW feature is hidden by the impact rule alone
    let mut config = TrackFilterConfig::new();
    config.impact.set_enabled(Impact::Low, false);
    let passing_low = FeatureAnnotation::new().with_effect(&snpeff_effect("LOW"));
    assert!(!is_visible(&passing_low, &config));
}

#[test]
fn wire_shaped_filter_values() {
    // Scalar FILTER
    let feature =
        FeatureAnnotation::new().with_filter(FilterState::from_json(&json!("LowQual")));
    assert!(!feature.is_passing());

    // Array-like {values: [...]} wrapper
    let feature =
        FeatureAnnotation::new().with_filter(FilterState::from_json(&json!({"values": ["PASS"]})));
    assert!(feature.is_passing());

    // Absent FILTER counts as passing
    let feature = FeatureAnnotation::new().with_filter(FilterState::from_json(&json!(null)));
    assert!(feature.is_passing());

    // Malformed FILTER degrades to not passing, without erroring
    let feature =
        FeatureAnnotation::new().with_filter(FilterState::from_json(&json!({"bogus": 1})));
    assert!(!feature.is_passing());
    assert_eq!(feature.filter, FilterState::Unknown);
}

#[test]
fn wire_shaped_effect_values() {
    // ANN arriving as a scalar string becomes a single effect
    let raw = RawValue::from_json(&json!("G|missense|HIGH|BRCA1")).unwrap();
    let feature = FeatureAnnotation::new().with_effects(raw);
    assert_eq!(feature.effects.len(), 1);
    assert_eq!(classify(&feature).color_bucket, ColorBucket::High);

    // ANN arriving as an array
    let raw = RawValue::from_json(&json!(["A|LOW|x", "B|MODERATE|y"])).unwrap();
    let feature = FeatureAnnotation::new().with_effects(raw);
    assert_eq!(classify(&feature).color_bucket, ColorBucket::Moderate);
}

#[test]
fn glyph_rules() {
    // Substring type match keeps the diamond
    let snv_like = FeatureAnnotation::new().with_type("somatic SNV");
    assert_eq!(glyph_for(&snv_like), Glyph::Diamond);

    let indel = FeatureAnnotation::new().with_type("insertion");
    assert_eq!(glyph_for(&indel), Glyph::Box);

    let failing = FeatureAnnotation::new().with_filter(FilterState::Fail);
    assert_eq!(glyph_for(&failing), Glyph::Box);
}
