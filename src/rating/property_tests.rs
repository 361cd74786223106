//! Property tests for the rating classifier
//!
//! Covers bracket membership, monotonicity of the tier rank and the
//! relation between the formatter and the resolver.

use proptest::prelude::*;

use crate::models::TierName;
use crate::rating::table::{tier_table, MISSING_LABEL, NEUTRAL_COLOR};
use crate::rating::{format_display, resolve_tier};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators
// ═══════════════════════════════════════════════════════════════════════════

/// Ratings spread over every bracket, including far past the top bound
fn rating_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.0001..800.0f64,
        800.0..2200.0f64,
        2200.0..1.0e9f64,
    ]
}

/// Values that must never produce a tier above Unrated
fn unrated_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(-0.0),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        -1.0e9..0.0f64,
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn prop_low_ratings_are_newbie(r in 0.0001..800.0f64) {
        prop_assert_eq!(resolve_tier(r).name, TierName::Newbie);
    }

    #[test]
    fn prop_pupil_bracket(r in 800.0..1000.0f64) {
        prop_assert_eq!(resolve_tier(r).name, TierName::Pupil);
    }

    #[test]
    fn prop_grandmaster_has_no_ceiling(r in 2200.0..f64::MAX) {
        prop_assert_eq!(resolve_tier(r).name, TierName::Grandmaster);
    }

    #[test]
    fn prop_non_positive_or_non_finite_is_unrated(r in unrated_strategy()) {
        prop_assert_eq!(resolve_tier(r).name, TierName::Unrated);
    }

    #[test]
    fn prop_resolved_tier_bracket_contains_rating(r in rating_strategy()) {
        let tier = resolve_tier(r);
        let bracket = tier_table()
            .find(|b| b.descriptor.name == tier.name);
        prop_assert!(bracket.map_or(false, |b| b.contains(r)), "{} not in bracket of {}", r, tier.name);
    }

    #[test]
    fn prop_rank_is_monotonic(a in -100.0..1.0e6f64, b in -100.0..1.0e6f64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(resolve_tier(low).name <= resolve_tier(high).name);
    }

    #[test]
    fn prop_display_color_matches_tier(r in rating_strategy()) {
        let display = format_display(r);
        prop_assert_eq!(display.color, resolve_tier(r).text_color);
        prop_assert_ne!(display.label.as_str(), MISSING_LABEL);
    }

    #[test]
    fn prop_display_label_parses_back(r in rating_strategy()) {
        let display = format_display(r);
        let parsed: f64 = display.label.parse().unwrap_or(f64::NAN);
        prop_assert_eq!(parsed, r);
    }

    #[test]
    fn prop_string_input_matches_numeric(r in rating_strategy()) {
        let text = r.to_string();
        prop_assert!(std::ptr::eq(resolve_tier(text.as_str()), resolve_tier(r)));
        prop_assert_eq!(format_display(text), format_display(r));
    }

    #[test]
    fn prop_non_finite_display_is_dash(r in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)]) {
        let display = format_display(r);
        prop_assert_eq!(display.label.as_str(), MISSING_LABEL);
        prop_assert_eq!(display.color, NEUTRAL_COLOR);
    }

    #[test]
    fn prop_idempotent(r in prop::num::f64::ANY) {
        prop_assert!(std::ptr::eq(resolve_tier(r), resolve_tier(r)));
        prop_assert_eq!(format_display(r), format_display(r));
    }
}
