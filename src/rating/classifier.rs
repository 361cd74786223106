use crate::models::{DisplayResult, RatingInput, TierDescriptor};
use crate::rating::table::{GRANDMASTER, MISSING_LABEL, NEUTRAL_COLOR, TIER_TABLE, UNRATED};

/// Map a rating to its tier.
///
/// Non-finite and non-positive ratings are Unrated. Every other rating
/// falls into the first bracket whose exclusive upper bound exceeds it,
/// and anything at or above the highest bound is Grandmaster.
pub fn resolve_tier(rating: impl Into<RatingInput>) -> &'static TierDescriptor {
    let value = rating.into().coerce();

    if !value.is_finite() || value <= 0.0 {
        return &UNRATED;
    }

    TIER_TABLE
        .iter()
        .find(|(upper, _)| value < *upper)
        .map(|(_, descriptor)| descriptor)
        .unwrap_or(&GRANDMASTER)
}

/// Label and color for showing a rating next to a user's name.
///
/// A missing or non-numeric rating renders as a dash in the neutral color
/// and never reaches the tier table, so it reads differently from a user
/// whose rating is zero (which shows `0` in the Unrated color).
pub fn format_display(rating: impl Into<RatingInput>) -> DisplayResult {
    let input = rating.into();

    let Some(value) = input.finite() else {
        return DisplayResult {
            label: MISSING_LABEL.to_string(),
            color: NEUTRAL_COLOR,
        };
    };

    DisplayResult {
        label: number_label(value),
        color: resolve_tier(value).text_color,
    }
}

/// Shortest text form of a number, the way a browser prints it.
fn number_label(value: f64) -> String {
    // -0 prints as 0
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let exponential = format!("{value:e}");
        return match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exponential,
        };
    }

    value.to_string()
}
