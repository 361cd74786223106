pub mod table;
pub mod classifier;
pub mod calculator;

#[cfg(test)]
mod property_tests;

pub use table::{bracket_for, tier_table, TierBracket, MISSING_LABEL, NEUTRAL_COLOR};
pub use classifier::{format_display, resolve_tier};
pub use calculator::{TierDistribution, TierReport, TierReporter};
