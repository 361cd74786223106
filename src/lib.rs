pub mod models;
pub mod config;
pub mod rating;
pub mod sources;
pub mod tui;

pub use models::{DisplayResult, RatingError, RatingInput, Result, TierDescriptor, TierName, UserProfile};
pub use config::Settings;

// Re-export the classifier entry points
pub use rating::{format_display, resolve_tier};
