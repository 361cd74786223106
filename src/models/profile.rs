use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{RatingInput, DisplayResult, TierName};

/// A user record as exported by the platform API. `rating` keeps whatever
/// JSON the API returned; it is only interpreted at classification time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub rating: Value,
}

impl UserProfile {
    pub fn new(id: impl Into<String>, username: impl Into<String>, rating: Value) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            rating,
        }
    }

    pub fn rating_input(&self) -> RatingInput {
        RatingInput::from(&self.rating)
    }
}

/// A profile after classification, one row of the admin users table.
#[derive(Debug, Clone, Serialize)]
pub struct RatedUser {
    pub id: String,
    pub username: String,
    pub tier: TierName,
    pub badge: &'static str,
    pub display: DisplayResult,
}
