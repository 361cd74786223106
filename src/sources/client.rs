use async_trait::async_trait;

use crate::models::{Result, UserProfile};

#[cfg(test)]
use mockall::automock;

/// Somewhere user profiles can be loaded from.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Short name used in logs and errors
    fn name(&self) -> String;

    /// Fetch every profile the source knows about, in source order
    async fn fetch_profiles(&self) -> Result<Vec<UserProfile>>;
}
