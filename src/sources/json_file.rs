use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::models::{RatingError, Result, UserProfile};
use crate::sources::ProfileSource;

/// Profiles exported from the platform API as JSON.
///
/// Accepts either a bare array of profiles or the API's `{"users": [...]}`
/// envelope.
pub struct JsonFileSource {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileExport {
    Bare(Vec<UserProfile>),
    Envelope { users: Vec<UserProfile> },
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn parse(contents: &str) -> Result<Vec<UserProfile>> {
        let export: ProfileExport = serde_json::from_str(contents)?;
        Ok(match export {
            ProfileExport::Bare(users) => users,
            ProfileExport::Envelope { users } => users,
        })
    }
}

#[async_trait]
impl ProfileSource for JsonFileSource {
    fn name(&self) -> String {
        format!("json:{}", self.path.display())
    }

    async fn fetch_profiles(&self) -> Result<Vec<UserProfile>> {
        debug!("Reading profiles from {}", self.path.display());

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| RatingError::SourceUnavailable {
                source_name: self.name(),
                message: e.to_string(),
            })?;

        let profiles = Self::parse(&contents)?;
        info!("Loaded {} profiles from {}", profiles.len(), self.path.display());

        Ok(profiles)
    }
}
