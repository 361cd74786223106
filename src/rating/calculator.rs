use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::models::{RatedUser, Result, TierName, UserProfile};
use crate::rating::{format_display, resolve_tier};
use crate::sources::ProfileSource;

/// User counts per tier. Every tier has an entry, zero or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierDistribution {
    counts: BTreeMap<TierName, usize>,
}

impl Default for TierDistribution {
    fn default() -> Self {
        Self {
            counts: TierName::ALL.iter().map(|name| (*name, 0)).collect(),
        }
    }
}

impl TierDistribution {
    pub fn record(&mut self, tier: TierName) {
        *self.counts.entry(tier).or_insert(0) += 1;
    }

    pub fn count(&self, tier: TierName) -> usize {
        self.counts.get(&tier).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Fraction of all users in `tier`; zero when there are no users.
    pub fn share(&self, tier: TierName) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(tier) as f64 / total as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = (TierName, usize)> + '_ {
        self.counts.iter().map(|(name, count)| (*name, *count))
    }
}

/// Numbers behind the admin dashboard's stats cards and users table.
#[derive(Debug, Clone, Serialize)]
pub struct TierReport {
    pub source: String,
    pub total_users: usize,
    pub rated_users: usize,
    pub unrated_users: usize,
    pub distribution: TierDistribution,
    pub highest_rating: Option<f64>,
    pub average_rating: Option<f64>,
    pub users: Vec<RatedUser>,
    pub generated_at: DateTime<Utc>,
}

pub struct TierReporter {
    source: Arc<dyn ProfileSource>,
}

impl TierReporter {
    pub fn new(source: Arc<dyn ProfileSource>) -> Self {
        Self { source }
    }

    pub async fn build_report(&self) -> Result<TierReport> {
        let source_name = self.source.name();
        info!("Building tier report from {}", source_name);

        let profiles = self.source.fetch_profiles().await?;
        if profiles.is_empty() {
            warn!("Profile source {} returned no users", source_name);
        }

        let report = Self::summarize(source_name, &profiles);
        info!(
            "Classified {} users ({} rated, {} unrated)",
            report.total_users, report.rated_users, report.unrated_users
        );

        Ok(report)
    }

    /// Classify profiles without touching a source.
    pub fn summarize(source: String, profiles: &[UserProfile]) -> TierReport {
        let mut distribution = TierDistribution::default();
        let mut users = Vec::with_capacity(profiles.len());
        let mut highest: Option<f64> = None;
        let mut rated_sum = 0.0;
        let mut rated_users = 0;

        for profile in profiles {
            let input = profile.rating_input();
            let tier = resolve_tier(input);
            distribution.record(tier.name);

            if let Some(value) = input.finite() {
                highest = Some(highest.map_or(value, |h| h.max(value)));
            }
            if tier.name != TierName::Unrated {
                rated_sum += input.coerce();
                rated_users += 1;
            }

            users.push(RatedUser {
                id: profile.id.clone(),
                username: profile.username.clone(),
                tier: tier.name,
                badge: tier.badge,
                display: format_display(input),
            });
        }

        TierReport {
            source,
            total_users: profiles.len(),
            rated_users,
            unrated_users: profiles.len() - rated_users,
            distribution,
            highest_rating: highest,
            average_rating: (rated_users > 0).then(|| rated_sum / rated_users as f64),
            users,
            generated_at: Utc::now(),
        }
    }
}
