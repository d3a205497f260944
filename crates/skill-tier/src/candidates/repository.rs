use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Candidate, CandidateId, CandidateUpdate, NewCandidate, Tier};
use super::query::CandidateQuery;

/// Storage abstraction so the service can be exercised against any backend.
///
/// `find_by_email` is advisory only: it is not atomic with `insert`, so two concurrent
/// submissions with the same address can both be stored.
pub trait CandidateRepository: Send + Sync {
    fn insert(&self, candidate: NewCandidate) -> Result<Candidate, RepositoryError>;
    fn fetch(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError>;
    fn find_by_email(&self, email: &str) -> Result<Option<Candidate>, RepositoryError>;
    fn list(&self, query: &CandidateQuery) -> Result<Vec<Candidate>, RepositoryError>;
    fn count(&self) -> Result<usize, RepositoryError>;
    fn count_by_tier(&self) -> Result<TierCounts, RepositoryError>;
    fn update(&self, id: &CandidateId, update: CandidateUpdate) -> Result<bool, RepositoryError>;
    fn delete(&self, id: &CandidateId) -> Result<bool, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Candidate totals keyed by tier level; every tier is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierCounts(BTreeMap<u8, usize>);

impl TierCounts {
    pub fn tally<'a, I>(tiers: I) -> Self
    where
        I: IntoIterator<Item = &'a Tier>,
    {
        let mut counts = Self::default();
        for tier in tiers {
            *counts.0.entry(tier.level()).or_insert(0) += 1;
        }
        counts
    }

    pub fn get(&self, tier: Tier) -> usize {
        self.0.get(&tier.level()).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tier, usize)> + '_ {
        Tier::ALL.iter().map(move |tier| (*tier, self.get(*tier)))
    }
}

impl Default for TierCounts {
    fn default() -> Self {
        Self(Tier::ALL.iter().map(|tier| (tier.level(), 0)).collect())
    }
}
