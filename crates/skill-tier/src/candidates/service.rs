use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::domain::{Candidate, CandidateId, CandidateUpdate, NewCandidate, Tier};
use super::query::CandidateQuery;
use super::repository::{CandidateRepository, RepositoryError, TierCounts};
use super::tier::{classify_with_rule, rationale};
use super::validation::{SubmissionGuard, ValidationError};

/// Service composing the submission guard, the tier rule table, and the repository.
pub struct CandidateService<R> {
    guard: SubmissionGuard,
    repository: Arc<R>,
}

/// Identifier and tier handed back after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub candidate_id: CandidateId,
    pub tier: Tier,
}

/// A stored candidate together with the canned explanation for its tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDetail {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub tier_reason: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_candidates: usize,
    pub tier_counts: TierCounts,
}

impl<R> CandidateService<R>
where
    R: CandidateRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            guard: SubmissionGuard::new(),
            repository,
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Validate, classify, and persist an untyped form payload.
    pub fn submit(&self, payload: Value) -> Result<SubmissionReceipt, CandidateServiceError> {
        let submission = self
            .guard
            .submission_from_payload(payload)
            .inspect_err(|err| warn!(error = %err, "rejected candidate submission"))?;

        let (tier, rule) = classify_with_rule(&submission.assessment);
        debug!(
            tier = tier.level(),
            rule = rule.map(|rule| rule.name).unwrap_or("fallback"),
            "assessment classified"
        );

        let candidate = NewCandidate::classified(submission.registration, submission.assessment);

        let stored = self
            .repository
            .insert(candidate)
            .inspect_err(|err| error!(error = %err, "failed to store candidate submission"))?;

        info!(candidate_id = %stored.id, tier = stored.tier.level(), "candidate submitted");

        Ok(SubmissionReceipt {
            candidate_id: stored.id,
            tier: stored.tier,
        })
    }

    pub fn list(&self, query: &CandidateQuery) -> Result<Vec<Candidate>, CandidateServiceError> {
        let candidates = self
            .repository
            .list(query)
            .inspect_err(|err| error!(error = %err, "failed to list candidates"))?;
        Ok(candidates)
    }

    /// Fetch a candidate and attach the rationale for its tier.
    pub fn get(&self, id: &CandidateId) -> Result<CandidateDetail, CandidateServiceError> {
        let candidate = self
            .repository
            .fetch(id)
            .inspect_err(|err| error!(candidate_id = %id, error = %err, "failed to fetch candidate"))?
            .ok_or_else(|| CandidateServiceError::NotFound(id.clone()))?;

        Ok(CandidateDetail {
            tier_reason: rationale(candidate.tier),
            candidate,
        })
    }

    pub fn stats(&self) -> Result<DashboardStats, CandidateServiceError> {
        let total_candidates = self
            .repository
            .count()
            .inspect_err(|err| error!(error = %err, "failed to count candidates"))?;
        let tier_counts = self
            .repository
            .count_by_tier()
            .inspect_err(|err| error!(error = %err, "failed to count candidates by tier"))?;

        Ok(DashboardStats {
            total_candidates,
            tier_counts,
        })
    }

    /// Advisory existence check; not atomic with a later `submit`.
    pub fn email_registered(&self, email: &str) -> Result<bool, CandidateServiceError> {
        Ok(self.repository.find_by_email(email)?.is_some())
    }

    pub fn update(
        &self,
        id: &CandidateId,
        update: CandidateUpdate,
    ) -> Result<(), CandidateServiceError> {
        if self.repository.update(id, update)? {
            info!(candidate_id = %id, "candidate updated");
            Ok(())
        } else {
            Err(CandidateServiceError::NotFound(id.clone()))
        }
    }

    pub fn delete(&self, id: &CandidateId) -> Result<(), CandidateServiceError> {
        if self.repository.delete(id)? {
            info!(candidate_id = %id, "candidate deleted");
            Ok(())
        } else {
            Err(CandidateServiceError::NotFound(id.clone()))
        }
    }
}

/// Error raised by the candidate service.
#[derive(Debug, thiserror::Error)]
pub enum CandidateServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("candidate {0} not found")]
    NotFound(CandidateId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
