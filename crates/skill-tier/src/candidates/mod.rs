//! Candidate self-assessment intake, tier classification, and dashboard queries.
//!
//! Submissions flow through validation, the tier rule table, and the repository before
//! they are surfaced again through the filtered and sorted dashboard listing.

pub mod domain;
pub mod envelope;
pub mod query;
pub mod repository;
pub mod router;
pub mod service;
pub mod store;
pub mod tier;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Assessment, Candidate, CandidateId, CandidateUpdate, NewCandidate, Registration, Submission,
    Tier, BACKEND_FRAMEWORKS, CRUD_FRAMEWORKS,
};
pub use envelope::{ApiResponse, INVALID_FORM_DATA, NOT_FOUND, SUBMISSION_ACCEPTED};
pub use query::{CandidateQuery, SortField, SortOrder, TierFilter};
pub use repository::{CandidateRepository, RepositoryError, TierCounts};
pub use router::candidate_router;
pub use service::{
    CandidateDetail, CandidateService, CandidateServiceError, DashboardStats, SubmissionReceipt,
};
pub use store::InMemoryCandidateStore;
pub use tier::{classify, describe, rationale, TierDescriptor};
pub use validation::{SubmissionGuard, ValidationError};
