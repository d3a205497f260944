use serde::{Deserialize, Serialize};

use super::repository::RepositoryError;
use super::service::CandidateServiceError;

pub const INVALID_FORM_DATA: &str = "Invalid form data";
pub const NOT_FOUND: &str = "Candidate not found";
pub const SUBMISSION_ACCEPTED: &str = "Assessment submitted successfully!";

/// Uniform response body shared by every candidate action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    /// Collapse a service error into the caller-facing message.
    ///
    /// Validation detail stays server-side; repository messages pass through verbatim.
    pub fn from_error(error: &CandidateServiceError) -> Self {
        match error {
            CandidateServiceError::Validation(_) => Self::failure(INVALID_FORM_DATA),
            CandidateServiceError::NotFound(_) => Self::failure(NOT_FOUND),
            CandidateServiceError::Repository(RepositoryError::Unavailable(message)) => {
                Self::failure(message.clone())
            }
        }
    }

    pub fn from_result(result: Result<T, CandidateServiceError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(error) => Self::from_error(&error),
        }
    }
}
