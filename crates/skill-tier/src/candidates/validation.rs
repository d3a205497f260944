use serde_json::Value;

use super::domain::{Registration, Submission};

/// Field-level validation failures. Callers outside the service only see a generic message.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("submission payload is malformed: {0}")]
    Malformed(String),
    #[error("name must be between {min} and {max} characters (found {found})")]
    NameLength { min: usize, max: usize, found: usize },
    #[error("invalid email address")]
    InvalidEmail,
    #[error("phone number must be between {min} and {max} characters (found {found})")]
    PhoneLength { min: usize, max: usize, found: usize },
    #[error("invalid phone number format")]
    InvalidPhoneFormat,
}

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const PHONE_MIN: usize = 10;
const PHONE_MAX: usize = 15;

/// Guard turning untyped request payloads into checked submissions.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGuard;

impl SubmissionGuard {
    pub fn new() -> Self {
        Self
    }

    /// Deserialize and validate a raw form payload.
    pub fn submission_from_payload(&self, payload: Value) -> Result<Submission, ValidationError> {
        let submission: Submission = serde_json::from_value(payload)
            .map_err(|err| ValidationError::Malformed(err.to_string()))?;
        self.check_registration(&submission.registration)?;
        Ok(submission)
    }

    pub fn check_registration(&self, registration: &Registration) -> Result<(), ValidationError> {
        let name_length = registration.name.chars().count();
        if !(NAME_MIN..=NAME_MAX).contains(&name_length) {
            return Err(ValidationError::NameLength {
                min: NAME_MIN,
                max: NAME_MAX,
                found: name_length,
            });
        }

        if !is_plausible_email(&registration.email) {
            return Err(ValidationError::InvalidEmail);
        }

        let phone_length = registration.phone.chars().count();
        if !(PHONE_MIN..=PHONE_MAX).contains(&phone_length) {
            return Err(ValidationError::PhoneLength {
                min: PHONE_MIN,
                max: PHONE_MAX,
                found: phone_length,
            });
        }

        if !registration.phone.chars().all(is_phone_char) {
            return Err(ValidationError::InvalidPhoneFormat);
        }

        Ok(())
    }
}

fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' ')
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}
