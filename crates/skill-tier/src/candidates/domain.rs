use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tier::classify;

/// Framework options offered by the CRUD step of the form. Free text outside this list is accepted.
pub const CRUD_FRAMEWORKS: [&str; 7] = [
    "Next.js", "React", "Laravel", "Vue.js", "Angular", "Django", "Other",
];

/// Framework options offered by the backend step of the form.
pub const BACKEND_FRAMEWORKS: [&str; 7] = [
    "Express.js",
    "Hono",
    "Laravel",
    "NestJS",
    "Fastify",
    "Koa",
    "Other",
];

/// Identifier wrapper for stored candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub String);

impl CandidateId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Self-reported yes/no answers grouped by skill area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    // Basic skills
    pub knows_html_css_js: bool,
    pub knows_react_nextjs: bool,

    // CRUD & database
    pub can_build_crud: bool,
    pub crud_frameworks: Vec<String>,

    // Authentication
    pub can_implement_auth: bool,
    pub can_implement_google_auth: bool,

    // Backend frameworks
    pub knows_backend_framework: bool,
    pub backend_frameworks: Vec<String>,
    pub can_build_auth_api: bool,
    pub can_document_api: bool,

    // Advanced
    pub knows_golang: bool,
    pub can_build_go_api: bool,
    pub can_integrate_go_with_frontend: bool,
}

/// Contact details captured on the first form step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Complete form payload once it has been deserialized from the untyped request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub registration: Registration,
    pub assessment: Assessment,
}

/// Ordinal skill tier. Serialized as the bare integer `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Tier {
    Beginner = 0,
    CrudDeveloper = 1,
    FullStackNextjs = 2,
    MultiFramework = 3,
    AdvancedFullStack = 4,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Beginner,
        Tier::CrudDeveloper,
        Tier::FullStackNextjs,
        Tier::MultiFramework,
        Tier::AdvancedFullStack,
    ];

    pub fn level(self) -> u8 {
        self as u8
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.level()
    }
}

impl TryFrom<u8> for Tier {
    type Error = InvalidTier;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Tier::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(InvalidTier(value))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// Raised when an integer outside `0..=4` is offered as a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("tier must be between 0 and 4, found {0}")]
pub struct InvalidTier(pub u8);

/// Stored candidate record. `tier` always equals `classify(&assessment)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub assessment: Assessment,
    pub tier: Tier,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Candidate fields supplied by the caller; the store assigns the id and timestamps.
///
/// There is no tier here: it is derived from the assessment when the record is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub assessment: Assessment,
}

impl NewCandidate {
    pub fn classified(registration: Registration, assessment: Assessment) -> Self {
        Self {
            name: registration.name,
            email: registration.email,
            phone: registration.phone,
            assessment,
        }
    }

    pub fn tier(&self) -> Tier {
        classify(&self.assessment)
    }

    pub fn into_candidate(self, id: CandidateId, now: DateTime<Utc>) -> Candidate {
        Candidate {
            id,
            tier: self.tier(),
            name: self.name,
            email: self.email,
            phone: self.phone,
            assessment: self.assessment,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update accepted by the store. A replaced assessment re-derives the tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub assessment: Option<Assessment>,
}

impl CandidateUpdate {
    pub fn apply(self, candidate: &mut Candidate, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            candidate.name = name;
        }
        if let Some(email) = self.email {
            candidate.email = email;
        }
        if let Some(phone) = self.phone {
            candidate.phone = phone;
        }
        if let Some(assessment) = self.assessment {
            candidate.tier = classify(&assessment);
            candidate.assessment = assessment;
        }
        candidate.updated_at = now;
    }
}
