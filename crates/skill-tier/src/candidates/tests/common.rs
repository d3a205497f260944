use std::sync::Arc;

use axum::response::Response;
use serde_json::{json, Value};

use crate::candidates::domain::{
    Assessment, Candidate, CandidateId, CandidateUpdate, NewCandidate, Registration,
};
use crate::candidates::query::CandidateQuery;
use crate::candidates::repository::{CandidateRepository, RepositoryError, TierCounts};
use crate::candidates::store::InMemoryCandidateStore;
use crate::candidates::{candidate_router, CandidateService};

pub(super) fn registration(name: &str, email: &str) -> Registration {
    Registration {
        name: name.to_string(),
        email: email.to_string(),
        phone: "+1 515-555-0100".to_string(),
    }
}

pub(super) fn all_answers(value: bool) -> Assessment {
    Assessment {
        knows_html_css_js: value,
        knows_react_nextjs: value,
        can_build_crud: value,
        crud_frameworks: if value {
            vec!["Next.js".to_string(), "Laravel".to_string()]
        } else {
            Vec::new()
        },
        can_implement_auth: value,
        can_implement_google_auth: value,
        knows_backend_framework: value,
        backend_frameworks: if value {
            vec!["Hono".to_string()]
        } else {
            Vec::new()
        },
        can_build_auth_api: value,
        can_document_api: value,
        knows_golang: value,
        can_build_go_api: value,
        can_integrate_go_with_frontend: value,
    }
}

pub(super) fn beginner() -> Assessment {
    Assessment {
        knows_html_css_js: true,
        knows_react_nextjs: true,
        ..Assessment::default()
    }
}

pub(super) fn crud_developer() -> Assessment {
    Assessment {
        can_build_crud: true,
        crud_frameworks: vec!["React".to_string()],
        ..beginner()
    }
}

pub(super) fn nextjs_auth() -> Assessment {
    Assessment {
        can_implement_auth: true,
        can_implement_google_auth: true,
        ..crud_developer()
    }
}

pub(super) fn backend_developer() -> Assessment {
    Assessment {
        knows_backend_framework: true,
        backend_frameworks: vec!["Express.js".to_string()],
        can_build_auth_api: true,
        can_document_api: true,
        ..nextjs_auth()
    }
}

pub(super) fn golang_developer() -> Assessment {
    Assessment {
        knows_golang: true,
        can_build_go_api: true,
        can_integrate_go_with_frontend: true,
        ..Assessment::default()
    }
}

pub(super) fn payload(name: &str, email: &str, assessment: &Assessment) -> Value {
    json!({
        "registration": registration(name, email),
        "assessment": assessment,
    })
}

pub(super) fn new_candidate(name: &str, email: &str, assessment: Assessment) -> NewCandidate {
    NewCandidate::classified(registration(name, email), assessment)
}

pub(super) fn build_service() -> (
    CandidateService<InMemoryCandidateStore>,
    Arc<InMemoryCandidateStore>,
) {
    let store = Arc::new(InMemoryCandidateStore::new());
    let service = CandidateService::new(store.clone());
    (service, store)
}

pub(super) fn router_with_service(service: CandidateService<InMemoryCandidateStore>) -> axum::Router {
    candidate_router(Arc::new(service))
}

pub(super) struct UnavailableRepository;

impl CandidateRepository for UnavailableRepository {
    fn insert(&self, _candidate: NewCandidate) -> Result<Candidate, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_email(&self, _email: &str) -> Result<Option<Candidate>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self, _query: &CandidateQuery) -> Result<Vec<Candidate>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn count_by_tier(&self) -> Result<TierCounts, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _id: &CandidateId, _update: CandidateUpdate) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete(&self, _id: &CandidateId) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
