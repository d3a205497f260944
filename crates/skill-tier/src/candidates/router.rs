use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::CandidateId;
use super::envelope::{ApiResponse, INVALID_FORM_DATA, SUBMISSION_ACCEPTED};
use super::query::CandidateQuery;
use super::repository::{CandidateRepository, RepositoryError};
use super::service::{CandidateService, CandidateServiceError};

/// Router builder exposing intake and dashboard endpoints.
pub fn candidate_router<R>(service: Arc<CandidateService<R>>) -> Router
where
    R: CandidateRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/candidates",
            get(list_handler::<R>).post(submit_handler::<R>),
        )
        .route("/api/v1/candidates/:candidate_id", get(detail_handler::<R>))
        .route("/api/v1/dashboard/stats", get(stats_handler::<R>))
        .with_state(service)
}

/// Raw listing parameters; each is parsed so bad values produce an envelope, not a rejection.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListParams {
    pub(crate) tier: Option<String>,
    pub(crate) sort: Option<String>,
    pub(crate) order: Option<String>,
    pub(crate) search: Option<String>,
}

impl ListParams {
    pub(crate) fn into_query(self) -> Result<CandidateQuery, String> {
        let mut query = CandidateQuery {
            search: self.search,
            ..CandidateQuery::default()
        };
        if let Some(tier) = self.tier {
            query.tier = tier.parse()?;
        }
        if let Some(sort) = self.sort {
            query.sort = sort.parse()?;
        }
        if let Some(order) = self.order {
            query.order = order.parse()?;
        }
        Ok(query)
    }
}

fn error_status(error: &CandidateServiceError) -> StatusCode {
    match error {
        CandidateServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CandidateServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        CandidateServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn rejected(status: StatusCode, message: String) -> Response {
    tracing::warn!(%status, %message, "rejected candidate request");
    (status, Json(ApiResponse::<Value>::failure(message))).into_response()
}

fn respond<T: Serialize>(success: StatusCode, result: Result<T, CandidateServiceError>) -> Response {
    match result {
        Ok(data) => (success, Json(ApiResponse::ok(data))).into_response(),
        Err(error) => (
            error_status(&error),
            Json(ApiResponse::<T>::from_error(&error)),
        )
            .into_response(),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<CandidateService<R>>>,
    body: Bytes,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let Ok(payload) = serde_json::from_slice::<Value>(&body) else {
        tracing::warn!("rejected candidate submission with unparseable body");
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::<Value>::failure(INVALID_FORM_DATA)),
        )
            .into_response();
    };

    match service.submit(payload) {
        Ok(receipt) => (
            StatusCode::CREATED,
            Json(ApiResponse::ok(receipt).with_message(SUBMISSION_ACCEPTED)),
        )
            .into_response(),
        Err(error) => respond::<Value>(StatusCode::CREATED, Err(error)),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<CandidateService<R>>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return rejected(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match params.into_query() {
        Ok(query) => respond(StatusCode::OK, service.list(&query)),
        Err(message) => rejected(StatusCode::BAD_REQUEST, message),
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<CandidateService<R>>>,
    candidate_id: Result<Path<String>, PathRejection>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    let Path(candidate_id) = match candidate_id {
        Ok(candidate_id) => candidate_id,
        Err(rejection) => return rejected(rejection.status(), rejection.body_text()),
    };

    respond(StatusCode::OK, service.get(&CandidateId(candidate_id)))
}

pub(crate) async fn stats_handler<R>(State(service): State<Arc<CandidateService<R>>>) -> Response
where
    R: CandidateRepository + 'static,
{
    respond(StatusCode::OK, service.stats())
}
