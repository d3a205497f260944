use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use skill_tier::candidates::{candidate_router, CandidateRepository, CandidateService};
use std::sync::Arc;

pub(crate) fn with_candidate_routes<R>(service: Arc<CandidateService<R>>) -> axum::Router
where
    R: CandidateRepository + 'static,
{
    candidate_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use skill_tier::candidates::{Assessment, InMemoryCandidateStore};
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn app_state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        }
    }

    fn app(state: AppState) -> axum::Router {
        let service = Arc::new(CandidateService::new(Arc::new(InMemoryCandidateStore::new())));
        with_candidate_routes(service).layer(Extension(state))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn readiness_follows_flag() {
        let state = app_state(false);
        let router = app(state.clone());

        let response = router
            .clone()
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json_body(response).await, json!({ "status": "initializing" }));

        state.readiness.store(true, Ordering::Release);
        let response = router
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_render_as_prometheus_text() {
        let response = app(app_state(true))
            .oneshot(Request::get("/metrics").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
            Some("text/plain; version=0.0.4".as_bytes())
        );
    }

    #[tokio::test]
    async fn candidate_api_is_mounted_alongside_operational_routes() {
        let assessment = Assessment {
            knows_html_css_js: true,
            can_build_crud: true,
            ..Assessment::default()
        };
        let payload = json!({
            "registration": {
                "name": "Jane Doe",
                "email": "jane@example.com",
                "phone": "515-555-0100"
            },
            "assessment": assessment,
        });
        let router = app(app_state(true));

        let response = router
            .clone()
            .oneshot(
                Request::post("/api/v1/candidates")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&payload).expect("serialize")))
                    .expect("request"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        assert_eq!(body["data"]["tier"], json!(1));

        let response = router
            .oneshot(
                Request::get("/api/v1/dashboard/stats")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("route executes");
        let body = json_body(response).await;
        assert_eq!(body["data"]["totalCandidates"], json!(1));
    }
}
