pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::redaction::handlers::handle_redact;
use crate::resumes::handlers as resumes;
use crate::state::AppState;
use crate::suggestions::handlers as suggestions;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Redaction ingress
        .route("/api/redact", post(handle_redact))
        // Stored resumes
        .route(
            "/api/v1/resumes/:user_id",
            get(resumes::handle_get_resume)
                .put(resumes::handle_save_resume)
                .delete(resumes::handle_delete_resume),
        )
        .route(
            "/api/v1/resumes/:user_id/preview",
            get(resumes::handle_preview),
        )
        .route("/api/v1/resumes/:user_id/export", get(resumes::handle_export))
        .route(
            "/api/v1/resumes/:user_id/job-match",
            post(suggestions::handle_job_match),
        )
        // Writing assistance
        .route(
            "/api/v1/suggestions/:section",
            get(suggestions::handle_suggestions),
        )
        .route(
            "/api/v1/templates/:section",
            get(suggestions::handle_templates),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::test_support::{sample_record, test_state};

    async fn send(
        router: Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&value).unwrap())
            }
            None => Body::empty(),
        };
        let response = router.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        send(router, Method::GET, uri, None).await
    }

    async fn put(router: Router, uri: &str, body: &Value) -> StatusCode {
        send(router, Method::PUT, uri, Some(body.clone())).await.0
    }

    fn json_body(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(build_router(test_state()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body)["status"], "ok");
    }

    #[tokio::test]
    async fn test_redact_end_to_end() {
        let payload = serde_json::to_value(sample_record()).unwrap();
        let (status, body) = send(
            build_router(test_state()),
            Method::POST,
            "/api/redact",
            Some(payload.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let body = json_body(&body);
        assert_eq!(body["success"], true);
        assert_eq!(
            body["redactedFields"],
            json!(["fullName", "email", "phone", "location"])
        );
        let info = &body["data"]["personalInfo"];
        assert_eq!(info["fullName"], "████ ███");
        assert_eq!(info["email"], "████████@example.com");
        assert_eq!(info["phone"], "███-███-████");
        assert_eq!(info["location"], "███ ████ St");

        // Everything outside the four fields comes back unchanged.
        let mut expected = payload;
        expected["personalInfo"]["fullName"] = info["fullName"].clone();
        expected["personalInfo"]["email"] = info["email"].clone();
        expected["personalInfo"]["phone"] = info["phone"].clone();
        expected["personalInfo"]["location"] = info["location"].clone();
        assert_eq!(body["data"], expected);
    }

    #[tokio::test]
    async fn test_redact_malformed_body() {
        let (status, body) = send(
            build_router(test_state()),
            Method::POST,
            "/api/redact",
            Some(json!({ "personalInfo": ["not", "an", "object"] })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(&body),
            json!({ "success": false, "error": "Failed to redact resume data" })
        );
    }

    #[tokio::test]
    async fn test_save_load_delete_cycle() {
        let router = build_router(test_state());
        let record = serde_json::to_value(sample_record()).unwrap();

        let (status, _) = get(router.clone(), "/api/v1/resumes/u1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let status = put(router.clone(), "/api/v1/resumes/u1", &record).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = get(router.clone(), "/api/v1/resumes/u1").await;
        assert_eq!(status, StatusCode::OK);
        let loaded = json_body(&body);
        assert_eq!(loaded["colorTheme"], "blue");
        assert_eq!(loaded, record);

        let (status, _) = send(router.clone(), Method::DELETE, "/api/v1/resumes/u1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = get(router, "/api/v1/resumes/u1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_user_id_is_rejected() {
        let (status, body) = get(build_router(test_state()), "/api/v1/resumes/a.b").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_body(&body)["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_protected_preview_leaves_stored_record_intact() {
        let router = build_router(test_state());
        let record = serde_json::to_value(sample_record()).unwrap();
        put(router.clone(), "/api/v1/resumes/u2", &record).await;

        let (status, body) = get(router.clone(), "/api/v1/resumes/u2/preview?protected=true").await;
        assert_eq!(status, StatusCode::OK);
        let view = json_body(&body);
        assert_eq!(view["protectedMode"], true);
        assert_eq!(view["badge"], "Protected Mode");
        assert_eq!(view["resume"]["personalInfo"]["fullName"], "████ ███");

        let (_, body) = get(router.clone(), "/api/v1/resumes/u2/preview").await;
        assert_eq!(json_body(&body)["resume"]["personalInfo"]["fullName"], "John Doe");

        let (_, body) = get(router, "/api/v1/resumes/u2").await;
        assert_eq!(json_body(&body), record);
    }

    #[tokio::test]
    async fn test_export_sets_attachment_headers() {
        let router = build_router(test_state());
        let record = serde_json::to_value(sample_record()).unwrap();
        put(router.clone(), "/api/v1/resumes/u3", &record).await;

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/resumes/u3/export?format=json&redact=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"resume-data-redacted-"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = json_body(&bytes);
        assert_eq!(body["personalInfo"]["email"], "████████@example.com");
        assert_eq!(body["metadata"]["redacted"], true);
    }

    #[tokio::test]
    async fn test_suggestions_and_templates() {
        let router = build_router(test_state());
        let (status, body) = get(router.clone(), "/api/v1/suggestions/summary").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body)["suggestions"].as_array().unwrap().len(), 2);

        let (status, body) = get(router, "/api/v1/templates/projects").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json_body(&body)["templates"][0]["data"]["name"],
            "E-commerce Platform"
        );
    }

    #[tokio::test]
    async fn test_job_match() {
        let router = build_router(test_state());
        let record = serde_json::to_value(sample_record()).unwrap();
        put(router.clone(), "/api/v1/resumes/u4", &record).await;

        let (status, body) = send(
            router.clone(),
            Method::POST,
            "/api/v1/resumes/u4/job-match",
            Some(json!({ "jobTitle": "Backend Developer" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let report = json_body(&body);
        assert_eq!(report["matchingSkills"], json!(["SQL"]));

        let (status, _) = send(
            router,
            Method::POST,
            "/api/v1/resumes/u4/job-match",
            Some(json!({ "jobTitle": "  " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
