pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::{handle_analyze, method_not_allowed};
use crate::page::handlers::{handle_page, handle_page_analyze, handle_root};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Page
        .route("/", get(handle_root))
        .route(
            "/analysis",
            get(handle_page)
                .post(handle_page_analyze)
                .fallback(method_not_allowed),
        )
        // Analysis API
        .route(
            "/api/analyze",
            post(handle_analyze).fallback(method_not_allowed),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::errors::{MSG_ANALYSIS_FAILED, MSG_JOB_DESCRIPTION_REQUIRED, MSG_METHOD_NOT_ALLOWED};
    use crate::llm_client::{ChatCompletion, LlmError};

    /// Records every prompt and answers with a canned result.
    struct FakeProvider {
        reply: Result<String, u16>,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeProvider {
        fn answering(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(status),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatCompletion for FakeProvider {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "upstream exploded".to_string(),
                }),
            }
        }

        fn model(&self) -> &str {
            "fake-model"
        }
    }

    fn router_with(provider: Arc<FakeProvider>) -> Router {
        build_router(AppState { provider })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn full_request() -> Value {
        json!({
            "jobDescription": "Desenvolvedor Fullstack com foco em React",
            "currentStack": ["React", "Node.js"],
            "technologies": ["TypeScript"]
        })
    }

    #[tokio::test]
    async fn test_analyze_returns_provider_text_exactly() {
        let provider = FakeProvider::answering("Plan: study X");
        let response = router_with(provider.clone())
            .oneshot(post_json("/api/analyze", full_request()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"analysis": "Plan: study X"}));

        let prompts = provider.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Desenvolvedor Fullstack com foco em React"));
        assert!(prompts[0].contains("React, Node.js"));
        assert!(!prompts[0].contains("O nível atual do candidato"));
    }

    #[tokio::test]
    async fn test_provider_failure_is_500_with_fixed_message() {
        let provider = FakeProvider::failing(503);
        let router = router_with(provider.clone());

        let response = router
            .clone()
            .oneshot(post_json("/api/analyze", full_request()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({"error": MSG_ANALYSIS_FAILED}));

        // The server keeps serving after a failed call.
        let health = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(health.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_non_post_methods_are_405() {
        for verb in ["GET", "PUT", "DELETE", "PATCH"] {
            let provider = FakeProvider::answering("unused");
            let response = router_with(provider.clone())
                .oneshot(
                    Request::builder()
                        .method(verb)
                        .uri("/api/analyze")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{verb}");
            assert_eq!(body_json(response).await["error"], MSG_METHOD_NOT_ALLOWED);
            assert!(provider.prompts().is_empty());
        }
    }

    #[tokio::test]
    async fn test_blank_job_description_never_calls_provider() {
        let provider = FakeProvider::answering("unused");
        let response = router_with(provider.clone())
            .oneshot(post_json(
                "/api/analyze",
                json!({"jobDescription": "   ", "technologies": ["Rust"]}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], MSG_JOB_DESCRIPTION_REQUIRED);
        assert!(provider.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_is_400() {
        let provider = FakeProvider::answering("unused");
        let request = Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = router_with(provider.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!body_json(response).await["error"].as_str().unwrap().is_empty());
        assert!(provider.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_scalar_tag_field_is_400() {
        let provider = FakeProvider::answering("unused");
        let response = router_with(provider.clone())
            .oneshot(post_json(
                "/api/analyze",
                json!({"jobDescription": "Frontend", "currentStack": "React"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(provider.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_submissions_are_independent() {
        let provider = FakeProvider::answering("Plan: study X");
        let router = router_with(provider.clone());

        for _ in 0..2 {
            let response = router
                .clone()
                .oneshot(post_json("/api/analyze", full_request()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let prompts = provider.prompts();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0], prompts[1]);
    }

    #[tokio::test]
    async fn test_page_route_renders_markdown() {
        let provider = FakeProvider::answering("## Plano\n\n- Estudar **Rust**");
        let response = router_with(provider)
            .oneshot(post_json("/analysis", full_request()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["analysis"], "## Plano\n\n- Estudar **Rust**");
        let html = body["html"].as_str().unwrap();
        assert!(html.contains("<h2>Plano</h2>"));
        assert!(html.contains("<strong>Rust</strong>"));
    }

    #[tokio::test]
    async fn test_page_route_keeps_placeholder_for_empty_analysis() {
        let response = router_with(FakeProvider::answering(""))
            .oneshot(post_json("/analysis", json!({"jobDescription": "x"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["analysis"], "");
        let html = body["html"].as_str().unwrap();
        assert!(html.contains("A análise detalhada da descrição da vaga será exibida aqui"));
    }

    #[tokio::test]
    async fn test_page_route_shares_error_mapping() {
        let response = router_with(FakeProvider::failing(401))
            .oneshot(post_json("/analysis", full_request()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], MSG_ANALYSIS_FAILED);
    }

    #[tokio::test]
    async fn test_page_is_served_as_html() {
        let response = router_with(FakeProvider::answering("unused"))
            .oneshot(Request::get("/analysis").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("Analisar vaga"));
    }

    #[tokio::test]
    async fn test_root_redirects_to_page() {
        let response = router_with(FakeProvider::answering("unused"))
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.status().is_redirection());
        assert_eq!(response.headers()[header::LOCATION], "/analysis");
    }

    #[tokio::test]
    async fn test_health_reports_model() {
        let response = router_with(FakeProvider::answering("unused"))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"], "fake-model");
    }
}
