use reqwest::{Client, RequestBuilder, Response};
use url::Url;

use crate::{
    config::ApiConfig,
    domain::{
        history::HistoryEnvelope, AnalyzeRequest, AnalyzeResult, HistoryId, HistoryItem,
        HistoryStats,
    },
};

use super::{
    error::ApiError,
    response::{parse_json, status_error},
};

#[derive(Clone)]
pub struct ToxiGuardClient {
    http: Client,
    config: ApiConfig,
}

impl ToxiGuardClient {
    pub fn new(http: Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.config.base_url.as_ref()
    }

    pub async fn analyze(&self, text: &str) -> Result<AnalyzeResult, ApiError> {
        let url = self.endpoint(&["analyze"])?;
        tracing::debug!(target: "api", %url, chars = text.chars().count(), "analyze request");
        let request = self.http.post(url.clone()).json(&AnalyzeRequest { text });
        let response = self.send(request, &url).await?;
        let result: AnalyzeResult = parse_json(response).await?;
        tracing::info!(
            target: "api",
            toxic = result.toxic,
            percentage = result.toxicity_percentage,
            model = %result.model_used,
            "analysis received"
        );
        Ok(result)
    }

    /// Non-critical probe: every failure reads as "unhealthy".
    pub async fn check_backend_health(&self) -> bool {
        let url = match self.endpoint(&["health"]) {
            Ok(url) => url,
            Err(_) => return false,
        };
        match self.apply_timeout(self.http.get(url.clone())).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                tracing::debug!(target: "api", %url, error = %err, "health probe failed");
                false
            }
        }
    }

    pub async fn fetch_history(&self) -> Result<Vec<HistoryItem>, ApiError> {
        let url = self.endpoint(&["history"])?;
        let response = self.send(self.http.get(url.clone()), &url).await?;
        let envelope: HistoryEnvelope = parse_json(response).await?;
        tracing::debug!(target: "api", items = envelope.history.len(), "history received");
        Ok(envelope.history)
    }

    pub async fn fetch_stats(&self) -> Result<HistoryStats, ApiError> {
        let url = self.endpoint(&["history", "stats"])?;
        let response = self.send(self.http.get(url.clone()), &url).await?;
        parse_json(response).await
    }

    pub async fn delete_history_item(&self, id: &HistoryId) -> Result<(), ApiError> {
        let segment = id.to_string();
        let url = self.endpoint(&["history", segment.as_str()])?;
        self.send(self.http.delete(url.clone()), &url).await?;
        tracing::info!(target: "api", id = %id, "history item deleted");
        Ok(())
    }

    pub async fn clear_history(&self) -> Result<(), ApiError> {
        let url = self.endpoint(&["history"])?;
        self.send(self.http.delete(url.clone()), &url).await?;
        tracing::info!(target: "api", "history cleared");
        Ok(())
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self
            .config
            .base_url
            .clone()
            .ok_or(ApiError::MissingBaseUrl)?;
        if url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(url.to_string()));
        }
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    fn apply_timeout(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.request_timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, url: &Url) -> Result<Response, ApiError> {
        let response = self
            .apply_timeout(request)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            let err = status_error(response).await;
            tracing::warn!(target: "api", %url, error = %err, "backend returned an error");
            return Err(err);
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        routing::{delete, get, post},
        Json, Router,
    };
    use serde_json::{json, Value};

    use super::*;
    use crate::test_support::{client_for, spawn_backend, unreachable_url};

    fn demo_result() -> Value {
        json!({
            "toxic": false,
            "score": 0.1,
            "toxicity_percentage": 10,
            "labels": [],
            "text_length": 11,
            "keywords_found": 0,
            "response_time_ms": 42,
            "timestamp": "2024-01-01T00:00:00Z",
            "model_used": "demo"
        })
    }

    #[tokio::test]
    async fn analyze_posts_text_and_parses_result() {
        let router = Router::new().route(
            "/analyze",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({ "text": "hello world" }));
                Json(demo_result())
            }),
        );
        let backend = spawn_backend(router).await;
        let client = client_for(Some(backend.base_url.clone()));

        let result = client.analyze("hello world").await.unwrap();
        assert!(!result.toxic);
        assert_eq!(result.text_length, 11);
        assert_eq!(result.model_used, "demo");
    }

    #[tokio::test]
    async fn error_detail_becomes_message() {
        let router = Router::new().route(
            "/analyze",
            post(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({ "detail": "model unavailable" })),
                )
            }),
        );
        let backend = spawn_backend(router).await;
        let client = client_for(Some(backend.base_url.clone()));

        let err = client.analyze("x").await.unwrap_err();
        assert_eq!(err.to_string(), "model unavailable");
        assert!(matches!(
            err,
            ApiError::Status {
                status: StatusCode::SERVICE_UNAVAILABLE,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn bodiless_error_uses_status_line() {
        let router = Router::new().route(
            "/analyze",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let backend = spawn_backend(router).await;
        let client = client_for(Some(backend.base_url.clone()));

        let err = client.analyze("x").await.unwrap_err();
        assert_eq!(err.to_string(), "Error 500: Internal Server Error");
    }

    #[tokio::test]
    async fn missing_base_url_fails_before_any_request() {
        let client = client_for(None);
        let err = client.analyze("x").await.unwrap_err();
        assert!(matches!(err, ApiError::MissingBaseUrl));
        assert!(err.to_string().contains("TOXIGUARD_API_URL"));
    }

    #[tokio::test]
    async fn transport_failure_is_reported() {
        let client = client_for(Some(unreachable_url().await));
        let err = client.analyze("x").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport { .. }));
    }

    #[tokio::test]
    async fn health_probe_never_errors() {
        let router = Router::new().route("/health", get(|| async { "ok" }));
        let backend = spawn_backend(router).await;
        assert!(client_for(Some(backend.base_url.clone())).check_backend_health().await);

        let router = Router::new().route(
            "/health",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let sick = spawn_backend(router).await;
        assert!(!client_for(Some(sick.base_url.clone())).check_backend_health().await);

        assert!(!client_for(None).check_backend_health().await);
        assert!(!client_for(Some(unreachable_url().await)).check_backend_health().await);
    }

    #[tokio::test]
    async fn history_endpoints_use_expected_paths() {
        let deleted = Arc::new(AtomicUsize::new(0));
        let router = Router::new()
            .route(
                "/history",
                get(|| async {
                    Json(json!({ "history": [{
                        "id": 3,
                        "text": "hola",
                        "toxicity_percentage": 12,
                        "category": "",
                        "timestamp": "2024-01-01T00:00:00Z",
                        "is_toxic": false
                    }]}))
                })
                .delete(|| async { StatusCode::NO_CONTENT }),
            )
            .route(
                "/history/stats",
                get(|| async {
                    Json(json!({
                        "total_analyses": 4,
                        "toxic_count": 1,
                        "safe_count": 3,
                        "average_score": 0.2
                    }))
                }),
            )
            .route(
                "/history/{id}",
                delete(
                    |State(deleted): State<Arc<AtomicUsize>>, Path(id): Path<String>| async move {
                        assert_eq!(id, "3");
                        deleted.fetch_add(1, Ordering::SeqCst);
                        StatusCode::OK
                    },
                ),
            )
            .with_state(deleted.clone());
        let backend = spawn_backend(router).await;
        let client = client_for(Some(backend.base_url.clone()));

        let history = client.fetch_history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, HistoryId::Number(3));

        let stats = client.fetch_stats().await.unwrap();
        assert_eq!(stats.safe_count, 3);

        client.delete_history_item(&HistoryId::Number(3)).await.unwrap();
        assert_eq!(deleted.load(Ordering::SeqCst), 1);

        client.clear_history().await.unwrap();
    }

    #[tokio::test]
    async fn opaque_base_url_is_rejected() {
        let client = client_for(Some(Url::parse("mailto:ops@example.com").unwrap()));
        let err = client.fetch_history().await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
        assert!(!client.check_backend_health().await);
    }

    #[tokio::test]
    async fn base_url_path_prefix_is_kept() {
        let router = Router::new().route("/api/health", get(|| async { "ok" }));
        let backend = spawn_backend(router).await;
        let mut base = backend.base_url.clone();
        base.set_path("/api");
        assert!(client_for(Some(base)).check_backend_health().await);
    }
}
