use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use tadawul_core::domain::filter::Filter;
use tadawul_core::domain::recommendation::Recommendation;
use tadawul_core::render::{node, view};
use tadawul_core::runtime::Dashboard;
use tadawul_core::state::{ListView, Phase};
use tadawul_core::stats::Stats;

pub fn router(dashboard: Dashboard) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(index))
        .route("/fragment/list", get(list_fragment))
        .route("/api/view", get(api_view))
        .route("/filter/:filter", post(select_filter))
        .route("/refresh", post(refresh))
        .route("/details/:symbol", get(details))
        .with_state(dashboard)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index(State(dashboard): State<Dashboard>) -> Html<String> {
    let html = dashboard
        .read(|state| view::to_document_html(&view::page(state)))
        .await;
    Html(html)
}

/// Inner markup of the list target only.
async fn list_fragment(State(dashboard): State<Dashboard>) -> Html<String> {
    let html = dashboard
        .read(|state| node::render_all(&view::list_content(state)))
        .await;
    Html(html)
}

#[derive(Debug, Serialize)]
struct ApiView {
    phase: Phase,
    filter: Filter,
    stats: Stats,
    avg_confidence_text: String,
    list: ListView,
    last_updated: Option<DateTime<Utc>>,
    recommendations: Vec<Recommendation>,
}

async fn api_view(State(dashboard): State<Dashboard>) -> Json<ApiView> {
    let view = dashboard
        .read(|state| ApiView {
            phase: state.phase(),
            filter: state.filter(),
            stats: state.stats(),
            avg_confidence_text: state.stats().avg_confidence_text(),
            list: state.list_view().clone(),
            last_updated: state.last_updated(),
            recommendations: state.visible().into_iter().cloned().collect(),
        })
        .await;
    Json(view)
}

async fn select_filter(
    State(dashboard): State<Dashboard>,
    Path(filter): Path<String>,
) -> Result<Redirect, StatusCode> {
    let filter = filter.parse::<Filter>().map_err(|e| {
        tracing::debug!(error = %e, "rejected filter selection");
        StatusCode::BAD_REQUEST
    })?;
    dashboard.select_filter(filter).await;
    Ok(Redirect::to("/"))
}

/// Manual reload: fetch now and show the outcome.
async fn refresh(State(dashboard): State<Dashboard>) -> Redirect {
    dashboard.refresh().await;
    Redirect::to("/")
}

async fn details(Path(symbol): Path<String>) -> Html<String> {
    Html(view::to_document_html(&view::details_page(&symbol)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use std::sync::{Arc, Mutex};
    use tadawul_core::domain::recommendation::SignalType;
    use tadawul_core::loader::error::FetchError;
    use tadawul_core::loader::RecommendationSource;
    use tower::ServiceExt;

    struct FixedSource {
        reply: Mutex<Result<Vec<Recommendation>, FetchError>>,
    }

    impl FixedSource {
        fn new(reply: Result<Vec<Recommendation>, FetchError>) -> Arc<Self> {
            Arc::new(Self {
                reply: Mutex::new(reply),
            })
        }

        fn set(&self, reply: Result<Vec<Recommendation>, FetchError>) {
            *self.reply.lock().unwrap() = reply;
        }
    }

    #[async_trait::async_trait]
    impl RecommendationSource for FixedSource {
        fn source_name(&self) -> &'static str {
            "fixed"
        }

        async fn fetch_recommendations(&self) -> Result<Vec<Recommendation>, FetchError> {
            self.reply.lock().unwrap().clone()
        }
    }

    fn sample() -> Vec<Recommendation> {
        vec![
            Recommendation::new("LOW", SignalType::Buy, 40.0, 10.0, 11.0, 9.0),
            Recommendation::new("HIGH", SignalType::Sell, 90.0, 20.0, 18.0, 21.0),
        ]
    }

    async fn body_text(res: axum::response::Response) -> String {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn send(app: &Router, method: &str, uri: &str) -> axum::response::Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn index_renders_loaded_dashboard() {
        let dashboard = Dashboard::new(FixedSource::new(Ok(sample())));
        dashboard.refresh().await;
        let app = router(dashboard);

        let res = send(&app, "GET", "/").await;
        assert_eq!(res.status(), StatusCode::OK);
        let html = body_text(res).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"recommendationsList\""));
        assert!(html.contains("id=\"avgConfidence\">65.0%<"));
        assert!(html.find("HIGH").unwrap() < html.find("LOW").unwrap());
    }

    #[tokio::test]
    async fn filter_selection_redirects_and_rerenders() {
        let dashboard = Dashboard::new(FixedSource::new(Ok(sample())));
        dashboard.refresh().await;
        let app = router(dashboard.clone());

        let res = send(&app, "POST", "/filter/buy").await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(dashboard.read(|s| s.filter()).await, Filter::Buy);

        let fragment = body_text(send(&app, "GET", "/fragment/list").await).await;
        assert!(fragment.contains("LOW"));
        assert!(!fragment.contains("HIGH"));
        assert_eq!(dashboard.read(|s| s.latest_token()).await.0, 1);
    }

    #[tokio::test]
    async fn unknown_filter_is_bad_request() {
        let dashboard = Dashboard::new(FixedSource::new(Ok(sample())));
        let app = router(dashboard);
        let res = send(&app, "POST", "/filter/hold").await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn failed_refresh_shows_error_and_keeps_stats() {
        let source = FixedSource::new(Ok(sample()));
        let dashboard = Dashboard::new(source.clone());
        dashboard.refresh().await;

        source.set(Err(FetchError::new("http", "فشل في جلب البيانات (HTTP 500)")));
        let app = router(dashboard);
        let res = send(&app, "POST", "/refresh").await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);

        let fragment = body_text(send(&app, "GET", "/fragment/list").await).await;
        assert!(fragment.contains("HTTP 500"));
        assert!(!fragment.contains("recommendation-card"));

        let json: serde_json::Value =
            serde_json::from_str(&body_text(send(&app, "GET", "/api/view").await).await).unwrap();
        assert_eq!(json["phase"], "error");
        assert_eq!(json["stats"]["total"], 2);
        assert_eq!(json["list"]["kind"], "error");
    }

    #[tokio::test]
    async fn details_is_a_placeholder() {
        let dashboard = Dashboard::new(FixedSource::new(Ok(Vec::new())));
        let app = router(dashboard);
        let html = body_text(send(&app, "GET", "/details/2222").await).await;
        assert!(html.contains("2222"));
    }
}
