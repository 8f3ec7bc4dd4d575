use crate::config::Settings;
use crate::domain::contract::RecommendationsEnvelope;
use crate::domain::recommendation::Recommendation;
use crate::loader::error::FetchError;
use crate::loader::RecommendationSource;
use crate::render::locale;
use anyhow::Context;
use std::time::Duration;

const RECOMMENDATIONS_PATH: &str = "/recommendations";

#[derive(Debug, Clone)]
pub struct HttpRecommendationSource {
    http: reqwest::Client,
    base_url: String,
    limit: Option<u32>,
}

impl HttpRecommendationSource {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        Self::new(
            settings.api_base_url.clone(),
            settings.http_timeout,
            settings.recommendations_limit,
        )
    }

    pub fn new(base_url: String, timeout: Duration, limit: Option<u32>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build recommendations http client")?;

        Ok(Self {
            http,
            base_url,
            limit,
        })
    }

    pub fn url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            RECOMMENDATIONS_PATH
        )
    }

    pub async fn fetch_envelope(&self) -> Result<RecommendationsEnvelope, FetchError> {
        let mut req = self.http.get(self.url());
        if let Some(limit) = self.limit {
            req = req.query(&[("limit", limit)]);
        }

        let res = req
            .send()
            .await
            .map_err(|e| FetchError::new("transport", e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::new(
                "http",
                format!("{} (HTTP {status})", locale::FETCH_FAILED),
            ));
        }

        let text = res
            .text()
            .await
            .map_err(|e| FetchError::new("body", e.to_string()))?;

        RecommendationsEnvelope::parse(&text).map_err(|e| {
            tracing::debug!(body_len = text.len(), "undecodable recommendations body");
            FetchError::new("decode", format!("{e:#}"))
        })
    }
}

#[async_trait::async_trait]
impl RecommendationSource for HttpRecommendationSource {
    fn source_name(&self) -> &'static str {
        "recommendations_http"
    }

    async fn fetch_recommendations(&self) -> Result<Vec<Recommendation>, FetchError> {
        let envelope = self.fetch_envelope().await?;
        tracing::debug!(
            count = envelope.recommendations.len(),
            reported = ?envelope.count,
            "fetched recommendations"
        );
        Ok(envelope.recommendations)
    }
}
