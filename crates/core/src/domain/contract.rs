use crate::domain::recommendation::Recommendation;
use anyhow::Context;
use serde_json::Value;

/// Decoded `GET /recommendations` response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationsEnvelope {
    /// Server-reported count, informational only.
    pub count: Option<u64>,
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationsEnvelope {
    /// Accepts any JSON value. Only an object with an array-valued
    /// `recommendations` field yields records; every other shape is an empty list.
    /// Records inside the array must decode, otherwise the whole envelope is rejected.
    pub fn from_json(raw: Value) -> anyhow::Result<Self> {
        let Value::Object(mut obj) = raw else {
            return Ok(Self::default());
        };

        let count = obj.get("count").and_then(Value::as_u64);

        let recommendations = match obj.remove("recommendations") {
            Some(items @ Value::Array(_)) => serde_json::from_value::<Vec<Recommendation>>(items)
                .context("failed to decode recommendations list")?,
            _ => Vec::new(),
        };

        Ok(Self {
            count,
            recommendations,
        })
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let raw = serde_json::from_str::<Value>(text)
            .context("response is not valid JSON")?;
        Self::from_json(raw)
    }
}
