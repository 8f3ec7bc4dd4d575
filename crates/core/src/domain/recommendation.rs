use serde::{Deserialize, Serialize};

/// A single buy/sell signal as served by the recommendations API.
///
/// Records are read-only on this side: whatever the API returned is stored and
/// displayed as-is. The optional fields come from the upstream join with the
/// stocks table and may be missing on older deployments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub symbol: String,
    #[serde(rename = "type")]
    pub kind: SignalType,
    /// Percentage, 0..=100.
    pub confidence: f64,
    pub entry_price: f64,
    pub target_price: f64,
    pub stop_loss: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalType {
    Buy,
    Sell,
    /// Any other `type` string. Counted in totals, never matched by buy/sell filters.
    #[serde(other)]
    Other,
}

impl SignalType {
    pub fn as_str(self) -> &'static str {
        match self {
            SignalType::Buy => "buy",
            SignalType::Sell => "sell",
            SignalType::Other => "other",
        }
    }
}

impl Recommendation {
    pub fn new(
        symbol: impl Into<String>,
        kind: SignalType,
        confidence: f64,
        entry_price: f64,
        target_price: f64,
        stop_loss: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            kind,
            confidence,
            entry_price,
            target_price,
            stop_loss,
            name_ar: None,
            name_en: None,
            sector: None,
            current_price: None,
            analysis: None,
            created_at: None,
        }
    }
}
