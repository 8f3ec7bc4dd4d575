use crate::domain::recommendation::{Recommendation, SignalType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The user-selected view over the stored recommendations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Buy,
    Sell,
}

impl Filter {
    /// Selector order on the page.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Buy, Filter::Sell];

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Buy => "buy",
            Filter::Sell => "sell",
        }
    }

    pub fn matches(self, rec: &Recommendation) -> bool {
        match self {
            Filter::All => true,
            Filter::Buy => rec.kind == SignalType::Buy,
            Filter::Sell => rec.kind == SignalType::Sell,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilter(pub String);

impl fmt::Display for UnknownFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown filter {:?} (expected all, buy or sell)", self.0)
    }
}

impl std::error::Error for UnknownFilter {}

impl FromStr for Filter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "buy" => Ok(Filter::Buy),
            "sell" => Ok(Filter::Sell),
            _ => Err(UnknownFilter(s.to_string())),
        }
    }
}
