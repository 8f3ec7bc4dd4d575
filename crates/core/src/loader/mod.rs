pub mod error;
pub mod http;

use crate::domain::recommendation::Recommendation;
use crate::loader::error::FetchError;

/// Where recommendations come from. One call is one attempt: no retries.
#[async_trait::async_trait]
pub trait RecommendationSource: Send + Sync {
    fn source_name(&self) -> &'static str;

    async fn fetch_recommendations(&self) -> Result<Vec<Recommendation>, FetchError>;
}
