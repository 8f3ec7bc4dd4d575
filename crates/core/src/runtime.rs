use crate::domain::filter::Filter;
use crate::loader::RecommendationSource;
use crate::state::{AppState, Event, Outcome};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Shared dashboard: the state behind a lock plus the source it refreshes from.
///
/// The reducer always runs under the write lock; the network call never does,
/// so readers keep rendering the last stored data while a fetch is in flight.
#[derive(Clone)]
pub struct Dashboard {
    state: Arc<RwLock<AppState>>,
    source: Arc<dyn RecommendationSource>,
}

impl Dashboard {
    pub fn new(source: Arc<dyn RecommendationSource>) -> Self {
        Self {
            state: Arc::new(RwLock::new(AppState::new())),
            source,
        }
    }

    pub async fn dispatch(&self, event: Event) -> Outcome {
        self.state.write().await.apply(event)
    }

    pub async fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&*self.state.read().await)
    }

    pub async fn snapshot(&self) -> AppState {
        self.state.read().await.clone()
    }

    pub async fn select_filter(&self, filter: Filter) {
        self.dispatch(Event::FilterSelected(filter)).await;
        tracing::debug!(%filter, "filter selected");
    }

    /// One refresh: issue a token, fetch without holding the lock, then apply
    /// the completion. Returns how the completion was handled.
    pub async fn refresh(&self) -> Outcome {
        let token = match self.dispatch(Event::RefreshRequested).await {
            Outcome::Fetch(token) => token,
            other => return other,
        };
        tracing::debug!(
            token = token.0,
            source = self.source.source_name(),
            "refresh started"
        );

        let event = match self.source.fetch_recommendations().await {
            Ok(recommendations) => {
                tracing::info!(
                    token = token.0,
                    count = recommendations.len(),
                    "recommendations fetched"
                );
                Event::FetchSucceeded {
                    token,
                    recommendations,
                    received_at: Utc::now(),
                }
            }
            Err(err) => {
                tracing::error!(
                    token = token.0,
                    stage = err.stage,
                    error = %err,
                    "recommendations fetch failed"
                );
                Event::FetchFailed {
                    token,
                    message: err.to_string(),
                }
            }
        };

        let outcome = self.dispatch(event).await;
        if outcome == Outcome::Discarded {
            tracing::warn!(token = token.0, "discarded result of superseded refresh");
        }
        outcome
    }

    pub fn spawn_refresh(&self) -> JoinHandle<Outcome> {
        let this = self.clone();
        tokio::spawn(async move { this.refresh().await })
    }

    /// Refreshes immediately and then every `period`, forever. Ticks never wait
    /// for an outstanding fetch and keep going after errors.
    pub async fn run_periodic(self, period: Duration) {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            self.spawn_refresh();
        }
    }
}
