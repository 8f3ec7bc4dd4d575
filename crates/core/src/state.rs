//! Application state and the reducer that every event source feeds.
//!
//! The reducer is pure: it never touches the network or any output surface.
//! Refreshes are sequenced with a monotonically increasing token, and only the
//! completion carrying the most recently issued token is applied. Older
//! completions are discarded whatever order they arrive in.

use crate::domain::filter::Filter;
use crate::domain::recommendation::Recommendation;
use crate::stats::Stats;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Loading,
    Loaded,
    Error,
}

/// What the list target currently shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum ListView {
    /// Nothing has completed yet.
    Pending,
    /// Filtered and sorted stored records (or the "no results" placeholder).
    Records,
    /// The last applied fetch failed; holds the error text.
    Error(String),
}

#[derive(Debug, Clone)]
pub enum Event {
    RefreshRequested,
    FetchSucceeded {
        token: RequestToken,
        recommendations: Vec<Recommendation>,
        received_at: DateTime<Utc>,
    },
    FetchFailed {
        token: RequestToken,
        message: String,
    },
    FilterSelected(Filter),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Caller must start a fetch tagged with this token.
    Fetch(RequestToken),
    Applied,
    /// A completion for a superseded request; state is unchanged.
    Discarded,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppState {
    recommendations: Vec<Recommendation>,
    filter: Filter,
    stats: Stats,
    list_view: ListView,
    phase: Phase,
    latest_token: RequestToken,
    last_updated: Option<DateTime<Utc>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            recommendations: Vec::new(),
            filter: Filter::All,
            stats: Stats::default(),
            list_view: ListView::Pending,
            phase: Phase::Loading,
            latest_token: RequestToken(0),
            last_updated: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn list_view(&self) -> &ListView {
        &self.list_view
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn latest_token(&self) -> RequestToken {
        self.latest_token
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Stored records matching the current filter, highest confidence first.
    pub fn visible(&self) -> Vec<&Recommendation> {
        filtered_sorted(&self.recommendations, self.filter)
    }

    pub fn apply(&mut self, event: Event) -> Outcome {
        match event {
            Event::RefreshRequested => {
                self.latest_token = RequestToken(self.latest_token.0 + 1);
                self.phase = Phase::Loading;
                Outcome::Fetch(self.latest_token)
            }
            Event::FetchSucceeded {
                token,
                recommendations,
                received_at,
            } => {
                if token != self.latest_token {
                    return Outcome::Discarded;
                }
                self.stats = Stats::compute(&recommendations);
                self.recommendations = recommendations;
                self.list_view = ListView::Records;
                self.phase = Phase::Loaded;
                self.last_updated = Some(received_at);
                Outcome::Applied
            }
            Event::FetchFailed { token, message } => {
                if token != self.latest_token {
                    return Outcome::Discarded;
                }
                // Stored records and stats keep their previous values.
                self.list_view = ListView::Error(message);
                self.phase = Phase::Error;
                Outcome::Applied
            }
            Event::FilterSelected(filter) => {
                self.filter = filter;
                self.list_view = ListView::Records;
                Outcome::Applied
            }
        }
    }
}

/// Recomputed from the full sequence on every call. The sort is stable, so
/// equal confidences keep their stored order.
pub fn filtered_sorted(recs: &[Recommendation], filter: Filter) -> Vec<&Recommendation> {
    let mut out: Vec<&Recommendation> = recs.iter().filter(|r| filter.matches(r)).collect();
    out.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::SignalType;
    use chrono::TimeZone;

    fn rec(symbol: &str, kind: SignalType, confidence: f64) -> Recommendation {
        Recommendation::new(symbol, kind, confidence, 10.0, 12.0, 9.0)
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 27, 10, 0, 0).unwrap()
    }

    fn start(state: &mut AppState) -> RequestToken {
        match state.apply(Event::RefreshRequested) {
            Outcome::Fetch(token) => token,
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    fn succeed(state: &mut AppState, token: RequestToken, recs: Vec<Recommendation>) -> Outcome {
        state.apply(Event::FetchSucceeded {
            token,
            recommendations: recs,
            received_at: at(),
        })
    }

    #[test]
    fn starts_loading_with_nothing_stored() {
        let state = AppState::new();
        assert_eq!(state.phase(), Phase::Loading);
        assert_eq!(state.list_view(), &ListView::Pending);
        assert!(state.recommendations().is_empty());
        assert_eq!(state.filter(), Filter::All);
    }

    #[test]
    fn success_replaces_list_and_stats() {
        let mut state = AppState::new();
        let t = start(&mut state);
        let recs = vec![rec("TASI", SignalType::Buy, 82.3)];
        assert_eq!(succeed(&mut state, t, recs.clone()), Outcome::Applied);

        assert_eq!(state.phase(), Phase::Loaded);
        assert_eq!(state.recommendations(), recs.as_slice());
        assert_eq!(state.stats().total, 1);
        assert_eq!(state.last_updated(), Some(at()));
    }

    #[test]
    fn failure_keeps_previous_records_and_stats() {
        let mut state = AppState::new();
        let t1 = start(&mut state);
        succeed(&mut state, t1, vec![rec("A", SignalType::Sell, 60.0)]);
        let before = state.stats();

        let t2 = start(&mut state);
        assert_eq!(state.phase(), Phase::Loading);
        state.apply(Event::FetchFailed {
            token: t2,
            message: "HTTP 500".to_string(),
        });

        assert_eq!(state.phase(), Phase::Error);
        assert_eq!(state.list_view(), &ListView::Error("HTTP 500".to_string()));
        assert_eq!(state.stats(), before);
        assert_eq!(state.recommendations().len(), 1);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = AppState::new();
        let t1 = start(&mut state);
        let t2 = start(&mut state);
        assert!(t2 > t1);

        assert_eq!(
            succeed(&mut state, t2, vec![rec("NEW", SignalType::Buy, 70.0)]),
            Outcome::Applied
        );
        assert_eq!(
            succeed(&mut state, t1, vec![rec("OLD", SignalType::Buy, 90.0)]),
            Outcome::Discarded
        );
        assert_eq!(
            state.apply(Event::FetchFailed {
                token: t1,
                message: "late".to_string()
            }),
            Outcome::Discarded
        );

        assert_eq!(state.recommendations()[0].symbol, "NEW");
        assert_eq!(state.phase(), Phase::Loaded);
    }

    #[test]
    fn filter_selection_rerenders_without_fetch() {
        let mut state = AppState::new();
        let t = start(&mut state);
        succeed(
            &mut state,
            t,
            vec![
                rec("B", SignalType::Buy, 50.0),
                rec("S", SignalType::Sell, 60.0),
            ],
        );

        assert_eq!(
            state.apply(Event::FilterSelected(Filter::Sell)),
            Outcome::Applied
        );
        assert_eq!(state.latest_token(), t);
        let visible: Vec<_> = state.visible().iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(visible, vec!["S"]);

        state.apply(Event::FilterSelected(Filter::Buy));
        state.apply(Event::FilterSelected(Filter::All));
        assert_eq!(state.filter(), Filter::All);
        assert_eq!(state.visible().len(), 2);
    }

    #[test]
    fn filter_selection_replaces_error_view_with_stored_records() {
        let mut state = AppState::new();
        let t = start(&mut state);
        state.apply(Event::FetchFailed {
            token: t,
            message: "down".to_string(),
        });
        state.apply(Event::FilterSelected(Filter::Buy));
        assert_eq!(state.list_view(), &ListView::Records);
    }

    #[test]
    fn filters_select_matching_kinds() {
        let recs = vec![
            rec("B1", SignalType::Buy, 10.0),
            rec("S1", SignalType::Sell, 20.0),
            rec("B2", SignalType::Buy, 30.0),
        ];
        assert!(filtered_sorted(&recs, Filter::Buy)
            .iter()
            .all(|r| r.kind == SignalType::Buy));
        assert!(filtered_sorted(&recs, Filter::Sell)
            .iter()
            .all(|r| r.kind == SignalType::Sell));
        assert_eq!(filtered_sorted(&recs, Filter::All).len(), 3);
    }

    #[test]
    fn sorted_by_confidence_descending_and_stable() {
        let recs = vec![
            rec("LOW", SignalType::Buy, 40.0),
            rec("HIGH", SignalType::Buy, 90.0),
            rec("TIE_A", SignalType::Sell, 60.0),
            rec("TIE_B", SignalType::Buy, 60.0),
        ];
        let order: Vec<_> = filtered_sorted(&recs, Filter::All)
            .iter()
            .map(|r| r.symbol.as_str())
            .collect();
        assert_eq!(order, vec!["HIGH", "TIE_A", "TIE_B", "LOW"]);
    }
}
