use crate::domain::recommendation::{Recommendation, SignalType};
use serde::Serialize;

/// Aggregates shown in the four stat targets of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub buy_count: usize,
    pub sell_count: usize,
    /// Mean confidence rounded to one decimal; 0 for an empty list.
    pub avg_confidence: f64,
}

impl Stats {
    pub fn compute(recs: &[Recommendation]) -> Self {
        let total = recs.len();
        let buy_count = recs.iter().filter(|r| r.kind == SignalType::Buy).count();
        let sell_count = recs.iter().filter(|r| r.kind == SignalType::Sell).count();

        let avg_confidence = if total > 0 {
            let sum: f64 = recs.iter().map(|r| r.confidence).sum();
            round_one_decimal(sum / total as f64)
        } else {
            0.0
        };

        Self {
            total,
            buy_count,
            sell_count,
            avg_confidence,
        }
    }

    /// Text for `avgConfidence`. The empty list shows a bare `0%`.
    pub fn avg_confidence_text(&self) -> String {
        if self.total == 0 {
            "0%".to_string()
        } else {
            crate::render::format_confidence(self.avg_confidence)
        }
    }
}

fn round_one_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(kind: SignalType, confidence: f64) -> Recommendation {
        Recommendation::new("X", kind, confidence, 10.0, 11.0, 9.0)
    }

    #[test]
    fn empty_list_has_zero_average() {
        let s = Stats::compute(&[]);
        assert_eq!(s, Stats::default());
        assert_eq!(s.avg_confidence_text(), "0%");
    }

    #[test]
    fn buy_and_sell_add_up_to_total() {
        let recs = vec![
            rec(SignalType::Buy, 60.0),
            rec(SignalType::Sell, 70.0),
            rec(SignalType::Buy, 80.0),
        ];
        let s = Stats::compute(&recs);
        assert_eq!(s.total, 3);
        assert_eq!(s.buy_count, 2);
        assert_eq!(s.sell_count, 1);
        assert_eq!(s.total, s.buy_count + s.sell_count);
    }

    #[test]
    fn average_is_rounded_to_one_decimal() {
        let recs = vec![
            rec(SignalType::Buy, 70.0),
            rec(SignalType::Sell, 70.1),
            rec(SignalType::Buy, 70.15),
        ];
        let s = Stats::compute(&recs);
        assert_eq!(s.avg_confidence, 70.1);
        assert_eq!(s.avg_confidence_text(), "70.1%");
    }

    #[test]
    fn other_kinds_count_only_in_total() {
        let recs = vec![rec(SignalType::Other, 40.0), rec(SignalType::Buy, 60.0)];
        let s = Stats::compute(&recs);
        assert_eq!(s.total, 2);
        assert_eq!(s.buy_count, 1);
        assert_eq!(s.sell_count, 0);
        assert_eq!(s.avg_confidence, 50.0);
    }

    #[test]
    fn single_record_scenario() {
        let s = Stats::compute(&[rec(SignalType::Buy, 82.3)]);
        assert_eq!((s.total, s.buy_count, s.sell_count), (1, 1, 0));
        assert_eq!(s.avg_confidence_text(), "82.3%");
    }
}
