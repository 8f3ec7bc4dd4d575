//! Plain-text rendering of the same view for terminals.

use crate::domain::recommendation::Recommendation;
use crate::render::{filter_label, format_confidence, format_price, locale, type_label};
use crate::state::{AppState, ListView};
use crate::stats::Stats;
use std::fmt::Write;

pub fn stats_text(stats: &Stats) -> String {
    format!(
        "{}: {}  |  {}: {}  |  {}: {}  |  {}: {}",
        locale::STAT_TOTAL,
        stats.total,
        locale::STAT_BUY,
        stats.buy_count,
        locale::STAT_SELL,
        stats.sell_count,
        locale::STAT_AVG_CONFIDENCE,
        stats.avg_confidence_text(),
    )
}

pub fn card_text(rec: &Recommendation) -> String {
    let mut out = format!(
        "[{}] {}",
        type_label(rec.kind),
        rec.symbol
    );
    if let Some(name) = rec.name_ar.as_deref().or(rec.name_en.as_deref()) {
        let _ = write!(out, " ({name})");
    }
    let _ = write!(
        out,
        "  {}{}\n    {}: {}  {}: {}  {}: {}",
        locale::CONFIDENCE_PREFIX,
        format_confidence(rec.confidence),
        locale::ENTRY_PRICE,
        format_price(rec.entry_price),
        locale::TARGET_PRICE,
        format_price(rec.target_price),
        locale::STOP_LOSS,
        format_price(rec.stop_loss),
    );
    out
}

pub fn list_text(state: &AppState) -> String {
    match state.list_view() {
        ListView::Pending => locale::LOADING.to_string(),
        ListView::Error(message) => format!("{}\n{message}", locale::CONNECTION_ERROR),
        ListView::Records => {
            let visible = state.visible();
            if visible.is_empty() {
                return locale::NO_RESULTS.to_string();
            }
            visible
                .into_iter()
                .map(card_text)
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

pub fn screen_text(state: &AppState) -> String {
    format!(
        "{}\n{}\n[{}]\n\n{}\n",
        locale::PAGE_TITLE,
        stats_text(&state.stats()),
        filter_label(state.filter()),
        list_text(state),
    )
}
