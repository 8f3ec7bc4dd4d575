//! Dashboard markup as a view tree. Element ids and classes are the page's
//! contract with its stylesheet and with anything scripting it.

use crate::domain::filter::Filter;
use crate::domain::recommendation::Recommendation;
use crate::render::node::{el, Element, Node};
use crate::render::{filter_label, format_confidence, format_price, locale, type_label};
use crate::state::{filtered_sorted, AppState, ListView};
use crate::stats::Stats;

pub const LIST_ID: &str = "recommendationsList";
pub const TOTAL_ID: &str = "totalRecommendations";
pub const BUY_COUNT_ID: &str = "buyCount";
pub const SELL_COUNT_ID: &str = "sellCount";
pub const AVG_CONFIDENCE_ID: &str = "avgConfidence";
pub const FILTER_CLASS: &str = "filter-btn";
pub const CARD_CLASS: &str = "recommendation-card";

const DETAILS_BASE: &str = "http://localhost/details/";

const STYLESHEET: &str = r#"
:root { --success: #10b981; --danger: #ef4444; --bg: #0f172a; --card: #1e293b; --text: #e2e8f0; }
body { font-family: system-ui, sans-serif; background: var(--bg); color: var(--text); margin: 0; padding: 1.5rem; }
.stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; margin-bottom: 1.5rem; }
.stat-card { background: var(--card); border-radius: 8px; padding: 1rem; }
.stat-value { font-size: 1.6rem; font-weight: 700; display: block; }
.filters { display: flex; gap: .5rem; margin-bottom: 1rem; }
.filters form { margin: 0; }
.filter-btn { background: var(--card); color: var(--text); border: 1px solid #334155; border-radius: 6px; padding: .4rem 1rem; cursor: pointer; }
.filter-btn.active { background: #3b82f6; border-color: #3b82f6; }
.recommendation-card { display: flex; gap: 1rem; align-items: center; background: var(--card); border-radius: 8px; padding: 1rem; margin-bottom: .75rem; }
.rec-badge { border-radius: 6px; padding: .3rem .8rem; font-weight: 700; }
.rec-badge.buy { background: var(--success); }
.rec-badge.sell { background: var(--danger); }
.rec-info { flex: 1; }
.rec-header { display: flex; gap: 1rem; align-items: baseline; }
.rec-symbol { font-size: 1.2rem; font-weight: 700; }
.rec-prices { display: flex; gap: 1.5rem; margin-top: .5rem; }
.price-label { font-size: .8rem; opacity: .7; }
.price-value.target { color: var(--success); }
.price-value.stop { color: var(--danger); }
.btn-primary { background: #3b82f6; color: #fff; border-radius: 6px; padding: .4rem 1rem; text-decoration: none; }
.loading { text-align: center; padding: 2rem; opacity: .8; }
.loading.error { color: var(--danger); opacity: 1; }
"#;

/// Relative link to the details placeholder, with the symbol percent-encoded
/// as a single path segment.
pub fn details_href(symbol: &str) -> String {
    let Ok(mut url) = url::Url::parse(DETAILS_BASE) else {
        return "/details/".to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(symbol);
    }
    url.path().to_string()
}

pub fn recommendation_card(rec: &Recommendation) -> Node {
    let kind = rec.kind.as_str();

    let mut header = el("div")
        .class("rec-header")
        .child(el("span").class("rec-symbol").text(rec.symbol.as_str()));
    if let Some(name) = rec.name_ar.as_deref().or(rec.name_en.as_deref()) {
        header = header.child(el("span").class("rec-name").text(name));
    }
    header = header.child(
        el("span")
            .class("rec-confidence")
            .text(format!("{}{}", locale::CONFIDENCE_PREFIX, format_confidence(rec.confidence))),
    );

    let prices = el("div")
        .class("rec-prices")
        .child(price_item(locale::ENTRY_PRICE, rec.entry_price, None))
        .child(price_item(locale::TARGET_PRICE, rec.target_price, Some("target")))
        .child(price_item(locale::STOP_LOSS, rec.stop_loss, Some("stop")));

    el("div")
        .class(format!("{CARD_CLASS} {kind}"))
        .attr("data-symbol", rec.symbol.as_str())
        .child(
            el("div")
                .class(format!("rec-badge {kind}"))
                .text(type_label(rec.kind)),
        )
        .child(el("div").class("rec-info").child(header).child(prices))
        .child(
            el("div").class("rec-actions").child(
                el("a")
                    .class("btn-primary")
                    .attr("href", details_href(&rec.symbol))
                    .text(locale::DETAILS),
            ),
        )
        .into()
}

fn price_item(label: &str, value: f64, tone: Option<&str>) -> Node {
    let value_class = match tone {
        Some(tone) => format!("price-value {tone}"),
        None => "price-value".to_string(),
    };
    el("div")
        .class("price-item")
        .child(el("div").class("price-label").text(label))
        .child(el("div").class(value_class).text(format_price(value)))
        .into()
}

fn placeholder(message: &str) -> Node {
    el("div").class("loading").text(message).into()
}

/// Inner content of the list target for a set of stored records.
pub fn records_content(recs: &[Recommendation], filter: Filter) -> Vec<Node> {
    let visible = filtered_sorted(recs, filter);
    if visible.is_empty() {
        return vec![placeholder(locale::NO_RESULTS)];
    }
    visible.into_iter().map(recommendation_card).collect()
}

pub fn error_content(message: &str) -> Node {
    el("div")
        .class("loading error")
        .text(locale::CONNECTION_ERROR)
        .child(el("br"))
        .child(el("small").text(message))
        .into()
}

/// Inner content of the list target for the current state.
pub fn list_content(state: &AppState) -> Vec<Node> {
    match state.list_view() {
        ListView::Pending => vec![placeholder(locale::LOADING)],
        ListView::Records => records_content(state.recommendations(), state.filter()),
        ListView::Error(message) => vec![error_content(message)],
    }
}

pub fn list_target(state: &AppState) -> Node {
    el("div")
        .id(LIST_ID)
        .class("recommendations-list")
        .children(list_content(state))
        .into()
}

fn stat_card(label: &str, id: &str, value: String) -> Node {
    el("div")
        .class("stat-card")
        .child(el("span").class("stat-value").id(id).text(value))
        .child(el("span").class("stat-label").text(label))
        .into()
}

pub fn stats_section(stats: &Stats) -> Node {
    el("section")
        .class("stats")
        .child(stat_card(locale::STAT_TOTAL, TOTAL_ID, stats.total.to_string()))
        .child(stat_card(locale::STAT_BUY, BUY_COUNT_ID, stats.buy_count.to_string()))
        .child(stat_card(locale::STAT_SELL, SELL_COUNT_ID, stats.sell_count.to_string()))
        .child(stat_card(
            locale::STAT_AVG_CONFIDENCE,
            AVG_CONFIDENCE_ID,
            stats.avg_confidence_text(),
        ))
        .into()
}

/// One selector per filter; exactly one carries `active`.
pub fn filter_bar(active: Filter) -> Node {
    let selectors = Filter::ALL.into_iter().map(|f| -> Node {
        let class = if f == active {
            format!("{FILTER_CLASS} active")
        } else {
            FILTER_CLASS.to_string()
        };
        el("form")
            .attr("method", "post")
            .attr("action", format!("/filter/{}", f.as_str()))
            .child(
                el("button")
                    .attr("type", "submit")
                    .class(class)
                    .attr("data-filter", f.as_str())
                    .text(filter_label(f)),
            )
            .into()
    });
    el("nav").class("filters").children(selectors).into()
}

fn refresh_control() -> Node {
    el("form")
        .attr("method", "post")
        .attr("action", "/refresh")
        .class("refresh")
        .child(
            el("button")
                .attr("type", "submit")
                .class("btn-primary")
                .text(locale::REFRESH),
        )
        .into()
}

fn document(title: &str, body: Element) -> Node {
    el("html")
        .attr("lang", locale::LANG)
        .attr("dir", locale::DIR)
        .child(
            el("head")
                .child(el("meta").attr("charset", "utf-8"))
                .child(
                    el("meta")
                        .attr("name", "viewport")
                        .attr("content", "width=device-width, initial-scale=1"),
                )
                .child(el("title").text(title))
                .child(el("style").child(Node::Static(STYLESHEET))),
        )
        .child(body)
        .into()
}

/// Serializes a full document with its doctype.
pub fn to_document_html(node: &Node) -> String {
    format!("<!DOCTYPE html>{}", node.to_html())
}

pub fn page(state: &AppState) -> Node {
    let mut header = el("header")
        .child(el("h1").text(locale::PAGE_TITLE))
        .child(refresh_control());
    if let Some(at) = state.last_updated() {
        header = header.child(
            el("time")
                .class("last-updated")
                .attr("datetime", at.to_rfc3339())
                .text(at.format("%Y-%m-%d %H:%M UTC").to_string()),
        );
    }

    let body = el("body")
        .child(header)
        .child(stats_section(&state.stats()))
        .child(filter_bar(state.filter()))
        .child(list_target(state));

    document(locale::PAGE_TITLE, body)
}

/// Placeholder notice for the details action. Nothing is fetched.
pub fn details_page(symbol: &str) -> Node {
    let body = el("body").child(
        el("div")
            .class("loading details")
            .child(el("h2").text(format!("{}: {symbol}", locale::DETAILS_TITLE)))
            .child(el("p").text(locale::DETAILS_COMING_SOON))
            .child(el("a").class("btn-primary").attr("href", "/").text(locale::BACK)),
    );
    document(locale::DETAILS_TITLE, body)
}
