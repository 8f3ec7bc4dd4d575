pub mod locale;
pub mod node;
pub mod terminal;
pub mod view;

pub use node::Node;

/// Fixed-point text with ties rounded away from zero, so `82.25` is `82.3`
/// and `48.125` is `48.13`. Plain `{:.N}` formatting rounds exact ties to even.
pub fn fixed(value: f64, decimals: u32) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    format!("{rounded:.prec$}", prec = decimals as usize)
}

/// `82.3%`
pub fn format_confidence(confidence: f64) -> String {
    format!("{}%", fixed(confidence, 1))
}

/// `50.00 ريال`
pub fn format_price(price: f64) -> String {
    format!("{} {}", fixed(price, 2), locale::CURRENCY)
}

pub fn type_label(kind: crate::domain::recommendation::SignalType) -> &'static str {
    use crate::domain::recommendation::SignalType;
    match kind {
        SignalType::Buy => locale::LABEL_BUY,
        SignalType::Sell => locale::LABEL_SELL,
        SignalType::Other => locale::LABEL_OTHER,
    }
}

pub fn filter_label(filter: crate::domain::filter::Filter) -> &'static str {
    use crate::domain::filter::Filter;
    match filter {
        Filter::All => locale::FILTER_ALL,
        Filter::Buy => locale::FILTER_BUY,
        Filter::Sell => locale::FILTER_SELL,
    }
}
