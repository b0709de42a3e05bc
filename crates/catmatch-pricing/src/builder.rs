//! Price sanitization and model construction.

use catmatch_config::PricingConfig;
use catmatch_core::{PriceModel, PriceRange, PricingKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::analyze_category;

/// Result of [`build_price_model`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOutcome {
    pub sanitized_estimate: Option<i64>,
    pub sanitized_range: Option<PriceRange>,
    pub model: PriceModel,

    /// Net keyword score behind the model choice.
    pub bidding_score: i32,

    pub matched_keywords: Vec<String>,
}

/// Clamps a price into `[min_price, max_price]`.
///
/// Inverted bounds are taken in ascending order.
pub fn clamp_price(price: i64, config: &PricingConfig) -> i64 {
    let low = config.min_price.min(config.max_price);
    let high = config.min_price.max(config.max_price);
    price.clamp(low, high)
}

/// Clamps both bounds and orders them.
pub fn sanitize_range(range: PriceRange, config: &PricingConfig) -> PriceRange {
    let a = clamp_price(range.min, config);
    let b = clamp_price(range.max, config);
    PriceRange::new(a.min(b), a.max(b))
}

/// Opening bid for an auction with the given asking price.
///
/// `round(asking * ratio)`, at least 1 and at most `asking - 1`. Returns `None`
/// when the asking price leaves no room for a bid below it.
pub fn minimal_bid(asking_price: i64, ratio: f64) -> Option<i64> {
    if asking_price < 2 {
        return None;
    }
    let bid = (asking_price as f64 * ratio).round() as i64;
    Some(bid.clamp(1, asking_price - 1))
}

/// Sanitizes an LLM price estimate and selects the pricing model.
///
/// The asking price is the sanitized estimate, or 0 when no estimate was
/// given; a zero asking price marks the model incomplete. A bidding
/// suggestion without room for a minimal bid falls back to a fixed price.
pub fn build_price_model(
    estimate: Option<i64>,
    range: Option<PriceRange>,
    category_text: &str,
    config: &PricingConfig,
) -> PricingOutcome {
    let sanitized_estimate = estimate.map(|e| clamp_price(e, config));
    let sanitized_range = range.map(|r| sanitize_range(r, config));
    let asking_price = sanitized_estimate.unwrap_or(0);

    let signal = analyze_category(category_text, config);
    let model = match signal.suggested_kind() {
        PricingKind::Bidding => match minimal_bid(asking_price, config.bid_ratio) {
            Some(bid) => PriceModel::bidding(asking_price, bid),
            None => PriceModel::fixed(asking_price),
        },
        PricingKind::Fixed => PriceModel::fixed(asking_price),
    };

    debug!(
        event = "pricing_model_selected",
        model = %model.kind,
        bidding_score = signal.score,
        asking_price = model.asking_price,
    );

    PricingOutcome {
        sanitized_estimate,
        sanitized_range,
        model,
        bidding_score: signal.score,
        matched_keywords: signal.matched_keywords(),
    }
}
