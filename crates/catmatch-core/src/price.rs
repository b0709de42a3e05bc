//! Price model types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shape of a listing's price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PricingKind {
    /// Flat asking price.
    #[default]
    Fixed,

    /// Auction style: buyers bid, starting at a minimal bid.
    Bidding,
}

impl fmt::Display for PricingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingKind::Fixed => f.write_str("fixed"),
            PricingKind::Bidding => f.write_str("bidding"),
        }
    }
}

/// Estimated price range, in whole euros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

impl PriceRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

/// A listing's price model.
///
/// An `asking_price` of zero means no estimate was available; such a model is
/// incomplete and must not be published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceModel {
    #[serde(rename = "modelType")]
    pub kind: PricingKind,

    pub asking_price: i64,

    /// Only present for [`PricingKind::Bidding`]; always below `asking_price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimal_bid: Option<i64>,
}

impl PriceModel {
    pub fn fixed(asking_price: i64) -> Self {
        Self {
            kind: PricingKind::Fixed,
            asking_price,
            minimal_bid: None,
        }
    }

    pub fn bidding(asking_price: i64, minimal_bid: i64) -> Self {
        Self {
            kind: PricingKind::Bidding,
            asking_price,
            minimal_bid: Some(minimal_bid),
        }
    }

    /// Whether the model has a usable asking price.
    pub fn is_complete(&self) -> bool {
        self.asking_price > 0
    }
}
