//! Keyword heuristic for the pricing model shape.

use catmatch_config::PricingConfig;
use catmatch_core::PricingKind;
use serde::{Deserialize, Serialize};

/// Outcome of scoring a category text against the keyword sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSignal {
    /// Net score; positive suggests bidding.
    pub score: i32,

    /// Bidding keywords found in the text.
    pub bidding_matches: Vec<String>,

    /// Fixed-price keywords found in the text.
    pub fixed_matches: Vec<String>,
}

impl PricingSignal {
    /// Suggested model shape, before any asking-price constraint.
    pub fn suggested_kind(&self) -> PricingKind {
        if self.score > 0 {
            PricingKind::Bidding
        } else {
            PricingKind::Fixed
        }
    }

    /// All matched keywords, bidding first.
    pub fn matched_keywords(&self) -> Vec<String> {
        self.bidding_matches
            .iter()
            .chain(&self.fixed_matches)
            .cloned()
            .collect()
    }
}

/// Scores `text` (a category path or name) against the configured keywords.
///
/// Matching is a case-insensitive substring test, so `telefoon` also matches
/// `Mobiele telefoons`. Each keyword counts at most once. The score saturates
/// at the `i32` bounds.
pub fn analyze_category(text: &str, config: &PricingConfig) -> PricingSignal {
    let haystack = text.to_lowercase();
    let found = |keywords: &[String]| -> Vec<String> {
        keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty() && haystack.contains(k.as_str()))
            .collect()
    };

    let bidding_matches = found(&config.bidding_keywords);
    let fixed_matches = found(&config.fixed_keywords);
    let score = weighted(bidding_matches.len(), config.bidding_weight)
        .saturating_sub(weighted(fixed_matches.len(), config.fixed_penalty));

    PricingSignal {
        score,
        bidding_matches,
        fixed_matches,
    }
}

fn weighted(count: usize, weight: i32) -> i32 {
    i32::try_from(count)
        .unwrap_or(i32::MAX)
        .saturating_mul(weight)
}
