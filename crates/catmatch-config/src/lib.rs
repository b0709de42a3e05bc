//! Configuration system for catmatch.
//!
//! Every tunable of the resolution engine lives here: fuzzy-match cutoffs,
//! price bounds, the bidding ratio, pricing keyword sets and the fallback
//! category. Nothing in the matching code carries its own literal.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use catmatch_config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     [matching]
//!     path_cutoff = 0.7
//!
//!     [pricing]
//!     bid_ratio = 0.05
//!
//!     [fallback]
//!     default_category_id = 1953
//! "#).unwrap();
//!
//! assert_eq!(config.matching.path_cutoff, 0.7);
//! assert_eq!(config.matching.enum_cutoff, 0.4);
//! assert_eq!(config.pricing.bid_ratio, 0.05);
//! assert_eq!(config.fallback.default_category_id, Some(1953));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use catmatch_config::EngineConfig;
//!
//! let config = EngineConfig::load("catmatch.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use catmatch_core::{CatmatchError, CategoryId, Matcher};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cutoff for category paths and attribute labels.
pub const DEFAULT_PATH_CUTOFF: f64 = 0.6;

/// Default cutoff for enum values; lower because option labels are short.
pub const DEFAULT_ENUM_CUTOFF: f64 = 0.4;

/// Lowest asking price the marketplace accepts.
pub const DEFAULT_MIN_PRICE: i64 = 1;

/// Highest asking price the marketplace accepts.
pub const DEFAULT_MAX_PRICE: i64 = 50_000;

/// Default minimal bid as a fraction of the asking price.
pub const DEFAULT_BID_RATIO: f64 = 0.10;

/// Largest accepted `bidding_weight` or `fixed_penalty`.
pub const MAX_KEYWORD_WEIGHT: i32 = 1_000;

/// Category terms that suggest auction-style pricing.
pub const DEFAULT_BIDDING_KEYWORDS: &[&str] = &[
    "antiek",
    "kunst",
    "verzamelen",
    "vintage",
    "klassiek",
    "zeldzaam",
    "uniek",
    "limited",
    "exclusief",
    "collector",
    "handgemaakt",
    "design",
    "kunstwerk",
    "sieraden",
    "munten",
    "postzegels",
    "boeken",
    "platen",
    "vinyl",
    "memorabilia",
];

/// Category terms that suggest a fixed price.
pub const DEFAULT_FIXED_KEYWORDS: &[&str] = &[
    "telefoon",
    "computer",
    "laptop",
    "tablet",
    "software",
    "kleding",
    "schoenen",
    "voeding",
    "tickets",
    "diensten",
    "verhuur",
    "baan",
    "stage",
    "cursus",
    "training",
];

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for CatmatchError {
    fn from(err: ConfigError) -> Self {
        CatmatchError::Config(err.to_string())
    }
}

/// Main engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Fuzzy matching cutoffs.
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Price bounds and pricing-model heuristic.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// What to do when no category matches.
    #[serde(default)]
    pub fallback: FallbackConfig,

    /// Taxonomy ingest settings.
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
}

impl EngineConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the injected fallback category.
    pub fn with_default_category(mut self, id: CategoryId) -> Self {
        self.fallback.default_category_id = Some(id);
        self
    }

    /// Sets the minimal-bid ratio.
    pub fn with_bid_ratio(mut self, ratio: f64) -> Self {
        self.pricing.bid_ratio = ratio;
        self
    }

    /// Sets the category path cutoff.
    pub fn with_path_cutoff(mut self, cutoff: f64) -> Self {
        self.matching.path_cutoff = cutoff;
        self
    }

    /// Enables case-insensitive matching.
    pub fn with_fold_case(mut self, fold_case: bool) -> Self {
        self.matching.fold_case = fold_case;
        self
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.matching.validate()?;
        self.pricing.validate()
    }
}

/// Fuzzy-match cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct MatchingConfig {
    /// Minimum ratio for a suggested path to match a category path.
    pub path_cutoff: f64,

    /// Minimum ratio for an AI attribute name to match a schema label.
    pub label_cutoff: f64,

    /// Minimum ratio for an AI value to match an enum option label.
    pub enum_cutoff: f64,

    /// Compare lowercased text.
    pub fold_case: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            path_cutoff: DEFAULT_PATH_CUTOFF,
            label_cutoff: DEFAULT_PATH_CUTOFF,
            enum_cutoff: DEFAULT_ENUM_CUTOFF,
            fold_case: false,
        }
    }
}

impl MatchingConfig {
    pub fn path_matcher(&self) -> Matcher {
        Matcher::new(self.path_cutoff).with_fold_case(self.fold_case)
    }

    pub fn label_matcher(&self) -> Matcher {
        Matcher::new(self.label_cutoff).with_fold_case(self.fold_case)
    }

    pub fn enum_matcher(&self) -> Matcher {
        Matcher::new(self.enum_cutoff).with_fold_case(self.fold_case)
    }

    /// Checks that every cutoff lies within `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, cutoff) in [
            ("path_cutoff", self.path_cutoff),
            ("label_cutoff", self.label_cutoff),
            ("enum_cutoff", self.enum_cutoff),
        ] {
            if !(0.0..=1.0).contains(&cutoff) {
                return Err(ConfigError::Invalid(format!(
                    "matching.{name} must be within [0, 1], got {cutoff}"
                )));
            }
        }
        Ok(())
    }
}

/// Price bounds and the fixed-versus-bidding heuristic.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PricingConfig {
    pub min_price: i64,
    pub max_price: i64,

    /// Minimal bid as a fraction of the asking price.
    pub bid_ratio: f64,

    /// Terms scoring towards bidding.
    pub bidding_keywords: Vec<String>,

    /// Terms scoring towards a fixed price.
    pub fixed_keywords: Vec<String>,

    /// Score added per bidding keyword found.
    pub bidding_weight: i32,

    /// Score subtracted per fixed keyword found.
    pub fixed_penalty: i32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            bid_ratio: DEFAULT_BID_RATIO,
            bidding_keywords: DEFAULT_BIDDING_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            fixed_keywords: DEFAULT_FIXED_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            bidding_weight: 1,
            fixed_penalty: 2,
        }
    }
}

impl PricingConfig {
    /// Checks the price bounds, the bid ratio and the keyword weights.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_price < 1 {
            return Err(ConfigError::Invalid(format!(
                "pricing.min_price must be at least 1, got {}",
                self.min_price
            )));
        }
        if self.min_price > self.max_price {
            return Err(ConfigError::Invalid(format!(
                "pricing.min_price ({}) exceeds pricing.max_price ({})",
                self.min_price, self.max_price
            )));
        }
        if !(self.bid_ratio > 0.0 && self.bid_ratio < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "pricing.bid_ratio must be within (0, 1), got {}",
                self.bid_ratio
            )));
        }
        for (name, weight) in [
            ("bidding_weight", self.bidding_weight),
            ("fixed_penalty", self.fixed_penalty),
        ] {
            if !(0..=MAX_KEYWORD_WEIGHT).contains(&weight) {
                return Err(ConfigError::Invalid(format!(
                    "pricing.{name} must be within [0, {MAX_KEYWORD_WEIGHT}], got {weight}"
                )));
            }
        }
        Ok(())
    }
}

/// Fallback behaviour when resolution finds nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FallbackConfig {
    /// Category substituted when every strategy returns no match.
    ///
    /// Left unset, an unmatched request stays unmatched.
    pub default_category_id: Option<CategoryId>,
}

/// Taxonomy ingest settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct TaxonomyConfig {
    /// Locale whose labels are read from ingest payloads.
    pub label_locale: String,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            label_locale: "nl-NL".to_string(),
        }
    }
}
