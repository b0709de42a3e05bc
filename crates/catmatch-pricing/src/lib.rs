//! Pricing model builder for catmatch.
//!
//! Price estimates come from an LLM and are expected to be imprecise. They are
//! corrected in place, never rejected: values are clamped into the configured
//! bounds and an inverted range is swapped. The pricing model shape is chosen
//! by scoring the category text against two keyword sets.
//!
//! # Example
//!
//! ```
//! use catmatch_config::PricingConfig;
//! use catmatch_core::{PriceRange, PricingKind};
//! use catmatch_pricing::build_price_model;
//!
//! let outcome = build_price_model(
//!     Some(60_000),
//!     Some(PriceRange::new(200, 100)),
//!     "Antiek en Kunst > Schilderijen",
//!     &PricingConfig::default(),
//! );
//!
//! assert_eq!(outcome.sanitized_estimate, Some(50_000));
//! assert_eq!(outcome.sanitized_range, Some(PriceRange::new(100, 200)));
//! assert_eq!(outcome.model.kind, PricingKind::Bidding);
//! assert_eq!(outcome.model.minimal_bid, Some(5_000));
//! ```

pub mod analysis;
pub mod builder;

pub use analysis::{analyze_category, PricingSignal};
pub use builder::{build_price_model, clamp_price, minimal_bid, sanitize_range, PricingOutcome};
