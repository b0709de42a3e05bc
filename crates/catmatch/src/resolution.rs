//! Resolution requests and results.

use std::fmt;

use catmatch_attributes::MappingReport;
use catmatch_core::{CategoryId, MappedAttribute, PriceRange, RawAttributes};
use catmatch_pricing::PricingOutcome;
use catmatch_taxonomy::{CategoryMatch, CategoryQuery, MatchStrategy, SchemaAddress};
use serde::{Deserialize, Serialize};

/// Everything known about one item before resolution.
///
/// Deserializes from the camelCase JSON an upstream analysis step emits:
///
/// ```
/// use catmatch::ResolutionRequest;
///
/// let request: ResolutionRequest = serde_json::from_str(r#"{
///     "suggestedPath": "Auto-onderdelen > BMW-onderdelen",
///     "attributes": {"merk": "BMW"},
///     "estimatedPrice": 120,
///     "priceRange": {"min": 90, "max": 150}
/// }"#).unwrap();
///
/// assert_eq!(request.candidate_id, None);
/// assert_eq!(request.estimated_price, Some(120));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolutionRequest {
    /// Free-text category path, typically LLM output.
    pub suggested_path: Option<String>,

    /// Category id from an external similarity search.
    pub candidate_id: Option<CategoryId>,

    pub attributes: RawAttributes,

    /// Price estimate in whole euros.
    pub estimated_price: Option<i64>,

    pub price_range: Option<PriceRange>,
}

impl ResolutionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.suggested_path = Some(path.into());
        self
    }

    pub fn with_candidate(mut self, id: CategoryId) -> Self {
        self.candidate_id = Some(id);
        self
    }

    pub fn with_attributes(mut self, attributes: impl Into<RawAttributes>) -> Self {
        self.attributes = attributes.into();
        self
    }

    pub fn with_estimate(mut self, price: i64) -> Self {
        self.estimated_price = Some(price);
        self
    }

    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.price_range = Some(PriceRange::new(min, max));
        self
    }

    /// The category part of the request.
    pub fn query(&self) -> CategoryQuery {
        CategoryQuery {
            suggested_path: self.suggested_path.clone(),
            candidate_id: self.candidate_id,
        }
    }
}

/// Whether the resolved category carries an attribute schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SchemaStatus {
    /// Depth-2 category; its schema was fetched from `address`.
    Applicable {
        address: SchemaAddress,
        attribute_count: usize,
    },

    /// Category at a depth that carries no attributes.
    NotApplicable { depth: usize },

    /// No category was resolved.
    NoCategory,
}

impl SchemaStatus {
    pub fn is_applicable(&self) -> bool {
        matches!(self, SchemaStatus::Applicable { .. })
    }
}

/// Something that prevents a listing from becoming ready to publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Blocker {
    NoCategory,
    AttributesNotSupported { category_id: CategoryId, depth: usize },
    MissingRequired { keys: Vec<String> },
    MissingPrice,
}

impl fmt::Display for Blocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Blocker::NoCategory => f.write_str("no category resolved"),
            Blocker::AttributesNotSupported { category_id, depth } => write!(
                f,
                "category {category_id} is at depth {depth} and accepts no attributes"
            ),
            Blocker::MissingRequired { keys } => {
                write!(f, "missing required attributes: {}", keys.join(", "))
            }
            Blocker::MissingPrice => f.write_str("no asking price"),
        }
    }
}

/// Outcome of [`Engine::resolve`](crate::Engine::resolve).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Resolved category; [`MatchStrategy::Fallback`] marks the configured
    /// default.
    pub category: Option<CategoryMatch>,

    pub schema: SchemaStatus,

    /// Schema-valid attributes, at most one per key.
    pub attributes: Vec<MappedAttribute>,

    /// Attributes left out of `attributes`, with reasons.
    pub report: MappingReport,

    /// Required schema keys absent from `attributes`, in schema order.
    pub missing_required: Vec<String>,

    pub pricing: PricingOutcome,
}

impl Resolution {
    pub fn category_id(&self) -> Option<CategoryId> {
        self.category.as_ref().map(|hit| hit.category.id)
    }

    pub fn is_fallback(&self) -> bool {
        self.category
            .as_ref()
            .is_some_and(|hit| hit.strategy == MatchStrategy::Fallback)
    }

    /// Everything standing between this resolution and publication.
    pub fn blockers(&self) -> Vec<Blocker> {
        let mut blockers = Vec::new();

        match (&self.category, self.schema) {
            (None, _) | (_, SchemaStatus::NoCategory) => blockers.push(Blocker::NoCategory),
            (Some(hit), SchemaStatus::NotApplicable { depth }) => {
                blockers.push(Blocker::AttributesNotSupported {
                    category_id: hit.category.id,
                    depth,
                })
            }
            (Some(_), SchemaStatus::Applicable { .. }) => {}
        }

        if !self.missing_required.is_empty() {
            blockers.push(Blocker::MissingRequired {
                keys: self.missing_required.clone(),
            });
        }

        if !self.pricing.model.is_complete() {
            blockers.push(Blocker::MissingPrice);
        }

        blockers
    }

    pub fn is_publishable(&self) -> bool {
        self.blockers().is_empty()
    }
}
