//! The resolution engine.

use std::sync::Arc;
use std::time::Instant;

use catmatch_attributes::{map_attributes, missing_required};
use catmatch_config::EngineConfig;
use catmatch_core::{AttributeSpec, FlatCategory, Result};
use catmatch_pricing::build_price_model;
use catmatch_taxonomy::{
    leaf_categories, locate_schema, CategoryMatch, CategoryQuery, CategoryStrategy, FlatTaxonomy,
    LeafCategory, MatchStrategy, SchemaError, SchemaSource, TaxonomyDocument,
};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::builder::EngineBuilder;
use crate::resolution::{Resolution, ResolutionRequest, SchemaStatus};

/// Resolves items against one taxonomy snapshot.
///
/// Holds only immutable, shared state. Cloning is cheap and a single engine
/// can serve requests from many threads.
#[derive(Clone)]
pub struct Engine {
    pub(crate) taxonomy: Arc<FlatTaxonomy>,
    pub(crate) config: Arc<EngineConfig>,
    pub(crate) source: Arc<dyn SchemaSource>,
    pub(crate) strategy: Arc<dyn CategoryStrategy>,
}

impl Engine {
    pub fn builder(taxonomy: FlatTaxonomy) -> EngineBuilder {
        EngineBuilder::new(taxonomy)
    }

    /// Builds an engine over a decoded taxonomy file, serving the schemas it
    /// embeds.
    pub fn from_document(document: TaxonomyDocument, config: EngineConfig) -> Result<Self> {
        let taxonomy = document.taxonomy();
        Self::builder(taxonomy)
            .with_config(config)
            .with_schema_source(document.schemas)
            .build()
    }

    pub fn taxonomy(&self) -> &FlatTaxonomy {
        &self.taxonomy
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Attribute-bearing categories, sorted by path.
    pub fn leaf_categories(&self) -> Vec<LeafCategory> {
        leaf_categories(&self.taxonomy)
    }

    /// Runs one full resolution.
    ///
    /// Unmatched categories, inapplicable schemas and dropped attributes are
    /// reported on the returned [`Resolution`].
    ///
    /// # Errors
    ///
    /// Fails only when the schema source fails or the taxonomy is missing
    /// the parent of a depth-2 category.
    pub fn resolve(&self, request: &ResolutionRequest) -> Result<Resolution> {
        let category = self.match_category(&request.query());

        let (schema, schema_status) = match &category {
            Some(hit) => self.load_schema(&hit.category)?,
            None => (Vec::new(), SchemaStatus::NoCategory),
        };

        let mapping = map_attributes(&request.attributes, &schema, &self.config.matching);
        let missing = missing_required(&mapping.attributes, &schema);

        let category_text = category
            .as_ref()
            .map(|hit| hit.category.path.as_str())
            .or(request.suggested_path.as_deref())
            .unwrap_or_default();
        let pricing = build_price_model(
            request.estimated_price,
            request.price_range,
            category_text,
            &self.config.pricing,
        );

        let resolution = Resolution {
            category,
            schema: schema_status,
            attributes: mapping.attributes,
            report: mapping.report,
            missing_required: missing,
            pricing,
        };

        info!(
            event = "resolution_complete",
            category_id = resolution.category_id(),
            mapped_count = resolution.attributes.len() as u64,
            dropped_count = resolution.report.dropped.len() as u64,
            missing_count = resolution.missing_required.len() as u64,
            publishable = resolution.is_publishable(),
        );

        Ok(resolution)
    }

    /// Resolves independent requests in parallel.
    ///
    /// Results are in request order; one failing request does not affect
    /// the others.
    pub fn resolve_batch(&self, requests: &[ResolutionRequest]) -> Vec<Result<Resolution>> {
        let start = Instant::now();
        info!(event = "batch_start", request_count = requests.len() as u64);

        let results: Vec<Result<Resolution>> =
            requests.par_iter().map(|r| self.resolve(r)).collect();

        let publishable = results
            .iter()
            .filter(|r| matches!(r, Ok(resolution) if resolution.is_publishable()))
            .count();
        info!(
            event = "batch_end",
            request_count = requests.len() as u64,
            publishable_count = publishable as u64,
            duration_ms = start.elapsed().as_millis() as u64,
        );

        results
    }

    fn match_category(&self, query: &CategoryQuery) -> Option<CategoryMatch> {
        let suggested = query.suggested_path.as_deref().unwrap_or_default();

        if let Some(hit) = self.strategy.resolve(query, &self.taxonomy) {
            debug!(
                event = "category_resolved",
                category_id = hit.category.id,
                path = %hit.category.path,
                strategy = %hit.strategy,
                score = hit.score,
            );
            return Some(hit);
        }

        let fallback = self
            .config
            .fallback
            .default_category_id
            .and_then(|id| self.taxonomy.get(id));
        match fallback {
            Some(category) => {
                warn!(
                    event = "category_fallback",
                    category_id = category.id,
                    suggested = suggested,
                );
                Some(CategoryMatch::new(category.clone(), 0.0, MatchStrategy::Fallback))
            }
            None => {
                info!(event = "category_unmatched", suggested = suggested);
                None
            }
        }
    }

    fn load_schema(&self, category: &FlatCategory) -> Result<(Vec<AttributeSpec>, SchemaStatus)> {
        match locate_schema(category.id, &self.taxonomy) {
            Ok(address) => {
                let schema = self.source.fetch(address).map_err(SchemaError::from)?;
                debug!(
                    event = "schema_fetched",
                    parent_id = address.parent_id,
                    category_id = address.category_id,
                    attribute_count = schema.len() as u64,
                );
                let status = SchemaStatus::Applicable {
                    address,
                    attribute_count: schema.len(),
                };
                Ok((schema, status))
            }
            Err(SchemaError::NotApplicable { depth, .. }) => {
                debug!(
                    event = "schema_not_applicable",
                    category_id = category.id,
                    depth = depth as u64,
                );
                Ok((Vec::new(), SchemaStatus::NotApplicable { depth }))
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("categories", &self.taxonomy.len())
            .field("strategy", &self.strategy.name())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests;
