//! Builder for [`Engine`].

use std::sync::Arc;

use catmatch_config::EngineConfig;
use catmatch_core::{CatmatchError, Result};
use catmatch_taxonomy::{
    ById, CategoryStrategy, FirstMatch, FlatTaxonomy, FuzzyPath, SchemaSource, StaticSchemaSource,
};

use crate::engine::Engine;

/// Builder for creating an [`Engine`] with configuration.
///
/// Without a schema source every category resolves to an empty schema.
/// Without a strategy the engine tries the candidate id, then the suggested
/// path with the configured path cutoff.
pub struct EngineBuilder {
    taxonomy: FlatTaxonomy,
    config: EngineConfig,
    source: Option<Arc<dyn SchemaSource>>,
    strategy: Option<Arc<dyn CategoryStrategy>>,
}

impl EngineBuilder {
    /// Creates a new builder over the given taxonomy snapshot.
    pub fn new(taxonomy: FlatTaxonomy) -> Self {
        Self {
            taxonomy,
            config: EngineConfig::default(),
            source: None,
            strategy: None,
        }
    }

    /// Sets the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the provider of leaf-category schemas.
    pub fn with_schema_source(mut self, source: impl SchemaSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Replaces the category strategy.
    pub fn with_strategy(mut self, strategy: impl CategoryStrategy + 'static) -> Self {
        self.strategy = Some(Arc::new(strategy));
        self
    }

    /// Builds the engine.
    ///
    /// # Errors
    ///
    /// Returns [`CatmatchError::Config`] when the configuration fails
    /// validation or names a fallback category missing from the taxonomy.
    pub fn build(self) -> Result<Engine> {
        self.config.validate()?;

        if let Some(id) = self.config.fallback.default_category_id {
            if self.taxonomy.get(id).is_none() {
                return Err(CatmatchError::Config(format!(
                    "fallback.default_category_id {id} is not in the taxonomy"
                )));
            }
        }

        #[cfg(feature = "console")]
        catmatch_console::init();

        let strategy = self.strategy.unwrap_or_else(|| {
            Arc::new(
                FirstMatch::new()
                    .then(ById)
                    .then(FuzzyPath::new(self.config.matching.path_matcher())),
            )
        });
        let source = self
            .source
            .unwrap_or_else(|| Arc::new(StaticSchemaSource::new()));

        Ok(Engine {
            taxonomy: Arc::new(self.taxonomy),
            config: Arc::new(self.config),
            source,
            strategy,
        })
    }
}
