//! Category resolution.
//!
//! Maps a suggested category onto exactly one entry of a flattened taxonomy.
//! Two independent strategies exist and compose through [`FirstMatch`]:
//!
//! - [`ById`] accepts a candidate id, typically from an external vector search
//! - [`FuzzyPath`] fuzzy-matches a free-text path against every category path
//!
//! Finding nothing is an ordinary outcome and is reported as `None`.

use std::borrow::Cow;
use std::fmt;

use catmatch_core::taxonomy::split_path;
use catmatch_core::{CategoryId, FlatCategory, Matcher, PATH_SEPARATOR};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// How a category was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Suggested path equals a category path.
    ExactPath,

    /// Suggested path cleared the fuzzy cutoff.
    FuzzyPath,

    /// Candidate id supplied by the caller exists in the taxonomy.
    CandidateId,

    /// No strategy matched; the configured default category was used.
    Fallback,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchStrategy::ExactPath => "exact_path",
            MatchStrategy::FuzzyPath => "fuzzy_path",
            MatchStrategy::CandidateId => "candidate_id",
            MatchStrategy::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// A resolved category together with how it was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub category: FlatCategory,

    /// Similarity ratio for path strategies, 1.0 for a candidate id and 0.0
    /// for the fallback category.
    pub score: f64,

    pub strategy: MatchStrategy,
}

impl CategoryMatch {
    pub fn new(category: FlatCategory, score: f64, strategy: MatchStrategy) -> Self {
        Self {
            category,
            score,
            strategy,
        }
    }
}

/// What a caller knows about an item's category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuery {
    /// Free-text path such as `"Auto-onderdelen > BMW-onderdelen"`.
    #[serde(default)]
    pub suggested_path: Option<String>,

    /// Category id proposed by an external similarity search.
    #[serde(default)]
    pub candidate_id: Option<CategoryId>,
}

impl CategoryQuery {
    pub fn path(path: impl Into<String>) -> Self {
        Self {
            suggested_path: Some(path.into()),
            candidate_id: None,
        }
    }

    pub fn candidate(id: CategoryId) -> Self {
        Self {
            suggested_path: None,
            candidate_id: Some(id),
        }
    }

    pub fn with_candidate(mut self, id: CategoryId) -> Self {
        self.candidate_id = Some(id);
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.suggested_path = Some(path.into());
        self
    }
}

/// A way of turning a [`CategoryQuery`] into a category.
///
/// Strategies are stateless with respect to the request and may be shared
/// across threads.
pub trait CategoryStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns the matching category, or `None` when this strategy has no answer.
    fn resolve(&self, query: &CategoryQuery, taxonomy: &[FlatCategory]) -> Option<CategoryMatch>;
}

/// Accepts the query's candidate id when the taxonomy contains it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ById;

impl CategoryStrategy for ById {
    fn name(&self) -> &'static str {
        "by_id"
    }

    fn resolve(&self, query: &CategoryQuery, taxonomy: &[FlatCategory]) -> Option<CategoryMatch> {
        resolve_candidate_id(query.candidate_id?, taxonomy)
    }
}

/// Fuzzy-matches the query's suggested path.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyPath {
    matcher: Matcher,
}

impl FuzzyPath {
    pub fn new(matcher: Matcher) -> Self {
        Self { matcher }
    }
}

impl CategoryStrategy for FuzzyPath {
    fn name(&self) -> &'static str {
        "fuzzy_path"
    }

    fn resolve(&self, query: &CategoryQuery, taxonomy: &[FlatCategory]) -> Option<CategoryMatch> {
        resolve_category(query.suggested_path.as_deref()?, taxonomy, &self.matcher)
    }
}

/// Tries strategies in order and returns the first answer.
///
/// # Example
///
/// ```
/// use catmatch_core::{FlatCategory, Matcher};
/// use catmatch_taxonomy::{ById, CategoryQuery, CategoryStrategy, FirstMatch, FuzzyPath, MatchStrategy};
///
/// let flat = vec![
///     FlatCategory::new(3, "Fietsen en Brommers", 1),
///     FlatCategory::new(31, "Fietsen en Brommers > Fietsen", 2),
/// ];
/// let strategy = FirstMatch::new()
///     .then(ById)
///     .then(FuzzyPath::new(Matcher::new(0.6)));
///
/// // Unknown candidate id: falls through to the path.
/// let query = CategoryQuery::path("Fietsen en Brommers > Fietsen").with_candidate(999);
/// let hit = strategy.resolve(&query, &flat).unwrap();
/// assert_eq!(hit.category.id, 31);
/// assert_eq!(hit.strategy, MatchStrategy::ExactPath);
/// ```
#[derive(Default)]
pub struct FirstMatch {
    strategies: Vec<Box<dyn CategoryStrategy>>,
}

impl FirstMatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a strategy to try after the existing ones.
    pub fn then(mut self, strategy: impl CategoryStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl CategoryStrategy for FirstMatch {
    fn name(&self) -> &'static str {
        "first_match"
    }

    fn resolve(&self, query: &CategoryQuery, taxonomy: &[FlatCategory]) -> Option<CategoryMatch> {
        self.strategies.iter().find_map(|strategy| {
            let hit = strategy.resolve(query, taxonomy);
            if hit.is_none() {
                debug!(event = "strategy_missed", strategy = strategy.name());
            }
            hit
        })
    }
}

impl fmt::Debug for FirstMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.strategies.iter().map(|s| s.name()))
            .finish()
    }
}

/// Returns the category with the given id, if present.
pub fn resolve_candidate_id(id: CategoryId, taxonomy: &[FlatCategory]) -> Option<CategoryMatch> {
    let category = taxonomy.iter().find(|c| c.id == id)?;
    debug!(event = "candidate_accepted", category_id = id);
    Some(CategoryMatch::new(
        category.clone(),
        1.0,
        MatchStrategy::CandidateId,
    ))
}

/// Collapses an over-specified path to its first and last segment.
///
/// Attribute-bearing categories sit two levels deep, so a suggestion like
/// `"A > B > C > D"` is matched as `"A > D"`. Segments are trimmed and
/// re-joined with the canonical separator; a single segment is only trimmed.
///
/// ```
/// use catmatch_taxonomy::simplify_path;
///
/// assert_eq!(simplify_path("Auto's > Onderdelen > Carrosserie > Specifiek"), "Auto's > Specifiek");
/// assert_eq!(simplify_path("Auto's>Carrosserie"), "Auto's > Carrosserie");
/// assert_eq!(simplify_path("  Auto's "), "Auto's");
/// ```
pub fn simplify_path(path: &str) -> Cow<'_, str> {
    let segments = split_path(path);
    match segments.as_slice() {
        [] => Cow::Borrowed(""),
        [only] => Cow::Borrowed(only),
        [first, .., last] => Cow::Owned(format!("{first}{PATH_SEPARATOR}{last}")),
    }
}

/// Resolves a free-text path to a single category.
///
/// 1. An exact hit on the path, or on its [`simplify_path`] form, wins
///    outright.
/// 2. Otherwise the simplified path is scored
///    against every category path. Categories at the simplified path's own
///    depth are considered first; only if none of them clears the cutoff are
///    all categories considered.
/// 3. The highest score at or above the matcher's cutoff wins, ties going to
///    the earliest category in taxonomy order.
///
/// The same-depth tier can return a lower score than some other category.
/// `"Auto-onderdelen > BMW > Specifieke onderdelen > Filters"` simplifies to
/// `"Auto-onderdelen > Filters"`, which scores 0.75 against the root
/// `"Auto-onderdelen"` and at most about 0.72 against its two-level children.
/// Scanning depth 2 first keeps such a query on an attribute-bearing category
/// instead of its bare root.
pub fn resolve_category(
    suggested_path: &str,
    taxonomy: &[FlatCategory],
    matcher: &Matcher,
) -> Option<CategoryMatch> {
    let suggested = suggested_path.trim();
    if suggested.is_empty() {
        return None;
    }

    let simplified = simplify_path(suggested);
    let exact = |path: &str| taxonomy.iter().find(|c| c.path == path);
    if let Some(category) = exact(suggested).or_else(|| exact(simplified.as_ref())) {
        debug!(event = "category_exact", category_id = category.id);
        return Some(CategoryMatch::new(
            category.clone(),
            1.0,
            MatchStrategy::ExactPath,
        ));
    }

    let depth = split_path(&simplified).len();
    debug!(
        event = "path_simplified",
        suggested = suggested,
        simplified = %simplified,
        depth = depth as u64,
    );

    let same_depth = best_candidate(&simplified, taxonomy, matcher, |c| c.depth == depth);
    let best = same_depth.or_else(|| best_candidate(&simplified, taxonomy, matcher, |_| true));

    match best {
        Some((category, score)) => {
            debug!(
                event = "category_fuzzy",
                category_id = category.id,
                score = score,
            );
            Some(CategoryMatch::new(
                category.clone(),
                score,
                MatchStrategy::FuzzyPath,
            ))
        }
        None => {
            debug!(event = "category_not_found", suggested = suggested);
            None
        }
    }
}

fn best_candidate<'t>(
    query: &str,
    taxonomy: &'t [FlatCategory],
    matcher: &Matcher,
    eligible: impl Fn(&FlatCategory) -> bool,
) -> Option<(&'t FlatCategory, f64)> {
    let candidates: Vec<&FlatCategory> = taxonomy.iter().filter(|c| eligible(c)).collect();
    let hit = matcher.best(query, candidates.iter().map(|c| c.path.as_str()))?;
    let category = candidates[hit.index];
    trace!(
        event = "candidate_scored",
        category_id = category.id,
        score = hit.score,
    );
    Some((category, hit.score))
}

#[cfg(test)]
mod tests;
