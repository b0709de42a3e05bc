//! Taxonomy flattening.
//!
//! The flattened form lists every node depth-first in source order, each with
//! its full display path. It is what both category resolution and schema
//! lookup scan.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::ops::Deref;

use catmatch_core::{CategoryId, CategoryNode, FlatCategory, PATH_SEPARATOR};
use tracing::{debug, warn};

/// Flattens a forest of top-level categories, depth-first, in source order.
///
/// Every node appears exactly once; top-level nodes have depth 1.
///
/// # Example
///
/// ```
/// use catmatch_core::CategoryNode;
/// use catmatch_taxonomy::flatten;
///
/// let roots = vec![CategoryNode::new(1, "Auto-onderdelen")
///     .with_child(CategoryNode::new(11, "BMW-onderdelen"))];
///
/// let flat = flatten(&roots);
/// assert_eq!(flat[0].path, "Auto-onderdelen");
/// assert_eq!(flat[1].path, "Auto-onderdelen > BMW-onderdelen");
/// assert_eq!(flat[1].depth, 2);
/// ```
pub fn flatten(roots: &[CategoryNode]) -> Vec<FlatCategory> {
    let capacity = roots.iter().map(CategoryNode::node_count).sum();
    let mut out = Vec::with_capacity(capacity);
    for root in roots {
        flatten_into(root, None, 1, &mut out);
    }
    out
}

fn flatten_into(
    node: &CategoryNode,
    parent_path: Option<&str>,
    depth: usize,
    out: &mut Vec<FlatCategory>,
) {
    let name = node.name.trim();
    let path = match parent_path {
        Some(parent) => format!("{parent}{PATH_SEPARATOR}{name}"),
        None => name.to_string(),
    };
    out.push(FlatCategory::new(node.id, path.clone(), depth));

    for child in &node.children {
        flatten_into(child, Some(&path), depth + 1, out);
    }
}

/// A flattened taxonomy snapshot with id and path lookup.
///
/// Dereferences to `[FlatCategory]`, so every slice-based function in this
/// crate accepts it directly.
#[derive(Debug, Clone, Default)]
pub struct FlatTaxonomy {
    categories: Vec<FlatCategory>,
    by_id: HashMap<CategoryId, usize>,
    by_path: HashMap<String, usize>,
}

impl FlatTaxonomy {
    /// Flattens and indexes a forest of top-level categories.
    pub fn from_roots(roots: &[CategoryNode]) -> Self {
        Self::from_flat(flatten(roots))
    }

    /// Indexes an already flattened list.
    ///
    /// Should the source repeat an id or a path, lookups resolve to the first
    /// occurrence.
    pub fn from_flat(categories: Vec<FlatCategory>) -> Self {
        let mut by_id = HashMap::with_capacity(categories.len());
        let mut by_path = HashMap::with_capacity(categories.len());

        for (index, category) in categories.iter().enumerate() {
            match by_id.entry(category.id) {
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
                Entry::Occupied(_) => warn!(
                    event = "duplicate_category_id",
                    category_id = category.id,
                    path = %category.path,
                ),
            }
            by_path.entry(category.path.clone()).or_insert(index);
        }

        debug!(
            event = "taxonomy_flattened",
            category_count = categories.len() as u64,
        );

        Self {
            categories,
            by_id,
            by_path,
        }
    }

    /// Looks up a category by id.
    pub fn get(&self, id: CategoryId) -> Option<&FlatCategory> {
        self.by_id.get(&id).map(|&i| &self.categories[i])
    }

    /// Looks up a category by its exact path.
    pub fn get_by_path(&self, path: &str) -> Option<&FlatCategory> {
        self.by_path.get(path).map(|&i| &self.categories[i])
    }

    pub fn categories(&self) -> &[FlatCategory] {
        &self.categories
    }

    pub fn into_inner(self) -> Vec<FlatCategory> {
        self.categories
    }
}

impl Deref for FlatTaxonomy {
    type Target = [FlatCategory];

    fn deref(&self) -> &Self::Target {
        &self.categories
    }
}

impl From<Vec<FlatCategory>> for FlatTaxonomy {
    fn from(categories: Vec<FlatCategory>) -> Self {
        Self::from_flat(categories)
    }
}
