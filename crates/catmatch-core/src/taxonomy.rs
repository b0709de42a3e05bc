//! Taxonomy types.
//!
//! A taxonomy is owned by an external source and arrives as a tree of
//! [`CategoryNode`]s. Resolution works on the flattened projection, a list of
//! [`FlatCategory`] entries addressed by their full display path.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Externally assigned, stable category identifier.
pub type CategoryId = i64;

/// Separator between path segments in a [`FlatCategory::path`].
pub const PATH_SEPARATOR: &str = " > ";

/// Depth of the categories that carry an attribute schema.
pub const ATTRIBUTE_DEPTH: usize = 2;

/// A node of the nested taxonomy tree.
///
/// The engine never mutates nodes; the tree is a read-only snapshot of the
/// taxonomy source.
///
/// # Example
///
/// ```
/// use catmatch_core::CategoryNode;
///
/// let root = CategoryNode::new(1, "Auto-onderdelen")
///     .with_child(CategoryNode::new(11, "BMW-onderdelen"))
///     .with_child(CategoryNode::new(12, "Audi-onderdelen"));
///
/// assert_eq!(root.children.len(), 2);
/// assert_eq!(root.node_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    /// Stable id assigned by the taxonomy source.
    pub id: CategoryId,

    /// Localized display name.
    pub name: String,

    /// Ordered child categories.
    #[serde(default)]
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// Creates a node without children.
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Appends a child, keeping insertion order.
    pub fn with_child(mut self, child: CategoryNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several children, keeping their order.
    pub fn with_children(mut self, children: impl IntoIterator<Item = CategoryNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(CategoryNode::node_count)
            .sum::<usize>()
    }
}

/// One entry of a flattened taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlatCategory {
    pub id: CategoryId,

    /// Segments joined by [`PATH_SEPARATOR`], root first.
    pub path: String,

    /// Number of path segments.
    pub depth: usize,
}

impl FlatCategory {
    pub fn new(id: CategoryId, path: impl Into<String>, depth: usize) -> Self {
        Self {
            id,
            path: path.into(),
            depth,
        }
    }

    /// Path segments, root first.
    pub fn segments(&self) -> SmallVec<[&str; 4]> {
        split_path(&self.path)
    }

    /// The category's own display name (last segment).
    pub fn name(&self) -> &str {
        self.path
            .rsplit_once(PATH_SEPARATOR)
            .map_or(self.path.as_str(), |(_, last)| last)
    }

    /// Path of the direct parent, if this is not a top-level category.
    pub fn parent_path(&self) -> Option<&str> {
        self.path
            .rsplit_once(PATH_SEPARATOR)
            .map(|(parent, _)| parent)
    }

    /// Whether this category carries an attribute schema.
    pub fn is_attribute_bearing(&self) -> bool {
        self.depth == ATTRIBUTE_DEPTH
    }
}

/// Splits a display path into trimmed segments.
///
/// Splits on `>` rather than the full separator so that loosely formatted
/// input such as `"Auto's>Carrosserie"` is still understood.
pub fn split_path(path: &str) -> SmallVec<[&str; 4]> {
    path.split('>').map(str::trim).collect()
}
