//! Listing of attribute-bearing categories for category pickers.

use catmatch_core::{CategoryId, FlatCategory, PATH_SEPARATOR};
use serde::{Deserialize, Serialize};

/// Separator used in [`LeafCategory::display_name`].
pub const DISPLAY_SEPARATOR: &str = " → ";

/// A depth-2 category as presented to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafCategory {
    pub id: CategoryId,
    pub path: String,
    pub display_name: String,
    pub level1: String,
    pub level2: String,
}

/// Every depth-2 category, sorted by path.
///
/// ```
/// use catmatch_core::FlatCategory;
/// use catmatch_taxonomy::leaf_categories;
///
/// let flat = vec![
///     FlatCategory::new(1, "Auto-onderdelen", 1),
///     FlatCategory::new(11, "Auto-onderdelen > BMW-onderdelen", 2),
/// ];
/// let leaves = leaf_categories(&flat);
/// assert_eq!(leaves.len(), 1);
/// assert_eq!(leaves[0].display_name, "Auto-onderdelen → BMW-onderdelen");
/// ```
pub fn leaf_categories(taxonomy: &[FlatCategory]) -> Vec<LeafCategory> {
    let mut leaves: Vec<LeafCategory> = taxonomy
        .iter()
        .filter(|c| c.is_attribute_bearing())
        .filter_map(|c| {
            let (level1, level2) = c.path.split_once(PATH_SEPARATOR)?;
            Some(LeafCategory {
                id: c.id,
                path: c.path.clone(),
                display_name: c.path.replace(PATH_SEPARATOR, DISPLAY_SEPARATOR),
                level1: level1.to_string(),
                level2: level2.to_string(),
            })
        })
        .collect();
    leaves.sort_by(|a, b| a.path.cmp(&b.path));
    leaves
}
