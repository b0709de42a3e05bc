//! Category tree fixtures.

use catmatch_core::CategoryNode;

/// The three-branch automotive mock taxonomy.
///
/// ```text
/// 1  Auto-onderdelen      11 BMW-onderdelen, 12 Audi-onderdelen, 13 Mercedes-onderdelen
/// 2  Auto's               21 Personenauto's, 22 Bedrijfswagens
/// 3  Fietsen en Brommers  31 Fietsen, 32 Brommers
/// ```
pub fn automotive_taxonomy() -> Vec<CategoryNode> {
    vec![
        CategoryNode::new(1, "Auto-onderdelen").with_children([
            CategoryNode::new(11, "BMW-onderdelen"),
            CategoryNode::new(12, "Audi-onderdelen"),
            CategoryNode::new(13, "Mercedes-onderdelen"),
        ]),
        CategoryNode::new(2, "Auto's").with_children([
            CategoryNode::new(21, "Personenauto's"),
            CategoryNode::new(22, "Bedrijfswagens"),
        ]),
        CategoryNode::new(3, "Fietsen en Brommers").with_children([
            CategoryNode::new(31, "Fietsen"),
            CategoryNode::new(32, "Brommers"),
        ]),
    ]
}

/// Automotive taxonomy whose only parts category is BMW.
pub fn bmw_taxonomy() -> Vec<CategoryNode> {
    vec![
        CategoryNode::new(1, "Auto-onderdelen").with_child(CategoryNode::new(11, "BMW-onderdelen")),
        CategoryNode::new(3, "Fietsen en Brommers").with_children([
            CategoryNode::new(31, "Fietsen"),
            CategoryNode::new(32, "Brommers"),
        ]),
    ]
}

/// Taxonomy covering both pricing models.
///
/// ```text
/// 4  Watersport en Boten  41 Kitesurfen, 42 Zeilen
/// 5  Antiek en Kunst      51 Schilderijen
/// 6  Telecommunicatie     61 Mobiele telefoons
/// ```
///
/// Category 42 carries a third level (421 Zeilboten) to exercise deep paths.
pub fn sports_taxonomy() -> Vec<CategoryNode> {
    vec![
        CategoryNode::new(4, "Watersport en Boten").with_children([
            CategoryNode::new(41, "Kitesurfen"),
            CategoryNode::new(42, "Zeilen").with_child(CategoryNode::new(421, "Zeilboten")),
        ]),
        CategoryNode::new(5, "Antiek en Kunst").with_child(CategoryNode::new(51, "Schilderijen")),
        CategoryNode::new(6, "Telecommunicatie")
            .with_child(CategoryNode::new(61, "Mobiele telefoons")),
    ]
}
