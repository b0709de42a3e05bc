//! Category tree payloads.

use catmatch_core::{CategoryId, CategoryNode, ATTRIBUTE_DEPTH};
use serde::Deserialize;

use super::attributes::{schema_from_groups, FileAttributeGroup};
use super::localized::{first_text, Localized};
use super::PayloadError;
use crate::schema::{SchemaAddress, StaticSchemaSource};

/// Category as returned by the marketplace categories API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiCategory {
    category_id: CategoryId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    labels: Option<Localized<String>>,
    #[serde(default, rename = "_embedded")]
    embedded: Option<EmbeddedCategories>,
}

#[derive(Debug, Default, Deserialize)]
struct EmbeddedCategories {
    #[serde(default, rename = "mp:category")]
    categories: Vec<ApiCategory>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiCategoriesPayload {
    List(Vec<ApiCategory>),
    Embedded {
        #[serde(rename = "_embedded")]
        embedded: EmbeddedCategories,
    },
}

/// Category as found in a taxonomy file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileCategory {
    id: CategoryId,
    #[serde(default)]
    label: Option<Localized<String>>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    children: Vec<FileCategory>,
    #[serde(default)]
    attribute_groups: Vec<FileAttributeGroup>,
}

#[derive(Debug, Deserialize)]
struct FileRoot {
    #[serde(default)]
    children: Vec<FileCategory>,
}

impl ApiCategory {
    fn into_node(self, locale: &str) -> Result<CategoryNode, PayloadError> {
        let name = first_text([
            self.labels.as_ref().and_then(|l| l.text(locale)),
            self.name.as_deref(),
            self.labels
                .as_ref()
                .and_then(|l| l.get_or_first(locale))
                .map(String::as_str),
        ])
        .ok_or_else(|| PayloadError::Invalid(format!("category {} has no name", self.category_id)))?;

        let children = self
            .embedded
            .map(|e| e.categories)
            .unwrap_or_default()
            .into_iter()
            .map(|c| c.into_node(locale))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CategoryNode {
            id: self.category_id,
            name,
            children,
        })
    }
}

pub(crate) fn categories_from_api(json: &str, locale: &str) -> Result<Vec<CategoryNode>, PayloadError> {
    let categories = match serde_json::from_str::<ApiCategoriesPayload>(json)? {
        ApiCategoriesPayload::List(categories) => categories,
        ApiCategoriesPayload::Embedded { embedded } => embedded.categories,
    };
    categories.into_iter().map(|c| c.into_node(locale)).collect()
}

struct FileWalk<'a> {
    locale: &'a str,
    schemas: StaticSchemaSource,
}

impl FileWalk<'_> {
    fn node(
        &mut self,
        category: FileCategory,
        parent: Option<CategoryId>,
        depth: usize,
    ) -> Result<CategoryNode, PayloadError> {
        let name = first_text([
            category.label.as_ref().and_then(|l| l.text(self.locale)),
            category.name.as_deref(),
            category
                .label
                .as_ref()
                .and_then(|l| l.get_or_first(self.locale))
                .map(String::as_str),
        ])
        .ok_or_else(|| PayloadError::Invalid(format!("category {} has no label", category.id)))?;

        if let (ATTRIBUTE_DEPTH, Some(parent_id)) = (depth, parent) {
            if !category.attribute_groups.is_empty() {
                let schema = schema_from_groups(category.attribute_groups, self.locale);
                self.schemas
                    .insert(SchemaAddress::new(parent_id, category.id), schema);
            }
        }

        let children = category
            .children
            .into_iter()
            .map(|child| self.node(child, Some(category.id), depth + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CategoryNode {
            id: category.id,
            name,
            children,
        })
    }
}

pub(crate) fn taxonomy_from_file(
    json: &str,
    locale: &str,
) -> Result<(Vec<CategoryNode>, StaticSchemaSource), PayloadError> {
    let root: FileRoot = serde_json::from_str(json)?;
    let mut walk = FileWalk {
        locale,
        schemas: StaticSchemaSource::new(),
    };
    let roots = root
        .children
        .into_iter()
        .map(|c| walk.node(c, None, 1))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((roots, walk.schemas))
}
