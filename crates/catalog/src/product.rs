//! Catalog products as served by the storefront API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use shophub_core::{DomainError, DomainResult, ProductId};

/// Reserved category-filter sentinel meaning "every category".
///
/// Never a real category name; [`Category::new`] rejects it.
pub const ALL_CATEGORIES: &str = "all";

/// Customer rating aggregate attached to a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating on the API's 0..=5 scale.
    pub rate: f64,
    /// Number of ratings behind the average.
    pub count: u64,
}

/// Category name as normalized by the catalog API.
///
/// Compared case-sensitively. The reserved `"all"` sentinel and blank
/// strings are rejected at construction, including during deserialization,
/// so a `Category` in hand is always a real category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("category name cannot be blank"));
        }
        if name == ALL_CATEGORIES {
            return Err(DomainError::validation(
                "\"all\" is reserved for the unfiltered view",
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Category {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.0
    }
}

/// A single catalog product.
///
/// Mirrors the API's JSON shape. `image` and `rating` are optional on the
/// wire; an absent rating stays distinct from a zero rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Price in US-dollar units (the API serves decimal floats).
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

/// Group products by category, categories in lexicographic order and
/// products in their original order within each group.
pub fn group_by_category(products: &[Product]) -> BTreeMap<Category, Vec<Product>> {
    let mut groups: BTreeMap<Category, Vec<Product>> = BTreeMap::new();
    for product in products {
        groups
            .entry(product.category.clone())
            .or_default()
            .push(product.clone());
    }
    groups
}
