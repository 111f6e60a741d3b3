//! The filter/sort pipeline over a loaded catalog.
//!
//! Filtering runs before sorting so discarded products are never compared;
//! the filter order itself (category, search, price) is fixed and, since
//! the predicates are independent, does not change the outcome.

use shophub_catalog::Product;

use crate::spec::{FilterSpec, SortKey};

/// Compute the derived view: keep the products matching `spec`'s category,
/// search text and price range, then stable-sort them by its sort key.
///
/// The catalog itself is never mutated, and ties keep their catalog order.
pub fn apply_view(catalog: &[Product], spec: &FilterSpec) -> Vec<Product> {
    let query = spec.search_query().to_lowercase();
    let range = spec.price_range();

    let mut view: Vec<Product> = catalog
        .iter()
        .filter(|p| spec.category().matches(&p.category))
        .filter(|p| query.is_empty() || matches_query(p, &query))
        .filter(|p| range.contains(p.price))
        .cloned()
        .collect();

    match spec.sort_key() {
        SortKey::Default => {}
        SortKey::PriceAscending => view.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDescending => view.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::RatingDescending => {
            view.sort_by(|a, b| rating_rate(b).total_cmp(&rating_rate(a)))
        }
    }

    view
}

/// Case-insensitive substring match over title and description.
/// `query` must already be lower-cased.
fn matches_query(product: &Product, query: &str) -> bool {
    product.title.to_lowercase().contains(query)
        || product.description.to_lowercase().contains(query)
}

/// Sort-only coercion: an unrated product sorts as rate 0. Everything
/// outside the comparator keeps treating "unrated" and "rated 0" as
/// different things.
fn rating_rate(product: &Product) -> f64 {
    product.rating.map_or(0.0, |r| r.rate)
}
