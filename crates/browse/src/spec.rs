//! Filter and sort parameters for the catalog view.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use shophub_catalog::Category;
use shophub_core::{DomainError, DomainResult};

/// Lower bound of the browsable price range.
///
/// The storefront's price control only adjusts the ceiling; the floor
/// stays pinned here.
pub const PRICE_FLOOR: f64 = 0.0;

/// Default price ceiling (the price control's full extent).
pub const DEFAULT_PRICE_CEILING: f64 = 1_000.0;

/// Category dimension of a [`FilterSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Keep every product (the storefront's "all" option).
    #[default]
    All,
    /// Keep only products in one category (exact, case-sensitive match).
    One(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::One(wanted) => wanted == category,
        }
    }
}

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep the catalog's own order.
    #[default]
    Default,
    PriceAscending,
    PriceDescending,
    RatingDescending,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Default,
        SortKey::PriceAscending,
        SortKey::PriceDescending,
        SortKey::RatingDescending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceAscending => "price-ascending",
            SortKey::PriceDescending => "price-descending",
            SortKey::RatingDescending => "rating-descending",
        }
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortKey::Default),
            "price-ascending" => Ok(SortKey::PriceAscending),
            "price-descending" => Ok(SortKey::PriceDescending),
            "rating-descending" => Ok(SortKey::RatingDescending),
            other => Err(DomainError::validation(format!(
                "unknown sort key {other:?} (expected default, price-ascending, \
                 price-descending or rating-descending)"
            ))),
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive price interval `[min, max]`.
///
/// Both bounds are finite and non-negative with `min <= max`; the
/// constructors enforce this, so the engine never sees a malformed range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> DomainResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(DomainError::validation("price bounds must be finite"));
        }
        if min < PRICE_FLOOR {
            return Err(DomainError::validation("price bounds must be non-negative"));
        }
        if min > max {
            return Err(DomainError::validation(format!(
                "price range minimum {min} exceeds maximum {max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// True when `price` falls inside the inclusive interval.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    /// Replace the ceiling, saturating at the floor so the range stays
    /// well-formed. Non-finite input leaves the range untouched.
    pub fn with_max(self, max: f64) -> Self {
        if !max.is_finite() {
            return self;
        }
        Self {
            min: self.min,
            max: max.max(self.min),
        }
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: PRICE_FLOOR,
            max: DEFAULT_PRICE_CEILING,
        }
    }
}

/// The complete set of user-chosen filter and sort parameters.
///
/// Immutable value: the `with_*` builders return an updated copy, which is
/// what keeps every [`crate::BrowseSession`] operation a single atomic
/// replacement. [`FilterSpec::default`] is the storefront's initial state
/// (all categories, empty search, catalog order, price `[0, 1000]`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    category: CategoryFilter,
    search: String,
    sort: SortKey,
    price: PriceRange,
}

impl FilterSpec {
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Raw search text; matching is case-insensitive, empty means "no
    /// search filter".
    pub fn search_query(&self) -> &str {
        &self.search
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn price_range(&self) -> PriceRange {
        self.price
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    pub fn with_sort_key(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_price_range(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    /// Adjust only the price ceiling; see [`PriceRange::with_max`].
    pub fn with_price_max(mut self, max: f64) -> Self {
        self.price = self.price.with_max(max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_the_unfiltered_view() {
        let spec = FilterSpec::default();
        assert_eq!(*spec.category(), CategoryFilter::All);
        assert_eq!(spec.search_query(), "");
        assert_eq!(spec.sort_key(), SortKey::Default);
        assert_eq!(spec.price_range().min(), PRICE_FLOOR);
        assert_eq!(spec.price_range().max(), DEFAULT_PRICE_CEILING);
    }

    #[test]
    fn category_filter_matches_exactly() {
        let clothing = Category::new("clothing").unwrap();
        let filter = CategoryFilter::One(clothing.clone());

        assert!(filter.matches(&clothing));
        assert!(!filter.matches(&Category::new("Clothing").unwrap()));
        assert!(CategoryFilter::All.matches(&clothing));
    }

    #[test]
    fn sort_key_parses_its_wire_names() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }

        let err = "price".parse::<SortKey>().unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("unknown sort key")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn sort_key_serde_names_match_as_str() {
        for key in SortKey::ALL {
            let encoded = serde_json::to_value(key).unwrap();
            assert_eq!(encoded, serde_json::json!(key.as_str()));
        }
    }

    #[test]
    fn price_range_rejects_malformed_bounds() {
        assert!(PriceRange::new(10.0, 5.0).is_err());
        assert!(PriceRange::new(-1.0, 5.0).is_err());
        assert!(PriceRange::new(0.0, f64::NAN).is_err());
        assert!(PriceRange::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn price_range_bounds_are_inclusive() {
        let range = PriceRange::new(10.0, 50.0).unwrap();
        assert!(range.contains(10.0));
        assert!(range.contains(50.0));
        assert!(!range.contains(9.99));
        assert!(!range.contains(50.01));
    }

    #[test]
    fn with_max_saturates_at_the_floor() {
        let range = PriceRange::new(20.0, 100.0).unwrap();
        let clamped = range.with_max(5.0);
        assert_eq!(clamped.min(), 20.0);
        assert_eq!(clamped.max(), 20.0);
    }

    #[test]
    fn with_max_ignores_non_finite_input() {
        let range = PriceRange::default();
        assert_eq!(range.with_max(f64::NAN), range);
        assert_eq!(range.with_max(f64::NEG_INFINITY), range);
    }

    #[test]
    fn builders_replace_a_single_field() {
        let spec = FilterSpec::default()
            .with_search_query("shirt")
            .with_sort_key(SortKey::PriceAscending);

        assert_eq!(spec.search_query(), "shirt");
        assert_eq!(spec.sort_key(), SortKey::PriceAscending);
        assert_eq!(*spec.category(), CategoryFilter::All);
        assert_eq!(spec.price_range(), PriceRange::default());
    }
}
