//! `shophub-catalog` — product model and catalog load lifecycle.
//!
//! Pure data, no IO: fetching lives in `shophub-client`, filtering and
//! sorting in `shophub-browse`.

pub mod product;
pub mod state;

pub use product::{ALL_CATEGORIES, Category, Product, Rating, group_by_category};
pub use state::{CatalogState, LoadFailure};
