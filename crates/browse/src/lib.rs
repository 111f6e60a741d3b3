//! `shophub-browse` — filtering, sorting and browse-session state.
//!
//! [`apply_view`] is the pure pipeline (category, then search, then price,
//! then a stable sort). [`BrowseSession`] owns the current [`FilterSpec`]
//! and catalog state, recomputing the derived view after every change.

pub mod engine;
pub mod session;
pub mod spec;

pub use engine::apply_view;
pub use session::{BrowseSession, LoadTicket};
pub use spec::{
    CategoryFilter, DEFAULT_PRICE_CEILING, FilterSpec, PRICE_FLOOR, PriceRange, SortKey,
};
