//! `shophub-client` — catalog loading over HTTP.
//!
//! The storefront consumes a FakeStore-shaped JSON API. This crate owns the
//! transport side: the [`CatalogSource`] contract, the reqwest-backed
//! implementation with retry, the one-shot [`refresh`] cycle that feeds a
//! browse session, and the input [`Debouncer`].

pub mod debounce;
pub mod http;
pub mod refresh;
pub mod source;

pub use debounce::Debouncer;
pub use http::HttpCatalogSource;
pub use refresh::refresh;
pub use source::{CatalogSource, FetchError};
