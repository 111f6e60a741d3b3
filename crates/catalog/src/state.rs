//! Catalog load lifecycle.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::product::Product;

/// Why a load failed, as shown to the customer.
///
/// Carried as state on [`CatalogState::Failed`] rather than propagated as
/// an error: a failed load is a page the storefront still has to render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadFailure {
    message: String,
}

impl LoadFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Load state of the product catalog for one browse session.
///
/// A load cycle starts in `NotLoaded` and resolves exactly once, to
/// `Loaded` or `Failed`. Retrying starts a fresh cycle from `NotLoaded`.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    /// Initial state; a load is in flight or about to be issued.
    NotLoaded,
    /// The catalog arrived and is held immutably for the session.
    Loaded {
        products: Vec<Product>,
        loaded_at: DateTime<Utc>,
    },
    /// The load failed; the derived view degrades to empty.
    Failed(LoadFailure),
}

impl CatalogState {
    /// Loading flag for the presentation layer: on until the cycle resolves.
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::NotLoaded)
    }

    /// The loaded products, if this session has any.
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            CatalogState::Loaded { products, .. } => Some(products),
            _ => None,
        }
    }

    /// The failure that resolved the current cycle, if any.
    pub fn failure(&self) -> Option<&LoadFailure> {
        match self {
            CatalogState::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}
