//! Browse-session state: one controller per storefront page visit.

use chrono::Utc;

use shophub_catalog::{CatalogState, Category, LoadFailure, Product};
use shophub_core::SessionId;

use crate::engine;
use crate::spec::{CategoryFilter, FilterSpec, SortKey};

/// Proof that a load cycle was started; required to deliver its outcome.
///
/// [`BrowseSession::complete_load`] rejects tickets from superseded cycles,
/// so a slow, stale fetch can never overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    cycle: u64,
}

/// Controller for one browsing session.
///
/// Owns the current [`FilterSpec`], the catalog load state and the derived
/// view, and recomputes the view after every change. All operations are
/// synchronous; the fetch itself happens elsewhere and reports back through
/// [`BrowseSession::complete_load`].
#[derive(Debug)]
pub struct BrowseSession {
    session_id: SessionId,
    catalog: CatalogState,
    categories: Vec<Category>,
    spec: FilterSpec,
    view: Vec<Product>,
    load_cycle: u64,
    cycle_resolved: bool,
}

impl BrowseSession {
    pub fn new() -> Self {
        Self::with_session_id(SessionId::new())
    }

    pub fn with_session_id(session_id: SessionId) -> Self {
        Self {
            session_id,
            catalog: CatalogState::NotLoaded,
            categories: Vec::new(),
            spec: FilterSpec::default(),
            view: Vec::new(),
            load_cycle: 0,
            cycle_resolved: false,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// The derived view: filtered and sorted per the current spec, empty
    /// unless the catalog is loaded.
    pub fn view(&self) -> &[Product] {
        &self.view
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn is_loading(&self) -> bool {
        self.catalog.is_loading()
    }

    /// The failure that resolved the current load cycle, if any.
    pub fn error(&self) -> Option<&LoadFailure> {
        self.catalog.failure()
    }

    /// Category names for the filter widget; empty until they arrive (or
    /// when their fetch failed).
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Start a load cycle: the state returns to `NotLoaded` (loading flag
    /// on) and any still-unresolved earlier cycle becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_cycle += 1;
        self.cycle_resolved = false;
        self.catalog = CatalogState::NotLoaded;
        self.recompute();
        tracing::debug!(
            "session {} started load cycle {}",
            self.session_id,
            self.load_cycle
        );
        LoadTicket {
            cycle: self.load_cycle,
        }
    }

    /// Deliver the outcome of a load cycle.
    ///
    /// Returns `false` (and changes nothing) when the ticket belongs to a
    /// superseded cycle or the current cycle already resolved.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<Vec<Product>, LoadFailure>,
    ) -> bool {
        if ticket.cycle != self.load_cycle || self.cycle_resolved {
            tracing::debug!(
                "session {} ignoring stale result for load cycle {} (current {})",
                self.session_id,
                ticket.cycle,
                self.load_cycle
            );
            return false;
        }

        self.cycle_resolved = true;
        self.catalog = match outcome {
            Ok(products) => {
                tracing::info!(
                    "session {} loaded {} products",
                    self.session_id,
                    products.len()
                );
                CatalogState::Loaded {
                    products,
                    loaded_at: Utc::now(),
                }
            }
            Err(failure) => {
                tracing::warn!(
                    "session {} catalog load failed: {}",
                    self.session_id,
                    failure
                );
                CatalogState::Failed(failure)
            }
        };
        self.recompute();
        true
    }

    /// Deliver the category list. A failure only degrades the category
    /// widget to its bare "all" option; browsing itself is unaffected.
    pub fn apply_categories(&mut self, outcome: Result<Vec<Category>, LoadFailure>) {
        match outcome {
            Ok(categories) => self.categories = categories,
            Err(failure) => {
                tracing::warn!(
                    "session {} category list failed to load: {}",
                    self.session_id,
                    failure
                );
                self.categories.clear();
            }
        }
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.spec = self.spec.clone().with_category(category);
        self.recompute();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.spec = self.spec.clone().with_search_query(query);
        self.recompute();
    }

    pub fn set_sort_key(&mut self, sort: SortKey) {
        self.spec = self.spec.clone().with_sort_key(sort);
        self.recompute();
    }

    /// Adjust the price ceiling (the floor is pinned at zero). A ceiling
    /// below the floor saturates; non-finite input is ignored.
    pub fn set_price_max(&mut self, max: f64) {
        if !max.is_finite() {
            tracing::warn!(
                "session {} ignoring non-finite price ceiling",
                self.session_id
            );
            return;
        }
        self.spec = self.spec.clone().with_price_max(max);
        self.recompute();
    }

    /// Reset every filter to its default in one step; no intermediate view
    /// with only some fields cleared is ever observable.
    pub fn clear_filters(&mut self) {
        self.spec = FilterSpec::default();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.view = match self.catalog.products() {
            Some(products) => engine::apply_view(products, &self.spec),
            None => Vec::new(),
        };
    }
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self::new()
    }
}
