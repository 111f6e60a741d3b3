//! One full load cycle from a source into a browse session.

use shophub_browse::BrowseSession;
use shophub_catalog::LoadFailure;

use crate::source::CatalogSource;

/// Fetch products and categories concurrently and deliver both outcomes to
/// the session.
///
/// The product outcome resolves the load cycle opened here; a category
/// failure only degrades the category widget. Returns `true` when the
/// product outcome was applied rather than rejected as stale.
pub async fn refresh(source: &dyn CatalogSource, session: &mut BrowseSession) -> bool {
    let ticket = session.begin_load();

    let (products, categories) =
        tokio::join!(source.fetch_products(), source.fetch_categories());

    let applied = session.complete_load(ticket, products.map_err(LoadFailure::from));
    session.apply_categories(categories.map_err(LoadFailure::from));
    applied
}
