//! shophub - browse the storefront catalog from the command line
//!
//! Loads the product catalog from the configured API, applies the requested
//! filters through a browse session and prints the resulting view — the
//! same pipeline the storefront's product page runs.

use anyhow::bail;
use clap::Parser;

use shophub_browse::{BrowseSession, CategoryFilter, SortKey};
use shophub_catalog::{Category, Product, group_by_category};
use shophub_client::{HttpCatalogSource, refresh};
use shophub_core::{money, text};

#[derive(Parser)]
#[command(name = "shophub")]
#[command(about = "Filter, search and sort the ShopHub catalog", long_about = None)]
struct Cli {
    /// Base URL of the catalog API
    #[arg(
        long,
        env = "SHOPHUB_API_URL",
        default_value = "https://fakestoreapi.com"
    )]
    api_url: String,

    /// Only show products from this category
    #[arg(short, long)]
    category: Option<Category>,

    /// Case-insensitive search over titles and descriptions
    #[arg(short, long)]
    search: Option<String>,

    /// Sort order: default, price-ascending, price-descending or
    /// rating-descending
    #[arg(long, default_value = "default")]
    sort: SortKey,

    /// Upper price bound, inclusive (the lower bound is always 0)
    #[arg(long)]
    max_price: Option<f64>,

    /// Group the listing by category
    #[arg(short, long)]
    grouped: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shophub_observability::init();

    let cli = Cli::parse();

    let source = HttpCatalogSource::new(&cli.api_url);
    let mut session = BrowseSession::new();

    tracing::info!("loading catalog from {}", source.base_url());
    refresh(&source, &mut session).await;

    if let Some(failure) = session.error() {
        bail!("catalog load failed: {failure}");
    }

    if let Some(category) = cli.category {
        session.set_category(CategoryFilter::One(category));
    }
    if let Some(search) = cli.search {
        session.set_search_query(search);
    }
    session.set_sort_key(cli.sort);
    if let Some(max_price) = cli.max_price {
        session.set_price_max(max_price);
    }

    if session.view().is_empty() {
        println!("no products match the current filters");
        return Ok(());
    }

    if cli.grouped {
        for (category, products) in group_by_category(session.view()) {
            println!("{category}");
            for product in &products {
                print_product(product);
            }
        }
    } else {
        println!("{} products", session.view().len());
        for product in session.view() {
            print_product(product);
        }
    }

    Ok(())
}

fn print_product(product: &Product) {
    let rating = match &product.rating {
        Some(rating) => format!("{:.1}/5 ({})", rating.rate, rating.count),
        None => "unrated".to_string(),
    };
    println!(
        "  #{:<4} {:>10}  {:<50} [{}] {}",
        product.id,
        money::format_usd(product.price),
        text::truncate(&product.title, 47),
        product.category,
        rating,
    );
}
