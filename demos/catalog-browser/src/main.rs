//! Catalog browser - demo CLI over the storefront catalog core.
//!
//! Commands:
//! - `catalog-browser search <query>` - free-text search across products and posts
//! - `catalog-browser list` - filtered/sorted/paginated product listing
//! - `catalog-browser show <id>` - product detail with related products
//! - `catalog-browser promos` - promotions feed

mod config;
mod output;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use storefront_catalog::prelude::*;

use config::BrowserConfig;
use output::Output;

/// Catalog browser - search and browse a storefront catalog from the terminal
#[derive(Parser)]
#[command(name = "catalog-browser")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Catalog JSON file path
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Free-text search across products and posts
    Search {
        /// Query keywords
        query: Vec<String>,
    },

    /// Filtered, sorted, paginated product listing
    List {
        /// Filter by category
        #[arg(long)]
        category: Option<String>,

        /// Filter by brand
        #[arg(long)]
        brand: Option<String>,

        /// Inclusive lower price bound
        #[arg(long)]
        min_price: Option<f64>,

        /// Inclusive upper price bound
        #[arg(long)]
        max_price: Option<f64>,

        /// Minimum rating floor
        #[arg(long)]
        rating_min: Option<f64>,

        /// Name substring filter
        #[arg(long)]
        text: Option<String>,

        /// Sort key: bestselling, price_asc, price_desc, rating_desc, newest
        #[arg(long)]
        sort: Option<String>,

        /// Page to display (1-indexed)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Items per page
        #[arg(long)]
        per_page: Option<u32>,
    },

    /// Product detail with related products
    Show {
        /// Product id
        id: String,
    },

    /// Products currently on promotion
    Promos,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.verbose);

    let config = match cli.config.as_deref() {
        Some(path) => BrowserConfig::load(path)?,
        None => BrowserConfig::default(),
    };

    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| config.catalog.clone())
        .unwrap_or_else(|| "demos/catalog-browser/fixtures/catalog.json".to_string());
    output.debug(&format!("loading catalog from {}", catalog_path));

    let json = std::fs::read_to_string(&catalog_path)
        .with_context(|| format!("Failed to read catalog file: {}", catalog_path))?;
    let catalog = InMemoryCatalog::from_json(&json)
        .with_context(|| format!("Failed to load catalog: {}", catalog_path))?;

    let result = match cli.command {
        Commands::Search { query } => run_search(&catalog, &query.join(" "), &output),
        Commands::List {
            category,
            brand,
            min_price,
            max_price,
            rating_min,
            text,
            sort,
            page,
            per_page,
        } => {
            let criteria = FilterCriteria {
                category,
                brand,
                min_price,
                max_price,
                rating_min,
                text,
            };
            let sort = SortKey::parse(sort.as_deref().unwrap_or(&config.sort))?;
            let per_page = per_page.unwrap_or(config.per_page);
            run_list(&catalog, &criteria, sort, per_page, page, &output)
        }
        Commands::Show { id } => run_show(&catalog, &id, &output),
        Commands::Promos => run_promos(&catalog, &output),
    };

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn run_search(catalog: &InMemoryCatalog, query: &str, output: &Output) -> Result<()> {
    let hits = search_all(catalog, query);
    if hits.is_empty() {
        output.info(&format!("no results for '{}'", query));
        return Ok(());
    }

    output.info(&format!(
        "{} result(s): {} product(s), {} post(s)",
        hits.total,
        hits.products.len(),
        hits.posts.len()
    ));
    for product in &hits.products {
        output.product(product);
    }
    for post in &hits.posts {
        output.post(post);
    }
    Ok(())
}

fn run_list(
    catalog: &InMemoryCatalog,
    criteria: &FilterCriteria,
    sort: SortKey,
    per_page: u32,
    page: u32,
    output: &Output,
) -> Result<()> {
    let filtered = filter_products(catalog.products(), criteria);
    let sorted = sort_products(&filtered, sort);
    let result = paginate(&sorted, per_page, page);

    output.info(&format!("sorted by {}", sort.display_name()));
    for product in &result.items {
        output.product(product);
    }
    output.page_footer(&result.pagination);
    Ok(())
}

fn run_show(catalog: &InMemoryCatalog, id: &str, output: &Output) -> Result<()> {
    let id = ProductId::new(id);
    let Some(product) = find_product(catalog, &id) else {
        bail!("No product with id: {}", id);
    };

    output.product(&product);
    if let Some(description) = &product.description {
        output.info(description);
    }
    if let Some(discount) = product.discount_percentage() {
        output.info(&format!("on promotion: {:.0}% off", discount));
    }

    let related = related_products(catalog, &id, 4);
    if !related.is_empty() {
        output.info("related products:");
        for product in &related {
            output.product(product);
        }
    }
    Ok(())
}

fn run_promos(catalog: &InMemoryCatalog, output: &Output) -> Result<()> {
    let promos = promotions(catalog);
    if promos.is_empty() {
        output.info("no products on promotion");
        return Ok(());
    }

    output.info(&format!("{} product(s) on promotion", promos.len()));
    for product in &promos {
        output.product(product);
    }
    Ok(())
}
