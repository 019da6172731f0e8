//! Catalog browsing and search for an e-commerce storefront.
//!
//! This crate is the in-memory core behind listing pages, product detail
//! pages, the promotions feed, and the site search box:
//!
//! - **Catalog**: product and post tables behind a store abstraction
//! - **Search**: accent-insensitive multi-keyword matching over both tables
//! - **Filters**: faceted category/brand/price/rating/text filtering
//! - **Sorting & pages**: stable sort strategies and fixed-size pagination
//!
//! The catalog is loaded once and read-only afterwards; every pipeline
//! function is a pure computation from (catalog, criteria) to a fresh result
//! list, so callers can recompute on every interaction.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_catalog::prelude::*;
//!
//! let catalog = InMemoryCatalog::from_json(&fixture_json)?;
//!
//! let criteria = FilterCriteria::new()
//!     .with_category("Vitamin")
//!     .with_rating_min(4.5);
//! let filtered = filter_products(catalog.products(), &criteria);
//! let sorted = sort_products(&filtered, SortKey::PriceAsc);
//! let page = paginate(&sorted, 12, 1);
//!
//! for product in &page.items {
//!     println!("{} - {:.2}", product.name, product.price);
//! }
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod search;

pub use error::CatalogError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{CatalogStore, InMemoryCatalog, Post, Product};

    // Search
    pub use crate::search::{
        filter_products, find_product, matches, normalize, paginate, promotions,
        related_products, search_all, search_posts, search_products, sort_products,
        FilterCriteria, Pagination, ResultPage, SearchHits, SortKey,
    };
}
