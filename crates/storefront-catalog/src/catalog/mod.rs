//! Catalog tables and storage.
//!
//! Contains the product and post record types plus the store abstraction
//! the search and filter pipelines are handed.

mod post;
mod product;
mod store;

pub use post::{Post, CONTENT_SEARCH_CHARS};
pub use product::Product;
pub use store::{CatalogStore, InMemoryCatalog};
