//! Catalog storage abstraction.
//!
//! The pipelines never read module-level state; they are handed a
//! [`CatalogStore`], so pages, demos, and tests can all inject their own
//! fixture catalogs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Post, Product};
use crate::error::CatalogError;

/// Read-only access to the product and post tables.
pub trait CatalogStore {
    /// The product table.
    fn products(&self) -> &[Product];

    /// The post table.
    fn posts(&self) -> &[Post];
}

/// An in-memory catalog, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryCatalog {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    posts: Vec<Post>,
}

impl InMemoryCatalog {
    /// Build a catalog, validating table invariants up front.
    ///
    /// Bad records fail fast here so the pipelines can stay total: duplicate
    /// ids within a table, negative prices, and out-of-range ratings are all
    /// rejected.
    pub fn new(products: Vec<Product>, posts: Vec<Post>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id.as_str().to_string()) {
                return Err(CatalogError::DuplicateId(product.id.as_str().to_string()));
            }
        }

        let mut seen = HashSet::new();
        for post in &posts {
            if !seen.insert(post.id.as_str().to_string()) {
                return Err(CatalogError::DuplicateId(post.id.as_str().to_string()));
            }
        }

        Ok(Self { products, posts })
    }

    /// Build a product-only catalog.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        Self::new(products, Vec::new())
    }

    /// Load and validate a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: InMemoryCatalog = serde_json::from_str(json)?;
        Self::new(raw.products, raw.posts)
    }
}

impl CatalogStore for InMemoryCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn posts(&self) -> &[Post] {
        &self.posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_construction() {
        let catalog = InMemoryCatalog::new(
            vec![
                Product::new("p-01", "Panadol Extra 500mg", "Pain Relief", 4.5),
                Product::new("p-02", "Vitamin C 1000mg", "Vitamin", 8.0),
            ],
            vec![Post::new("t1", "Flu Season Tips", "Wellness")],
        )
        .unwrap();

        assert_eq!(catalog.products().len(), 2);
        assert_eq!(catalog.posts().len(), 1);
    }

    #[test]
    fn test_duplicate_product_id_rejected() {
        let result = InMemoryCatalog::from_products(vec![
            Product::new("p-01", "A", "Misc", 1.0),
            Product::new("p-01", "B", "Misc", 2.0),
        ]);

        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "p-01"));
    }

    #[test]
    fn test_same_id_across_tables_is_allowed() {
        // Uniqueness is per table; a post may reuse a product id.
        let result = InMemoryCatalog::new(
            vec![Product::new("1", "A", "Misc", 1.0)],
            vec![Post::new("1", "A", "Misc")],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_product_rejected() {
        let result = InMemoryCatalog::from_products(vec![Product::new("p-01", "A", "Misc", -0.5)]);
        assert!(matches!(result, Err(CatalogError::InvalidPrice { .. })));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "products": [
                {"id": "p-01", "name": "Panadol Extra 500mg", "category": "Pain Relief", "price": 4.5},
                {"id": 2, "name": "Vitamin C 1000mg", "category": "Vitamin", "price": 8.0}
            ],
            "posts": [
                {"id": "t1", "title": "Flu Season Tips", "category": "Wellness"}
            ]
        }"#;

        let catalog = InMemoryCatalog::from_json(json).unwrap();
        assert_eq!(catalog.products().len(), 2);
        assert_eq!(catalog.products()[1].id.as_str(), "2");
        assert_eq!(catalog.posts().len(), 1);
    }

    #[test]
    fn test_from_json_bad_payload() {
        assert!(matches!(
            InMemoryCatalog::from_json("not json"),
            Err(CatalogError::SerializationError(_))
        ));
    }
}
