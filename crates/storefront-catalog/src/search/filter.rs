//! Faceted filtering over the product table.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::search::text::normalize;

/// Facet criteria for a product listing.
///
/// Every field is optional; `None` means no constraint on that facet. Each
/// facet is an independent predicate over its own field, so the filters
/// commute and can be applied in any order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    /// Category equality; `None` or `"all"` matches every category.
    pub category: Option<String>,
    /// Brand equality.
    pub brand: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    /// Minimum rating floor.
    pub rating_min: Option<f64>,
    /// Substring match on the product name, case- and accent-insensitive.
    pub text: Option<String>,
}

impl FilterCriteria {
    /// Create criteria with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain to a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Constrain to a brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Constrain the price to an inclusive range; absent bounds stay open.
    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Constrain to a minimum rating.
    pub fn with_rating_min(mut self, rating_min: f64) -> Self {
        self.rating_min = Some(rating_min);
        self
    }

    /// Constrain by a name substring.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Check a single product against every facet.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if !category.eq_ignore_ascii_case("all") && product.category != *category {
                return false;
            }
        }

        if let Some(brand) = &self.brand {
            match &product.brand {
                Some(b) if b == brand => {}
                _ => return false,
            }
        }

        // Negated comparisons so NaN prices never match a bounded facet.
        if let Some(min) = self.min_price {
            if !(product.price >= min) {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if !(product.price <= max) {
                return false;
            }
        }
        if let Some(floor) = self.rating_min {
            if !(product.rating >= floor) {
                return false;
            }
        }

        if let Some(text) = &self.text {
            let needle = normalize(text);
            if !needle.is_empty() && !normalize(&product.name).contains(&needle) {
                return false;
            }
        }

        true
    }
}

/// Apply the facet pipeline, producing a new filtered list.
///
/// The input is never mutated; items keep their original relative order.
pub fn filter_products(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let filtered: Vec<Product> = products
        .iter()
        .filter(|product| criteria.matches(product))
        .cloned()
        .collect();
    tracing::debug!(
        total = products.len(),
        kept = filtered.len(),
        "applied facet filters"
    );
    filtered
}
