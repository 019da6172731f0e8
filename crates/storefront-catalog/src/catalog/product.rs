//! Product records.

use crate::error::CatalogError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Records are immutable for the life of the process; optional fields that
/// are absent in the source data stay `None` and are treated as
/// non-matching / non-comparable by the pipelines rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category name (flat, single-valued).
    pub category: String,
    /// Brand, if known.
    #[serde(default)]
    pub brand: Option<String>,
    /// Unit price (non-negative).
    #[serde(default)]
    pub price: f64,
    /// Pre-promotion price, present while the product is on promotion.
    #[serde(default)]
    pub compare_at_price: Option<f64>,
    /// Average customer rating, 0 to 5.
    #[serde(default)]
    pub rating: f64,
    /// Units sold; drives the best-selling sort.
    #[serde(default)]
    pub sold: u64,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Unix timestamp of creation; drives the newest sort.
    #[serde(default)]
    pub created_at: i64,
}

impl Product {
    /// Create a product with the required fields.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            brand: None,
            price,
            compare_at_price: None,
            rating: 0.0,
            sold: 0,
            description: None,
            created_at: 0,
        }
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Set the units-sold counter.
    pub fn with_sold(mut self, sold: u64) -> Self {
        self.sold = sold;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the creation timestamp.
    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self
    }

    /// Set the pre-promotion price.
    pub fn with_compare_at_price(mut self, compare_at_price: f64) -> Self {
        self.compare_at_price = Some(compare_at_price);
        self
    }

    /// Check whether the product is currently on promotion.
    pub fn is_on_promotion(&self) -> bool {
        self.compare_at_price
            .map(|cap| cap > self.price)
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on promotion.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.compare_at_price.and_then(|cap| {
            if cap > self.price && cap > 0.0 {
                Some((cap - self.price) / cap * 100.0)
            } else {
                None
            }
        })
    }

    /// Validate the invariants the pipelines rely on.
    ///
    /// The negated comparisons also reject NaN values smuggled in through
    /// hand-written catalog data.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !(self.price >= 0.0) {
            return Err(CatalogError::InvalidPrice {
                id: self.id.as_str().to_string(),
                price: self.price,
            });
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(CatalogError::InvalidRating {
                id: self.id.as_str().to_string(),
                rating: self.rating,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new("p-01", "Panadol Extra 500mg", "Pain Relief", 4.5);
        assert_eq!(product.id.as_str(), "p-01");
        assert_eq!(product.name, "Panadol Extra 500mg");
        assert!(product.brand.is_none());
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_product_on_promotion() {
        let product = Product::new("p-02", "Vitamin C 1000mg", "Vitamin", 8.0)
            .with_compare_at_price(10.0);

        assert!(product.is_on_promotion());
        let discount = product.discount_percentage().unwrap();
        assert!((discount - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_at_price_below_price_is_not_a_promotion() {
        let product = Product::new("p-03", "Zinc Tablets", "Vitamin", 12.0)
            .with_compare_at_price(9.0);

        assert!(!product.is_on_promotion());
        assert!(product.discount_percentage().is_none());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let product = Product::new("p-04", "Broken", "Misc", -1.0);
        assert!(matches!(
            product.validate(),
            Err(CatalogError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_rating() {
        let product = Product::new("p-05", "Broken", "Misc", 1.0).with_rating(5.5);
        assert!(matches!(
            product.validate(),
            Err(CatalogError::InvalidRating { .. })
        ));
    }

    #[test]
    fn test_deserialize_defaults_missing_optionals() {
        let json = r#"{"id": 7, "name": "Gauze Roll", "category": "First Aid"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id.as_str(), "7");
        assert!(product.brand.is_none());
        assert_eq!(product.price, 0.0);
        assert_eq!(product.sold, 0);
    }
}
