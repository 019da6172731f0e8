//! Sort strategies for product listings.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CatalogError;

/// Named sort orders a listing page can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Units sold, high to low.
    #[default]
    BestSelling,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Rating, high to low.
    RatingDesc,
    /// Most recently added first.
    Newest,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::BestSelling => "bestselling",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::RatingDesc => "rating_desc",
            SortKey::Newest => "newest",
        }
    }

    /// Parse a sort key name as it appears in query strings.
    pub fn parse(s: &str) -> Result<Self, CatalogError> {
        match s {
            "bestselling" => Ok(SortKey::BestSelling),
            "price_asc" => Ok(SortKey::PriceAsc),
            "price_desc" => Ok(SortKey::PriceDesc),
            "rating_desc" => Ok(SortKey::RatingDesc),
            "newest" => Ok(SortKey::Newest),
            other => Err(CatalogError::UnknownSortKey(other.to_string())),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::BestSelling => "Best Selling",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::RatingDesc => "Highest Rated",
            SortKey::Newest => "Newest Arrivals",
        }
    }
}

/// Return a newly ordered copy of `products`.
///
/// The underlying sort is stable, so items with equal keys keep their
/// original catalog order; callers can rely on deterministic output.
pub fn sort_products(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key));
    sorted
}

fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::BestSelling => b.sold.cmp(&a.sold),
        SortKey::PriceAsc => partial(a.price, b.price),
        SortKey::PriceDesc => partial(b.price, a.price),
        SortKey::RatingDesc => partial(b.rating, a.rating),
        SortKey::Newest => b.created_at.cmp(&a.created_at),
    }
}

// Non-comparable float keys (NaN from malformed data) order as equal, which
// keeps the sort total and falls back to catalog order.
fn partial(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
