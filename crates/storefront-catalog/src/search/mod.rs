//! Search and listing pipeline.
//!
//! Contains text matching, catalog search, faceted filters, sort strategies,
//! and pagination. Listing pages are thin configurations of this pipeline:
//! raw catalog -> filter (or search) -> sort -> paginate.

mod engine;
mod filter;
mod results;
mod sort;
mod text;

pub use engine::{
    find_product, promotions, related_products, search_all, search_posts, search_products,
};
pub use filter::{filter_products, FilterCriteria};
pub use results::{paginate, Pagination, ResultPage, SearchHits};
pub use sort::{sort_products, SortKey};
pub use text::{matches, normalize};
