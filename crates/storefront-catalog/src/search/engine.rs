//! Catalog search over products and posts.

use crate::catalog::{CatalogStore, Post, Product};
use crate::ids::ProductId;
use crate::search::results::SearchHits;
use crate::search::sort::{sort_products, SortKey};
use crate::search::text::matches;

/// Search the product table.
///
/// A product matches when any one searchable field satisfies the keyword
/// matcher (field-level OR): name, id, brand, category, description. An
/// empty or whitespace-only query returns no results.
pub fn search_products(store: &dyn CatalogStore, query: &str) -> Vec<Product> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let hits: Vec<Product> = store
        .products()
        .iter()
        .filter(|product| product_matches(product, query))
        .cloned()
        .collect();
    tracing::debug!(query, hits = hits.len(), "product search");
    hits
}

fn product_matches(product: &Product, query: &str) -> bool {
    matches(&product.name, query)
        || matches(product.id.as_str(), query)
        || product
            .brand
            .as_deref()
            .map(|brand| matches(brand, query))
            .unwrap_or(false)
        || matches(&product.category, query)
        || product
            .description
            .as_deref()
            .map(|description| matches(description, query))
            .unwrap_or(false)
}

/// Search the post table.
///
/// A post matches on title, category, any tag, excerpt, or the bounded
/// content preview.
pub fn search_posts(store: &dyn CatalogStore, query: &str) -> Vec<Post> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let hits: Vec<Post> = store
        .posts()
        .iter()
        .filter(|post| post_matches(post, query))
        .cloned()
        .collect();
    tracing::debug!(query, hits = hits.len(), "post search");
    hits
}

fn post_matches(post: &Post, query: &str) -> bool {
    matches(&post.title, query)
        || matches(&post.category, query)
        || post.tags.iter().any(|tag| matches(tag, query))
        || post
            .excerpt
            .as_deref()
            .map(|excerpt| matches(excerpt, query))
            .unwrap_or(false)
        || post
            .content_preview()
            .map(|preview| matches(&preview, query))
            .unwrap_or(false)
}

/// Search products and posts and combine the results.
///
/// The two searches are independent; products and posts are never
/// deduplicated against each other.
pub fn search_all(store: &dyn CatalogStore, query: &str) -> SearchHits {
    let products = search_products(store, query);
    let posts = search_posts(store, query);
    let total = products.len() + posts.len();

    SearchHits {
        products,
        posts,
        total,
    }
}

/// Look up a single product by id.
pub fn find_product(store: &dyn CatalogStore, id: &ProductId) -> Option<Product> {
    store.products().iter().find(|p| p.id == *id).cloned()
}

/// Products from the same category as `id`, best sellers first.
///
/// The subject product itself is excluded. Unknown ids yield an empty list.
pub fn related_products(store: &dyn CatalogStore, id: &ProductId, limit: usize) -> Vec<Product> {
    let Some(subject) = find_product(store, id) else {
        return Vec::new();
    };

    let same_category: Vec<Product> = store
        .products()
        .iter()
        .filter(|p| p.id != *id && p.category == subject.category)
        .cloned()
        .collect();

    let mut related = sort_products(&same_category, SortKey::BestSelling);
    related.truncate(limit);
    related
}

/// Products currently on promotion, best sellers first.
pub fn promotions(store: &dyn CatalogStore) -> Vec<Product> {
    let on_promotion: Vec<Product> = store
        .products()
        .iter()
        .filter(|p| p.is_on_promotion())
        .cloned()
        .collect();
    sort_products(&on_promotion, SortKey::BestSelling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;

    fn fixture() -> InMemoryCatalog {
        InMemoryCatalog::new(
            vec![
                Product::new("p-01", "Panadol Extra 500mg", "Pain Relief", 4.5)
                    .with_brand("Panadol")
                    .with_sold(300)
                    .with_description("Fast-acting paracetamol with caffeine"),
                Product::new("p-02", "Vitamin C 1000mg", "Vitamin", 8.0)
                    .with_brand("Nature Made")
                    .with_sold(500),
                Product::new("p-03", "Vitamin D3 2000IU", "Vitamin", 12.5)
                    .with_sold(120)
                    .with_compare_at_price(15.0),
                Product::new(
                    "p-04",
                    "Effervescent Multivitamin",
                    "Vitamin",
                    9.0,
                )
                .with_sold(80)
                .with_compare_at_price(11.0),
            ],
            vec![
                Post::new("t1", "Winter Immunity Guide", "Wellness")
                    .with_tags(vec!["vitamin".to_string(), "immunity".to_string()])
                    .with_excerpt("Stocking up on vitamin C for the cold season"),
                Post::new("t2", "Headache Myths", "Health")
                    .with_content(format!("{} paracetamol appears late", "x".repeat(600))),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let catalog = fixture();
        assert!(search_products(&catalog, "").is_empty());
        assert!(search_products(&catalog, "   ").is_empty());
        assert!(search_posts(&catalog, "").is_empty());
        assert!(search_all(&catalog, "").is_empty());
    }

    #[test]
    fn test_search_by_name() {
        let catalog = fixture();
        let hits = search_products(&catalog, "panadol");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "p-01");
    }

    #[test]
    fn test_search_by_id_and_description() {
        let catalog = fixture();
        assert_eq!(search_products(&catalog, "p-02").len(), 1);
        assert_eq!(search_products(&catalog, "caffeine").len(), 1);
    }

    #[test]
    fn test_and_semantics_within_a_field() {
        let catalog = fixture();
        // Both keywords live in the name of p-02 only.
        let hits = search_products(&catalog, "vitamin 1000");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "p-02");

        assert!(search_products(&catalog, "vitamin 9999").is_empty());
    }

    #[test]
    fn test_keywords_do_not_match_across_fields() {
        let catalog = fixture();
        // "panadol" is in the name, "relief" in the category; no single
        // field contains both.
        assert!(search_products(&catalog, "panadol relief").is_empty());
    }

    #[test]
    fn test_post_tag_and_excerpt_search() {
        let catalog = fixture();
        let hits = search_posts(&catalog, "immunity");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "t1");

        assert_eq!(search_posts(&catalog, "cold season").len(), 1);
    }

    #[test]
    fn test_post_content_search_is_bounded() {
        let catalog = fixture();
        // "paracetamol" sits past the 500-character preview of t2.
        assert!(search_posts(&catalog, "paracetamol").is_empty());
    }

    #[test]
    fn test_search_all_counts_both_tables() {
        let catalog = fixture();
        let hits = search_all(&catalog, "vitamin");
        assert_eq!(hits.products.len(), 3);
        assert_eq!(hits.posts.len(), 1);
        assert_eq!(hits.total, 4);
    }

    #[test]
    fn test_find_product() {
        let catalog = fixture();
        assert!(find_product(&catalog, &ProductId::new("p-03")).is_some());
        assert!(find_product(&catalog, &ProductId::new("missing")).is_none());
    }

    #[test]
    fn test_related_products() {
        let catalog = fixture();
        let related = related_products(&catalog, &ProductId::new("p-02"), 10);

        assert!(related.iter().all(|p| p.category == "Vitamin"));
        assert!(related.iter().all(|p| p.id.as_str() != "p-02"));
        // Best-selling first.
        assert_eq!(related[0].id.as_str(), "p-03");

        assert_eq!(related_products(&catalog, &ProductId::new("p-02"), 1).len(), 1);
        assert!(related_products(&catalog, &ProductId::new("missing"), 10).is_empty());
    }

    #[test]
    fn test_promotions_feed() {
        let catalog = fixture();
        let promos = promotions(&catalog);

        assert_eq!(promos.len(), 2);
        assert!(promos.iter().all(|p| p.is_on_promotion()));
        // p-03 outsells p-04.
        assert_eq!(promos[0].id.as_str(), "p-03");
    }
}
