//! Post (article) records.

use crate::ids::PostId;
use serde::{Deserialize, Serialize};

/// How far into a post body the search looks.
///
/// Long articles are only matched against their first 500 characters; this
/// bounds matching cost per post and is part of the search contract.
pub const CONTENT_SEARCH_CHARS: usize = 500;

/// An article shown in the storefront's content feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    /// Unique post identifier.
    pub id: PostId,
    /// Article title.
    pub title: String,
    /// Category name.
    pub category: String,
    /// Tags for filtering/search.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Short summary shown in listings.
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Full article body.
    #[serde(default)]
    pub content: Option<String>,
    /// Unix timestamp of publication.
    #[serde(default)]
    pub created_at: i64,
}

impl Post {
    /// Create a post with the required fields.
    pub fn new(id: impl Into<PostId>, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            tags: Vec::new(),
            excerpt: None,
            content: None,
            created_at: 0,
        }
    }

    /// Set the tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the excerpt.
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    /// Set the body content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the publication timestamp.
    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self
    }

    /// The searchable prefix of the body: at most [`CONTENT_SEARCH_CHARS`]
    /// characters, `None` when the post has no body.
    pub fn content_preview(&self) -> Option<String> {
        self.content
            .as_ref()
            .map(|c| c.chars().take(CONTENT_SEARCH_CHARS).collect())
    }
}
