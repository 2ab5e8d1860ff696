use serde::{Deserialize, Serialize};

/// An image or file attached to a post, as listed in a page's `included` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub id: Option<String>,
    pub height: u64,
    pub width: u64,
    pub url: Option<String>,
    pub mimetype: Option<String>,
}

impl Media {
    /// Downloadable media: both dimensions set and a non-empty url and mimetype.
    pub fn is_valid(&self) -> bool {
        self.height > 0 && self.width > 0 && non_empty(self.url.as_deref()) && non_empty(self.mimetype.as_deref())
    }
}

fn non_empty(s: Option<&str>) -> bool { s.is_some_and(|s| !s.is_empty()) }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub media: Vec<Media>,
    pub current_user_can_view: bool,
}

impl Post {
    pub fn has_media(&self) -> bool { !self.media.is_empty() }
}

/// One page of a post listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub posts: Vec<Post>,
    pub cursor_next: Option<String>,
    // None when the response carried no `meta.pagination.total`
    pub total_posts: Option<u64>,
}

impl Default for Page {
    fn default() -> Self {
        Self { posts: Vec::new(), cursor_next: None, total_posts: Some(0) }
    }
}

impl Page {
    pub fn total(&self) -> u64 { self.total_posts.unwrap_or(0) }

    pub fn has_next(&self) -> bool { self.cursor_next.is_some() }

    /// Urls of every attached media, in post order.
    pub fn media_urls(&self) -> impl Iterator<Item = &str> + '_ {
        self.posts
            .iter()
            .flat_map(|p| p.media.iter())
            .filter_map(|m| m.url.as_deref())
    }
}
