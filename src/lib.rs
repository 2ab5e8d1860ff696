pub mod error;
pub mod lookup;
pub mod mapping;
pub mod types;

// --- Library API for embedding ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::error::PageError;
    pub use crate::types::{Media, Page, Post};
    pub use crate::{parse_page, page_from_value};
}

use serde_json::Value;

use crate::error::PageError;
use crate::types::Page;

/// Parse the raw body of one post-listing response into a [`Page`].
pub fn parse_page(body: &str) -> Result<Page, PageError> {
    let json: Value = serde_json::from_str(body)?;
    page_from_value(&json)
}

/// Build a [`Page`] from an already decoded response body.
pub fn page_from_value(json: &Value) -> Result<Page, PageError> {
    mapping::page_from_json(json)
}
