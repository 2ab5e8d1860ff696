use serde_json::Value;
use tracing::{debug, trace};

use crate::error::PageError;
use crate::lookup::{get_array, get_str, get_u64, obj_get};
use crate::types::{Media, Page, Post};

type Result<T> = std::result::Result<T, PageError>;

fn require<'a>(obj: &'a Value, key: &str) -> Result<&'a Value> {
    obj.get(key).ok_or_else(|| PageError::missing(key))
}

fn require_str<'a>(obj: &'a Value, key: &str) -> Result<&'a str> {
    require(obj, key)?.as_str().ok_or_else(|| PageError::wrong_type(key, "a string"))
}

fn require_bool(obj: &Value, key: &str) -> Result<bool> {
    require(obj, key)?.as_bool().ok_or_else(|| PageError::wrong_type(key, "a boolean"))
}

fn require_array<'a>(obj: &'a Value, key: &str) -> Result<&'a Vec<Value>> {
    require(obj, key)?.as_array().ok_or_else(|| PageError::wrong_type(key, "an array"))
}

// `type` must be present; a non-string value matches no resource kind.
fn entry_type<'a>(entry: &'a Value, prefix: &str) -> Result<Option<&'a str>> {
    Ok(require(entry, "type").map_err(|e| e.within(prefix))?.as_str())
}

// Positive fractional sizes round up so they stay positive.
fn dimension(dimensions: &Value, key: &str) -> u64 {
    let Some(value) = obj_get(dimensions, key) else { return 0 };
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|f| *f > 0.0).map(|f| f.ceil() as u64))
        .unwrap_or(0)
}

/// Build a [`Media`] from one `included` entry. Every field is optional; missing
/// dimensions come out as 0 and leave the media invalid.
pub fn media_from_json(json: &Value) -> Media {
    let attributes = json.get("attributes").unwrap_or(&Value::Null);
    let dimensions = obj_get(attributes, "metadata.dimensions").unwrap_or(&Value::Null);
    let url = get_str(attributes, "download_url")
        .filter(|u| !u.is_empty())
        .or_else(|| get_str(attributes, "image_urls.original"));

    Media {
        id: json.get("id").and_then(Value::as_str).map(str::to_owned),
        height: dimension(dimensions, "h"),
        width: dimension(dimensions, "w"),
        url: url.map(str::to_owned),
        mimetype: get_str(attributes, "mimetype").map(str::to_owned),
    }
}

/// Build a [`Post`] from one `data` entry, attaching the candidates whose id is
/// listed in `attributes.post_metadata.image_order`.
///
/// Attached media keep the order of `candidates`, not the order of
/// `image_order`.
pub fn post_from_json(json: &Value, candidates: &[Media]) -> Result<Post> {
    let id = require_str(json, "id")?;
    let attributes = require(json, "attributes")?;
    if !attributes.is_object() {
        return Err(PageError::wrong_type("attributes", "an object"));
    }
    let title = require_str(attributes, "title").map_err(|e| e.within("attributes"))?;
    let current_user_can_view =
        require_bool(attributes, "current_user_can_view").map_err(|e| e.within("attributes"))?;

    let media_ids: Vec<&str> = get_array(attributes, "post_metadata.image_order")
        .map(|order| order.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    let media = candidates
        .iter()
        .filter(|m| m.id.as_deref().is_some_and(|id| media_ids.contains(&id)))
        .cloned()
        .collect();

    Ok(Post { id: id.to_owned(), title: title.to_owned(), media, current_user_can_view })
}

/// Assemble a [`Page`] from a decoded API response.
///
/// `data` and `included` are required; a single malformed post fails the whole
/// page.
pub fn page_from_json(json: &Value) -> Result<Page> {
    let data = require_array(json, "data")?;
    let included = require_array(json, "included")?;

    let mut received = Vec::new();
    for (i, entry) in included.iter().enumerate() {
        match entry_type(entry, &format!("included[{i}]"))? {
            Some("media") => received.push(media_from_json(entry)),
            other => trace!(index = i, kind = ?other, "skipping included entry"),
        }
    }
    let received_count = received.len();
    let media: Vec<Media> = received
        .into_iter()
        .filter(|m| {
            let valid = m.is_valid();
            if !valid {
                trace!(id = ?m.id, "dropping invalid media");
            }
            valid
        })
        .collect();

    let mut posts = Vec::new();
    for (i, entry) in data.iter().enumerate() {
        let prefix = format!("data[{i}]");
        match entry_type(entry, &prefix)? {
            Some("post") => posts.push(post_from_json(entry, &media).map_err(|e| e.within(&prefix))?),
            other => trace!(index = i, kind = ?other, "skipping data entry"),
        }
    }

    let cursor_next = get_str(json, "meta.pagination.cursors.next").map(str::to_owned);
    let total_posts = get_u64(json, "meta.pagination.total");
    debug!(
        posts = posts.len(),
        media_received = received_count,
        media_kept = media.len(),
        has_next = cursor_next.is_some(),
        "mapped page"
    );

    Ok(Page { posts, cursor_next, total_posts })
}
