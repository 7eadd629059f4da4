//! # Image Source Resolution
//!
//! The catalog is loose about image payloads: a product may carry a raw
//! base64-encoded image, a complete `data:` URI, or an absolute URL. The view
//! layer needs exactly one renderable string per product, so resolution lives
//! here as a pure function.
//!
//! ## Resolution Table
//! ```text
//! ┌──────────────────────────────┬──────────────────────────────────────┐
//! │ Payload                      │ Resolved source                      │
//! ├──────────────────────────────┼──────────────────────────────────────┤
//! │ None / ""                    │ /placeholder.png                     │
//! │ "data:image/png;base64,..."  │ unchanged                            │
//! │ "https://cdn/..." or http    │ unchanged                            │
//! │ "iVBORw0KGgo..." (base64)    │ data:image/jpeg;base64,iVBORw0KGgo…  │
//! └──────────────────────────────┴──────────────────────────────────────┘
//! ```
//!
//! Invariant: the result is always renderable; there is no error path.

use crate::{DEFAULT_IMAGE_MIME, PLACEHOLDER_IMAGE};

/// Resolves an optional image payload to a renderable source string.
///
/// Raw base64 payloads are wrapped with [`DEFAULT_IMAGE_MIME`]; use
/// [`resolve_image_source_with_mime`] when the catalog supplies a type hint.
pub fn resolve_image_source(payload: Option<&str>) -> String {
    resolve_image_source_with_mime(payload, DEFAULT_IMAGE_MIME)
}

/// Resolves an optional image payload using an explicit MIME type for raw
/// base64 data.
pub fn resolve_image_source_with_mime(payload: Option<&str>, mime: &str) -> String {
    match payload {
        None => PLACEHOLDER_IMAGE.to_string(),
        Some(data) if data.is_empty() => PLACEHOLDER_IMAGE.to_string(),
        Some(data) if data.starts_with("data:") || data.starts_with("http") => data.to_string(),
        Some(data) => format!("data:{mime};base64,{data}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_payload_falls_back_to_placeholder() {
        assert_eq!(resolve_image_source(None), PLACEHOLDER_IMAGE);
        assert_eq!(resolve_image_source(Some("")), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_data_uri_passes_through() {
        let uri = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(resolve_image_source(Some(uri)), uri);
    }

    #[test]
    fn test_absolute_url_passes_through() {
        let http = "http://cdn.example.com/p.jpg";
        let https = "https://cdn.example.com/p.jpg";
        assert_eq!(resolve_image_source(Some(http)), http);
        assert_eq!(resolve_image_source(Some(https)), https);
    }

    #[test]
    fn test_raw_base64_becomes_data_uri() {
        assert_eq!(
            resolve_image_source(Some("iVBORw0KGgo=")),
            "data:image/jpeg;base64,iVBORw0KGgo="
        );
    }

    #[test]
    fn test_explicit_mime_is_honored() {
        assert_eq!(
            resolve_image_source_with_mime(Some("AAAA"), "image/png"),
            "data:image/png;base64,AAAA"
        );
    }
}
