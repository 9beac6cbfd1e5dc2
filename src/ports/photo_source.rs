//! Photo source port for stock-photo search APIs.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::PosterError;

/// A search request for background photos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text location/theme query.
    pub query: String,
    /// 1-based result page.
    pub page: u32,
    /// Results per page.
    pub per_page: u32,
    /// Requested orientation (e.g., `"square"`).
    pub orientation: String,
}

/// A candidate background photo returned by a search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoDescriptor {
    /// URL of the full-size photo.
    pub url: String,
    /// Pixel width of the full-size photo.
    pub width: u32,
    /// Pixel height of the full-size photo.
    pub height: u32,
}

/// A downloaded photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedPhoto {
    /// Raw image bytes.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    /// MIME type reported by the server (e.g., `"image/jpeg"`).
    pub mime_type: String,
}

/// Boxed future type returned by [`PhotoSource::search`].
pub type SearchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<PhotoDescriptor>, PosterError>> + Send + 'a>>;

/// Boxed future type returned by [`PhotoSource::fetch`].
pub type FetchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<FetchedPhoto, PosterError>> + Send + 'a>>;

/// Searches and downloads stock photos from an external service.
pub trait PhotoSource: Send + Sync {
    /// Search for photos matching the request. An empty result is not an
    /// error; callers decide how to react.
    fn search(&self, request: &SearchRequest) -> SearchFuture<'_>;

    /// Download the photo at `url`.
    fn fetch(&self, url: &str) -> FetchFuture<'_>;
}

/// Serde helper for serializing `Vec<u8>` as base64 strings in cassettes.
mod base64_bytes {
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize bytes as base64 string.
    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(data);
        serializer.serialize_str(&encoded)
    }

    /// Deserialize base64 string to bytes.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_serialization() {
        let request = SearchRequest {
            query: "central park".into(),
            page: 2,
            per_page: 15,
            orientation: "square".into(),
        };
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: SearchRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.query, "central park");
        assert_eq!(deserialized.page, 2);
        assert_eq!(deserialized.per_page, 15);
        assert_eq!(deserialized.orientation, "square");
    }

    #[test]
    fn photo_descriptor_serialization() {
        let descriptor =
            PhotoDescriptor { url: "https://example.com/p.jpg".into(), width: 1600, height: 900 };
        let json = serde_json::to_string(&descriptor).unwrap();
        let deserialized: PhotoDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.url, "https://example.com/p.jpg");
        assert_eq!(deserialized.width, 1600);
        assert_eq!(deserialized.height, 900);
    }

    #[test]
    fn fetched_photo_base64_round_trip() {
        let photo = FetchedPhoto {
            data: vec![0xFF, 0xD8, 0xFF, 0xE0], // JPEG magic bytes
            mime_type: "image/jpeg".into(),
        };
        let json = serde_json::to_string(&photo).unwrap();
        assert!(json.contains("/9j/"), "bytes should be base64 in the wire form");
        let deserialized: FetchedPhoto = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.data, vec![0xFF, 0xD8, 0xFF, 0xE0]);
        assert_eq!(deserialized.mime_type, "image/jpeg");
    }
}
