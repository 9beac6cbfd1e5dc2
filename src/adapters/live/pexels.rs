//! Live adapter for the Pexels photo search API.

use reqwest::Client;
use serde::Deserialize;

use crate::error::PosterError;
use crate::ports::photo_source::{
    FetchFuture, FetchedPhoto, PhotoDescriptor, PhotoSource, SearchFuture, SearchRequest,
};

const PEXELS_SEARCH_URL: &str = "https://api.pexels.com/v1/search";

/// Live photo source backed by the Pexels search API.
pub struct PexelsSource {
    client: Client,
    api_key: String,
}

impl PexelsSource {
    /// Create a new Pexels source with the given API key.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self { client: Client::new(), api_key }
    }
}

impl PhotoSource for PexelsSource {
    fn search(&self, request: &SearchRequest) -> SearchFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let per_page = request.per_page.to_string();
            let page = request.page.to_string();
            let response = self
                .client
                .get(PEXELS_SEARCH_URL)
                .header("Authorization", &self.api_key)
                .query(&[
                    ("query", request.query.as_str()),
                    ("per_page", per_page.as_str()),
                    ("page", page.as_str()),
                    ("orientation", request.orientation.as_str()),
                ])
                .send()
                .await?;

            let status = response.status();
            let response_text = response.text().await?;

            if !status.is_success() {
                return Err(PosterError::Api { status: status.as_u16(), message: response_text });
            }

            let parsed: PexelsSearchResponse =
                serde_json::from_str(&response_text).map_err(|e| PosterError::Api {
                    status: 200,
                    message: format!("Failed to parse response: {e}"),
                })?;

            Ok(parsed
                .photos
                .into_iter()
                .map(|p| PhotoDescriptor { url: p.src.original, width: p.width, height: p.height })
                .collect())
        })
    }

    fn fetch(&self, url: &str) -> FetchFuture<'_> {
        let url = url.to_string();
        Box::pin(async move {
            let response = self.client.get(&url).send().await?;

            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(PosterError::Api { status: status.as_u16(), message });
            }

            let mime_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("image/jpeg")
                .to_string();
            let data = response.bytes().await?.to_vec();

            Ok(FetchedPhoto { data, mime_type })
        })
    }
}

// --- Pexels API response types ---

#[derive(Deserialize)]
struct PexelsSearchResponse {
    #[serde(default)]
    photos: Vec<PexelsPhoto>,
}

#[derive(Deserialize)]
struct PexelsPhoto {
    width: u32,
    height: u32,
    src: PexelsSrc,
}

#[derive(Deserialize)]
struct PexelsSrc {
    original: String,
}
