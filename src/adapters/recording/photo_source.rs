//! Recording adapter for the `PhotoSource` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::photo_source::{FetchFuture, PhotoSource, SearchFuture, SearchRequest};

/// Records photo source interactions while delegating to an inner
/// implementation.
pub struct RecordingPhotoSource {
    inner: Box<dyn PhotoSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingPhotoSource {
    /// Creates a new recording source wrapping the given implementation.
    pub fn new(inner: Box<dyn PhotoSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl PhotoSource for RecordingPhotoSource {
    fn search(&self, request: &SearchRequest) -> SearchFuture<'_> {
        let request_clone = request.clone();
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.search(&request_clone).await;
            record_result(&recorder, "photo_source", "search", &request_clone, &result);
            result
        })
    }

    fn fetch(&self, url: &str) -> FetchFuture<'_> {
        let url = url.to_string();
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.fetch(&url).await;
            record_result(&recorder, "photo_source", "fetch", &url, &result);
            result
        })
    }
}
