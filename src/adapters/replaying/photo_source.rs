//! Replaying adapter for the `PhotoSource` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::PosterError;
use crate::ports::photo_source::{
    FetchFuture, FetchedPhoto, PhotoDescriptor, PhotoSource, SearchFuture, SearchRequest,
};

/// Serves recorded photo source results from a cassette.
pub struct ReplayingPhotoSource {
    replayer: Option<Arc<Mutex<CassetteReplayer>>>,
}

impl ReplayingPhotoSource {
    /// Create a replaying source backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer: Some(replayer) }
    }
}

impl PhotoSource for ReplayingPhotoSource {
    fn search(&self, _request: &SearchRequest) -> SearchFuture<'_> {
        let output = next_output(self.replayer.as_ref(), "photo_source", "search");
        Box::pin(async move {
            replay_result::<Vec<PhotoDescriptor>>(output)
                .map_err(|e| PosterError::Api { status: 0, message: e.to_string() })
        })
    }

    fn fetch(&self, _url: &str) -> FetchFuture<'_> {
        let output = next_output(self.replayer.as_ref(), "photo_source", "fetch");
        Box::pin(async move {
            replay_result::<FetchedPhoto>(output)
                .map_err(|e| PosterError::Api { status: 0, message: e.to_string() })
        })
    }
}
