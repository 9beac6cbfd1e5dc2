//! Service context that bundles all port trait objects.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::live::pexels::PexelsSource;
use crate::adapters::recording::photo_source::RecordingPhotoSource;
use crate::adapters::replaying::photo_source::ReplayingPhotoSource;
use crate::cassette::config::load_cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::config::Config;
use crate::error::PosterError;
use crate::ports::PhotoSource;

/// Bundles all port trait objects into a single context.
pub struct ServiceContext {
    /// Photo source port.
    pub source: Box<dyn PhotoSource>,
}

/// Handle to a recording session that must be finished after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Finish the recording and write cassette files to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<std::path::PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapter still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl ServiceContext {
    /// Create a live context backed by the Pexels API.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured.
    pub fn live(config: &Config) -> Result<Self, PosterError> {
        let key = config.pexels_key().ok_or(PosterError::MissingApiKey)?;
        Ok(Self { source: Box::new(PexelsSource::new(key)) })
    }

    /// Create a recording context that wraps the live adapter with a recorder.
    ///
    /// # Errors
    ///
    /// Returns an error if the recording session cannot be initialized.
    pub fn recording(config: &Config) -> Result<(Self, RecordingSession), PosterError> {
        let live_ctx = Self::live(config)?;

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_dir = std::path::PathBuf::from(".postergen/cassettes").join(&timestamp);

        let commit = get_commit_hash();
        let path = output_dir.join("photo_source.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            format!("{timestamp}-photo_source"),
            &commit,
        )));

        let recording_source = RecordingPhotoSource::new(live_ctx.source, Arc::clone(&recorder));

        let ctx = Self { source: Box::new(recording_source) };
        let session = RecordingSession { recorder };

        Ok((ctx, session))
    }

    /// Create a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be loaded.
    pub fn replaying(path: &Path) -> Result<Self, PosterError> {
        let replayer = load_cassette(path)
            .map_err(|e| PosterError::Config(format!("Failed to load cassette: {e}")))?;
        let replayer = Arc::new(Mutex::new(replayer));
        let source = Box::new(ReplayingPhotoSource::new(replayer));
        Ok(Self { source })
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}
