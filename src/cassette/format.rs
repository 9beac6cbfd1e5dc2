//! On-disk cassette format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded session: metadata plus the ordered interactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cassette {
    /// Human-readable cassette name.
    pub name: String,
    /// When the recording finished.
    pub recorded_at: DateTime<Utc>,
    /// Git commit the recording was made at, or `"unknown"`.
    pub commit: String,
    /// The recorded interactions, in call order.
    pub interactions: Vec<Interaction>,
}

/// One recorded port call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Position in the overall recording.
    pub seq: u64,
    /// Port name (e.g., `"photo_source"`).
    pub port: String,
    /// Method name (e.g., `"search"` or `"fetch"`).
    pub method: String,
    /// Serialized call input.
    pub input: serde_json::Value,
    /// Serialized call output, `{"Ok": …}` or `{"Err": …}`.
    pub output: serde_json::Value,
}
