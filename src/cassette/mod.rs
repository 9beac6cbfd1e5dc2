//! Record/replay infrastructure for deterministic testing.
//!
//! A cassette captures every photo-source interaction of one run as YAML,
//! so later runs (and the integration tests) can replay them without any
//! network access.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
