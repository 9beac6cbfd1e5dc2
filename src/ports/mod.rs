//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system. Implementations live in `src/adapters/`.

pub mod photo_source;

pub use photo_source::{PhotoSource, SearchRequest};
