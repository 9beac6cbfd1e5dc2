//! Output file naming and writing.

use std::path::{Path, PathBuf};

use crate::compose::EventFields;
use crate::error::PosterError;

/// Build the fixed output filename for one variant:
/// `event_<slug>_v<N>.png`, with the slug taken from the date, falling
/// back to the first line of the event name.
#[must_use]
pub fn poster_filename(fields: &EventFields, variant: u32) -> String {
    let base = if fields.date.trim().is_empty() {
        fields.event_name.lines().next().unwrap_or("")
    } else {
        fields.date.as_str()
    };
    let slug = sanitize_for_filename(base, 50);
    format!("event_{slug}_v{variant}.png")
}

/// Sanitize a string for use in a filename.
///
/// Converts to lowercase, replaces non-alphanumeric chars with hyphens,
/// collapses consecutive hyphens, and trims to max length.
#[must_use]
pub fn sanitize_for_filename(input: &str, max_len: usize) -> String {
    let mut result = String::with_capacity(max_len);
    let mut last_was_hyphen = true; // Prevents leading hyphen

    for ch in input.chars().take(max_len * 2) {
        if result.len() >= max_len {
            break;
        }
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            result.push('-');
            last_was_hyphen = true;
        }
    }

    // Trim trailing hyphen
    while result.ends_with('-') {
        result.pop();
    }

    if result.is_empty() {
        "event".to_string()
    } else {
        result
    }
}

/// Resolve the output path for variant `variant` of `total`.
///
/// An explicit path is used verbatim for a single variant; with multiple
/// variants a `_vN` suffix is inserted before the extension. Without an
/// explicit path the fixed [`poster_filename`] pattern applies.
#[must_use]
pub fn resolve_output_path(
    explicit: Option<&str>,
    fields: &EventFields,
    variant: u32,
    total: u32,
) -> PathBuf {
    match explicit {
        Some(p) if total == 1 => PathBuf::from(p),
        Some(p) => {
            let base = Path::new(p);
            let stem = base.file_stem().unwrap_or_default().to_string_lossy();
            let ext = base.extension().map_or_else(|| "png".into(), |e| e.to_string_lossy());
            base.with_file_name(format!("{stem}_v{variant}.{ext}"))
        }
        None => PathBuf::from(poster_filename(fields, variant)),
    }
}

/// Write finished PNG bytes to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_poster(data: &[u8], path: &Path) -> Result<(), PosterError> {
    std::fs::write(path, data).map_err(PosterError::Io)
}
