//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// API key configuration.
    #[serde(default)]
    pub keys: KeysConfig,

    /// Visual style of the composed poster.
    #[serde(default)]
    pub style: StyleConfig,

    /// Photo search parameters.
    #[serde(default)]
    pub search: SearchConfig,

    /// Optional footer bar with logo and call to action.
    #[serde(default)]
    pub footer: Option<FooterConfig>,
}

/// API key configuration.
#[derive(Debug, Default, Deserialize)]
pub struct KeysConfig {
    /// Pexels API key.
    pub pexels: Option<String>,
}

/// Visual style: dimensions, colors, and font assets.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Output edge length in pixels; the poster is always square.
    #[serde(default = "default_size")]
    pub size: u32,
    /// Tint color as `#rrggbb`.
    #[serde(default = "default_tint")]
    pub tint: String,
    /// Tint opacity, 0 (invisible) to 255 (solid).
    #[serde(default = "default_tint_alpha")]
    pub tint_alpha: u8,
    /// Title panel color as `#rrggbb`, or absent for no panel.
    #[serde(default = "default_panel")]
    pub panel: Option<String>,
    /// Text color as `#rrggbb`.
    #[serde(default = "default_text_color")]
    pub text: String,
    /// Font used for the event name.
    #[serde(default = "default_title_font")]
    pub title_font: PathBuf,
    /// Font used for the remaining fields.
    #[serde(default = "default_body_font")]
    pub body_font: PathBuf,
    /// Event name size in pixels at the default 1080 edge.
    #[serde(default = "default_title_size")]
    pub title_size: f32,
    /// Body text size in pixels at the default 1080 edge.
    #[serde(default = "default_body_size")]
    pub body_size: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            tint: default_tint(),
            tint_alpha: default_tint_alpha(),
            panel: default_panel(),
            text: default_text_color(),
            title_font: default_title_font(),
            body_font: default_body_font(),
            title_size: default_title_size(),
            body_size: default_body_size(),
        }
    }
}

/// Photo search parameters passed to the photo source.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Results requested per page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Requested photo orientation.
    #[serde(default = "default_orientation")]
    pub orientation: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { per_page: default_per_page(), orientation: default_orientation() }
    }
}

/// Footer bar configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FooterConfig {
    /// Call-to-action line (e.g., `"Reserva tu lugar:"`).
    pub cta: String,
    /// Link line rendered below the call to action.
    pub link: String,
    /// Optional logo image placed on the left of the bar.
    pub logo: Option<PathBuf>,
}

fn default_size() -> u32 {
    1080
}

fn default_tint() -> String {
    "#003399".to_string()
}

fn default_tint_alpha() -> u8 {
    128
}

fn default_panel() -> Option<String> {
    Some("#0052CC".to_string())
}

fn default_text_color() -> String {
    "#FFFFFF".to_string()
}

fn default_title_font() -> PathBuf {
    assets_dir().join("DejaVuSans-Bold.ttf")
}

fn default_body_font() -> PathBuf {
    assets_dir().join("DejaVuSans.ttf")
}

fn default_title_size() -> f32 {
    72.0
}

fn default_body_size() -> f32 {
    48.0
}

fn default_per_page() -> u32 {
    15
}

fn default_orientation() -> String {
    "square".to_string()
}

/// Directory holding the bundled fonts. `POSTERGEN_ASSETS` overrides the
/// compile-time location so installed binaries can relocate them.
fn assets_dir() -> PathBuf {
    std::env::var("POSTERGEN_ASSETS").map_or_else(
        |_| Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/fonts"),
        PathBuf::from,
    )
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Get the Pexels API key, preferring environment variable.
    #[must_use]
    pub fn pexels_key(&self) -> Option<String> {
        std::env::var("PEXELS_API_KEY").ok().or_else(|| self.keys.pexels.clone())
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `POSTERGEN_CONFIG` environment variable
/// 3. `~/.config/postergen/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("POSTERGEN_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/postergen/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/postergen/config.toml")
    } else {
        PathBuf::from("postergen.toml")
    }
}
