//! Theme record loading

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tint_theme::ThemeConfig;

/// Record format, picked from the file extension
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Toml,
}

impl RecordFormat {
    /// `.toml` files are TOML; everything else (including stdin) is JSON
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Load a theme record from a file, or from stdin when `path` is `-`.
///
/// A JSON `null` record means no theme is configured and loads as `None`.
pub fn load_theme_config(path: &Path) -> Result<Option<ThemeConfig>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read theme record from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
    };

    parse_theme_config(&content, RecordFormat::for_path(path))
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Decode a theme record in the given format
pub fn parse_theme_config(content: &str, format: RecordFormat) -> Result<Option<ThemeConfig>> {
    let config = match format {
        RecordFormat::Json => ThemeConfig::from_json_record(content)?,
        RecordFormat::Toml => Some(ThemeConfig::from_toml_str(content)?),
    };
    tracing::debug!(?format, present = config.is_some(), "loaded theme record");
    Ok(config)
}
