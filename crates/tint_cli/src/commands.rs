//! Subcommand implementations
//!
//! Each command returns its stdout text so it can be tested without a
//! terminal.

use anyhow::{Context, Result};
use std::path::Path;
use tint_color::{hex_to_rgb, is_valid_hex};
use tint_theme::{generate_shades, CssVariableMap, RampBinding, ThemeApplier};

use crate::config::load_theme_config;

/// Output format for `tint apply`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Css,
    Json,
}

/// Slot binding mode as a CLI value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum BindingArg {
    /// Nine steps; `900` comes from the convenience override
    #[default]
    Reference,
    /// Ten steps; every weight slot binds directly
    Extended,
}

impl From<BindingArg> for RampBinding {
    fn from(arg: BindingArg) -> Self {
        match arg {
            BindingArg::Reference => RampBinding::Reference,
            BindingArg::Extended => RampBinding::Extended,
        }
    }
}

/// `tint apply`: load a theme record and render its style variables
pub fn apply(path: &Path, binding: RampBinding, format: OutputFormat) -> Result<String> {
    let config = load_theme_config(path)?;

    let mut sink = CssVariableMap::new();
    ThemeApplier::with_binding(binding).apply(config.as_ref(), &mut sink);
    tracing::info!(variables = sink.len(), binding = binding.id(), "theme applied");

    render(&sink, format)
}

/// Render a filled sink in the requested format
pub fn render(sink: &CssVariableMap, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Css => Ok(sink.to_css()),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&sink.to_json_value())
                .context("Failed to serialize style variables")?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// `tint shades`: one `<step>\t<hex>` line per ramp entry
pub fn shades(seed: &str, steps: &[f64]) -> String {
    warn_if_malformed(seed);

    let ramp = generate_shades(seed, steps);
    ramp.iter()
        .map(|(step, hex)| format!("{step}\t{hex}\n"))
        .collect()
}

/// `tint convert`: show the RGB and HSL readings of a hex color
pub fn convert(hex: &str) -> String {
    warn_if_malformed(hex);

    let rgb = hex_to_rgb(hex);
    let hsl = rgb.to_hsl();
    format!(
        "rgb  {}, {}, {}\nhsl  {hsl}\nhex  {}\n",
        rgb.r,
        rgb.g,
        rgb.b,
        hsl.to_hex()
    )
}

fn warn_if_malformed(hex: &str) {
    if !is_valid_hex(hex) {
        tracing::warn!(value = hex, "not a #RGB/#RRGGBB color; result will be degraded");
    }
}
