//! Tint Theme Engine
//!
//! Turns one administrator-supplied brand color into a complete set of
//! style variables, and writes them into whatever styling environment the
//! app renders with.
//!
//! # Overview
//!
//! - **Theme record**: [`ThemeConfig`], fetched by the app before the UI
//!   mounts (primary, secondary, accent, text and background colors)
//! - **Roles**: [`ThemeRoles`] resolves each color with a hard-coded
//!   fallback when the record leaves it out
//! - **Shade ramp**: [`generate_shades`] keeps the primary's hue and
//!   saturation and substitutes lightness steps
//! - **Weight slots**: ramp entries are bound to `50..900` and written as
//!   `--primary-<weight>`
//! - **Style sink**: [`StyleSink`] receives variables and the document's
//!   foreground/background colors
//!
//! # Quick Start
//!
//! ```rust
//! use tint_theme::{apply_theme, CssVariableMap, ThemeConfig};
//!
//! let config = ThemeConfig::from_json_str(r##"{ "primaryColor": "#2563eb" }"##)
//!     .unwrap_or_default();
//!
//! let mut sink = CssVariableMap::new();
//! apply_theme(Some(&config), &mut sink);
//!
//! assert!(sink.get("--primary-500").is_some());
//! assert_eq!(sink.get("--background-color"), Some("#ffffff"));
//! ```
//!
//! # Failure policy
//!
//! A broken theme must never keep the app from rendering. [`apply_theme`]
//! and [`ThemeApplier::apply`] log and swallow every failure;
//! [`ThemeApplier::try_apply`] returns the same failure as a
//! [`ThemeApplyError`] for callers (and tests) that want to inspect it.
//!
//! # Weight slot binding
//!
//! The reference step list has nine lightness targets for ten weight slots,
//! so `--primary-900` gets no binding from the ramp and is filled by the
//! convenience override instead. [`RampBinding::Extended`] adds a tenth
//! step so every slot binds directly.

mod apply;
mod config;
mod error;
mod ramp;
mod roles;
mod sink;

pub use apply::{apply_theme, ResolvedTheme, ThemeApplier};
pub use config::ThemeConfig;
pub use error::{ConfigError, SinkError, ThemeApplyError};
pub use ramp::{
    bind_slots, generate_shades, RampBinding, ShadeRamp, SlotBinding, EXTENDED_STEPS,
    PRIMARY_STEPS, WEIGHT_SLOTS,
};
pub use roles::{
    ColorRole, ThemeRoles, DEFAULT_ACCENT, DEFAULT_BACKGROUND, DEFAULT_PRIMARY, DEFAULT_TEXT,
};
pub use sink::{BodyColors, CssVariableMap, DetachedSink, StyleSink};
