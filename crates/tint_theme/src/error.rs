//! Theme error types

use thiserror::Error;

/// Failure reported by a [`StyleSink`](crate::StyleSink)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// No styling environment to write into
    #[error("no styling environment available")]
    Unavailable,

    /// The sink refused a specific variable
    #[error("variable `{name}` rejected: {reason}")]
    Rejected { name: String, reason: String },
}

/// Failure while writing a resolved theme to a sink
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeApplyError {
    /// Setting a style variable failed
    #[error("failed to set style variable `{name}`")]
    Variable {
        name: String,
        #[source]
        source: SinkError,
    },

    /// Setting the document foreground/background failed
    #[error("failed to set document colors")]
    BodyColors(#[source] SinkError),
}

/// Failure decoding a theme record
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
