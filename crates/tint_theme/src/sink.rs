//! Style sinks - where computed theme values are written
//!
//! The app owns the real styling environment (a document root, a webview,
//! a generated stylesheet). The theme engine only sees it through
//! [`StyleSink`], so it can be driven against an in-memory map in tests.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::SinkError;

/// A target that accepts named style variables and document colors
pub trait StyleSink {
    /// Set a custom property such as `--primary-500`
    fn set_variable(&mut self, name: &str, value: &str) -> Result<(), SinkError>;

    /// Set the document-wide foreground (text) and background colors
    fn set_body_colors(&mut self, foreground: &str, background: &str) -> Result<(), SinkError>;
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn set_variable(&mut self, name: &str, value: &str) -> Result<(), SinkError> {
        (**self).set_variable(name, value)
    }

    fn set_body_colors(&mut self, foreground: &str, background: &str) -> Result<(), SinkError> {
        (**self).set_body_colors(foreground, background)
    }
}

/// Document foreground/background pair
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BodyColors {
    pub foreground: String,
    pub background: String,
}

/// In-memory sink that renders to CSS or JSON
///
/// Variables keep the order of their first write; writing a name again
/// replaces the value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CssVariableMap {
    variables: IndexMap<String, String>,
    body: Option<BodyColors>,
}

impl CssVariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a variable (name includes the `--` prefix)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// All variables in first-write order
    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn body_colors(&self) -> Option<&BodyColors> {
        self.body.as_ref()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.body.is_none()
    }

    /// Remove every variable and the body colors
    pub fn clear(&mut self) {
        self.variables.clear();
        self.body = None;
    }

    /// Render as a stylesheet: a `:root` rule with the variables and a
    /// `body` rule with the document colors
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Render as `{ "variables": {..}, "body": {..} }`
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "variables": self.variables,
            "body": self.body,
        })
    }
}

impl StyleSink for CssVariableMap {
    fn set_variable(&mut self, name: &str, value: &str) -> Result<(), SinkError> {
        if !name.starts_with("--") || name.len() == 2 {
            return Err(SinkError::Rejected {
                name: name.to_string(),
                reason: "custom property names must start with `--`".to_string(),
            });
        }
        self.variables.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_body_colors(&mut self, foreground: &str, background: &str) -> Result<(), SinkError> {
        self.body = Some(BodyColors {
            foreground: foreground.to_string(),
            background: background.to_string(),
        });
        Ok(())
    }
}

impl fmt::Display for CssVariableMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ":root {{")?;
        for (name, value) in &self.variables {
            writeln!(f, "  {name}: {value};")?;
        }
        writeln!(f, "}}")?;

        if let Some(body) = &self.body {
            writeln!(f)?;
            writeln!(f, "body {{")?;
            writeln!(f, "  color: {};", body.foreground)?;
            writeln!(f, "  background-color: {};", body.background)?;
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}

/// Sink for when there is no styling environment (headless boot, server
/// rendering). Every write fails with [`SinkError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedSink;

impl StyleSink for DetachedSink {
    fn set_variable(&mut self, _name: &str, _value: &str) -> Result<(), SinkError> {
        Err(SinkError::Unavailable)
    }

    fn set_body_colors(&mut self, _foreground: &str, _background: &str) -> Result<(), SinkError> {
        Err(SinkError::Unavailable)
    }
}
