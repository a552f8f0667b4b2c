//! Theme configuration record
//!
//! The record comes from the remote theme service as loosely-typed JSON, so
//! decoding is forgiving: unknown fields are ignored and a color field
//! holding anything other than a string (number, object, null) reads as
//! absent instead of failing the whole record.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

/// Theme colors chosen by an administrator
///
/// `primaryColor` and `primary` (likewise `secondaryColor` and `secondary`)
/// are both accepted; when both are present the `*Color` field wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(
        default,
        deserialize_with = "lenient_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_color: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub primary: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub secondary_color: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub secondary: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub accent_color: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub text_color: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,
}

impl ThemeConfig {
    /// Empty record; every role falls back to its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a record from JSON
    pub fn from_json_str(src: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(src)?)
    }

    /// Decode a record as the theme endpoint serves it: a JSON object, or
    /// `null` when no theme has been configured yet
    pub fn from_json_record(src: &str) -> Result<Option<Self>, ConfigError> {
        Ok(serde_json::from_str(src)?)
    }

    /// Decode a record from TOML
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }

    /// First defined of `primaryColor`, `primary`
    pub fn primary(&self) -> Option<&str> {
        first_defined([&self.primary_color, &self.primary])
    }

    /// First defined of `secondaryColor`, `secondary`
    pub fn secondary(&self) -> Option<&str> {
        first_defined([&self.secondary_color, &self.secondary])
    }

    pub fn accent(&self) -> Option<&str> {
        first_defined([&self.accent_color])
    }

    pub fn text(&self) -> Option<&str> {
        first_defined([&self.text_color])
    }

    pub fn background(&self) -> Option<&str> {
        first_defined([&self.background_color])
    }

    pub fn with_primary_color(mut self, color: impl Into<String>) -> Self {
        self.primary_color = Some(color.into());
        self
    }

    pub fn with_secondary_color(mut self, color: impl Into<String>) -> Self {
        self.secondary_color = Some(color.into());
        self
    }

    pub fn with_accent_color(mut self, color: impl Into<String>) -> Self {
        self.accent_color = Some(color.into());
        self
    }

    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }
}

/// A field counts as defined when it holds a non-blank string
fn first_defined<'a>(fields: impl IntoIterator<Item = &'a Option<String>>) -> Option<&'a str> {
    fields
        .into_iter()
        .filter_map(Option::as_deref)
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// Keep string values, drop everything else
fn lenient_color<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Field>::deserialize(deserializer)? {
        Some(Field::Text(value)) => Some(value),
        Some(Field::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_camel_case_fields() {
        let config = ThemeConfig::from_json_str(
            r##"{
                "primaryColor": "#2563eb",
                "secondaryColor": "#1d4ed8",
                "accentColor": "#f59e0b",
                "textColor": "#111827",
                "backgroundColor": "#f9fafb"
            }"##,
        )
        .unwrap();

        assert_eq!(config.primary(), Some("#2563eb"));
        assert_eq!(config.secondary(), Some("#1d4ed8"));
        assert_eq!(config.accent(), Some("#f59e0b"));
        assert_eq!(config.text(), Some("#111827"));
        assert_eq!(config.background(), Some("#f9fafb"));
    }

    #[test]
    fn short_aliases_are_accepted() {
        let config =
            ThemeConfig::from_json_str(r##"{ "primary": "#ff0000", "secondary": "#00ff00" }"##)
                .unwrap();
        assert_eq!(config.primary(), Some("#ff0000"));
        assert_eq!(config.secondary(), Some("#00ff00"));
    }

    #[test]
    fn color_suffixed_field_wins_over_alias() {
        let config = ThemeConfig::from_json_str(
            r##"{ "primary": "#ff0000", "primaryColor": "#0000ff" }"##,
        )
        .unwrap();
        assert_eq!(config.primary(), Some("#0000ff"));
    }

    #[test]
    fn blank_field_falls_through_to_alias() {
        let config =
            ThemeConfig::from_json_str(r##"{ "primaryColor": "  ", "primary": "#abc" }"##)
                .unwrap();
        assert_eq!(config.primary(), Some("#abc"));
    }

    #[test]
    fn values_are_trimmed() {
        let config = ThemeConfig::new().with_text_color("  #222222 ");
        assert_eq!(config.text(), Some("#222222"));
    }

    #[test]
    fn non_string_values_read_as_absent() {
        let config = ThemeConfig::from_json_str(
            r##"{
                "primaryColor": 42,
                "accentColor": null,
                "textColor": { "r": 1 },
                "backgroundColor": ["#fff"],
                "secondary": "#123456"
            }"##,
        )
        .unwrap();

        assert_eq!(config.primary(), None);
        assert_eq!(config.accent(), None);
        assert_eq!(config.text(), None);
        assert_eq!(config.background(), None);
        assert_eq!(config.secondary(), Some("#123456"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = ThemeConfig::from_json_str(
            r##"{ "siteName": "Acme", "logoUrl": "/logo.png", "accentColor": "#059669" }"##,
        )
        .unwrap();
        assert_eq!(config, ThemeConfig::new().with_accent_color("#059669"));
    }

    #[test]
    fn parses_toml() {
        let config = ThemeConfig::from_toml_str(
            r##"
primaryColor = "#7c3aed"
textColor = "#1f2937"
"##,
        )
        .unwrap();
        assert_eq!(config.primary(), Some("#7c3aed"));
        assert_eq!(config.text(), Some("#1f2937"));
        assert_eq!(config.background(), None);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            ThemeConfig::from_json_str("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn null_record_is_absent() {
        assert_eq!(ThemeConfig::from_json_record("null").unwrap(), None);
        assert_eq!(ThemeConfig::from_json_record(" null \n").unwrap(), None);
        assert_eq!(
            ThemeConfig::from_json_record(r##"{ "accentColor": "#059669" }"##).unwrap(),
            Some(ThemeConfig::new().with_accent_color("#059669"))
        );
        assert_eq!(
            ThemeConfig::from_json_record("{}").unwrap(),
            Some(ThemeConfig::new())
        );
    }

    #[test]
    fn parse_errors_are_reported_once() {
        let err = ThemeConfig::from_json_str("{ not json").unwrap_err();
        let inner = serde_json::from_str::<ThemeConfig>("{ not json").unwrap_err();

        assert_eq!(err.to_string(), inner.to_string());
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn serializes_only_present_fields() {
        let config = ThemeConfig::new().with_primary_color("#10B981");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r##"{"primaryColor":"#10B981"}"##);
    }
}
