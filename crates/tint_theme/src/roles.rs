//! Semantic color roles and their fallbacks

use std::fmt;

use tint_color::is_valid_hex;

use crate::config::ThemeConfig;

/// Primary brand color when the record has none
pub const DEFAULT_PRIMARY: &str = "#10B981";
/// Accent color when the record has none
pub const DEFAULT_ACCENT: &str = "#059669";
/// Body text color when the record has none
pub const DEFAULT_TEXT: &str = "#0f172a";
/// Page background color when the record has none
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Semantic color role keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Text,
    Background,
}

impl ColorRole {
    /// Stable role id for logs and output
    pub fn id(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Text => "text",
            Self::Background => "background",
        }
    }

    /// All roles in resolution order
    pub fn all() -> &'static [ColorRole] {
        const ROLES: [ColorRole; 5] = [
            ColorRole::Primary,
            ColorRole::Secondary,
            ColorRole::Accent,
            ColorRole::Text,
            ColorRole::Background,
        ];
        &ROLES
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The five resolved theme colors
///
/// Every role always has a value. Each is resolved independently:
///
/// | Role       | Taken from                      | Otherwise              |
/// |------------|---------------------------------|------------------------|
/// | primary    | `primaryColor`, `primary`       | [`DEFAULT_PRIMARY`]    |
/// | secondary  | `secondaryColor`, `secondary`   | the resolved primary   |
/// | accent     | `accentColor`                   | [`DEFAULT_ACCENT`]     |
/// | text       | `textColor`                     | [`DEFAULT_TEXT`]       |
/// | background | `backgroundColor`               | [`DEFAULT_BACKGROUND`] |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeRoles {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub background: String,
}

impl ThemeRoles {
    /// Resolve every role from a theme record.
    ///
    /// Malformed hex values are kept as given (the color math degrades them
    /// rather than failing) but logged so a bad record is visible.
    pub fn resolve(config: &ThemeConfig) -> Self {
        let primary = config.primary().unwrap_or(DEFAULT_PRIMARY).to_string();
        let secondary = config
            .secondary()
            .map_or_else(|| primary.clone(), str::to_string);

        let roles = Self {
            secondary,
            accent: config.accent().unwrap_or(DEFAULT_ACCENT).to_string(),
            text: config.text().unwrap_or(DEFAULT_TEXT).to_string(),
            background: config
                .background()
                .unwrap_or(DEFAULT_BACKGROUND)
                .to_string(),
            primary,
        };

        for &role in ColorRole::all() {
            let value = roles.get(role);
            if !is_valid_hex(value) {
                tracing::warn!(
                    role = role.id(),
                    value,
                    "theme color is not a #RGB/#RRGGBB value; using it as-is"
                );
            }
        }

        roles
    }

    /// Get a color by role
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Accent => &self.accent,
            ColorRole::Text => &self.text,
            ColorRole::Background => &self.background,
        }
    }
}

impl Default for ThemeRoles {
    fn default() -> Self {
        Self::resolve(&ThemeConfig::default())
    }
}
