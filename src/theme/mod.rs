//! Theme selection and system theme detection.
//!
//! # Responsibilities
//! - Represent the effective theme ({light, dark}) used for rendering
//! - Detect the host system's color-scheme preference
//! - Fall back to a safe default when the preference cannot be resolved
//!
//! # Design Decisions
//! - The ambient system preference sits behind the `ThemeSource` trait so
//!   renderers take an explicit dependency and stay testable
//! - Detection errors and an unspecified preference both resolve to light
//! - `system` mode re-reads the preference on every call; a preference
//!   change is reflected on the next render

use serde::{Deserialize, Serialize};

/// Effective theme used when rendering the document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The theme name as it appears in icon URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configured theme behavior: pin a theme or follow the system preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Build the theme source for this mode.
    pub fn source(self) -> Box<dyn ThemeSource> {
        match self {
            ThemeMode::Light => Box::new(FixedThemeSource(Theme::Light)),
            ThemeMode::Dark => Box::new(FixedThemeSource(Theme::Dark)),
            ThemeMode::System => Box::new(SystemThemeSource),
        }
    }
}

/// Source of the current theme value.
pub trait ThemeSource: Send + Sync {
    /// The theme to render with right now.
    fn current(&self) -> Theme;
}

/// Always reports the same theme.
#[derive(Debug, Clone, Copy)]
pub struct FixedThemeSource(pub Theme);

impl ThemeSource for FixedThemeSource {
    fn current(&self) -> Theme {
        self.0
    }
}

/// Reads the operating system's color-scheme preference on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemThemeSource;

impl ThemeSource for SystemThemeSource {
    fn current(&self) -> Theme {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => Theme::Dark,
            // Unspecified preference or detection failure: light
            Ok(_) | Err(_) => Theme::Light,
        }
    }
}
