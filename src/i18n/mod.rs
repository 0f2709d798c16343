//! Locale handling.
//!
//! # Responsibilities
//! - Hold the ordered set of supported locales and the designated default
//! - Enforce locale invariants at construction time
//! - Resolve a request path into a locale and a content slug
//!
//! # Design Decisions
//! - Construction rejects invalid sets; a `LocaleSet` in hand is always valid
//! - An unrecognized first segment is content, not an error: it falls
//!   through to the default locale with the full path as slug
//! - Identifiers are lowercase BCP-47-like codes ("zh", "en", "zh-tw")

use thiserror::Error;

/// Invalid locale configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("locale list must not be empty")]
    Empty,

    #[error("duplicate locale `{0}`")]
    Duplicate(String),

    #[error("invalid locale identifier `{0}`")]
    InvalidIdentifier(String),

    #[error("default locale `{0}` is not a supported locale")]
    UnknownDefault(String),
}

/// Ordered set of supported locales with one designated default.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    locales: Vec<String>,
    default_index: usize,
}

impl LocaleSet {
    /// Build a locale set, collecting every invariant violation.
    pub fn new(locales: Vec<String>, default_locale: &str) -> Result<Self, Vec<LocaleError>> {
        let mut errors = Vec::new();

        if locales.is_empty() {
            errors.push(LocaleError::Empty);
        }
        for (i, locale) in locales.iter().enumerate() {
            if !is_valid_identifier(locale) {
                errors.push(LocaleError::InvalidIdentifier(locale.clone()));
            }
            if locales[..i].contains(locale) {
                errors.push(LocaleError::Duplicate(locale.clone()));
            }
        }

        let default_index = match locales.iter().position(|l| l == default_locale) {
            Some(i) => i,
            None => {
                errors.push(LocaleError::UnknownDefault(default_locale.to_string()));
                0
            }
        };

        if errors.is_empty() {
            Ok(Self {
                locales,
                default_index,
            })
        } else {
            Err(errors)
        }
    }

    /// The designated default locale.
    pub fn default_locale(&self) -> &str {
        &self.locales[self.default_index]
    }

    /// All supported locales, in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(String::as_str)
    }

    /// Whether `id` names a supported locale.
    pub fn is_supported(&self, id: &str) -> bool {
        self.locales.iter().any(|l| l == id)
    }

    /// Resolve a request path into `(locale, slug)`.
    ///
    /// A first segment naming a supported locale selects that locale and is
    /// stripped from the slug. Anything else resolves under the default
    /// locale with the whole path as slug. The returned slug never has a
    /// leading slash; the root path yields an empty slug.
    pub fn resolve<'a>(&'a self, path: &'a str) -> (&'a str, &'a str) {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let (first, rest) = match trimmed.split_once('/') {
            Some((first, rest)) => (first, rest),
            None => (trimmed, ""),
        };

        match self.locales.iter().find(|l| *l == first) {
            Some(locale) => (locale.as_str(), rest),
            None => (self.default_locale(), trimmed),
        }
    }
}

/// Lowercase ASCII letters, digits and `-`, starting with a letter.
fn is_valid_identifier(id: &str) -> bool {
    let mut chars = id.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
