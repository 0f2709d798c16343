//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site
//! server. All types derive Serde traits for deserialization from config
//! files, and the defaults reproduce the original site: locales zh/en with
//! zh as default, and a permanent redirect from /docs to its landing page.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::theme::ThemeMode;

/// Root configuration for the documentation site server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address, request timeout).
    pub listener: ListenerConfig,

    /// Supported locales and the default locale.
    pub i18n: I18nConfig,

    /// Redirect rules, evaluated before locale resolution.
    pub redirects: Vec<RedirectConfig>,

    /// Page content location and site metadata.
    pub content: ContentConfig,

    /// Theme behavior for head rendering.
    pub theme: ThemeConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            i18n: I18nConfig::default(),
            redirects: default_redirects(),
            content: ContentConfig::default(),
            theme: ThemeConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout (total time for request/response) in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Internationalization configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Supported locales, in order. The first path segment of a request may
    /// name one of these.
    pub locales: Vec<String>,

    /// Locale served when a request carries no recognized locale prefix.
    /// Must be one of `locales`.
    pub default_locale: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locales: vec!["zh".to_string(), "en".to_string()],
            default_locale: "zh".to_string(),
        }
    }
}

/// A single redirect rule.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RedirectConfig {
    /// Request path to match, exactly.
    pub source: String,

    /// Path to redirect to.
    pub destination: String,

    /// HTTP status for the redirect (3xx; default 301).
    #[serde(default = "default_redirect_status")]
    pub status_code: u16,
}

fn default_redirect_status() -> u16 {
    301
}

fn default_redirects() -> Vec<RedirectConfig> {
    vec![RedirectConfig {
        source: "/docs".to_string(),
        destination: "/docs/getting-started".to_string(),
        status_code: 301,
    }]
}

/// Page content location and site metadata.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding pre-rendered page bodies, one subdirectory per
    /// locale (e.g. `content/zh/docs/getting-started.html`).
    pub root: PathBuf,

    /// Site title placed in the document head.
    pub title: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("content"),
            title: "Documentation".to_string(),
        }
    }
}

/// Theme behavior for head rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Pin the theme or follow the system preference.
    pub mode: ThemeMode,

    /// Icon URL stem; the theme name and `.png` are appended.
    pub favicon_stem: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::System,
            favicon_stem: "/favicons/nextjs-icon".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::validate_config;

    #[test]
    fn test_defaults_reproduce_original_site() {
        let config = SiteConfig::default();
        assert_eq!(config.i18n.locales, vec!["zh", "en"]);
        assert_eq!(config.i18n.default_locale, "zh");
        assert_eq!(config.redirects.len(), 1);
        assert_eq!(config.redirects[0].source, "/docs");
        assert_eq!(config.redirects[0].destination, "/docs/getting-started");
        assert_eq!(config.redirects[0].status_code, 301);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&SiteConfig::default()).is_ok());
    }

    #[test]
    fn test_minimal_toml_fills_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.i18n.default_locale, "zh");
        assert_eq!(config.theme.favicon_stem, "/favicons/nextjs-icon");
    }

    #[test]
    fn test_redirect_status_defaults_to_permanent() {
        let config: SiteConfig = toml::from_str(
            r#"
            [[redirects]]
            source = "/old"
            destination = "/new"
            "#,
        )
        .unwrap();
        assert_eq!(config.redirects[0].status_code, 301);
    }
}
