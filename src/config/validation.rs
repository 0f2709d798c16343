//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check locale invariants (default is a member, no duplicates)
//! - Check redirect rules (absolute paths, 3xx status, unique sources)
//! - Validate value ranges (timeouts > 0, addresses parseable)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::{RedirectConfig, SiteConfig};
use crate::i18n::{LocaleError, LocaleSet};

/// A single semantic violation in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error("redirect source `{0}` must be an absolute path")]
    RelativeSource(String),

    #[error("redirect destination `{0}` must be an absolute path")]
    RelativeDestination(String),

    #[error("redirect `{source}` has non-redirect status code {status}")]
    InvalidRedirectStatus { source: String, status: u16 },

    #[error("duplicate redirect source `{0}`")]
    DuplicateSource(String),

    #[error("redirect `{0}` points at itself")]
    SelfRedirect(String),

    #[error("invalid bind address `{0}`")]
    InvalidBindAddress(String),

    #[error("invalid metrics address `{0}`")]
    InvalidMetricsAddress(String),

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Validate the whole configuration, collecting every violation.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(locale_errors) =
        LocaleSet::new(config.i18n.locales.clone(), &config.i18n.default_locale)
    {
        errors.extend(locale_errors.into_iter().map(ValidationError::Locale));
    }

    for (i, rule) in config.redirects.iter().enumerate() {
        validate_redirect(rule, &mut errors);
        if config.redirects[..i].iter().any(|r| r.source == rule.source) {
            errors.push(ValidationError::DuplicateSource(rule.source.clone()));
        }
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_redirect(rule: &RedirectConfig, errors: &mut Vec<ValidationError>) {
    if !rule.source.starts_with('/') {
        errors.push(ValidationError::RelativeSource(rule.source.clone()));
    }
    if !rule.destination.starts_with('/') {
        errors.push(ValidationError::RelativeDestination(rule.destination.clone()));
    }
    if !(300..400).contains(&rule.status_code) {
        errors.push(ValidationError::InvalidRedirectStatus {
            source: rule.source.clone(),
            status: rule.status_code,
        });
    }
    if rule.source == rule.destination {
        errors.push(ValidationError::SelfRedirect(rule.source.clone()));
    }
}

/// Join validation errors into a single readable line.
pub fn render_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_outside_set_rejected() {
        let mut config = SiteConfig::default();
        config.i18n.default_locale = "fr".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::Locale(LocaleError::UnknownDefault(
                "fr".to_string()
            ))]
        );
    }

    #[test]
    fn test_all_redirect_violations_reported_at_once() {
        let mut config = SiteConfig::default();
        config.redirects = vec![
            RedirectConfig {
                source: "docs".to_string(),
                destination: "getting-started".to_string(),
                status_code: 200,
            },
            RedirectConfig {
                source: "/loop".to_string(),
                destination: "/loop".to_string(),
                status_code: 301,
            },
            RedirectConfig {
                source: "/loop".to_string(),
                destination: "/other".to_string(),
                status_code: 302,
            },
        ];

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::RelativeSource("docs".to_string())));
        assert!(errors.contains(&ValidationError::RelativeDestination(
            "getting-started".to_string()
        )));
        assert!(errors.contains(&ValidationError::InvalidRedirectStatus {
            source: "docs".to_string(),
            status: 200,
        }));
        assert!(errors.contains(&ValidationError::SelfRedirect("/loop".to_string())));
        assert!(errors.contains(&ValidationError::DuplicateSource("/loop".to_string())));
    }

    #[test]
    fn test_listener_checks() {
        let mut config = SiteConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.listener.request_timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::InvalidBindAddress(
            "not-an-address".to_string()
        )));
        assert!(errors.contains(&ValidationError::ZeroTimeout));
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = SiteConfig::default();
        config.observability.metrics_address = "nope".to_string();
        config.observability.metrics_enabled = false;
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidMetricsAddress("nope".to_string())]
        );
    }

    #[test]
    fn test_temporary_redirect_status_accepted() {
        let mut config = SiteConfig::default();
        config.redirects[0].status_code = 302;
        assert!(validate_config(&config).is_ok());
    }
}
