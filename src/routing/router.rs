//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Compile redirect rules and the locale set from config
//! - Resolve a request path into a redirect or a page
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Redirect rules are checked first, against the raw path; first match wins
//! - Everything else is a page: locale resolution never fails, it falls
//!   through to the default locale

use axum::http::StatusCode;

use crate::config::SiteConfig;
use crate::i18n::{LocaleError, LocaleSet};

use super::matcher::ExactPathMatcher;

/// The router's verdict for a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision<'a> {
    /// Respond with a redirect to `location`.
    Redirect {
        location: &'a str,
        status: StatusCode,
    },
    /// Serve the page at `slug` in `locale`.
    Page { locale: &'a str, slug: &'a str },
}

/// Compiled routing table. Built once at startup from validated config.
#[derive(Debug)]
pub struct Router {
    redirects: Vec<CompiledRedirect>,
    locales: LocaleSet,
}

#[derive(Debug)]
struct CompiledRedirect {
    matcher: ExactPathMatcher,
    location: String,
    status: StatusCode,
}

impl Router {
    /// Compile the routing table from configuration.
    pub fn from_config(config: &SiteConfig) -> Result<Self, Vec<LocaleError>> {
        let locales = LocaleSet::new(config.i18n.locales.clone(), &config.i18n.default_locale)?;

        let redirects = config
            .redirects
            .iter()
            .map(|rule| CompiledRedirect {
                matcher: ExactPathMatcher::new(rule.source.as_str()),
                location: rule.destination.clone(),
                // Status codes are range-checked by config validation
                status: StatusCode::from_u16(rule.status_code)
                    .unwrap_or(StatusCode::MOVED_PERMANENTLY),
            })
            .collect();

        Ok(Self { redirects, locales })
    }

    /// Resolve a request path.
    pub fn resolve<'a>(&'a self, path: &'a str) -> RouteDecision<'a> {
        for redirect in &self.redirects {
            if redirect.matcher.matches(path) {
                return RouteDecision::Redirect {
                    location: &redirect.location,
                    status: redirect.status,
                };
            }
        }

        let (locale, slug) = self.locales.resolve(path);
        RouteDecision::Page { locale, slug }
    }

    /// The compiled locale set.
    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }
}
