//! Documentation site server library.
//!
//! Serves a bilingual documentation site from a validated TOML
//! configuration: permanent redirects are evaluated first, every other path
//! is resolved to a locale and a content page, and each page is rendered
//! with favicon links that follow the current theme.

pub mod config;
pub mod http;
pub mod i18n;
pub mod observability;
pub mod render;
pub mod routing;
pub mod theme;

pub use config::SiteConfig;
pub use http::HttpServer;
pub use theme::Theme;
