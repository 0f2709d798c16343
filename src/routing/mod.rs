//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (redirect rule lookup)
//!     → matcher.rs (exact source match)
//!     → i18n::LocaleSet (locale prefix resolution)
//!     → Return: RouteDecision::Redirect or RouteDecision::Page
//!
//! Route Compilation (at startup):
//!     RedirectConfig[] + I18nConfig
//!     → Compile matchers and locale set
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Redirect rules evaluated before locale resolution, on the raw path
//! - Deterministic: same input always produces the same decision
//! - No regex in the hot path

pub mod matcher;
pub mod router;

pub use router::{RouteDecision, Router};
