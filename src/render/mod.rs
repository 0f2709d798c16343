//! HTML rendering subsystem.
//!
//! # Data Flow
//! ```text
//! Resolved request (locale, slug) + current Theme
//!     → head.rs (favicon links for the theme)
//!     → page.rs (document shell around the page body)
//!     → Complete HTML document
//! ```
//!
//! # Design Decisions
//! - Rendering is pure: same inputs produce byte-identical output
//! - The theme value is a parameter, never read ambiently from here
//! - Page bodies are pre-rendered fragments; producing them is out of scope

pub mod head;
pub mod page;

pub use head::favicon_links;
