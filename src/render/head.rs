//! Favicon links for the document head.

use crate::theme::Theme;

/// Render the two icon `<link>` tags for the given theme.
///
/// The icon URL embeds the theme name as a path segment, e.g.
/// `/favicons/nextjs-icon-dark.png` for `stem = "/favicons/nextjs-icon"`.
pub fn favicon_links(theme: Theme, stem: &str) -> String {
    let href = format!("{stem}-{theme}.png");
    format!(
        "<link rel=\"icon\" type=\"image/png\" sizes=\"256x256\" href=\"{href}\">\n\
         <link rel=\"shortcut icon\" href=\"{href}\">"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEM: &str = "/favicons/nextjs-icon";

    #[test]
    fn test_light_and_dark_hrefs() {
        let light = favicon_links(Theme::Light, STEM);
        assert_eq!(light.matches("nextjs-icon-light.png").count(), 2);

        let dark = favicon_links(Theme::Dark, STEM);
        assert_eq!(dark.matches("nextjs-icon-dark.png").count(), 2);
    }

    #[test]
    fn test_two_link_tags() {
        let links = favicon_links(Theme::Light, STEM);
        assert_eq!(links.matches("<link ").count(), 2);
        assert!(links.contains("rel=\"icon\""));
        assert!(links.contains("rel=\"shortcut icon\""));
        assert!(links.contains("sizes=\"256x256\""));
    }

    #[test]
    fn test_no_empty_theme_segment() {
        // Theme::default() covers the unresolved case; the href must still
        // carry a concrete theme name
        let links = favicon_links(Theme::default(), STEM);
        assert!(!links.contains("icon-.png"));
        assert!(links.contains("nextjs-icon-light.png"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        assert_eq!(
            favicon_links(Theme::Dark, STEM),
            favicon_links(Theme::Dark, STEM)
        );
    }
}
