//! Document shells around pre-rendered page bodies.

use crate::theme::Theme;

use super::head::favicon_links;

/// Render a complete HTML document for a page body.
///
/// The head carries the charset, the site title and the themed favicon
/// links; the body fragment is inserted as-is.
pub fn document(title: &str, locale: &str, theme: Theme, favicon_stem: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html lang=\"{locale}\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         {links}\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n",
        title = escape_text(title),
        links = favicon_links(theme, favicon_stem),
    )
}

/// Render the not-found document. Same shell, fixed body.
pub fn not_found(title: &str, locale: &str, theme: Theme, favicon_stem: &str) -> String {
    document(
        title,
        locale,
        theme,
        favicon_stem,
        "<h1>404</h1>\n<p>This page could not be found.</p>",
    )
}

/// Escape text placed inside element content.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEM: &str = "/favicons/nextjs-icon";

    #[test]
    fn test_document_carries_head_and_body() {
        let doc = document("Docs", "en", Theme::Dark, STEM, "<p>hello</p>");
        assert!(doc.starts_with("<!doctype html>"));
        assert!(doc.contains("<html lang=\"en\">"));
        assert!(doc.contains("<title>Docs</title>"));
        assert!(doc.contains("nextjs-icon-dark.png"));
        assert!(doc.contains("<p>hello</p>"));
        // Head tags come before the page content
        assert!(doc.find("shortcut icon").unwrap() < doc.find("<p>hello</p>").unwrap());
    }

    #[test]
    fn test_title_is_escaped() {
        let doc = document("A <b> & B", "zh", Theme::Light, STEM, "");
        assert!(doc.contains("<title>A &lt;b&gt; &amp; B</title>"));
    }

    #[test]
    fn test_not_found_keeps_favicon_links() {
        let doc = not_found("Docs", "zh", Theme::Light, STEM);
        assert_eq!(doc.matches("nextjs-icon-light.png").count(), 2);
        assert!(doc.contains("404"));
    }
}
