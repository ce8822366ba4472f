//! HTML escaping utilities.

/// Escape HTML special characters for safe rendering.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape_plain_title() {
        assert_eq!(html_escape("Chunked NER Output"), "Chunked NER Output");
    }

    #[test]
    fn test_html_escape_entity_text() {
        assert_eq!(
            html_escape("<b>Ivo & \"Andrić\"</b>"),
            "&lt;b&gt;Ivo &amp; &quot;Andrić&quot;&lt;/b&gt;"
        );
    }
}
