//! Combines per-chunk rendered fragments into a single document.
//!
//! Fragments are expected to follow the displaCy page convention: one
//! `<style>` block and one `<div class="entities" ...>` container holding the
//! highlighted text. Extraction is a plain pattern search, not a markup parse.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ChunkError, Result, StructuralMismatch};
use crate::models::MergedDocument;

static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<style[^>]*>(.*?)</style>").expect("style pattern should compile")
});

static ENTITIES_CONTAINER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div class="entities"[^>]*>(.*?)</div>"#)
        .expect("entities container pattern should compile")
});

/// Marker inserted between the contents of consecutive fragments.
pub const SECTION_BREAK: &str = concat!(
    r#"<div style="margin: 20px 0; padding: 10px; "#,
    r#"border-top: 2px solid #ddd; border-bottom: 2px solid #ddd; "#,
    r#"text-align: center; color: #666; font-style: italic;">"#,
    "--- Document Section Break ---</div>"
);

/// Style block contents of a fragment, or `None` when it has none.
pub fn extract_style(fragment: &str) -> Option<&str> {
    STYLE_BLOCK
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Inner markup of a fragment's entities container, or `None` when absent.
pub fn extract_content(fragment: &str) -> Option<&str> {
    ENTITIES_CONTAINER
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Merge fragments into one document titled `title`.
///
/// A single fragment is returned verbatim. Fragments without an entities
/// container are skipped with a warning.
pub fn merge_fragments<S: AsRef<str>>(fragments: &[S], title: &str) -> Result<String> {
    merge_fragments_with_report(fragments, title).map(|merged| merged.html)
}

/// Same as [`merge_fragments`], also returning the skipped fragment positions.
pub fn merge_fragments_with_report<S: AsRef<str>>(
    fragments: &[S],
    title: &str,
) -> Result<MergedDocument> {
    let Some(first) = fragments.first() else {
        return Err(ChunkError::EmptyInput(
            "fragments cannot be empty".to_string(),
        ));
    };

    if fragments.len() == 1 {
        return Ok(MergedDocument {
            html: first.as_ref().to_string(),
            warnings: Vec::new(),
        });
    }

    // Every fragment comes from the same renderer, so the first one's styling applies to all.
    let style = extract_style(first.as_ref()).unwrap_or("");

    let last_index = fragments.len() - 1;
    let mut body = String::new();
    let mut warnings = Vec::new();

    for (i, fragment) in fragments.iter().enumerate() {
        match extract_content(fragment.as_ref()) {
            Some(content) => {
                body.push_str(content);
                if i < last_index {
                    body.push_str(SECTION_BREAK);
                }
            }
            None => {
                let warning = StructuralMismatch { position: i + 1 };
                tracing::warn!("{}", warning);
                warnings.push(warning);
            }
        }
    }

    tracing::debug!(
        "Merged {} fragments ({} skipped)",
        fragments.len(),
        warnings.len()
    );

    Ok(MergedDocument {
        html: render_page(title, style, &body),
        warnings,
    })
}

fn render_page(title: &str, style: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
    <div class="entities" style="line-height: 2.5; direction: ltr">
        {body}
    </div>
</body>
</html>
"#,
        title = title,
        style = style,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MERGE_TITLE;

    const SAMPLE_FRAGMENT: &str = r#"<!DOCTYPE html>
<html>
<head>
    <style>
        .entities { line-height: 2.5; }
        mark.entity { padding: 0.25em; }
    </style>
</head>
<body>
    <div class="entities" style="line-height: 2.5">
        This is some <mark class="entity" style="background: #ddd;">entity</mark> text.
    </div>
</body>
</html>"#;

    fn fragment(content: &str) -> String {
        format!(
            r#"<html><head><style>.entities {{}}</style></head><body><div class="entities">{}</div></body></html>"#,
            content
        )
    }

    #[test]
    fn test_single_fragment_returned_unchanged() {
        let result = merge_fragments(&[SAMPLE_FRAGMENT], DEFAULT_MERGE_TITLE).unwrap();
        assert_eq!(result, SAMPLE_FRAGMENT);
    }

    #[test]
    fn test_single_malformed_fragment_returned_unchanged() {
        let result = merge_fragments(&["not markup at all"], "Ignored").unwrap();
        assert_eq!(result, "not markup at all");
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let fragments: Vec<String> = Vec::new();
        let err = merge_fragments(&fragments, DEFAULT_MERGE_TITLE).unwrap_err();
        assert!(matches!(err, ChunkError::EmptyInput(_)));
        assert!(err.to_string().contains("fragments cannot be empty"));
    }

    #[test]
    fn test_multiple_fragments_merged() {
        let result = merge_fragments(&[SAMPLE_FRAGMENT, SAMPLE_FRAGMENT], DEFAULT_MERGE_TITLE).unwrap();
        assert!(result.starts_with("<!DOCTYPE html>"));
        assert!(result.contains("<style>"));
        assert!(result.contains("mark.entity { padding: 0.25em; }"));
        assert_eq!(result.matches(">entity</mark>").count(), 2);
    }

    #[test]
    fn test_custom_title() {
        let result = merge_fragments(&[SAMPLE_FRAGMENT, SAMPLE_FRAGMENT], "Custom Title").unwrap();
        assert!(result.contains("<title>Custom Title</title>"));
    }

    #[test]
    fn test_section_breaks_between_fragments() {
        for k in 2..6 {
            let fragments: Vec<String> = (0..k).map(|i| fragment(&format!("Chunk {}", i))).collect();
            let result = merge_fragments(&fragments, DEFAULT_MERGE_TITLE).unwrap();
            assert_eq!(result.matches("Document Section Break").count(), k - 1);
            assert!(result.contains(DEFAULT_MERGE_TITLE));
        }
    }

    #[test]
    fn test_content_order_preserved() {
        let fragments = [fragment("first"), fragment("second"), fragment("third")];
        let result = merge_fragments(&fragments, DEFAULT_MERGE_TITLE).unwrap();
        let first = result.find("first").unwrap();
        let second = result.find("second").unwrap();
        let third = result.find("third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_malformed_fragment_is_skipped() {
        let fragments = [
            fragment("alpha content"),
            "<html><body><p>broken content</p></body></html>".to_string(),
            fragment("omega content"),
        ];
        let merged = merge_fragments_with_report(&fragments, DEFAULT_MERGE_TITLE).unwrap();

        assert!(merged.html.contains("alpha content"));
        assert!(merged.html.contains("omega content"));
        assert!(!merged.html.contains("broken content"));
        assert_eq!(merged.warnings, vec![StructuralMismatch { position: 2 }]);
    }

    #[test]
    fn test_missing_style_yields_empty_block() {
        let plain = r#"<div class="entities">plain</div>"#;
        let result = merge_fragments(&[plain, plain], DEFAULT_MERGE_TITLE).unwrap();
        assert!(result.contains("<style></style>"));
    }

    #[test]
    fn test_title_inserted_verbatim() {
        let title = "Q&A <Report>";
        let result = merge_fragments(&[fragment("a"), fragment("b")], title).unwrap();
        assert!(result.contains(&format!("<title>{}</title>", title)));
    }

    #[test]
    fn test_malformed_first_fragment_still_supplies_style() {
        let fragments = [
            "<style>.first{}</style><p>broken content</p>".to_string(),
            r#"<style>.second{}</style><div class="entities">beta</div>"#.to_string(),
            r#"<style>.third{}</style><div class="entities">gamma</div>"#.to_string(),
        ];
        let merged = merge_fragments_with_report(&fragments, DEFAULT_MERGE_TITLE).unwrap();

        assert!(merged.html.contains("<style>.first{}</style>"));
        assert!(!merged.html.contains(".second{}"));
        assert!(!merged.html.contains("broken content"));
        assert!(merged.html.contains("beta"));
        assert!(merged.html.contains("gamma"));
        assert_eq!(merged.html.matches(SECTION_BREAK).count(), 1);
        assert_eq!(merged.warnings, vec![StructuralMismatch { position: 1 }]);
    }

    #[test]
    fn test_malformed_last_fragment_leaves_trailing_break() {
        let fragments = [
            fragment("alpha content"),
            fragment("beta content"),
            "<p>broken content</p>".to_string(),
        ];
        let merged = merge_fragments_with_report(&fragments, DEFAULT_MERGE_TITLE).unwrap();

        assert_eq!(merged.html.matches(SECTION_BREAK).count(), 2);
        assert!(merged.html.contains(&format!("beta content{}", SECTION_BREAK)));
        assert!(!merged.html.contains("broken content"));
        assert_eq!(merged.warnings, vec![StructuralMismatch { position: 3 }]);
    }

    #[test]
    fn test_extract_content_stops_at_first_close() {
        let html = r#"<div class="entities" style="x">inner</div><div>after</div>"#;
        assert_eq!(extract_content(html), Some("inner"));
    }
}
