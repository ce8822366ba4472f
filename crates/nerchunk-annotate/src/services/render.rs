//! displaCy-style HTML rendering of annotated text.
//!
//! Every rendered page holds exactly one `<style>` block and one
//! `<div class="entities">` container, which is the shape the fragment
//! merger expects.

use nerchunk::utils::html_escape;
use nerchunk::Entity;

const WIKIDATA_ENTITY_URL: &str = "https://www.wikidata.org/wiki/";

const STYLE: &str = "\
.entities { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif; font-size: 16px; }
.entity { padding: 0.45em 0.6em; margin: 0 0.25em; line-height: 1; border-radius: 0.35em; }
.entity-label { font-size: 0.8em; font-weight: bold; line-height: 1; border-radius: 0.35em; text-transform: uppercase; vertical-align: middle; margin-left: 0.5rem; }
.entity-link { font-size: 0.7em; margin-left: 0.25rem; }";

/// Background colour for an entity label.
pub fn label_color(label: &str) -> &'static str {
    match label {
        "ORG" => "#7aecec",
        "PERSON" | "PER" => "#aa9cfc",
        "LOC" => "#ff9561",
        "GPE" => "#feca74",
        "DATE" => "#bfe1d9",
        _ => "#ddd",
    }
}

/// True for Wikidata item ids such as `Q42`.
pub fn is_wikidata_qid(kb_id: &str) -> bool {
    kb_id
        .strip_prefix('Q')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}

pub fn wikidata_url(qid: &str) -> String {
    format!("{}{}", WIKIDATA_ENTITY_URL, qid)
}

/// Renders text plus its entities as a standalone HTML page.
#[derive(Debug, Clone)]
pub struct EntityRenderer {
    title: String,
    link_kb_ids: bool,
}

impl Default for EntityRenderer {
    fn default() -> Self {
        Self {
            title: "Named Entities".to_string(),
            link_kb_ids: true,
        }
    }
}

impl EntityRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Whether to append Wikidata links to entities carrying a Q-id.
    pub fn with_kb_links(mut self, enabled: bool) -> Self {
        self.link_kb_ids = enabled;
        self
    }

    /// Render `text` with `entities` highlighted.
    ///
    /// Entities must use character offsets into `text`. Entities that start
    /// before the end of a previously rendered one, or fall outside the
    /// text, are skipped.
    pub fn render(&self, text: &str, entities: &[Entity]) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut sorted: Vec<&Entity> = entities.iter().collect();
        sorted.sort_by_key(|e| (e.start, std::cmp::Reverse(e.end)));

        let mut body = String::with_capacity(text.len() * 2);
        let mut cursor = 0;

        for entity in sorted {
            if entity.start < cursor || entity.end > chars.len() || entity.is_empty() {
                continue;
            }
            push_text(&mut body, &chars[cursor..entity.start]);
            self.push_mark(&mut body, entity, &chars[entity.start..entity.end]);
            cursor = entity.end;
        }
        push_text(&mut body, &chars[cursor..]);

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{}</title>
<style>
{}
</style>
</head>
<body>
<div class="entities" style="line-height: 2.5; direction: ltr">{}</div>
</body>
</html>
"#,
            html_escape(&self.title),
            STYLE,
            body
        )
    }

    fn push_mark(&self, out: &mut String, entity: &Entity, surface: &[char]) {
        out.push_str(&format!(
            r#"<mark class="entity" style="background: {}">"#,
            label_color(&entity.label)
        ));
        push_text(out, surface);
        out.push_str(&format!(
            r#"<span class="entity-label">{}</span>"#,
            html_escape(&entity.label)
        ));
        if self.link_kb_ids {
            if let Some(qid) = entity.kb_id.as_deref().filter(|id| is_wikidata_qid(id)) {
                out.push_str(&format!(
                    r#"<sup class="entity-link"><a href="{}" target="_blank">[{}]</a></sup>"#,
                    wikidata_url(qid),
                    qid
                ));
            }
        }
        out.push_str("</mark>");
    }
}

fn push_text(out: &mut String, chars: &[char]) {
    let segment: String = chars.iter().collect();
    out.push_str(&html_escape(&segment).replace('\n', "<br>"));
}
