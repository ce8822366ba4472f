//! Named Entity Recognition backends.
//!
//! Provides a `NerBackend` trait for pluggable extraction backends and a
//! built-in `RegexNerBackend` that combines an optional gazetteer with
//! pattern rules for people, organizations, places and dates.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use nerchunk::Entity;

use super::gazetteer::Gazetteer;
use super::offsets::CharOffsets;

/// Classification of rule-based entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Organization,
    Person,
    Location,
    Date,
}

impl EntityType {
    /// Label written on entities of this type.
    pub fn label(&self) -> &'static str {
        match self {
            EntityType::Organization => "ORG",
            EntityType::Person => "PERSON",
            EntityType::Location => "LOC",
            EntityType::Date => "DATE",
        }
    }
}

/// Result of NER extraction on a piece of text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NerResult {
    /// Entities in text order, with character offsets.
    pub entities: Vec<Entity>,
    /// Entity counts keyed by lowercase label.
    pub counts: HashMap<String, usize>,
}

/// Trait for pluggable NER backends.
///
/// The built-in `RegexNerBackend` uses pattern matching. Model-backed
/// backends can implement this trait and be swapped in via `NerAnnotator`.
pub trait NerBackend: Send + Sync {
    /// Human-readable backend identifier (e.g. "regex", "bert").
    fn backend_id(&self) -> &str;

    /// Extract named entities from text.
    fn extract(&self, text: &str) -> NerResult;
}

// ============================================================================
// RegexNerBackend: built-in, model-free backend
// ============================================================================

/// Regex- and gazetteer-based NER backend.
///
/// Gazetteer hits win over rule hits; among rule hits, specific patterns
/// (titles, organization suffixes, places, dates) win over the generic
/// capitalized-pair heuristic. Overlaps within a tier keep the earliest,
/// then the longest span.
pub struct RegexNerBackend {
    gazetteer: Option<Gazetteer>,
}

impl RegexNerBackend {
    pub fn new() -> Self {
        Self { gazetteer: None }
    }

    pub fn with_gazetteer(gazetteer: Gazetteer) -> Self {
        Self {
            gazetteer: Some(gazetteer),
        }
    }
}

impl Default for RegexNerBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl NerBackend for RegexNerBackend {
    fn backend_id(&self) -> &str {
        "regex"
    }

    fn extract(&self, text: &str) -> NerResult {
        let mut spans = Vec::new();

        if let Some(gazetteer) = &self.gazetteer {
            extract_gazetteer(gazetteer, text, &mut spans);
        }
        extract_titled_persons(text, &mut spans);
        extract_organizations(text, &mut spans);
        extract_locations(text, &mut spans);
        extract_dates(text, &mut spans);
        extract_capitalized_names(text, &mut spans);

        let offsets = CharOffsets::new(text);
        let entities: Vec<Entity> = resolve_overlaps(spans)
            .into_iter()
            .map(|span| Entity {
                start: offsets.to_char(span.start),
                end: offsets.to_char(span.end),
                label: span.label,
                text: text[span.start..span.end].to_string(),
                kb_id: span.kb_id,
            })
            .collect();

        let mut counts = HashMap::new();
        for entity in &entities {
            *counts.entry(entity.label.to_lowercase()).or_insert(0) += 1;
        }

        NerResult { entities, counts }
    }
}

/// Extracts entities using the default `RegexNerBackend`.
pub fn extract_entities(text: &str) -> NerResult {
    RegexNerBackend::new().extract(text)
}

/// Candidate match in byte offsets. Lower tier wins overlaps.
struct Span {
    start: usize,
    end: usize,
    label: String,
    kb_id: Option<String>,
    tier: u8,
}

const TIER_GAZETTEER: u8 = 0;
const TIER_RULE: u8 = 1;
const TIER_HEURISTIC: u8 = 2;

impl Span {
    fn rule(start: usize, end: usize, entity_type: EntityType, tier: u8) -> Self {
        Self {
            start,
            end,
            label: entity_type.label().to_string(),
            kb_id: None,
            tier,
        }
    }

    fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

fn resolve_overlaps(mut spans: Vec<Span>) -> Vec<Span> {
    spans.sort_by(|a, b| {
        a.tier
            .cmp(&b.tier)
            .then(a.start.cmp(&b.start))
            .then((b.end - b.start).cmp(&(a.end - a.start)))
    });

    let mut kept: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        if span.start < span.end && !kept.iter().any(|k| k.overlaps(&span)) {
            kept.push(span);
        }
    }

    kept.sort_by_key(|s| s.start);
    kept
}

// ============================================================================
// Person name patterns
// ============================================================================

static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:(?:President|Vice President|Prime Minister|Minister|Secretary|Director|General|Admiral|Colonel|Captain|Ambassador|Senator|Governor|Mayor|Judge|Professor|King|Queen|Prince|Princess|Saint|Dr\.|Prof\.|Mr\.|Mrs\.|Ms\.)\s+)(\p{Lu}\p{Ll}+(?:\s+\p{Lu}\.?)?\s+\p{Lu}\p{Ll}+)",
    )
    .expect("title pattern should compile")
});

static CAPITALIZED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\p{Lu}\p{Ll}{2,}(?:\s+\p{Lu}\.?\s+|\s+)\p{Lu}\p{Ll}{2,})\b")
        .expect("capitalized name pattern should compile")
});

// Capitalized pairs that are not people.
static NAME_STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "The", "This", "That", "These", "Those", "When", "While", "After", "Before", "During",
        "There", "Their", "They", "What", "Which", "Where", "With", "From", "Into", "United",
        "National", "Northern", "Southern", "Eastern", "Western", "North", "South", "East", "West",
        "New", "Old", "Great", "Saint", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday",
        "Saturday", "Sunday", "January", "February", "March", "April", "May", "June", "July",
        "August", "September", "October", "November", "December",
    ]
    .into_iter()
    .collect()
});

// ============================================================================
// Organization patterns
// ============================================================================

static ORGANIZATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "Serbian Academy of Sciences", "Tesla Motors Inc."
        r"\b((?:\p{Lu}[\p{L}&'-]*\s+){1,4}(?:(?:Inc|Corp|Ltd)\b\.?|(?:LLC|GmbH|University|Institute|Agency|Ministry|Bank|Company|Corporation|Association|Foundation|Council|Committee|Party|Academy|Society|Museum|Library)\b))",
        // "University of Belgrade", "Ministry of Culture"
        r"\b((?:University|Ministry|Bank|Institute|Academy|Department|Museum|Faculty) of (?:the )?\p{Lu}\p{L}+(?:\s+\p{Lu}\p{L}+){0,3})",
        // All-caps acronyms
        r"\b(\p{Lu}{2,6})\b",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("organization pattern should compile"))
    .collect()
});

static ACRONYM_STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "II", "III", "IV", "VI", "VII", "VIII", "IX", "XI", "XII", "XX", "XXI", "OK", "AM", "PM",
        "TV", "ID", "THE", "AND", "FOR", "NOT",
    ]
    .into_iter()
    .collect()
});

// ============================================================================
// Location patterns
// ============================================================================

static NOTABLE_LOCATIONS: &[&str] = &[
    "Belgrade",
    "Beograd",
    "Novi Sad",
    "Niš",
    "Kragujevac",
    "Podgorica",
    "Skopje",
    "Sarajevo",
    "Zagreb",
    "Ljubljana",
    "Sofia",
    "Bucharest",
    "Budapest",
    "Vienna",
    "Prague",
    "Berlin",
    "Paris",
    "London",
    "Rome",
    "Madrid",
    "Moscow",
    "Kyiv",
    "Istanbul",
    "Athens",
    "New York",
    "Washington",
    "Tokyo",
    "Beijing",
    "Serbia",
    "Srbija",
    "Montenegro",
    "North Macedonia",
    "Croatia",
    "Bosnia and Herzegovina",
    "Slovenia",
    "Bulgaria",
    "Romania",
    "Hungary",
    "Austria",
    "Germany",
    "France",
    "Italy",
    "Spain",
    "Russia",
    "Ukraine",
    "Kazakhstan",
    "Greece",
    "Turkey",
    "United States",
    "United Kingdom",
    "China",
    "Japan",
    "Europe",
    "Balkans",
    "Danube",
];

static LOCATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let mut names: Vec<&str> = NOTABLE_LOCATIONS.to_vec();
    names.sort_by_key(|n| std::cmp::Reverse(n.len()));
    let alternation = names
        .iter()
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation)).expect("location pattern should compile")
});

// ============================================================================
// Date patterns
// ============================================================================

const MONTHS: &str =
    "January|February|March|April|May|June|July|August|September|October|November|December";

static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // 2024-03-12
        r"\b(\d{4}-\d{2}-\d{2})\b".to_string(),
        // 12. 3. 2024. / 12.03.2024
        r"\b(\d{1,2}\.\s?\d{1,2}\.\s?\d{4}\.?)".to_string(),
        // 12 March 2024
        format!(r"\b(\d{{1,2}}\s+(?:{})\s+\d{{4}})\b", MONTHS),
        // March 12, 2024
        format!(r"\b((?:{})\s+\d{{1,2}},\s+\d{{4}})\b", MONTHS),
    ]
    .iter()
    .map(|p| Regex::new(p).expect("date pattern should compile"))
    .collect()
});

// ============================================================================
// Extraction helpers
// ============================================================================

fn extract_gazetteer(gazetteer: &Gazetteer, text: &str, spans: &mut Vec<Span>) {
    for hit in gazetteer.find_iter(text) {
        spans.push(Span {
            start: hit.start,
            end: hit.end,
            label: hit.entry.label.clone(),
            kb_id: hit.entry.kb_id.clone(),
            tier: TIER_GAZETTEER,
        });
    }
}

fn extract_titled_persons(text: &str, spans: &mut Vec<Span>) {
    for cap in TITLE_PATTERN.captures_iter(text) {
        if let Some(name) = cap.get(1) {
            if is_plausible_name(name.as_str()) {
                spans.push(Span::rule(
                    name.start(),
                    name.end(),
                    EntityType::Person,
                    TIER_RULE,
                ));
            }
        }
    }
}

fn extract_capitalized_names(text: &str, spans: &mut Vec<Span>) {
    for cap in CAPITALIZED_NAME.captures_iter(text) {
        if let Some(name) = cap.get(1) {
            let name_text = name.as_str();
            if is_plausible_name(name_text) && !is_stopword_name(name_text) {
                spans.push(Span::rule(
                    name.start(),
                    name.end(),
                    EntityType::Person,
                    TIER_HEURISTIC,
                ));
            }
        }
    }
}

fn extract_organizations(text: &str, spans: &mut Vec<Span>) {
    for pattern in ORGANIZATION_PATTERNS.iter() {
        for cap in pattern.captures_iter(text) {
            if let Some(m) = cap.get(1) {
                if ACRONYM_STOPWORDS.contains(m.as_str()) {
                    continue;
                }
                spans.push(Span::rule(
                    m.start(),
                    m.end(),
                    EntityType::Organization,
                    TIER_RULE,
                ));
            }
        }
    }
}

fn extract_locations(text: &str, spans: &mut Vec<Span>) {
    for m in LOCATION_PATTERN.find_iter(text) {
        spans.push(Span::rule(
            m.start(),
            m.end(),
            EntityType::Location,
            TIER_RULE,
        ));
    }
}

fn extract_dates(text: &str, spans: &mut Vec<Span>) {
    for pattern in DATE_PATTERNS.iter() {
        for cap in pattern.captures_iter(text) {
            if let Some(m) = cap.get(1) {
                spans.push(Span::rule(m.start(), m.end(), EntityType::Date, TIER_RULE));
            }
        }
    }
}

fn is_plausible_name(name: &str) -> bool {
    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() < 2 || parts.len() > 4 {
        return false;
    }
    parts.iter().all(|p| {
        let first = p.chars().next().unwrap_or('a');
        first.is_uppercase() && p.chars().count() >= 2
    })
}

fn is_stopword_name(name: &str) -> bool {
    name.split_whitespace()
        .next()
        .is_some_and(|first| NAME_STOPWORDS.contains(first))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts_with_label<'a>(result: &'a NerResult, label: &str) -> Vec<&'a str> {
        result
            .entities
            .iter()
            .filter(|e| e.label == label)
            .map(|e| e.text.as_str())
            .collect()
    }

    #[test]
    fn test_extract_titled_persons() {
        let result = extract_entities("Professor Mihajlo Pupin met with President Woodrow Wilson.");
        let persons = texts_with_label(&result, "PERSON");
        assert!(persons.contains(&"Mihajlo Pupin"));
        assert!(persons.contains(&"Woodrow Wilson"));
    }

    #[test]
    fn test_extract_unicode_names() {
        let result = extract_entities("Pevač Đorđe Balašević je rođen u Novom Sadu.");
        let persons = texts_with_label(&result, "PERSON");
        assert!(persons.contains(&"Đorđe Balašević"));
    }

    #[test]
    fn test_extract_organizations() {
        let result = extract_entities(
            "He taught at the University of Belgrade and joined the Serbian Royal Academy before NATO existed.",
        );
        let orgs = texts_with_label(&result, "ORG");
        assert!(orgs.contains(&"University of Belgrade"));
        assert!(orgs.contains(&"Serbian Royal Academy"));
        assert!(orgs.contains(&"NATO"));
    }

    #[test]
    fn test_roman_numerals_are_not_acronyms() {
        let result = extract_entities("During World War II the city was occupied.");
        assert!(!texts_with_label(&result, "ORG").contains(&"II"));
    }

    #[test]
    fn test_extract_locations() {
        let result = extract_entities("He traveled from Novi Sad to Vienna and Paris.");
        let locs = texts_with_label(&result, "LOC");
        assert_eq!(locs, vec!["Novi Sad", "Vienna", "Paris"]);
    }

    #[test]
    fn test_extract_dates() {
        let result = extract_entities(
            "Born 10 July 1856, arrived on June 6, 1884, patent filed 1888-05-01 and 7. 1. 1943.",
        );
        let dates = texts_with_label(&result, "DATE");
        assert!(dates.contains(&"10 July 1856"));
        assert!(dates.contains(&"June 6, 1884"));
        assert!(dates.contains(&"1888-05-01"));
        assert!(dates.contains(&"7. 1. 1943."));
    }

    #[test]
    fn test_offsets_are_character_based() {
        let text = "Ćirilica: Живео у Beograd од 1920.";
        let result = extract_entities(text);
        let entity = result
            .entities
            .iter()
            .find(|e| e.text == "Beograd")
            .unwrap();
        let expected_start = text.chars().position(|c| c == 'B').unwrap();
        assert_eq!(entity.start, expected_start);
        assert_eq!(entity.end, expected_start + 7);
    }

    #[test]
    fn test_every_occurrence_reported() {
        let result = extract_entities("Paris is big. Paris is old.");
        assert_eq!(texts_with_label(&result, "LOC"), vec!["Paris", "Paris"]);
    }

    #[test]
    fn test_entities_do_not_overlap() {
        let result = extract_entities(
            "Director Nikola Tesla Company staff met Professor Mileva Marić in Novi Sad on 12 March 1900.",
        );
        for pair in result.entities.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn test_gazetteer_takes_priority() {
        let gazetteer = Gazetteer::from_json(
            r#"[{"text": "Nikola Tesla", "label": "PERSON", "kb_id": "Q9036"}]"#,
        )
        .unwrap();
        let backend = RegexNerBackend::with_gazetteer(gazetteer);

        let result = backend.extract("Nikola Tesla Company was founded later.");

        let tesla = &result.entities[0];
        assert_eq!(tesla.text, "Nikola Tesla");
        assert_eq!(tesla.kb_id.as_deref(), Some("Q9036"));
        assert!(!result.entities.iter().any(|e| e.text.contains("Company")
            && e.start < tesla.end));
    }

    #[test]
    fn test_stopword_filtering() {
        let result = extract_entities("The Museum opened Monday Morning.");
        assert!(!texts_with_label(&result, "PERSON").contains(&"Monday Morning"));
    }

    #[test]
    fn test_empty_text() {
        let result = extract_entities("");
        assert!(result.entities.is_empty());
        assert!(result.counts.is_empty());
    }

    #[test]
    fn test_counts_by_label() {
        let result = extract_entities("NATO and UNESCO met in Vienna.");
        assert_eq!(result.counts.get("org"), Some(&2));
        assert_eq!(result.counts.get("loc"), Some(&1));
    }

    #[test]
    fn test_regex_backend_id() {
        assert_eq!(RegexNerBackend::new().backend_id(), "regex");
    }
}
