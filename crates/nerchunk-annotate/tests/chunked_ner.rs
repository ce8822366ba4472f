//! Runs the built-in NER annotator through the chunked pipeline.

use nerchunk::services::SECTION_BREAK;
use nerchunk::{process_in_chunks, Annotator, ChunkProcessor, ChunkingConfig};
use nerchunk_annotate::{CyrillicTransliterator, Gazetteer, NerAnnotator, RegexNerBackend};

fn biography(paragraphs: usize) -> String {
    let paragraph = "Nikola Tesla moved from Paris to New York on June 6, 1884. \
                     He later worked with Westinghouse Electric Company. "
        .repeat(20);
    vec![paragraph.trim_end().to_string(); paragraphs].join("\n\n")
}

#[test]
fn test_chunked_document_merges_rendered_fragments() {
    let text = biography(3);
    let paragraph_len = text.split("\n\n").next().unwrap().chars().count();
    let annotator = NerAnnotator::new();

    let result = process_in_chunks(Some(&annotator), &text, paragraph_len + 1, None).unwrap();

    assert_eq!(result.chunk_count, 3);
    assert_eq!(result.document.matches(SECTION_BREAK).count(), 2);
    assert_eq!(result.document.matches("<style>").count(), 1);
    assert!(result.warnings.is_empty());
    assert!(result.document.contains("New York<span class=\"entity-label\">LOC</span>"));
}

#[test]
fn test_entities_from_every_chunk_are_collected() {
    let text = biography(2);
    let paragraph_len = text.split("\n\n").next().unwrap().chars().count();
    let annotator = NerAnnotator::new();

    let single = annotator.annotate(text.split("\n\n").next().unwrap()).unwrap();
    let result = process_in_chunks(Some(&annotator), &text, paragraph_len + 1, None).unwrap();

    assert_eq!(result.entities.len(), single.entities.len() * 2);
}

#[test]
fn test_gazetteer_links_survive_merge() {
    let gazetteer = Gazetteer::from_json(
        r#"[{"text": "Nikola Tesla", "label": "PERSON", "kb_id": "Q9036"}]"#,
    )
    .unwrap();
    let annotator = NerAnnotator::with_backend(Box::new(RegexNerBackend::with_gazetteer(gazetteer)));
    let text = biography(2);
    let paragraph_len = text.split("\n\n").next().unwrap().chars().count();

    let config = ChunkingConfig {
        max_chunk_size: paragraph_len + 1,
        title: "Tesla".to_string(),
    };
    let result = ChunkProcessor::new(config)
        .process(Some(&annotator), &text, None)
        .unwrap();

    assert!(result.document.contains("<title>Tesla</title>"));
    assert!(result
        .document
        .contains(r#"href="https://www.wikidata.org/wiki/Q9036""#));
    assert!(result
        .entities
        .iter()
        .filter(|e| e.text == "Nikola Tesla")
        .all(|e| e.kb_id.as_deref() == Some("Q9036")));
}

#[test]
fn test_cyrillic_input_is_annotated_in_latin() {
    let gazetteer = Gazetteer::from_json(
        r#"[{"text": "Nikola Tesla", "label": "PERSON", "kb_id": "Q9036"}]"#,
    )
    .unwrap();
    let annotator = NerAnnotator::with_backend(Box::new(RegexNerBackend::with_gazetteer(gazetteer)));
    let transliterator = CyrillicTransliterator::new();
    let text = "Никола Тесла је рођен у Смиљану.\n\nТесла је радио у Њујорку.";

    let result = ChunkProcessor::new(ChunkingConfig::with_max_chunk_size(100))
        .with_transliterator(&transliterator, "sr")
        .unwrap()
        .process(Some(&annotator), text, None)
        .unwrap();

    assert!(result
        .entities
        .iter()
        .any(|e| e.text == "Nikola Tesla" && e.kb_id.as_deref() == Some("Q9036")));
    assert!(result.document.contains("Njujorku"));
    assert!(!result.document.contains("Тесла"));
}
