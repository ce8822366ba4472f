pub mod annotation;
pub mod gazetteer;
pub mod ner;
pub mod offsets;
pub mod render;
pub mod transliteration;

pub use annotation::NerAnnotator;
pub use gazetteer::{Gazetteer, GazetteerEntry, GazetteerError, GazetteerMatch};
pub use ner::{extract_entities, EntityType, NerBackend, NerResult, RegexNerBackend};
pub use offsets::CharOffsets;
pub use render::{is_wikidata_qid, label_color, wikidata_url, EntityRenderer};
pub use transliteration::CyrillicTransliterator;
