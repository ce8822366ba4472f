//! Built-in annotators for nerchunk: a regex and gazetteer NER backend and a
//! displaCy-style HTML renderer behind the `nerchunk::Annotator` trait, plus a
//! Cyrillic to Latin `nerchunk::Transliterator`.

pub mod services;

pub use services::{
    CyrillicTransliterator, EntityRenderer, EntityType, Gazetteer, GazetteerEntry, GazetteerError,
    NerAnnotator, NerBackend, NerResult, RegexNerBackend,
};
