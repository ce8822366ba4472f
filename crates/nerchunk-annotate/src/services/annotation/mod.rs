pub mod ner_annotator;

pub use ner_annotator::NerAnnotator;
