pub mod annotator;
pub mod driver;
pub mod merger;
pub mod segmenter;
pub mod transliterate;

pub use annotator::Annotator;
pub use driver::{
    annotate_chunks, process_in_chunks, process_with_defaults, ChunkProcessor, ProgressCallback,
};
pub use merger::{
    extract_content, extract_style, merge_fragments, merge_fragments_with_report, SECTION_BREAK,
};
pub use segmenter::{chunk_text, split_into_paragraphs, split_into_sentences};
pub use transliterate::{
    validate_language, Transliterator, DEFAULT_TRANSLITERATION_LANG,
    SUPPORTED_TRANSLITERATION_CODES,
};
