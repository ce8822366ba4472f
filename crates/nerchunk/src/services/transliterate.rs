//! Script transliteration seam.
//!
//! The pipeline can convert Cyrillic input to Latin script before chunking so
//! that Latin-trained models see familiar text. The conversion itself is
//! delegated to a [`Transliterator`] supplied by the caller.

use crate::error::TransliterationError;

/// Language codes accepted for Cyrillic-to-Latin transliteration.
pub const SUPPORTED_TRANSLITERATION_CODES: &[&str] = &["bg", "kk", "me", "mk", "ru", "sr", "uk"];

/// Default transliteration language (Serbian).
pub const DEFAULT_TRANSLITERATION_LANG: &str = "sr";

/// A capability that rewrites text into Latin script.
pub trait Transliterator: Send + Sync {
    /// Human-readable backend identifier.
    fn backend_id(&self) -> &str;

    /// Convert `text` to Latin script using the rules for `lang`.
    /// Latin text passes through unchanged; mixed text is allowed.
    fn to_latin(&self, text: &str, lang: &str) -> Result<String, TransliterationError>;
}

/// Check a language code against [`SUPPORTED_TRANSLITERATION_CODES`].
pub fn validate_language(lang: &str) -> Result<(), TransliterationError> {
    if SUPPORTED_TRANSLITERATION_CODES.contains(&lang) {
        Ok(())
    } else {
        Err(TransliterationError::UnsupportedLanguage {
            code: lang.to_string(),
            supported: SUPPORTED_TRANSLITERATION_CODES.join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_codes_validate() {
        for code in SUPPORTED_TRANSLITERATION_CODES {
            assert!(validate_language(code).is_ok());
        }
        assert!(validate_language(DEFAULT_TRANSLITERATION_LANG).is_ok());
    }

    #[test]
    fn test_unsupported_code_lists_alternatives() {
        let err = validate_language("xx").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'xx'"));
        assert!(message.contains("bg, kk, me, mk, ru, sr, uk"));
    }
}
