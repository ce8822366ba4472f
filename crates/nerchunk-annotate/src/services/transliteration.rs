//! Table-driven Cyrillic to Latin transliteration.
//!
//! Each supported language layers its own letters over a shared base table.
//! Characters without a mapping (Latin, digits, punctuation) pass through.

use nerchunk::{validate_language, TransliterationError, Transliterator};

/// Letters that romanize the same way in every supported language.
const BASE: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('з', "z"),
    ('и', "i"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "h"),
    ('ц', "c"),
];

/// Serbian and Montenegrin (Gaj's Latin alphabet).
const SERBIAN: &[(char, &str)] = &[
    ('ђ', "đ"),
    ('ж', "ž"),
    ('ј', "j"),
    ('љ', "lj"),
    ('њ', "nj"),
    ('ћ', "ć"),
    ('ч', "č"),
    ('џ', "dž"),
    ('ш', "š"),
];

const MACEDONIAN: &[(char, &str)] = &[
    ('ѓ', "ǵ"),
    ('ѕ', "dz"),
    ('ж', "ž"),
    ('ј', "j"),
    ('ќ', "ḱ"),
    ('љ', "lj"),
    ('њ', "nj"),
    ('ч', "č"),
    ('џ', "dž"),
    ('ш', "š"),
];

const RUSSIAN: &[(char, &str)] = &[
    ('ё', "yo"),
    ('ж', "zh"),
    ('й', "j"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "sch"),
    ('ъ', "ʺ"),
    ('ы', "y"),
    ('ь', "ʹ"),
    ('э', "è"),
    ('ю', "ju"),
    ('я', "ja"),
];

/// Kazakh letters; the rest of the alphabet follows Russian.
const KAZAKH: &[(char, &str)] = &[
    ('ә', "ä"),
    ('ғ', "ğ"),
    ('қ', "q"),
    ('ң', "ñ"),
    ('ө', "ö"),
    ('ұ', "ū"),
    ('ү', "ü"),
    ('һ', "h"),
    ('і', "ı"),
];

const UKRAINIAN: &[(char, &str)] = &[
    ('г', "h"),
    ('ґ', "g"),
    ('є', "je"),
    ('ж', "zh"),
    ('и', "y"),
    ('і', "i"),
    ('ї', "ji"),
    ('й', "j"),
    ('х', "kh"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "shch"),
    ('ь', "'"),
    ('ю', "ju"),
    ('я', "ja"),
];

const BULGARIAN: &[(char, &str)] = &[
    ('ж', "zh"),
    ('й', "y"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "sht"),
    ('ъ', "ǎ"),
    ('ь', "'"),
    ('ю', "yu"),
    ('я', "ya"),
];

/// Tables consulted for `lang`, most specific first.
fn tables_for(lang: &str) -> &'static [&'static [(char, &'static str)]] {
    match lang {
        "sr" | "me" => &[SERBIAN, BASE],
        "mk" => &[MACEDONIAN, BASE],
        "ru" => &[RUSSIAN, BASE],
        "kk" => &[KAZAKH, RUSSIAN, BASE],
        "uk" => &[UKRAINIAN, BASE],
        "bg" => &[BULGARIAN, BASE],
        _ => &[BASE],
    }
}

/// Cyrillic to Latin transliterator covering every supported language code.
#[derive(Debug, Default, Clone, Copy)]
pub struct CyrillicTransliterator;

impl CyrillicTransliterator {
    pub fn new() -> Self {
        Self
    }
}

impl Transliterator for CyrillicTransliterator {
    fn backend_id(&self) -> &str {
        "cyrillic"
    }

    fn to_latin(&self, text: &str, lang: &str) -> Result<String, TransliterationError> {
        validate_language(lang)?;
        let tables = tables_for(lang);

        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        let mut prev_upper = false;
        while let Some(c) = chars.next() {
            let upper = c.is_uppercase();
            let after_upper = std::mem::replace(&mut prev_upper, upper);
            let lower = if upper {
                c.to_lowercase().next().unwrap_or(c)
            } else {
                c
            };

            let Some(latin) = lookup(tables, lower) else {
                out.push(c);
                continue;
            };

            if !upper {
                out.push_str(latin);
            } else if after_upper || chars.peek().is_some_and(|next| next.is_uppercase()) {
                // Inside an all-caps word: "ЉУБАВ" -> "LJUBAV"
                out.extend(latin.chars().flat_map(char::to_uppercase));
            } else {
                let mut rest = latin.chars();
                if let Some(first) = rest.next() {
                    out.extend(first.to_uppercase());
                    out.extend(rest);
                }
            }
        }
        Ok(out)
    }
}

fn lookup(tables: &[&[(char, &'static str)]], c: char) -> Option<&'static str> {
    tables
        .iter()
        .flat_map(|table| table.iter())
        .find(|(cyrillic, _)| *cyrillic == c)
        .map(|(_, latin)| *latin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin(text: &str, lang: &str) -> String {
        CyrillicTransliterator.to_latin(text, lang).unwrap()
    }

    #[test]
    fn test_serbian_digraphs_and_diacritics() {
        assert_eq!(latin("Љубав и ђак", "sr"), "Ljubav i đak");
        assert_eq!(latin("Никола Тесла", "sr"), "Nikola Tesla");
        assert_eq!(latin("Џеп", "me"), "Džep");
    }

    #[test]
    fn test_all_caps_word_stays_upper() {
        assert_eq!(latin("ЉУБАВ", "sr"), "LJUBAV");
        assert_eq!(latin("ШЧ", "ru"), "SHCH");
    }

    #[test]
    fn test_language_specific_tables() {
        assert_eq!(latin("Щука и ёж", "ru"), "Schuka i yozh");
        assert_eq!(latin("Київ", "uk"), "Kyjiv");
        assert_eq!(latin("Харків", "uk"), "Kharkiv");
        assert_eq!(latin("България", "bg"), "Bǎlgariya");
        assert_eq!(latin("Охрид", "mk"), "Ohrid");
        assert_eq!(latin("Қазақстан", "kk"), "Qazaqstan");
    }

    #[test]
    fn test_latin_and_punctuation_pass_through() {
        assert_eq!(latin("Tesla и Edison, 1884.", "sr"), "Tesla i Edison, 1884.");
        assert_eq!(latin("", "sr"), "");
    }

    #[test]
    fn test_unsupported_language_is_rejected() {
        let err = CyrillicTransliterator.to_latin("текст", "xx").unwrap_err();
        assert!(matches!(err, TransliterationError::UnsupportedLanguage { .. }));
    }
}
