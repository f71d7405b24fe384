// Character classification used by the tag stages.
// All predicates are context-free and operate on a single scalar value.

use unicode_normalization::char::is_combining_mark;

// Generic combining diacritics that decorate Latin (and Greek/Cyrillic) letters
// after decomposition. Script-internal marks (Devanagari vowel signs, Arabic
// harakat, kana voicing marks, Hebrew points) live in their own blocks and are
// not listed here.
#[inline(always)]
pub const fn is_latin_diacritic(c: char) -> bool {
    let cp = c as u32;

    // Early exit: everything below the first combining block
    if cp < 0x0300 {
        return false;
    }

    matches!(cp,
        0x0300..=0x036F | // Combining Diacritical Marks
        0x1AB0..=0x1AFF | // Combining Diacritical Marks Extended
        0x1DC0..=0x1DFF | // Combining Diacritical Marks Supplement
        0x20D0..=0x20FF | // Combining Diacritical Marks for Symbols
        0xFE20..=0xFE2F   // Combining Half Marks
    )
}

#[inline]
pub fn contains_latin_diacritic(text: &str) -> bool {
    !text.is_ascii() && text.chars().any(is_latin_diacritic)
}

/// Characters that survive hyphenation verbatim.
///
/// Letters and digits of every script are kept, as are combining marks that
/// earlier stages left in place (they belong to non-Latin syllables) and the
/// `:` separator. Everything else, including `-` itself, is a break.
#[inline(always)]
pub fn is_tag_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || c == ':';
    }
    c.is_alphanumeric() || is_combining_mark(c)
}

/// Characters allowed in a language code prefix (`en`, `zh-hant`, `en_us`).
#[inline(always)]
pub const fn is_lang_code_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

#[inline]
pub fn has_uppercase(text: &str) -> bool {
    if text.is_ascii() {
        return text.bytes().any(|b| b.is_ascii_uppercase());
    }
    text.chars().any(|c| c.to_lowercase().next() != Some(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_combining_marks_are_diacritics() {
        assert!(is_latin_diacritic('\u{0301}')); // acute
        assert!(is_latin_diacritic('\u{0300}')); // grave
        assert!(is_latin_diacritic('\u{0308}')); // diaeresis
        assert!(is_latin_diacritic('\u{0327}')); // cedilla
        assert!(is_latin_diacritic('\u{0307}')); // dot above (from İ)
    }

    #[test]
    fn script_internal_marks_are_not_diacritics() {
        assert!(!is_latin_diacritic('\u{093F}')); // Devanagari vowel sign i
        assert!(!is_latin_diacritic('\u{064E}')); // Arabic fatha
        assert!(!is_latin_diacritic('\u{3099}')); // kana voiced sound mark
        assert!(!is_latin_diacritic('\u{05B8}')); // Hebrew qamats
        assert!(!is_latin_diacritic('a'));
    }

    #[test]
    fn tag_chars() {
        for c in ['a', 'z', '0', '9', ':', 'é', 'ت', '北', 'ア', '한', '\u{093F}'] {
            assert!(is_tag_char(c), "{c:?} should be kept");
        }
        for c in ['-', ' ', '\'', '.', '&', '?', '!', '_', '’', '«', '\u{00A0}', '🍎'] {
            assert!(!is_tag_char(c), "{c:?} should break");
        }
    }

    #[test]
    fn lang_code_chars() {
        assert!(is_lang_code_char(b'e'));
        assert!(is_lang_code_char(b'-'));
        assert!(is_lang_code_char(b'_'));
        assert!(!is_lang_code_char(b' '));
        assert!(!is_lang_code_char(b':'));
    }

    #[test]
    fn uppercase_detection() {
        assert!(has_uppercase("Hello"));
        assert!(!has_uppercase("hello"));
        assert!(has_uppercase("ÉCRASÉ"));
        assert!(!has_uppercase("écrasé"));
        assert!(!has_uppercase("تفاح"));
        assert!(!has_uppercase(""));
    }
}
