use crate::{stage::Stage, unicode::is_tag_char};
use std::borrow::Cow;

/// Collapse every run of separator characters into a single `-` and strip
/// hyphens from both ends and from around `:`.
///
/// A separator is anything `unicode::is_tag_char` rejects: whitespace, ASCII
/// and Unicode punctuation, symbols, and `-` itself. Letters and digits of
/// every script pass through, so `"C'est qui le Patron ?!"` becomes
/// `"c-est-qui-le-patron"` (after lower-casing) while `"تفاح أحمر"` becomes
/// `"تفاح-أحمر"`.
pub struct Hyphenate;

impl Hyphenate {
    /// Whether `apply` would produce something different from `text`.
    ///
    /// Output differs exactly when there is a separator other than a lone
    /// inner `-`: any non-hyphen separator, a doubled hyphen, or a hyphen at
    /// either end or touching a colon.
    fn is_collapsed(text: &str) -> bool {
        if text.starts_with('-') || text.ends_with('-') {
            return false;
        }
        let mut prev = None;
        for c in text.chars() {
            if c == '-' {
                if matches!(prev, Some('-' | ':')) {
                    return false;
                }
            } else if !is_tag_char(c) || (c == ':' && prev == Some('-')) {
                return false;
            }
            prev = Some(c);
        }
        true
    }
}

impl Stage for Hyphenate {
    fn name(&self) -> &'static str {
        "hyphenate"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        !Self::is_collapsed(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if Self::is_collapsed(&text) {
            return text;
        }

        let mut out = String::with_capacity(text.len());
        let mut pending = false;
        for c in text.chars() {
            if is_tag_char(c) {
                // Leading separators are dropped by never emitting them, and a
                // colon swallows the separators on either side.
                if pending && c != ':' && !out.is_empty() && !out.ends_with(':') {
                    out.push('-');
                }
                pending = false;
                out.push(c);
            } else {
                pending = true;
            }
        }
        // Trailing separators are dropped by never flushing `pending`.
        Cow::Owned(out)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_single_hyphen_is_kept_zero_copy() {
        let input = "nuts-from-isere";
        assert!(!Hyphenate.needs_apply(input));
        let out = Hyphenate.apply(Cow::Borrowed(input));
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn colon_is_not_a_separator() {
        assert_eq!(Hyphenate.apply(Cow::Borrowed("en:apples")), "en:apples");
        assert_eq!(Hyphenate.apply(Cow::Borrowed("a.:b")), "a:b");
        assert!(Hyphenate.needs_apply("a-:b"));
        assert!(Hyphenate.needs_apply("a:-b"));
    }

    #[test]
    fn only_separators_collapse_to_empty() {
        assert_eq!(Hyphenate.apply(Cow::Borrowed(" - . ' ")), "");
    }

    #[test]
    fn non_latin_marks_do_not_break_words() {
        let input = "हिन्दी भाषा";
        assert_eq!(Hyphenate.apply(Cow::Borrowed(input)), "हिन्दी-भाषा");
    }
}
