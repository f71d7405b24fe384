//! The `lang:tag` string convention.
//!
//! Language codes are plain strings, not a closed enum: new codes show up in
//! taxonomies without any schema change. A prefix counts as a language code
//! when, once trimmed, it is non-empty and only uses ASCII alphanumerics,
//! `-` or `_`. Any other colon is an ordinary character of a bare label.

use crate::unicode::is_lang_code_char;
use memchr::memchr;
use std::fmt;

/// A label split into its language code and tag part.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alias {
    lang: String,
    tag: String,
}

impl Alias {
    /// Build an alias from already-separated parts. The language code is
    /// trimmed and lowercased; the tag is stored as given.
    pub fn new(lang: &str, tag: impl Into<String>) -> Self {
        Self {
            lang: lang.trim().to_ascii_lowercase(),
            tag: tag.into(),
        }
    }

    /// Split `text` on its first colon when the prefix is a language code.
    ///
    /// Returns the trimmed language code (original case) and the trimmed
    /// remainder.
    pub fn split(text: &str) -> Option<(&str, &str)> {
        let idx = memchr(b':', text.as_bytes())?;
        let lang = text[..idx].trim();
        if lang.is_empty() || !lang.bytes().all(is_lang_code_char) {
            return None;
        }
        Some((lang, text[idx + 1..].trim()))
    }

    /// Parse `lang:tag`. The tag is kept raw (trimmed, not normalized).
    pub fn parse(text: &str) -> Option<Self> {
        Self::split(text).map(|(lang, tag)| Self::new(lang, tag))
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn into_parts(self) -> (String, String) {
        (self.lang, self.tag)
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.lang, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_colon() {
        assert_eq!(Alias::split("fr: Gésiers"), Some(("fr", "Gésiers")));
        assert_eq!(Alias::split("en:a:b"), Some(("en", "a:b")));
        assert_eq!(Alias::split("  EN :  Apple  "), Some(("EN", "Apple")));
    }

    #[test]
    fn accepts_regional_and_neutral_codes() {
        assert_eq!(Alias::split("zh-hant:茶"), Some(("zh-hant", "茶")));
        assert_eq!(Alias::split("en_us:soda"), Some(("en_us", "soda")));
        assert_eq!(Alias::split("xx:E330"), Some(("xx", "E330")));
    }

    #[test]
    fn rejects_labels_without_language_prefix() {
        assert_eq!(Alias::split("apple"), None);
        assert_eq!(Alias::split(":apple"), None);
        assert_eq!(Alias::split("  :apple"), None);
        assert_eq!(Alias::split("Health Star Rating: 0.5"), None);
        assert_eq!(Alias::split("é:x"), None);
        assert_eq!(Alias::split("تفاح"), None);
    }

    #[test]
    fn parse_lowercases_the_language_only() {
        let alias = Alias::parse("FR: Noix d'Isère").unwrap();
        assert_eq!(alias.lang(), "fr");
        assert_eq!(alias.tag(), "Noix d'Isère");
        assert_eq!(alias.to_string(), "fr:Noix d'Isère");
    }

    #[test]
    fn empty_tag_is_allowed_by_the_split() {
        let alias = Alias::parse("en:").unwrap();
        assert_eq!(alias.into_parts(), ("en".to_string(), String::new()));
    }
}
