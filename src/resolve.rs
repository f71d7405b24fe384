use crate::{
    mapping::AliasTable,
    normalizer::{Normalizer, default_normalizer},
};
use memchr::memchr;
use std::collections::HashMap;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Invalid value: '{0}', expected value to be in 'lang:tag' format")]
    InvalidFormat(String),
}

impl AliasTable {
    /// Resolve one `lang: label` value with the default normalizer.
    pub fn resolve(&self, value: &str) -> Result<String, ResolveError> {
        self.resolve_with(value, default_normalizer())
    }

    /// Resolve one `lang: label` value.
    ///
    /// Returns the canonical id when the normalized alias is known, and the
    /// normalized alias itself otherwise. Fails when `value` has no colon or
    /// when either side of the first colon is blank. The prefix does not have
    /// to look like a language code: `"zh hant: thé"` resolves to
    /// `"zh-hant:the"`.
    pub fn resolve_with(
        &self,
        value: &str,
        normalizer: &Normalizer,
    ) -> Result<String, ResolveError> {
        if !is_lang_tag_shaped(value) {
            return Err(ResolveError::InvalidFormat(value.to_owned()));
        }

        let alias = normalizer.normalize(value);
        match self.get(&alias) {
            Some(id) => Ok(id.to_owned()),
            None => {
                trace!(value, alias = %alias, "unknown alias, keeping normalized form");
                Ok(alias)
            }
        }
    }
}

/// Two non-blank parts around the first colon.
fn is_lang_tag_shaped(value: &str) -> bool {
    match memchr(b':', value.as_bytes()) {
        Some(idx) => !value[..idx].trim().is_empty() && !value[idx + 1..].trim().is_empty(),
        None => false,
    }
}

/// Resolve every value to its canonical id (or normalized alias), keyed by
/// the original value.
///
/// The first malformed value aborts the whole batch; no partial result is
/// returned. Repeated values collapse into a single entry.
pub fn map_to_canonical_id<I, S>(
    table: &AliasTable,
    values: I,
) -> Result<HashMap<String, String>, ResolveError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let values = values.into_iter();
    let mut resolved = HashMap::with_capacity(values.size_hint().0);
    for value in values {
        let value = value.as_ref();
        if resolved.contains_key(value) {
            continue;
        }
        let id = table.resolve(value)?;
        resolved.insert(value.to_owned(), id);
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_table() -> AliasTable {
        [
            ("en:apple", "en:apples"),
            ("en:apples", "en:apples"),
            ("fr:pomme", "en:apples"),
            ("fr:noix-d-isere", "en:nuts-from-isere"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn maps_to_canonical_id() {
        let values = [
            "en: Apple",
            "en: apples",
            "fr: Pomme",
            "fr: Bananes d'Isère",
            "fr: Noix d'Isère",
        ];
        let expected: HashMap<String, String> = [
            ("en: Apple", "en:apples"),
            ("en: apples", "en:apples"),
            ("fr: Pomme", "en:apples"),
            ("fr: Bananes d'Isère", "fr:bananes-d-isere"),
            ("fr: Noix d'Isère", "en:nuts-from-isere"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();

        assert_eq!(map_to_canonical_id(&fruit_table(), values).unwrap(), expected);
    }

    #[test]
    fn invalid_value_fails_the_batch() {
        let err = map_to_canonical_id(&fruit_table(), ["en: Apple", "apple"]).unwrap_err();
        assert_eq!(err, ResolveError::InvalidFormat("apple".to_owned()));
        assert_eq!(
            err.to_string(),
            "Invalid value: 'apple', expected value to be in 'lang:tag' format"
        );
    }

    #[test]
    fn empty_parts_are_invalid() {
        let table = fruit_table();
        for value in [":apple", "   : apple", "en:", "en:   ", "", "apple", "  :  "] {
            assert_eq!(
                table.resolve(value),
                Err(ResolveError::InvalidFormat(value.to_owned())),
                "value: {value:?}"
            );
        }
    }

    #[test]
    fn unknown_alias_falls_back_to_normalized_form() {
        let table = fruit_table();
        assert_eq!(table.resolve("EN:  Green Tea!").unwrap(), "en:green-tea");
        assert_eq!(table.resolve("ar: تفاح").unwrap(), "ar:تفاح");
    }

    #[test]
    fn any_prefix_before_the_colon_is_accepted() {
        let table = AliasTable::default();
        let cases = [
            ("Health Star Rating: 0.5", "health-star-rating:0-5"),
            ("中文: 苹果", "中文:苹果"),
            ("zh hant: thé", "zh-hant:the"),
            ("é:x", "e:x"),
        ];
        for (value, expected) in cases {
            assert_eq!(table.resolve(value).unwrap(), expected, "value: {value:?}");
        }
    }

    #[test]
    fn duplicate_values_collapse() {
        let resolved =
            map_to_canonical_id(&fruit_table(), ["fr: Pomme", "fr: Pomme", "en: apple"]).unwrap();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved["fr: Pomme"], "en:apples");
    }

    #[test]
    fn accepts_owned_strings() {
        let values = vec!["en: Apple".to_string()];
        let resolved = map_to_canonical_id(&fruit_table(), &values).unwrap();
        assert_eq!(resolved["en: Apple"], "en:apples");
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let resolved = map_to_canonical_id(&fruit_table(), Vec::<&str>::new()).unwrap();
        assert!(resolved.is_empty());
    }
}
