use crate::{stage::Stage, unicode::has_uppercase};
use std::borrow::Cow;

/// Full Unicode lowercasing.
///
/// Uses `str::to_lowercase`, so context-sensitive mappings (final sigma) and
/// one-to-many mappings (`İ` → `i̇`) are honoured. The dotted `i̇` loses its
/// dot later in `RemoveDiacritics`.
pub struct LowerCase;

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        has_uppercase(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !has_uppercase(&text) {
            return text;
        }
        if text.is_ascii() {
            return Cow::Owned(text.to_ascii_lowercase());
        }
        Cow::Owned(text.to_lowercase())
    }
}
