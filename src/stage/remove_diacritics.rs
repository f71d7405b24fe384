//! src/stage/remove_diacritics.rs
//!
//! Drops Latin-style combining diacritics left behind by NFKD.

use crate::{
    stage::Stage,
    unicode::{contains_latin_diacritic, is_latin_diacritic},
};
use std::borrow::Cow;

/// Removes combining diacritical marks from already-decomposed text.
///
/// Expects its input to have gone through `NfkdStage` first: `é` must arrive
/// as `e` + U+0301 for the accent to be dropped. Precomposed letters are left
/// alone, which keeps the stage idempotent on its own.
///
/// Only the generic combining-diacritic blocks are stripped (see
/// `unicode::is_latin_diacritic`). Marks that are part of another script's
/// spelling (Devanagari vowel signs, Arabic harakat, kana voicing marks) are
/// kept, so non-Latin labels are never rewritten.
pub struct RemoveDiacritics;

impl Stage for RemoveDiacritics {
    fn name(&self) -> &'static str {
        "remove_diacritics"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        contains_latin_diacritic(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !contains_latin_diacritic(&text) {
            return text;
        }
        Cow::Owned(text.chars().filter(|&c| !is_latin_diacritic(c)).collect())
    }
}
