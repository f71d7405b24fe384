use crate::stage::Stage;
use std::{borrow::Cow, sync::LazyLock};

use icu_normalizer::{
    ComposingNormalizer, ComposingNormalizerBorrowed, DecomposingNormalizer,
    DecomposingNormalizerBorrowed,
};

// ── ICU4X ──
static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizer::new_nfc);
static ICU4X_NFKD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizer::new_nfkd);

/// Unicode Normalization Form KD (Compatibility Decomposition).
///
/// Splits accented letters into base + combining mark (`é` → `e` + U+0301)
/// and expands compatibility forms (`ﬁ` → `fi`, `²` → `2`, fullwidth Latin →
/// ASCII). `œ` and `æ` have no decomposition and survive untouched.
#[derive(Default, Clone, Copy)]
pub struct NfkdStage;

/// Unicode Normalization Form C (Canonical Composition).
///
/// Runs after diacritic removal so that syllables of other scripts that were
/// split by NFKD (Hangul, kana with voicing marks) come back byte-identical.
#[derive(Default, Clone, Copy)]
pub struct NfcStage;

pub const NFKD: NfkdStage = NfkdStage;
pub const NFC: NfcStage = NfcStage;

macro_rules! impl_normalization_stage {
    ($stage:ty, $name:literal, $norm:ident) => {
        impl Stage for $stage {
            fn name(&self) -> &'static str {
                $name
            }

            #[inline(always)]
            fn needs_apply(&self, text: &str) -> bool {
                !text.is_ascii() && !$norm.is_normalized(text)
            }

            #[inline(always)]
            fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
                if !self.needs_apply(&text) {
                    return text;
                }
                Cow::Owned($norm.normalize(text.as_ref()).into_owned())
            }
        }
    };
}

impl_normalization_stage!(NfkdStage, "nfkd", ICU4X_NFKD);
impl_normalization_stage!(NfcStage, "nfc", ICU4X_NFC);
