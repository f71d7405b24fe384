use crate::{
    alias::Alias,
    pipeline::Pipeline,
    stage::{
        Stage,
        hyphenate::Hyphenate,
        lower_case::LowerCase,
        normalization::{NFC, NFKD},
        remove_diacritics::RemoveDiacritics,
        replace_ligatures::ReplaceLigatures,
    },
};
use std::{
    borrow::Cow,
    sync::{Arc, LazyLock},
};

static DEFAULT_NORMALIZER: LazyLock<Normalizer> = LazyLock::new(Normalizer::default);

/// Normalize a label into a tag with the default configuration.
///
/// `"fr: Bananes d'Isère"` becomes `"fr:bananes-d-isere"`, `"Reflets de
/// France"` becomes `"reflets-de-france"`. Non-Latin letters are kept as-is:
/// `"ar: تفاح"` becomes `"ar:تفاح"`.
pub fn get_tag(text: &str) -> String {
    DEFAULT_NORMALIZER.normalize(text)
}

/// The process-wide default normalizer used by [`get_tag`].
pub fn default_normalizer() -> &'static Normalizer {
    &DEFAULT_NORMALIZER
}

/// Turns free-form labels into stable, comparable tags.
///
/// Stages, in order:
///
/// 1. lowercase
/// 2. NFKD, then lowercase again (compatibility forms such as `ℌ` or `㎒`
///    decompose into capitals)
/// 3. drop Latin combining diacritics
/// 4. letter substitutions (`œ` → `oe`, `æ` → `ae`, plus configured ones)
/// 5. NFC, restoring syllables of scripts that NFKD split apart
/// 6. collapse separator runs into `-`, trim hyphens
///
/// Output is idempotent: normalizing a tag again returns it unchanged.
#[derive(Clone)]
pub struct Normalizer {
    pipeline: Pipeline,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Normalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    /// Normalize a full alias or a bare label.
    ///
    /// When `text` starts with a language code followed by `:`, the code is
    /// trimmed and lowercased and only the remainder goes through the stage
    /// pipeline: `"FR : Gésiers"` → `"fr:gesiers"`. Otherwise the whole
    /// string is treated as a bare label.
    pub fn normalize(&self, text: &str) -> String {
        match Alias::split(text) {
            Some((lang, tag)) => {
                let tag = self.normalize_label(tag);
                let mut out = String::with_capacity(lang.len() + 1 + tag.len());
                out.extend(lang.chars().map(|c| c.to_ascii_lowercase()));
                out.push(':');
                out.push_str(&tag);
                out
            }
            None => self.normalize_label(text),
        }
    }

    /// Normalize a bare label; colons inside it are kept as ordinary
    /// characters.
    pub fn normalize_label(&self, text: &str) -> String {
        self.pipeline.process(Cow::Borrowed(text)).into_owned()
    }

    /// Normalize `lang` and `label` as the alias `lang:label`.
    pub fn normalize_alias(&self, lang: &str, label: &str) -> String {
        self.normalize(&format!("{lang}:{label}"))
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pipeline.stage_names()
    }
}

/// Configuration for a [`Normalizer`].
///
/// The letter-substitution table is the only tunable part; everything else
/// is fixed so that tags stay byte-for-byte stable across consumers.
pub struct NormalizerBuilder {
    substitutions: ReplaceLigatures,
}

impl Default for NormalizerBuilder {
    fn default() -> Self {
        Self {
            substitutions: ReplaceLigatures::default(),
        }
    }
}

impl NormalizerBuilder {
    /// Start from an empty substitution table instead of `œ`/`æ`.
    pub fn without_default_substitutions(mut self) -> Self {
        self.substitutions = ReplaceLigatures::empty();
        self
    }

    /// Add or override a letter substitution, applied after lowercasing and
    /// accent removal. The replacement must not itself contain substituted
    /// letters, or tags stop being idempotent.
    pub fn substitution(mut self, from: char, to: impl Into<Cow<'static, str>>) -> Self {
        self.substitutions.insert(from, to);
        self
    }

    pub fn build(self) -> Normalizer {
        let lower: Arc<dyn Stage> = Arc::new(LowerCase);
        let pipeline = Pipeline::new(vec![
            lower.clone(),
            Arc::new(NFKD),
            lower,
            Arc::new(RemoveDiacritics),
            Arc::new(self.substitutions),
            Arc::new(NFC),
            Arc::new(Hyphenate),
        ]);
        Normalizer { pipeline }
    }
}
