//! stage/replace_ligatures.rs – letters that NFKD cannot split.
//! * `œ` → "oe", `æ` → "ae" out of the box
//! * Table is extensible through `NormalizerBuilder::substitution`
//! * Zero-copy when no listed letter occurs
use crate::stage::Stage;
use phf::{Map, phf_map};
use std::{borrow::Cow, collections::HashMap};

/// Substitutions applied by default. Both ligatures are atomic in Unicode:
/// neither has a canonical nor a compatibility decomposition.
pub static DEFAULT_SUBSTITUTIONS: Map<char, &'static str> = phf_map! {
    'œ' => "oe",
    'æ' => "ae",
};

/// Replaces single letters with multi-letter spellings.
///
/// Runs after lower-casing, so the table only needs lowercase keys unless a
/// caller configures something more exotic.
#[derive(Debug, Clone)]
pub struct ReplaceLigatures {
    table: HashMap<char, Cow<'static, str>>,
}

impl Default for ReplaceLigatures {
    fn default() -> Self {
        let table = DEFAULT_SUBSTITUTIONS
            .entries()
            .map(|(&from, &to)| (from, Cow::Borrowed(to)))
            .collect();
        Self { table }
    }
}

impl ReplaceLigatures {
    /// An empty table; the stage becomes a no-op until entries are added.
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Add or override a substitution. Mapping a letter onto itself is ignored.
    pub fn insert(&mut self, from: char, to: impl Into<Cow<'static, str>>) {
        let to = to.into();
        let mut chars = to.chars();
        if chars.next() == Some(from) && chars.next().is_none() {
            self.table.remove(&from);
            return;
        }
        self.table.insert(from, to);
    }

    pub fn get(&self, c: char) -> Option<&str> {
        self.table.get(&c).map(|to| to.as_ref())
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[inline(always)]
    fn any_match(&self, text: &str) -> bool {
        !self.table.is_empty() && text.chars().any(|c| self.table.contains_key(&c))
    }
}

impl Stage for ReplaceLigatures {
    fn name(&self) -> &'static str {
        "replace_ligatures"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        self.any_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.any_match(&text) {
            return text;
        }

        let mut out = String::with_capacity(text.len() + 8);
        for c in text.chars() {
            match self.table.get(&c) {
                Some(to) => out.push_str(to),
                None => out.push(c),
            }
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for ReplaceLigatures {
        fn samples() -> &'static [&'static str] {
            &["œufs de plein air", "ætat", "cœur", "hello", "تفاح", ""]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("œufs de plein air", "oeufs de plein air"),
                ("cœur", "coeur"),
                ("ex æquo", "ex aequo"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(ReplaceLigatures::default());
    }
}
