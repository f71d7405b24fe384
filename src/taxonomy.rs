//! In-memory taxonomy: concepts keyed by canonical id.
//!
//! Parsing a taxonomy source and walking parent/child edges are left to the
//! caller; this module only stores what alias resolution needs.

use std::collections::{HashMap, hash_map};

/// Language code used for language-neutral names (brand names, E-numbers).
pub const NEUTRAL_LANG: &str = "xx";

/// One concept of a taxonomy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaxonomyNode {
    /// Canonical id, `lang:slug` with the slug already normalized.
    pub id: String,
    /// Display name per language code. Raw, not normalized.
    #[cfg_attr(feature = "serde", serde(default))]
    pub names: HashMap<String, String>,
    /// Alternative display names per language code, in source order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub synonyms: HashMap<String, Vec<String>>,
}

impl TaxonomyNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, lang: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.insert(lang.into(), name.into());
        self
    }

    pub fn with_synonyms<I, S>(mut self, lang: impl Into<String>, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms
            .entry(lang.into())
            .or_default()
            .extend(synonyms.into_iter().map(Into::into));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name in `lang`, falling back to the language-neutral `xx` name and
    /// finally to the canonical id.
    pub fn localized_name(&self, lang: &str) -> &str {
        self.names
            .get(lang)
            .or_else(|| self.names.get(NEUTRAL_LANG))
            .map(String::as_str)
            .unwrap_or(self.id.as_str())
    }

    /// Synonyms in `lang`; empty when the language has none.
    pub fn synonyms(&self, lang: &str) -> &[String] {
        self.synonyms.get(lang).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every raw alias of the node: its id first, then `lang:name` for each
    /// name and `lang:synonym` for each synonym. Nothing is normalized and
    /// duplicates are not removed.
    pub fn raw_aliases(&self) -> impl Iterator<Item = String> + '_ {
        let names = self
            .names
            .iter()
            .map(|(lang, name)| format!("{lang}:{name}"));
        let synonyms = self.synonyms.iter().flat_map(|(lang, synonyms)| {
            synonyms
                .iter()
                .map(move |synonym| format!("{lang}:{synonym}"))
        });
        std::iter::once(self.id.clone()).chain(names).chain(synonyms)
    }
}

/// A flat collection of [`TaxonomyNode`]s keyed by canonical id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Taxonomy {
    nodes: HashMap<String, TaxonomyNode>,
}

impl Taxonomy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` under `id`. An existing node with the same id is
    /// replaced and returned (last write wins).
    pub fn add(&mut self, id: impl Into<String>, node: TaxonomyNode) -> Option<TaxonomyNode> {
        self.nodes.insert(id.into(), node)
    }

    pub fn get(&self, id: &str) -> Option<&TaxonomyNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &TaxonomyNode> {
        self.nodes.values()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, TaxonomyNode> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a Taxonomy {
    type Item = (&'a String, &'a TaxonomyNode);
    type IntoIter = hash_map::Iter<'a, String, TaxonomyNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl Extend<TaxonomyNode> for Taxonomy {
    fn extend<I: IntoIterator<Item = TaxonomyNode>>(&mut self, iter: I) {
        for node in iter {
            self.add(node.id.clone(), node);
        }
    }
}

impl FromIterator<TaxonomyNode> for Taxonomy {
    fn from_iter<I: IntoIterator<Item = TaxonomyNode>>(iter: I) -> Self {
        let mut taxonomy = Self::new();
        taxonomy.extend(iter);
        taxonomy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apples() -> TaxonomyNode {
        TaxonomyNode::new("en:apples")
            .with_name("en", "Apple")
            .with_name("fr", "Pomme")
            .with_synonyms("en", ["Apples"])
            .with_synonyms("fr", ["Pommes"])
    }

    #[test]
    fn add_overwrites_last_write_wins() {
        let mut taxonomy = Taxonomy::new();
        assert!(taxonomy.add("en:apples", apples()).is_none());

        let replacement = TaxonomyNode::new("en:apples").with_name("en", "Green apple");
        let previous = taxonomy.add("en:apples", replacement.clone());

        assert_eq!(previous, Some(apples()));
        assert_eq!(taxonomy.len(), 1);
        assert_eq!(taxonomy.get("en:apples"), Some(&replacement));
    }

    #[test]
    fn localized_name_fallbacks() {
        let node = apples().with_name(NEUTRAL_LANG, "Malus");
        assert_eq!(node.localized_name("fr"), "Pomme");
        assert_eq!(node.localized_name("de"), "Malus");
        assert_eq!(apples().localized_name("de"), "en:apples");
    }

    #[test]
    fn synonyms_of_missing_language_are_empty() {
        let node = apples();
        assert_eq!(node.synonyms("fr"), ["Pommes"]);
        assert!(node.synonyms("es").is_empty());
    }

    #[test]
    fn with_synonyms_appends() {
        let node = TaxonomyNode::new("en:grapes")
            .with_synonyms("fr", ["Raisins"])
            .with_synonyms("fr", ["Raisins d'automne"]);
        assert_eq!(node.synonyms("fr"), ["Raisins", "Raisins d'automne"]);
    }

    #[test]
    fn raw_aliases_start_with_the_id() {
        let node = apples();
        let mut aliases: Vec<_> = node.raw_aliases().collect();
        assert_eq!(aliases[0], "en:apples");
        aliases.sort();
        assert_eq!(
            aliases,
            ["en:Apple", "en:Apples", "en:apples", "fr:Pomme", "fr:Pommes"]
        );
    }

    #[test]
    fn collect_from_nodes() {
        let taxonomy: Taxonomy = [apples(), TaxonomyNode::new("en:bananas")]
            .into_iter()
            .collect();
        assert!(taxonomy.contains("en:bananas"));
        assert!(!taxonomy.contains("en:cherries"));
        let mut keys: Vec<_> = taxonomy.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["en:apples", "en:bananas"]);
        assert_eq!(taxonomy.nodes().count(), 2);
        assert_eq!((&taxonomy).into_iter().count(), 2);
        assert!(!taxonomy.is_empty());
    }
}
