//! Alias table: every normalized `lang:tag` alias of every node, pointing at
//! the node's canonical id.

use crate::{
    normalizer::{Normalizer, default_normalizer},
    taxonomy::Taxonomy,
};
use std::collections::{HashMap, hash_map};
use tracing::debug;

/// Flat lookup from normalized alias to canonical id.
///
/// Built in one pass from a [`Taxonomy`] snapshot and never mutated
/// afterwards; rebuild it (see `shared::SharedAliasTable`) when the taxonomy
/// changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// Build the table with the default normalizer.
    pub fn build(taxonomy: &Taxonomy) -> Self {
        Self::build_with(taxonomy, default_normalizer())
    }

    /// Build the table, normalizing every alias with `normalizer`.
    ///
    /// Per node, the id itself, every `lang:name` and every `lang:synonym`
    /// are inserted. When two different nodes share an alias, the node
    /// processed last wins; taxonomy iteration order is unspecified, so the
    /// winner is too.
    pub fn build_with(taxonomy: &Taxonomy, normalizer: &Normalizer) -> Self {
        let mut entries = HashMap::with_capacity(taxonomy.len() * 4);
        let mut collisions = 0usize;

        for node in taxonomy.nodes() {
            for raw in node.raw_aliases() {
                let alias = normalizer.normalize(&raw);
                match entries.insert(alias, node.id.clone()) {
                    Some(previous) if previous != node.id => {
                        collisions += 1;
                        debug!(
                            raw = %raw,
                            replaced = %previous,
                            winner = %node.id,
                            "alias collision, last write wins"
                        );
                    }
                    _ => {}
                }
            }
        }

        debug!(
            nodes = taxonomy.len(),
            aliases = entries.len(),
            collisions,
            "built alias table"
        );
        Self { entries }
    }

    /// Canonical id for an already-normalized alias.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(alias, id)| (alias.as_str(), id.as_str()))
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.entries
    }
}

/// Build the alias table of `taxonomy` with the default normalizer.
pub fn create_taxonomy_mapping(taxonomy: &Taxonomy) -> AliasTable {
    AliasTable::build(taxonomy)
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(alias, id)| (alias.into(), id.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for AliasTable {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for AliasTable {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
