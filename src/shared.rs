//! An alias table that can be swapped out while readers keep resolving.

use crate::{
    mapping::AliasTable,
    normalizer::{Normalizer, default_normalizer},
    resolve::{ResolveError, map_to_canonical_id},
    taxonomy::Taxonomy,
};
use parking_lot::RwLock;
use std::{collections::HashMap, sync::Arc};
use tracing::info;

/// Holds the current [`AliasTable`] behind an `Arc`.
///
/// Readers take a snapshot with [`load`](Self::load) and resolve against it
/// without holding any lock. A rebuild constructs the new table first and
/// only then swaps the pointer, so a reader sees either the old table or the
/// new one, never a partially built one.
#[derive(Debug, Default)]
pub struct SharedAliasTable {
    current: RwLock<Arc<AliasTable>>,
}

impl SharedAliasTable {
    pub fn new(table: AliasTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
        }
    }

    pub fn from_taxonomy(taxonomy: &Taxonomy) -> Self {
        Self::new(AliasTable::build(taxonomy))
    }

    /// Snapshot of the current table.
    pub fn load(&self) -> Arc<AliasTable> {
        Arc::clone(&self.current.read())
    }

    /// Swap in a prebuilt table and return the previous one.
    pub fn replace(&self, table: AliasTable) -> Arc<AliasTable> {
        let next = Arc::new(table);
        let aliases = next.len();
        let previous = std::mem::replace(&mut *self.current.write(), next);
        info!(
            previous = previous.len(),
            current = aliases,
            "alias table replaced"
        );
        previous
    }

    /// Build a fresh table from `taxonomy` and swap it in.
    pub fn rebuild(&self, taxonomy: &Taxonomy) -> Arc<AliasTable> {
        self.rebuild_with(taxonomy, default_normalizer())
    }

    pub fn rebuild_with(&self, taxonomy: &Taxonomy, normalizer: &Normalizer) -> Arc<AliasTable> {
        // Built outside the lock; only the pointer swap is exclusive.
        let table = AliasTable::build_with(taxonomy, normalizer);
        self.replace(table)
    }

    pub fn resolve(&self, value: &str) -> Result<String, ResolveError> {
        self.load().resolve(value)
    }

    pub fn map_to_canonical_id<I, S>(
        &self,
        values: I,
    ) -> Result<HashMap<String, String>, ResolveError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        map_to_canonical_id(&self.load(), values)
    }
}

impl From<AliasTable> for SharedAliasTable {
    fn from(table: AliasTable) -> Self {
        Self::new(table)
    }
}
