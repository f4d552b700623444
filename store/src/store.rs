//! Catalog storage.

use pokedex_core::{Attack, BucketKey, Pokemon};

/// The two fixed attack buckets. This collection is independent of the
/// attack sets embedded in Pokemon records: bucket mutations never touch an
/// entity's embedded attacks, and entity edits never touch the buckets.
#[derive(Debug, Clone, Default)]
pub struct AttackBuckets {
    pub fast: Vec<Attack>,
    pub special: Vec<Attack>,
}

impl AttackBuckets {
    /// The bucket for a key, immutably.
    pub fn bucket(&self, key: BucketKey) -> &[Attack] {
        match key {
            BucketKey::Fast => &self.fast,
            BucketKey::Special => &self.special,
        }
    }

    /// The bucket for a key, mutably.
    pub fn bucket_mut(&mut self, key: BucketKey) -> &mut Vec<Attack> {
        match key {
            BucketKey::Fast => &mut self.fast,
            BucketKey::Special => &mut self.special,
        }
    }
}

/// The in-memory catalog. Created once at startup and owned by the caller;
/// there are no statics. Insertion order is preserved in every collection
/// and nothing enforces uniqueness of ids, names, or type entries.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    /// Creature records, insertion order.
    pub pokemon: Vec<Pokemon>,
    /// Type names, insertion order.
    pub types: Vec<String>,
    /// Global attack buckets.
    pub attacks: AttackBuckets,
}

impl CatalogStore {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }
}
