//! Listings and first-match lookups.

use pokedex_core::{Attack, BucketKey, Pokemon};
use pokedex_store::{AttackBuckets, CatalogStore};

/// All creature records, insertion order. Live references, no copies.
pub fn all_pokemon(store: &CatalogStore) -> &[Pokemon] {
    &store.pokemon
}

/// First creature whose id equals `id` or whose name equals `name`.
/// Either criterion alone matches (OR, not AND); a missing argument never
/// matches, so calling with neither argument finds nothing.
pub fn pokemon_by_id_or_name<'s>(
    store: &'s CatalogStore,
    id: Option<&str>,
    name: Option<&str>,
) -> Option<&'s Pokemon> {
    store.pokemon.iter().find(|pokemon| {
        id.is_some_and(|id| pokemon.id() == Some(id))
            || name.is_some_and(|name| pokemon.name() == Some(name))
    })
}

/// Position of the first creature with the given name, exact match only.
pub fn pokemon_position_by_name(store: &CatalogStore, name: &str) -> Option<usize> {
    store
        .pokemon
        .iter()
        .position(|pokemon| pokemon.name() == Some(name))
}

/// All type names, insertion order.
pub fn all_types(store: &CatalogStore) -> &[String] {
    &store.types
}

/// Position of the first type entry equal to `name`.
pub fn type_position(store: &CatalogStore, name: &str) -> Option<usize> {
    store.types.iter().position(|entry| entry == name)
}

/// The raw global bucket mapping.
pub fn attack_buckets(store: &CatalogStore) -> &AttackBuckets {
    &store.attacks
}

/// The global attacks under a bucket key. The key space is the bucket
/// names ("fast"/"special"), not attack types; any other key is None.
pub fn attacks_in_bucket<'s>(store: &'s CatalogStore, key: &str) -> Option<&'s [Attack]> {
    BucketKey::parse(key).map(|key| store.attacks.bucket(key))
}

/// Position of the first attack named `name` in a bucket.
pub fn attack_position(store: &CatalogStore, bucket: BucketKey, name: &str) -> Option<usize> {
    store
        .attacks
        .bucket(bucket)
        .iter()
        .position(|attack| attack.name() == Some(name))
}
