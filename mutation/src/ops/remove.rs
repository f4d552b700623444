//! Removal operations. First match by position; the rest of the
//! collection shifts up, insertion order otherwise preserved.

use pokedex_core::{BucketKey, Pokemon};
use pokedex_query::{attack_position, pokemon_position_by_name, type_position};
use pokedex_store::{AttackBuckets, CatalogStore};

use crate::error::{MutationError, MutationResult};

/// Remove the first creature with the given name and return the full
/// updated collection. `None` when no creature matches.
pub fn remove_pokemon<'s>(store: &'s mut CatalogStore, name: &str) -> Option<&'s [Pokemon]> {
    let position = pokemon_position_by_name(store, name)?;
    store.pokemon.remove(position);
    Some(&store.pokemon)
}

/// Remove the first type entry equal to `name` and return the full updated
/// list. `None` when no entry matches.
pub fn remove_type<'s>(store: &'s mut CatalogStore, name: &str) -> Option<&'s [String]> {
    let position = type_position(store, name)?;
    store.types.remove(position);
    Some(&store.types)
}

/// Remove the first attack named `name` from the given bucket and return
/// the entire bucket mapping, both buckets, not just the modified one.
/// `Ok(None)` when no attack matches.
pub fn remove_attack<'s>(
    store: &'s mut CatalogStore,
    bucket: &str,
    name: &str,
) -> MutationResult<Option<&'s AttackBuckets>> {
    let key = BucketKey::parse(bucket).ok_or_else(|| MutationError::invalid_bucket(bucket))?;

    let Some(position) = attack_position(store, key, name) else {
        return Ok(None);
    };
    store.attacks.bucket_mut(key).remove(position);
    Ok(Some(&store.attacks))
}
