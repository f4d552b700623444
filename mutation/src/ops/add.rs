//! Append operations.

use pokedex_core::{
    Attack, AttackAttrs, AttackField, BucketKey, Pokemon, PokemonAttrs, PokemonField, Value,
};
use pokedex_store::CatalogStore;

use crate::error::{MutationError, MutationResult};

/// Append a new creature carrying only the fields it was handed; anything
/// not supplied stays absent. No uniqueness check is made against existing
/// ids or names; duplicates are permitted and later lookups take the first
/// match.
pub fn add_pokemon<'s>(
    store: &'s mut CatalogStore,
    id: Option<Value>,
    name: Option<Value>,
    classification: Option<Value>,
) -> &'s Pokemon {
    let mut fields = PokemonAttrs::new();
    if let Some(id) = id {
        fields.insert(PokemonField::Id, id);
    }
    if let Some(name) = name {
        fields.insert(PokemonField::Name, name);
    }
    if let Some(classification) = classification {
        fields.insert(PokemonField::Classification, classification);
    }

    let position = store.pokemon.len();
    store.pokemon.push(Pokemon::from_fields(fields));
    &store.pokemon[position]
}

/// Append an attack to a global bucket. The bucket key must be one of the
/// two fixed names; anything else is rejected. The buckets are independent
/// of entity-embedded attack sets, so no creature record changes.
pub fn add_attack<'s>(
    store: &'s mut CatalogStore,
    bucket: &str,
    name: Option<Value>,
    kind: Option<Value>,
    damage: Option<Value>,
) -> MutationResult<&'s Attack> {
    let key = BucketKey::parse(bucket).ok_or_else(|| MutationError::invalid_bucket(bucket))?;

    let mut fields = AttackAttrs::new();
    if let Some(name) = name {
        fields.insert(AttackField::Name, name);
    }
    if let Some(kind) = kind {
        fields.insert(AttackField::Type, kind);
    }
    if let Some(damage) = damage {
        fields.insert(AttackField::Damage, damage);
    }

    let bucket = store.attacks.bucket_mut(key);
    let position = bucket.len();
    bucket.push(Attack::from_fields(fields));
    Ok(&store.attacks.bucket(key)[position])
}

/// Append a type name and return the full updated list. No duplicate check.
pub fn add_type<'s>(store: &'s mut CatalogStore, name: &str) -> &'s [String] {
    store.types.push(name.to_string());
    &store.types
}
