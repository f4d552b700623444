//! Field-edit operations.
//!
//! Field names arrive as strings and resolve through the closed field-key
//! sets; an unknown name is an invalid-key rejection rather than a silent
//! new attribute. The resolved value is stored verbatim with no coercion
//! and no schema validation, so writing a string into an Int-declared slot
//! (or a scalar over a nested object) sticks: last write wins.

use pokedex_core::{Attack, AttackField, BucketKey, Pokemon, PokemonField, Value};
use pokedex_query::{attack_position, pokemon_position_by_name, type_position};
use pokedex_store::CatalogStore;

use crate::error::{MutationError, MutationResult};

/// Set a field on the first creature with the given name (exact match, no
/// id fallback). `Ok(None)` when no creature matches.
pub fn edit_pokemon_field<'s>(
    store: &'s mut CatalogStore,
    name: &str,
    field: &str,
    value: Value,
) -> MutationResult<Option<&'s Pokemon>> {
    let field = PokemonField::from_name(field)
        .ok_or_else(|| MutationError::invalid_pokemon_field(field))?;

    let Some(position) = pokemon_position_by_name(store, name) else {
        return Ok(None);
    };
    store.pokemon[position].set(field, value);
    Ok(Some(&store.pokemon[position]))
}

/// Replace the first type entry equal to `old_name` in place, preserving
/// its position, and return the full updated list. `None` when no entry
/// matches.
pub fn edit_type<'s>(
    store: &'s mut CatalogStore,
    old_name: &str,
    new_name: &str,
) -> Option<&'s [String]> {
    let position = type_position(store, old_name)?;
    store.types[position] = new_name.to_string();
    Some(&store.types)
}

/// Set a field on the first attack named `name` in the given bucket.
/// `Ok(None)` when no attack matches.
pub fn edit_attack<'s>(
    store: &'s mut CatalogStore,
    bucket: &str,
    name: &str,
    field: &str,
    value: Value,
) -> MutationResult<Option<&'s Attack>> {
    let key = BucketKey::parse(bucket).ok_or_else(|| MutationError::invalid_bucket(bucket))?;
    let field = AttackField::from_name(field)
        .ok_or_else(|| MutationError::invalid_attack_field(field))?;

    let Some(position) = attack_position(store, key, name) else {
        return Ok(None);
    };
    store.attacks.bucket_mut(key)[position].set(field, value);
    Ok(Some(&store.attacks.bucket(key)[position]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_query::pokemon_by_id_or_name;
    use pokedex_store::seed;

    #[test]
    fn test_edit_stores_value_verbatim() {
        let mut store = seed();
        edit_pokemon_field(&mut store, "Pikachu", "maxCP", Value::String("600".into())).unwrap();

        // The string is not coerced to the declared Int.
        let pikachu = pokemon_by_id_or_name(&store, None, Some("Pikachu")).unwrap();
        assert_eq!(
            pikachu.get(PokemonField::MaxCp),
            Some(&Value::String("600".into()))
        );
    }

    #[test]
    fn test_edit_overwrites_nested_object_with_scalar() {
        let mut store = seed();
        edit_pokemon_field(&mut store, "Bulbasaur", "attacks", Value::String("gone".into()))
            .unwrap();

        let bulbasaur = pokemon_by_id_or_name(&store, None, Some("Bulbasaur")).unwrap();
        assert_eq!(bulbasaur.embedded_attacks(BucketKey::Fast).count(), 0);
        assert_eq!(
            bulbasaur.get(PokemonField::Attacks),
            Some(&Value::String("gone".into()))
        );
    }

    #[test]
    fn test_edit_rejects_unknown_field() {
        let mut store = seed();
        let err = edit_pokemon_field(&mut store, "Pikachu", "shinyRate", Value::Int(1));
        assert!(matches!(err, Err(MutationError::InvalidPokemonField { .. })));
    }

    #[test]
    fn test_edit_unmatched_name_is_not_found() {
        let mut store = seed();
        let result = edit_pokemon_field(&mut store, "Mewtwo", "maxCP", Value::Int(1)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_edit_type_preserves_position() {
        let mut store = seed();
        add_type_fixture(&mut store);
        let position = store.types.iter().position(|t| t == "Ghost").unwrap();

        let types = edit_type(&mut store, "Ghost", "Dark2").unwrap();
        assert_eq!(types[position], "Dark2");
        assert!(!types.iter().any(|t| t == "Ghost"));
    }

    #[test]
    fn test_edit_type_not_found() {
        let mut store = seed();
        assert!(edit_type(&mut store, "Shadow", "Umbra").is_none());
    }

    #[test]
    fn test_edit_attack_field() {
        let mut store = seed();
        let attack = edit_attack(&mut store, "fast", "Tackle", "damage", Value::Int(20))
            .unwrap()
            .unwrap();
        assert_eq!(attack.get(AttackField::Damage), Some(&Value::Int(20)));
    }

    #[test]
    fn test_edit_attack_invalid_keys() {
        let mut store = seed();
        assert!(matches!(
            edit_attack(&mut store, "Normal", "Tackle", "damage", Value::Int(1)),
            Err(MutationError::InvalidBucket { .. })
        ));
        assert!(matches!(
            edit_attack(&mut store, "fast", "Tackle", "power", Value::Int(1)),
            Err(MutationError::InvalidAttackField { .. })
        ));
    }

    fn add_type_fixture(store: &mut CatalogStore) {
        store.types.push("Ghost".to_string());
    }
}
