//! Membership filters over the creature collection.

use pokedex_core::{BucketKey, Pokemon};
use pokedex_store::CatalogStore;

/// All creatures whose `types` list contains `type_name`, collection order.
/// Membership is boolean: a creature appears once no matter how many of
/// its types match.
pub fn pokemon_by_type<'s>(store: &'s CatalogStore, type_name: &str) -> Vec<&'s Pokemon> {
    store
        .pokemon
        .iter()
        .filter(|pokemon| pokemon.type_names().any(|t| t == type_name))
        .collect()
}

/// All creatures with an embedded attack named `attack_name`, scanning fast
/// then special. A creature is pushed once per matching attack, so a
/// creature carrying two attacks with the name appears twice.
pub fn pokemon_by_attack<'s>(store: &'s CatalogStore, attack_name: &str) -> Vec<&'s Pokemon> {
    let mut results = Vec::new();
    for pokemon in &store.pokemon {
        let all_attacks = pokemon
            .embedded_attacks(BucketKey::Fast)
            .chain(pokemon.embedded_attacks(BucketKey::Special));
        for attack in all_attacks {
            if attack.get("name").and_then(|v| v.as_str()) == Some(attack_name) {
                results.push(pokemon);
            }
        }
    }
    results
}
