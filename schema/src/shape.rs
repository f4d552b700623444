//! Output shaping: native records to declared JSON shapes.
//!
//! Shaped records always carry every declared field. A declared field
//! absent on the record shapes to null. Scalar and string-list slots
//! serialize whatever value they hold, verbatim, so an edit that wrote a
//! string into an Int-declared slot is visible on the wire. A slot with a
//! declared nested shape (weight, evolutions, attacks) holding anything
//! un-shapeable yields null instead.

use pokedex_core::{Attack, Pokemon, PokemonField, Value, ATTACK_FIELDS, POKEMON_FIELDS};
use pokedex_store::AttackBuckets;
use serde_json::{json, Map, Value as Json};

/// Serialize a stored value verbatim.
pub fn value_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => json!(b),
        Value::Int(i) => json!(i),
        Value::Float(f) => json!(f),
        Value::String(s) => json!(s),
        Value::List(items) => Json::Array(items.iter().map(value_json).collect()),
        Value::Object(pairs) => {
            let mut map = Map::new();
            for (key, value) in pairs {
                map.insert(key.clone(), value_json(value));
            }
            Json::Object(map)
        }
    }
}

/// Shape a creature record into the declared Pokemon output shape.
pub fn pokemon_json(pokemon: &Pokemon) -> Json {
    let mut map = Map::new();
    for field in POKEMON_FIELDS {
        map.insert(field.as_str().to_string(), field_json(pokemon, field));
    }
    Json::Object(map)
}

/// Shape a list of creature records.
pub fn pokemon_list_json<'p>(pokemon: impl IntoIterator<Item = &'p Pokemon>) -> Json {
    Json::Array(pokemon.into_iter().map(pokemon_json).collect())
}

fn field_json(pokemon: &Pokemon, field: PokemonField) -> Json {
    let Some(value) = pokemon.get(field) else {
        return Json::Null;
    };
    match field {
        PokemonField::Weight | PokemonField::Height => {
            object_shape(value, &["minimum", "maximum"])
        }
        PokemonField::EvolutionRequirements => object_shape(value, &["amount", "name"]),
        PokemonField::Evolutions => {
            list_shape(value, |item| object_shape(item, &["id", "name"]))
        }
        PokemonField::Attacks => attack_set_json(value),
        // Scalar- and string-list-declared fields serialize verbatim.
        _ => value_json(value),
    }
}

/// Shape an embedded attack set value: {fast: [Attack], special: [Attack]}.
fn attack_set_json(value: &Value) -> Json {
    if !value.is_object() {
        return Json::Null;
    }
    let bucket = |key: &str| match value.get(key) {
        Some(list) => list_shape(list, |item| object_shape(item, &["name", "type", "damage"])),
        None => Json::Null,
    };
    json!({ "fast": bucket("fast"), "special": bucket("special") })
}

/// Shape a value declared as an object with the given keys. Declared keys
/// absent on the value shape to null; undeclared keys are dropped.
fn object_shape(value: &Value, keys: &[&str]) -> Json {
    if !value.is_object() {
        return Json::Null;
    }
    let mut map = Map::new();
    for key in keys {
        let shaped = value.get(key).map(value_json).unwrap_or(Json::Null);
        map.insert(key.to_string(), shaped);
    }
    Json::Object(map)
}

/// Shape a value declared as a list, applying `shape_item` per element.
fn list_shape(value: &Value, shape_item: impl Fn(&Value) -> Json) -> Json {
    match value.as_list() {
        Some(items) => Json::Array(items.iter().map(shape_item).collect()),
        None => Json::Null,
    }
}

/// Shape a global attack record into the declared Attack output shape.
pub fn attack_json(attack: &Attack) -> Json {
    let mut map = Map::new();
    for field in ATTACK_FIELDS {
        let shaped = attack.get(field).map(value_json).unwrap_or(Json::Null);
        map.insert(field.as_str().to_string(), shaped);
    }
    Json::Object(map)
}

/// Shape a list of global attack records.
pub fn attack_list_json<'a>(attacks: impl IntoIterator<Item = &'a Attack>) -> Json {
    Json::Array(attacks.into_iter().map(attack_json).collect())
}

/// Shape the whole bucket mapping.
pub fn buckets_json(buckets: &AttackBuckets) -> Json {
    json!({
        "fast": attack_list_json(&buckets.fast),
        "special": attack_list_json(&buckets.special),
    })
}

/// Shape the type name list.
pub fn types_json(types: &[String]) -> Json {
    Json::Array(types.iter().map(|name| json!(name)).collect())
}
