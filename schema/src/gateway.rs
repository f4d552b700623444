//! Request dispatch.
//!
//! One call per incoming operation: look the name up in the declared
//! surface, coerce the arguments, run the matching query or mutation, and
//! shape the result. The store is borrowed for the whole call, so a found
//! record is mutated under the same borrow that found it.

use pokedex_core::Value;
use pokedex_mutation as mutation;
use pokedex_query as query;
use pokedex_store::CatalogStore;
use serde_json::{Map, Value as Json};

use crate::coerce::{coerce_arguments, Arguments};
use crate::error::{GatewayError, GatewayResult};
use crate::ops::operation;
use crate::shape;

/// Execute a named operation against the catalog and return the shaped
/// result. Not-found lookups return `Ok(Json::Null)`.
pub fn execute(
    store: &mut CatalogStore,
    name: &str,
    arguments: &Map<String, Json>,
) -> GatewayResult<Json> {
    let def = operation(name).ok_or_else(|| GatewayError::unknown_operation(name))?;
    let mut args = coerce_arguments(def, arguments)?;

    match def.name {
        "Pokemons" => Ok(shape::pokemon_list_json(query::all_pokemon(store))),
        "Pokemon" => Ok(option_json(
            query::pokemon_by_id_or_name(store, str_arg(&args, "id"), str_arg(&args, "name")),
            shape::pokemon_json,
        )),
        "Types" => Ok(shape::types_json(query::all_types(store))),
        "Attacks" => Ok(shape::buckets_json(query::attack_buckets(store))),
        "Attack" => Ok(option_json(
            query::attacks_in_bucket(store, key_arg(&args, "type")),
            shape::attack_list_json,
        )),
        "PokemonByType" => Ok(shape::pokemon_list_json(query::pokemon_by_type(
            store,
            key_arg(&args, "name"),
        ))),
        "PokemonByAttack" => Ok(shape::pokemon_list_json(query::pokemon_by_attack(
            store,
            key_arg(&args, "name"),
        ))),

        "addPokemon" => Ok(shape::pokemon_json(mutation::add_pokemon(
            store,
            args.remove("id"),
            args.remove("name"),
            args.remove("classification"),
        ))),
        "addAttack" => {
            let bucket = owned_key_arg(&mut args, "fastOrSpecial");
            let attack = mutation::add_attack(
                store,
                &bucket,
                args.remove("name"),
                args.remove("type"),
                args.remove("damage"),
            )?;
            Ok(shape::attack_json(attack))
        }
        "addType" => Ok(shape::types_json(mutation::add_type(
            store,
            key_arg(&args, "name"),
        ))),
        "editPokemon" => {
            let name = owned_key_arg(&mut args, "name");
            let field = owned_key_arg(&mut args, "editField");
            let value = args.remove("editValue").unwrap_or(Value::Null);
            let edited = mutation::edit_pokemon_field(store, &name, &field, value)?;
            Ok(option_json(edited, shape::pokemon_json))
        }
        "editType" => Ok(option_json(
            mutation::edit_type(store, key_arg(&args, "name"), key_arg(&args, "newName")),
            shape::types_json,
        )),
        "editAttack" => {
            let bucket = owned_key_arg(&mut args, "fastOrSpecial");
            let name = owned_key_arg(&mut args, "name");
            let field = owned_key_arg(&mut args, "editField");
            let value = args.remove("editValue").unwrap_or(Value::Null);
            let edited = mutation::edit_attack(store, &bucket, &name, &field, value)?;
            Ok(option_json(edited, shape::attack_json))
        }
        "deletePokemon" => Ok(option_json(
            mutation::remove_pokemon(store, key_arg(&args, "name")),
            shape::pokemon_list_json,
        )),
        "deleteType" => Ok(option_json(
            mutation::remove_type(store, key_arg(&args, "name")),
            shape::types_json,
        )),
        "deleteAttack" => {
            let bucket = owned_key_arg(&mut args, "fastOrSpecial");
            let name = owned_key_arg(&mut args, "name");
            let removed = mutation::remove_attack(store, &bucket, &name)?;
            Ok(option_json(removed, shape::buckets_json))
        }
        _ => Err(GatewayError::unknown_operation(def.name)),
    }
}

/// An optional string argument; absent stays absent.
fn str_arg<'a>(args: &'a Arguments, name: &str) -> Option<&'a str> {
    args.get(name).and_then(Value::as_str)
}

/// A lookup-key argument. Absent keys default to the empty string, which
/// matches nothing unless an entry is literally named "".
fn key_arg<'a>(args: &'a Arguments, name: &str) -> &'a str {
    str_arg(args, name).unwrap_or("")
}

fn owned_key_arg(args: &mut Arguments, name: &str) -> String {
    match args.remove(name) {
        Some(Value::String(s)) => s,
        _ => String::new(),
    }
}

fn option_json<T>(value: Option<T>, shape_fn: impl FnOnce(T) -> Json) -> Json {
    value.map(shape_fn).unwrap_or(Json::Null)
}
