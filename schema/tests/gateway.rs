//! End-to-end dispatch tests over a seeded catalog.

use pokedex_schema::{execute, GatewayError};
use pokedex_store::{seed, CatalogStore};
use serde_json::{json, Map, Value as Json};

fn run(store: &mut CatalogStore, operation: &str, arguments: Json) -> Json {
    try_run(store, operation, arguments).unwrap()
}

fn try_run(
    store: &mut CatalogStore,
    operation: &str,
    arguments: Json,
) -> Result<Json, GatewayError> {
    let arguments: Map<String, Json> = match arguments {
        Json::Object(map) => map,
        _ => Map::new(),
    };
    execute(store, operation, &arguments)
}

#[test]
fn add_pokemon_then_lookup_round_trip() {
    let mut store = seed();
    let added = run(
        &mut store,
        "addPokemon",
        json!({"id": "152", "name": "Chikorita", "classification": "Leaf Pokemon"}),
    );
    assert_eq!(added["name"], json!("Chikorita"));
    // Fields beyond the three supplied are declared but absent.
    assert_eq!(added["maxCP"], Json::Null);

    let found = run(&mut store, "Pokemon", json!({"name": "Chikorita"}));
    assert_eq!(found["id"], json!("152"));
}

#[test]
fn pokemon_lookup_is_or_not_and() {
    let mut store = seed();
    // id matches Bulbasaur, name matches Charmander; the earlier record
    // wins because either field alone qualifies.
    let found = run(&mut store, "Pokemon", json!({"id": "001", "name": "Charmander"}));
    assert_eq!(found["name"], json!("Bulbasaur"));

    let found = run(&mut store, "Pokemon", json!({"id": "004", "name": "Bulbasaur"}));
    assert_eq!(found["name"], json!("Bulbasaur"));

    // No arguments matches nothing.
    assert_eq!(run(&mut store, "Pokemon", json!({})), Json::Null);
}

#[test]
fn added_attack_lands_in_bucket_but_not_in_any_entity() {
    let mut store = seed();
    run(
        &mut store,
        "addAttack",
        json!({"fastOrSpecial": "fast", "name": "Mud Shot", "type": "Ground", "damage": 6}),
    );

    let buckets = run(&mut store, "Attacks", json!({}));
    let fast = buckets["fast"].as_array().unwrap();
    assert!(fast.iter().any(|a| a["name"] == json!("Mud Shot")));

    // Divergence invariant: no creature's embedded attack set changed.
    let all = run(&mut store, "Pokemons", json!({}));
    for pokemon in all.as_array().unwrap() {
        for bucket in ["fast", "special"] {
            let embedded = pokemon["attacks"][bucket].as_array().unwrap();
            assert!(embedded.iter().all(|a| a["name"] != json!("Mud Shot")));
        }
    }
}

#[test]
fn edit_pokemon_writes_verbatim_without_coercion() {
    let mut store = seed();
    run(
        &mut store,
        "editPokemon",
        json!({"name": "Pikachu", "editField": "maxCP", "editValue": "600"}),
    );

    // Declared Int, but the stored string is surfaced as written.
    let pikachu = run(&mut store, "Pokemon", json!({"name": "Pikachu"}));
    assert_eq!(pikachu["maxCP"], json!("600"));
}

#[test]
fn edit_pokemon_rejects_unknown_field() {
    let mut store = seed();
    let err = try_run(
        &mut store,
        "editPokemon",
        json!({"name": "Pikachu", "editField": "shinyRate", "editValue": "1"}),
    );
    assert!(matches!(err, Err(GatewayError::Mutation(_))));
}

#[test]
fn edit_pokemon_unmatched_name_is_null() {
    let mut store = seed();
    let result = run(
        &mut store,
        "editPokemon",
        json!({"name": "Mewtwo", "editField": "maxCP", "editValue": "1"}),
    );
    assert_eq!(result, Json::Null);
}

#[test]
fn delete_attack_returns_whole_mapping() {
    let mut store = seed();
    run(
        &mut store,
        "addAttack",
        json!({"fastOrSpecial": "special", "name": "Thunder Wave", "type": "Electric", "damage": 0}),
    );
    let fast_before = run(&mut store, "Attacks", json!({}))["fast"]
        .as_array()
        .unwrap()
        .len();

    let buckets = run(
        &mut store,
        "deleteAttack",
        json!({"fastOrSpecial": "special", "name": "Thunder Wave"}),
    );
    let special = buckets["special"].as_array().unwrap();
    assert!(special.iter().all(|a| a["name"] != json!("Thunder Wave")));
    assert_eq!(buckets["fast"].as_array().unwrap().len(), fast_before);
}

#[test]
fn pokemon_by_attack_duplicates_per_matching_instance() {
    let mut store = seed();
    let found = run(&mut store, "PokemonByAttack", json!({"name": "Tackle"}));
    let names: Vec<&Json> = found.as_array().unwrap().iter().map(|p| &p["name"]).collect();
    assert_eq!(names, [&json!("Bulbasaur"), &json!("Squirtle")]);
}

#[test]
fn type_list_round_trip() {
    let mut store = seed();
    let types = run(&mut store, "addType", json!({"name": "Ghost"}));
    assert_eq!(types.as_array().unwrap().last(), Some(&json!("Ghost")));
    let position = types.as_array().unwrap().len() - 1;

    let types = run(&mut store, "editType", json!({"name": "Ghost", "newName": "Dark2"}));
    let types = types.as_array().unwrap();
    assert_eq!(types[position], json!("Dark2"));
    assert!(!types.contains(&json!("Ghost")));

    let types = run(&mut store, "deleteType", json!({"name": "Dark2"}));
    assert!(!types.as_array().unwrap().contains(&json!("Dark2")));
}

#[test]
fn attack_query_key_space_is_bucket_names() {
    let mut store = seed();
    let fast = run(&mut store, "Attack", json!({"type": "fast"}));
    assert!(!fast.as_array().unwrap().is_empty());

    // An attack type is not a bucket key; the lookup finds nothing.
    assert_eq!(run(&mut store, "Attack", json!({"type": "Fire"})), Json::Null);
}

#[test]
fn delete_pokemon_removes_first_match_and_returns_collection() {
    let mut store = seed();
    run(
        &mut store,
        "addPokemon",
        json!({"id": "999", "name": "Pikachu", "classification": "Mouse Pokemon"}),
    );

    let remaining = run(&mut store, "deletePokemon", json!({"name": "Pikachu"}));
    let remaining = remaining.as_array().unwrap();
    assert_eq!(remaining.len(), 10);
    let survivor = remaining
        .iter()
        .find(|p| p["name"] == json!("Pikachu"))
        .unwrap();
    assert_eq!(survivor["id"], json!("999"));

    assert_eq!(run(&mut store, "deletePokemon", json!({"name": "Mewtwo"})), Json::Null);
}

#[test]
fn unknown_operation_and_arguments_are_rejected() {
    let mut store = seed();
    assert!(matches!(
        try_run(&mut store, "Digimon", json!({})),
        Err(GatewayError::UnknownOperation { .. })
    ));
    assert!(matches!(
        try_run(&mut store, "Pokemon", json!({"nickname": "Sparky"})),
        Err(GatewayError::UnknownArgument { .. })
    ));
    assert!(matches!(
        try_run(&mut store, "addAttack", json!({"damage": "ten"})),
        Err(GatewayError::TypeCoercion { .. })
    ));
}

#[test]
fn invalid_bucket_is_rejected_not_silent() {
    let mut store = seed();
    let err = try_run(
        &mut store,
        "addAttack",
        json!({"fastOrSpecial": "Fire", "name": "Ember"}),
    );
    assert!(matches!(err, Err(GatewayError::Mutation(_))));
}
