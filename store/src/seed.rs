//! Static seed data.
//!
//! The catalog boots from the first three evolution lines plus Pikachu.
//! The global attack buckets are seeded from the same attack tables the
//! creatures carry, but the two collections are separate from then on.

use crate::{AttackBuckets, CatalogStore};
use pokedex_core::{Attack, Pokemon, PokemonAttrs, PokemonField, Value};

/// Build the seeded catalog the process starts from.
pub fn seed() -> CatalogStore {
    CatalogStore {
        pokemon: seed_pokemon(),
        types: seed_types(),
        attacks: seed_attacks(),
    }
}

fn seed_types() -> Vec<String> {
    [
        "Grass", "Poison", "Fire", "Flying", "Water", "Normal", "Electric", "Ground", "Rock",
        "Psychic", "Ice", "Steel", "Dark", "Dragon", "Fairy", "Fighting", "Bug",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn seed_attacks() -> AttackBuckets {
    let fast = [
        ("Tackle", "Normal", 12),
        ("Vine Whip", "Grass", 7),
        ("Razor Leaf", "Grass", 15),
        ("Scratch", "Normal", 6),
        ("Ember", "Fire", 10),
        ("Fire Spin", "Fire", 14),
        ("Wing Attack", "Flying", 9),
        ("Bubble", "Water", 25),
        ("Bite", "Dark", 6),
        ("Water Gun", "Water", 6),
        ("Quick Attack", "Normal", 10),
        ("Thunder Shock", "Electric", 5),
    ];
    let special = [
        ("Power Whip", "Grass", 70),
        ("Seed Bomb", "Grass", 40),
        ("Sludge Bomb", "Poison", 55),
        ("Solar Beam", "Grass", 120),
        ("Petal Blizzard", "Grass", 65),
        ("Flame Burst", "Fire", 30),
        ("Flame Charge", "Fire", 25),
        ("Flamethrower", "Fire", 55),
        ("Dragon Claw", "Dragon", 35),
        ("Fire Blast", "Fire", 100),
        ("Aqua Jet", "Water", 25),
        ("Aqua Tail", "Water", 45),
        ("Water Pulse", "Water", 35),
        ("Hydro Pump", "Water", 90),
        ("Ice Beam", "Ice", 65),
        ("Flash Cannon", "Steel", 60),
        ("Discharge", "Electric", 35),
        ("Thunder", "Electric", 100),
        ("Thunderbolt", "Electric", 55),
    ];

    AttackBuckets {
        fast: fast
            .iter()
            .map(|(name, kind, damage)| Attack::new(*name, *kind, *damage))
            .collect(),
        special: special
            .iter()
            .map(|(name, kind, damage)| Attack::new(*name, *kind, *damage))
            .collect(),
    }
}

fn seed_pokemon() -> Vec<Pokemon> {
    vec![
        creature(CreatureSeed {
            id: "001",
            name: "Bulbasaur",
            classification: "Seed Pokemon",
            types: &["Grass", "Poison"],
            resistant: &["Water", "Electric", "Grass", "Fighting", "Fairy"],
            weakness: &["Fire", "Ice", "Flying", "Psychic"],
            weight: ("6.04kg", "7.76kg"),
            height: ("0.61m", "0.79m"),
            flee_rate: 0.1,
            max_cp: 951,
            max_hp: 1071,
            evolution_requirements: Some((25, "Bulbasaur candies")),
            evolutions: &[("002", "Ivysaur"), ("003", "Venusaur")],
            fast: &[("Tackle", "Normal", 12), ("Vine Whip", "Grass", 7)],
            special: &[
                ("Power Whip", "Grass", 70),
                ("Seed Bomb", "Grass", 40),
                ("Sludge Bomb", "Poison", 55),
            ],
        }),
        creature(CreatureSeed {
            id: "002",
            name: "Ivysaur",
            classification: "Seed Pokemon",
            types: &["Grass", "Poison"],
            resistant: &["Water", "Electric", "Grass", "Fighting", "Fairy"],
            weakness: &["Fire", "Ice", "Flying", "Psychic"],
            weight: ("11.38kg", "14.63kg"),
            height: ("0.88m", "1.13m"),
            flee_rate: 0.07,
            max_cp: 1483,
            max_hp: 1632,
            evolution_requirements: Some((100, "Bulbasaur candies")),
            evolutions: &[("003", "Venusaur")],
            fast: &[("Razor Leaf", "Grass", 15), ("Vine Whip", "Grass", 7)],
            special: &[
                ("Power Whip", "Grass", 70),
                ("Sludge Bomb", "Poison", 55),
                ("Solar Beam", "Grass", 120),
            ],
        }),
        creature(CreatureSeed {
            id: "003",
            name: "Venusaur",
            classification: "Seed Pokemon",
            types: &["Grass", "Poison"],
            resistant: &["Water", "Electric", "Grass", "Fighting", "Fairy"],
            weakness: &["Fire", "Ice", "Flying", "Psychic"],
            weight: ("87.5kg", "112.5kg"),
            height: ("1.75m", "2.25m"),
            flee_rate: 0.05,
            max_cp: 2392,
            max_hp: 2580,
            evolution_requirements: None,
            evolutions: &[],
            fast: &[("Razor Leaf", "Grass", 15), ("Vine Whip", "Grass", 7)],
            special: &[
                ("Petal Blizzard", "Grass", 65),
                ("Sludge Bomb", "Poison", 55),
                ("Solar Beam", "Grass", 120),
            ],
        }),
        creature(CreatureSeed {
            id: "004",
            name: "Charmander",
            classification: "Lizard Pokemon",
            types: &["Fire"],
            resistant: &["Fire", "Grass", "Ice", "Steel"],
            weakness: &["Water", "Ground", "Rock"],
            weight: ("7.44kg", "9.56kg"),
            height: ("0.53m", "0.68m"),
            flee_rate: 0.1,
            max_cp: 841,
            max_hp: 955,
            evolution_requirements: Some((25, "Charmander candies")),
            evolutions: &[("005", "Charmeleon"), ("006", "Charizard")],
            fast: &[("Ember", "Fire", 10), ("Scratch", "Normal", 6)],
            special: &[
                ("Flame Burst", "Fire", 30),
                ("Flame Charge", "Fire", 25),
                ("Flamethrower", "Fire", 55),
            ],
        }),
        creature(CreatureSeed {
            id: "005",
            name: "Charmeleon",
            classification: "Flame Pokemon",
            types: &["Fire"],
            resistant: &["Fire", "Grass", "Ice", "Steel"],
            weakness: &["Water", "Ground", "Rock"],
            weight: ("16.63kg", "21.38kg"),
            height: ("0.96m", "1.24m"),
            flee_rate: 0.07,
            max_cp: 1411,
            max_hp: 1557,
            evolution_requirements: Some((100, "Charmander candies")),
            evolutions: &[("006", "Charizard")],
            fast: &[("Ember", "Fire", 10), ("Scratch", "Normal", 6)],
            special: &[
                ("Fire Blast", "Fire", 100),
                ("Flame Burst", "Fire", 30),
                ("Flamethrower", "Fire", 55),
            ],
        }),
        creature(CreatureSeed {
            id: "006",
            name: "Charizard",
            classification: "Flame Pokemon",
            types: &["Fire", "Flying"],
            resistant: &["Fire", "Grass", "Fighting", "Bug", "Steel", "Fairy"],
            weakness: &["Water", "Electric", "Rock"],
            weight: ("79.19kg", "101.81kg"),
            height: ("1.49m", "1.91m"),
            flee_rate: 0.05,
            max_cp: 2413,
            max_hp: 2602,
            evolution_requirements: None,
            evolutions: &[],
            fast: &[("Fire Spin", "Fire", 14), ("Wing Attack", "Flying", 9)],
            special: &[
                ("Dragon Claw", "Dragon", 35),
                ("Fire Blast", "Fire", 100),
                ("Flamethrower", "Fire", 55),
            ],
        }),
        creature(CreatureSeed {
            id: "007",
            name: "Squirtle",
            classification: "Tiny Turtle Pokemon",
            types: &["Water"],
            resistant: &["Fire", "Water", "Ice", "Steel"],
            weakness: &["Electric", "Grass"],
            weight: ("7.85kg", "10.16kg"),
            height: ("0.44m", "0.57m"),
            flee_rate: 0.1,
            max_cp: 891,
            max_hp: 1008,
            evolution_requirements: Some((25, "Squirtle candies")),
            evolutions: &[("008", "Wartortle"), ("009", "Blastoise")],
            fast: &[("Bubble", "Water", 25), ("Tackle", "Normal", 12)],
            special: &[
                ("Aqua Jet", "Water", 25),
                ("Aqua Tail", "Water", 45),
                ("Water Pulse", "Water", 35),
            ],
        }),
        creature(CreatureSeed {
            id: "008",
            name: "Wartortle",
            classification: "Turtle Pokemon",
            types: &["Water"],
            resistant: &["Fire", "Water", "Ice", "Steel"],
            weakness: &["Electric", "Grass"],
            weight: ("19.69kg", "25.31kg"),
            height: ("0.88m", "1.13m"),
            flee_rate: 0.07,
            max_cp: 1435,
            max_hp: 1582,
            evolution_requirements: Some((100, "Squirtle candies")),
            evolutions: &[("009", "Blastoise")],
            fast: &[("Bite", "Dark", 6), ("Water Gun", "Water", 6)],
            special: &[
                ("Aqua Jet", "Water", 25),
                ("Hydro Pump", "Water", 90),
                ("Ice Beam", "Ice", 65),
            ],
        }),
        creature(CreatureSeed {
            id: "009",
            name: "Blastoise",
            classification: "Shellfish Pokemon",
            types: &["Water"],
            resistant: &["Fire", "Water", "Ice", "Steel"],
            weakness: &["Electric", "Grass"],
            weight: ("74.81kg", "96.19kg"),
            height: ("1.4m", "1.8m"),
            flee_rate: 0.05,
            max_cp: 2291,
            max_hp: 2475,
            evolution_requirements: None,
            evolutions: &[],
            fast: &[("Bite", "Dark", 6), ("Water Gun", "Water", 6)],
            special: &[
                ("Flash Cannon", "Steel", 60),
                ("Hydro Pump", "Water", 90),
                ("Ice Beam", "Ice", 65),
            ],
        }),
        creature(CreatureSeed {
            id: "025",
            name: "Pikachu",
            classification: "Mouse Pokemon",
            types: &["Electric"],
            resistant: &["Electric", "Flying", "Steel"],
            weakness: &["Ground"],
            weight: ("5.25kg", "6.75kg"),
            height: ("0.35m", "0.45m"),
            flee_rate: 0.1,
            max_cp: 777,
            max_hp: 887,
            evolution_requirements: Some((50, "Pikachu candies")),
            evolutions: &[("026", "Raichu")],
            fast: &[("Quick Attack", "Normal", 10), ("Thunder Shock", "Electric", 5)],
            special: &[
                ("Discharge", "Electric", 35),
                ("Thunder", "Electric", 100),
                ("Thunderbolt", "Electric", 55),
            ],
        }),
    ]
}

/// Flat seed row for one creature.
struct CreatureSeed {
    id: &'static str,
    name: &'static str,
    classification: &'static str,
    types: &'static [&'static str],
    resistant: &'static [&'static str],
    weakness: &'static [&'static str],
    weight: (&'static str, &'static str),
    height: (&'static str, &'static str),
    flee_rate: f64,
    max_cp: i64,
    max_hp: i64,
    evolution_requirements: Option<(i64, &'static str)>,
    evolutions: &'static [(&'static str, &'static str)],
    fast: &'static [(&'static str, &'static str, i64)],
    special: &'static [(&'static str, &'static str, i64)],
}

fn creature(seed: CreatureSeed) -> Pokemon {
    let mut fields = PokemonAttrs::new();
    fields.insert(PokemonField::Id, Value::from(seed.id));
    fields.insert(PokemonField::Name, Value::from(seed.name));
    fields.insert(PokemonField::Classification, Value::from(seed.classification));
    fields.insert(PokemonField::Types, Value::list(seed.types.iter().copied()));
    fields.insert(
        PokemonField::Resistant,
        Value::list(seed.resistant.iter().copied()),
    );
    fields.insert(
        PokemonField::Weakness,
        Value::list(seed.weakness.iter().copied()),
    );
    fields.insert(PokemonField::Weight, min_max(seed.weight));
    fields.insert(PokemonField::Height, min_max(seed.height));
    fields.insert(PokemonField::FleeRate, Value::Float(seed.flee_rate));
    fields.insert(PokemonField::MaxCp, Value::Int(seed.max_cp));
    fields.insert(PokemonField::MaxHp, Value::Int(seed.max_hp));
    if let Some((amount, name)) = seed.evolution_requirements {
        fields.insert(
            PokemonField::EvolutionRequirements,
            Value::object([("amount", Value::Int(amount)), ("name", Value::from(name))]),
        );
    }
    if !seed.evolutions.is_empty() {
        fields.insert(
            PokemonField::Evolutions,
            Value::List(
                seed.evolutions
                    .iter()
                    .map(|(id, name)| {
                        Value::object([("id", Value::from(*id)), ("name", Value::from(*name))])
                    })
                    .collect(),
            ),
        );
    }
    fields.insert(
        PokemonField::Attacks,
        Value::object([
            ("fast", attack_list(seed.fast)),
            ("special", attack_list(seed.special)),
        ]),
    );
    Pokemon::from_fields(fields)
}

fn min_max((minimum, maximum): (&str, &str)) -> Value {
    Value::object([("minimum", Value::from(minimum)), ("maximum", Value::from(maximum))])
}

fn attack_list(rows: &[(&str, &str, i64)]) -> Value {
    Value::List(
        rows.iter()
            .map(|(name, kind, damage)| {
                Value::object([
                    ("name", Value::from(*name)),
                    ("type", Value::from(*kind)),
                    ("damage", Value::Int(*damage)),
                ])
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_core::BucketKey;

    #[test]
    fn test_seed_shape() {
        let store = seed();
        assert_eq!(store.pokemon.len(), 10);
        assert_eq!(store.types.len(), 17);
        assert!(!store.attacks.fast.is_empty());
        assert!(!store.attacks.special.is_empty());
    }

    #[test]
    fn test_seed_order_preserved() {
        let store = seed();
        assert_eq!(store.pokemon[0].name(), Some("Bulbasaur"));
        assert_eq!(store.pokemon[9].name(), Some("Pikachu"));
        assert_eq!(store.types[0], "Grass");
    }

    #[test]
    fn test_seeded_creature_has_full_field_set() {
        let store = seed();
        let pikachu = &store.pokemon[9];
        assert_eq!(pikachu.id(), Some("025"));
        assert_eq!(pikachu.type_names().collect::<Vec<_>>(), ["Electric"]);
        assert_eq!(pikachu.embedded_attacks(BucketKey::Fast).count(), 2);
        assert_eq!(pikachu.embedded_attacks(BucketKey::Special).count(), 3);
        assert!(pikachu
            .get(PokemonField::EvolutionRequirements)
            .is_some_and(|v| v.get("amount") == Some(&Value::Int(50))));
    }
}
