//! Field keys: the closed sets of legal field names.
//!
//! Field edits arrive from the wire as bare strings. Rather than writing to
//! arbitrary attribute names, edits resolve the string through these enums;
//! a name outside the set is rejected by the mutation layer as an invalid
//! key.

/// A field of a Pokemon record. Wire names match the schema exactly
/// (camelCase where the schema uses it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PokemonField {
    Id,
    Name,
    Classification,
    Types,
    Resistant,
    Weakness,
    Weight,
    Height,
    FleeRate,
    EvolutionRequirements,
    Evolutions,
    MaxCp,
    MaxHp,
    Attacks,
}

/// All Pokemon fields, in schema declaration order. Output shaping walks
/// this list so shaped records always carry every declared field.
pub const POKEMON_FIELDS: [PokemonField; 14] = [
    PokemonField::Id,
    PokemonField::Name,
    PokemonField::Classification,
    PokemonField::Types,
    PokemonField::Resistant,
    PokemonField::Weakness,
    PokemonField::Weight,
    PokemonField::Height,
    PokemonField::FleeRate,
    PokemonField::EvolutionRequirements,
    PokemonField::Evolutions,
    PokemonField::MaxCp,
    PokemonField::MaxHp,
    PokemonField::Attacks,
];

impl PokemonField {
    /// Resolve a wire field name. Returns None for names outside the set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "classification" => Some(Self::Classification),
            "types" => Some(Self::Types),
            "resistant" => Some(Self::Resistant),
            "weakness" => Some(Self::Weakness),
            "weight" => Some(Self::Weight),
            "height" => Some(Self::Height),
            "fleeRate" => Some(Self::FleeRate),
            "evolutionRequirements" => Some(Self::EvolutionRequirements),
            "evolutions" => Some(Self::Evolutions),
            "maxCP" => Some(Self::MaxCp),
            "maxHP" => Some(Self::MaxHp),
            "attacks" => Some(Self::Attacks),
            _ => None,
        }
    }

    /// The wire name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Classification => "classification",
            Self::Types => "types",
            Self::Resistant => "resistant",
            Self::Weakness => "weakness",
            Self::Weight => "weight",
            Self::Height => "height",
            Self::FleeRate => "fleeRate",
            Self::EvolutionRequirements => "evolutionRequirements",
            Self::Evolutions => "evolutions",
            Self::MaxCp => "maxCP",
            Self::MaxHp => "maxHP",
            Self::Attacks => "attacks",
        }
    }
}

/// A field of an Attack record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackField {
    Name,
    Type,
    Damage,
}

/// All Attack fields, in schema declaration order.
pub const ATTACK_FIELDS: [AttackField; 3] = [AttackField::Name, AttackField::Type, AttackField::Damage];

impl AttackField {
    /// Resolve a wire field name. Returns None for names outside the set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "type" => Some(Self::Type),
            "damage" => Some(Self::Damage),
            _ => None,
        }
    }

    /// The wire name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Damage => "damage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_field_round_trip() {
        for field in POKEMON_FIELDS {
            assert_eq!(PokemonField::from_name(field.as_str()), Some(field));
        }
    }

    #[test]
    fn test_unknown_names_rejected() {
        assert_eq!(PokemonField::from_name("maxCp"), None);
        assert_eq!(PokemonField::from_name("cp"), None);
        assert_eq!(AttackField::from_name("power"), None);
    }

    #[test]
    fn test_attack_field_round_trip() {
        for field in ATTACK_FIELDS {
            assert_eq!(AttackField::from_name(field.as_str()), Some(field));
        }
    }
}
