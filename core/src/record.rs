//! Record structures: Pokemon, Attack, and the attack bucket key.
//!
//! Records are field maps rather than fixed structs. Field edits write
//! values verbatim (a string written into `maxCP` stays a string), and a
//! freshly added Pokemon carries only the fields it was created with; both
//! behaviors fall out of the map representation.

use crate::{AttackField, PokemonField, Value};
use std::collections::HashMap;

/// Field storage for a Pokemon record.
pub type PokemonAttrs = HashMap<PokemonField, Value>;

/// A creature record in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Pokemon {
    fields: PokemonAttrs,
}

impl Pokemon {
    /// Create a record with only the identity fields populated, as
    /// `addPokemon` does. Every other field is absent.
    pub fn with_identity(
        id: impl Into<Value>,
        name: impl Into<Value>,
        classification: impl Into<Value>,
    ) -> Self {
        let mut fields = PokemonAttrs::new();
        fields.insert(PokemonField::Id, id.into());
        fields.insert(PokemonField::Name, name.into());
        fields.insert(PokemonField::Classification, classification.into());
        Self { fields }
    }

    /// Create a record from a prebuilt field map (seed data).
    pub fn from_fields(fields: PokemonAttrs) -> Self {
        Self { fields }
    }

    /// Get a field value. Absent fields return None.
    pub fn get(&self, field: PokemonField) -> Option<&Value> {
        self.fields.get(&field)
    }

    /// Set a field value verbatim. Last write wins.
    pub fn set(&mut self, field: PokemonField, value: Value) {
        self.fields.insert(field, value);
    }

    /// The `id` field, when present and a string.
    pub fn id(&self) -> Option<&str> {
        self.get(PokemonField::Id).and_then(Value::as_str)
    }

    /// The `name` field, when present and a string.
    pub fn name(&self) -> Option<&str> {
        self.get(PokemonField::Name).and_then(Value::as_str)
    }

    /// The `types` field as a string list. Absent or overwritten fields
    /// yield an empty iterator.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.get(PokemonField::Types)
            .and_then(Value::as_list)
            .unwrap_or(&[])
            .iter()
            .filter_map(Value::as_str)
    }

    /// The embedded attacks in a bucket of the `attacks` field, fast or
    /// special. Yields nothing when the field is absent or was overwritten
    /// with a non-object value.
    pub fn embedded_attacks(&self, bucket: BucketKey) -> impl Iterator<Item = &Value> {
        self.get(PokemonField::Attacks)
            .and_then(|attacks| attacks.get(bucket.as_str()))
            .and_then(Value::as_list)
            .unwrap_or(&[])
            .iter()
    }
}

/// Field storage for an Attack record.
pub type AttackAttrs = HashMap<AttackField, Value>;

/// An attack record, keyed by name within its bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct Attack {
    fields: AttackAttrs,
}

impl Attack {
    /// Create an attack with all three fields populated.
    pub fn new(name: impl Into<Value>, kind: impl Into<Value>, damage: i64) -> Self {
        let mut fields = AttackAttrs::new();
        fields.insert(AttackField::Name, name.into());
        fields.insert(AttackField::Type, kind.into());
        fields.insert(AttackField::Damage, Value::Int(damage));
        Self { fields }
    }

    /// Create an attack from a prebuilt field map. Fields left out of the
    /// map stay absent on the record.
    pub fn from_fields(fields: AttackAttrs) -> Self {
        Self { fields }
    }

    /// Get a field value.
    pub fn get(&self, field: AttackField) -> Option<&Value> {
        self.fields.get(&field)
    }

    /// Set a field value verbatim. Last write wins.
    pub fn set(&mut self, field: AttackField, value: Value) {
        self.fields.insert(field, value);
    }

    /// The `name` field, when present and a string.
    pub fn name(&self) -> Option<&str> {
        self.get(AttackField::Name).and_then(Value::as_str)
    }
}

/// One of the two fixed attack buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketKey {
    Fast,
    Special,
}

impl BucketKey {
    /// Parse a bucket name. Only the literal strings "fast" and "special"
    /// are valid; anything else is outside the key space.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "fast" => Some(Self::Fast),
            "special" => Some(Self::Special),
            _ => None,
        }
    }

    /// The wire name of this bucket.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Special => "special",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_identity_populates_only_three_fields() {
        let pokemon = Pokemon::with_identity("152", "Chikorita", "Leaf Pokemon");
        assert_eq!(pokemon.id(), Some("152"));
        assert_eq!(pokemon.name(), Some("Chikorita"));
        assert_eq!(
            pokemon.get(PokemonField::Classification),
            Some(&Value::String("Leaf Pokemon".into()))
        );
        assert_eq!(pokemon.get(PokemonField::MaxCp), None);
        assert_eq!(pokemon.get(PokemonField::Attacks), None);
    }

    #[test]
    fn test_set_stores_verbatim() {
        let mut pokemon = Pokemon::with_identity("25", "Pikachu", "Mouse Pokemon");
        pokemon.set(PokemonField::MaxCp, Value::String("600".into()));
        assert_eq!(
            pokemon.get(PokemonField::MaxCp),
            Some(&Value::String("600".into()))
        );
    }

    #[test]
    fn test_type_names_survive_scalar_overwrite() {
        let mut pokemon = Pokemon::with_identity("1", "Bulbasaur", "Seed Pokemon");
        pokemon.set(PokemonField::Types, Value::list(["Grass", "Poison"]));
        assert_eq!(pokemon.type_names().collect::<Vec<_>>(), ["Grass", "Poison"]);

        pokemon.set(PokemonField::Types, Value::String("broken".into()));
        assert_eq!(pokemon.type_names().count(), 0);
    }

    #[test]
    fn test_attack_fields() {
        let attack = Attack::new("Ember", "Fire", 10);
        assert_eq!(attack.name(), Some("Ember"));
        assert_eq!(attack.get(AttackField::Damage), Some(&Value::Int(10)));
    }

    #[test]
    fn test_bucket_key_space() {
        assert_eq!(BucketKey::parse("fast"), Some(BucketKey::Fast));
        assert_eq!(BucketKey::parse("special"), Some(BucketKey::Special));
        assert_eq!(BucketKey::parse("Fast"), None);
        assert_eq!(BucketKey::parse("Fire"), None);
    }
}
