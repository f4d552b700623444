//! Pokedex Query
//!
//! Read operations over the catalog store.
//!
//! Responsibilities:
//! - Full-collection listings
//! - First-match lookups (id-or-name, bucket key, position finders)
//! - Membership filters over types and embedded attacks
//!
//! Queries never raise: a lookup that matches nothing is `None` or an
//! empty collection. The mutation crate reuses the position finders here
//! for its own first-match semantics.

mod filter;
mod lookup;

pub use filter::{pokemon_by_attack, pokemon_by_type};
pub use lookup::{
    all_pokemon, all_types, attack_buckets, attack_position, attacks_in_bucket,
    pokemon_by_id_or_name, pokemon_position_by_name, type_position,
};
