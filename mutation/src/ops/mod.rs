//! Mutation operations, one file per operation family.

mod add;
mod edit;
mod remove;

pub use add::{add_attack, add_pokemon, add_type};
pub use edit::{edit_attack, edit_pokemon_field, edit_type};
pub use remove::{remove_attack, remove_pokemon, remove_type};
