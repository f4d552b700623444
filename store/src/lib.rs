//! Pokedex Store
//!
//! In-memory catalog storage: the three root collections (pokemon, type
//! names, global attack buckets) plus the static seed data the process
//! boots from. Storage only; all reads and writes go through the query and
//! mutation crates, which receive the store by reference.

mod seed;
mod store;

pub use seed::seed;
pub use store::{AttackBuckets, CatalogStore};
