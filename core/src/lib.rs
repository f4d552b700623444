//! Pokedex Core Types
//!
//! This crate provides the foundational types used throughout the pokedex:
//! - Value types (the dynamic Value enum stored in record fields)
//! - Field keys (the closed sets of legal Pokemon and Attack field names)
//! - Record structures (Pokemon, Attack) and the bucket key type

mod field;
mod record;
mod value;

pub use field::*;
pub use record::*;
pub use value::*;
