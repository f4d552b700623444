//! Pokedex Mutation
//!
//! Write operations over the catalog store.
//!
//! Responsibilities:
//! - Append creatures, attacks, and type entries
//! - Field edits through the closed field-key sets
//! - First-match removals
//!
//! Every mutation is a single step against the live store: a failed lookup
//! returns a not-found sentinel (`Ok(None)`) without mutating anything, and
//! only keys outside their fixed valid set (bucket names, field names) are
//! errors. First-match positions come from the query crate.
//!
//! # Module Structure
//!
//! - `ops/` - Individual operation implementations (add, edit, remove)
//! - `error` - Invalid-key error types

mod error;
mod ops;

pub use error::{MutationError, MutationResult};
pub use ops::*;
