//! Pokedex Schema
//!
//! The typed operation surface and its gateway.
//!
//! Responsibilities:
//! - Declare the fixed set of query and mutation operations with their
//!   parameter scalars (`ops`)
//! - Validate and coerce incoming JSON arguments against the declaration
//!   (`coerce`)
//! - Dispatch to the query/mutation crates and shape the returned records
//!   into the declared JSON output shapes (`gateway`, `shape`)
//!
//! Not-found results shape to JSON null. Errors are reserved for requests
//! the declaration rejects (unknown operation or argument, a value that
//! will not coerce to its declared scalar) and invalid-key mutations.

mod coerce;
mod error;
mod gateway;
mod ops;
mod shape;

pub use error::{GatewayError, GatewayResult};
pub use gateway::execute;
pub use ops::{operation, OpKind, OperationDef, ParamDef, Scalar, OPERATIONS};
