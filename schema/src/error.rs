//! Gateway error types.

use pokedex_mutation::MutationError;
use thiserror::Error;

/// Errors surfaced to the caller before or during dispatch. Not-found
/// lookups are not errors; they shape to JSON null.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The operation name is not in the declared surface.
    #[error("unknown operation: {name}")]
    UnknownOperation { name: String },

    /// An argument name is not declared on the operation.
    #[error("unknown argument {argument} on {operation}")]
    UnknownArgument {
        operation: String,
        argument: String,
    },

    /// An argument value will not coerce to its declared scalar.
    #[error("argument {argument} expects {expected}, got {actual}")]
    TypeCoercion {
        argument: String,
        expected: &'static str,
        actual: String,
    },

    /// Invalid-key rejection from the mutation layer.
    #[error(transparent)]
    Mutation(#[from] MutationError),
}

impl GatewayError {
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation { name: name.into() }
    }

    pub fn unknown_argument(operation: impl Into<String>, argument: impl Into<String>) -> Self {
        Self::UnknownArgument {
            operation: operation.into(),
            argument: argument.into(),
        }
    }

    pub fn type_coercion(
        argument: impl Into<String>,
        expected: &'static str,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeCoercion {
            argument: argument.into(),
            expected,
            actual: actual.into(),
        }
    }
}

/// Result type for gateway dispatch.
pub type GatewayResult<T> = Result<T, GatewayError>;
