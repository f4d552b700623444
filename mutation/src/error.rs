//! Mutation error types.

use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur during mutation execution. All of them are
/// invalid-key rejections; plain not-found lookups are not errors.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error("invalid attack bucket: {key}")]
    InvalidBucket { key: String },

    #[error("unknown Pokemon field: {field}")]
    InvalidPokemonField { field: String },

    #[error("unknown attack field: {field}")]
    InvalidAttackField { field: String },
}

impl MutationError {
    pub fn invalid_bucket(key: impl Into<String>) -> Self {
        Self::InvalidBucket { key: key.into() }
    }

    pub fn invalid_pokemon_field(field: impl Into<String>) -> Self {
        Self::InvalidPokemonField {
            field: field.into(),
        }
    }

    pub fn invalid_attack_field(field: impl Into<String>) -> Self {
        Self::InvalidAttackField {
            field: field.into(),
        }
    }
}
