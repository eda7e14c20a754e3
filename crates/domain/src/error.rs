//! Unified error types for the domain layer
//!
//! Most derivation rules are total functions. The few boundaries that are not
//! (table lookups outside their rows, worker counts below one, records routed
//! to the wrong rule set) report through [`DomainError`] instead of producing
//! partial data.

use thiserror::Error;

use crate::entities::ActorKind;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Monster save category outside the saving throw table
    #[error("Invalid save category: {category} (expected 1-14)")]
    InvalidSaveCategory { category: i64 },

    /// Spell level outside the spell book buckets
    #[error("Invalid spell level: {level} (expected 1-6)")]
    InvalidSpellLevel { level: i64 },

    /// A rule set was handed an actor of another kind
    #[error("Rule set for {expected} cannot derive a {actual} actor")]
    ActorKind {
        expected: ActorKind,
        actual: ActorKind,
    },

    /// No rule set registered for an actor kind
    #[error("No rule set registered for actor kind: {0}")]
    MissingRuleSet(ActorKind),

    /// A record could not be projected to JSON
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    /// Creates a validation error for values outside their allowed range.
    ///
    /// # Example
    /// ```ignore
    /// if workers == 0 {
    ///     return Err(DomainError::validation("stronghold needs at least one worker"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_save_category(category: i64) -> Self {
        Self::InvalidSaveCategory { category }
    }

    pub fn invalid_spell_level(level: i64) -> Self {
        Self::InvalidSpellLevel { level }
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create a kind mismatch error for a rule set handed the wrong actor
    pub fn actor_kind(expected: ActorKind, actual: ActorKind) -> Self {
        Self::ActorKind { expected, actual }
    }
}
