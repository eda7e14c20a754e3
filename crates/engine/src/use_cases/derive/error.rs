//! Derivation operation errors.

use axismundi_domain::DomainError;

use crate::infrastructure::ports::RepoError;

/// Errors that can occur while deriving an actor.
#[derive(Debug, thiserror::Error)]
pub enum DeriveError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
