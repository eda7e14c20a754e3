//! Sheet operation errors.

use axismundi_domain::DomainError;

use crate::infrastructure::ports::RepoError;

/// Errors that can occur while assembling a sheet or its roll data.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
