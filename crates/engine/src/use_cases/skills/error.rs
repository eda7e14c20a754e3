//! Skill operation errors.

use axismundi_domain::DomainError;

use crate::infrastructure::ports::RepoError;

/// Errors that can occur while seeding or rating skills.
#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
