//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Actor storage (could swap JSON files -> a database)
//! - Label localization (`Localizer`, defined by the domain)

mod error;
mod repos;

pub use error::RepoError;
pub use repos::*;

pub use axismundi_domain::Localizer;
