//! Repository port traits for actor storage.

use axismundi_domain::ActorRecord;

use super::error::RepoError;

/// Storage for actor records and their items.
///
/// Actors are addressed by a key chosen by the adapter (for the JSON store, a
/// file name relative to the data directory).
#[cfg_attr(test, mockall::automock)]
pub trait ActorRepo: Send + Sync {
    fn load(&self, key: &str) -> Result<ActorRecord, RepoError>;
    fn save(&self, key: &str, actor: &ActorRecord) -> Result<(), RepoError>;
}
