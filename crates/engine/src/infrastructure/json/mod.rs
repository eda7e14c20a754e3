//! JSON file adapters
//!
//! Actors live one per file in the data directory, in the same shape the
//! domain serializes them.

mod actor_repository;
mod label_catalog;

pub use actor_repository::JsonActorRepository;
pub use label_catalog::CatalogLocalizer;
