//! Actor repository backed by JSON files.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use axismundi_domain::ActorRecord;

use crate::infrastructure::ports::{ActorRepo, RepoError};

/// Stores each actor as a pretty-printed JSON file.
///
/// Keys are file paths; relative keys resolve under the data directory,
/// absolute keys are used as given.
pub struct JsonActorRepository {
    data_dir: PathBuf,
}

impl JsonActorRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// File path for an actor key.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let path = Path::new(key);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }
}

impl ActorRepo for JsonActorRepository {
    fn load(&self, key: &str) -> Result<ActorRecord, RepoError> {
        let path = self.path_for(key);
        let raw = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RepoError::not_found("Actor", path.display()),
            _ => RepoError::storage("load", format!("{}: {e}", path.display())),
        })?;
        let actor: ActorRecord = serde_json::from_str(&raw)
            .map_err(|e| RepoError::serialization(format!("{}: {e}", path.display())))?;

        tracing::debug!(
            actor_id = %actor.id,
            kind = %actor.kind(),
            items = actor.items.len(),
            path = %path.display(),
            "Loaded actor"
        );
        Ok(actor)
    }

    fn save(&self, key: &str, actor: &ActorRecord) -> Result<(), RepoError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| RepoError::storage("save", format!("{}: {e}", parent.display())))?;
        }
        let json = serde_json::to_string_pretty(actor).map_err(RepoError::serialization)?;
        std::fs::write(&path, json)
            .map_err(|e| RepoError::storage("save", format!("{}: {e}", path.display())))?;

        tracing::debug!(actor_id = %actor.id, path = %path.display(), "Saved actor");
        Ok(())
    }
}
