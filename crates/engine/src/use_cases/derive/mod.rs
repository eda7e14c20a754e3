//! Derivation use cases.
//!
//! Loads an actor, runs the base and derived passes for its kind, and
//! optionally writes the derived snapshot back.

mod error;

pub use error::DeriveError;

use std::sync::Arc;

use axismundi_domain::{ActorRecord, RuleSetRegistry};

use crate::infrastructure::ports::ActorRepo;

/// Container for derivation use cases.
pub struct DeriveUseCases {
    repo: Arc<dyn ActorRepo>,
    registry: Arc<RuleSetRegistry>,
}

impl DeriveUseCases {
    pub fn new(repo: Arc<dyn ActorRepo>, registry: Arc<RuleSetRegistry>) -> Self {
        Self { repo, registry }
    }

    /// Derive an in-memory actor.
    pub fn derive(&self, actor: &mut ActorRecord) -> Result<(), DeriveError> {
        if let Err(e) = self.registry.prepare(actor) {
            tracing::warn!(
                actor_id = %actor.id,
                kind = %actor.kind(),
                error = %e,
                "Derivation failed"
            );
            return Err(e.into());
        }
        tracing::debug!(
            actor_id = %actor.id,
            kind = %actor.kind(),
            items = actor.items.len(),
            "Derived actor"
        );
        Ok(())
    }

    /// Load and derive a stored actor without writing it back.
    pub fn execute(&self, key: &str) -> Result<ActorRecord, DeriveError> {
        let mut actor = self.repo.load(key)?;
        self.derive(&mut actor)?;
        Ok(actor)
    }

    /// Load, derive, and store the derived snapshot.
    pub fn execute_and_save(&self, key: &str) -> Result<ActorRecord, DeriveError> {
        let actor = self.execute(key)?;
        self.repo.save(key, &actor)?;
        tracing::info!(actor_id = %actor.id, key, "Saved derived actor");
        Ok(actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockActorRepo, RepoError};
    use axismundi_domain::{ActorData, DomainError, HitDice, MonsterData};
    use mockall::predicate::*;

    fn ogre(save_category: i64) -> ActorRecord {
        ActorRecord::new(
            "Ogre",
            ActorData::Monster(MonsterData {
                hit_dice: HitDice {
                    number: 4.0,
                    die: "d8".to_string(),
                },
                monster_saves: save_category,
                ..MonsterData::default()
            }),
        )
    }

    fn attack_bonus(actor: &ActorRecord) -> i32 {
        match &actor.data {
            ActorData::Monster(m) => m.attack_bonus,
            other => panic!("expected monster, got {:?}", other.kind()),
        }
    }

    #[test]
    fn execute_derives_without_saving() {
        let mut repo = MockActorRepo::new();
        repo.expect_load()
            .with(eq("ogre.json"))
            .returning(|_| Ok(ogre(4)));
        repo.expect_save().never();

        let use_case = DeriveUseCases::new(Arc::new(repo), Arc::new(RuleSetRegistry::new()));
        let actor = use_case.execute("ogre.json").expect("derives");
        assert_eq!(attack_bonus(&actor), 4);
    }

    #[test]
    fn execute_and_save_writes_derived_snapshot() {
        let mut repo = MockActorRepo::new();
        repo.expect_load().returning(|_| Ok(ogre(4)));
        repo.expect_save()
            .withf(|key, actor| key == "ogre.json" && attack_bonus(actor) == 4)
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = DeriveUseCases::new(Arc::new(repo), Arc::new(RuleSetRegistry::new()));
        use_case.execute_and_save("ogre.json").expect("derives and saves");
    }

    #[test]
    fn domain_errors_are_not_saved() {
        let mut repo = MockActorRepo::new();
        repo.expect_load().returning(|_| Ok(ogre(20)));
        repo.expect_save().never();

        let use_case = DeriveUseCases::new(Arc::new(repo), Arc::new(RuleSetRegistry::new()));
        let err = use_case
            .execute_and_save("ogre.json")
            .expect_err("category 20 is out of range");
        assert!(matches!(
            err,
            DeriveError::Domain(DomainError::InvalidSaveCategory { category: 20 })
        ));
    }

    #[test]
    fn repository_errors_propagate() {
        let mut repo = MockActorRepo::new();
        repo.expect_load()
            .returning(|key| Err(RepoError::not_found("Actor", key)));

        let use_case = DeriveUseCases::new(Arc::new(repo), Arc::new(RuleSetRegistry::new()));
        let err = use_case.execute("missing.json").expect_err("not found");
        assert!(matches!(err, DeriveError::Repo(e) if e.is_not_found()));
    }
}
