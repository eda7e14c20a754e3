//! Skill use cases.
//!
//! New characters start with the starter skill set; ratings are computed on
//! request once ability bonuses have been derived.

mod error;

pub use error::SkillError;

use std::sync::Arc;

use axismundi_domain::{
    calculate_skill_ratings, starter_skills, ActorData, ActorRecord, RuleSetRegistry,
};

use crate::infrastructure::ports::ActorRepo;

/// Outcome of seeding a stored actor.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedResult {
    pub actor: ActorRecord,
    /// Number of skills added; zero when nothing changed
    pub added: usize,
}

/// Container for skill use cases.
pub struct SkillUseCases {
    repo: Arc<dyn ActorRepo>,
    registry: Arc<RuleSetRegistry>,
    seed_defaults: bool,
}

impl SkillUseCases {
    pub fn new(
        repo: Arc<dyn ActorRepo>,
        registry: Arc<RuleSetRegistry>,
        seed_defaults: bool,
    ) -> Self {
        Self {
            repo,
            registry,
            seed_defaults,
        }
    }

    /// Give a character without skills the starter set.
    ///
    /// Characters that already own a skill, other actor kinds, and engines
    /// configured not to seed are left alone. Returns the number of skills
    /// added.
    pub fn ensure_defaults(&self, actor: &mut ActorRecord) -> usize {
        if !self.seed_defaults {
            return 0;
        }
        if !matches!(actor.data, ActorData::Character(_)) || actor.has_skills() {
            return 0;
        }
        let skills = starter_skills();
        let added = skills.len();
        actor.items.extend(skills);
        tracing::info!(actor_id = %actor.id, name = %actor.name, added, "Seeded starter skills");
        added
    }

    /// Seed a stored actor and write it back if anything was added.
    pub fn seed(&self, key: &str) -> Result<SeedResult, SkillError> {
        let mut actor = self.repo.load(key)?;
        let added = self.ensure_defaults(&mut actor);
        if added > 0 {
            self.repo.save(key, &actor)?;
        }
        Ok(SeedResult { actor, added })
    }

    /// Derive a stored character, rate all of its skills, and write it back.
    pub fn rate(&self, key: &str) -> Result<ActorRecord, SkillError> {
        let mut actor = self.repo.load(key)?;
        self.registry.prepare(&mut actor)?;
        if !matches!(actor.data, ActorData::Character(_)) {
            tracing::debug!(
                actor_id = %actor.id,
                kind = %actor.kind(),
                "Only characters have rated skills"
            );
            return Ok(actor);
        }
        let rated = calculate_skill_ratings(&mut actor);
        self.repo.save(key, &actor)?;
        tracing::info!(actor_id = %actor.id, rated, "Rated skills");
        Ok(actor)
    }
}
