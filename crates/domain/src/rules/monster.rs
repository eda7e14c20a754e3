//! Monster rules: attack bonus from hit dice, saves from the save category.

use crate::entities::{ActorData, ActorKind, ActorRecord};
use crate::error::DomainError;
use crate::rules::tables::{monster_attack_bonus, monster_saves};
use crate::rules::ActorRules;

/// Rules for monsters.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonsterRules;

impl ActorRules for MonsterRules {
    fn kind(&self) -> ActorKind {
        ActorKind::Monster
    }

    fn prepare_base(&self, actor: &mut ActorRecord) -> Result<(), DomainError> {
        let actual = actor.kind();
        let ActorData::Monster(data) = &mut actor.data else {
            return Err(DomainError::actor_kind(self.kind(), actual));
        };
        // Resolve the saves first so a bad category leaves the record untouched.
        let saves = monster_saves(data.monster_saves)?;
        data.attack_bonus = monster_attack_bonus(data.hit_dice.number);
        data.saves = saves;
        Ok(())
    }
}
