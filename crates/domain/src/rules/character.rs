//! Character rules: ability modifiers.

use crate::entities::{ActorData, ActorKind, ActorRecord};
use crate::error::DomainError;
use crate::rules::tables::ability_bonus;
use crate::rules::ActorRules;
use crate::value_objects::{Abilities, Ability};

/// Rules for player characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterRules;

impl CharacterRules {
    /// Rewrite every ability bonus from its score.
    pub fn apply_ability_bonuses(abilities: &mut Abilities) {
        for ability in Ability::ALL {
            let score = abilities.get_mut(ability);
            score.bonus = ability_bonus(score.value);
        }
    }
}

impl ActorRules for CharacterRules {
    fn kind(&self) -> ActorKind {
        ActorKind::Character
    }

    fn prepare_derived(&self, actor: &mut ActorRecord) -> Result<(), DomainError> {
        let actual = actor.kind();
        let ActorData::Character(data) = &mut actor.data else {
            return Err(DomainError::actor_kind(self.kind(), actual));
        };
        Self::apply_ability_bonuses(&mut data.abilities);
        Ok(())
    }
}
