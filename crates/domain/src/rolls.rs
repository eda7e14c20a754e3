//! Roll formula strings for the external dice engine.
//!
//! Formulas mix literal bonuses taken from the actor with `@` references
//! resolved against [`RollData`](crate::RollData).

use serde::{Deserialize, Serialize};

use crate::entities::{ActorData, ActorRecord, WeaponData, WeaponRange};

/// Skill checks roll a single six-sided die.
pub const SKILL_CHECK_FORMULA: &str = "1d6";

/// How a weapon is being used for an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackStyle {
    Melee,
    Ranged,
}

impl From<WeaponRange> for AttackStyle {
    fn from(range: WeaponRange) -> Self {
        match range {
            WeaponRange::Melee => Self::Melee,
            WeaponRange::Ranged => Self::Ranged,
        }
    }
}

/// Attack roll for `actor` using `weapon`.
///
/// Characters add the governing ability bonus (by reference) and their melee
/// or ranged attack bonus, monsters add their derived attack bonus. Every
/// attack adds the weapon's own bonus.
pub fn attack_formula(actor: &ActorRecord, weapon: &WeaponData, style: AttackStyle) -> String {
    let actor_part = match (&actor.data, style) {
        (ActorData::Character(c), AttackStyle::Melee) => {
            format!("+@str.bonus+{}", c.melee_attack_bonus)
        }
        (ActorData::Character(c), AttackStyle::Ranged) => {
            format!("+@dex.bonus+{}", c.ranged_attack_bonus)
        }
        (ActorData::Monster(m), _) => format!("+{}", m.attack_bonus),
        _ => String::new(),
    };
    format!("d20{actor_part}+{}", weapon.attack_bonus)
}

/// Damage roll for `weapon`; characters add the damage bonus for its range.
pub fn damage_formula(actor: &ActorRecord, weapon: &WeaponData) -> String {
    let bonus = match &actor.data {
        ActorData::Character(c) => match weapon.weapon_type {
            WeaponRange::Ranged => c.ranged_damage_bonus,
            WeaponRange::Melee => c.melee_damage_bonus,
        },
        _ => 0,
    };
    format!("{}+{bonus}", weapon.damage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CharacterData, MonsterData, StrongholdData};

    fn sword(range: WeaponRange) -> WeaponData {
        WeaponData {
            attack_bonus: 1,
            damage: "1d8".to_string(),
            weapon_type: range,
            ..WeaponData::default()
        }
    }

    fn fighter() -> ActorRecord {
        ActorRecord::new(
            "Bruna",
            ActorData::Character(CharacterData {
                melee_attack_bonus: 2,
                ranged_attack_bonus: 1,
                melee_damage_bonus: 3,
                ranged_damage_bonus: 0,
                ..CharacterData::default()
            }),
        )
    }

    #[test]
    fn character_attacks_reference_ability_bonus() {
        let actor = fighter();
        let weapon = sword(WeaponRange::Melee);
        assert_eq!(
            attack_formula(&actor, &weapon, AttackStyle::Melee),
            "d20+@str.bonus+2+1"
        );
        assert_eq!(
            attack_formula(&actor, &weapon, AttackStyle::Ranged),
            "d20+@dex.bonus+1+1"
        );
    }

    #[test]
    fn monster_attack_uses_derived_bonus() {
        let actor = ActorRecord::new(
            "Gnoll",
            ActorData::Monster(MonsterData {
                attack_bonus: 2,
                ..MonsterData::default()
            }),
        );
        assert_eq!(
            attack_formula(&actor, &sword(WeaponRange::Melee), AttackStyle::Melee),
            "d20+2+1"
        );
        assert_eq!(damage_formula(&actor, &sword(WeaponRange::Melee)), "1d8+0");
    }

    #[test]
    fn other_actors_add_only_weapon_bonus() {
        let actor = ActorRecord::new("Keep", ActorData::Stronghold(StrongholdData::default()));
        assert_eq!(
            attack_formula(&actor, &sword(WeaponRange::Ranged), AttackStyle::Ranged),
            "d20+1"
        );
    }

    #[test]
    fn damage_bonus_follows_weapon_range() {
        let actor = fighter();
        assert_eq!(damage_formula(&actor, &sword(WeaponRange::Melee)), "1d8+3");
        assert_eq!(damage_formula(&actor, &sword(WeaponRange::Ranged)), "1d8+0");
    }

    #[test]
    fn weapon_range_maps_to_attack_style() {
        assert_eq!(AttackStyle::from(WeaponRange::Ranged), AttackStyle::Ranged);
        assert_eq!(AttackStyle::from(WeaponRange::default()), AttackStyle::Melee);
    }
}
