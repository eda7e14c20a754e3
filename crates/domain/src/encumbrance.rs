//! Inventory classification and carried weight.
//!
//! [`assess`] sorts an actor's items into sheet buckets and folds their
//! weights into two running totals:
//!
//! - **prepared** weight: gear and weapons kept at hand. Anything without a
//!   positive numeric weight counts as one unit.
//! - **carried** weight: stowed gear, unprepared weapons, armor and coins.
//!
//! Items weighed with the currency marker (`*`) count a whole weight unit
//! per 20 (prepared) or 100 (carried) pieces. Bad quantities contribute
//! nothing; classification never fails on malformed weight data.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::entities::{ItemData, ItemRecord, WeaponData};
use crate::error::DomainError;
use crate::value_objects::{ItemWeight, Money, Quantity};

/// Currency-weighted pieces per weight unit when prepared.
pub const PREPARED_COINS_PER_UNIT: f64 = 20.0;

/// Currency-weighted pieces per weight unit when carried.
pub const CARRIED_COINS_PER_UNIT: f64 = 100.0;

/// Spell book levels.
pub const SPELL_LEVELS: std::ops::RangeInclusive<u8> = 1..=6;

fn contribution(weight: &ItemWeight, quantity: Quantity, coins_per_unit: f64) -> f64 {
    let Some(quantity) = quantity.countable() else {
        return 0.0;
    };
    match weight {
        ItemWeight::Units(per_unit) => (per_unit * quantity).max(0.0),
        ItemWeight::Currency => (quantity / coins_per_unit).floor(),
        ItemWeight::Missing | ItemWeight::Invalid(_) => 0.0,
    }
}

/// Running total of prepared weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PreparedWeight(f64);

impl PreparedWeight {
    /// Fold one stack into the total. Non-positive or non-numeric weights
    /// count as one unit each.
    #[must_use]
    pub fn add(self, weight: &ItemWeight, quantity: Quantity) -> Self {
        let weight = weight.or_unit_default();
        Self(self.0 + contribution(&weight, quantity, PREPARED_COINS_PER_UNIT))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whole weight units as shown on the sheet (fractions round up).
    pub fn rounded(&self) -> u64 {
        round_up(self.0)
    }
}

/// Running total of carried weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CarriedWeight(f64);

impl CarriedWeight {
    /// Fold one stack into the total using its raw weight.
    #[must_use]
    pub fn add(self, weight: &ItemWeight, quantity: Quantity) -> Self {
        Self(self.0 + contribution(weight, quantity, CARRIED_COINS_PER_UNIT))
    }

    /// Fold a purse into the total. Coins weigh the same whatever the metal.
    #[must_use]
    pub fn add_money(self, money: &Money) -> Self {
        let coins = money.coin_count() as f64;
        self.add(&ItemWeight::Currency, Quantity::new(coins))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn rounded(&self) -> u64 {
        round_up(self.0)
    }
}

fn round_up(value: f64) -> u64 {
    let ceiled = value.ceil();
    if ceiled.is_finite() && ceiled > 0.0 {
        ceiled as u64
    } else {
        0
    }
}

/// Items sorted into the sheet's sections, each in list order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    /// Items and containers
    pub gear: Vec<ItemRecord>,
    pub weapons: Vec<ItemRecord>,
    pub armors: Vec<ItemRecord>,
    /// Spells keyed by spell level, one entry per level even when empty
    pub spells: BTreeMap<u8, Vec<ItemRecord>>,
    pub basic_skills: Vec<ItemRecord>,
    pub advanced_skills: Vec<ItemRecord>,
    /// Sorted by feature level; equal levels keep list order
    pub features: Vec<ItemRecord>,
    pub monster_skills: Vec<ItemRecord>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            gear: Vec::new(),
            weapons: Vec::new(),
            armors: Vec::new(),
            spells: SPELL_LEVELS.map(|level| (level, Vec::new())).collect(),
            basic_skills: Vec::new(),
            advanced_skills: Vec::new(),
            features: Vec::new(),
            monster_skills: Vec::new(),
        }
    }
}

/// Classified items and their weight totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Encumbrance {
    pub inventory: Inventory,
    pub prepared: PreparedWeight,
    pub carried: CarriedWeight,
    /// Sum of prepared container capacities
    pub max_capacity: f64,
}

impl Encumbrance {
    fn fold_weapon(&mut self, weapon: &WeaponData) {
        if weapon.prepared {
            self.prepared = self.prepared.add(&weapon.weight, Quantity::ONE);
        } else {
            self.carried = self.carried.add(&weapon.weight, Quantity::ONE);
        }
    }

    fn fold_gear(&mut self, weight: &ItemWeight, quantity: Quantity, prepared: bool) {
        if prepared {
            self.prepared = self.prepared.add(weight, quantity);
        } else {
            self.carried = self.carried.add(weight, quantity);
        }
    }
}

/// Classify `items` and total their weight, plus the weight of `money` if given.
///
/// Fails only when a spell names a level outside 1-6. Spells without a level
/// stay out of the book.
pub fn assess(items: &[ItemRecord], money: Option<&Money>) -> Result<Encumbrance, DomainError> {
    let mut result = Encumbrance::default();

    for item in items {
        match &item.data {
            ItemData::Item(gear) => {
                result.fold_gear(&gear.weight, gear.quantity, gear.prepared);
                result.inventory.gear.push(item.clone());
            }
            ItemData::Container(container) => {
                result.fold_gear(&container.weight, container.quantity, container.prepared);
                if container.prepared {
                    if let Some(capacity) = container.capacity.countable() {
                        result.max_capacity += capacity;
                    }
                }
                result.inventory.gear.push(item.clone());
            }
            ItemData::Weapon(weapon) => {
                result.fold_weapon(weapon);
                result.inventory.weapons.push(item.clone());
            }
            ItemData::Armor(armor) => {
                result.carried = result.carried.add(&armor.weight, Quantity::ONE);
                result.inventory.armors.push(item.clone());
            }
            ItemData::Spell(spell) => {
                let Some(level) = spell.spell_level else {
                    continue;
                };
                let bucket = u8::try_from(level)
                    .ok()
                    .and_then(|level| result.inventory.spells.get_mut(&level))
                    .ok_or_else(|| DomainError::invalid_spell_level(level))?;
                bucket.push(item.clone());
            }
            ItemData::Pericia(skill) => {
                if skill.advanced {
                    result.inventory.advanced_skills.push(item.clone());
                } else {
                    result.inventory.basic_skills.push(item.clone());
                }
            }
            ItemData::Feature(_) => result.inventory.features.push(item.clone()),
            ItemData::MonsterSkill(_) => result.inventory.monster_skills.push(item.clone()),
            ItemData::Floor(_) | ItemData::Wall(_) => {}
        }
    }

    // sort_by_key is stable
    result.inventory.features.sort_by_key(|item| match &item.data {
        ItemData::Feature(feature) => feature.feature_level,
        _ => 0,
    });

    if let Some(money) = money {
        result.carried = result.carried.add_money(money);
    }

    Ok(result)
}

/// Load classification of a character's carried weight against strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadTier {
    /// Carrying nothing
    Unencumbered,
    Light,
    Medium,
    Heavy,
    /// At or past five times strength
    Overloaded,
}

impl LoadTier {
    /// Classify raw (unrounded) carried weight against the raw strength score.
    pub fn classify(carried: f64, strength: i32) -> Self {
        let strength = f64::from(strength);
        if carried == 0.0 {
            Self::Unencumbered
        } else if carried < strength {
            Self::Light
        } else if carried < strength * 4.0 {
            Self::Medium
        } else if carried < strength * 5.0 {
            Self::Heavy
        } else {
            Self::Overloaded
        }
    }

    /// Numeric tier as shown on the sheet (0-4).
    pub fn level(&self) -> u8 {
        match self {
            Self::Unencumbered => 0,
            Self::Light => 1,
            Self::Medium => 2,
            Self::Heavy => 3,
            Self::Overloaded => 4,
        }
    }
}

/// Highest weight for each load tier at a given strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadThresholds {
    pub light: i32,
    pub medium: i32,
    pub heavy: i32,
}

impl LoadThresholds {
    pub fn for_strength(strength: i32) -> Self {
        Self {
            light: strength.saturating_sub(1),
            medium: strength.saturating_mul(4).saturating_sub(1),
            heavy: strength.saturating_mul(5).saturating_sub(1),
        }
    }
}
