//! Sheet use cases.
//!
//! Assembles everything a renderer needs to draw an actor sheet: the derived
//! actor, localized labels, classified items with weight totals, the load
//! tier, roll formulas, and the roll-data projection.

mod error;

pub use error::SheetError;

use std::collections::BTreeMap;
use std::sync::Arc;

use axismundi_domain::encumbrance::assess;
use axismundi_domain::labels::{ability_labels, money_labels, save_labels, stronghold_labels};
use axismundi_domain::{
    attack_formula, calculate_pending_advanced_ratings, damage_formula, ActorData, ActorKind,
    ActorRecord, AttackStyle, Inventory, ItemData, ItemId, LoadThresholds, LoadTier, Localizer,
    RollData, RuleSetRegistry, SKILL_CHECK_FORMULA,
};
use serde::Serialize;

use crate::infrastructure::ports::ActorRepo;

// =============================================================================
// Result Types
// =============================================================================

/// Localized labels, grouped by sheet section. Empty sections are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetLabels {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub abilities: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub saves: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub money: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub stronghold: BTreeMap<String, String>,
}

/// Weight totals as shown on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightSummary {
    /// Prepared weight, fractions rounded up
    pub prepared: u64,
    /// Carried weight, fractions rounded up
    pub carried: u64,
    pub max_capacity: f64,
}

/// A character's load against their strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadSummary {
    pub tier: LoadTier,
    pub level: u8,
    pub thresholds: LoadThresholds,
}

/// Roll formulas for one weapon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponRolls {
    pub item_id: ItemId,
    pub name: String,
    pub attack: String,
    pub damage: String,
}

/// Everything needed to render an actor sheet.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetContext {
    pub actor: ActorRecord,
    pub labels: SheetLabels,
    /// Absent for siege engines, which do not list items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Inventory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<WeightSummary>,
    /// Characters only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<LoadSummary>,
    pub weapon_rolls: Vec<WeaponRolls>,
    pub skill_check: &'static str,
    pub roll_data: RollData,
}

// =============================================================================
// Builder
// =============================================================================

/// Builds sheet contexts from actor records.
pub struct SheetBuilder {
    registry: Arc<RuleSetRegistry>,
    localizer: Arc<dyn Localizer>,
}

impl SheetBuilder {
    pub fn new(registry: Arc<RuleSetRegistry>, localizer: Arc<dyn Localizer>) -> Self {
        Self {
            registry,
            localizer,
        }
    }

    /// Derive `actor` and assemble its sheet.
    pub fn build(&self, mut actor: ActorRecord) -> Result<SheetContext, SheetError> {
        self.rate_pending(&mut actor)?;
        self.assemble(actor)
    }

    /// Derive `actor` and rate advanced skills that have never been rated.
    ///
    /// Returns how many skills were rated. Those ratings are frozen from now
    /// on, so callers holding a stored record should write it back.
    pub fn rate_pending(&self, actor: &mut ActorRecord) -> Result<usize, SheetError> {
        self.registry.prepare(actor)?;
        let rated = calculate_pending_advanced_ratings(actor);
        if rated > 0 {
            tracing::debug!(actor_id = %actor.id, rated, "Rated new advanced skills");
        }
        Ok(rated)
    }

    /// Assemble the sheet of an already derived actor.
    fn assemble(&self, actor: ActorRecord) -> Result<SheetContext, SheetError> {
        let labels = self.labels_for(&actor);

        let encumbrance = match &actor.data {
            ActorData::Character(c) => Some(assess(&actor.items, Some(&c.money))?),
            ActorData::SiegeEngine(_) => None,
            _ => Some(assess(&actor.items, None)?),
        };

        let load = match (&actor.data, &encumbrance) {
            (ActorData::Character(c), Some(enc)) => {
                let strength = c.abilities.str.value;
                let tier = LoadTier::classify(enc.carried.value(), strength);
                Some(LoadSummary {
                    tier,
                    level: tier.level(),
                    thresholds: LoadThresholds::for_strength(strength),
                })
            }
            _ => None,
        };

        let weapon_rolls = weapon_rolls(&actor);
        let roll_data = RollData::project(&actor)?;

        let (inventory, weight) = match encumbrance {
            Some(enc) => (
                Some(enc.inventory),
                Some(WeightSummary {
                    prepared: enc.prepared.rounded(),
                    carried: enc.carried.rounded(),
                    max_capacity: enc.max_capacity,
                }),
            ),
            None => (None, None),
        };

        tracing::debug!(
            actor_id = %actor.id,
            kind = %actor.kind(),
            load = ?load.map(|l| l.tier),
            "Built sheet"
        );

        Ok(SheetContext {
            actor,
            labels,
            inventory,
            weight,
            load,
            weapon_rolls,
            skill_check: SKILL_CHECK_FORMULA,
            roll_data,
        })
    }

    /// Derive `actor` and project its roll data.
    pub fn roll_data(&self, mut actor: ActorRecord) -> Result<RollData, SheetError> {
        self.registry.prepare(&mut actor)?;
        Ok(RollData::project(&actor)?)
    }

    fn labels_for(&self, actor: &ActorRecord) -> SheetLabels {
        let localizer = self.localizer.as_ref();
        match actor.kind() {
            ActorKind::Character => SheetLabels {
                abilities: ability_labels(localizer),
                saves: save_labels(localizer),
                money: money_labels(localizer),
                ..SheetLabels::default()
            },
            ActorKind::Monster => SheetLabels {
                saves: save_labels(localizer),
                ..SheetLabels::default()
            },
            ActorKind::Stronghold => SheetLabels {
                stronghold: stronghold_labels(localizer),
                ..SheetLabels::default()
            },
            ActorKind::SiegeEngine | ActorKind::Vehicle => SheetLabels::default(),
        }
    }
}

fn weapon_rolls(actor: &ActorRecord) -> Vec<WeaponRolls> {
    actor
        .items
        .iter()
        .filter_map(|item| match &item.data {
            ItemData::Weapon(weapon) => Some(WeaponRolls {
                item_id: item.id,
                name: item.name.clone(),
                attack: attack_formula(actor, weapon, AttackStyle::from(weapon.weapon_type)),
                damage: damage_formula(actor, weapon),
            }),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Use Cases
// =============================================================================

/// Container for sheet use cases.
pub struct SheetUseCases {
    repo: Arc<dyn ActorRepo>,
    builder: SheetBuilder,
}

impl SheetUseCases {
    pub fn new(repo: Arc<dyn ActorRepo>, builder: SheetBuilder) -> Self {
        Self { repo, builder }
    }

    /// Load a stored actor and build its sheet.
    ///
    /// Advanced skills rated for the first time are written back so their
    /// rating no longer follows later ability changes.
    pub fn get_sheet(&self, key: &str) -> Result<SheetContext, SheetError> {
        let mut actor = self.repo.load(key)?;
        let rated = self.builder.rate_pending(&mut actor)?;
        if rated > 0 {
            self.repo.save(key, &actor)?;
            tracing::info!(actor_id = %actor.id, rated, "Saved new advanced skill ratings");
        }
        self.builder.assemble(actor)
    }

    /// Load a stored actor and project its roll data.
    pub fn get_roll_data(&self, key: &str) -> Result<RollData, SheetError> {
        let actor = self.repo.load(key)?;
        self.builder.roll_data(actor)
    }
}
