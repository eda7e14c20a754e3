//! Derived-data rules for each actor kind.
//!
//! Derivation runs in two passes over a mutable [`ActorRecord`]:
//!
//! 1. **Base pass** - values that other rules or items depend on
//!    (monster attack bonus and saves, stronghold floor/wall prices,
//!    vehicle aggregate hit points).
//! 2. **Derived pass** - values computed from the base pass and the items
//!    (ability modifiers, stronghold totals, vehicle movement).
//!
//! Each actor kind has one [`ActorRules`] implementation. The
//! [`RuleSetRegistry`] picks the implementation by the record's type tag.
//! Both passes overwrite every field they own, so running the pipeline twice
//! gives the same record as running it once.

mod character;
mod monster;
mod siege_engine;
mod stronghold;
mod tables;
mod vehicle;

pub use character::CharacterRules;
pub use monster::MonsterRules;
pub use siege_engine::SiegeEngineRules;
pub use stronghold::{
    build_time, floor_price, floor_price_multiplier, wall_spec, StrongholdRules, StrongholdTotals,
    WallSpec,
};
pub use tables::{ability_bonus, monster_attack_bonus, monster_saves};
pub use vehicle::{destroyed_sides, movement_after_damage, VehicleRules};

use std::collections::HashMap;
use std::sync::Arc;

use crate::entities::{ActorKind, ActorRecord};
use crate::error::DomainError;

/// Derivation rules for one actor kind.
///
/// Implementations must reject records of any other kind with
/// [`DomainError::ActorKind`]; the registry never routes them there, but
/// callers holding a rule set directly can.
pub trait ActorRules: Send + Sync {
    /// The actor kind these rules derive.
    fn kind(&self) -> ActorKind;

    /// Compute values that items and later rules depend on.
    fn prepare_base(&self, actor: &mut ActorRecord) -> Result<(), DomainError> {
        self.ensure_kind(actor)
    }

    /// Compute values from the base pass and the actor's items.
    fn prepare_derived(&self, actor: &mut ActorRecord) -> Result<(), DomainError> {
        self.ensure_kind(actor)
    }

    /// Check that `actor` belongs to this rule set.
    fn ensure_kind(&self, actor: &ActorRecord) -> Result<(), DomainError> {
        let actual = actor.kind();
        if actual == self.kind() {
            Ok(())
        } else {
            Err(DomainError::actor_kind(self.kind(), actual))
        }
    }
}

/// Registry of rule sets keyed by actor kind.
pub struct RuleSetRegistry {
    rules: HashMap<ActorKind, Arc<dyn ActorRules>>,
}

impl Default for RuleSetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSetRegistry {
    /// Create a registry with the rule set for every actor kind.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(CharacterRules));
        registry.register(Arc::new(MonsterRules));
        registry.register(Arc::new(SiegeEngineRules));
        registry.register(Arc::new(StrongholdRules));
        registry.register(Arc::new(VehicleRules));
        registry
    }

    /// Create an empty registry without built-in rule sets.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Register a rule set, replacing any previous one for the same kind.
    pub fn register(&mut self, rules: Arc<dyn ActorRules>) {
        self.rules.insert(rules.kind(), rules);
    }

    pub fn get(&self, kind: ActorKind) -> Option<Arc<dyn ActorRules>> {
        self.rules.get(&kind).cloned()
    }

    /// Kinds with a registered rule set, in declaration order.
    pub fn kinds(&self) -> Vec<ActorKind> {
        let mut kinds: Vec<ActorKind> = self.rules.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Run the base pass then the derived pass on `actor`.
    pub fn prepare(&self, actor: &mut ActorRecord) -> Result<(), DomainError> {
        let kind = actor.kind();
        let rules = self
            .rules
            .get(&kind)
            .ok_or(DomainError::MissingRuleSet(kind))?;
        rules.prepare_base(actor)?;
        rules.prepare_derived(actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        ActorData, CharacterData, FloorData, FloorMaterial, HitDice, ItemData, ItemRecord,
        MonsterData, Movement, SideHitPoints, SiegeEngineData, StrongholdData, VehicleData,
        VehicleHitPoints, WallData, WallMaterial,
    };
    use crate::value_objects::{Abilities, Ability};

    fn actor_of(kind: ActorKind) -> ActorRecord {
        let data = match kind {
            ActorKind::Character => ActorData::Character(CharacterData::default()),
            ActorKind::Monster => ActorData::Monster(MonsterData::default()),
            ActorKind::SiegeEngine => ActorData::SiegeEngine(SiegeEngineData::default()),
            ActorKind::Stronghold => ActorData::Stronghold(StrongholdData::default()),
            ActorKind::Vehicle => ActorData::Vehicle(VehicleData::default()),
        };
        ActorRecord::new("Test", data)
    }

    #[test]
    fn registry_covers_every_actor_kind() {
        let registry = RuleSetRegistry::new();
        assert_eq!(registry.kinds(), ActorKind::ALL.to_vec());
        for kind in ActorKind::ALL {
            let rules = registry.get(kind).expect("registered");
            assert_eq!(rules.kind(), kind);
        }
    }

    #[test]
    fn empty_registry_reports_missing_rule_set() {
        let registry = RuleSetRegistry::empty();
        let mut actor = actor_of(ActorKind::Vehicle);
        assert_eq!(
            registry.prepare(&mut actor),
            Err(DomainError::MissingRuleSet(ActorKind::Vehicle))
        );
    }

    #[test]
    fn default_actors_of_every_kind_derive() {
        let registry = RuleSetRegistry::new();
        for kind in ActorKind::ALL {
            let mut actor = actor_of(kind);
            registry
                .prepare(&mut actor)
                .unwrap_or_else(|err| panic!("{kind} failed: {err}"));
        }
    }

    /// An actor of `kind` with inputs that every derived field depends on.
    fn furnished(kind: ActorKind) -> ActorRecord {
        let side = |value, max| SideHitPoints { value, max };
        match kind {
            ActorKind::Character => ActorRecord::new(
                "Bruna",
                ActorData::Character(CharacterData {
                    abilities: Abilities::default()
                        .with_score(Ability::Str, 16)
                        .with_score(Ability::Wis, 5),
                    ..CharacterData::default()
                }),
            ),
            ActorKind::Monster => ActorRecord::new(
                "Troll",
                ActorData::Monster(MonsterData {
                    hit_dice: HitDice {
                        number: 6.5,
                        die: "d8".to_string(),
                    },
                    monster_saves: 6,
                    ..MonsterData::default()
                }),
            ),
            ActorKind::Vehicle => ActorRecord::new(
                "Cog",
                ActorData::Vehicle(VehicleData {
                    hit_points: VehicleHitPoints {
                        forward: side(0, 20),
                        aft: side(20, 20),
                        port: side(30, 30),
                        starboard: side(30, 30),
                        ..VehicleHitPoints::default()
                    },
                    movement: Movement {
                        value: 9,
                        ..Movement::default()
                    },
                    ..VehicleData::default()
                }),
            ),
            ActorKind::Stronghold => ActorRecord::new(
                "Keep",
                ActorData::Stronghold(StrongholdData {
                    workers: 4,
                    ..StrongholdData::default()
                }),
            )
            .with_items(vec![
                ItemRecord::new(
                    "Hall",
                    ItemData::Floor(FloorData {
                        material: FloorMaterial::Floor,
                        area: 100.0,
                        height: 10.0,
                        price: 0.0,
                    }),
                ),
                ItemRecord::new(
                    "Curtain",
                    ItemData::Wall(WallData {
                        material: WallMaterial::StoneHard,
                        quantity: 3,
                        ..WallData::default()
                    }),
                ),
            ]),
            ActorKind::SiegeEngine => ActorRecord::new(
                "Ballista",
                ActorData::SiegeEngine(SiegeEngineData::default()),
            ),
        }
    }

    #[test]
    fn preparing_twice_changes_nothing() {
        let registry = RuleSetRegistry::new();
        for kind in ActorKind::ALL {
            let mut once = furnished(kind);
            registry
                .prepare(&mut once)
                .unwrap_or_else(|err| panic!("{kind} failed: {err}"));
            let mut twice = once.clone();
            registry
                .prepare(&mut twice)
                .unwrap_or_else(|err| panic!("{kind} failed again: {err}"));
            assert_eq!(twice, once, "{kind} drifted");

            match &twice.data {
                ActorData::Character(c) => {
                    assert_eq!(c.abilities.str.bonus, 2);
                    assert_eq!(c.abilities.wis.bonus, -2);
                }
                ActorData::Monster(m) => {
                    assert_eq!(m.attack_bonus, 6);
                    assert_eq!(m.saves.as_row(), [12, 11, 13, 13, 14]);
                }
                ActorData::Vehicle(v) => {
                    assert_eq!(v.hit_points.value, 80);
                    assert_eq!(v.hit_points.max, 100);
                    assert_eq!(v.movement.current, 4);
                }
                ActorData::Stronghold(s) => {
                    assert_eq!(s.height, 10.0);
                    assert!(s.cost > 0.0);
                    assert!(s.build_time > 0);
                }
                ActorData::SiegeEngine(_) => {}
            }
        }
    }

    #[test]
    fn rule_set_rejects_other_kinds() {
        let registry = RuleSetRegistry::new();
        let monster_rules = registry.get(ActorKind::Monster).expect("registered");
        let mut vehicle = actor_of(ActorKind::Vehicle);
        assert_eq!(
            monster_rules.prepare_base(&mut vehicle),
            Err(DomainError::actor_kind(
                ActorKind::Monster,
                ActorKind::Vehicle
            ))
        );
        assert_eq!(
            monster_rules.prepare_derived(&mut vehicle),
            Err(DomainError::actor_kind(
                ActorKind::Monster,
                ActorKind::Vehicle
            ))
        );
    }

    #[test]
    fn registered_rule_set_replaces_built_in() {
        struct Inert;

        impl ActorRules for Inert {
            fn kind(&self) -> ActorKind {
                ActorKind::Character
            }
        }

        let mut registry = RuleSetRegistry::new();
        registry.register(Arc::new(Inert));
        let mut actor = actor_of(ActorKind::Character);
        if let ActorData::Character(data) = &mut actor.data {
            data.abilities.str.value = 18;
        }
        registry.prepare(&mut actor).expect("inert rules succeed");
        let ActorData::Character(data) = &actor.data else {
            panic!("expected character data");
        };
        assert_eq!(data.abilities.str.bonus, 0);
    }
}
