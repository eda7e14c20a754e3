//! Actor entity - Characters, monsters, and the things they ride or build
//!
//! An actor is a tagged record: the `system` object carries a `type`
//! discriminator and the attribute tree for that kind of actor. Fields the
//! derivation pipeline writes are stored alongside the inputs so a derived
//! snapshot serializes exactly like the sheet that produced it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::item::{ItemData, ItemKind, ItemRecord};
use crate::value_objects::{Abilities, Money, Saves};
use crate::ActorId;

/// An actor and the items it owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorRecord {
    #[serde(default)]
    pub id: ActorId,
    pub name: String,
    #[serde(rename = "system")]
    pub data: ActorData,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

impl ActorRecord {
    pub fn new(name: impl Into<String>, data: ActorData) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            data,
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = ItemRecord>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn kind(&self) -> ActorKind {
        self.data.kind()
    }

    /// Items of one type, in list order
    pub fn items_of_kind(&self, kind: ItemKind) -> impl Iterator<Item = &ItemRecord> {
        self.items.iter().filter(move |item| item.kind() == kind)
    }

    pub fn has_skills(&self) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item.data, ItemData::Pericia(_)))
    }
}

/// Kind-specific attribute trees, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ActorData {
    Character(CharacterData),
    Monster(MonsterData),
    SiegeEngine(SiegeEngineData),
    Stronghold(StrongholdData),
    Vehicle(VehicleData),
}

impl ActorData {
    pub fn kind(&self) -> ActorKind {
        match self {
            Self::Character(_) => ActorKind::Character,
            Self::Monster(_) => ActorKind::Monster,
            Self::SiegeEngine(_) => ActorKind::SiegeEngine,
            Self::Stronghold(_) => ActorKind::Stronghold,
            Self::Vehicle(_) => ActorKind::Vehicle,
        }
    }
}

/// Actor type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActorKind {
    Character,
    Monster,
    SiegeEngine,
    Stronghold,
    Vehicle,
}

impl ActorKind {
    pub const ALL: [ActorKind; 5] = [
        ActorKind::Character,
        ActorKind::Monster,
        ActorKind::SiegeEngine,
        ActorKind::Stronghold,
        ActorKind::Vehicle,
    ];
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character => write!(f, "character"),
            Self::Monster => write!(f, "monster"),
            Self::SiegeEngine => write!(f, "siegeEngine"),
            Self::Stronghold => write!(f, "stronghold"),
            Self::Vehicle => write!(f, "vehicle"),
        }
    }
}

/// Player character attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CharacterData {
    pub biography: String,
    pub abilities: Abilities,
    /// Experience level
    pub level: i32,
    pub melee_attack_bonus: i32,
    pub ranged_attack_bonus: i32,
    pub melee_damage_bonus: i32,
    pub ranged_damage_bonus: i32,
    pub money: Money,
    /// Saving throw targets, entered on the sheet
    pub saves: Saves,
    /// Set once skill ratings have been computed from base values
    pub skills_calculated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitDice {
    /// Number of hit dice; fractional values count at their integer tier
    pub number: f64,
    /// Die expression, e.g. `d8`
    pub die: String,
}

/// Monster attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MonsterData {
    pub biography: String,
    pub hit_dice: HitDice,
    /// Row of the saving throw table (1-14)
    pub monster_saves: i64,
    /// Derived from hit dice
    pub attack_bonus: i32,
    /// Derived from the save category
    pub saves: Saves,
}

impl Default for MonsterData {
    fn default() -> Self {
        Self {
            biography: String::new(),
            hit_dice: HitDice::default(),
            monster_saves: 1,
            attack_bonus: 0,
            saves: Saves::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiegeEngineData {
    pub biography: String,
    /// Range bonus selected on the sheet
    pub range_bonus: i32,
}

/// Stronghold attributes; floors and walls are items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrongholdData {
    pub biography: String,
    /// Number of workers on the build; must be at least 1
    pub workers: u32,
    pub cost_multiplier: f64,
    /// Derived: sum of floor heights
    pub height: f64,
    /// Derived: total cost including the height surcharge
    pub cost: f64,
    /// Derived: days to build
    pub build_time: u64,
}

impl Default for StrongholdData {
    fn default() -> Self {
        Self {
            biography: String::new(),
            workers: 1,
            cost_multiplier: 1.0,
            height: 0.0,
            cost: 0.0,
            build_time: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SideHitPoints {
    pub value: i32,
    pub max: i32,
}

impl SideHitPoints {
    pub fn new(value: i32, max: i32) -> Self {
        Self { value, max }
    }

    /// Reduced to zero, as opposed to a side that never had hit points
    pub fn is_destroyed(&self) -> bool {
        self.value == 0 && self.max != 0
    }
}

/// Vehicle sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleSide {
    Forward,
    Aft,
    Port,
    Starboard,
}

impl VehicleSide {
    pub const ALL: [VehicleSide; 4] = [
        VehicleSide::Forward,
        VehicleSide::Aft,
        VehicleSide::Port,
        VehicleSide::Starboard,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleHitPoints {
    pub forward: SideHitPoints,
    pub aft: SideHitPoints,
    pub port: SideHitPoints,
    pub starboard: SideHitPoints,
    /// Derived: sum of side values
    pub value: i32,
    /// Derived: sum of side maximums
    pub max: i32,
}

impl VehicleHitPoints {
    pub fn side(&self, side: VehicleSide) -> &SideHitPoints {
        match side {
            VehicleSide::Forward => &self.forward,
            VehicleSide::Aft => &self.aft,
            VehicleSide::Port => &self.port,
            VehicleSide::Starboard => &self.starboard,
        }
    }

    pub fn sides(&self) -> impl Iterator<Item = &SideHitPoints> {
        VehicleSide::ALL.into_iter().map(move |side| self.side(side))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movement {
    /// Full movement rate
    pub value: i32,
    /// Derived: rate after side damage
    pub current: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VehicleData {
    pub biography: String,
    pub hit_points: VehicleHitPoints,
    #[serde(rename = "move")]
    pub movement: Movement,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_deserializes_by_type_tag() {
        let json = r#"{
            "name": "Grub",
            "system": { "type": "monster", "hitDice": { "number": 3, "die": "d8" }, "monsterSaves": 3 },
            "items": [ { "name": "Club", "system": { "type": "weapon", "damage": "1d4" } } ]
        }"#;
        let actor: ActorRecord = serde_json::from_str(json).expect("valid monster");
        assert_eq!(actor.kind(), ActorKind::Monster);
        assert_eq!(actor.items_of_kind(ItemKind::Weapon).count(), 1);
        let ActorData::Monster(monster) = &actor.data else {
            panic!("expected monster data");
        };
        assert_eq!(monster.hit_dice.number, 3.0);
        assert_eq!(monster.monster_saves, 3);
    }

    #[test]
    fn vehicle_move_field_is_named_move() {
        let json = r#"{ "name": "Cog", "system": { "type": "vehicle", "move": { "value": 12 } } }"#;
        let actor: ActorRecord = serde_json::from_str(json).expect("valid vehicle");
        let ActorData::Vehicle(vehicle) = &actor.data else {
            panic!("expected vehicle data");
        };
        assert_eq!(vehicle.movement.value, 12);
        let back = serde_json::to_value(&actor).expect("serializable");
        assert_eq!(back["system"]["move"]["value"], 12);
        assert_eq!(back["system"]["type"], "vehicle");
    }

    #[test]
    fn siege_engine_kind_displays_camel_case() {
        assert_eq!(ActorKind::SiegeEngine.to_string(), "siegeEngine");
    }

    #[test]
    fn destroyed_side_requires_nonzero_max() {
        assert!(SideHitPoints::new(0, 10).is_destroyed());
        assert!(!SideHitPoints::new(0, 0).is_destroyed());
        assert!(!SideHitPoints::new(3, 10).is_destroyed());
    }
}
