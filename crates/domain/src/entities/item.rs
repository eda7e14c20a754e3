//! Item entity - Sub-records owned by an actor
//!
//! Every item belongs to exactly one actor and lives in its `items` list.
//! The `system` object carries a `type` discriminator plus the fields for
//! that item type:
//!
//! ```json
//! { "id": "…", "name": "Rope", "system": { "type": "item", "weight": 1, "quantity": 2 } }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::{deserialize_optional_ability, Ability, ItemWeight, Quantity};
use crate::ItemId;

/// An item owned by an actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default)]
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "system")]
    pub data: ItemData,
}

impl ItemRecord {
    pub fn new(name: impl Into<String>, data: ItemData) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            data,
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.data.kind()
    }
}

/// Type-specific item fields, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ItemData {
    Item(GearData),
    Container(ContainerData),
    Weapon(WeaponData),
    Armor(ArmorData),
    Spell(SpellData),
    Pericia(SkillData),
    Feature(FeatureData),
    MonsterSkill(MonsterSkillData),
    Floor(FloorData),
    Wall(WallData),
}

impl ItemData {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Item(_) => ItemKind::Item,
            Self::Container(_) => ItemKind::Container,
            Self::Weapon(_) => ItemKind::Weapon,
            Self::Armor(_) => ItemKind::Armor,
            Self::Spell(_) => ItemKind::Spell,
            Self::Pericia(_) => ItemKind::Pericia,
            Self::Feature(_) => ItemKind::Feature,
            Self::MonsterSkill(_) => ItemKind::MonsterSkill,
            Self::Floor(_) => ItemKind::Floor,
            Self::Wall(_) => ItemKind::Wall,
        }
    }
}

/// Item type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Item,
    Container,
    Weapon,
    Armor,
    Spell,
    Pericia,
    Feature,
    MonsterSkill,
    Floor,
    Wall,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item => write!(f, "item"),
            Self::Container => write!(f, "container"),
            Self::Weapon => write!(f, "weapon"),
            Self::Armor => write!(f, "armor"),
            Self::Spell => write!(f, "spell"),
            Self::Pericia => write!(f, "pericia"),
            Self::Feature => write!(f, "feature"),
            Self::MonsterSkill => write!(f, "monsterSkill"),
            Self::Floor => write!(f, "floor"),
            Self::Wall => write!(f, "wall"),
        }
    }
}

/// General gear
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GearData {
    pub description: String,
    pub weight: ItemWeight,
    pub quantity: Quantity,
    /// Readily accessible (belt, hands) rather than stowed
    pub prepared: bool,
    pub price: Option<f64>,
}

/// Gear that holds other gear
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerData {
    pub description: String,
    pub weight: ItemWeight,
    pub quantity: Quantity,
    pub prepared: bool,
    pub price: Option<f64>,
    /// Weight the container can hold
    pub capacity: Quantity,
}

/// Melee or ranged weapon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponRange {
    #[default]
    #[serde(rename = "m")]
    Melee,
    #[serde(rename = "r")]
    Ranged,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeaponData {
    pub description: String,
    pub weight: ItemWeight,
    pub prepared: bool,
    pub attack_bonus: i32,
    /// Damage dice expression, e.g. `1d8`
    pub damage: String,
    pub weapon_type: WeaponRange,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArmorData {
    pub description: String,
    pub weight: ItemWeight,
    pub armor_class: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpellData {
    pub description: String,
    /// Spell book level; `None` leaves the spell out of the book
    pub spell_level: Option<i64>,
    /// Number of times the spell is prepared
    pub prepared: u32,
}

/// A skill ("pericia"), basic or advanced
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillData {
    pub description: String,
    pub advanced: bool,
    /// Starting value before the ability bonus
    pub base_value: i32,
    /// Ability whose bonus adds to the base value
    #[serde(deserialize_with = "deserialize_optional_ability")]
    pub ability: Option<Ability>,
    /// Computed rating (base + ability bonus, never negative)
    pub rating: i32,
    pub rating_calculated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureData {
    pub description: String,
    /// Level at which the feature is gained; features sort by it
    pub feature_level: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MonsterSkillData {
    pub description: String,
}

/// Floor or roof materials for stronghold floors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FloorMaterial {
    #[default]
    Floor,
    RoofThatch,
    RoofWood,
    RoofSlate,
    /// Unrecognized material, priced like a plain floor
    Other(String),
}

impl From<String> for FloorMaterial {
    fn from(value: String) -> Self {
        match value.as_str() {
            "floor" => Self::Floor,
            "roofThatch" => Self::RoofThatch,
            "roofWood" => Self::RoofWood,
            "roofSlate" => Self::RoofSlate,
            _ => Self::Other(value),
        }
    }
}

impl From<FloorMaterial> for String {
    fn from(value: FloorMaterial) -> Self {
        match value {
            FloorMaterial::Floor => "floor".to_string(),
            FloorMaterial::RoofThatch => "roofThatch".to_string(),
            FloorMaterial::RoofWood => "roofWood".to_string(),
            FloorMaterial::RoofSlate => "roofSlate".to_string(),
            FloorMaterial::Other(raw) => raw,
        }
    }
}

/// Wall materials for stronghold walls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WallMaterial {
    StoneHard,
    StoneSoft,
    Brick,
    #[default]
    Wood,
    /// Unrecognized material, built like wood
    Other(String),
}

impl From<String> for WallMaterial {
    fn from(value: String) -> Self {
        match value.as_str() {
            "stoneHard" => Self::StoneHard,
            "stoneSoft" => Self::StoneSoft,
            "brick" => Self::Brick,
            "wood" => Self::Wood,
            _ => Self::Other(value),
        }
    }
}

impl From<WallMaterial> for String {
    fn from(value: WallMaterial) -> Self {
        match value {
            WallMaterial::StoneHard => "stoneHard".to_string(),
            WallMaterial::StoneSoft => "stoneSoft".to_string(),
            WallMaterial::Brick => "brick".to_string(),
            WallMaterial::Wood => "wood".to_string(),
            WallMaterial::Other(raw) => raw,
        }
    }
}

/// A floor (or roof) level of a stronghold
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FloorData {
    pub material: FloorMaterial,
    pub area: f64,
    pub height: f64,
    /// Derived: area / 10 x material multiplier
    pub price: f64,
}

/// A run of stronghold wall sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WallData {
    pub material: WallMaterial,
    pub thickness: i32,
    /// Number of wall sections
    pub quantity: u32,
    /// Derived from the material
    pub hardness: i32,
    /// Derived: price of one section
    pub unit_price: f64,
    /// Derived: unit price x quantity
    pub price: f64,
}

impl Default for WallData {
    fn default() -> Self {
        Self {
            material: WallMaterial::default(),
            thickness: 1,
            quantity: 1,
            hardness: 0,
            unit_price: 0.0,
            price: 0.0,
        }
    }
}
