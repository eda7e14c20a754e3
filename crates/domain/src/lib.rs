pub mod encumbrance;
pub mod entities;
pub mod error;
pub mod ids;
pub mod labels;
pub mod roll_data;
pub mod rolls;
pub mod rules;
pub mod skills;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    ActorData, ActorKind, ActorRecord, ArmorData, CharacterData, ContainerData, FeatureData,
    FloorData, FloorMaterial, GearData, HitDice, ItemData, ItemKind, ItemRecord, MonsterData,
    MonsterSkillData, Movement, SideHitPoints, SiegeEngineData, SkillData, SpellData,
    StrongholdData, VehicleData, VehicleHitPoints, VehicleSide, WallData, WallMaterial,
    WeaponData, WeaponRange,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{ActorId, ItemId};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    Abilities, Ability, AbilityScore, Coin, ItemWeight, Money, Quantity, SaveKind, Saves,
    CURRENCY_WEIGHT_MARKER,
};

// Derivation pipeline
pub use rules::{
    ability_bonus, monster_attack_bonus, monster_saves, ActorRules, CharacterRules, MonsterRules,
    RuleSetRegistry, SiegeEngineRules, StrongholdRules, VehicleRules,
};

// Presentation-side projections
pub use encumbrance::{
    assess, CarriedWeight, Encumbrance, Inventory, LoadThresholds, LoadTier, PreparedWeight,
};
pub use labels::{KeyLocalizer, Localizer};
pub use roll_data::RollData;
pub use rolls::{attack_formula, damage_formula, AttackStyle, SKILL_CHECK_FORMULA};
pub use skills::{
    calculate_pending_advanced_ratings, calculate_skill_ratings, skill_rating, starter_skills,
    StarterSkill, STARTER_SKILLS,
};
