//! Actor and item records.

mod actor;
mod item;

pub use actor::{
    ActorData, ActorKind, ActorRecord, CharacterData, HitDice, MonsterData, Movement,
    SideHitPoints, SiegeEngineData, StrongholdData, VehicleData, VehicleHitPoints, VehicleSide,
};
pub use item::{
    ArmorData, ContainerData, FeatureData, FloorData, FloorMaterial, GearData, ItemData, ItemKind,
    ItemRecord, MonsterSkillData, SkillData, SpellData, WallData, WallMaterial, WeaponData,
    WeaponRange,
};
