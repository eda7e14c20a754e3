//! Stronghold rules: floor and wall pricing, aggregate cost and build time.
//!
//! Floors and walls are items on the stronghold. The base pass prices each
//! one from its material; the derived pass sums those prices, applies the
//! height surcharge (each 10 feet of height adds 10% to the cost) and the
//! cost multiplier, and works out the build time for the worker count.

use std::num::NonZeroU32;

use crate::entities::{
    ActorData, ActorKind, ActorRecord, FloorData, FloorMaterial, ItemData, WallData, WallMaterial,
};
use crate::error::DomainError;
use crate::rules::ActorRules;

/// Price multiplier for a floor or roof material.
pub fn floor_price_multiplier(material: &FloorMaterial) -> f64 {
    match material {
        FloorMaterial::RoofSlate => 4.0,
        FloorMaterial::RoofWood => 2.0,
        FloorMaterial::Floor | FloorMaterial::RoofThatch | FloorMaterial::Other(_) => 1.0,
    }
}

/// Price of a floor: one price unit per 10 square feet, scaled by material.
pub fn floor_price(area: f64, material: &FloorMaterial) -> f64 {
    area / 10.0 * floor_price_multiplier(material)
}

/// Build properties of one wall section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSpec {
    pub hardness: i32,
    /// Effective thickness; wood walls are always 1
    pub thickness: i32,
    pub unit_price: f64,
}

/// Hardness, thickness and section price for a wall material and thickness.
pub fn wall_spec(material: &WallMaterial, thickness: i32) -> WallSpec {
    let (hardness, unit_price) = match material {
        WallMaterial::StoneHard => (
            16,
            match thickness {
                15 => 350.0,
                10 => 260.0,
                5 => 90.0,
                _ => 40.0,
            },
        ),
        WallMaterial::StoneSoft => (
            12,
            match thickness {
                10 => 200.0,
                5 => 70.0,
                _ => 30.0,
            },
        ),
        WallMaterial::Brick => (8, if thickness == 5 { 50.0 } else { 20.0 }),
        WallMaterial::Wood | WallMaterial::Other(_) => {
            return WallSpec {
                hardness: 6,
                thickness: 1,
                unit_price: 10.0,
            }
        }
    };
    WallSpec {
        hardness,
        thickness,
        unit_price,
    }
}

/// Days to build: the larger of cost per worker and the square root of the cost.
pub fn build_time(cost: f64, workers: NonZeroU32) -> u64 {
    let per_worker = cost / f64::from(workers.get());
    // f64::max ignores a NaN root from a negative cost
    let days = per_worker.max(cost.sqrt()).ceil();
    if days.is_finite() && days > 0.0 {
        days as u64
    } else {
        0
    }
}

/// Aggregate stronghold values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrongholdTotals {
    pub height: f64,
    pub cost: f64,
    pub build_time: u64,
}

impl StrongholdTotals {
    /// Aggregate already-priced floors and walls.
    pub fn compute<'a>(
        floors: impl IntoIterator<Item = &'a FloorData>,
        walls: impl IntoIterator<Item = &'a WallData>,
        cost_multiplier: f64,
        workers: NonZeroU32,
    ) -> Self {
        let (height, floor_cost) = floors
            .into_iter()
            .fold((0.0, 0.0), |(height, cost), floor| {
                (height + floor.height, cost + floor.price)
            });
        let base_cost = walls
            .into_iter()
            .fold(floor_cost, |cost, wall| cost + wall.price);
        let cost = (base_cost + base_cost * (height / 100.0)) * cost_multiplier;
        Self {
            height,
            cost,
            build_time: build_time(cost, workers),
        }
    }
}

/// Rules for strongholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrongholdRules;

impl StrongholdRules {
    fn price_floor(floor: &mut FloorData) {
        floor.price = floor_price(floor.area, &floor.material);
    }

    fn price_wall(wall: &mut WallData) {
        let spec = wall_spec(&wall.material, wall.thickness);
        wall.hardness = spec.hardness;
        wall.thickness = spec.thickness;
        wall.unit_price = spec.unit_price;
        wall.price = spec.unit_price * f64::from(wall.quantity);
    }
}

impl ActorRules for StrongholdRules {
    fn kind(&self) -> ActorKind {
        ActorKind::Stronghold
    }

    fn prepare_base(&self, actor: &mut ActorRecord) -> Result<(), DomainError> {
        self.ensure_kind(actor)?;
        for item in &mut actor.items {
            match &mut item.data {
                ItemData::Floor(floor) => Self::price_floor(floor),
                ItemData::Wall(wall) => Self::price_wall(wall),
                _ => {}
            }
        }
        Ok(())
    }

    fn prepare_derived(&self, actor: &mut ActorRecord) -> Result<(), DomainError> {
        let actual = actor.kind();
        let ActorData::Stronghold(data) = &mut actor.data else {
            return Err(DomainError::actor_kind(self.kind(), actual));
        };
        let workers = NonZeroU32::new(data.workers).ok_or_else(|| {
            DomainError::validation("stronghold needs at least one worker")
        })?;

        let floors = actor.items.iter().filter_map(|item| match &item.data {
            ItemData::Floor(floor) => Some(floor),
            _ => None,
        });
        let walls = actor.items.iter().filter_map(|item| match &item.data {
            ItemData::Wall(wall) => Some(wall),
            _ => None,
        });
        let totals = StrongholdTotals::compute(floors, walls, data.cost_multiplier, workers);

        data.height = totals.height;
        data.cost = totals.cost;
        data.build_time = totals.build_time;
        Ok(())
    }
}
