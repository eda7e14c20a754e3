//! Vehicle rules: aggregate hit points and movement after side damage.

use crate::entities::{ActorData, ActorKind, ActorRecord, VehicleHitPoints};
use crate::error::DomainError;
use crate::rules::ActorRules;

/// Number of sides reduced to zero hit points.
pub fn destroyed_sides(hit_points: &VehicleHitPoints) -> usize {
    hit_points
        .sides()
        .filter(|side| side.is_destroyed())
        .count()
}

/// Movement left after losing `destroyed` sides: halved for one, none for two or more.
pub fn movement_after_damage(movement: i32, destroyed: usize) -> i32 {
    match destroyed {
        0 => movement,
        1 => movement.div_euclid(2),
        _ => 0,
    }
}

/// Rules for vehicles.
#[derive(Debug, Clone, Copy, Default)]
pub struct VehicleRules;

impl ActorRules for VehicleRules {
    fn kind(&self) -> ActorKind {
        ActorKind::Vehicle
    }

    fn prepare_base(&self, actor: &mut ActorRecord) -> Result<(), DomainError> {
        let actual = actor.kind();
        let ActorData::Vehicle(data) = &mut actor.data else {
            return Err(DomainError::actor_kind(self.kind(), actual));
        };
        let (value, max) = data
            .hit_points
            .sides()
            .fold((0i32, 0i32), |(value, max), side| {
                (value.saturating_add(side.value), max.saturating_add(side.max))
            });
        data.hit_points.value = value;
        data.hit_points.max = max;
        Ok(())
    }

    fn prepare_derived(&self, actor: &mut ActorRecord) -> Result<(), DomainError> {
        let actual = actor.kind();
        let ActorData::Vehicle(data) = &mut actor.data else {
            return Err(DomainError::actor_kind(self.kind(), actual));
        };
        let destroyed = destroyed_sides(&data.hit_points);
        data.movement.current = movement_after_damage(data.movement.value, destroyed);
        Ok(())
    }
}
