//! Roll data: the lookup surface handed to the dice formula evaluator.
//!
//! Formulas reference actor values with `@` paths such as `@str.bonus` or
//! `@ab`. The projection is the actor's `system` tree with a few shortcuts
//! added on top:
//!
//! - characters: each ability copied to its short key, and `lvl`
//! - any actor with an `attackBonus`: `ab`

use serde::Serialize;
use serde_json::{Map, Value};

use crate::entities::{ActorData, ActorRecord};
use crate::error::DomainError;

/// Flat JSON view of an actor for formula lookups.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RollData(Map<String, Value>);

impl RollData {
    /// Project a (derived) actor. The record itself is not modified.
    pub fn project(actor: &ActorRecord) -> Result<Self, DomainError> {
        let mut data = match serde_json::to_value(&actor.data)
            .map_err(|e| DomainError::serialization(e.to_string()))?
        {
            Value::Object(map) => map,
            other => {
                return Err(DomainError::serialization(format!(
                    "actor data is not an object: {other}"
                )))
            }
        };
        data.remove("type");

        if let ActorData::Character(character) = &actor.data {
            for (ability, score) in character.abilities.iter() {
                let copy = serde_json::to_value(score)
                    .map_err(|e| DomainError::serialization(e.to_string()))?;
                data.insert(ability.key().to_string(), copy);
            }
            data.insert("lvl".to_string(), Value::from(character.level));
        }

        if let Some(attack_bonus) = data.get("attackBonus").cloned() {
            let ab = if attack_bonus.is_null() {
                Value::from(0)
            } else {
                attack_bonus
            };
            data.insert("ab".to_string(), ab);
        }

        Ok(Self(data))
    }

    /// Look up a dotted path such as `str.bonus`. A leading `@` is ignored.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let path = path.strip_prefix('@').unwrap_or(path);
        let mut segments = path.split('.');
        let first = self.0.get(segments.next()?)?;
        segments.try_fold(first, |value, segment| value.get(segment))
    }

    /// Look up a dotted path and read it as a number.
    pub fn number(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(Value::as_f64)
    }
}
