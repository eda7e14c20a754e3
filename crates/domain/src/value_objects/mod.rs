//! Value objects shared by actor and item records.

mod abilities;
mod money;
mod saves;
mod weight;

pub use abilities::{deserialize_optional_ability, Abilities, Ability, AbilityScore};
pub use money::{Coin, Money};
pub use saves::{SaveKind, Saves};
pub use weight::{ItemWeight, Quantity, CURRENCY_WEIGHT_MARKER};
