//! Ability scores and their derived modifiers.
//!
//! A character carries six ability scores. The stored value is the input; the
//! `bonus` is rewritten on every derivation pass and never edited directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;

/// The six abilities, keyed by their short names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Cha,
}

impl Ability {
    /// All abilities in sheet order.
    pub const ALL: [Ability; 6] = [
        Ability::Str,
        Ability::Dex,
        Ability::Con,
        Ability::Int,
        Ability::Wis,
        Ability::Cha,
    ];

    /// Short key used in roll formulas (`@str.bonus`).
    pub fn key(&self) -> &'static str {
        match self {
            Ability::Str => "str",
            Ability::Dex => "dex",
            Ability::Con => "con",
            Ability::Int => "int",
            Ability::Wis => "wis",
            Ability::Cha => "cha",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Ability::Str => "AXISMUNDIRPG.AbilityStr",
            Ability::Dex => "AXISMUNDIRPG.AbilityDex",
            Ability::Con => "AXISMUNDIRPG.AbilityCon",
            Ability::Int => "AXISMUNDIRPG.AbilityInt",
            Ability::Wis => "AXISMUNDIRPG.AbilityWis",
            Ability::Cha => "AXISMUNDIRPG.AbilityCha",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "str" => Ok(Self::Str),
            "dex" => Ok(Self::Dex),
            "con" => Ok(Self::Con),
            "int" => Ok(Self::Int),
            "wis" => Ok(Self::Wis),
            "cha" => Ok(Self::Cha),
            other => Err(DomainError::validation(format!("Unknown ability: {other}"))),
        }
    }
}

/// Deserialize an optional governing ability where an empty string means none.
pub fn deserialize_optional_ability<'de, D>(deserializer: D) -> Result<Option<Ability>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(key) => key.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// A stored score plus its derived modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScore {
    pub value: i32,
    #[serde(default)]
    pub bonus: i32,
}

impl AbilityScore {
    pub fn new(value: i32) -> Self {
        Self { value, bonus: 0 }
    }
}

impl Default for AbilityScore {
    /// An average score of 10 (neutral modifier)
    fn default() -> Self {
        Self::new(10)
    }
}

/// A character's six ability scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Abilities {
    pub str: AbilityScore,
    pub dex: AbilityScore,
    pub con: AbilityScore,
    pub int: AbilityScore,
    pub wis: AbilityScore,
    pub cha: AbilityScore,
}

impl Abilities {
    pub fn get(&self, ability: Ability) -> &AbilityScore {
        match ability {
            Ability::Str => &self.str,
            Ability::Dex => &self.dex,
            Ability::Con => &self.con,
            Ability::Int => &self.int,
            Ability::Wis => &self.wis,
            Ability::Cha => &self.cha,
        }
    }

    pub fn get_mut(&mut self, ability: Ability) -> &mut AbilityScore {
        match ability {
            Ability::Str => &mut self.str,
            Ability::Dex => &mut self.dex,
            Ability::Con => &mut self.con,
            Ability::Int => &mut self.int,
            Ability::Wis => &mut self.wis,
            Ability::Cha => &mut self.cha,
        }
    }

    /// Iterate abilities in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, &AbilityScore)> {
        Ability::ALL.into_iter().map(move |ability| (ability, self.get(ability)))
    }

    pub fn with_score(mut self, ability: Ability, value: i32) -> Self {
        self.get_mut(ability).value = value;
        self
    }
}
