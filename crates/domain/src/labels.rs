//! Label keys and the localization capability.
//!
//! Sheets display localized names for abilities, saves, coins and the
//! stronghold's derived fields. The domain only knows the keys; resolving
//! them is up to a [`Localizer`] supplied by the caller.

use std::collections::BTreeMap;

use crate::value_objects::{Ability, Coin, SaveKind};

pub const HEIGHT_LABEL: &str = "AXISMUNDIRPG.Height";
pub const COST_LABEL: &str = "AXISMUNDIRPG.Cost";
pub const BUILD_TIME_LABEL: &str = "AXISMUNDIRPG.BuildTime";

/// Resolves label keys to display text.
pub trait Localizer: Send + Sync {
    /// Localized text for `key`, or `None` when the key is unknown.
    fn localize(&self, key: &str) -> Option<String>;

    /// Localized text for `key`, falling back to `fallback`.
    fn label(&self, key: &str, fallback: &str) -> String {
        self.localize(key).unwrap_or_else(|| fallback.to_string())
    }
}

/// Localizer that knows no translations and always falls back.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyLocalizer;

impl Localizer for KeyLocalizer {
    fn localize(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Ability labels keyed by short key (`str`, `dex`, ...).
pub fn ability_labels(localizer: &dyn Localizer) -> BTreeMap<String, String> {
    Ability::ALL
        .iter()
        .map(|a| (a.key().to_string(), localizer.label(a.label_key(), a.key())))
        .collect()
}

/// Saving throw labels keyed by save name.
pub fn save_labels(localizer: &dyn Localizer) -> BTreeMap<String, String> {
    SaveKind::ALL
        .iter()
        .map(|s| (s.key().to_string(), localizer.label(s.label_key(), s.key())))
        .collect()
}

/// Coin labels keyed by denomination.
pub fn money_labels(localizer: &dyn Localizer) -> BTreeMap<String, String> {
    Coin::ALL
        .iter()
        .map(|c| (c.key().to_string(), localizer.label(c.label_key(), c.key())))
        .collect()
}

/// Labels for the stronghold's derived fields.
pub fn stronghold_labels(localizer: &dyn Localizer) -> BTreeMap<String, String> {
    [
        ("height", HEIGHT_LABEL),
        ("cost", COST_LABEL),
        ("buildTime", BUILD_TIME_LABEL),
    ]
    .into_iter()
    .map(|(field, key)| (field.to_string(), localizer.label(key, key)))
    .collect()
}
