//! Saving throw targets.

use serde::{Deserialize, Serialize};

/// The five saving throw categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveKind {
    Paralysis,
    Death,
    Breath,
    Wands,
    Spells,
}

impl SaveKind {
    /// Saving throws in table column order.
    pub const ALL: [SaveKind; 5] = [
        SaveKind::Paralysis,
        SaveKind::Death,
        SaveKind::Breath,
        SaveKind::Wands,
        SaveKind::Spells,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SaveKind::Paralysis => "paralysis",
            SaveKind::Death => "death",
            SaveKind::Breath => "breath",
            SaveKind::Wands => "wands",
            SaveKind::Spells => "spells",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            SaveKind::Paralysis => "AXISMUNDIRPG.SaveParalysis",
            SaveKind::Death => "AXISMUNDIRPG.SaveDeath",
            SaveKind::Breath => "AXISMUNDIRPG.SaveBreath",
            SaveKind::Wands => "AXISMUNDIRPG.SaveWands",
            SaveKind::Spells => "AXISMUNDIRPG.SaveSpells",
        }
    }
}

/// Target numbers for each saving throw (roll at or above to save).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Saves {
    pub paralysis: i32,
    pub death: i32,
    pub breath: i32,
    pub wands: i32,
    pub spells: i32,
}

impl Saves {
    /// Build from a table row ordered `(paralysis, death, breath, wands, spells)`.
    pub const fn from_row(row: [i32; 5]) -> Self {
        Self {
            paralysis: row[0],
            death: row[1],
            breath: row[2],
            wands: row[3],
            spells: row[4],
        }
    }

    pub fn get(&self, kind: SaveKind) -> i32 {
        match kind {
            SaveKind::Paralysis => self.paralysis,
            SaveKind::Death => self.death,
            SaveKind::Breath => self.breath,
            SaveKind::Wands => self.wands,
            SaveKind::Spells => self.spells,
        }
    }

    pub fn as_row(&self) -> [i32; 5] {
        [
            self.paralysis,
            self.death,
            self.breath,
            self.wands,
            self.spells,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_order_matches_save_kinds() {
        let saves = Saves::from_row([15, 14, 16, 16, 17]);
        let by_kind: Vec<i32> = SaveKind::ALL.iter().map(|k| saves.get(*k)).collect();
        assert_eq!(by_kind, vec![15, 14, 16, 16, 17]);
        assert_eq!(saves.as_row(), [15, 14, 16, 16, 17]);
    }
}
