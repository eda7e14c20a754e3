//! Coin purse value object

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Coin denominations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coin {
    Pp,
    Gp,
    Ep,
    Sp,
    Cp,
}

impl Coin {
    pub const ALL: [Coin; 5] = [Coin::Pp, Coin::Gp, Coin::Ep, Coin::Sp, Coin::Cp];

    pub fn key(&self) -> &'static str {
        match self {
            Coin::Pp => "pp",
            Coin::Gp => "gp",
            Coin::Ep => "ep",
            Coin::Sp => "sp",
            Coin::Cp => "cp",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Coin::Pp => "AXISMUNDIRPG.Platinum",
            Coin::Gp => "AXISMUNDIRPG.Gold",
            Coin::Ep => "AXISMUNDIRPG.Electrum",
            Coin::Sp => "AXISMUNDIRPG.Silver",
            Coin::Cp => "AXISMUNDIRPG.Copper",
        }
    }
}

/// Coins carried by a character, counted per denomination.
///
/// Counts are read leniently: numbers and numeric strings are accepted,
/// fractions are floored, and anything negative, blank or non-numeric is
/// read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Money {
    #[serde(deserialize_with = "deserialize_coin_count")]
    pub pp: u64,
    #[serde(deserialize_with = "deserialize_coin_count")]
    pub gp: u64,
    #[serde(deserialize_with = "deserialize_coin_count")]
    pub ep: u64,
    #[serde(deserialize_with = "deserialize_coin_count")]
    pub sp: u64,
    #[serde(deserialize_with = "deserialize_coin_count")]
    pub cp: u64,
}

fn deserialize_coin_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed
        .filter(|count| count.is_finite() && *count > 0.0)
        .map(|count| count.floor() as u64)
        .unwrap_or(0))
}

impl Money {
    pub fn get(&self, coin: Coin) -> u64 {
        match coin {
            Coin::Pp => self.pp,
            Coin::Gp => self.gp,
            Coin::Ep => self.ep,
            Coin::Sp => self.sp,
            Coin::Cp => self.cp,
        }
    }

    /// Total number of coins, in gold-piece weight units.
    ///
    /// Every coin weighs the same regardless of denomination, so the purse
    /// weighs as much as the same count of gold pieces.
    pub fn coin_count(&self) -> u64 {
        Coin::ALL
            .iter()
            .fold(0u64, |total, coin| total.saturating_add(self.get(*coin)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_count_sums_every_denomination() {
        let purse = Money {
            pp: 1,
            gp: 40,
            ep: 2,
            sp: 30,
            cp: 27,
        };
        assert_eq!(purse.coin_count(), 100);
    }

    #[test]
    fn coin_counts_are_read_leniently() {
        let purse: Money = serde_json::from_str(
            r#"{"pp": -5, "gp": "10", "ep": "", "sp": 2.5, "cp": "lots"}"#,
        )
        .expect("lenient purse");
        assert_eq!(purse.pp, 0);
        assert_eq!(purse.gp, 10);
        assert_eq!(purse.ep, 0);
        assert_eq!(purse.sp, 2);
        assert_eq!(purse.cp, 0);
        assert_eq!(purse.coin_count(), 12);
    }

    #[test]
    fn null_and_missing_coins_count_as_zero() {
        let purse: Money = serde_json::from_str(r#"{"gp": null}"#).expect("lenient purse");
        assert_eq!(purse, Money::default());
    }

    #[test]
    fn empty_purse_has_no_coins() {
        assert_eq!(Money::default().coin_count(), 0);
    }
}
