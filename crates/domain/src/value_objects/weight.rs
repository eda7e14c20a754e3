//! Item weight and quantity value objects
//!
//! Item records come from hand-edited sheets, so weights and quantities may
//! be numbers, numeric strings, blanks, or garbage. Both types here accept any
//! of those and defer the decision of what counts to the encumbrance folds.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Marker used in the weight field for items weighed as coins.
pub const CURRENCY_WEIGHT_MARKER: &str = "*";

/// Per-unit weight of an item.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ItemWeight {
    /// A parseable numeric weight.
    Units(f64),
    /// Weighed like coins: a fixed number of units per weight point.
    Currency,
    /// No weight recorded.
    #[default]
    Missing,
    /// Something that is neither a number nor the currency marker.
    Invalid(String),
}

impl ItemWeight {
    /// Parse a weight as typed into a sheet.
    ///
    /// Only the leading number is read, so `"3 lb"` weighs 3 units.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }
        if trimmed == CURRENCY_WEIGHT_MARKER {
            return Self::Currency;
        }
        match leading_number(trimmed) {
            Some(value) => Self::Units(value),
            None => Self::Invalid(trimmed.to_string()),
        }
    }

    fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::Number(n) => n
                .as_f64()
                .filter(|v| v.is_finite())
                .map(Self::Units)
                .unwrap_or_else(|| Self::Invalid(n.to_string())),
            Value::String(s) => Self::parse(s),
            other => Self::Invalid(other.to_string()),
        }
    }

    /// Weight used for prepared gear: anything that is not a positive number
    /// counts as one unit, except the currency marker which keeps coin rules.
    pub fn or_unit_default(&self) -> Self {
        match self {
            Self::Units(value) if *value > 0.0 => Self::Units(*value),
            Self::Currency => Self::Currency,
            _ => Self::Units(1.0),
        }
    }
}

/// Longest prefix of `text` that reads as a decimal number.
fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer = digits_from(end);
    end += integer;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        if integer > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }
    if integer == 0 && fraction == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from((end + 1 + sign).min(bytes.len()));
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }

    text[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

impl Serialize for ItemWeight {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Units(value) => serializer.serialize_f64(*value),
            Self::Currency => serializer.serialize_str(CURRENCY_WEIGHT_MARKER),
            Self::Missing => serializer.serialize_none(),
            Self::Invalid(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for ItemWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}

/// Stack size of an item. `None` when blank or unparseable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Quantity(Option<f64>);

impl Quantity {
    pub const ONE: Quantity = Quantity(Some(1.0));

    pub fn new(value: f64) -> Self {
        Self(Some(value))
    }

    pub fn missing() -> Self {
        Self(None)
    }

    /// The quantity if it can contribute weight: finite and strictly positive.
    pub fn countable(&self) -> Option<f64> {
        self.0.filter(|q| q.is_finite() && *q > 0.0)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(Self(parsed))
    }
}
