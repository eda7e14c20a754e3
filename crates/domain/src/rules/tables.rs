//! Static rule tables.
//!
//! All tables are `const` data: built at compile time, never reconstructed
//! per lookup.

use crate::error::DomainError;
use crate::value_objects::Saves;

/// Saving throw targets by monster save category, row `n - 1` for category `n`.
/// Columns: paralysis, death, breath, wands, spells.
const MONSTER_SAVES: [[i32; 5]; 14] = [
    [15, 14, 16, 16, 17], // 1
    [14, 13, 15, 15, 16], // 2
    [14, 13, 15, 15, 16], // 3
    [13, 12, 14, 14, 15], // 4
    [12, 11, 13, 13, 14], // 5
    [12, 11, 13, 13, 14], // 6
    [11, 10, 12, 12, 13], // 7
    [10, 9, 11, 11, 12],  // 8
    [10, 9, 11, 11, 12],  // 9
    [9, 8, 10, 10, 11],   // 10
    [8, 7, 9, 9, 10],     // 11
    [8, 7, 9, 9, 10],     // 12
    [7, 6, 8, 8, 9],      // 13
    [6, 5, 7, 7, 8],      // 14
];

/// Upper hit-dice bound of each attack bonus band above 9 HD.
/// Band `(last, bonus)`: counts up to and including `last` get `bonus`.
const ATTACK_BONUS_BANDS: [(i64, i32); 7] = [
    (11, 9),
    (13, 10),
    (15, 11),
    (19, 12),
    (23, 13),
    (27, 14),
    (31, 15),
];

/// Attack bonus ceiling for monsters above 31 HD.
const MAX_ATTACK_BONUS: i32 = 16;

/// Modifier for an ability score.
///
/// Scores outside 3-18 degrade to a neutral modifier rather than failing.
pub fn ability_bonus(score: i32) -> i32 {
    match score {
        3 => -3,
        4..=5 => -2,
        6..=8 => -1,
        9..=12 => 0,
        13..=15 => 1,
        16..=17 => 2,
        18 => 3,
        _ => 0,
    }
}

/// Monster attack bonus for a hit-dice count.
///
/// Fractional counts are floored to their integer tier (a 2+1 HD monster
/// attacks as 2 HD). Not a closed-form formula: the bands widen past 15 HD.
pub fn monster_attack_bonus(hit_dice: f64) -> i32 {
    if hit_dice.is_nan() || hit_dice < 1.0 {
        return 0;
    }
    let tier = hit_dice.floor();
    if tier > 31.0 {
        return MAX_ATTACK_BONUS;
    }
    let tier = tier as i64;
    match tier {
        1..=8 => tier as i32,
        9 => 8,
        _ => ATTACK_BONUS_BANDS
            .iter()
            .find(|(last, _)| tier <= *last)
            .map(|(_, bonus)| *bonus)
            .unwrap_or(MAX_ATTACK_BONUS),
    }
}

/// Saving throw targets for a monster save category (1-14).
pub fn monster_saves(category: i64) -> Result<Saves, DomainError> {
    usize::try_from(category)
        .ok()
        .and_then(|c| c.checked_sub(1))
        .and_then(|row| MONSTER_SAVES.get(row))
        .map(|row| Saves::from_row(*row))
        .ok_or_else(|| DomainError::invalid_save_category(category))
}
