//! Engraved stones that change every time you blink.
//!
//! Stone values grow by a factor of 2024 on every odd-length blink, so they
//! are kept as [`BigUint`].

use num_bigint::BigUint;

use lodestar_core::parse_numbers;
use lodestar_paths::BudgetCounter;

use crate::error::PuzzleError;

/// Append the stones `stone` turns into after one blink.
///
/// `0` becomes `1`; a number with an even count of digits splits into its
/// left and right halves; anything else is multiplied by 2024.
pub fn blink(stone: &BigUint, out: &mut Vec<BigUint>) {
    if stone.bits() == 0 {
        out.push(BigUint::from(1u32));
        return;
    }
    let digits = stone.to_string().len();
    if digits % 2 == 0 {
        let half = BigUint::from(10u32).pow((digits / 2) as u32);
        out.push(stone / &half);
        out.push(stone % &half);
    } else {
        out.push(stone * 2024u32);
    }
}

/// Number of stones after `blinks` blinks.
pub fn count_after(stones: &[BigUint], blinks: u32) -> u64 {
    BudgetCounter::new(blink).count_all(stones.iter().cloned(), blinks)
}

/// A line of stones, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stones(Vec<BigUint>);

impl Stones {
    pub fn parse(s: &str) -> Result<Self, PuzzleError> {
        Ok(Self(parse_numbers(s)?))
    }

    pub fn as_slice(&self) -> &[BigUint] {
        &self.0
    }

    pub fn count_after(&self, blinks: u32) -> u64 {
        count_after(&self.0, blinks)
    }

    /// The stones after one blink, in order.
    pub fn blinked(&self) -> Self {
        let mut out = Vec::with_capacity(self.0.len() * 2);
        for stone in &self.0 {
            blink(stone, &mut out);
        }
        Self(out)
    }
}
