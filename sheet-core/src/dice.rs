//! Dice: die sizes and the injectable source of random draws.
//!
//! Rules code never touches an RNG directly. It asks a [`DiceSource`] for
//! draws, so tests can substitute a scripted source (see
//! [`crate::testing::ScriptedDice`]).

use rand::rngs::ThreadRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard die types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieType {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl DieType {
    pub fn sides(&self) -> u32 {
        match self {
            DieType::D4 => 4,
            DieType::D6 => 6,
            DieType::D8 => 8,
            DieType::D10 => 10,
            DieType::D12 => 12,
            DieType::D20 => 20,
            DieType::D100 => 100,
        }
    }

    pub fn from_sides(sides: u32) -> Option<DieType> {
        match sides {
            4 => Some(DieType::D4),
            6 => Some(DieType::D6),
            8 => Some(DieType::D8),
            10 => Some(DieType::D10),
            12 => Some(DieType::D12),
            20 => Some(DieType::D20),
            100 => Some(DieType::D100),
            _ => None,
        }
    }
}

impl fmt::Display for DieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// A capability producing uniformly distributed die draws.
pub trait DiceSource {
    /// Draw an integer in `[1, sides]`. Each call is independent.
    fn roll(&mut self, sides: u32) -> u32;

    fn roll_die(&mut self, die: DieType) -> u32 {
        self.roll(die.sides())
    }
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self, sides: u32) -> u32 {
        (**self).roll(sides)
    }
}

/// Dice backed by a real random number generator.
#[derive(Debug, Clone)]
pub struct RandomDice<R = ThreadRng> {
    rng: R,
}

impl RandomDice<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomDice<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomDice<R> {
    /// Roll with a specific RNG (useful for seeded runs).
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DiceSource for RandomDice<R> {
    fn roll(&mut self, sides: u32) -> u32 {
        // A zero-sided die has no faces to draw from; treat it as a d1.
        self.rng.gen_range(1..=sides.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_die_sides() {
        assert_eq!(DieType::D8.sides(), 8);
        assert_eq!(DieType::from_sides(20), Some(DieType::D20));
        assert_eq!(DieType::from_sides(7), None);
        assert_eq!(DieType::D12.to_string(), "d12");
    }

    #[test]
    fn test_roll_range() {
        let mut dice = RandomDice::new();
        for _ in 0..200 {
            let roll = dice.roll(20);
            assert!((1..=20).contains(&roll));
        }
        for _ in 0..50 {
            assert_eq!(dice.roll(1), 1);
        }
    }

    #[test]
    fn test_seeded_dice_repeat() {
        let mut a = RandomDice::with_rng(StdRng::seed_from_u64(7));
        let mut b = RandomDice::with_rng(StdRng::seed_from_u64(7));
        let left: Vec<u32> = (0..10).map(|_| a.roll_die(DieType::D6)).collect();
        let right: Vec<u32> = (0..10).map(|_| b.roll_die(DieType::D6)).collect();
        assert_eq!(left, right);
        assert!(left.iter().all(|r| (1..=6).contains(r)));
    }
}
