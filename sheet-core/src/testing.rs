//! Testing utilities.
//!
//! This module provides tools for deterministic tests:
//! - `ScriptedDice` replays fixed draws in place of real randomness
//! - Fixture helpers for commonly needed characters
//! - Assertion helpers for proficiency and inventory checks

use crate::character::Character;
use crate::dice::DiceSource;

/// Dice that return a scripted sequence of draws.
///
/// Draws are replayed in order and the script wraps around when it runs
/// out. Each value is clamped into `[1, sides]` so the dice contract holds
/// even for a careless script. An empty script always rolls 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    /// Scripted draws to return in order.
    script: Vec<u32>,
    /// Index of next draw to return.
    index: usize,
    /// Die sizes requested so far.
    requested: Vec<u32>,
}

impl ScriptedDice {
    pub fn new(script: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: script.into_iter().collect(),
            index: 0,
            requested: Vec::new(),
        }
    }

    /// Die sizes asked for, in call order.
    pub fn requested(&self) -> &[u32] {
        &self.requested
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.requested.len()
    }

    /// Add a draw to the end of the script.
    pub fn queue(&mut self, value: u32) {
        self.script.push(value);
    }

    /// Reset the index to replay from the beginning.
    pub fn reset(&mut self) {
        self.index = 0;
        self.requested.clear();
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self, sides: u32) -> u32 {
        self.requested.push(sides);
        if self.script.is_empty() {
            return 1;
        }
        let value = self.script[self.index % self.script.len()];
        self.index += 1;
        value.clamp(1, sides.max(1))
    }
}

/// A draft fighter: STR 16, DEX 12, wielding a Longsword, proficient in Athletics.
pub fn sample_fighter(name: impl Into<String>) -> Character {
    let mut character = Character::new(name);
    character.class = "Fighter".to_string();
    character.abilities.strength = 16;
    character.abilities.dexterity = 12;
    character.abilities.constitution = 14;
    character.hp = 12;
    character.ac = 16;
    character.set_weapon("Longsword");
    character.set_armor("Chain Mail");
    character.add_prof("Athletics");
    character
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the character is proficient in `name`.
#[track_caller]
pub fn assert_proficient(character: &Character, name: &str) {
    assert!(
        character.has_proficiency(name),
        "Expected {} to be proficient in '{name}', has {:?}",
        character.name,
        character.proficiencies
    );
}

/// Assert the character carries `name` in its misc inventory.
#[track_caller]
pub fn assert_carries(character: &Character, name: &str) {
    assert!(
        character.misc.iter().any(|item| item == name),
        "Expected {} to carry '{name}', has {:?}",
        character.name,
        character.misc
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_dice_replay() {
        let mut dice = ScriptedDice::new([3, 5]);
        assert_eq!(dice.roll(6), 3);
        assert_eq!(dice.roll(6), 5);
        assert_eq!(dice.roll(6), 3); // wraps
        assert_eq!(dice.draws(), 3);

        dice.reset();
        assert_eq!(dice.roll(8), 3);
        assert_eq!(dice.requested(), &[8]);
    }

    #[test]
    fn test_scripted_dice_clamps() {
        let mut dice = ScriptedDice::new([19, 0]);
        assert_eq!(dice.roll(6), 6);
        assert_eq!(dice.roll(6), 1);
    }

    #[test]
    fn test_empty_script_rolls_one() {
        let mut dice = ScriptedDice::default();
        assert_eq!(dice.roll(20), 1);
        dice.queue(12);
        assert_eq!(dice.roll(20), 12);
    }

    #[test]
    fn test_sample_fighter() {
        let fighter = sample_fighter("Roland");
        assert_eq!(fighter.weapon(), "Longsword");
        assert_proficient(&fighter, "Athletics");
        assert!(fighter.is_draft());
    }
}
