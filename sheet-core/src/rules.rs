//! Action resolution: weapon damage and skill checks.
//!
//! Both resolutions are pure functions of the character's current state,
//! the resolved template, and fresh draws from the supplied [`DiceSource`].
//! Nothing carries over between calls.

use crate::ability::Ability;
use crate::catalog::Catalog;
use crate::character::Character;
use crate::dice::{DiceSource, DieType};
use crate::error::SheetResult;
use crate::skills::governing_ability;
use crate::templates::{WeaponAbility, WeaponTemplate};
use serde::{Deserialize, Serialize};

pub use crate::ability::ability_modifier;

/// The die every skill check is rolled on.
pub const SKILL_DIE: DieType = DieType::D20;

/// Modifier a weapon's governing ability grants this character.
///
/// Finesse compares the two *modifiers*, not the raw scores.
pub fn resolved_modifier(character: &Character, ability: WeaponAbility) -> i32 {
    match ability {
        WeaponAbility::Dexterity => character.modifier(Ability::Dexterity),
        WeaponAbility::Strength => character.modifier(Ability::Strength),
        WeaponAbility::Finesse => character
            .modifier(Ability::Dexterity)
            .max(character.modifier(Ability::Strength)),
    }
}

/// Breakdown of a weapon damage roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackDamage {
    pub weapon: String,
    /// Modifier added to the dice; 0 when the modifier was left out.
    pub modifier: i32,
    pub rolls: Vec<u32>,
    pub total: i32,
}

/// Breakdown of a skill check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCheck {
    pub skill: String,
    pub ability: Ability,
    pub roll: u32,
    pub modifier: i32,
    pub proficient: bool,
    /// Proficiency bonus added, or 0 when not proficient.
    pub proficiency_bonus: i32,
    pub total: i32,
}

/// Roll damage for the weapon in the character's weapon slot.
pub fn attack_detailed<D: DiceSource + ?Sized>(
    character: &Character,
    weapons: &Catalog<WeaponTemplate>,
    dice: &mut D,
    include_modifier: bool,
) -> SheetResult<AttackDamage> {
    let weapon = weapons.get(character.weapon())?;

    let modifier = if include_modifier {
        resolved_modifier(character, weapon.ability)
    } else {
        0
    };

    let rolls: Vec<u32> = (0..weapon.number_dice)
        .map(|_| dice.roll(weapon.sides))
        .collect();
    // No clamping: negative modifiers may drive the total to zero or below.
    let total = modifier + rolls.iter().map(|&r| r as i32).sum::<i32>();

    tracing::debug!(
        uid = character.uid(),
        weapon = %weapon.name,
        dice = %weapon.damage_notation(),
        modifier,
        total,
        "Resolved attack"
    );

    Ok(AttackDamage {
        weapon: weapon.name.clone(),
        modifier,
        rolls,
        total,
    })
}

/// Roll a d20 skill check, adding the ability modifier and, if the
/// character is proficient, the proficiency bonus once.
pub fn roll_skill_check<D: DiceSource + ?Sized>(
    character: &Character,
    skill: &str,
    dice: &mut D,
) -> SheetResult<SkillCheck> {
    let ability = governing_ability(skill)?;
    let modifier = character.modifier(ability);
    let proficient = character.has_proficiency(skill);
    let proficiency_bonus = if proficient {
        character.pro_bonus
    } else {
        0
    };

    let roll = dice.roll_die(SKILL_DIE);
    let total = roll as i32 + modifier + proficiency_bonus;

    tracing::debug!(
        uid = character.uid(),
        skill,
        roll,
        modifier,
        proficiency_bonus,
        total,
        "Resolved skill check"
    );

    Ok(SkillCheck {
        skill: skill.to_string(),
        ability,
        roll,
        modifier,
        proficient,
        proficiency_bonus,
        total,
    })
}

impl Character {
    /// Damage dealt by the equipped weapon.
    ///
    /// Fails with `NotFound` if no weapon is equipped or the name is unknown.
    pub fn attack<D: DiceSource + ?Sized>(
        &self,
        weapons: &Catalog<WeaponTemplate>,
        dice: &mut D,
        include_modifier: bool,
    ) -> SheetResult<i32> {
        attack_detailed(self, weapons, dice, include_modifier).map(|a| a.total)
    }

    /// Total of a skill check. Fails with `UnknownSkill` for names outside the skill table.
    pub fn roll_skill<D: DiceSource + ?Sized>(&self, skill: &str, dice: &mut D) -> SheetResult<i32> {
        roll_skill_check(self, skill, dice).map(|c| c.total)
    }
}
