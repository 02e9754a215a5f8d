//! Named presets whose effects are copied into a character.
//!
//! Templates are immutable once placed in a catalog. Applying one copies
//! its effects; the character keeps no reference back to it.

use crate::ability::Ability;
use crate::dice::DieType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which catalog a template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Race,
    Background,
    Weapon,
}

impl TemplateKind {
    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::Race => "race",
            TemplateKind::Background => "background",
            TemplateKind::Weapon => "weapon",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Common surface of everything a [`crate::catalog::Catalog`] can hold.
pub trait Template: Clone {
    const KIND: TemplateKind;

    fn name(&self) -> &str;
}

/// Creature size category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Size {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Huge,
    Gargantuan,
}

impl Size {
    pub fn name(&self) -> &'static str {
        match self {
            Size::Tiny => "Tiny",
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
            Size::Huge => "Huge",
            Size::Gargantuan => "Gargantuan",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Races
// ============================================================================

/// What a racial boost adds to: one ability score, or hit points.
///
/// Serialized as the ability code (`"DEX"`) or `"HP"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BoostTarget {
    Ability(Ability),
    HitPoints,
}

impl TryFrom<String> for BoostTarget {
    type Error = String;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        if tag == "HP" {
            return Ok(BoostTarget::HitPoints);
        }
        Ability::from_code(&tag)
            .map(BoostTarget::Ability)
            .ok_or_else(|| format!("unknown boost target: {tag}"))
    }
}

impl From<BoostTarget> for String {
    fn from(target: BoostTarget) -> Self {
        target.to_string()
    }
}

impl fmt::Display for BoostTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoostTarget::Ability(ability) => write!(f, "{ability}"),
            BoostTarget::HitPoints => write!(f, "HP"),
        }
    }
}

/// An additive bonus granted by a race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityBoost {
    pub target: BoostTarget,
    pub amount: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceTemplate {
    pub name: String,
    pub boosts: Vec<AbilityBoost>,
    pub size: Size,
    pub speed: u32,
    #[serde(default)]
    pub traits: BTreeMap<String, String>,
    #[serde(default)]
    pub proficiencies: Vec<String>,
}

impl RaceTemplate {
    pub fn new(name: impl Into<String>, size: Size, speed: u32) -> Self {
        Self {
            name: name.into(),
            boosts: Vec::new(),
            size,
            speed,
            traits: BTreeMap::new(),
            proficiencies: Vec::new(),
        }
    }

    pub fn with_boost(mut self, ability: Ability, amount: i32) -> Self {
        self.boosts.push(AbilityBoost {
            target: BoostTarget::Ability(ability),
            amount,
        });
        self
    }

    pub fn with_hp_boost(mut self, amount: i32) -> Self {
        self.boosts.push(AbilityBoost {
            target: BoostTarget::HitPoints,
            amount,
        });
        self
    }

    pub fn with_trait(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.traits.insert(name.into(), description.into());
        self
    }

    pub fn with_proficiency(mut self, name: impl Into<String>) -> Self {
        self.proficiencies.push(name.into());
        self
    }
}

impl Template for RaceTemplate {
    const KIND: TemplateKind = TemplateKind::Race;

    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Backgrounds
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundTemplate {
    pub name: String,
    pub gp: i32,
    #[serde(default)]
    pub proficiencies: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
}

impl BackgroundTemplate {
    pub fn new(name: impl Into<String>, gp: i32) -> Self {
        Self {
            name: name.into(),
            gp,
            proficiencies: Vec::new(),
            equipment: Vec::new(),
        }
    }

    pub fn with_proficiencies<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.proficiencies.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_equipment<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.equipment.extend(items.into_iter().map(Into::into));
        self
    }
}

impl Template for BackgroundTemplate {
    const KIND: TemplateKind = TemplateKind::Background;

    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Weapons
// ============================================================================

/// The ability that governs a weapon's damage modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponAbility {
    Dexterity,
    Strength,
    /// Better of the Dexterity and Strength modifiers.
    Finesse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponTemplate {
    pub name: String,
    pub ability: WeaponAbility,
    pub number_dice: u32,
    /// Die size. Any positive count of sides, not only the standard dice.
    pub sides: u32,
}

impl WeaponTemplate {
    pub fn new(
        name: impl Into<String>,
        ability: WeaponAbility,
        number_dice: u32,
        die: DieType,
    ) -> Self {
        Self {
            name: name.into(),
            ability,
            number_dice,
            sides: die.sides(),
        }
    }

    /// A weapon rolling dice of arbitrary size, e.g. a d3.
    pub fn with_sides(
        name: impl Into<String>,
        ability: WeaponAbility,
        number_dice: u32,
        sides: u32,
    ) -> Self {
        Self {
            name: name.into(),
            ability,
            number_dice,
            sides,
        }
    }

    /// The standard die this weapon rolls, if it is one.
    pub fn die(&self) -> Option<DieType> {
        DieType::from_sides(self.sides)
    }

    pub fn is_finesse(&self) -> bool {
        self.ability == WeaponAbility::Finesse
    }

    /// Damage dice in standard notation, e.g. `2d6`.
    pub fn damage_notation(&self) -> String {
        format!("{}d{}", self.number_dice, self.sides)
    }
}

impl Template for WeaponTemplate {
    const KIND: TemplateKind = TemplateKind::Weapon;

    fn name(&self) -> &str {
        &self.name
    }
}
