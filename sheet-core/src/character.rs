//! The character entity and its direct mutators.
//!
//! A character owns every value on its sheet. Race and background are kept
//! by name only; see [`crate::apply`] for how templates get copied in.

use crate::ability::{proficiency_bonus_for_level, Ability, AbilityScores};
use crate::templates::Size;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identity sentinel for drafts and template-only characters.
pub const DRAFT_UID: u64 = 0;

const WEAPON_SLOT: usize = 0;
const ARMOR_SLOT: usize = 1;

/// A character sheet.
///
/// Equality is identity: two characters are equal iff their `uid`s are,
/// whatever else differs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub(crate) uid: u64,
    pub name: String,
    pub class: String,
    pub race: String,
    pub background: String,
    pub level: u8,
    pub npc: bool,

    // Core stats
    pub abilities: AbilityScores,
    pub hp: i32,
    pub ac: i32,
    pub speed: u32,
    pub size: Size,
    pub pro_bonus: i32,

    // Wealth and inventory
    pub gp: i32,
    /// Weapon name, then armor name. Empty when unset.
    pub equipment: [String; 2],
    pub misc: Vec<String>,

    // Proficiencies may repeat; a skill is proficient if named at least once.
    pub proficiencies: Vec<String>,
    pub traits: BTreeMap<String, String>,
    pub saves: Vec<Ability>,
    pub languages: Vec<String>,

    // Damage-type tags
    pub vulnerabilities: Vec<String>,
    pub resistances: Vec<String>,
    pub immunities: Vec<String>,

    pub conditions: Vec<String>,
}

impl Character {
    /// A draft character (uid 0) with default stats and no templates applied.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            uid: DRAFT_UID,
            name: name.into(),
            class: String::new(),
            race: String::new(),
            background: String::new(),
            level: 1,
            npc: false,
            abilities: AbilityScores::default(),
            hp: 0,
            ac: 10,
            speed: 30,
            size: Size::Medium,
            pro_bonus: proficiency_bonus_for_level(1),
            gp: 0,
            equipment: [String::new(), String::new()],
            misc: Vec::new(),
            proficiencies: Vec::new(),
            traits: BTreeMap::new(),
            saves: Vec::new(),
            languages: vec!["Common".to_string()],
            vulnerabilities: Vec::new(),
            resistances: Vec::new(),
            immunities: Vec::new(),
            conditions: Vec::new(),
        }
    }

    pub fn uid(&self) -> u64 {
        self.uid
    }

    /// Drafts skip automatic template application at construction.
    pub fn is_draft(&self) -> bool {
        self.uid == DRAFT_UID
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        self.abilities.modifier(ability)
    }

    /// Full assignment: copies every field, `uid` included.
    ///
    /// Afterwards `self` is the same character as `other`.
    pub fn assign_from(&mut self, other: &Character) {
        self.clone_from(other);
    }

    /// Copy only wealth and inventory (`gp`, `equipment`, `misc`) from `other`.
    ///
    /// Identity and combat stats stay untouched. Used for looting and
    /// item transfer between otherwise unrelated characters.
    pub fn soft_copy(&mut self, other: &Character) {
        self.gp = other.gp;
        self.equipment.clone_from(&other.equipment);
        self.misc.clone_from(&other.misc);
    }

    // ------------------------------------------------------------------
    // Traits
    // ------------------------------------------------------------------

    /// Insert a trait, overwriting the description if the name exists.
    pub fn add_trait(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.traits.insert(name.into(), description.into());
    }

    pub fn del_trait(&mut self, name: &str) {
        self.traits.remove(name);
    }

    pub fn trait_description(&self, name: &str) -> Option<&str> {
        self.traits.get(name).map(String::as_str)
    }

    // ------------------------------------------------------------------
    // Sequences: append, remove every equal entry
    // ------------------------------------------------------------------

    pub fn add_prof(&mut self, name: impl Into<String>) {
        self.proficiencies.push(name.into());
    }

    pub fn del_prof(&mut self, name: &str) {
        remove_all(&mut self.proficiencies, name);
    }

    pub fn has_proficiency(&self, name: &str) -> bool {
        self.proficiencies.iter().any(|p| p == name)
    }

    pub fn add_item(&mut self, name: impl Into<String>) {
        self.misc.push(name.into());
    }

    pub fn del_item(&mut self, name: &str) {
        remove_all(&mut self.misc, name);
    }

    pub fn add_condition(&mut self, name: impl Into<String>) {
        self.conditions.push(name.into());
    }

    pub fn del_condition(&mut self, name: &str) {
        remove_all(&mut self.conditions, name);
    }

    pub fn has_condition(&self, name: &str) -> bool {
        self.conditions.iter().any(|c| c == name)
    }

    // ------------------------------------------------------------------
    // Equipment slots
    // ------------------------------------------------------------------

    /// Equip a weapon by name. Not checked against any catalog.
    pub fn set_weapon(&mut self, name: impl Into<String>) {
        self.equipment[WEAPON_SLOT] = name.into();
    }

    /// Equip armor by name. Not checked against any catalog.
    pub fn set_armor(&mut self, name: impl Into<String>) {
        self.equipment[ARMOR_SLOT] = name.into();
    }

    pub fn weapon(&self) -> &str {
        &self.equipment[WEAPON_SLOT]
    }

    pub fn armor(&self) -> &str {
        &self.equipment[ARMOR_SLOT]
    }
}

impl PartialEq for Character {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for Character {}

fn remove_all(items: &mut Vec<String>, name: &str) {
    items.retain(|item| item != name);
}
