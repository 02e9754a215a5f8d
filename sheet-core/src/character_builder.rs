//! Builder for constructing characters.
//!
//! Construction is where templates get applied: a character built with a
//! non-zero uid has its race and then its background grafted on exactly
//! once. A uid of 0 builds a draft that skips application entirely.

use crate::ability::{proficiency_bonus_for_level, Ability, AbilityScores};
use crate::catalog::Catalogs;
use crate::character::{Character, DRAFT_UID};
use crate::error::SheetResult;

/// Builder for creating characters.
#[derive(Debug, Clone)]
pub struct CharacterBuilder {
    name: String,
    class: String,
    race: String,
    background: String,
    level: u8,
    abilities: AbilityScores,
    npc: bool,
    uid: u64,
}

impl CharacterBuilder {
    /// Start a level 1 draft with all ability scores at 10.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: String::new(),
            race: String::new(),
            background: String::new(),
            level: 1,
            abilities: AbilityScores::default(),
            npc: false,
            uid: DRAFT_UID,
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Race template name, applied at build time when the uid is non-zero.
    pub fn race(mut self, race: impl Into<String>) -> Self {
        self.race = race.into();
        self
    }

    /// Background template name, applied at build time when the uid is non-zero.
    pub fn background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn ability_scores(mut self, scores: AbilityScores) -> Self {
        self.abilities = scores;
        self
    }

    pub fn ability(mut self, ability: Ability, score: i32) -> Self {
        self.abilities.set(ability, score);
        self
    }

    pub fn npc(mut self, npc: bool) -> Self {
        self.npc = npc;
        self
    }

    pub fn uid(mut self, uid: u64) -> Self {
        self.uid = uid;
        self
    }

    /// Build the character.
    ///
    /// With a non-zero uid the race and background are looked up and applied;
    /// a missing template fails the whole build.
    pub fn build(self, catalogs: &Catalogs) -> SheetResult<Character> {
        let mut character = Character::new(self.name);
        character.uid = self.uid;
        character.class = self.class;
        character.race = self.race;
        character.background = self.background;
        character.level = self.level;
        character.abilities = self.abilities;
        character.npc = self.npc;
        character.pro_bonus = proficiency_bonus_for_level(self.level);

        if !character.is_draft() {
            let race = character.race.clone();
            let background = character.background.clone();
            character.set_race(&race, &catalogs.races)?;
            character.set_background(&background, &catalogs.backgrounds)?;
            tracing::debug!(
                uid = character.uid(),
                name = %character.name,
                "Built character"
            );
        }

        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::error::SheetError;
    use crate::templates::{BackgroundTemplate, RaceTemplate, Size, TemplateKind};

    fn catalogs() -> Catalogs {
        Catalogs {
            races: Catalog::from(vec![RaceTemplate::new("Elf", Size::Medium, 30)
                .with_boost(Ability::Dexterity, 2)
                .with_trait("Fey Ancestry", "Advantage against being charmed")]),
            backgrounds: Catalog::from(vec![BackgroundTemplate::new("Sage", 10)
                .with_proficiencies(["Arcana", "History"])
                .with_equipment(["Ink", "Quill"])]),
            ..Catalogs::default()
        }
    }

    #[test]
    fn test_build_applies_templates() {
        let c = CharacterBuilder::new("Aelar")
            .class("Wizard")
            .race("Elf")
            .background("Sage")
            .ability(Ability::Dexterity, 14)
            .uid(1)
            .build(&catalogs())
            .unwrap();

        assert_eq!(c.uid(), 1);
        assert_eq!(c.class, "Wizard");
        assert_eq!(c.abilities.dexterity, 16);
        assert_eq!(c.gp, 10);
        assert_eq!(c.proficiencies, vec!["Arcana", "History"]);
        assert_eq!(c.misc, vec!["Ink", "Quill"]);
        assert!(c.trait_description("Fey Ancestry").is_some());
    }

    #[test]
    fn test_draft_skips_templates() {
        let c = CharacterBuilder::new("Template")
            .race("Elf")
            .background("Sage")
            .ability(Ability::Dexterity, 14)
            .build(&catalogs())
            .unwrap();

        assert!(c.is_draft());
        assert_eq!(c.race, "Elf");
        assert_eq!(c.abilities.dexterity, 14);
        assert_eq!(c.gp, 0);
        assert!(c.proficiencies.is_empty());
    }

    #[test]
    fn test_draft_with_unknown_templates_still_builds() {
        let c = CharacterBuilder::new("Sketch")
            .race("Unicorn")
            .build(&Catalogs::default());
        assert!(c.is_ok());
    }

    #[test]
    fn test_missing_template_fails_build() {
        let result = CharacterBuilder::new("Nobody")
            .race("Elf")
            .background("Pirate")
            .uid(5)
            .build(&catalogs());
        assert!(matches!(
            result,
            Err(SheetError::NotFound {
                kind: TemplateKind::Background,
                ..
            })
        ));
    }

    #[test]
    fn test_pro_bonus_follows_level() {
        let c = CharacterBuilder::new("Veteran")
            .level(9)
            .npc(true)
            .build(&Catalogs::default())
            .unwrap();
        assert_eq!(c.pro_bonus, 4);
        assert!(c.npc);
    }
}
