//! Grafting race and background templates onto a character.
//!
//! Both operations are write-once initialization steps. They are **not**
//! idempotent: applying a race twice stacks its boosts twice, and applying
//! a background replaces the character's gold outright. The builder calls
//! them once at construction; calling them again later is allowed but
//! compounds the effects.

use crate::ability::Ability;
use crate::catalog::Catalog;
use crate::character::Character;
use crate::error::SheetResult;
use crate::templates::{BackgroundTemplate, BoostTarget, RaceTemplate};

impl RaceTemplate {
    /// Copy this race's effects into `character`.
    pub fn apply_to(&self, character: &mut Character) {
        for boost in &self.boosts {
            match boost.target {
                BoostTarget::HitPoints => character.hp += boost.amount,
                BoostTarget::Ability(ability) => character.abilities.add(ability, boost.amount),
            }
        }

        character.size = self.size;
        character.speed = self.speed;

        // Existing trait names win; race traits only fill gaps.
        for (name, description) in &self.traits {
            character
                .traits
                .entry(name.clone())
                .or_insert_with(|| description.clone());
        }
        character
            .proficiencies
            .extend(self.proficiencies.iter().cloned());
        character.race.clone_from(&self.name);
    }
}

impl BackgroundTemplate {
    /// Copy this background's effects into `character`.
    pub fn apply_to(&self, character: &mut Character) {
        character.gp = self.gp;
        character
            .proficiencies
            .extend(self.proficiencies.iter().cloned());
        character.misc.extend(self.equipment.iter().cloned());
        character.background.clone_from(&self.name);
    }
}

impl Character {
    /// Look up race `name` and apply it, recording `name` as the race.
    ///
    /// Fails with `NotFound` and changes nothing if the race is unknown.
    pub fn set_race(&mut self, name: &str, races: &Catalog<RaceTemplate>) -> SheetResult<()> {
        let race = races.get(name)?;
        race.apply_to(self);
        self.race = name.to_string();
        tracing::debug!(
            uid = self.uid(),
            race = %name,
            strength = self.abilities.get(Ability::Strength),
            dexterity = self.abilities.get(Ability::Dexterity),
            hp = self.hp,
            "Applied race template"
        );
        Ok(())
    }

    /// Look up background `name` and apply it, recording `name` as the background.
    ///
    /// Fails with `NotFound` and changes nothing if the background is unknown.
    pub fn set_background(
        &mut self,
        name: &str,
        backgrounds: &Catalog<BackgroundTemplate>,
    ) -> SheetResult<()> {
        let background = backgrounds.get(name)?;
        background.apply_to(self);
        self.background = name.to_string();
        tracing::debug!(
            uid = self.uid(),
            background = %name,
            gp = self.gp,
            "Applied background template"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SheetError;
    use crate::templates::{Size, TemplateKind};

    fn races() -> Catalog<RaceTemplate> {
        Catalog::from(vec![
            RaceTemplate::new("Elf", Size::Medium, 30)
                .with_boost(Ability::Dexterity, 2)
                .with_trait("Darkvision", "See 60 ft in dim light")
                .with_proficiency("Perception"),
            RaceTemplate::new("Dwarf", Size::Medium, 25)
                .with_boost(Ability::Constitution, 2)
                .with_hp_boost(1),
            RaceTemplate::new("Halfling", Size::Small, 25)
                .with_boost(Ability::Dexterity, 2)
                .with_boost(Ability::Strength, -1),
        ])
    }

    fn backgrounds() -> Catalog<BackgroundTemplate> {
        Catalog::from(vec![BackgroundTemplate::new("Soldier", 10)
            .with_proficiencies(["Athletics"])
            .with_equipment(["Spear"])])
    }

    #[test]
    fn test_set_race_applies_boosts() {
        let mut c = Character::new("Test");
        c.set_race("Dwarf", &races()).unwrap();
        assert_eq!(c.abilities.constitution, 12);
        assert_eq!(c.hp, 1);
        assert_eq!(c.speed, 25);
        assert_eq!(c.race, "Dwarf");
    }

    #[test]
    fn test_set_race_negative_boost() {
        let mut c = Character::new("Test");
        c.set_race("Halfling", &races()).unwrap();
        assert_eq!(c.abilities.strength, 9);
        assert_eq!(c.abilities.dexterity, 12);
        assert_eq!(c.size, Size::Small);
    }

    #[test]
    fn test_set_race_twice_stacks() {
        let races = races();
        let mut once = Character::new("Once");
        once.set_race("Elf", &races).unwrap();

        let mut twice = Character::new("Twice");
        twice.set_race("Elf", &races).unwrap();
        twice.set_race("Elf", &races).unwrap();

        assert_eq!(once.abilities.dexterity, 12);
        assert_eq!(twice.abilities.dexterity, 14);
        assert_ne!(once.abilities, twice.abilities);
        // Proficiencies repeat as well
        assert_eq!(twice.proficiencies, vec!["Perception", "Perception"]);
    }

    #[test]
    fn test_size_and_speed_are_last_applied() {
        let races = races();
        let mut c = Character::new("Test");
        c.set_race("Halfling", &races).unwrap();
        c.set_race("Elf", &races).unwrap();
        assert_eq!(c.size, Size::Medium);
        assert_eq!(c.speed, 30);
    }

    #[test]
    fn test_race_traits_do_not_overwrite() {
        let mut c = Character::new("Test");
        c.add_trait("Darkvision", "Custom note");
        c.set_race("Elf", &races()).unwrap();
        assert_eq!(c.trait_description("Darkvision"), Some("Custom note"));
    }

    #[test]
    fn test_unknown_race_changes_nothing() {
        let mut c = Character::new("Test");
        let before = c.clone();
        let err = c.set_race("Orc", &races()).unwrap_err();
        assert!(matches!(
            err,
            SheetError::NotFound { kind: TemplateKind::Race, ref name } if name == "Orc"
        ));
        assert_eq!(c.abilities, before.abilities);
        assert_eq!(c.race, before.race);
        assert_eq!(c.speed, before.speed);
    }

    #[test]
    fn test_set_background() {
        let mut c = Character::new("Test");
        c.gp = 0;
        c.set_background("Soldier", &backgrounds()).unwrap();
        assert_eq!(c.gp, 10);
        assert!(c.has_proficiency("Athletics"));
        assert_eq!(c.misc, vec!["Spear"]);
        assert_eq!(c.background, "Soldier");
    }

    #[test]
    fn test_background_overwrites_gold() {
        let mut c = Character::new("Test");
        c.gp = 500;
        c.set_background("Soldier", &backgrounds()).unwrap();
        assert_eq!(c.gp, 10);
    }

    #[test]
    fn test_unknown_background() {
        let mut c = Character::new("Test");
        c.gp = 7;
        assert!(matches!(
            c.set_background("Pirate", &backgrounds()),
            Err(SheetError::NotFound {
                kind: TemplateKind::Background,
                ..
            })
        ));
        assert_eq!(c.gp, 7);
        assert!(c.misc.is_empty());
    }

    #[test]
    fn test_records_catalog_name_of_aliased_entry() {
        let mut races = races();
        races.add("Hill Dwarf", RaceTemplate::new("Dwarf", Size::Medium, 25).with_hp_boost(1));
        let mut backgrounds = backgrounds();
        backgrounds.add("Veteran", BackgroundTemplate::new("Soldier", 25));

        let mut c = Character::new("Gimli");
        c.set_race("Hill Dwarf", &races).unwrap();
        c.set_background("Veteran", &backgrounds).unwrap();
        assert_eq!(c.race, "Hill Dwarf");
        assert_eq!(c.background, "Veteran");
        assert_eq!(c.gp, 25);
    }
}
