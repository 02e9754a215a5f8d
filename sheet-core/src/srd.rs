//! Standard race, background, and weapon content.
//!
//! These tables seed [`Catalogs::standard`]. They are ordinary templates;
//! callers are free to add, replace, or delete entries afterwards.

use crate::ability::Ability;
use crate::catalog::{Catalog, Catalogs};
use crate::dice::DieType;
use crate::templates::{BackgroundTemplate, RaceTemplate, Size, WeaponAbility, WeaponTemplate};

/// Build catalogs holding every standard template.
pub fn standard_catalogs() -> Catalogs {
    Catalogs {
        races: Catalog::from(RACES.clone()),
        backgrounds: Catalog::from(BACKGROUNDS.clone()),
        weapons: Catalog::from(WEAPONS.clone()),
    }
}

// ============================================================================
// Races
// ============================================================================

lazy_static::lazy_static! {
    /// Standard playable races.
    pub static ref RACES: Vec<RaceTemplate> = vec![
        RaceTemplate::new("Human", Size::Medium, 30)
            .with_boost(Ability::Strength, 1)
            .with_boost(Ability::Dexterity, 1)
            .with_boost(Ability::Constitution, 1)
            .with_boost(Ability::Intelligence, 1)
            .with_boost(Ability::Wisdom, 1)
            .with_boost(Ability::Charisma, 1),
        RaceTemplate::new("Elf", Size::Medium, 30)
            .with_boost(Ability::Dexterity, 2)
            .with_trait("Darkvision", "You can see in dim light within 60 feet as if it were bright light.")
            .with_trait("Fey Ancestry", "You have advantage on saving throws against being charmed.")
            .with_trait("Trance", "You meditate for 4 hours instead of sleeping.")
            .with_proficiency("Perception"),
        RaceTemplate::new("Dwarf", Size::Medium, 25)
            .with_boost(Ability::Constitution, 2)
            .with_hp_boost(1)
            .with_trait("Darkvision", "You can see in dim light within 60 feet as if it were bright light.")
            .with_trait("Dwarven Resilience", "You have advantage on saving throws against poison.")
            .with_trait("Dwarven Toughness", "Your hit point maximum increases by 1 per level.")
            .with_proficiency("Smith's Tools"),
        RaceTemplate::new("Halfling", Size::Small, 25)
            .with_boost(Ability::Dexterity, 2)
            .with_trait("Lucky", "When you roll a 1 on a d20, you can reroll the die.")
            .with_trait("Brave", "You have advantage on saving throws against being frightened.")
            .with_trait("Halfling Nimbleness", "You can move through the space of any larger creature."),
        RaceTemplate::new("Half-Orc", Size::Medium, 30)
            .with_boost(Ability::Strength, 2)
            .with_boost(Ability::Constitution, 1)
            .with_trait("Darkvision", "You can see in dim light within 60 feet as if it were bright light.")
            .with_trait("Relentless Endurance", "When reduced to 0 hit points, you can drop to 1 instead, once per long rest.")
            .with_proficiency("Intimidation"),
        RaceTemplate::new("Half-Elf", Size::Medium, 30)
            .with_boost(Ability::Charisma, 2)
            .with_trait("Darkvision", "You can see in dim light within 60 feet as if it were bright light.")
            .with_trait("Fey Ancestry", "You have advantage on saving throws against being charmed."),
        RaceTemplate::new("Tiefling", Size::Medium, 30)
            .with_boost(Ability::Charisma, 2)
            .with_boost(Ability::Intelligence, 1)
            .with_trait("Darkvision", "You can see in dim light within 60 feet as if it were bright light.")
            .with_trait("Hellish Resistance", "You have resistance to fire damage."),
        RaceTemplate::new("Gnome", Size::Small, 25)
            .with_boost(Ability::Intelligence, 2)
            .with_trait("Darkvision", "You can see in dim light within 60 feet as if it were bright light.")
            .with_trait("Gnome Cunning", "You have advantage on Int, Wis, and Cha saves against magic."),
        RaceTemplate::new("Dragonborn", Size::Medium, 30)
            .with_boost(Ability::Strength, 2)
            .with_boost(Ability::Charisma, 1)
            .with_trait("Breath Weapon", "You can exhale destructive energy based on your draconic ancestry.")
            .with_trait("Damage Resistance", "You have resistance to the damage type of your ancestry."),
    ];
}

// ============================================================================
// Backgrounds
// ============================================================================

lazy_static::lazy_static! {
    /// Standard character backgrounds.
    pub static ref BACKGROUNDS: Vec<BackgroundTemplate> = vec![
        BackgroundTemplate::new("Acolyte", 15)
            .with_proficiencies(["Insight", "Religion"])
            .with_equipment(["Holy Symbol", "Prayer Book", "Vestments"]),
        BackgroundTemplate::new("Charlatan", 15)
            .with_proficiencies(["Deception", "Sleight of Hand", "Disguise Kit", "Forgery Kit"])
            .with_equipment(["Fine Clothes", "Disguise Kit"]),
        BackgroundTemplate::new("Criminal", 15)
            .with_proficiencies(["Deception", "Stealth", "Thieves' Tools"])
            .with_equipment(["Crowbar", "Dark Clothes"]),
        BackgroundTemplate::new("Entertainer", 15)
            .with_proficiencies(["Acrobatics", "Performance", "Disguise Kit"])
            .with_equipment(["Musical Instrument", "Costume"]),
        BackgroundTemplate::new("Folk Hero", 10)
            .with_proficiencies(["Animal Handling", "Survival", "Vehicles (Land)"])
            .with_equipment(["Artisan's Tools", "Shovel", "Iron Pot", "Common Clothes"]),
        BackgroundTemplate::new("Guild Artisan", 15)
            .with_proficiencies(["Insight", "Persuasion", "Artisan's Tools"])
            .with_equipment(["Artisan's Tools", "Letter of Introduction", "Traveler's Clothes"]),
        BackgroundTemplate::new("Hermit", 5)
            .with_proficiencies(["Medicine", "Religion", "Herbalism Kit"])
            .with_equipment(["Scroll Case", "Winter Blanket", "Herbalism Kit"]),
        BackgroundTemplate::new("Noble", 25)
            .with_proficiencies(["History", "Persuasion"])
            .with_equipment(["Fine Clothes", "Signet Ring", "Scroll of Pedigree"]),
        BackgroundTemplate::new("Outlander", 10)
            .with_proficiencies(["Athletics", "Survival", "Musical Instrument"])
            .with_equipment(["Staff", "Hunting Trap", "Traveler's Clothes"]),
        BackgroundTemplate::new("Sage", 10)
            .with_proficiencies(["Arcana", "History"])
            .with_equipment(["Bottle of Ink", "Quill", "Small Knife", "Common Clothes"]),
        BackgroundTemplate::new("Sailor", 10)
            .with_proficiencies(["Athletics", "Perception", "Navigator's Tools", "Vehicles (Water)"])
            .with_equipment(["Belaying Pin", "Silk Rope", "Lucky Charm"]),
        BackgroundTemplate::new("Soldier", 10)
            .with_proficiencies(["Athletics", "Intimidation", "Vehicles (Land)"])
            .with_equipment(["Insignia of Rank", "Bone Dice", "Common Clothes"]),
        BackgroundTemplate::new("Urchin", 10)
            .with_proficiencies(["Sleight of Hand", "Stealth", "Disguise Kit", "Thieves' Tools"])
            .with_equipment(["Small Knife", "Map of the City", "Pet Mouse"]),
    ];
}

// ============================================================================
// Weapons
// ============================================================================

lazy_static::lazy_static! {
    /// Standard weapons. Ranged weapons are Dexterity-based, finesse
    /// weapons use the better of Dexterity and Strength.
    pub static ref WEAPONS: Vec<WeaponTemplate> = vec![
        // Simple Melee Weapons
        WeaponTemplate::new("Club", WeaponAbility::Strength, 1, DieType::D4),
        WeaponTemplate::new("Dagger", WeaponAbility::Finesse, 1, DieType::D4),
        WeaponTemplate::new("Greatclub", WeaponAbility::Strength, 1, DieType::D8),
        WeaponTemplate::new("Handaxe", WeaponAbility::Strength, 1, DieType::D6),
        WeaponTemplate::new("Javelin", WeaponAbility::Strength, 1, DieType::D6),
        WeaponTemplate::new("Light Hammer", WeaponAbility::Strength, 1, DieType::D4),
        WeaponTemplate::new("Mace", WeaponAbility::Strength, 1, DieType::D6),
        WeaponTemplate::new("Quarterstaff", WeaponAbility::Strength, 1, DieType::D6),
        WeaponTemplate::new("Sickle", WeaponAbility::Strength, 1, DieType::D4),
        WeaponTemplate::new("Spear", WeaponAbility::Strength, 1, DieType::D6),

        // Martial Melee Weapons
        WeaponTemplate::new("Battleaxe", WeaponAbility::Strength, 1, DieType::D8),
        WeaponTemplate::new("Flail", WeaponAbility::Strength, 1, DieType::D8),
        WeaponTemplate::new("Glaive", WeaponAbility::Strength, 1, DieType::D10),
        WeaponTemplate::new("Greataxe", WeaponAbility::Strength, 1, DieType::D12),
        WeaponTemplate::new("Greatsword", WeaponAbility::Strength, 2, DieType::D6),
        WeaponTemplate::new("Halberd", WeaponAbility::Strength, 1, DieType::D10),
        WeaponTemplate::new("Lance", WeaponAbility::Strength, 1, DieType::D12),
        WeaponTemplate::new("Longsword", WeaponAbility::Strength, 1, DieType::D8),
        WeaponTemplate::new("Maul", WeaponAbility::Strength, 2, DieType::D6),
        WeaponTemplate::new("Morningstar", WeaponAbility::Strength, 1, DieType::D8),
        WeaponTemplate::new("Pike", WeaponAbility::Strength, 1, DieType::D10),
        WeaponTemplate::new("Rapier", WeaponAbility::Finesse, 1, DieType::D8),
        WeaponTemplate::new("Scimitar", WeaponAbility::Finesse, 1, DieType::D6),
        WeaponTemplate::new("Shortsword", WeaponAbility::Finesse, 1, DieType::D6),
        WeaponTemplate::new("Trident", WeaponAbility::Strength, 1, DieType::D6),
        WeaponTemplate::new("War Pick", WeaponAbility::Strength, 1, DieType::D8),
        WeaponTemplate::new("Warhammer", WeaponAbility::Strength, 1, DieType::D8),
        WeaponTemplate::new("Whip", WeaponAbility::Finesse, 1, DieType::D4),

        // Simple Ranged Weapons
        WeaponTemplate::new("Light Crossbow", WeaponAbility::Dexterity, 1, DieType::D8),
        WeaponTemplate::new("Shortbow", WeaponAbility::Dexterity, 1, DieType::D6),

        // Martial Ranged Weapons
        WeaponTemplate::new("Hand Crossbow", WeaponAbility::Dexterity, 1, DieType::D6),
        WeaponTemplate::new("Heavy Crossbow", WeaponAbility::Dexterity, 1, DieType::D10),
        WeaponTemplate::new("Longbow", WeaponAbility::Dexterity, 1, DieType::D8),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::Skill;
    use crate::templates::BoostTarget;

    #[test]
    fn test_standard_catalogs_are_complete() {
        let catalogs = standard_catalogs();
        assert_eq!(catalogs.races.len(), RACES.len());
        assert_eq!(catalogs.backgrounds.len(), BACKGROUNDS.len());
        assert_eq!(catalogs.weapons.len(), WEAPONS.len());
    }

    #[test]
    fn test_dwarf_boosts_hit_points() {
        let catalogs = standard_catalogs();
        let dwarf = catalogs.races.get("Dwarf").unwrap();
        assert!(dwarf
            .boosts
            .iter()
            .any(|b| b.target == BoostTarget::HitPoints && b.amount == 1));
    }

    #[test]
    fn test_finesse_weapons() {
        let catalogs = standard_catalogs();
        for name in ["Dagger", "Rapier", "Scimitar", "Shortsword", "Whip"] {
            assert!(catalogs.weapons.get(name).unwrap().is_finesse(), "{name}");
        }
        assert_eq!(
            catalogs.weapons.get("Longbow").unwrap().ability,
            WeaponAbility::Dexterity
        );
    }

    #[test]
    fn test_background_skill_names_are_in_skill_table() {
        // Tool proficiencies are allowed too, but the first two entries of
        // every background are skills.
        for background in BACKGROUNDS.iter() {
            for prof in background.proficiencies.iter().take(2) {
                assert!(
                    Skill::from_name(prof).is_some(),
                    "{} grants unknown skill {prof}",
                    background.name
                );
            }
        }
    }
}
