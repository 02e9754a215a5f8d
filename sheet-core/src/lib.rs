//! Rules engine for tabletop character sheets.
//!
//! This crate provides:
//! - Character sheets with abilities, derived stats, inventory, and tags
//! - Race and background templates grafted onto characters at creation
//! - Weapon damage and skill check resolution over injectable dice
//! - Name-keyed template catalogs with JSON persistence
//!
//! # Quick Start
//!
//! ```no_run
//! use sheet_core::{Ability, CharacterBuilder, Catalogs, RandomDice};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalogs = Catalogs::standard();
//!
//!     let mut hero = CharacterBuilder::new("Thorin")
//!         .class("Fighter")
//!         .race("Dwarf")
//!         .background("Soldier")
//!         .ability(Ability::Strength, 16)
//!         .uid(1)
//!         .build(&catalogs)?;
//!
//!     hero.set_weapon("Battleaxe");
//!
//!     let mut dice = RandomDice::new();
//!     let damage = hero.attack(&catalogs.weapons, &mut dice, true)?;
//!     let athletics = hero.roll_skill("Athletics", &mut dice)?;
//!     println!("{damage} damage, Athletics {athletics}");
//!     Ok(())
//! }
//! ```

pub mod ability;
pub mod apply;
pub mod catalog;
pub mod character;
pub mod character_builder;
pub mod config;
pub mod dice;
pub mod error;
pub mod persist;
pub mod rules;
pub mod skills;
pub mod srd;
pub mod templates;
pub mod testing;

// Primary public API
pub use ability::{ability_modifier, Ability, AbilityScores};
pub use catalog::{Catalog, Catalogs};
pub use character::Character;
pub use character_builder::CharacterBuilder;
pub use config::CatalogConfig;
pub use dice::{DiceSource, DieType, RandomDice};
pub use error::{SheetError, SheetResult};
pub use persist::PersistError;
pub use rules::{resolved_modifier, AttackDamage, SkillCheck};
pub use skills::Skill;
pub use templates::{
    AbilityBoost, BackgroundTemplate, BoostTarget, RaceTemplate, Size, TemplateKind,
    WeaponAbility, WeaponTemplate,
};
pub use testing::ScriptedDice;
