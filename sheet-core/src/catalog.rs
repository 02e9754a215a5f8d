//! Template catalogs: name-keyed tables of races, backgrounds, and weapons.
//!
//! Catalogs are plain owned values. Whoever needs a lookup borrows the
//! catalog; whoever mutates it needs `&mut`. There is no process-wide table,
//! so every test can build its own.

use crate::config::CatalogConfig;
use crate::error::{SheetError, SheetResult};
use crate::persist::{self, PersistError, StagedFile};
use crate::templates::{BackgroundTemplate, RaceTemplate, Template, TemplateKind, WeaponTemplate};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// A name-keyed collection of one kind of template.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    entries: BTreeMap<String, T>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T: Template> Catalog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a template by exact name.
    pub fn get(&self, name: &str) -> SheetResult<&T> {
        self.entries
            .get(name)
            .ok_or_else(|| SheetError::not_found(T::KIND, name))
    }

    /// Insert a template under `name`, replacing any previous entry.
    pub fn add(&mut self, name: impl Into<String>, template: T) {
        let name = name.into();
        tracing::debug!(kind = %T::KIND, name = %name, "Added template");
        self.entries.insert(name, template);
    }

    /// Insert a template under its own name.
    pub fn insert(&mut self, template: T) {
        let name = template.name().to_string();
        self.add(name, template);
    }

    /// Remove `name` if present. Removing an absent name is a no-op.
    pub fn delete(&mut self, name: &str) {
        if self.entries.remove(name).is_some() {
            tracing::debug!(kind = %T::KIND, name = %name, "Deleted template");
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<T: Template + Serialize + DeserializeOwned> Catalog<T> {
    /// Serialize the full catalog to `path`, keyed by catalog name.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        self.stage(path)?.commit()
    }

    fn stage(&self, path: impl AsRef<Path>) -> Result<StagedFile, PersistError> {
        let path = path.as_ref();
        let staged = persist::stage_catalog(path, T::KIND, &self.entries)?;
        tracing::info!(
            kind = %T::KIND,
            count = self.entries.len(),
            path = %path.display(),
            "Staged catalog"
        );
        Ok(staged)
    }

    /// Replace the catalog with the contents of `path`.
    ///
    /// On failure the catalog is left exactly as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let path = path.as_ref();
        let loaded = match Self::read(path) {
            Ok(loaded) => loaded,
            Err(e) => {
                tracing::warn!(
                    kind = %T::KIND,
                    path = %path.display(),
                    error = %e,
                    "Catalog load failed, keeping current entries"
                );
                return Err(e);
            }
        };
        *self = loaded;
        tracing::info!(
            kind = %T::KIND,
            count = self.entries.len(),
            path = %path.display(),
            "Loaded catalog"
        );
        Ok(())
    }

    /// Read a catalog from `path` without touching any existing one.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let entries: BTreeMap<String, T> = persist::read_catalog(path, T::KIND)?;
        Ok(Self { entries })
    }
}

impl<T: Template> From<Vec<T>> for Catalog<T> {
    fn from(templates: Vec<T>) -> Self {
        Self {
            entries: templates
                .into_iter()
                .map(|t| (t.name().to_string(), t))
                .collect(),
        }
    }
}

impl<T: Template> FromIterator<T> for Catalog<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// The three catalogs the rules need, bundled for convenience.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogs {
    pub races: Catalog<RaceTemplate>,
    pub backgrounds: Catalog<BackgroundTemplate>,
    pub weapons: Catalog<WeaponTemplate>,
}

impl Catalogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalogs pre-populated with the standard content.
    pub fn standard() -> Self {
        crate::srd::standard_catalogs()
    }

    /// Read all three catalogs from the locations in `config`.
    pub fn load(config: &CatalogConfig) -> Result<Self, PersistError> {
        Ok(Self {
            races: Catalog::read(config.races_path())?,
            backgrounds: Catalog::read(config.backgrounds_path())?,
            weapons: Catalog::read(config.weapons_path())?,
        })
    }

    /// Replace all three catalogs from disk, or none of them.
    pub fn load_into(&mut self, config: &CatalogConfig) -> Result<(), PersistError> {
        match Self::load(config) {
            Ok(loaded) => {
                *self = loaded;
                tracing::info!(dir = %config.dir.display(), "Loaded catalogs");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    dir = %config.dir.display(),
                    error = %e,
                    "Catalog load failed, keeping current catalogs"
                );
                Err(e)
            }
        }
    }

    /// Write all three catalogs.
    ///
    /// Every file is staged before any is renamed into place, so a
    /// serialization or write failure leaves the existing files untouched.
    /// A rename failing partway through can still leave a mixed set.
    pub fn save(&self, config: &CatalogConfig) -> Result<(), PersistError> {
        std::fs::create_dir_all(&config.dir)?;
        let staged = [
            self.races.stage(config.races_path())?,
            self.backgrounds.stage(config.backgrounds_path())?,
            self.weapons.stage(config.weapons_path())?,
        ];
        for file in staged {
            file.commit()?;
        }
        tracing::info!(dir = %config.dir.display(), "Saved catalogs");
        Ok(())
    }

    /// Whether the catalog for `kind` holds `name`.
    pub fn contains(&self, kind: TemplateKind, name: &str) -> bool {
        match kind {
            TemplateKind::Race => self.races.contains(name),
            TemplateKind::Background => self.backgrounds.contains(name),
            TemplateKind::Weapon => self.weapons.contains(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DieType;
    use crate::templates::WeaponAbility;
    use tempfile::TempDir;

    fn weapons() -> Catalog<WeaponTemplate> {
        Catalog::from(vec![
            WeaponTemplate::new("Dagger", WeaponAbility::Finesse, 1, DieType::D4),
            WeaponTemplate::new("Maul", WeaponAbility::Strength, 2, DieType::D6),
        ])
    }

    #[test]
    fn test_get_and_not_found() {
        let catalog = weapons();
        assert_eq!(catalog.get("Maul").unwrap().number_dice, 2);
        assert!(matches!(
            catalog.get("Spoon"),
            Err(SheetError::NotFound { kind: TemplateKind::Weapon, name }) if name == "Spoon"
        ));
    }

    #[test]
    fn test_add_overwrites() {
        let mut catalog = weapons();
        catalog.add(
            "Dagger",
            WeaponTemplate::new("Dagger", WeaponAbility::Dexterity, 2, DieType::D4),
        );
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Dagger").unwrap().ability, WeaponAbility::Dexterity);
    }

    #[test]
    fn test_delete_is_noop_when_absent() {
        let mut catalog = weapons();
        catalog.delete("Spoon");
        assert_eq!(catalog.len(), 2);
        catalog.delete("Maul");
        assert!(!catalog.contains("Maul"));
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Dagger"]);
    }

    #[test]
    fn test_save_then_load_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weapons.json");
        weapons().save(&path).unwrap();

        let mut other = Catalog::new();
        other.insert(WeaponTemplate::new("Club", WeaponAbility::Strength, 1, DieType::D4));
        other.load(&path).unwrap();
        assert_eq!(other, weapons());
    }

    #[test]
    fn test_failed_load_leaves_catalog_unchanged() {
        let mut catalog = weapons();
        let before = catalog.clone();
        assert!(catalog.load("missing/path").is_err());
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_bundle_load_is_all_or_nothing() {
        let dir = TempDir::new().unwrap();
        let config = CatalogConfig::new(dir.path());
        let standard = Catalogs::standard();
        standard.save(&config).unwrap();

        // Break one of the three files
        std::fs::write(config.weapons_path(), "{").unwrap();

        let mut current = Catalogs::new();
        current.weapons = weapons();
        let before = current.clone();
        assert!(current.load_into(&config).is_err());
        assert_eq!(current, before);
    }

    #[test]
    fn test_aliased_entries_survive_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weapons.json");

        let mut catalog = Catalog::new();
        catalog.add(
            "Sword",
            WeaponTemplate::new("Longsword", WeaponAbility::Strength, 1, DieType::D8),
        );
        catalog.insert(WeaponTemplate::new("Longsword", WeaponAbility::Strength, 1, DieType::D10));
        catalog.save(&path).unwrap();

        let loaded = Catalog::<WeaponTemplate>::read(&path).unwrap();
        assert_eq!(loaded.names().collect::<Vec<_>>(), vec!["Longsword", "Sword"]);
        assert_eq!(loaded.get("Sword").unwrap().sides, 8);
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_bundle_save_failure_keeps_existing_files() {
        let dir = TempDir::new().unwrap();
        let config = CatalogConfig::new(dir.path());
        Catalogs::standard().save(&config).unwrap();
        let races_before = std::fs::read_to_string(config.races_path()).unwrap();

        // A directory where the weapons file should go makes its staging fail
        let blocked = config.clone().with_weapons_file("blocked");
        std::fs::create_dir_all(blocked.weapons_path().with_extension("tmp")).unwrap();

        let mut changed = Catalogs::standard();
        changed.races.delete("Elf");
        assert!(changed.save(&blocked).is_err());

        assert_eq!(std::fs::read_to_string(config.races_path()).unwrap(), races_before);
        assert!(!dir.path().join(format!("{}.tmp", config.races_file)).exists());
    }
}
