//! Where catalogs live on disk.

use std::path::{Path, PathBuf};

/// Environment variable naming the catalog directory.
pub const CATALOG_DIR_ENV: &str = "SHEET_CATALOG_DIR";

/// Default catalog directory, relative to the working directory.
pub const DEFAULT_CATALOG_DIR: &str = "catalogs";

/// Locations of the three catalog files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory holding the catalog files.
    pub dir: PathBuf,
    pub races_file: String,
    pub backgrounds_file: String,
    pub weapons_file: String,
}

impl CatalogConfig {
    /// Default file names inside `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            races_file: "races.json".to_string(),
            backgrounds_file: "backgrounds.json".to_string(),
            weapons_file: "weapons.json".to_string(),
        }
    }

    /// Read the directory from `SHEET_CATALOG_DIR`, falling back to `catalogs`.
    pub fn from_env() -> Self {
        let dir = std::env::var(CATALOG_DIR_ENV).unwrap_or_else(|_| DEFAULT_CATALOG_DIR.to_string());
        Self::new(dir)
    }

    pub fn with_races_file(mut self, file: impl Into<String>) -> Self {
        self.races_file = file.into();
        self
    }

    pub fn with_backgrounds_file(mut self, file: impl Into<String>) -> Self {
        self.backgrounds_file = file.into();
        self
    }

    pub fn with_weapons_file(mut self, file: impl Into<String>) -> Self {
        self.weapons_file = file.into();
        self
    }

    pub fn races_path(&self) -> PathBuf {
        self.dir.join(&self.races_file)
    }

    pub fn backgrounds_path(&self) -> PathBuf {
        self.dir.join(&self.backgrounds_file)
    }

    pub fn weapons_path(&self) -> PathBuf {
        self.dir.join(&self.weapons_file)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = CatalogConfig::new("/data");
        assert_eq!(config.races_path(), PathBuf::from("/data/races.json"));
        assert_eq!(
            config.backgrounds_path(),
            PathBuf::from("/data/backgrounds.json")
        );
        assert_eq!(config.weapons_path(), PathBuf::from("/data/weapons.json"));
    }

    #[test]
    fn test_file_overrides() {
        let config = CatalogConfig::new("/data")
            .with_races_file("peoples.json")
            .with_weapons_file("arms.json");
        assert_eq!(config.races_path(), PathBuf::from("/data/peoples.json"));
        assert_eq!(config.weapons_path(), PathBuf::from("/data/arms.json"));
        assert_eq!(config.dir(), Path::new("/data"));
    }
}
