//! On-disk format for template catalogs.
//!
//! Catalogs are stored as pretty-printed JSON with a version stamp and the
//! kind of template they hold, so a race file can never be loaded as a
//! weapon catalog.

use crate::templates::TemplateKind;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from persistence operations.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("Catalog kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        expected: TemplateKind,
        found: TemplateKind,
    },
}

/// Current catalog file version.
pub const CATALOG_VERSION: u32 = 1;

/// A serialized catalog. `entries` maps each catalog name to its template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile<E> {
    pub version: u32,
    pub kind: TemplateKind,
    pub entries: E,
}

/// A catalog serialized to a sibling temporary file, not yet in place.
///
/// [`StagedFile::commit`] renames it over the target. Dropping it without
/// committing removes the temporary file.
#[derive(Debug)]
pub struct StagedFile {
    tmp: PathBuf,
    target: PathBuf,
    committed: bool,
}

impl StagedFile {
    pub fn commit(mut self) -> Result<(), PersistError> {
        fs::rename(&self.tmp, &self.target)?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.tmp);
        }
    }
}

/// Serialize `entries` next to `path` without touching `path` itself.
pub fn stage_catalog<E: Serialize>(
    path: impl AsRef<Path>,
    kind: TemplateKind,
    entries: E,
) -> Result<StagedFile, PersistError> {
    let target = path.as_ref().to_path_buf();
    let file = CatalogFile {
        version: CATALOG_VERSION,
        kind,
        entries,
    };
    let content = serde_json::to_string_pretty(&file)?;

    let mut tmp = target.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, content)?;
    Ok(StagedFile {
        tmp,
        target,
        committed: false,
    })
}

/// Write `entries` to `path`.
///
/// The content goes to a sibling temporary file first and is then renamed
/// over the target, so an existing file is never left half-written.
pub fn write_catalog<E: Serialize>(
    path: impl AsRef<Path>,
    kind: TemplateKind,
    entries: E,
) -> Result<(), PersistError> {
    stage_catalog(path, kind, entries)?.commit()
}

/// Read a catalog of `kind` from `path`, checking version and kind.
pub fn read_catalog<E: DeserializeOwned>(
    path: impl AsRef<Path>,
    kind: TemplateKind,
) -> Result<E, PersistError> {
    let content = fs::read_to_string(path)?;
    let file: CatalogFile<E> = serde_json::from_str(&content)?;

    if file.version != CATALOG_VERSION {
        return Err(PersistError::VersionMismatch {
            expected: CATALOG_VERSION,
            found: file.version,
        });
    }
    if file.kind != kind {
        return Err(PersistError::KindMismatch {
            expected: kind,
            found: file.kind,
        });
    }

    Ok(file.entries)
}
