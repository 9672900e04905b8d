//! JSON-file document store.
//!
//! # Responsibility
//! - Persist the document as one pretty-printed JSON file at a fixed path.
//! - Substitute the built-in default document when the file is missing or
//!   unreadable.
//!
//! # Invariants
//! - Writes go to a sibling temp file and are renamed into place, so a
//!   concurrent reader sees either the old or the new document in full.
//! - The storage path is injected at construction; nothing here reaches
//!   for ambient/global state.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::model::document::{default_document, Document};
use crate::store::{DocumentStore, StoreError, StoreResult};

const STORAGE_FILE_NAME: &str = "projects.json";
const TEMP_SUFFIX: &str = "tmp";

/// Platform-default storage location: `<config dir>/folio/projects.json`.
///
/// Falls back to the current directory when the platform reports no config
/// directory.
pub fn default_storage_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("folio");
    path.push(STORAGE_FILE_NAME);
    path
}

/// File-backed store holding the document at one fixed path.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".");
        name.push(TEMP_SUFFIX);
        self.path.with_file_name(name)
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Document {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                info!(
                    "event=document_load module=store status=fallback reason=unreadable path={} error={err}",
                    self.path.display()
                );
                return default_document();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(document) => {
                info!(
                    "event=document_load module=store status=ok path={}",
                    self.path.display()
                );
                document
            }
            Err(err) => {
                warn!(
                    "event=document_load module=store status=fallback reason=malformed path={} error={err}",
                    self.path.display()
                );
                default_document()
            }
        }
    }

    fn save(&self, document: &Document) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(document).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|source| StoreError::Io {
            path: temp.clone(),
            source,
        })?;
        fs::rename(&temp, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!(
            "event=document_save module=store status=ok path={}",
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_storage_path_ends_with_fixed_file_name() {
        let path = default_storage_path();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(STORAGE_FILE_NAME)
        );
        assert!(path.parent().is_some());
    }

    #[test]
    fn temp_path_is_sibling_of_storage_path() {
        let store = JsonFileStore::new("/data/folio/projects.json");
        let temp = store.temp_path();
        assert_eq!(temp.parent(), store.path().parent());
        assert_eq!(
            temp.file_name().and_then(|n| n.to_str()),
            Some("projects.json.tmp")
        );
    }
}
