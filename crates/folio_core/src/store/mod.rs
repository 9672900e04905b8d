//! Document persistence contracts and implementations.
//!
//! # Responsibility
//! - Define the storage interface the editing layer commits through.
//! - Keep file-format and path details inside the persistence boundary.
//!
//! # Invariants
//! - `load` never fails: unreadable storage falls back to the built-in
//!   default document.
//! - `save` is the only operation with durable side effects, and its
//!   failures are surfaced to the caller, never swallowed.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use crate::model::document::Document;

mod json_file;
mod memory;

pub use json_file::{default_storage_path, JsonFileStore};
pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error surfaced by `save`.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure (permissions, missing volume, disk full).
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Document could not be serialized to the storage format.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "storage I/O failure at `{}`: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "cannot encode document for `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Storage interface for the portfolio document.
pub trait DocumentStore {
    /// Reads the stored document.
    ///
    /// # Contract
    /// - Missing or malformed storage yields the built-in default document;
    ///   the condition is logged, not surfaced.
    /// - Has no side effects beyond the read.
    fn load(&self) -> Document;

    /// Writes the full document, replacing the stored one.
    ///
    /// # Contract
    /// - Atomic from the caller's perspective: readers never observe a
    ///   partial write.
    /// - Fails only on unrecoverable I/O or encoding conditions, which are
    ///   returned unchanged for the caller to surface.
    fn save(&self, document: &Document) -> StoreResult<()>;
}
