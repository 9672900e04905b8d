//! In-memory document store.
//!
//! # Responsibility
//! - Provide a storage implementation without filesystem side effects,
//!   mainly for tests and ephemeral sessions.
//!
//! # Invariants
//! - The document passes through the same JSON codec as the file store, so
//!   serialization behavior is exercised identically.
//! - Single-session use only; no cross-thread sharing.

use std::cell::RefCell;
use std::path::PathBuf;

use crate::model::document::{default_document, Document};
use crate::store::{DocumentStore, StoreError, StoreResult};

/// Store keeping the serialized document in memory.
///
/// `load` on an empty store yields the default document, matching the
/// file store's first-run behavior.
#[derive(Default)]
pub struct MemoryStore {
    serialized: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last saved JSON, if any. Test hook.
    pub fn saved_json(&self) -> Option<String> {
        self.serialized.borrow().clone()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Document {
        match self.serialized.borrow().as_deref() {
            Some(json) => serde_json::from_str(json).unwrap_or_else(|_| default_document()),
            None => default_document(),
        }
    }

    fn save(&self, document: &Document) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(document).map_err(|source| StoreError::Json {
            path: PathBuf::from("<memory>"),
            source,
        })?;
        *self.serialized.borrow_mut() = Some(json);
        Ok(())
    }
}
