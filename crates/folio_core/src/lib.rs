//! Core domain logic for Folio, the editable portfolio document.
//! This crate is the single source of truth for edit and persistence
//! semantics; presentation layers only consume snapshots and raise events.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::document::{
    default_document, Certification, Contact, Document, Education, EntryId, Internship, Profile,
    Project, ProjectLinks, SkillDetail, PLACEHOLDER_IMAGE_URL,
};
pub use service::session::{DocumentSession, ProfileField, ProjectField};
pub use service::workbench::{CommitOutcome, EditMode, Workbench};
pub use store::{
    default_storage_path, DocumentStore, JsonFileStore, MemoryStore, StoreError, StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
