//! Canonical portfolio document model.
//!
//! # Responsibility
//! - Define the document tree persisted to and loaded from storage.
//! - Keep one schema for both the generic and the academic portfolio
//!   variants, with the academic field sets as optional sections.
//!
//! # Invariants
//! - Serialized field names are the storage format and must not drift.
//! - List-of-object entries are identified by a stable `EntryId` held by
//!   the session layer, never by serialized position.

pub mod document;
