//! Editing-session services.
//!
//! # Responsibility
//! - Hold the one mutable in-session copy of the document and expose its
//!   mutation operations.
//! - Gate mutation and commit behind the view/edit mode machine.
//!
//! # Invariants
//! - Mutations accumulate in memory only; durability happens solely through
//!   an explicit commit.

pub mod session;
pub mod workbench;
