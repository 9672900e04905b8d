//! Mode-gated editing workbench.
//!
//! # Responsibility
//! - Run the two-state view/edit machine over one document session.
//! - Make mutation entry points unreachable outside edit mode.
//! - Commit the session document through the injected store on request.
//!
//! # Invariants
//! - Mode transitions never save; durability requires an explicit commit.
//! - A failed commit leaves the session document unchanged so the caller
//!   can retry.
//! - Dropping the workbench without a commit discards unsaved mutations.

use log::{info, warn};

use crate::service::session::DocumentSession;
use crate::store::{DocumentStore, StoreResult};

/// The two interaction states. `View` is initial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    View,
    Edit,
}

impl EditMode {
    fn toggled(self) -> Self {
        match self {
            Self::View => Self::Edit,
            Self::Edit => Self::View,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
        }
    }
}

/// Result of a commit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The session document was written to storage.
    Saved,
    /// The workbench was in view mode; nothing was written.
    Blocked,
}

/// One user session: store + session document + interaction mode.
///
/// The store and the session are explicit constructed dependencies; the
/// workbench holds no ambient state and each workbench owns an independent
/// document copy. Concurrent sessions do not coordinate — the last commit
/// wins.
pub struct Workbench<S: DocumentStore> {
    store: S,
    session: DocumentSession,
    mode: EditMode,
}

impl<S: DocumentStore> Workbench<S> {
    /// Loads the stored document (or the built-in default) and starts a
    /// session in view mode.
    pub fn open(store: S) -> Self {
        let session = DocumentSession::new(store.load());
        Self {
            store,
            session,
            mode: EditMode::View,
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Unconditional view/edit toggle. Leaving edit mode keeps unsaved
    /// mutations in memory; it never writes.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        info!(
            "event=mode_toggle module=workbench mode={} dirty={}",
            self.mode.label(),
            self.session.is_dirty()
        );
    }

    /// Read access to the session; always available.
    pub fn session(&self) -> &DocumentSession {
        &self.session
    }

    /// Mutable access to the session — the mutation gate.
    ///
    /// Returns `None` in view mode, which keeps every mutation entry point
    /// unreachable there.
    pub fn session_mut(&mut self) -> Option<&mut DocumentSession> {
        match self.mode {
            EditMode::Edit => Some(&mut self.session),
            EditMode::View => None,
        }
    }

    /// Writes the session document to storage.
    ///
    /// # Contract
    /// - In view mode: returns `Ok(CommitOutcome::Blocked)`, writes nothing.
    /// - In edit mode: saves, clears the dirty flag, returns `Saved`.
    /// - On store failure the error is surfaced and the session document is
    ///   retained unchanged for retry.
    pub fn commit(&mut self) -> StoreResult<CommitOutcome> {
        if self.mode != EditMode::Edit {
            info!("event=commit module=workbench status=blocked mode=view");
            return Ok(CommitOutcome::Blocked);
        }

        match self.store.save(self.session.document()) {
            Ok(()) => {
                self.session.mark_clean();
                info!("event=commit module=workbench status=ok");
                Ok(CommitOutcome::Saved)
            }
            Err(err) => {
                warn!("event=commit module=workbench status=error error={err}");
                Err(err)
            }
        }
    }

    /// Hands back the store, discarding the session and any unsaved edits.
    pub fn into_store(self) -> S {
        self.store
    }
}
