use std::cell::Cell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use folio_core::{
    default_document, CommitOutcome, Document, DocumentStore, EditMode, JsonFileStore,
    MemoryStore, ProfileField, StoreError, StoreResult, Workbench,
};
use tempfile::tempdir;

/// Store whose saves can be made to fail, for commit-retry coverage.
struct FlakyStore {
    inner: MemoryStore,
    fail_saves: Rc<Cell<bool>>,
}

impl DocumentStore for FlakyStore {
    fn load(&self) -> Document {
        self.inner.load()
    }

    fn save(&self, document: &Document) -> StoreResult<()> {
        if self.fail_saves.get() {
            return Err(StoreError::Io {
                path: PathBuf::from("<flaky>"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "write refused"),
            });
        }
        self.inner.save(document)
    }
}

#[test]
fn workbench_starts_in_view_mode_with_snapshot_access() {
    let workbench = Workbench::open(MemoryStore::new());

    assert_eq!(workbench.mode(), EditMode::View);
    assert_eq!(workbench.session().document(), &default_document());
}

#[test]
fn view_mode_makes_mutation_entry_points_unreachable() {
    let mut workbench = Workbench::open(MemoryStore::new());

    assert!(workbench.session_mut().is_none());

    workbench.toggle_mode();
    assert_eq!(workbench.mode(), EditMode::Edit);
    assert!(workbench.session_mut().is_some());

    workbench.toggle_mode();
    assert_eq!(workbench.mode(), EditMode::View);
    assert!(workbench.session_mut().is_none());
}

#[test]
fn commit_in_view_mode_is_blocked_and_writes_nothing() {
    let mut workbench = Workbench::open(MemoryStore::new());

    assert_eq!(workbench.commit().unwrap(), CommitOutcome::Blocked);
    assert!(workbench.into_store().saved_json().is_none());
}

#[test]
fn committed_edits_are_visible_to_a_subsequent_load() {
    let mut workbench = Workbench::open(MemoryStore::new());

    workbench.toggle_mode();
    let session = workbench.session_mut().unwrap();
    session.set_profile_field(ProfileField::Title, "Systems Engineer");
    session.add_skill("Rust");

    assert_eq!(workbench.commit().unwrap(), CommitOutcome::Saved);
    assert!(!workbench.session().is_dirty());

    let reloaded = workbench.into_store().load();
    assert_eq!(reloaded.profile.title, "Systems Engineer");
    assert!(reloaded.profile.skills.contains(&"Rust".to_string()));
}

#[test]
fn leaving_edit_mode_never_saves() {
    let mut workbench = Workbench::open(MemoryStore::new());

    workbench.toggle_mode();
    workbench
        .session_mut()
        .unwrap()
        .set_profile_field(ProfileField::Name, "Changed");
    workbench.toggle_mode();

    assert!(workbench.session().is_dirty());
    assert!(workbench.into_store().saved_json().is_none());
}

#[test]
fn abandoning_a_session_without_commit_loses_unsaved_edits() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("projects.json");

    let mut seeded = default_document();
    seeded.profile.name = "Original".to_string();
    JsonFileStore::new(&path).save(&seeded).unwrap();

    {
        let mut workbench = Workbench::open(JsonFileStore::new(&path));
        workbench.toggle_mode();
        workbench
            .session_mut()
            .unwrap()
            .set_profile_field(ProfileField::Name, "Never Saved");
        // Dropped without commit.
    }

    let reloaded = Workbench::open(JsonFileStore::new(&path));
    assert_eq!(reloaded.session().document().profile.name, "Original");
}

#[test]
fn failed_commit_retains_the_session_document_for_retry() {
    let fail_saves = Rc::new(Cell::new(true));
    let store = FlakyStore {
        inner: MemoryStore::new(),
        fail_saves: Rc::clone(&fail_saves),
    };

    let mut workbench = Workbench::open(store);
    workbench.toggle_mode();
    workbench
        .session_mut()
        .unwrap()
        .set_profile_field(ProfileField::About, "worth keeping");

    let err = workbench.commit().unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));

    // The in-memory document is unchanged and still marked dirty.
    assert_eq!(
        workbench.session().document().profile.about,
        "worth keeping"
    );
    assert!(workbench.session().is_dirty());

    fail_saves.set(false);
    assert_eq!(workbench.commit().unwrap(), CommitOutcome::Saved);
    assert!(!workbench.session().is_dirty());
    assert_eq!(
        workbench.into_store().inner.load().profile.about,
        "worth keeping"
    );
}

#[test]
fn last_commit_wins_across_independent_sessions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("projects.json");

    let mut first = Workbench::open(JsonFileStore::new(&path));
    let mut second = Workbench::open(JsonFileStore::new(&path));

    first.toggle_mode();
    first
        .session_mut()
        .unwrap()
        .set_profile_field(ProfileField::Name, "First Session");
    first.commit().unwrap();

    second.toggle_mode();
    second
        .session_mut()
        .unwrap()
        .set_profile_field(ProfileField::Name, "Second Session");
    second.commit().unwrap();

    let reloaded = JsonFileStore::new(&path).load();
    assert_eq!(reloaded.profile.name, "Second Session");
}
