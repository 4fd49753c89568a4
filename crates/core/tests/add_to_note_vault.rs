use marksplice_core::entry::{AddRequest, EntryError, add_to_note};
use marksplice_core::splice::{InsertMode, SpliceError};
use marksplice_core::store::{StoreError, VaultStore};
use std::fs;
use tempfile::tempdir;

fn request(note: &str, section: &str, mode: InsertMode, fragment: &str) -> AddRequest {
    AddRequest {
        note: note.into(),
        section: section.into(),
        mode,
        fragment: fragment.into(),
    }
}

#[test]
fn appends_into_nested_note() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("01-Life")).unwrap();
    let note = tmp.path().join("01-Life/Daily Log.md");
    fs::write(&note, "# Log\n## Today\nfoo").unwrap();

    let store = VaultStore::new(tmp.path()).unwrap();
    let outcome = add_to_note(
        &store,
        &request("Daily Log", "## Today", InsertMode::Append, "- did X"),
    )
    .unwrap();

    assert_eq!(fs::read_to_string(&note).unwrap(), "# Log\n## Today\n- did X\nfoo");
    assert!(outcome.path.ends_with("01-Life/Daily Log.md"));
    assert_eq!(outcome.note, "Daily Log");
}

#[test]
fn missing_section_leaves_file_untouched() {
    let tmp = tempdir().unwrap();
    let note = tmp.path().join("Inbox.md");
    fs::write(&note, "abc").unwrap();

    let store = VaultStore::new(tmp.path()).unwrap();
    let err =
        add_to_note(&store, &request("Inbox", "zzz", InsertMode::Append, "x")).unwrap_err();

    assert!(matches!(err, EntryError::Splice(SpliceError::SectionNotFound { .. })));
    assert_eq!(fs::read_to_string(&note).unwrap(), "abc");
}

#[test]
fn ambiguous_note_is_reported() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("a")).unwrap();
    fs::create_dir_all(tmp.path().join("b")).unwrap();
    fs::write(tmp.path().join("a/Todo.md"), "a").unwrap();
    fs::write(tmp.path().join("b/Todo.md"), "b").unwrap();

    let store = VaultStore::new(tmp.path()).unwrap();
    let err = add_to_note(&store, &request("Todo", "", InsertMode::Append, "x")).unwrap_err();

    assert!(matches!(err, EntryError::Store(StoreError::DocumentAmbiguous { .. })));
    assert_eq!(fs::read_to_string(tmp.path().join("a/Todo.md")).unwrap(), "a");
    assert_eq!(fs::read_to_string(tmp.path().join("b/Todo.md")).unwrap(), "b");
}

#[test]
fn note_path_outside_vault_is_not_written() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("vault")).unwrap();
    fs::create_dir_all(tmp.path().join("outside")).unwrap();
    let secret = tmp.path().join("outside/Secret.md");
    fs::write(&secret, "secret").unwrap();

    let store = VaultStore::new(&tmp.path().join("vault")).unwrap();
    let err = add_to_note(
        &store,
        &request("../outside/Secret", "", InsertMode::Append, "overwritten"),
    )
    .unwrap_err();

    assert!(matches!(err, EntryError::Store(StoreError::DocumentNotFound(_))));
    assert_eq!(fs::read_to_string(&secret).unwrap(), "secret");
}
