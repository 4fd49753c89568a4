use tracing::{info, warn};

use crate::entry::types::{AddOutcome, AddRequest, EntryError};
use crate::splice::SectionedTextEditor;
use crate::store::DocumentStore;

/// Resolve a note, splice the fragment in, and write the note back.
///
/// Nothing is written unless the splice succeeds.
pub fn add_to_note<S: DocumentStore + ?Sized>(
    store: &S,
    request: &AddRequest,
) -> Result<AddOutcome, EntryError> {
    let doc_ref = store.resolve(&request.note).inspect_err(|e| {
        warn!(note = %request.note, error = %e, "note lookup failed");
    })?;

    let document = store.read_document(&doc_ref)?;

    let result = SectionedTextEditor::insert_into_document(
        &document,
        &request.section,
        &request.fragment,
        request.mode,
    )
    .inspect_err(|e| {
        warn!(note = %request.note, error = %e, "insertion failed, note left unchanged");
    })?;

    store.write_document(&doc_ref, &result.content)?;

    info!(
        note = %request.note,
        section = %request.section,
        mode = ?request.mode,
        "note updated"
    );

    Ok(AddOutcome {
        note: doc_ref.id,
        path: doc_ref.path,
        offset: result.offset,
        inserted_len: result.inserted_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splice::{InsertMode, SpliceError};
    use crate::store::{MemoryStore, StoreError};

    fn request(note: &str, section: &str, mode: InsertMode, fragment: &str) -> AddRequest {
        AddRequest {
            note: note.to_string(),
            section: section.to_string(),
            mode,
            fragment: fragment.to_string(),
        }
    }

    #[test]
    fn appends_after_marker_and_writes() {
        let store = MemoryStore::new().with_note("Log", "# Log\n## Today\nfoo");

        let outcome =
            add_to_note(&store, &request("Log", "## Today", InsertMode::Append, "- did X"))
                .unwrap();

        assert_eq!(store.content("Log").unwrap(), "# Log\n## Today\n- did X\nfoo");
        assert_eq!(outcome.offset, 14);
        assert_eq!(outcome.inserted_len, 8);
        assert_eq!(store.writes(), vec!["Log".to_string()]);
    }

    #[test]
    fn missing_section_does_not_write() {
        let store = MemoryStore::new().with_note("Log", "abc");

        let err = add_to_note(&store, &request("Log", "zzz", InsertMode::Append, "x"))
            .unwrap_err();

        assert!(matches!(
            err,
            EntryError::Splice(SpliceError::SectionNotFound { ref marker, ref document })
                if marker == "zzz" && document == "Log"
        ));
        assert_eq!(store.content("Log").unwrap(), "abc");
        assert!(store.writes().is_empty());
    }

    #[test]
    fn missing_note_propagates_store_error() {
        let store = MemoryStore::new();

        let err = add_to_note(&store, &request("Ghost", "", InsertMode::Prepend, "x"))
            .unwrap_err();

        assert!(matches!(err, EntryError::Store(StoreError::DocumentNotFound(ref n)) if n == "Ghost"));
    }

    #[test]
    fn prepend_to_empty_note() {
        let store = MemoryStore::new().with_note("Empty", "");

        add_to_note(&store, &request("Empty", "", InsertMode::Prepend, "first entry"))
            .unwrap();

        assert_eq!(store.content("Empty").unwrap(), "first entry\n");
    }
}
