use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::splice::Document;
use crate::store::types::{DocumentRef, DocumentStore, StoreError};

/// In-memory store keyed by note name.
///
/// Every successful write is recorded, so callers can check that a failed
/// operation left the store untouched.
#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: RefCell<BTreeMap<String, String>>,
    writes: RefCell<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a note.
    pub fn with_note(self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.notes.borrow_mut().insert(name.into(), content.into());
        self
    }

    /// Current content of a note, if present.
    pub fn content(&self, name: &str) -> Option<String> {
        self.notes.borrow().get(name).cloned()
    }

    /// Names of notes written so far, in write order.
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl DocumentStore for MemoryStore {
    fn resolve(&self, name: &str) -> Result<DocumentRef, StoreError> {
        if self.notes.borrow().contains_key(name) {
            Ok(DocumentRef { id: name.to_string(), path: PathBuf::from(name) })
        } else {
            Err(StoreError::DocumentNotFound(name.to_string()))
        }
    }

    fn read_document(&self, doc: &DocumentRef) -> Result<Document, StoreError> {
        self.notes
            .borrow()
            .get(&doc.id)
            .map(|content| Document::new(doc.id.clone(), content.clone()))
            .ok_or_else(|| StoreError::DocumentNotFound(doc.id.clone()))
    }

    fn write_document(&self, doc: &DocumentRef, content: &str) -> Result<(), StoreError> {
        self.notes.borrow_mut().insert(doc.id.clone(), content.to_string());
        self.writes.borrow_mut().push(doc.id.clone());
        Ok(())
    }
}
