use std::path::PathBuf;

use thiserror::Error;

use crate::splice::Document;

/// A resolved, unique handle to a stored document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    /// Human-readable identifier (the name that was resolved)
    pub id: String,
    /// Location of the document in the store
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("note not found: {0}")]
    DocumentNotFound(String),

    #[error("note name '{name}' is ambiguous ({} candidates)", .candidates.len())]
    DocumentAmbiguous { name: String, candidates: Vec<PathBuf> },

    #[error("vault root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk vault directory {0}: {1}")]
    Walk(String, #[source] walkdir::Error),

    #[error("failed to access note {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read/write access to documents addressed by a human-readable name.
///
/// Implementations must fail with `DocumentNotFound` when no document
/// matches a name and with `DocumentAmbiguous` when more than one does.
pub trait DocumentStore {
    /// Resolve a name to exactly one document.
    fn resolve(&self, name: &str) -> Result<DocumentRef, StoreError>;

    /// Read the full content of a resolved document.
    fn read_document(&self, doc: &DocumentRef) -> Result<Document, StoreError>;

    /// Replace the full content of a resolved document.
    fn write_document(&self, doc: &DocumentRef, content: &str) -> Result<(), StoreError>;
}
