use thiserror::Error;

/// Which side of the insertion point the fragment attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertMode {
    /// Insert immediately after the marker (or at the end of the document)
    #[default]
    Append,
    /// Insert immediately before the marker (or at the start of the document)
    Prepend,
}

/// A document to edit, plus the identifier used when reporting errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Opaque identifier (note name or path)
    pub id: String,
    /// Full text content
    pub content: String,
}

impl Document {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self { id: id.into(), content: content.into() }
    }
}

/// Result of a successful insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceResult {
    /// The new document content
    pub content: String,
    /// Byte offset where the inserted block starts
    pub offset: usize,
    /// Length in bytes of the inserted block (fragment plus separator newline)
    pub inserted_len: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpliceError {
    #[error("section '{marker}' not found in note '{document}'")]
    SectionNotFound { marker: String, document: String },

    #[error("invalid insertion offset {offset} for document of length {len}")]
    InvalidOffset { offset: usize, len: usize },
}
