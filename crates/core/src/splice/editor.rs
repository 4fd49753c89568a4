use tracing::debug;

use crate::splice::types::{Document, InsertMode, SpliceError, SpliceResult};

/// Marker-based text insertion.
///
/// All operations are pure: they read the input and return new content,
/// never touching the original.
pub struct SectionedTextEditor;

impl SectionedTextEditor {
    /// Insert a fragment next to the first occurrence of `marker`.
    ///
    /// # Arguments
    /// * `document` - The document to edit
    /// * `marker` - Literal substring to locate (empty means whole document)
    /// * `fragment` - Pre-composed text to insert
    /// * `mode` - Append after the marker, or prepend before it
    ///
    /// # Errors
    /// * `SectionNotFound` - The marker does not occur in the document
    pub fn insert_into_document(
        document: &Document,
        marker: &str,
        fragment: &str,
        mode: InsertMode,
    ) -> Result<SpliceResult, SpliceError> {
        let offset = Self::locate_insertion_offset(document, marker, mode)?;
        let content = Self::splice_content(&document.content, offset, fragment, mode)?;

        debug!(
            document = %document.id,
            marker,
            offset,
            ?mode,
            "spliced fragment into document"
        );

        Ok(SpliceResult { content, offset, inserted_len: fragment.len() + 1 })
    }

    /// Compute the byte offset where a fragment should go.
    ///
    /// Only the first (lowest index) occurrence of `marker` is considered.
    /// Matching is exact and case-sensitive.
    pub fn locate_insertion_offset(
        document: &Document,
        marker: &str,
        mode: InsertMode,
    ) -> Result<usize, SpliceError> {
        if marker.is_empty() {
            return Ok(match mode {
                InsertMode::Append => document.content.len(),
                InsertMode::Prepend => 0,
            });
        }

        let index = document.content.find(marker).ok_or_else(|| {
            SpliceError::SectionNotFound {
                marker: marker.to_string(),
                document: document.id.clone(),
            }
        })?;

        Ok(match mode {
            InsertMode::Append => index + marker.len(),
            InsertMode::Prepend => index,
        })
    }

    /// Splice `fragment` into `content` at `offset`, adding one separator newline.
    ///
    /// Append puts the newline before the fragment, prepend puts it after.
    pub fn splice_content(
        content: &str,
        offset: usize,
        fragment: &str,
        mode: InsertMode,
    ) -> Result<String, SpliceError> {
        if offset > content.len() || !content.is_char_boundary(offset) {
            return Err(SpliceError::InvalidOffset { offset, len: content.len() });
        }

        let (before, after) = content.split_at(offset);
        let mut result = String::with_capacity(content.len() + fragment.len() + 1);
        result.push_str(before);

        match mode {
            InsertMode::Append => {
                result.push('\n');
                result.push_str(fragment);
            }
            InsertMode::Prepend => {
                result.push_str(fragment);
                result.push('\n');
            }
        }

        result.push_str(after);
        Ok(result)
    }

    /// Check whether a marker occurs in the content. An empty marker always does.
    pub fn section_exists(content: &str, marker: &str) -> bool {
        marker.is_empty() || content.contains(marker)
    }
}
