use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::splice::{InsertMode, SpliceError};
use crate::store::StoreError;

/// A named add-to-note preset loaded from the `[entries]` config table
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EntrySpec {
    /// Note to update (basename or vault-relative path, supports {{var}} placeholders)
    pub note: String,

    /// Literal marker to insert next to; empty means the whole note
    #[serde(default)]
    pub section: String,

    /// Insert after (append) or before (prepend) the marker
    #[serde(default)]
    pub mode: EntryMode,

    /// Text placed before the user input (supports {{var}} placeholders)
    #[serde(default)]
    pub prefix: String,

    /// Text placed after the user input (supports {{var}} placeholders)
    #[serde(default)]
    pub suffix: String,

    /// Prompt shown when asking for input
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Pre-filled input value
    #[serde(default)]
    pub default: String,

    /// Ask for multi-line input
    #[serde(default)]
    pub multiline: bool,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,
}

fn default_prompt() -> String {
    "Entry".to_string()
}

/// Insert mode as written in config (maps to InsertMode)
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryMode {
    #[default]
    Append,
    Prepend,
}

impl From<EntryMode> for InsertMode {
    fn from(mode: EntryMode) -> Self {
        match mode {
            EntryMode::Append => InsertMode::Append,
            EntryMode::Prepend => InsertMode::Prepend,
        }
    }
}

/// One add-to-note operation with an already-composed fragment
#[derive(Debug, Clone)]
pub struct AddRequest {
    pub note: String,
    pub section: String,
    pub mode: InsertMode,
    pub fragment: String,
}

/// What happened after a successful add
#[derive(Debug, Clone)]
pub struct AddOutcome {
    /// Identifier the note was resolved from
    pub note: String,
    /// Location of the updated note
    pub path: PathBuf,
    /// Byte offset of the inserted block
    pub offset: usize,
    /// Length of the inserted block in bytes
    pub inserted_len: usize,
}

#[derive(Debug, Error)]
pub enum EntryError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Splice(#[from] SpliceError),
}
