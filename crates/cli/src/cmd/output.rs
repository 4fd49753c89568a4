//! Success and failure reporting for note edits.

use marksplice_core::entry::{AddOutcome, EntryError};
use marksplice_core::splice::{InsertMode, SpliceError};
use marksplice_core::store::StoreError;
use serde::Serialize;

/// Result of an add, as printed with `--json`.
#[derive(Debug, Serialize)]
pub struct AddOutput {
    pub note: String,
    pub path: String,
    pub section: String,
    pub mode: &'static str,
    pub offset: usize,
    pub inserted_len: usize,
}

impl AddOutput {
    pub fn new(outcome: &AddOutcome, section: &str, mode: InsertMode) -> Self {
        Self {
            note: outcome.note.clone(),
            path: outcome.path.to_string_lossy().to_string(),
            section: section.to_string(),
            mode: match mode {
                InsertMode::Append => "append",
                InsertMode::Prepend => "prepend",
            },
            offset: outcome.offset,
            inserted_len: outcome.inserted_len,
        }
    }
}

pub fn print_success(command: &str, output: &AddOutput, json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(output).unwrap_or_default());
        return;
    }

    println!("OK   msp {command}");
    println!("note:    {}", output.note);
    println!("path:    {}", output.path);
    if output.section.is_empty() {
        println!("section: (whole note, {})", output.mode);
    } else {
        println!("section: {} ({})", output.section, output.mode);
    }
}

/// Print a user-facing explanation of an add failure to stderr.
pub fn report_error(err: &EntryError) {
    match err {
        EntryError::Store(StoreError::DocumentNotFound(name)) => {
            eprintln!("Note not found: {name}");
        }
        EntryError::Store(StoreError::DocumentAmbiguous { name, candidates }) => {
            eprintln!("Note name is ambiguous: {name}");
            eprintln!("Matching notes (use a vault-relative path instead):");
            for c in candidates {
                eprintln!("  - {}", c.display());
            }
        }
        EntryError::Store(other) => {
            eprintln!("Failed to access note: {other}");
        }
        EntryError::Splice(SpliceError::SectionNotFound { marker, document }) => {
            eprintln!("Section not found: '{marker}' in note '{document}'");
            eprintln!("The note was not modified.");
        }
        EntryError::Splice(other) => {
            eprintln!("Internal error while inserting: {other}");
        }
    }
}
