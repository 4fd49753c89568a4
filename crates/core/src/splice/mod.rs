pub mod editor;
pub mod types;

// Re-export primary API
pub use editor::SectionedTextEditor;
pub use types::{Document, InsertMode, SpliceError, SpliceResult};
