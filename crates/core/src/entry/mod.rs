pub mod render;
pub mod runner;
pub mod types;

// Re-export primary API
pub use render::{RenderContext, build_render_context, compose_fragment, render_placeholders};
pub use runner::add_to_note;
pub use types::{AddOutcome, AddRequest, EntryError, EntryMode, EntrySpec};
