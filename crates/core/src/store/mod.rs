//! Document store collaborators.
//!
//! The splice engine never reads or writes files itself. These stores
//! resolve a note name to a single document and handle persistence.

pub mod memory;
pub mod types;
pub mod vault;

pub use memory::MemoryStore;
pub use types::{DocumentRef, DocumentStore, StoreError};
pub use vault::VaultStore;
