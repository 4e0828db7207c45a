//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (DOM key names to paddle intent)
//! - Storage (LocalStorage on web, in-memory elsewhere)

pub mod input;
pub mod storage;

pub use input::{Command, InputState, Key};
pub use storage::{KeyValueStore, MemoryStore};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
