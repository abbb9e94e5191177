//! Persisted settings: the key/value store seam and the editing session.

mod file;
mod memory;
mod session;
mod store;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use session::SettingsSession;
pub use store::{load_document, SettingsStore};
