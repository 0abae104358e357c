//! Dictionary sources
//!
//! Provides the embedded sample dictionary and loaders for JSON dictionary files.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE_ENTRIES, SAMPLE_ENTRIES_COUNT};
pub use loader::{
    DictionaryError, DictionaryProvider, EmbeddedProvider, JsonFileProvider, provider_for,
};
