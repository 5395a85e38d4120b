//! Multi-slot simultaneous translation engine
//!
//! This crate implements the state machine behind a multi-slot "type in
//! one language, read in all the others" translator: a fixed grid of
//! language slots where editing any slot fans the text out to every other
//! slot through a pluggable translation provider, debounced, with
//! per-slot loading and error state.
//!
//! # Workflow Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use triple_translate::{EngineConfig, MyMemoryProvider, TranslatorEngine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Pick a provider
//!     let provider = Arc::new(MyMemoryProvider::new()?);
//!
//!     // 2. Build the engine (3 slots: Korean, English, Japanese)
//!     let engine = TranslatorEngine::new(provider, EngineConfig::default());
//!     let mut changes = engine.subscribe();
//!
//!     // 3. Type into the first slot; after the debounce window the
//!     //    other slots fill in
//!     engine.edit_text(0, "안녕");
//!
//!     while changes.changed().await.is_ok() {
//!         for slot in changes.borrow_and_update().iter() {
//!             println!("{}: {}", slot.language, slot.text);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod language;
pub mod provider;
pub mod ui_text;


// Re-export main types for convenient access
pub use engine::{DEFAULT_DEBOUNCE, EngineConfig, SlotSnapshot, SlotStatus, TranslatorEngine};
pub use error::{TranslateError, TranslateResult};
pub use language::Language;
pub use provider::{MockMode, MockProvider, MyMemoryProvider, TranslationProvider};
pub use ui_text::UiText;
