//! Translation provider trait and utilities
//!
//! This module defines the `TranslationProvider` trait for provider
//! abstraction, enabling support for different translation backends
//! (MyMemory, mock, etc.) without coupling the engine to any specific
//! implementation.
//!
//! # Example
//!
//! ```ignore
//! use triple_translate::provider::{TranslationProvider, MyMemoryProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = MyMemoryProvider::new()?;
//!     let result = provider.translate("안녕", "ko", "en").await?;
//!     println!("{}", result); // "Hello"
//!     Ok(())
//! }
//! ```

pub mod mock;
pub mod mymemory;

pub use mock::{MockMode, MockProvider};
pub use mymemory::MyMemoryProvider;

use crate::error::{TranslateError, TranslateResult};
use async_trait::async_trait;

/// Generic trait for translation providers
///
/// Implementations of this trait handle the actual translation work,
/// whether through an API (MyMemory) or deterministic logic (mock).
///
/// All methods are async to support I/O-bound operations like network
/// requests. There is no retry built in; each call either yields the
/// translated text or fails once.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate a single text string from source to target language
    ///
    /// # Arguments
    ///
    /// * `text` - The text to translate (any Unicode, including CJK/RTL)
    /// * `source_lang` - Source language code (e.g., "ko")
    /// * `target_lang` - Target language code (e.g., "en")
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The translated text
    /// * `Err(TranslateError)` - If translation fails
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslateResult<String>;

    /// Get the name of this translation provider
    ///
    /// Used for logging and debugging to identify which provider handled
    /// a translation.
    fn provider_name(&self) -> &str;
}

/// Normalize a language code by stripping region information
///
/// Converts codes from BCP 47 format to ISO 639-1 format:
/// - `en-US` → `en`
/// - `zh-Hans` → `zh`
/// - `en` → `en` (unchanged)
pub fn normalize_lang(code: &str) -> String {
    code.split('-').next().unwrap_or(code).to_lowercase()
}

/// Validate that a language code is in acceptable format
///
/// Checks that the code contains only alphanumeric characters, hyphens,
/// and underscores (following ISO 639 conventions).
pub fn validate_lang(code: &str) -> TranslateResult<()> {
    if code.is_empty() {
        return Err(TranslateError::InvalidLanguage(
            "Language code is empty".to_string(),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(TranslateError::InvalidLanguage(format!(
            "Invalid characters in language code: {}",
            code
        )));
    }

    Ok(())
}
