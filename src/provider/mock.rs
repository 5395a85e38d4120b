//! Mock translation provider for testing
//!
//! This module provides a deterministic, API-free provider for testing
//! the engine without network access. Every call is recorded so tests can
//! assert exactly which `(text, source, target)` requests were issued,
//! including asserting that none were.
//!
//! # Example
//!
//! ```ignore
//! use triple_translate::provider::{TranslationProvider, MockProvider, MockMode};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockProvider::new(MockMode::Suffix);
//!     let result = mock.translate("hello", "en", "fr").await.unwrap();
//!     assert_eq!(result, "hello_fr");
//!     assert_eq!(mock.recorded_calls().len(), 1);
//! }
//! ```

use crate::error::{TranslateError, TranslateResult};
use crate::provider::TranslationProvider;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append target language suffix: "hello" → "hello_fr"
    Suffix,

    /// Use predefined mappings for realistic translations,
    /// `(text, target_lang)` → translation; unknown pairs fall back to
    /// suffix mode
    Mappings(HashMap<(String, String), String>),

    /// Every call fails with the given message
    FailAlways(String),

    /// Calls targeting this language fail; everything else behaves like
    /// `Suffix`. Exercises per-target failure isolation.
    FailTarget(String),

    /// No-op: return input unchanged
    NoOp,
}

/// A single recorded provider invocation: `(text, source, target)`
pub type RecordedCall = (String, String, String);

/// Mock provider that simulates various translation scenarios
#[derive(Debug, Clone)]
pub struct MockProvider {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockProvider {
    /// Create a new MockProvider with the given mode
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            delay_ms: 0,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a MockProvider with simulated network delay
    ///
    /// Each translation call sleeps `delay_ms` milliseconds before
    /// resolving, which lets tests observe the `Translating` status.
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            delay_ms,
            ..Self::new(mode)
        }
    }

    /// All calls issued so far, in invocation order
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    /// Apply translation logic based on the mode
    fn apply_translation(&self, text: &str, _source: &str, target: &str) -> TranslateResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::FailAlways(msg) => Err(TranslateError::ProviderError(msg.clone())),
            MockMode::FailTarget(lang) => {
                if target == lang {
                    Err(TranslateError::NetworkError(format!(
                        "Simulated failure for target {}",
                        lang
                    )))
                } else {
                    Ok(format!("{}_{}", text, target))
                }
            }
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslateResult<String> {
        self.calls.lock().expect("mock call log poisoned").push((
            text.to_string(),
            source_lang.to_string(),
            target_lang.to_string(),
        ));

        self.apply_delay().await;
        self.apply_translation(text, source_lang, target_lang)
    }

    fn provider_name(&self) -> &str {
        "Mock Provider"
    }
}
