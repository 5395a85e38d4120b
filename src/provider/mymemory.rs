//! MyMemory API provider for translation
//!
//! This module integrates with the MyMemory translation API
//! (https://mymemory.translated.net/), a free translation memory service
//! that requires no API key.
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
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```

use crate::error::{TranslateError, TranslateResult};
use crate::provider::{TranslationProvider, normalize_lang, validate_lang};
use async_trait::async_trait;
use serde::Deserialize;

/// MyMemory API provider
///
/// Communicates with the MyMemory REST endpoint to perform real
/// translations. The free tier needs no credentials; an optional contact
/// email raises the daily quota.
#[derive(Clone)]
pub struct MyMemoryProvider {
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Base URL for the MyMemory API
    base_url: String,
    /// Optional contact email sent as the `de` parameter (raises quota)
    contact_email: Option<String>,
}

/// Top-level MyMemory response shape
///
/// Only the fields the provider consumes are modeled; everything else in
/// the payload (match candidates, quota info) is ignored.
#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<MyMemoryPayload>,
    /// Numeric on success, sometimes a string on errors
    #[serde(rename = "responseStatus", default)]
    response_status: serde_json::Value,
    #[serde(rename = "responseDetails", default)]
    response_details: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct MyMemoryPayload {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl MyMemoryResponse {
    /// MyMemory reports its status both as a number and, on some error
    /// paths, as a string.
    fn status_ok(&self) -> bool {
        match &self.response_status {
            serde_json::Value::Null => true,
            v => v.as_u64() == Some(200) || v.as_str() == Some("200"),
        }
    }

    fn details(&self) -> String {
        match &self.response_details {
            serde_json::Value::String(s) if !s.is_empty() => s.clone(),
            serde_json::Value::Null => "no details".to_string(),
            v => v.to_string(),
        }
    }
}

impl MyMemoryProvider {
    /// Maximum characters per request (MyMemory free-tier limit)
    const MAX_CHARS_PER_REQUEST: usize = 500;

    /// Create a new MyMemoryProvider
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(TranslateError)` - If HTTP client creation fails
    pub fn new() -> TranslateResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                TranslateError::NetworkError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: "https://api.mymemory.translated.net/get".to_string(),
            contact_email: None,
        })
    }

    /// Attach a contact email, sent as the `de` query parameter
    ///
    /// MyMemory grants a higher daily character quota to identified
    /// callers.
    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = Some(email.into());
        self
    }

    /// Decode and validate a raw response body
    ///
    /// Separated from the request path so the boundary validation can be
    /// tested without a network.
    fn extract_translation(body: &str) -> TranslateResult<String> {
        let response: MyMemoryResponse = serde_json::from_str(body)
            .map_err(|e| TranslateError::ParseError(format!("Malformed response body: {}", e)))?;

        if !response.status_ok() {
            return Err(TranslateError::ProviderError(format!(
                "MyMemory reported status {}: {}",
                response.response_status,
                response.details()
            )));
        }

        response
            .response_data
            .and_then(|data| data.translated_text)
            .ok_or_else(|| {
                TranslateError::ProviderError(
                    "Response contained no translation data".to_string(),
                )
            })
    }
}

impl std::fmt::Debug for MyMemoryProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MyMemoryProvider")
            .field("base_url", &self.base_url)
            .field("contact_email", &self.contact_email.as_ref().map(|_| "***"))
            .finish()
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryProvider {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslateResult<String> {
        validate_lang(source_lang)?;
        validate_lang(target_lang)?;

        if text.is_empty() {
            return Ok(String::new());
        }

        if text.chars().count() > Self::MAX_CHARS_PER_REQUEST {
            return Err(TranslateError::ProviderError(format!(
                "Text exceeds MyMemory limit of {} characters",
                Self::MAX_CHARS_PER_REQUEST
            )));
        }

        let langpair = format!(
            "{}|{}",
            normalize_lang(source_lang),
            normalize_lang(target_lang)
        );
        let mut query: Vec<(&str, &str)> = vec![("q", text), ("langpair", &langpair)];
        if let Some(email) = &self.contact_email {
            query.push(("de", email));
        }

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| TranslateError::NetworkError(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TranslateError::NetworkError(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            return Err(TranslateError::ProviderError(format!(
                "MyMemory returned HTTP {}: {}",
                status, body
            )));
        }

        Self::extract_translation(&body)
    }

    fn provider_name(&self) -> &str {
        "MyMemory"
    }
}
