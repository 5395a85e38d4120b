/// Error types for translation operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The request never completed (DNS, connect, timeout, dropped connection)
    NetworkError(String),
    /// A response arrived but carried no usable translation data
    ProviderError(String),
    /// The response body could not be decoded into the expected shape
    ParseError(String),
    /// A language code outside the supported set
    InvalidLanguage(String),
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            TranslateError::ProviderError(msg) => write!(f, "Provider error: {}", msg),
            TranslateError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            TranslateError::InvalidLanguage(msg) => write!(f, "Invalid language: {}", msg),
        }
    }
}

impl std::error::Error for TranslateError {}

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;
