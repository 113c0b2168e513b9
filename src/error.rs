use thiserror::Error;

/// Failure of the key-value port backing the persistent store.
#[derive(Debug, Error)]
pub enum KvError {
    #[error("key-value store lock poisoned during {0}")]
    LockPoisoned(&'static str),
    #[error("key-value store i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("key-value store file is corrupt: {0}")]
    Corrupt(String),
    #[error("key-value store quota exceeded writing {key} ({bytes} bytes)")]
    QuotaExceeded { key: String, bytes: usize },
}

/// Error type for story store writes.
///
/// Reads never fail: corrupt or unreadable data degrades to an empty custom
/// list. Writes surface their failure here (and in the log).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize stories: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Kv(#[from] KvError),
}

/// Error type for the generative-AI services.
#[cfg(feature = "genai")]
#[derive(Debug, Error)]
pub enum GenAiError {
    /// The service no longer recognises the credential (expired or revoked key).
    #[error("Requested entity was not found")]
    EntityNotFound,
    #[error("no API key configured")]
    MissingApiKey,
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service returned {status}: {message}")]
    Service { status: u16, message: String },
    #[error("no response from AI")]
    EmptyResponse,
    #[error("malformed AI response: {0}")]
    MalformedResponse(String),
}

/// Error type for image embedding.
#[cfg(feature = "media")]
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("error while loading the image (via the `image` crate): {0}")]
    Image(#[from] image::ImageError),
    #[error("max dimension must be greater than zero")]
    InvalidDimension,
}

/// Failure of the host's credential-selection capability.
#[cfg(feature = "genai")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("credential selection is not supported in this environment")]
    Unsupported,
    #[error("credential selection failed: {0}")]
    Rejected(String),
}

/// User-facing failures of the image studio. The messages are shown as-is.
#[cfg(feature = "genai")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudioError {
    #[error("AI Studio environment not detected.")]
    Unsupported,
    #[error("Failed to select API key.")]
    CredentialRejected,
    #[error("Select an API key to start.")]
    NotConnected,
    #[error("API Key session expired or invalid. Please reconnect.")]
    SessionExpired,
    #[error("No image generated.")]
    NoImage,
    #[error("Failed to generate image. Please try again.")]
    GenerationFailed,
}
