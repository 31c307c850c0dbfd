use crate::domain::voice::{CloneRequest, CloneResult};
use async_trait::async_trait;

/// Failure modes of a voice cloning provider
#[derive(Debug, Clone, thiserror::Error)]
pub enum VoiceProviderError {
    /// The provider answered with a non-success HTTP status
    #[error("{body}")]
    Rejected { status: u16, body: String },
    /// The request never produced a response (connect failure, timeout, ...)
    #[error("{0}")]
    Transport(String),
    /// The request could not be encoded for the provider
    #[error("{0}")]
    InvalidRequest(String),
    /// The provider answered with success but the body could not be understood
    #[error("{0}")]
    InvalidResponse(String),
}

/// Repository for voice cloning operations.
/// Abstracts the underlying provider (ElevenLabs today).
///
/// Implementations must:
/// - Forward every sample in the order given, with its file name and content type
/// - Issue exactly one provider call per invocation, without retrying
/// - Leave audio validation to the provider
#[async_trait]
pub trait VoiceCloningRepository: Send + Sync {
    /// Create a voice clone from the request's samples
    ///
    /// # Errors
    /// Returns [`VoiceProviderError`] if the provider rejects the request or is unreachable
    async fn add_voice(&self, request: CloneRequest) -> Result<CloneResult, VoiceProviderError>;
}
