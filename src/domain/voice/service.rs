use super::error::VoiceServiceError;
use super::model::{CloneRequest, CloneResult};
use crate::infrastructure::repositories::VoiceCloningRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct VoiceService {
    provider: Arc<dyn VoiceCloningRepository>,
}

impl VoiceService {
    pub fn new(provider: Arc<dyn VoiceCloningRepository>) -> Self {
        Self { provider }
    }
}

#[async_trait]
pub trait VoiceServiceApi: Send + Sync {
    /// Create an instant voice clone from the uploaded samples
    ///
    /// The provider is called exactly once; failures are never retried.
    async fn clone_voice(&self, request: CloneRequest) -> Result<CloneResult, VoiceServiceError>;
}

#[async_trait]
impl VoiceServiceApi for VoiceService {
    async fn clone_voice(&self, request: CloneRequest) -> Result<CloneResult, VoiceServiceError> {
        tracing::info!(
            name = %request.name,
            file_count = request.files.len(),
            total_bytes = request.total_bytes(),
            remove_background_noise = request.remove_background_noise,
            "Voice clone request"
        );

        let name = request.name.clone();
        let result = self.provider.add_voice(request).await.map_err(|e| {
            tracing::warn!(error = %e, name = %name, "Voice provider call failed");
            VoiceServiceError::from(e)
        })?;

        tracing::info!(
            voice_id = %result.voice_id,
            requires_verification = result.requires_verification,
            "Voice clone created"
        );

        Ok(result)
    }
}
