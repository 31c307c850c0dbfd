use super::voice_cloning_repository::{VoiceCloningRepository, VoiceProviderError};
use crate::domain::voice::{AudioSample, CloneRequest, CloneResult};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;

const ADD_VOICE_PATH: &str = "/v1/voices/add";
const API_KEY_HEADER: &str = "xi-api-key";

/// Body returned by `POST /v1/voices/add`
#[derive(Debug, Deserialize)]
struct AddVoiceResponse {
    voice_id: String,
    #[serde(default)]
    requires_verification: bool,
}

/// ElevenLabs instant voice cloning implementation of the voice cloning repository
pub struct ElevenLabsRepository {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ElevenLabsRepository {
    pub fn new(
        api_key: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn add_voice_url(&self) -> String {
        format!("{}{}", self.base_url, ADD_VOICE_PATH)
    }

    /// Build the multipart body: text fields first, then one `files` part per sample
    fn build_form(request: CloneRequest) -> Result<Form, VoiceProviderError> {
        let mut form = Form::new().text("name", request.name).text(
            "remove_background_noise",
            request.remove_background_noise.to_string(),
        );

        if let Some(description) = request.description {
            form = form.text("description", description);
        }

        for AudioSample {
            file_name,
            content_type,
            data,
        } in request.files
        {
            let part = Part::bytes(data)
                .file_name(file_name.clone())
                .mime_str(&content_type)
                .map_err(|e| {
                    VoiceProviderError::InvalidRequest(format!(
                        "Invalid content type '{}' for {}: {}",
                        content_type, file_name, e
                    ))
                })?;
            form = form.part("files", part);
        }

        Ok(form)
    }
}

#[async_trait]
impl VoiceCloningRepository for ElevenLabsRepository {
    async fn add_voice(&self, request: CloneRequest) -> Result<CloneResult, VoiceProviderError> {
        tracing::debug!(
            url = %self.add_voice_url(),
            file_count = request.files.len(),
            "Sending ElevenLabs add voice request"
        );

        let form = Self::build_form(request)?;

        let response = self
            .http_client
            .post(self.add_voice_url())
            .header(API_KEY_HEADER, &self.api_key)
            .header("Accept", "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    VoiceProviderError::Transport(format!("ElevenLabs request timed out: {}", e))
                } else if e.is_connect() {
                    VoiceProviderError::Transport(format!("Cannot connect to ElevenLabs: {}", e))
                } else {
                    VoiceProviderError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = %status.as_u16(), body = %body, "ElevenLabs rejected add voice");
            return Err(VoiceProviderError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response.json::<AddVoiceResponse>().await.map_err(|e| {
            VoiceProviderError::InvalidResponse(format!(
                "Failed to parse ElevenLabs response: {}",
                e
            ))
        })?;

        Ok(CloneResult {
            voice_id: parsed.voice_id,
            requires_verification: parsed.requires_verification,
        })
    }
}
