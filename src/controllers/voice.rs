use axum::{
    extract::{
        multipart::{Field, MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    domain::voice::{AudioSample, CloneRequest, CloneResult, VoiceService, VoiceServiceApi},
    error::{AppError, AppResult},
};

/// Raw multipart fields for POST /api/voice/clone, before validation
#[derive(Debug, Default)]
pub struct CloneVoiceForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub remove_background_noise: Option<String>,
    pub files: Vec<AudioSample>,
}

impl CloneVoiceForm {
    /// Read every field of the multipart body; unknown fields are skipped
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error("multipart field", e))?
        {
            let field_name = field.name().unwrap_or_default().to_string();

            match field_name.as_str() {
                "name" => form.name = Some(read_text(field, "name").await?),
                "description" => form.description = Some(read_text(field, "description").await?),
                "remove_background_noise" => {
                    form.remove_background_noise =
                        Some(read_text(field, "remove_background_noise").await?)
                }
                "files" => {
                    let file_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| multipart_error("file", e))?
                        .to_vec();

                    // Browsers send an unnamed, empty part when no file was picked
                    if is_unselected_file(file_name.as_deref(), &data) {
                        tracing::debug!("Skipping empty file part with no file name");
                        continue;
                    }

                    form.files.push(AudioSample::new(file_name, content_type, data));
                }
                other => {
                    tracing::debug!(field = %other, "Ignoring unknown multipart field");
                }
            }
        }

        Ok(form)
    }

    /// Validate the form into a clone request
    pub fn into_request(self) -> AppResult<CloneRequest> {
        let remove_background_noise = match self.remove_background_noise.as_deref() {
            None => false,
            Some(raw) => parse_form_bool(raw).ok_or_else(|| {
                AppError::BadRequest(format!(
                    "remove_background_noise must be a boolean, got '{}'",
                    raw
                ))
            })?,
        };

        CloneRequest::new(
            self.name.unwrap_or_default(),
            self.description,
            remove_background_noise,
            self.files,
        )
        .map_err(AppError::BadRequest)
    }
}

async fn read_text(field: Field<'_>, label: &str) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| multipart_error(label, e))
}

fn is_unselected_file(file_name: Option<&str>, data: &[u8]) -> bool {
    file_name.map_or(true, str::is_empty) && data.is_empty()
}

/// Rejections raised before the body is read (wrong content type, missing boundary)
fn multipart_rejection(rejection: MultipartRejection) -> AppError {
    let message = rejection.body_text();
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::BadRequest(message)
    }
}

/// Body limit violations keep their 413; every other read failure is the client's fault
fn multipart_error(label: &str, err: MultipartError) -> AppError {
    let message = format!("Failed to read {}: {}", label, err.body_text());
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::BadRequest(message)
    }
}

/// Parse a form boolean the way HTML form clients send them
pub fn parse_form_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub struct VoiceController {
    voice_service: Arc<VoiceService>,
}

impl VoiceController {
    pub fn new(voice_service: Arc<VoiceService>) -> Self {
        Self { voice_service }
    }

    /// POST /api/voice/clone - Create a voice clone from uploaded audio
    pub async fn clone_voice(
        State(controller): State<Arc<VoiceController>>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> AppResult<Json<CloneResult>> {
        let multipart = multipart.map_err(multipart_rejection)?;
        let request = CloneVoiceForm::from_multipart(multipart)
            .await?
            .into_request()?;

        let result = controller.voice_service.clone_voice(request).await?;

        Ok(Json(result))
    }
}
