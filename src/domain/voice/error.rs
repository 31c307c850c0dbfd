use crate::error::AppError;
use crate::infrastructure::repositories::VoiceProviderError;
use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum VoiceServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("provider rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

impl From<VoiceProviderError> for VoiceServiceError {
    fn from(err: VoiceProviderError) -> Self {
        match err {
            VoiceProviderError::Rejected { status, body } => {
                VoiceServiceError::Rejected { status, message: body }
            }
            VoiceProviderError::InvalidRequest(msg) => VoiceServiceError::Invalid(msg),
            VoiceProviderError::Transport(msg) | VoiceProviderError::InvalidResponse(msg) => {
                VoiceServiceError::Unavailable(msg)
            }
        }
    }
}

impl From<VoiceServiceError> for AppError {
    fn from(err: VoiceServiceError) -> Self {
        match err {
            VoiceServiceError::Invalid(msg) => AppError::BadRequest(msg),
            VoiceServiceError::Rejected { status, message } => AppError::Upstream {
                // Only 4xx/5xx provider statuses are passed through
                status: StatusCode::from_u16(status)
                    .ok()
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            },
            VoiceServiceError::Unavailable(msg) => AppError::BadGateway(msg),
        }
    }
}
