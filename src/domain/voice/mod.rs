pub mod error;
pub mod model;
pub mod service;

pub use error::VoiceServiceError;
pub use model::{AudioSample, CloneRequest, CloneResult};
pub use service::{VoiceService, VoiceServiceApi};
