pub mod elevenlabs_repository;
pub mod voice_cloning_repository;

pub use elevenlabs_repository::ElevenLabsRepository;
pub use voice_cloning_repository::{VoiceCloningRepository, VoiceProviderError};
