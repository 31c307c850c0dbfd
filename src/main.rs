use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voice_clone_backend::controllers::voice::VoiceController;
use voice_clone_backend::domain::voice::VoiceService;
use voice_clone_backend::infrastructure::config::{Config, LogFormat};
use voice_clone_backend::infrastructure::http::start_http_server;
use voice_clone_backend::infrastructure::repositories::ElevenLabsRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration; a missing provider key stops the process here
    let config = Config::from_env()?;

    init_logging(&config);

    tracing::info!(
        "Starting voice clone backend on {}:{}",
        config.host,
        config.port
    );

    tracing::info!(
        base_url = %config.elevenlabs_base_url,
        timeout_secs = config.elevenlabs_timeout_secs,
        max_upload_mb = config.max_upload_mb,
        development = config.is_development(),
        "ElevenLabs configuration loaded"
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate the provider repository (owns the API key)
    let elevenlabs_repo = Arc::new(ElevenLabsRepository::new(
        config.elevenlabs_api_key.clone(),
        config.elevenlabs_base_url.clone(),
        config.elevenlabs_timeout(),
    )?);
    tracing::info!("ElevenLabs client initialized");

    // 2. Instantiate services
    let voice_service = Arc::new(VoiceService::new(elevenlabs_repo));

    // 3. Instantiate controllers
    let voice_controller = Arc::new(VoiceController::new(voice_service));

    start_http_server(config, voice_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "voice_clone_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
