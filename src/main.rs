use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use bhasha::application::services::{RecognitionService, SynthesisService};
use bhasha::domain::{LanguageCodeMapper, LanguageCodeTable};
use bhasha::infrastructure::audio::{AudioEncoderFactory, FormatDecoder, TempResourceManager};
use bhasha::infrastructure::observability::{TracingConfig, init_tracing};
use bhasha::infrastructure::speech::{
    GoogleSpeechEngine, GoogleTranslateTtsEngine, RecognitionEngineFactory,
};
use bhasha::infrastructure::storage::LocalAudioStore;
use bhasha::presentation::{AppState, HttpSettings, Settings, create_router};

/// Builds every process-wide component from validated settings.
fn bootstrap(settings: &Settings) -> anyhow::Result<AppState> {
    let languages = Arc::new(LanguageCodeTable::builtin());
    let mapper = LanguageCodeMapper::new(Arc::clone(&languages));

    let temp = Arc::new(
        TempResourceManager::new(&settings.storage.temp_dir)
            .context("Failed to create temp directory")?,
    );
    let decoder = Arc::new(FormatDecoder::new(Arc::clone(&temp)));

    let api_key = settings
        .recognition
        .google_api_key
        .clone()
        .context("recognition.google_api_key is required")?;
    let primary = Arc::new(GoogleSpeechEngine::new(
        api_key,
        settings.recognition.google_endpoint.clone(),
    ));

    let fallback_settings = &settings.recognition.fallback;
    let fallback = match RecognitionEngineFactory::create_fallback(
        fallback_settings.provider,
        &fallback_settings.model,
        fallback_settings.api_key.clone(),
        fallback_settings.base_url.clone(),
    ) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::warn!(
                error = %e,
                provider = ?fallback_settings.provider,
                "Offline recognition backend failed to load, continuing without fallback"
            );
            None
        }
    };

    let encoder = AudioEncoderFactory::create(
        settings.synthesis.encoder,
        &settings.synthesis.ffmpeg_binary,
        Arc::clone(&temp),
    )
    .context("Failed to initialize artifact encoder")?;

    let audio_store = Arc::new(
        LocalAudioStore::new(settings.storage.audio_dir.clone())
            .context("Failed to initialize audio store")?,
    );

    let recognition_service = Arc::new(RecognitionService::new(
        decoder.clone(),
        primary,
        fallback,
        mapper.clone(),
    ));

    let synthesis_service = Arc::new(SynthesisService::new(
        Arc::new(GoogleTranslateTtsEngine::new(
            settings.synthesis.endpoint.clone(),
        )),
        decoder,
        encoder,
        audio_store.clone(),
        mapper,
    ));

    Ok(AppState {
        recognition_service,
        synthesis_service,
        audio_store,
        languages,
        app_name: settings.app_name.clone(),
        max_text_chars: settings.synthesis.max_text_chars,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (settings, environment) = Settings::load().context("Failed to load settings")?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            level: settings.logging.level.clone(),
            json_format: settings.logging.enable_json,
        },
        settings.server.port,
    );

    let state = bootstrap(&settings)?;

    let router = create_router(
        state,
        HttpSettings {
            allowed_origins: settings.cors.allowed_origins.clone(),
            max_upload_bytes: settings.limits.max_upload_bytes,
        },
    );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(address = %addr, app_name = %settings.app_name, "Listening");

    axum::serve(listener, router).await?;

    Ok(())
}
