use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::domain::SynthesisRequest;
use crate::presentation::state::AppState;

use super::error_response::ApiError;
use super::languages::ensure_supported;

pub const AUDIO_ROUTE_PREFIX: &str = "/api/v1/audio";

#[derive(Debug, Deserialize)]
pub struct TextToSpeechRequest {
    pub text: String,
    pub language: String,
    pub voice_speed: Option<f32>,
}

#[derive(Debug, Serialize)]
pub struct TextToSpeechResponse {
    pub audio_url: String,
    pub text: String,
    pub language: String,
    pub duration: f64,
}

#[tracing::instrument(skip(state, request), fields(language = %request.language))]
pub async fn text_to_speech_handler(
    State(state): State<AppState>,
    Json(request): Json<TextToSpeechRequest>,
) -> Result<Json<TextToSpeechResponse>, ApiError> {
    ensure_supported(&state.languages, &request.language)?;

    let synthesis = SynthesisRequest::new(
        request.text.clone(),
        request.language.clone(),
        request.voice_speed,
        state.max_text_chars,
    )?;

    let result = state.synthesis_service.synthesize(&synthesis).await?;

    Ok(Json(TextToSpeechResponse {
        audio_url: format!("{}/{}", AUDIO_ROUTE_PREFIX, result.file_name()),
        text: request.text,
        language: request.language,
        duration: result.duration_secs,
    }))
}
