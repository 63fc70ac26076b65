use axum::Json;
use axum::extract::State;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::domain::AudioBlob;
use crate::infrastructure::observability::{MAX_VISIBLE_CHARS, sanitize_text};
use crate::presentation::state::AppState;

use super::error_response::ApiError;
use super::languages::ensure_supported;

#[derive(Debug, Deserialize)]
pub struct VoiceToTextRequest {
    pub audio_data: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct VoiceToTextResponse {
    pub text: String,
    pub language: String,
    pub confidence_score: f32,
    pub engine: String,
}

/// Strips an optional `data:<mime>;base64,` prefix and decodes the payload.
pub fn decode_audio_payload(payload: &str) -> Result<(Vec<u8>, Option<String>), ApiError> {
    let (content_type, encoded) = match payload.strip_prefix("data:") {
        Some(rest) => {
            let (header, body) = rest
                .split_once(',')
                .ok_or_else(|| ApiError::bad_request("malformed data URL in audio_data"))?;
            let mime = header.trim_end_matches(";base64");
            (Some(mime.to_string()).filter(|m| !m.is_empty()), body)
        }
        None => (None, payload),
    };

    let cleaned: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let data = STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|e| ApiError::bad_request(format!("audio_data is not valid base64: {}", e)))?;
    Ok((data, content_type))
}

#[tracing::instrument(skip(state, request), fields(language = %request.language))]
pub async fn voice_to_text_handler(
    State(state): State<AppState>,
    Json(request): Json<VoiceToTextRequest>,
) -> Result<Json<VoiceToTextResponse>, ApiError> {
    ensure_supported(&state.languages, &request.language)?;

    let (data, content_type) = decode_audio_payload(&request.audio_data)?;
    if content_type
        .as_deref()
        .is_some_and(|mime| !AudioBlob::is_audio_content_type(mime))
    {
        return Err(ApiError::bad_request("File must be an audio file"));
    }
    tracing::debug!(bytes = data.len(), "Voice payload received");

    let result = state
        .recognition_service
        .transcribe(AudioBlob::new(data, content_type), &request.language)
        .await?;

    tracing::info!(
        engine = %result.engine_used,
        text = %sanitize_text(&result.text, MAX_VISIBLE_CHARS),
        "Voice to text completed"
    );

    Ok(Json(VoiceToTextResponse {
        text: result.text,
        language: request.language,
        confidence_score: result.confidence,
        engine: result.engine_used.as_str().to_string(),
    }))
}
