use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::domain::AudioBlob;
use crate::infrastructure::observability::{MAX_VISIBLE_CHARS, sanitize_text};
use crate::presentation::state::AppState;

use super::error_response::ApiError;
use super::languages::ensure_supported;

const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Serialize)]
pub struct SpeechToTextResponse {
    pub text: String,
    pub transcription: String,
    pub language: String,
    pub confidence_score: f32,
    pub engine: String,
    pub filename: Option<String>,
}

struct Upload {
    data: Vec<u8>,
    content_type: Option<String>,
    filename: Option<String>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn speech_to_text_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SpeechToTextResponse>, ApiError> {
    let mut upload: Option<Upload> = None;
    let mut language = DEFAULT_LANGUAGE.to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read multipart: {}", e)))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("audio") => {
                let content_type = field.content_type().map(str::to_string);
                let filename = field.file_name().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read file: {}", e)))?;
                upload = Some(Upload {
                    data: data.to_vec(),
                    content_type,
                    filename,
                });
            }
            Some("language") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read language: {}", e)))?;
                let value = value.trim();
                if !value.is_empty() {
                    language = value.to_string();
                }
            }
            other => {
                tracing::debug!(field = ?other, "Ignoring unknown multipart field");
            }
        }
    }

    ensure_supported(&state.languages, &language)?;

    let upload = upload.ok_or_else(|| ApiError::bad_request("No audio file uploaded"))?;

    let is_audio = upload
        .content_type
        .as_deref()
        .is_some_and(AudioBlob::is_audio_content_type);
    if !is_audio {
        return Err(ApiError::bad_request("File must be an audio file"));
    }

    tracing::debug!(
        filename = ?upload.filename,
        content_type = ?upload.content_type,
        bytes = upload.data.len(),
        "Audio upload received"
    );

    let result = state
        .recognition_service
        .transcribe(AudioBlob::new(upload.data, upload.content_type), &language)
        .await?;

    tracing::info!(
        engine = %result.engine_used,
        text = %sanitize_text(&result.text, MAX_VISIBLE_CHARS),
        "Speech to text completed"
    );

    Ok(Json(SpeechToTextResponse {
        transcription: result.text.clone(),
        text: result.text,
        language,
        confidence_score: result.confidence,
        engine: result.engine_used.as_str().to_string(),
        filename: upload.filename,
    }))
}
