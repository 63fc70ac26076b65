use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::ports::AudioStoreError;
use crate::domain::ArtifactName;
use crate::presentation::state::AppState;

use super::error_response::ApiError;

pub async fn audio_file_handler(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<Response, ApiError> {
    let name = ArtifactName::parse(&file_name)
        .ok_or_else(|| ApiError::not_found("Audio file not found"))?;

    let data = match state.audio_store.fetch(&name).await {
        Ok(data) => data,
        Err(AudioStoreError::NotFound(_)) => {
            return Err(ApiError::not_found("Audio file not found"));
        }
        Err(e) => return Err(ApiError::internal(format!("Failed to read audio file: {}", e))),
    };

    Ok((
        [
            (header::CONTENT_TYPE, name.format().media_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", name.file_name()),
            ),
        ],
        data,
    )
        .into_response())
}

/// Removes a stored artifact once the client is done with it.
pub async fn delete_audio_file_handler(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<StatusCode, ApiError> {
    let name = ArtifactName::parse(&file_name)
        .ok_or_else(|| ApiError::not_found("Audio file not found"))?;

    let size = match state.audio_store.head(&name).await {
        Ok(size) => size,
        Err(AudioStoreError::NotFound(_)) => {
            return Err(ApiError::not_found("Audio file not found"));
        }
        Err(e) => return Err(ApiError::internal(format!("Failed to inspect audio file: {}", e))),
    };

    state
        .audio_store
        .delete(&name)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to delete audio file: {}", e)))?;

    tracing::info!(artifact = %name, bytes = size, "Audio file deleted");
    Ok(StatusCode::NO_CONTENT)
}
