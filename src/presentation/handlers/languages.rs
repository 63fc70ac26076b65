use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::domain::LanguageCodeTable;
use crate::presentation::state::AppState;

use super::error_response::ApiError;

const MIN_CODE_LEN: usize = 2;
const MAX_CODE_LEN: usize = 5;

#[derive(Serialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    pub native_name: String,
}

pub async fn languages_handler(State(state): State<AppState>) -> Json<Vec<LanguageInfo>> {
    Json(
        state
            .languages
            .entries()
            .iter()
            .map(|e| LanguageInfo {
                code: e.code.to_string(),
                name: e.name.to_string(),
                native_name: e.native_name.to_string(),
            })
            .collect(),
    )
}

/// Rejects codes outside 2..=5 chars or missing from the supported table.
pub fn ensure_supported(table: &LanguageCodeTable, code: &str) -> Result<(), ApiError> {
    let len = code.chars().count();
    if !(MIN_CODE_LEN..=MAX_CODE_LEN).contains(&len) {
        return Err(ApiError::bad_request(format!(
            "language must be {} to {} characters",
            MIN_CODE_LEN, MAX_CODE_LEN
        )));
    }
    if !table.contains(code) {
        return Err(ApiError::unsupported_language(code));
    }
    Ok(())
}
