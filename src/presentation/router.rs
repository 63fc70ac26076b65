use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    audio_file_handler, delete_audio_file_handler, health_handler, languages_handler,
    speech_to_text_handler, text_to_speech_handler, voice_to_text_handler,
};
use crate::presentation::state::AppState;

/// HTTP concerns the router needs beyond the application state.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(origin = %o, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(origins)
}

pub fn create_router(state: AppState, http: HttpSettings) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let api = Router::new()
        .route("/health", get(health_handler))
        .route("/languages", get(languages_handler))
        .route("/voice-to-text", post(voice_to_text_handler))
        .route("/speech-to-text", post(speech_to_text_handler))
        .route("/text-to-speech", post(text_to_speech_handler))
        .route(
            "/audio/{file_name}",
            get(audio_file_handler).delete(delete_audio_file_handler),
        );

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", api)
        .layer(DefaultBodyLimit::max(http.max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors_layer(&http.allowed_origins))
        .with_state(state)
}
