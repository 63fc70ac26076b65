mod audio_file;
mod error_response;
mod health;
mod languages;
mod speech_to_text;
mod text_to_speech;
mod voice_to_text;

pub use audio_file::{audio_file_handler, delete_audio_file_handler};
pub use error_response::{ApiError, ErrorResponse};
pub use health::{HealthResponse, health_handler};
pub use languages::{LanguageInfo, ensure_supported, languages_handler};
pub use speech_to_text::{SpeechToTextResponse, speech_to_text_handler};
pub use text_to_speech::{
    AUDIO_ROUTE_PREFIX, TextToSpeechRequest, TextToSpeechResponse, text_to_speech_handler,
};
pub use voice_to_text::{
    VoiceToTextRequest, VoiceToTextResponse, decode_audio_payload, voice_to_text_handler,
};
