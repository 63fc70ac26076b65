mod google_speech_engine;
mod google_tts_engine;
mod local_whisper_engine;
mod recognition_engine_factory;
mod whisper_server_engine;

pub use google_speech_engine::{
    DEFAULT_GOOGLE_SPEECH_ENDPOINT, GoogleSpeechEngine, parse_speech_response,
};
pub use google_tts_engine::{
    DEFAULT_TTS_ENDPOINT, GoogleTranslateTtsEngine, MAX_CHUNK_CHARS, split_text,
};
pub use local_whisper_engine::LocalWhisperEngine;
pub use recognition_engine_factory::{FallbackProvider, RecognitionEngineFactory};
pub use whisper_server_engine::{
    DEFAULT_WHISPER_SERVER_MODEL, DEFAULT_WHISPER_SERVER_URL, WhisperServerEngine,
};
