use bhasha::application::ports::RecognitionEngine;
use bhasha::infrastructure::speech::{FallbackProvider, RecognitionEngineFactory};

#[test]
fn given_no_provider_when_creating_fallback_then_returns_none() {
    let engine =
        RecognitionEngineFactory::create_fallback(FallbackProvider::None, "unused", None, None)
            .unwrap();
    assert!(engine.is_none());
}

#[test]
fn given_whisper_server_provider_when_creating_fallback_then_returns_server_engine() {
    let engine = RecognitionEngineFactory::create_fallback(
        FallbackProvider::WhisperServer,
        "whisper-1",
        None,
        Some("http://localhost:9000/v1".to_string()),
    )
    .unwrap()
    .unwrap();
    assert_eq!(engine.name(), "whisper-server");
}

#[test]
fn given_provider_names_when_deserializing_then_snake_case_is_accepted() {
    let provider: FallbackProvider = serde_json::from_str("\"whisper_server\"").unwrap();
    assert_eq!(provider, FallbackProvider::WhisperServer);
    let provider: FallbackProvider = serde_json::from_str("\"local\"").unwrap();
    assert_eq!(provider, FallbackProvider::Local);
}
