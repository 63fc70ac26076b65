use mockito::Matcher;

use bhasha::application::ports::{RecognitionEngine, RecognitionEngineError};
use bhasha::domain::DecodedAudio;
use bhasha::infrastructure::speech::WhisperServerEngine;

fn audio() -> DecodedAudio {
    DecodedAudio::new(vec![0; 1600], 16_000, 1)
}

#[tokio::test]
async fn given_audio_when_recognizing_then_uploads_wav_with_model_and_language() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/audio/transcriptions")
        .match_header("authorization", "Bearer local-key")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("name=\"model\"\r\n\r\nwhisper-small".to_string()),
            Matcher::Regex("name=\"language\"\r\n\r\nta".to_string()),
            Matcher::Regex("filename=\"audio.wav\"".to_string()),
        ]))
        .with_status(200)
        .with_body(" vanakkam \n")
        .create_async()
        .await;

    let engine = WhisperServerEngine::new(
        Some("local-key".to_string()),
        Some(format!("{}/v1", server.url())),
        Some("whisper-small".to_string()),
    );

    let text = engine.recognize(&audio(), "ta").await.unwrap();

    assert_eq!(text, "vanakkam");
    mock.assert_async().await;
}

#[tokio::test]
async fn given_blank_transcript_when_recognizing_then_reports_no_speech() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/audio/transcriptions")
        .with_status(200)
        .with_body("  ")
        .create_async()
        .await;

    let engine = WhisperServerEngine::new(None, Some(server.url()), None);

    let result = engine.recognize(&audio(), "en").await;

    assert!(matches!(result, Err(RecognitionEngineError::NoSpeech)));
}

#[tokio::test]
async fn given_server_failure_when_recognizing_then_reports_unavailable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/audio/transcriptions")
        .with_status(500)
        .with_body("model not loaded")
        .create_async()
        .await;

    let engine = WhisperServerEngine::new(None, Some(server.url()), None);

    let result = engine.recognize(&audio(), "en").await;

    match result {
        Err(RecognitionEngineError::Unavailable(reason)) => {
            assert!(reason.contains("model not loaded"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn given_engine_when_named_then_reports_whisper_server() {
    let engine = WhisperServerEngine::new(None, None, None);
    assert_eq!(engine.name(), "whisper-server");
}
