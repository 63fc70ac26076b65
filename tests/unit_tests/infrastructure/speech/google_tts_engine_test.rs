use mockito::Matcher;

use bhasha::application::ports::{SynthesisEngine, SynthesisEngineError};
use bhasha::infrastructure::speech::{GoogleTranslateTtsEngine, MAX_CHUNK_CHARS, split_text};

#[test]
fn given_short_text_when_splitting_then_returns_single_chunk() {
    assert_eq!(split_text("  Hello there.  ", MAX_CHUNK_CHARS), vec!["Hello there."]);
}

#[test]
fn given_long_text_when_splitting_then_every_chunk_fits_limit() {
    let text = "This is a sentence, with a clause. ".repeat(20);
    let chunks = split_text(&text, MAX_CHUNK_CHARS);

    assert!(chunks.len() > 1);
    assert!(chunks.iter().all(|c| c.chars().count() <= MAX_CHUNK_CHARS));
    let rejoined: String = chunks.join(" ");
    assert_eq!(
        rejoined.split_whitespace().count(),
        text.split_whitespace().count()
    );
}

#[test]
fn given_punctuation_inside_window_when_splitting_then_cuts_after_punctuation() {
    let chunks = split_text("abc def. ghi jkl", 12);
    assert_eq!(chunks, vec!["abc def.", "ghi jkl"]);
}

#[test]
fn given_unbroken_word_when_splitting_then_hard_splits_on_char_boundaries() {
    let text = "ಕ".repeat(250);
    let chunks = split_text(&text, MAX_CHUNK_CHARS);
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].chars().count(), 100);
    assert_eq!(chunks[2].chars().count(), 50);
}

#[test]
fn given_devanagari_danda_when_splitting_then_breaks_there() {
    let chunks = split_text("नमस्ते। आप कैसे हैं", 10);
    assert_eq!(chunks[0], "नमस्ते।");
}

#[test]
fn given_only_punctuation_when_splitting_then_returns_nothing() {
    assert!(split_text(" ... !!! ", MAX_CHUNK_CHARS).is_empty());
}

#[tokio::test]
async fn given_slow_request_when_synthesizing_then_sends_slow_speed_and_language() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/translate_tts")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("tl".into(), "kn".into()),
            Matcher::UrlEncoded("q".into(), "ನಮಸ್ಕಾರ".into()),
            Matcher::UrlEncoded("ttsspeed".into(), "0.3".into()),
            Matcher::UrlEncoded("client".into(), "tw-ob".into()),
        ]))
        .with_status(200)
        .with_body(b"ID3audio")
        .create_async()
        .await;

    let engine = GoogleTranslateTtsEngine::new(Some(format!("{}/translate_tts", server.url())));

    let audio = engine.synthesize("ನಮಸ್ಕಾರ", "kn", true).await.unwrap();

    assert_eq!(audio, b"ID3audio");
    mock.assert_async().await;
}

#[tokio::test]
async fn given_multi_chunk_text_when_synthesizing_then_concatenates_chunk_audio() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/translate_tts")
        .match_query(Matcher::UrlEncoded("total".into(), "2".into()))
        .with_status(200)
        .with_body(b"ab")
        .expect(2)
        .create_async()
        .await;

    let engine = GoogleTranslateTtsEngine::new(Some(format!("{}/translate_tts", server.url())));
    let text = format!("{}. {}", "a".repeat(80), "b".repeat(80));

    let audio = engine.synthesize(&text, "en", false).await.unwrap();

    assert_eq!(audio, b"abab");
    mock.assert_async().await;
}

#[tokio::test]
async fn given_backend_error_when_synthesizing_then_reports_request_failed() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/translate_tts")
        .match_query(Matcher::Any)
        .with_status(429)
        .create_async()
        .await;

    let engine = GoogleTranslateTtsEngine::new(Some(format!("{}/translate_tts", server.url())));

    let result = engine.synthesize("hello", "en", false).await;

    assert!(matches!(result, Err(SynthesisEngineError::RequestFailed(_))));
}

#[tokio::test]
async fn given_empty_body_when_synthesizing_then_reports_empty_audio() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/translate_tts")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let engine = GoogleTranslateTtsEngine::new(Some(format!("{}/translate_tts", server.url())));

    let result = engine.synthesize("hello", "en", false).await;

    assert!(matches!(result, Err(SynthesisEngineError::EmptyAudio)));
}
