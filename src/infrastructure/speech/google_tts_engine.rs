use async_trait::async_trait;

use crate::application::ports::{SynthesisEngine, SynthesisEngineError};

pub const DEFAULT_TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";
/// Longest chunk the endpoint accepts in one request.
pub const MAX_CHUNK_CHARS: usize = 100;

const NORMAL_SPEED: &str = "1";
const SLOW_SPEED: &str = "0.3";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
const BREAK_PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '¡', '¿', '…', '—', '(', ')', '[', ']', '"', '\n', '。', '，',
    '、', '！', '？', '।', '॥', '؟', '،',
];

/// Synthesizer speaking to the Google Translate TTS endpoint, one MP3 request
/// per text chunk.
pub struct GoogleTranslateTtsEngine {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslateTtsEngine {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_TTS_ENDPOINT.to_string()),
        }
    }
}

/// Splits `text` into chunks of at most `max_chars` characters, cutting after
/// punctuation where possible, then at whitespace, then anywhere.
/// Chunks without any alphanumeric character are dropped.
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut rest = text.trim();

    while rest.chars().count() > max_chars {
        let limit = rest
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let window = &rest[..limit];

        let cut = last_break(window, |c| BREAK_PUNCTUATION.contains(&c))
            .or_else(|| last_break(window, char::is_whitespace))
            .unwrap_or(limit);

        push_chunk(&mut chunks, &rest[..cut]);
        rest = rest[cut..].trim_start();
    }
    push_chunk(&mut chunks, rest);

    chunks
}

/// Byte offset just past the last char in `window` matching `pred`.
fn last_break(window: &str, pred: impl Fn(char) -> bool) -> Option<usize> {
    window
        .char_indices()
        .filter(|&(_, c)| pred(c))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .filter(|&end| end > 0)
}

fn push_chunk(chunks: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if piece.chars().any(char::is_alphanumeric) {
        chunks.push(piece.to_string());
    }
}

#[async_trait]
impl SynthesisEngine for GoogleTranslateTtsEngine {
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        slow: bool,
    ) -> Result<Vec<u8>, SynthesisEngineError> {
        let chunks = split_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(SynthesisEngineError::RequestFailed(
                "no speakable text".to_string(),
            ));
        }

        let speed = if slow { SLOW_SPEED } else { NORMAL_SPEED };
        let total = chunks.len().to_string();
        let mut audio = Vec::new();

        tracing::debug!(
            language = language,
            chunks = chunks.len(),
            slow = slow,
            "Requesting speech from Google TTS endpoint"
        );

        for (idx, chunk) in chunks.iter().enumerate() {
            let idx = idx.to_string();
            let textlen = chunk.chars().count().to_string();

            let response = self
                .client
                .get(&self.endpoint)
                .header(reqwest::header::USER_AGENT, USER_AGENT)
                .query(&[
                    ("ie", "UTF-8"),
                    ("client", "tw-ob"),
                    ("tl", language),
                    ("q", chunk.as_str()),
                    ("ttsspeed", speed),
                    ("total", total.as_str()),
                    ("idx", idx.as_str()),
                    ("textlen", textlen.as_str()),
                ])
                .send()
                .await
                .map_err(|e| SynthesisEngineError::RequestFailed(format!("request: {}", e)))?;

            if !response.status().is_success() {
                let status = response.status();
                return Err(SynthesisEngineError::RequestFailed(format!(
                    "chunk {} of {}: status {}",
                    idx, total, status
                )));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| SynthesisEngineError::RequestFailed(format!("body: {}", e)))?;
            audio.extend_from_slice(&bytes);
        }

        if audio.is_empty() {
            return Err(SynthesisEngineError::EmptyAudio);
        }

        tracing::debug!(bytes = audio.len(), "Google TTS synthesis completed");

        Ok(audio)
    }
}
