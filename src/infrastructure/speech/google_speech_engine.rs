use std::cmp::Ordering;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{RecognitionEngine, RecognitionEngineError};
use crate::domain::DecodedAudio;

pub const DEFAULT_GOOGLE_SPEECH_ENDPOINT: &str = "http://www.google.com/speech-api/v2/recognize";

/// Primary recognizer backed by the Google Web Speech v2 endpoint.
pub struct GoogleSpeechEngine {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GoogleSpeechEngine {
    pub fn new(api_key: String, endpoint: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_GOOGLE_SPEECH_ENDPOINT.to_string()),
            api_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SpeechResponse {
    #[serde(default)]
    result: Vec<SpeechResult>,
}

#[derive(Debug, Deserialize)]
struct SpeechResult {
    #[serde(default)]
    alternative: Vec<SpeechAlternative>,
}

#[derive(Debug, Deserialize)]
struct SpeechAlternative {
    transcript: String,
    confidence: Option<f32>,
}

/// Picks the transcript out of the endpoint's newline-delimited JSON body.
///
/// The first line carrying a non-empty result wins; inside it the alternative
/// with the highest reported confidence is chosen, or the first one when none
/// report a confidence.
pub fn parse_speech_response(body: &str) -> Result<Option<String>, RecognitionEngineError> {
    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let response: SpeechResponse = serde_json::from_str(line).map_err(|e| {
            RecognitionEngineError::Unavailable(format!("malformed response: {}", e))
        })?;

        let Some(result) = response.result.into_iter().find(|r| !r.alternative.is_empty()) else {
            continue;
        };

        let best = result
            .alternative
            .iter()
            .filter(|a| a.confidence.is_some())
            .max_by(|a, b| {
                a.confidence
                    .partial_cmp(&b.confidence)
                    .unwrap_or(Ordering::Equal)
            })
            .or_else(|| result.alternative.first());

        if let Some(alternative) = best {
            let transcript = alternative.transcript.trim();
            if !transcript.is_empty() {
                return Ok(Some(transcript.to_string()));
            }
        }
    }
    Ok(None)
}

fn to_big_endian_pcm(audio: &DecodedAudio) -> Vec<u8> {
    audio
        .to_mono()
        .samples()
        .iter()
        .flat_map(|s| s.to_be_bytes())
        .collect()
}

#[async_trait]
impl RecognitionEngine for GoogleSpeechEngine {
    fn name(&self) -> &str {
        "google"
    }

    async fn recognize(
        &self,
        audio: &DecodedAudio,
        language: &str,
    ) -> Result<String, RecognitionEngineError> {
        let body = to_big_endian_pcm(audio);

        tracing::debug!(
            language = language,
            bytes = body.len(),
            sample_rate = audio.sample_rate(),
            "Sending audio to Google speech endpoint"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[
                ("client", "chromium"),
                ("lang", language),
                ("key", self.api_key.as_str()),
                ("pFilter", "0"),
            ])
            .header(
                reqwest::header::CONTENT_TYPE,
                format!("audio/l16; rate={}", audio.sample_rate()),
            )
            .body(body)
            .send()
            .await
            .map_err(|e| RecognitionEngineError::Unavailable(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RecognitionEngineError::Unavailable(format!(
                "status {}: {}",
                status, body
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| RecognitionEngineError::Unavailable(format!("body: {}", e)))?;

        match parse_speech_response(&text)? {
            Some(transcript) => {
                tracing::debug!(chars = transcript.len(), "Google speech recognition completed");
                Ok(transcript)
            }
            None => Err(RecognitionEngineError::NoSpeech),
        }
    }
}
