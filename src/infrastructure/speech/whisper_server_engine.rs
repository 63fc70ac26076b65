use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{RecognitionEngine, RecognitionEngineError};
use crate::domain::DecodedAudio;
use crate::infrastructure::audio::encode_wav_bytes;

pub const DEFAULT_WHISPER_SERVER_URL: &str = "http://localhost:8080/v1";
pub const DEFAULT_WHISPER_SERVER_MODEL: &str = "whisper-1";

/// Offline recognizer that talks to a self-hosted OpenAI-compatible
/// transcription server.
pub struct WhisperServerEngine {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl WhisperServerEngine {
    /// `base_url` defaults to a server on this host, so recognition keeps
    /// working when the primary backend's network is down.
    pub fn new(api_key: Option<String>, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_WHISPER_SERVER_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_WHISPER_SERVER_MODEL.to_string()),
        }
    }
}

#[async_trait]
impl RecognitionEngine for WhisperServerEngine {
    fn name(&self) -> &str {
        "whisper-server"
    }

    async fn recognize(
        &self,
        audio: &DecodedAudio,
        language: &str,
    ) -> Result<String, RecognitionEngineError> {
        let url = format!("{}/audio/transcriptions", self.base_url.trim_end_matches('/'));

        let wav = encode_wav_bytes(audio)
            .map_err(|e| RecognitionEngineError::Unavailable(format!("wav: {}", e)))?;

        let file_part = multipart::Part::bytes(wav)
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| RecognitionEngineError::Unavailable(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("language", language.to_string())
            .text("response_format", "text")
            .part("file", file_part);

        tracing::debug!(model = %self.model, language = language, "Sending audio to Whisper server");

        let mut request = self.client.post(&url).multipart(form);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
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

        let transcript = response
            .text()
            .await
            .map_err(|e| RecognitionEngineError::Unavailable(format!("body: {}", e)))?;

        let transcript = transcript.trim();
        if transcript.is_empty() {
            return Err(RecognitionEngineError::NoSpeech);
        }

        tracing::debug!(chars = transcript.len(), "Whisper server recognition completed");

        Ok(transcript.to_string())
    }
}
