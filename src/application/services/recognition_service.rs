use std::sync::Arc;

use crate::application::ports::{AudioDecoder, RecognitionEngine, RecognitionEngineError};
use crate::domain::{AudioBlob, DecodedAudio, EngineKind, LanguageCodeMapper, RecognitionResult};

use super::noise_calibration::calibrate_ambient_noise;
use super::speech_error::SpeechError;

/// Heuristic confidence for the primary backend, which reports none.
pub const PRIMARY_CONFIDENCE: f32 = 0.85;
/// Heuristic confidence for the offline backend.
pub const FALLBACK_CONFIDENCE: f32 = 0.70;

pub struct RecognitionService {
    decoder: Arc<dyn AudioDecoder>,
    primary: Arc<dyn RecognitionEngine>,
    fallback: Option<Arc<dyn RecognitionEngine>>,
    mapper: LanguageCodeMapper,
}

impl RecognitionService {
    pub fn new(
        decoder: Arc<dyn AudioDecoder>,
        primary: Arc<dyn RecognitionEngine>,
        fallback: Option<Arc<dyn RecognitionEngine>>,
        mapper: LanguageCodeMapper,
    ) -> Self {
        Self {
            decoder,
            primary,
            fallback,
            mapper,
        }
    }

    /// Decodes a client blob and recognizes the speech in it.
    pub async fn transcribe(
        &self,
        blob: AudioBlob,
        language: &str,
    ) -> Result<RecognitionResult, SpeechError> {
        let audio = self.decode(blob).await?;
        self.recognize(audio, language).await
    }

    pub async fn decode(&self, blob: AudioBlob) -> Result<DecodedAudio, SpeechError> {
        let decoder = Arc::clone(&self.decoder);
        tracing::debug!(
            bytes = blob.len(),
            content_type = blob.content_type().unwrap_or("unknown"),
            "Decoding audio blob"
        );

        tokio::task::spawn_blocking(move || decoder.decode(&blob))
            .await
            .map_err(|e| SpeechError::Decode(format!("decoder task failed: {}", e)))?
            .map_err(|e| SpeechError::Decode(e.to_string()))
    }

    #[tracing::instrument(skip(self, audio), fields(frames = audio.frames()))]
    pub async fn recognize(
        &self,
        audio: DecodedAudio,
        language: &str,
    ) -> Result<RecognitionResult, SpeechError> {
        let audio = calibrate_ambient_noise(&audio);
        let locale = self.mapper.to_recognition_locale(language);

        let reason = match self.primary.recognize(&audio, &locale).await {
            Ok(text) => return finish(text, PRIMARY_CONFIDENCE, EngineKind::Primary),
            Err(RecognitionEngineError::NoSpeech) => return Err(SpeechError::UnintelligibleAudio),
            Err(RecognitionEngineError::Unavailable(reason)) => reason,
        };

        tracing::warn!(
            engine = self.primary.name(),
            error = %reason,
            "Primary recognition backend unavailable"
        );

        let Some(fallback) = &self.fallback else {
            return Err(SpeechError::ServiceUnavailable(reason));
        };

        tracing::info!(engine = fallback.name(), "Retrying with offline recognition backend");

        match fallback.recognize(&audio, language).await {
            Ok(text) => finish(text, FALLBACK_CONFIDENCE, EngineKind::Fallback),
            Err(RecognitionEngineError::NoSpeech) => Err(SpeechError::UnintelligibleAudio),
            Err(RecognitionEngineError::Unavailable(fallback_reason)) => {
                tracing::error!(
                    engine = fallback.name(),
                    error = %fallback_reason,
                    "Offline recognition backend unavailable"
                );
                Err(SpeechError::ServiceUnavailable(format!(
                    "primary: {}; fallback: {}",
                    reason, fallback_reason
                )))
            }
        }
    }
}

fn finish(
    text: String,
    confidence: f32,
    engine: EngineKind,
) -> Result<RecognitionResult, SpeechError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SpeechError::UnintelligibleAudio);
    }

    tracing::info!(
        engine = %engine,
        chars = text.chars().count(),
        "Speech recognition successful"
    );

    Ok(RecognitionResult::new(text.to_string(), confidence, engine))
}
