use async_trait::async_trait;

use crate::domain::DecodedAudio;

/// A speech-to-text backend.
///
/// `language` is whatever code the backend expects: a mapped locale for the
/// primary engine, the plain boundary code for offline engines.
#[async_trait]
pub trait RecognitionEngine: Send + Sync {
    fn name(&self) -> &str;

    async fn recognize(
        &self,
        audio: &DecodedAudio,
        language: &str,
    ) -> Result<String, RecognitionEngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognitionEngineError {
    /// The backend could not be reached or failed to answer.
    #[error("recognition backend unavailable: {0}")]
    Unavailable(String),
    /// The backend processed the audio but found no speech in it.
    #[error("no speech recognized")]
    NoSpeech,
}
