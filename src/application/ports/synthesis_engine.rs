use async_trait::async_trait;

/// A text-to-speech backend returning compressed audio.
#[async_trait]
pub trait SynthesisEngine: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        slow: bool,
    ) -> Result<Vec<u8>, SynthesisEngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisEngineError {
    #[error("synthesis request failed: {0}")]
    RequestFailed(String),
    #[error("synthesis backend returned no audio")]
    EmptyAudio,
}
