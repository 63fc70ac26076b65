/// Failure kinds surfaced by the speech core. Every kind is terminal for the
/// call that raised it.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("audio could not be decoded: {0}")]
    Decode(String),
    #[error("could not understand the audio")]
    UnintelligibleAudio,
    #[error("speech recognition service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("speech synthesis failed: {0}")]
    Synthesis(String),
}

impl SpeechError {
    pub fn code(&self) -> &'static str {
        match self {
            SpeechError::Decode(_) => "DECODE_ERROR",
            SpeechError::UnintelligibleAudio => "UNINTELLIGIBLE_AUDIO",
            SpeechError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            SpeechError::Synthesis(_) => "SYNTHESIS_ERROR",
        }
    }
}
