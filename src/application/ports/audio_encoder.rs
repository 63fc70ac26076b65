use crate::domain::{ArtifactFormat, DecodedAudio};

pub trait AudioEncoder: Send + Sync {
    fn format(&self) -> ArtifactFormat;

    fn encode(&self, audio: &DecodedAudio) -> Result<Vec<u8>, AudioEncoderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioEncoderError {
    #[error("encoding failed: {0}")]
    EncodingFailed(String),
    #[error("encoder unavailable: {0}")]
    Unavailable(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
