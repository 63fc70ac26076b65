use crate::domain::{AudioBlob, DecodedAudio};

pub trait AudioDecoder: Send + Sync {
    /// Normalizes an arbitrary blob into canonical PCM for recognition.
    ///
    /// Undecodable bytes are treated as raw canonical PCM; this only fails when
    /// even that interpretation yields no audio.
    fn decode(&self, blob: &AudioBlob) -> Result<DecodedAudio, AudioDecoderError>;

    /// Decodes a known container to mono PCM at its native sample rate, with
    /// no raw-bytes fallback.
    fn decode_strict(&self, data: &[u8]) -> Result<DecodedAudio, AudioDecoderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioDecoderError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
