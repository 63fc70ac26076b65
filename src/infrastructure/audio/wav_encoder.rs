use crate::application::ports::{AudioEncoder, AudioEncoderError};
use crate::domain::{ArtifactFormat, DecodedAudio};

use super::canonical_wav::encode_wav_bytes;

/// Stores artifacts as uncompressed WAV. Used when no MP3 encoder is available.
pub struct WavEncoder;

impl AudioEncoder for WavEncoder {
    fn format(&self) -> ArtifactFormat {
        ArtifactFormat::Wav
    }

    fn encode(&self, audio: &DecodedAudio) -> Result<Vec<u8>, AudioEncoderError> {
        encode_wav_bytes(audio).map_err(|e| AudioEncoderError::EncodingFailed(e.to_string()))
    }
}
