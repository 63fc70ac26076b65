use std::process::Command;
use std::sync::Arc;

use crate::application::ports::{AudioEncoder, AudioEncoderError};
use crate::domain::{ArtifactFormat, DecodedAudio};

use super::temp_resource::TempResourceManager;

const MP3_BITRATE: &str = "64k";

/// Verifies an ffmpeg binary is callable.
pub fn check_ffmpeg_binary(binary: &str) -> Result<(), AudioEncoderError> {
    let output = Command::new(binary)
        .arg("-version")
        .output()
        .map_err(|e| AudioEncoderError::Unavailable(format!("{}: {}", binary, e)))?;

    if output.status.success() {
        Ok(())
    } else {
        Err(AudioEncoderError::Unavailable(format!(
            "{} -version exited with {}",
            binary, output.status
        )))
    }
}

/// Encodes artifacts to MP3 by shelling out to ffmpeg over staged temp files.
pub struct FfmpegMp3Encoder {
    binary: String,
    temp: Arc<TempResourceManager>,
}

impl FfmpegMp3Encoder {
    pub fn new(binary: impl Into<String>, temp: Arc<TempResourceManager>) -> Self {
        Self {
            binary: binary.into(),
            temp,
        }
    }
}

impl AudioEncoder for FfmpegMp3Encoder {
    fn format(&self) -> ArtifactFormat {
        ArtifactFormat::Mp3
    }

    fn encode(&self, audio: &DecodedAudio) -> Result<Vec<u8>, AudioEncoderError> {
        let input = self.temp.acquire(".pcm")?;
        let output = self.temp.acquire(".mp3")?;

        let raw: Vec<u8> = audio
            .samples()
            .iter()
            .flat_map(|s| s.to_le_bytes())
            .collect();
        input.write(&raw)?;

        let result = Command::new(&self.binary)
            .args(["-hide_banner", "-loglevel", "error", "-y", "-f", "s16le", "-ar"])
            .arg(audio.sample_rate().to_string())
            .arg("-ac")
            .arg(audio.channels().to_string())
            .arg("-i")
            .arg(input.path())
            .args(["-b:a", MP3_BITRATE, "-f", "mp3"])
            .arg(output.path())
            .output()
            .map_err(|e| AudioEncoderError::Unavailable(format!("{}: {}", self.binary, e)))?;

        if !result.status.success() {
            return Err(AudioEncoderError::EncodingFailed(format!(
                "ffmpeg exited with {}: {}",
                result.status,
                String::from_utf8_lossy(&result.stderr).trim()
            )));
        }

        let encoded = output.read()?;
        tracing::debug!(
            input_bytes = raw.len(),
            output_bytes = encoded.len(),
            "Encoded artifact to mp3"
        );
        Ok(encoded)
    }
}
