use std::sync::Arc;

use serde::Deserialize;

use crate::application::ports::{AudioEncoder, AudioEncoderError};

use super::ffmpeg_encoder::{FfmpegMp3Encoder, check_ffmpeg_binary};
use super::temp_resource::TempResourceManager;
use super::wav_encoder::WavEncoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncoderSetting {
    /// MP3 when ffmpeg is present, WAV otherwise.
    Auto,
    Mp3,
    Wav,
}

pub struct AudioEncoderFactory;

impl AudioEncoderFactory {
    pub fn create(
        setting: EncoderSetting,
        ffmpeg_binary: &str,
        temp: Arc<TempResourceManager>,
    ) -> Result<Arc<dyn AudioEncoder>, AudioEncoderError> {
        match setting {
            EncoderSetting::Wav => Ok(Arc::new(WavEncoder)),
            EncoderSetting::Mp3 => {
                check_ffmpeg_binary(ffmpeg_binary)?;
                Ok(Arc::new(FfmpegMp3Encoder::new(ffmpeg_binary, temp)))
            }
            EncoderSetting::Auto => match check_ffmpeg_binary(ffmpeg_binary) {
                Ok(()) => Ok(Arc::new(FfmpegMp3Encoder::new(ffmpeg_binary, temp))),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "ffmpeg not available, tempo-scaled artifacts will be stored as wav"
                    );
                    Ok(Arc::new(WavEncoder))
                }
            },
        }
    }
}
