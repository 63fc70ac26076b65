mod canonical_wav;
mod encoder_factory;
mod ffmpeg_encoder;
mod format_decoder;
mod resample;
mod temp_resource;
mod wav_encoder;

pub use canonical_wav::{encode_wav_bytes, raw_bytes_as_pcm, read_wav_bytes};
pub use encoder_factory::{AudioEncoderFactory, EncoderSetting};
pub use ffmpeg_encoder::{FfmpegMp3Encoder, check_ffmpeg_binary};
pub use format_decoder::{FORMAT_CANDIDATES, FormatCandidate, FormatDecoder};
pub use resample::resample;
pub use temp_resource::{TempResource, TempResourceManager};
pub use wav_encoder::WavEncoder;
