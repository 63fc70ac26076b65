use std::fs::File;
use std::sync::Arc;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::errors::{Error as SymphoniaError, Result as SymphoniaResult};
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::default::formats::{IsoMp4Reader, MkvReader, MpaReader, OggReader, WavReader};

use crate::application::ports::{AudioDecoder, AudioDecoderError};
use crate::domain::{AudioBlob, CANONICAL_SAMPLE_RATE, DecodedAudio};

use super::canonical_wav::{raw_bytes_as_pcm, read_wav_file, write_wav_file};
use super::resample::resample;
use super::temp_resource::TempResourceManager;

/// One container interpretation tried against an incoming blob.
pub struct FormatCandidate {
    pub name: &'static str,
    pub extension: &'static str,
    signature: fn(&[u8]) -> bool,
    open: fn(MediaSourceStream) -> SymphoniaResult<Box<dyn FormatReader>>,
}

/// Interpretations in the order they are attempted; the first that decodes wins.
pub const FORMAT_CANDIDATES: [FormatCandidate; 5] = [
    FormatCandidate {
        name: "m4a",
        extension: ".m4a",
        signature: is_iso_mp4,
        open: open_reader::<IsoMp4Reader>,
    },
    FormatCandidate {
        name: "mp3",
        extension: ".mp3",
        signature: is_mpeg_audio,
        open: open_reader::<MpaReader>,
    },
    FormatCandidate {
        name: "wav",
        extension: ".wav",
        signature: is_riff_wave,
        open: open_reader::<WavReader>,
    },
    FormatCandidate {
        name: "ogg",
        extension: ".ogg",
        signature: is_ogg,
        open: open_reader::<OggReader>,
    },
    FormatCandidate {
        name: "webm",
        extension: ".webm",
        signature: is_ebml,
        open: open_reader::<MkvReader>,
    },
];

impl FormatCandidate {
    /// Whether `data` carries this container's signature.
    pub fn matches(&self, data: &[u8]) -> bool {
        (self.signature)(data)
    }
}

fn open_reader<R: FormatReader + 'static>(
    source: MediaSourceStream,
) -> SymphoniaResult<Box<dyn FormatReader>> {
    Ok(Box::new(R::try_new(source, &FormatOptions::default())?))
}

fn is_iso_mp4(data: &[u8]) -> bool {
    data.len() >= 8 && &data[4..8] == b"ftyp"
}

fn is_mpeg_audio(data: &[u8]) -> bool {
    data.starts_with(b"ID3") || matches!(data, [0xFF, b, ..] if b & 0xE0 == 0xE0)
}

fn is_riff_wave(data: &[u8]) -> bool {
    data.len() >= 12 && &data[..4] == b"RIFF" && &data[8..12] == b"WAVE"
}

fn is_ogg(data: &[u8]) -> bool {
    data.starts_with(b"OggS")
}

fn is_ebml(data: &[u8]) -> bool {
    data.starts_with(&[0x1A, 0x45, 0xDF, 0xA3])
}

/// Symphonia-backed [`AudioDecoder`] that stages every attempt in its own
/// temp resource.
pub struct FormatDecoder {
    temp: Arc<TempResourceManager>,
}

impl FormatDecoder {
    pub fn new(temp: Arc<TempResourceManager>) -> Self {
        Self { temp }
    }

    /// Runs the candidate list against `data`, returning mono PCM resampled to
    /// `target_rate` when one is given.
    fn decode_candidates(
        &self,
        data: &[u8],
        target_rate: Option<u32>,
    ) -> Result<DecodedAudio, AudioDecoderError> {
        let mut failures = Vec::with_capacity(FORMAT_CANDIDATES.len());

        for candidate in &FORMAT_CANDIDATES {
            if !candidate.matches(data) {
                failures.push(format!("{}: not a {} container", candidate.name, candidate.name));
                continue;
            }

            let staged = self.temp.acquire(candidate.extension)?;
            let attempt = staged
                .write(data)
                .map_err(AudioDecoderError::Io)
                .and_then(|_| {
                    let file = File::open(staged.path())?;
                    decode_as(candidate, file, target_rate)
                });
            staged.release();

            match attempt {
                Ok(audio) => {
                    tracing::debug!(
                        format = candidate.name,
                        frames = audio.frames(),
                        sample_rate = audio.sample_rate(),
                        "Audio format recognized"
                    );
                    return Ok(audio);
                }
                Err(e) => {
                    tracing::trace!(format = candidate.name, error = %e, "Format candidate rejected");
                    failures.push(format!("{}: {}", candidate.name, e));
                }
            }
        }

        Err(AudioDecoderError::UnsupportedFormat(failures.join("; ")))
    }
}

impl AudioDecoder for FormatDecoder {
    fn decode(&self, blob: &AudioBlob) -> Result<DecodedAudio, AudioDecoderError> {
        let canonical = self.temp.acquire(".wav")?;

        match self.decode_candidates(blob.bytes(), Some(CANONICAL_SAMPLE_RATE)) {
            Ok(audio) => write_wav_file(canonical.path(), &audio)
                .map_err(|e| AudioDecoderError::DecodingFailed(format!("write wav: {}", e)))?,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    bytes = blob.len(),
                    "Audio conversion failed, using raw data"
                );
                write_wav_file(canonical.path(), &raw_bytes_as_pcm(blob.bytes()))
                    .map_err(|e| AudioDecoderError::DecodingFailed(format!("write wav: {}", e)))?;
            }
        }

        let audio = read_wav_file(canonical.path());
        canonical.release();
        audio
    }

    fn decode_strict(&self, data: &[u8]) -> Result<DecodedAudio, AudioDecoderError> {
        self.decode_candidates(data, None)
    }
}

fn decode_as(
    candidate: &FormatCandidate,
    file: File,
    target_rate: Option<u32>,
) -> Result<DecodedAudio, AudioDecoderError> {
    let mss = MediaSourceStream::new(Box::new(file), Default::default());
    let format = (candidate.open)(mss)
        .map_err(|e| AudioDecoderError::DecodingFailed(format!("open: {}", e)))?;

    let (samples, source_rate) = decode_track(format)?;

    let samples = match target_rate {
        Some(rate) if rate != source_rate => resample(&samples, source_rate, rate)?,
        _ => samples,
    };
    let rate = target_rate.unwrap_or(source_rate);

    Ok(DecodedAudio::from_f32_mono(&samples, rate))
}

/// Decodes the first audio track to mono float samples.
fn decode_track(mut format: Box<dyn FormatReader>) -> Result<(Vec<f32>, u32), AudioDecoderError> {
    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| AudioDecoderError::DecodingFailed("no audio track found".to_string()))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let source_rate = codec_params
        .sample_rate
        .ok_or_else(|| AudioDecoderError::DecodingFailed("unknown sample rate".to_string()))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| AudioDecoderError::DecodingFailed(format!("codec: {}", e)))?;

    let mut all_samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(SymphoniaError::IoError(ref e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => {
                return Err(AudioDecoderError::DecodingFailed(format!("packet: {}", e)));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(SymphoniaError::DecodeError(e)) => {
                tracing::warn!(error = %e, "Skipping corrupt audio frame");
                continue;
            }
            Err(e) => {
                return Err(AudioDecoderError::DecodingFailed(format!("decode: {}", e)));
            }
        };

        let spec = *decoded.spec();
        let num_frames = decoded.frames();
        if num_frames == 0 {
            continue;
        }
        let channels = spec.channels.count().max(1);

        let mut sample_buf = SampleBuffer::<f32>::new(num_frames as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);
        let samples = sample_buf.samples();

        if channels > 1 {
            for frame in samples.chunks(channels) {
                all_samples.push(frame.iter().sum::<f32>() / channels as f32);
            }
        } else {
            all_samples.extend_from_slice(samples);
        }
    }

    if all_samples.is_empty() {
        return Err(AudioDecoderError::DecodingFailed(
            "no audio samples decoded".to_string(),
        ));
    }

    Ok((all_samples, source_rate))
}
