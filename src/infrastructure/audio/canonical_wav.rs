use std::io::{Cursor, Read, Seek};
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::application::ports::AudioDecoderError;
use crate::domain::{CANONICAL_SAMPLE_RATE, DecodedAudio};

fn spec_for(audio: &DecodedAudio) -> WavSpec {
    WavSpec {
        channels: audio.channels(),
        sample_rate: audio.sample_rate(),
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Serializes PCM into an in-memory WAV container.
pub fn encode_wav_bytes(audio: &DecodedAudio) -> Result<Vec<u8>, hound::Error> {
    let mut buffer = Vec::new();
    {
        let mut writer = WavWriter::new(Cursor::new(&mut buffer), spec_for(audio))?;
        for &sample in audio.samples() {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
    }
    Ok(buffer)
}

pub fn write_wav_file(path: &Path, audio: &DecodedAudio) -> Result<(), hound::Error> {
    let mut writer = WavWriter::create(path, spec_for(audio))?;
    for &sample in audio.samples() {
        writer.write_sample(sample)?;
    }
    writer.finalize()
}

/// Recognizer input stage: opens a canonical WAV artifact.
pub fn read_wav_file(path: &Path) -> Result<DecodedAudio, AudioDecoderError> {
    let reader = WavReader::open(path)
        .map_err(|e| AudioDecoderError::DecodingFailed(format!("open wav: {}", e)))?;
    read_wav(reader)
}

pub fn read_wav_bytes(data: &[u8]) -> Result<DecodedAudio, AudioDecoderError> {
    let reader = WavReader::new(Cursor::new(data))
        .map_err(|e| AudioDecoderError::DecodingFailed(format!("open wav: {}", e)))?;
    read_wav(reader)
}

fn read_wav<R: Read + Seek>(mut reader: WavReader<R>) -> Result<DecodedAudio, AudioDecoderError> {
    let spec = reader.spec();
    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(AudioDecoderError::UnsupportedFormat(format!(
            "expected 16-bit integer PCM, got {} bits {:?}",
            spec.bits_per_sample, spec.sample_format
        )));
    }

    let samples = reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AudioDecoderError::DecodingFailed(format!("read samples: {}", e)))?;

    if samples.is_empty() {
        return Err(AudioDecoderError::DecodingFailed(
            "no audio samples in canonical artifact".to_string(),
        ));
    }

    Ok(DecodedAudio::new(samples, spec.sample_rate, spec.channels))
}

/// Reinterprets arbitrary bytes as little-endian 16-bit mono PCM at the
/// canonical rate. A trailing odd byte is dropped.
pub fn raw_bytes_as_pcm(data: &[u8]) -> DecodedAudio {
    let samples = data
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    DecodedAudio::new(samples, CANONICAL_SAMPLE_RATE, 1)
}
