use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use bhasha::application::ports::{
    AudioStore, AudioStoreError, RecognitionEngine, RecognitionEngineError, SynthesisEngine,
    SynthesisEngineError,
};
use bhasha::domain::{ArtifactName, DecodedAudio};
use bytes::Bytes;

pub fn build_wav(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let num_samples = samples.len() as u32;
    let byte_rate = sample_rate * 2;
    let data_size = num_samples * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&file_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

/// A tone loud enough to survive noise calibration.
pub fn sine(freq_hz: f32, secs: f32, sample_rate: u32) -> Vec<i16> {
    let n = (secs * sample_rate as f32) as usize;
    (0..n)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            ((2.0 * std::f32::consts::PI * freq_hz * t).sin() * 12_000.0) as i16
        })
        .collect()
}

pub fn ffmpeg_available() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

pub enum Reply {
    Text(&'static str),
    NoSpeech,
    Unavailable,
}

/// Recognition engine with a canned reply that records what it was called with.
pub struct MockRecognitionEngine {
    name: &'static str,
    reply: Reply,
    calls: AtomicUsize,
    last_language: Mutex<Option<String>>,
}

impl MockRecognitionEngine {
    pub fn new(name: &'static str, reply: Reply) -> Self {
        Self {
            name,
            reply,
            calls: AtomicUsize::new(0),
            last_language: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_language(&self) -> Option<String> {
        self.last_language.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl RecognitionEngine for MockRecognitionEngine {
    fn name(&self) -> &str {
        self.name
    }

    async fn recognize(
        &self,
        _audio: &DecodedAudio,
        language: &str,
    ) -> Result<String, RecognitionEngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_language.lock().unwrap() = Some(language.to_string());
        match self.reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::NoSpeech => Err(RecognitionEngineError::NoSpeech),
            Reply::Unavailable => Err(RecognitionEngineError::Unavailable(
                "connection refused".to_string(),
            )),
        }
    }
}

/// Synthesis engine answering every request with a fixed clip.
pub struct MockSynthesisEngine {
    audio: Vec<u8>,
    last_call: Mutex<Option<(String, bool)>>,
}

impl MockSynthesisEngine {
    pub fn with_wav(secs: f32) -> Self {
        Self {
            audio: build_wav(16_000, &sine(220.0, secs, 16_000)),
            last_call: Mutex::new(None),
        }
    }

    pub fn with_bytes(audio: Vec<u8>) -> Self {
        Self {
            audio,
            last_call: Mutex::new(None),
        }
    }

    /// Language and slow flag of the most recent call.
    pub fn last_call(&self) -> Option<(String, bool)> {
        self.last_call.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SynthesisEngine for MockSynthesisEngine {
    async fn synthesize(
        &self,
        _text: &str,
        language: &str,
        slow: bool,
    ) -> Result<Vec<u8>, SynthesisEngineError> {
        *self.last_call.lock().unwrap() = Some((language.to_string(), slow));
        if self.audio.is_empty() {
            return Err(SynthesisEngineError::EmptyAudio);
        }
        Ok(self.audio.clone())
    }
}

#[derive(Default)]
pub struct MemoryAudioStore {
    objects: Mutex<Vec<(String, Bytes)>>,
}

impl MemoryAudioStore {
    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl AudioStore for MemoryAudioStore {
    async fn store(&self, name: &ArtifactName, data: Bytes) -> Result<u64, AudioStoreError> {
        let size = data.len() as u64;
        self.objects.lock().unwrap().push((name.file_name(), data));
        Ok(size)
    }

    async fn fetch(&self, name: &ArtifactName) -> Result<Vec<u8>, AudioStoreError> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .find(|(key, _)| *key == name.file_name())
            .map(|(_, data)| data.to_vec())
            .ok_or_else(|| AudioStoreError::NotFound(name.file_name()))
    }

    async fn delete(&self, name: &ArtifactName) -> Result<(), AudioStoreError> {
        self.objects
            .lock()
            .unwrap()
            .retain(|(key, _)| *key != name.file_name());
        Ok(())
    }

    async fn head(&self, name: &ArtifactName) -> Result<u64, AudioStoreError> {
        self.fetch(name).await.map(|data| data.len() as u64)
    }
}
