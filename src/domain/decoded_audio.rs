/// Sample rate every recognizer input is normalized to.
pub const CANONICAL_SAMPLE_RATE: u32 = 16_000;

/// Interleaved 16-bit PCM with an explicit sample rate and channel count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAudio {
    samples: Vec<i16>,
    sample_rate: u32,
    channels: u16,
}

impl DecodedAudio {
    pub fn new(samples: Vec<i16>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels: channels.max(1),
        }
    }

    /// Builds mono PCM from normalized `[-1.0, 1.0]` floats, clipping anything outside.
    pub fn from_f32_mono(samples: &[f32], sample_rate: u32) -> Self {
        let pcm = samples
            .iter()
            .map(|s| (s.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16)
            .collect();
        Self::new(pcm, sample_rate, 1)
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f64 / self.sample_rate as f64
    }

    pub fn to_f32(&self) -> Vec<f32> {
        self.samples
            .iter()
            .map(|&s| s as f32 / i16::MAX as f32)
            .collect()
    }

    /// Averages interleaved channels down to one.
    pub fn to_mono(&self) -> DecodedAudio {
        if self.channels == 1 {
            return self.clone();
        }
        let channels = self.channels as usize;
        let samples = self
            .samples
            .chunks(channels)
            .map(|frame| {
                let sum: i32 = frame.iter().map(|&s| s as i32).sum();
                (sum / frame.len() as i32) as i16
            })
            .collect();
        DecodedAudio::new(samples, self.sample_rate, 1)
    }
}
