use crate::domain::DecodedAudio;

pub const CALIBRATION_WINDOW_SECS: f32 = 0.5;
/// Frames quieter than this multiple of the calibration RMS count as ambient noise.
pub const ENERGY_RATIO: f32 = 1.5;
/// The opening window is only trusted as noise when the rest of the clip is at
/// least this many times louder.
pub const NOISE_MARGIN: f64 = 2.0;
const FRAME_SECS: f32 = 0.02;
const NOISE_GAIN: f64 = 0.25;

/// Measures ambient noise over the opening window of the clip and suppresses it.
///
/// The window's mean is removed as DC offset across the whole clip. When the
/// window is clearly quieter than what follows, every 20 ms frame whose RMS
/// stays under `ENERGY_RATIO` times the window RMS is attenuated as a whole.
/// A clip that opens with speech keeps its levels.
pub fn calibrate_ambient_noise(audio: &DecodedAudio) -> DecodedAudio {
    let channels = audio.channels() as usize;
    let window_len = ((audio.sample_rate() as f32 * CALIBRATION_WINDOW_SECS) as usize * channels)
        .min(audio.samples().len());
    if window_len == 0 {
        return audio.clone();
    }

    let window = &audio.samples()[..window_len];
    let dc_offset = window.iter().map(|&s| s as f64).sum::<f64>() / window_len as f64;
    let centered: Vec<f64> = audio
        .samples()
        .iter()
        .map(|&s| s as f64 - dc_offset)
        .collect();

    let noise_rms = rms(&centered[..window_len]);
    let rest_rms = rms(&centered[window_len..]);
    let gate = noise_rms * NOISE_MARGIN < rest_rms;
    let threshold = noise_rms * ENERGY_RATIO as f64;

    tracing::debug!(
        dc_offset = dc_offset,
        noise_rms = noise_rms,
        rest_rms = rest_rms,
        gate = gate,
        "Ambient noise calibrated"
    );

    let mut adjusted = centered;
    if gate {
        let frame_len = ((audio.sample_rate() as f32 * FRAME_SECS) as usize * channels).max(1);
        for frame in adjusted.chunks_mut(frame_len) {
            if rms(frame) < threshold {
                frame.iter_mut().for_each(|s| *s *= NOISE_GAIN);
            }
        }
    }

    let samples = adjusted
        .into_iter()
        .map(|s| s.round().clamp(i16::MIN as f64, i16::MAX as f64) as i16)
        .collect();

    DecodedAudio::new(samples, audio.sample_rate(), audio.channels())
}

fn rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    (samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64).sqrt()
}
