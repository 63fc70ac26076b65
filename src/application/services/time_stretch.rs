use crate::domain::DecodedAudio;

const FRAME_SECS: f32 = 0.030;
const SEEK_SECS: f32 = 0.008;
const SEEK_STEP: usize = 2;
const CORRELATION_STRIDE: usize = 4;

/// Changes playback duration by `speed` (output length ≈ input / speed) using
/// waveform-similarity overlap-add. Pitch is not corrected beyond what the
/// frame alignment preserves.
///
/// Output is always mono.
pub fn time_stretch(audio: &DecodedAudio, speed: f32) -> DecodedAudio {
    let mono = audio.to_mono();
    if mono.is_empty() || !speed.is_finite() || speed <= 0.0 || (speed - 1.0).abs() < f32::EPSILON
    {
        return mono;
    }

    let input = mono.to_f32();
    let output = wsola(&input, mono.sample_rate(), speed);
    DecodedAudio::from_f32_mono(&output, mono.sample_rate())
}

fn wsola(input: &[f32], sample_rate: u32, speed: f32) -> Vec<f32> {
    let frame_len = ((sample_rate as f32 * FRAME_SECS) as usize).max(8) & !1;
    let hop = frame_len / 2;
    let tolerance = (sample_rate as f32 * SEEK_SECS) as usize;
    let target_len = (input.len() as f64 / speed as f64).round() as usize;
    let window = hann_window(frame_len);

    let mut output = vec![0.0f32; target_len + frame_len];
    let mut weight = vec![0.0f32; target_len + frame_len];
    let mut previous: Option<usize> = None;
    let mut out_pos = 0;

    while out_pos < target_len {
        let nominal = (out_pos as f64 * speed as f64).round() as usize;
        let offset = match previous {
            None => nominal,
            Some(prev) => best_offset(input, prev + hop, nominal, tolerance, hop),
        };

        for (i, w) in window.iter().enumerate() {
            let sample = input.get(offset + i).copied().unwrap_or(0.0);
            output[out_pos + i] += sample * w;
            weight[out_pos + i] += w;
        }

        previous = Some(offset);
        out_pos += hop;
    }

    for (sample, w) in output.iter_mut().zip(&weight) {
        if *w > 1e-3 {
            *sample /= w;
        }
    }
    output.truncate(target_len);
    output
}

/// Picks the frame start near `nominal` whose opening best matches the natural
/// continuation of the previously placed frame.
fn best_offset(
    input: &[f32],
    natural: usize,
    nominal: usize,
    tolerance: usize,
    overlap: usize,
) -> usize {
    if natural + overlap > input.len() {
        return nominal;
    }
    let reference = &input[natural..natural + overlap];

    let mut best = nominal;
    let mut best_score = f32::NEG_INFINITY;
    let mut candidate = nominal.saturating_sub(tolerance);
    while candidate <= nominal + tolerance && candidate + overlap <= input.len() {
        let score: f32 = reference
            .iter()
            .zip(&input[candidate..candidate + overlap])
            .step_by(CORRELATION_STRIDE)
            .map(|(a, b)| a * b)
            .sum();
        if score > best_score {
            best_score = score;
            best = candidate;
        }
        candidate += SEEK_STEP;
    }
    best
}

fn hann_window(len: usize) -> Vec<f32> {
    (0..len)
        .map(|n| 0.5 - 0.5 * (2.0 * std::f32::consts::PI * n as f32 / len as f32).cos())
        .collect()
}
