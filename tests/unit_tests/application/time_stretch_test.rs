use bhasha::application::services::time_stretch;
use bhasha::domain::DecodedAudio;

use crate::support::sine;

fn tone(secs: f32) -> DecodedAudio {
    DecodedAudio::new(sine(220.0, secs, 16_000), 16_000, 1)
}

#[test]
fn given_double_speed_when_stretching_then_duration_halves() {
    let audio = tone(2.0);
    let stretched = time_stretch(&audio, 2.0);
    assert!((stretched.duration_secs() - 1.0).abs() < 0.01);
}

#[test]
fn given_point_eight_speed_when_stretching_then_duration_grows() {
    let audio = tone(1.6);
    let stretched = time_stretch(&audio, 0.8);
    assert!((stretched.duration_secs() - 2.0).abs() < 0.01);
}

#[test]
fn given_unit_speed_when_stretching_then_samples_are_unchanged() {
    let audio = tone(0.5);
    assert_eq!(time_stretch(&audio, 1.0), audio);
}

#[test]
fn given_empty_audio_when_stretching_then_returns_empty_audio() {
    let audio = DecodedAudio::new(Vec::new(), 16_000, 1);
    assert!(time_stretch(&audio, 1.5).is_empty());
}

#[test]
fn given_same_input_when_stretching_twice_then_output_is_identical() {
    let audio = tone(1.0);
    assert_eq!(time_stretch(&audio, 1.3), time_stretch(&audio, 1.3));
}

#[test]
fn given_stereo_input_when_stretching_then_output_is_mono() {
    let mono = sine(220.0, 0.5, 16_000);
    let interleaved: Vec<i16> = mono.iter().flat_map(|&s| [s, s]).collect();
    let audio = DecodedAudio::new(interleaved, 16_000, 2);

    let stretched = time_stretch(&audio, 1.25);

    assert_eq!(stretched.channels(), 1);
    assert!((stretched.duration_secs() - 0.4).abs() < 0.01);
}

#[test]
fn given_tone_when_stretching_then_output_keeps_signal_energy() {
    let audio = tone(1.0);
    let stretched = time_stretch(&audio, 1.5);
    let peak = stretched.samples().iter().map(|s| s.unsigned_abs()).max().unwrap();
    assert!(peak > 6_000, "peak {} too quiet", peak);
}
