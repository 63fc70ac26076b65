use bhasha::domain::DecodedAudio;
use bhasha::infrastructure::audio::{encode_wav_bytes, raw_bytes_as_pcm, read_wav_bytes};

#[test]
fn given_pcm_when_encoding_wav_then_header_is_riff_wave() {
    let audio = DecodedAudio::new(vec![0, 100, -100], 16_000, 1);
    let wav = encode_wav_bytes(&audio).unwrap();
    assert_eq!(&wav[..4], b"RIFF");
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(wav.len(), 44 + 6);
}

#[test]
fn given_encoded_wav_when_reading_then_samples_and_rate_survive() {
    let audio = DecodedAudio::new(vec![5, -5, 1000, -1000], 8_000, 2);
    let decoded = read_wav_bytes(&encode_wav_bytes(&audio).unwrap()).unwrap();
    assert_eq!(decoded, audio);
}

#[test]
fn given_odd_length_bytes_when_reinterpreting_then_trailing_byte_is_dropped() {
    let audio = raw_bytes_as_pcm(&[0x01, 0x00, 0xFF, 0x7F, 0x42]);
    assert_eq!(audio.samples(), &[1, i16::MAX]);
    assert_eq!(audio.channels(), 1);
}

#[test]
fn given_empty_wav_when_reading_then_returns_error() {
    let audio = DecodedAudio::new(Vec::new(), 16_000, 1);
    let wav = encode_wav_bytes(&audio).unwrap();
    assert!(read_wav_bytes(&wav).is_err());
}
