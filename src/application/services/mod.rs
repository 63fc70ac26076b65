mod noise_calibration;
mod recognition_service;
mod speech_error;
mod synthesis_service;
mod time_stretch;

pub use noise_calibration::{CALIBRATION_WINDOW_SECS, ENERGY_RATIO, calibrate_ambient_noise};
pub use recognition_service::{FALLBACK_CONFIDENCE, PRIMARY_CONFIDENCE, RecognitionService};
pub use speech_error::SpeechError;
pub use synthesis_service::SynthesisService;
pub use time_stretch::time_stretch;
