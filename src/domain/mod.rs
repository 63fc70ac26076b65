mod artifact_format;
mod artifact_name;
mod audio_blob;
mod audio_id;
mod decoded_audio;
mod language;
mod recognition_result;
mod synthesis_request;
mod synthesis_result;

pub use artifact_format::ArtifactFormat;
pub use artifact_name::ArtifactName;
pub use audio_blob::AudioBlob;
pub use audio_id::AudioId;
pub use decoded_audio::{CANONICAL_SAMPLE_RATE, DecodedAudio};
pub use language::{LanguageCodeMapper, LanguageCodeTable, LanguageEntry};
pub use recognition_result::{EngineKind, RecognitionResult};
pub use synthesis_request::{
    DEFAULT_SPEED, MAX_SPEED, MAX_TEXT_CHARS, MIN_SPEED, SLOW_MODE_THRESHOLD, SynthesisRequest,
    SynthesisRequestError,
};
pub use synthesis_result::SynthesisResult;
