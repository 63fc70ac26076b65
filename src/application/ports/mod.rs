mod audio_decoder;
mod audio_encoder;
mod audio_store;
mod recognition_engine;
mod synthesis_engine;

pub use audio_decoder::{AudioDecoder, AudioDecoderError};
pub use audio_encoder::{AudioEncoder, AudioEncoderError};
pub use audio_store::{AudioStore, AudioStoreError};
pub use recognition_engine::{RecognitionEngine, RecognitionEngineError};
pub use synthesis_engine::{SynthesisEngine, SynthesisEngineError};
