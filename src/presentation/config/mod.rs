mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    CorsSettings, FallbackSettings, LimitSettings, LoggingSettings, RecognitionSettings,
    ServerSettings, Settings, SettingsError, StorageSettings, SynthesisSettings,
};
