use std::path::PathBuf;

use config::Environment as EnvironmentSource;
use config::{Config, File};
use serde::Deserialize;

use crate::domain::MAX_TEXT_CHARS;
use crate::infrastructure::audio::EncoderSetting;
use crate::infrastructure::speech::FallbackProvider;

use super::Environment;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid environment: {0}")]
    Environment(String),
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub app_name: String,
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub cors: CorsSettings,
    pub storage: StorageSettings,
    pub recognition: RecognitionSettings,
    pub synthesis: SynthesisSettings,
    pub limits: LimitSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub audio_dir: PathBuf,
    pub temp_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionSettings {
    pub google_endpoint: Option<String>,
    pub google_api_key: Option<String>,
    pub fallback: FallbackSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FallbackSettings {
    pub provider: FallbackProvider,
    pub model: String,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisSettings {
    pub endpoint: Option<String>,
    pub encoder: EncoderSetting,
    pub ffmpeg_binary: String,
    pub max_text_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitSettings {
    pub max_upload_bytes: usize,
}

impl Settings {
    /// Resolves the environment from `APP_ENVIRONMENT` and loads it.
    pub fn load() -> Result<(Self, Environment), SettingsError> {
        let environment = Environment::from_env().map_err(SettingsError::Environment)?;
        let settings = Self::load_for(environment)?;
        Ok((settings, environment))
    }

    /// Layers `appsettings.base.toml`, `appsettings.{env}.toml` and `APP__*`
    /// environment variables, in that order, then validates the result.
    pub fn load_for(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .add_source(File::with_name("appsettings.base").required(false))
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = configuration.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let key_missing = self
            .recognition
            .google_api_key
            .as_deref()
            .is_none_or(|k| k.trim().is_empty());
        if key_missing {
            return Err(SettingsError::Invalid {
                key: "recognition.google_api_key",
                reason: "the primary recognition backend needs an API key".to_string(),
            });
        }

        if self.synthesis.max_text_chars == 0 || self.synthesis.max_text_chars > MAX_TEXT_CHARS {
            return Err(SettingsError::Invalid {
                key: "synthesis.max_text_chars",
                reason: format!("must be between 1 and {}", MAX_TEXT_CHARS),
            });
        }

        if self.limits.max_upload_bytes == 0 {
            return Err(SettingsError::Invalid {
                key: "limits.max_upload_bytes",
                reason: "must be positive".to_string(),
            });
        }

        Ok(())
    }
}
