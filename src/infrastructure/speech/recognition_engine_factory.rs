use std::sync::Arc;

use serde::Deserialize;

use crate::application::ports::{RecognitionEngine, RecognitionEngineError};

use super::local_whisper_engine::LocalWhisperEngine;
use super::whisper_server_engine::WhisperServerEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackProvider {
    None,
    Local,
    WhisperServer,
}

pub struct RecognitionEngineFactory;

impl RecognitionEngineFactory {
    /// Builds the offline backend. `None` means recognition runs without one.
    pub fn create_fallback(
        provider: FallbackProvider,
        model: &str,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Option<Arc<dyn RecognitionEngine>>, RecognitionEngineError> {
        match provider {
            FallbackProvider::None => Ok(None),
            FallbackProvider::Local => {
                let engine = LocalWhisperEngine::new(model)?;
                Ok(Some(Arc::new(engine)))
            }
            FallbackProvider::WhisperServer => {
                let engine = WhisperServerEngine::new(api_key, base_url, Some(model.to_string()));
                Ok(Some(Arc::new(engine)))
            }
        }
    }
}
