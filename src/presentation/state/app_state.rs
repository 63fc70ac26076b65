use std::sync::Arc;

use crate::application::ports::AudioStore;
use crate::application::services::{RecognitionService, SynthesisService};
use crate::domain::LanguageCodeTable;

#[derive(Clone)]
pub struct AppState {
    pub recognition_service: Arc<RecognitionService>,
    pub synthesis_service: Arc<SynthesisService>,
    pub audio_store: Arc<dyn AudioStore>,
    pub languages: Arc<LanguageCodeTable>,
    pub app_name: String,
    pub max_text_chars: usize,
}
