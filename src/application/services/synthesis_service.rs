use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{AudioDecoder, AudioEncoder, AudioStore, SynthesisEngine};
use crate::domain::{
    ArtifactFormat, ArtifactName, AudioId, LanguageCodeMapper, SynthesisRequest, SynthesisResult,
};

use super::speech_error::SpeechError;
use super::time_stretch::time_stretch;

pub struct SynthesisService {
    engine: Arc<dyn SynthesisEngine>,
    decoder: Arc<dyn AudioDecoder>,
    encoder: Arc<dyn AudioEncoder>,
    store: Arc<dyn AudioStore>,
    mapper: LanguageCodeMapper,
}

impl SynthesisService {
    pub fn new(
        engine: Arc<dyn SynthesisEngine>,
        decoder: Arc<dyn AudioDecoder>,
        encoder: Arc<dyn AudioEncoder>,
        store: Arc<dyn AudioStore>,
        mapper: LanguageCodeMapper,
    ) -> Self {
        Self {
            engine,
            decoder,
            encoder,
            store,
            mapper,
        }
    }

    #[tracing::instrument(skip(self, request), fields(language = %request.language(), speed = request.speed()))]
    pub async fn synthesize(
        &self,
        request: &SynthesisRequest,
    ) -> Result<SynthesisResult, SpeechError> {
        let language = self.mapper.to_synthesis_code(request.language());
        let slow = request.uses_native_slow_mode();

        let baseline = self
            .engine
            .synthesize(request.text(), &language, slow)
            .await
            .map_err(|e| SpeechError::Synthesis(e.to_string()))?;

        tracing::debug!(bytes = baseline.len(), slow = slow, "Baseline speech generated");

        let (artifact, format) = match request.tempo_factor() {
            Some(speed) => {
                let encoded = self.rescale(baseline, speed).await?;
                (encoded, self.encoder.format())
            }
            None => {
                let format = ArtifactFormat::sniff(&baseline).unwrap_or(ArtifactFormat::Mp3);
                (baseline, format)
            }
        };

        let duration_secs = self.measure(&artifact).await?;

        let name = ArtifactName::new(AudioId::new(), format);
        self.store
            .store(&name, Bytes::from(artifact))
            .await
            .map_err(|e| SpeechError::Synthesis(format!("storing artifact: {}", e)))?;

        tracing::info!(
            artifact = %name,
            duration_secs = duration_secs,
            "Text to speech conversion successful"
        );

        Ok(SynthesisResult {
            artifact: name,
            duration_secs,
        })
    }

    async fn rescale(&self, baseline: Vec<u8>, speed: f32) -> Result<Vec<u8>, SpeechError> {
        let decoder = Arc::clone(&self.decoder);
        let encoder = Arc::clone(&self.encoder);

        tokio::task::spawn_blocking(move || {
            let audio = decoder
                .decode_strict(&baseline)
                .map_err(|e| SpeechError::Synthesis(format!("decoding baseline: {}", e)))?;
            let scaled = time_stretch(&audio, speed);
            tracing::debug!(
                speed = speed,
                before_secs = audio.duration_secs(),
                after_secs = scaled.duration_secs(),
                "Tempo scaled"
            );
            encoder
                .encode(&scaled)
                .map_err(|e| SpeechError::Synthesis(format!("encoding artifact: {}", e)))
        })
        .await
        .map_err(|e| SpeechError::Synthesis(format!("tempo task failed: {}", e)))?
    }

    async fn measure(&self, artifact: &[u8]) -> Result<f64, SpeechError> {
        let decoder = Arc::clone(&self.decoder);
        let artifact = artifact.to_vec();

        tokio::task::spawn_blocking(move || decoder.decode_strict(&artifact))
            .await
            .map_err(|e| SpeechError::Synthesis(format!("measure task failed: {}", e)))?
            .map(|audio| audio.duration_secs())
            .map_err(|e| SpeechError::Synthesis(format!("measuring duration: {}", e)))
    }
}
