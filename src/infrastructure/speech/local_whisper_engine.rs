use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use candle_core::{Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::whisper::{self as m, Config};
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use tokenizers::Tokenizer;

use crate::application::ports::{RecognitionEngine, RecognitionEngineError};
use crate::domain::{CANONICAL_SAMPLE_RATE, DecodedAudio};
use crate::infrastructure::audio::resample;

const MAX_DECODE_TOKENS: usize = 224;
const MEL_FILTERS_REPO: &str = "FL33TW00D-HF/whisper-base";

/// Offline recognizer running a Whisper checkpoint on the CPU through candle.
pub struct LocalWhisperEngine {
    inner: Arc<WhisperRuntime>,
}

struct WhisperRuntime {
    model: Mutex<m::model::Whisper>,
    tokenizer: Tokenizer,
    config: Config,
    device: Device,
    mel_filters: Vec<f32>,
}

fn load_error(context: &str, e: impl std::fmt::Display) -> RecognitionEngineError {
    RecognitionEngineError::Unavailable(format!("model load, {}: {}", context, e))
}

fn inference_error(context: &str, e: impl std::fmt::Display) -> RecognitionEngineError {
    RecognitionEngineError::Unavailable(format!("inference, {}: {}", context, e))
}

impl LocalWhisperEngine {
    pub fn new(model_id: &str) -> Result<Self, RecognitionEngineError> {
        let device = Device::Cpu;

        tracing::info!(
            device = ?device,
            model = model_id,
            "Initializing local Whisper recognition engine"
        );

        let api = Api::new().map_err(|e| load_error("hub", e))?;
        let repo = api.repo(Repo::new(model_id.to_string(), RepoType::Model));

        let config_path = repo
            .get("config.json")
            .map_err(|e| load_error("config.json", e))?;
        let tokenizer_path = repo
            .get("tokenizer.json")
            .map_err(|e| load_error("tokenizer.json", e))?;
        let weights_path = repo
            .get("model.safetensors")
            .map_err(|e| load_error("model.safetensors", e))?;

        let mel_repo = api.repo(Repo::new(MEL_FILTERS_REPO.to_string(), RepoType::Model));
        let mel_bytes_path = mel_repo
            .get("melfilters.bytes")
            .map_err(|e| load_error("melfilters.bytes", e))?;

        let config_contents =
            std::fs::read_to_string(&config_path).map_err(|e| load_error("read config", e))?;
        let config: Config =
            serde_json::from_str(&config_contents).map_err(|e| load_error("parse config", e))?;

        let tokenizer =
            Tokenizer::from_file(&tokenizer_path).map_err(|e| load_error("tokenizer", e))?;

        let mel_bytes = std::fs::read(&mel_bytes_path).map_err(|e| load_error("mel filters", e))?;
        let mel_filters = read_mel_filters(&mel_bytes, &config)?;

        // SAFETY: safetensors files are memory-mapped read-only
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], m::DTYPE, &device)
                .map_err(|e| load_error("weights", e))?
        };

        let model =
            m::model::Whisper::load(&vb, config.clone()).map_err(|e| load_error("model", e))?;

        tracing::info!("Local Whisper engine loaded");

        Ok(Self {
            inner: Arc::new(WhisperRuntime {
                model: Mutex::new(model),
                tokenizer,
                config,
                device,
                mel_filters,
            }),
        })
    }
}

#[async_trait]
impl RecognitionEngine for LocalWhisperEngine {
    fn name(&self) -> &str {
        "whisper-local"
    }

    async fn recognize(
        &self,
        audio: &DecodedAudio,
        language: &str,
    ) -> Result<String, RecognitionEngineError> {
        let mono = audio.to_mono();
        let pcm = if mono.sample_rate() == CANONICAL_SAMPLE_RATE {
            mono.to_f32()
        } else {
            resample(&mono.to_f32(), mono.sample_rate(), CANONICAL_SAMPLE_RATE)
                .map_err(|e| inference_error("resample", e))?
        };

        let runtime = Arc::clone(&self.inner);
        let language = language.to_string();

        let transcript = tokio::task::spawn_blocking(move || runtime.transcribe(&pcm, &language))
            .await
            .map_err(|e| inference_error("task", e))??;

        if transcript.is_empty() {
            return Err(RecognitionEngineError::NoSpeech);
        }
        Ok(transcript)
    }
}

impl WhisperRuntime {
    fn transcribe(&self, pcm: &[f32], language: &str) -> Result<String, RecognitionEngineError> {
        let chunk_samples = m::N_SAMPLES;
        let mut mel_tensors = Vec::new();

        for chunk in pcm.chunks(chunk_samples) {
            let mut samples = chunk.to_vec();
            samples.resize(chunk_samples, 0.0);

            let mel_data = m::audio::pcm_to_mel(&self.config, &samples, &self.mel_filters);
            let n_mel = self.config.num_mel_bins;
            let n_frames = mel_data.len() / n_mel;

            let mel = Tensor::from_vec(mel_data, (1, n_mel, n_frames), &self.device)
                .map_err(|e| inference_error("mel tensor", e))?;
            mel_tensors.push(mel);
        }

        let mut model = self
            .model
            .lock()
            .map_err(|_| RecognitionEngineError::Unavailable("model lock poisoned".to_string()))?;

        let language_token = self.tokenizer.token_to_id(&format!("<|{}|>", language));
        if language_token.is_none() {
            tracing::debug!(language = language, "No Whisper language token, autodetecting");
        }

        let mut segments = Vec::new();
        for (i, mel) in mel_tensors.iter().enumerate() {
            tracing::debug!(segment = i, "Recognizing audio segment");
            let text = decode_segment(&mut model, &self.tokenizer, &self.device, mel, language_token)?;
            if !text.is_empty() {
                segments.push(text);
            }
        }

        Ok(segments.join(" "))
    }
}

fn decode_segment(
    model: &mut m::model::Whisper,
    tokenizer: &Tokenizer,
    device: &Device,
    mel: &Tensor,
    language_token: Option<u32>,
) -> Result<String, RecognitionEngineError> {
    let sot_token = token_id(tokenizer, m::SOT_TOKEN)?;
    let transcribe_token = token_id(tokenizer, m::TRANSCRIBE_TOKEN)?;
    let no_timestamps_token = token_id(tokenizer, m::NO_TIMESTAMPS_TOKEN)?;
    let eot_token = token_id(tokenizer, m::EOT_TOKEN)?;

    let audio_features = model
        .encoder
        .forward(mel, true)
        .map_err(|e| inference_error("encoder", e))?;

    let mut tokens = vec![sot_token];
    tokens.extend(language_token);
    tokens.push(transcribe_token);
    tokens.push(no_timestamps_token);
    let prompt_len = tokens.len();

    let mut decoded_text = String::new();

    for _ in 0..MAX_DECODE_TOKENS {
        let token_tensor = Tensor::new(tokens.as_slice(), device)
            .and_then(|t| t.unsqueeze(0))
            .map_err(|e| inference_error("tokens", e))?;

        let decoder_output = model
            .decoder
            .forward(&token_tensor, &audio_features, tokens.len() == prompt_len)
            .map_err(|e| inference_error("decoder", e))?;

        let logits = decoder_output
            .squeeze(0)
            .and_then(|o| model.decoder.final_linear(&o))
            .map_err(|e| inference_error("linear", e))?;

        let next_token = logits
            .dim(0)
            .and_then(|seq_len| logits.get(seq_len - 1))
            .and_then(|last| last.argmax(0))
            .and_then(|t| t.to_scalar::<u32>())
            .map_err(|e| inference_error("argmax", e))?;

        if next_token == eot_token {
            break;
        }

        tokens.push(next_token);

        if let Some(text) = tokenizer.id_to_token(next_token) {
            decoded_text.push_str(&text.replace('Ġ', " ").replace('▁', " "));
        }
    }

    model.reset_kv_cache();

    Ok(decoded_text.trim().to_string())
}

fn token_id(tokenizer: &Tokenizer, token: &str) -> Result<u32, RecognitionEngineError> {
    tokenizer
        .token_to_id(token)
        .ok_or_else(|| inference_error("token lookup", token))
}

fn read_mel_filters(bytes: &[u8], config: &Config) -> Result<Vec<f32>, RecognitionEngineError> {
    let expected_len = config.num_mel_bins * (m::N_FFT / 2 + 1);
    if bytes.len() < expected_len * 4 {
        return Err(load_error(
            "mel filters",
            format!(
                "file too small: {} bytes, expected at least {}",
                bytes.len(),
                expected_len * 4
            ),
        ));
    }

    Ok(bytes
        .chunks_exact(4)
        .take(expected_len)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
