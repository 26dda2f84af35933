//! Piper-backed synthesis engine.
//!
//! Loading a voice means reading its sample rate from the model config JSON
//! and building a `PiperSpeechSynthesizer` from the same config. Both the
//! load and inference run on the blocking thread pool so the async caller
//! suspends instead of stalling its executor thread.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use async_trait::async_trait;
use piper_rs::synth::{PiperSpeechStreamParallel, PiperSpeechSynthesizer};
use tracing::{debug, info};

use crate::engine::{SynthesisEngine, SynthesisResult};
use crate::error::TtsError;

/// Synthesis engine backed by a Piper ONNX voice.
pub struct PiperEngine {
    config_path: PathBuf,
}

/// A loaded Piper voice and its native sample rate.
pub struct PiperVoice {
    synth: Arc<PiperSpeechSynthesizer>,
    sample_rate: u32,
}

impl PiperEngine {
    /// Engine for the voice described by a Piper model config JSON.
    pub fn from_config_path<P: AsRef<Path>>(config_path: P) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    /// Read sample rate from model config JSON
    fn read_sample_rate(cfg_path: &Path) -> anyhow::Result<u32> {
        let text = std::fs::read_to_string(cfg_path)
            .with_context(|| format!("Failed to read config file: {}", cfg_path.display()))?;
        let json: serde_json::Value =
            serde_json::from_str(&text).with_context(|| "Config file is not valid JSON")?;

        let sample_rate = json
            .get("audio")
            .and_then(|a| a.get("sample_rate"))
            .and_then(|sr| sr.as_u64())
            .ok_or_else(|| anyhow::anyhow!("Missing or invalid 'audio.sample_rate' in config"))?;

        Ok(sample_rate as u32)
    }
}

#[async_trait]
impl SynthesisEngine for PiperEngine {
    type Model = PiperVoice;

    async fn load(&self) -> Result<PiperVoice, TtsError> {
        let cfg_path = self.config_path.clone();
        let started = Instant::now();

        let voice = tokio::task::spawn_blocking(move || {
            let sample_rate =
                Self::read_sample_rate(&cfg_path).map_err(|e| TtsError::ModelLoad(e.to_string()))?;
            let model = piper_rs::from_config_path(&cfg_path)
                .map_err(|e| TtsError::ModelLoad(format!("piper load error: {e}")))?;
            let synth = PiperSpeechSynthesizer::new(model)
                .map_err(|e| TtsError::ModelLoad(format!("piper load error: {e}")))?;
            Ok(PiperVoice {
                synth: Arc::new(synth),
                sample_rate,
            })
        })
        .await
        .map_err(|e| TtsError::ModelLoad(format!("load task failed: {e}")))??;

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            config = %self.config_path.display(),
            "Piper voice loaded"
        );
        Ok(voice)
    }

    async fn synthesize(&self, model: &PiperVoice, text: &str) -> Result<SynthesisResult, TtsError> {
        let synth = Arc::clone(&model.synth);
        let sample_rate = model.sample_rate;
        let text = text.to_string();
        let started = Instant::now();

        let samples = tokio::task::spawn_blocking(move || {
            let iter: PiperSpeechStreamParallel = synth
                .synthesize_parallel(text, None)
                .map_err(|e| TtsError::Inference(format!("piper synth error: {e}")))?;

            let mut samples: Vec<f32> = Vec::new();
            for part in iter {
                samples.extend(
                    part.map_err(|e| TtsError::Inference(format!("chunk error: {e}")))?
                        .into_vec(),
                );
            }
            Ok::<_, TtsError>(samples)
        })
        .await
        .map_err(|e| TtsError::Inference(format!("synthesis task failed: {e}")))??;

        debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            samples = samples.len(),
            "synthesis complete"
        );
        Ok(SynthesisResult {
            samples,
            sample_rate,
        })
    }
}
