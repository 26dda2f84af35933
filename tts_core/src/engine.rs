use async_trait::async_trait;

use crate::error::TtsError;

/// Raw synthesis output: normalized samples and the voice's native rate.
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// Mono samples, nominally in [-1.0, 1.0].
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

/// Capability interface over a text-to-speech backend.
///
/// `load` builds the reusable model state once; `synthesize` must only be
/// called with a model obtained from a completed `load`. The caller
/// serializes the two — implementations are not required to guard against
/// concurrent loads.
#[async_trait]
pub trait SynthesisEngine: Send + Sync + 'static {
    /// Loaded model state, reusable across requests.
    type Model: Send + Sync + 'static;

    async fn load(&self) -> Result<Self::Model, TtsError>;

    async fn synthesize(
        &self,
        model: &Self::Model,
        text: &str,
    ) -> Result<SynthesisResult, TtsError>;
}
