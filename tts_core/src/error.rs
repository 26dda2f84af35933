use thiserror::Error;

/// Synthesis pipeline error types
#[derive(Debug, Error)]
pub enum TtsError {
    /// The inference backend could not be acquired. The next request may
    /// retry the load.
    #[error("Model load failed: {0}")]
    ModelLoad(String),

    /// Synthesis failed for accepted input. A cached model stays usable.
    #[error("Synthesis failed: {0}")]
    Inference(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid sample rate: {0}")]
    InvalidSampleRate(u32),
}
