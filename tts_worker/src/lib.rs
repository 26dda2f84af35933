//! Dedicated synthesis worker.
//!
//! One spawned task owns the model: requests arrive on a bounded channel,
//! are processed strictly in arrival order, and each is answered exactly
//! once on its own reply channel. The model is loaded on the first request
//! and reused for the lifetime of the worker; a failed load leaves the
//! worker ready to retry on the next request.

pub mod config;
pub mod metrics;
pub mod validation;

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{info, warn};

use tts_core::engine::SynthesisEngine;
use tts_core::error::TtsError;
use tts_core::wav::{self, EncodedAudio};

pub use config::WorkerConfig;
pub use metrics::SynthesisMetrics;

/// Errors observed by callers of [`WorkerHandle::synthesize`].
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error(transparent)]
    Synthesis(#[from] TtsError),

    /// The worker task is gone: its inbox closed or the reply was dropped.
    #[error("Worker channel closed")]
    ChannelClosed,
}

/// One queued request: the text to speak and its reply slot.
struct SynthesisRequest {
    text: String,
    reply_tx: oneshot::Sender<Result<EncodedAudio, TtsError>>,
}

/// Cloneable sender half of a running worker.
///
/// The worker task exits once every handle is dropped; the cached model and
/// any unanswered requests are abandoned with it.
#[derive(Clone)]
pub struct WorkerHandle {
    tx: mpsc::Sender<SynthesisRequest>,
    metrics: Arc<SynthesisMetrics>,
}

impl WorkerHandle {
    /// Queue `text` for synthesis and await the encoded container.
    ///
    /// Requests are answered in the order they were sent. Dropping the
    /// returned future abandons the reply but does not abort synthesis
    /// already underway.
    pub async fn synthesize(&self, text: impl Into<String>) -> Result<EncodedAudio, WorkerError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        let request = SynthesisRequest {
            text: text.into(),
            reply_tx,
        };

        self.tx
            .send(request)
            .await
            .map_err(|_| WorkerError::ChannelClosed)?;

        let outcome = reply_rx.await.map_err(|_| WorkerError::ChannelClosed)?;
        Ok(outcome?)
    }

    /// Counters for this worker's synthesis activity.
    pub fn metrics(&self) -> &SynthesisMetrics {
        &self.metrics
    }
}

/// Start a worker task around `engine` and hand back its sender.
///
/// Must be called from within a tokio runtime.
pub fn spawn<E: SynthesisEngine>(engine: E, config: WorkerConfig) -> WorkerHandle {
    let (tx, rx) = mpsc::channel(config.queue_depth.max(1));
    let metrics = Arc::new(SynthesisMetrics::new());

    tokio::spawn(run(engine, config, rx, Arc::clone(&metrics)));

    WorkerHandle { tx, metrics }
}

/// The worker loop. One request runs to completion before the next `recv`,
/// so replies leave in arrival order.
async fn run<E: SynthesisEngine>(
    engine: E,
    config: WorkerConfig,
    mut rx: mpsc::Receiver<SynthesisRequest>,
    metrics: Arc<SynthesisMetrics>,
) {
    let mut model: Option<E::Model> = None;

    while let Some(request) = rx.recv().await {
        let started = Instant::now();
        let outcome = handle_request(&engine, &mut model, &request.text, &config, &metrics).await;

        match &outcome {
            Ok(audio) => {
                metrics.record_synthesis(started.elapsed().as_millis() as u64, audio.duration_ms());
            }
            Err(e) => {
                metrics.record_error();
                warn!("synthesis request failed: {e}");
            }
        }

        // The caller may have gone away; an undeliverable reply is dropped.
        let _ = request.reply_tx.send(outcome);
    }

    info!("worker inbox closed, shutting down");
}

async fn handle_request<E: SynthesisEngine>(
    engine: &E,
    model: &mut Option<E::Model>,
    text: &str,
    config: &WorkerConfig,
    metrics: &SynthesisMetrics,
) -> Result<EncodedAudio, TtsError> {
    validation::validate_text(text, config.max_text_chars)?;

    // Take the cached model or load it; either way it goes back in the slot.
    // A failed load leaves the slot empty, so the next request retries.
    let loaded = match model.take() {
        Some(m) => m,
        None => {
            let started = Instant::now();
            let m = engine.load().await?;
            metrics.record_model_load();
            info!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "model loaded"
            );
            m
        }
    };
    let loaded = model.insert(loaded);

    let result = engine.synthesize(loaded, text).await?;
    wav::encode(&result.samples, result.sample_rate)
}
