// Runtime limits for the synthesis worker

use crate::validation::DEFAULT_MAX_TEXT_CHARS;

const DEFAULT_QUEUE_DEPTH: usize = 32;

#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Bounded depth of the worker inbox; senders wait beyond it.
    pub queue_depth: usize,
    /// Longest request text accepted, in characters.
    pub max_text_chars: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            queue_depth: DEFAULT_QUEUE_DEPTH,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
        }
    }
}

impl WorkerConfig {
    pub fn from_env() -> Self {
        let queue_depth = std::env::var("TTS_QUEUE_DEPTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_QUEUE_DEPTH);

        let max_text_chars = std::env::var("TTS_MAX_TEXT_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_TEXT_CHARS);

        Self {
            queue_depth,
            max_text_chars,
        }
    }
}
