//! Core pieces of the synthesis pipeline: the engine seam, the Piper-backed
//! production engine, and the WAV container encoder.

pub mod engine;
pub mod error;
pub mod piper;
pub mod wav;

pub use engine::{SynthesisEngine, SynthesisResult};
pub use error::TtsError;
pub use piper::PiperEngine;
pub use wav::{EncodedAudio, WAV_MIME};
