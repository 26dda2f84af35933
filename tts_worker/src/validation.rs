use tts_core::error::TtsError;

/// Default maximum text length for synthesis requests
pub const DEFAULT_MAX_TEXT_CHARS: usize = 5000;

/// Validate request text before it reaches the engine.
///
/// Empty and whitespace-only text is rejected rather than synthesized into a
/// silent header-only container, so the caller gets a signal it can surface.
pub fn validate_text(text: &str, max_chars: usize) -> Result<(), TtsError> {
    if text.trim().is_empty() {
        return Err(TtsError::InvalidInput("Text cannot be empty".to_string()));
    }

    let chars = text.chars().count();
    if chars > max_chars {
        return Err(TtsError::InvalidInput(format!(
            "Text too long ({chars} characters, max {max_chars})"
        )));
    }

    Ok(())
}
