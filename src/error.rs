//! Error types for script processing.
//!
//! The processing pipeline itself is total; these errors only surface at the
//! edges where untrusted strings are parsed (option values, configuration
//! JSON, subtitle tracks).

use thiserror::Error;

/// Result type alias for script operations.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Errors that can occur while parsing script inputs.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// Language code not present in the template bank.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Unknown processing type.
    #[error("Invalid processing type: {0} (expected 'simple' or 'remodel')")]
    InvalidProcessingType(String),

    /// Unknown call-to-action style.
    #[error("Invalid CTA style: {0} (expected 'emotional', 'appeal', 'reflective' or 'none')")]
    InvalidCtaStyle(String),

    /// Malformed subtitle track.
    #[error("Invalid subtitle at cue {cue}: {reason}")]
    InvalidSubtitle { cue: usize, reason: String },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ScriptError {
    /// Creates an UnsupportedLanguage error.
    pub fn unsupported_language(code: impl Into<String>) -> Self {
        Self::UnsupportedLanguage(code.into())
    }

    /// Creates an InvalidProcessingType error.
    pub fn invalid_processing_type(value: impl Into<String>) -> Self {
        Self::InvalidProcessingType(value.into())
    }

    /// Creates an InvalidCtaStyle error.
    pub fn invalid_cta_style(value: impl Into<String>) -> Self {
        Self::InvalidCtaStyle(value.into())
    }

    /// Creates an InvalidSubtitle error.
    pub fn invalid_subtitle(cue: usize, reason: impl Into<String>) -> Self {
        Self::InvalidSubtitle {
            cue,
            reason: reason.into(),
        }
    }

    /// Creates a Serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
