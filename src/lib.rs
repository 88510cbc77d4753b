//! ScriptForge - Template-driven narration script processor.
//!
//! Turns a raw source text into a production-ready script for short videos,
//! using one of two pipelines:
//!
//! - **Simple**: split the text into word-balanced blocks, optionally ending
//!   with a call-to-action block
//! - **Remodel**: regenerate a framed script (title, hook, introduction,
//!   thematic blocks with mini CTAs, conclusion) from a multilingual
//!   template bank
//!
//! Either pipeline can attach image prompts, a master visual-mood prompt and
//! a contiguous SubRip subtitle track. All phrase choices draw from an
//! injected random source, so seeded runs are reproducible.
//!
//! # Example
//!
//! ```rust
//! use scriptforge::{CtaStyle, Niche, ProcessingType, ScriptConfiguration, ScriptProcessor};
//!
//! let config = ScriptConfiguration::new()
//!     .with_processing_type(ProcessingType::Remodel)
//!     .with_block_count(2)
//!     .with_language("en")
//!     .with_cta_style(CtaStyle::Reflective)
//!     .with_subtitles(true)
//!     .with_niche(Niche::new("Food", "Baking", "sourdough"));
//!
//! let mut processor = ScriptProcessor::seeded(42);
//! let script = processor.process("Sourdough needs patience and warmth.", &config);
//!
//! assert_eq!(script.blocks.len(), 2);
//! assert!(script.subtitle_track.is_some());
//! ```

pub mod analyzer;
pub mod compose;
pub mod error;
pub mod script;
pub mod subtitles;
pub mod templates;
pub mod translate;

// Re-exports for convenience
pub use error::{ScriptError, ScriptResult};
pub use script::{
    process_script, Niche, ProcessedScript, ProcessingType, RemodeledScript, ScriptBlock,
    ScriptConfiguration, ScriptProcessor, ScriptStatistics,
};
pub use subtitles::SubtitleCue;
pub use templates::{CtaStyle, Language};

#[cfg(feature = "wasm")]
pub use script::JsScriptProcessor;
