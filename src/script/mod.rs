//! Script processing module.
//!
//! Provides the configuration and output models, the two processing
//! pipelines and the plain-text/subtitle exports.

pub mod export;
pub mod model;
pub mod processor;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use model::{
    Niche, ProcessedScript, ProcessingType, RemodeledScript, ScriptBlock, ScriptConfiguration,
    ScriptStatistics,
};
pub use processor::{process_script, split_into_blocks, ScriptProcessor};

#[cfg(feature = "wasm")]
pub use wasm::JsScriptProcessor;
