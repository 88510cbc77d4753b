//! WASM bindings for the script module.
//!
//! This module provides JavaScript-friendly wrappers around
//! [`ScriptProcessor`] and the text analysis helpers for use in browser
//! environments.

use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use super::export;
use super::model::ScriptConfiguration;
use super::processor::ScriptProcessor;
use crate::analyzer::{compute_statistics, extract_keywords};
use crate::error::ScriptError;
use crate::subtitles::srt;
use crate::templates::Language;

/// Serialize a value to JsValue with maps as plain JS objects (not Map).
fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&Serializer::new().serialize_maps_as_objects(true))
}

/// Missing configuration objects take the defaults.
fn config_from_js(config: JsValue) -> Result<ScriptConfiguration, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(ScriptConfiguration::default());
    }
    Ok(from_value(config)?)
}

// =============================================================================
// ERROR CONVERSION
// =============================================================================

impl From<ScriptError> for JsValue {
    fn from(err: ScriptError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Helper macro for Result conversion
macro_rules! js_result {
    ($expr:expr) => {
        $expr.map_err(|e: ScriptError| JsValue::from(e))
    };
}

// =============================================================================
// MAIN WRAPPER TYPE
// =============================================================================

/// JavaScript-friendly wrapper around ScriptProcessor.
#[wasm_bindgen]
pub struct JsScriptProcessor {
    inner: ScriptProcessor,
}

#[wasm_bindgen]
impl JsScriptProcessor {
    /// Creates a processor seeded from browser entropy.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const processor = new JsScriptProcessor();
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsScriptProcessor {
        JsScriptProcessor {
            inner: ScriptProcessor::new(),
        }
    }

    /// Creates a processor with reproducible output.
    ///
    /// The seed is a `BigInt` on the JavaScript side.
    #[wasm_bindgen(js_name = seeded)]
    pub fn seeded(seed: u64) -> JsScriptProcessor {
        JsScriptProcessor {
            inner: ScriptProcessor::seeded(seed),
        }
    }

    /// Processes a script. `config` uses the camelCase configuration shape;
    /// missing fields take their defaults.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const script = processor.processScript(text, {
    ///   processingType: 'remodel',
    ///   blockCount: 3,
    ///   language: 'en',
    ///   ctaStyle: 'reflective',
    ///   convertToSubtitles: true,
    /// });
    /// console.log(script.remodeled.title);
    /// console.log(script.subtitleTrack);
    /// ```
    #[wasm_bindgen(js_name = processScript)]
    pub fn process_script(&mut self, text: &str, config: JsValue) -> Result<JsValue, JsValue> {
        let config = config_from_js(config)?;
        let script = self.inner.process(text, &config);
        Ok(to_js_value(&script)?)
    }

    /// Processes a script and returns its plain-text rendering.
    #[wasm_bindgen(js_name = processToText)]
    pub fn process_to_text(&mut self, text: &str, config: JsValue) -> Result<String, JsValue> {
        let config = config_from_js(config)?;
        let script = self.inner.process(text, &config);
        Ok(export::plain_text(&script))
    }
}

impl Default for JsScriptProcessor {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// ANALYSIS FUNCTIONS
// =============================================================================

/// Character, word and line counts of a text.
///
/// # Example (JavaScript)
/// ```js
/// const stats = computeStatistics('one two\nthree');
/// console.log(stats.wordCount); // 3
/// ```
#[wasm_bindgen(js_name = computeStatistics)]
pub fn compute_statistics_js(text: &str) -> Result<JsValue, JsValue> {
    Ok(to_js_value(&compute_statistics(text))?)
}

/// Most frequent keywords of a text. Unknown languages use Portuguese stop
/// words.
#[wasm_bindgen(js_name = extractKeywords)]
pub fn extract_keywords_js(text: &str, count: usize, language: &str) -> Result<JsValue, JsValue> {
    let keywords = extract_keywords(text, count, Language::resolve(language));
    Ok(to_js_value(&keywords)?)
}

/// Parses a SubRip track into cue objects, rejecting malformed tracks.
#[wasm_bindgen(js_name = parseSubtitles)]
pub fn parse_subtitles_js(track: &str) -> Result<JsValue, JsValue> {
    let cues = js_result!(srt::parse(track))?;
    Ok(to_js_value(&cues)?)
}

/// Strictly validates a language code.
#[wasm_bindgen(js_name = isSupportedLanguage)]
pub fn is_supported_language(code: &str) -> bool {
    Language::parse_strict(code).is_ok()
}
