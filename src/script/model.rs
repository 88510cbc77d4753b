//! Data models for script processing.
//!
//! Field names serialize as camelCase: the dashboard consuming these records
//! is a JavaScript client.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ScriptError, ScriptResult};
use crate::subtitles::SubtitleCue;
use crate::templates::{CtaStyle, Language};

// =============================================================================
// PROCESSING TYPE
// =============================================================================

/// Which pipeline the processor runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingType {
    /// Split the source text into blocks.
    #[default]
    Simple,
    /// Regenerate a structured script from the source text.
    Remodel,
}

impl fmt::Display for ProcessingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingType::Simple => f.write_str("simple"),
            ProcessingType::Remodel => f.write_str("remodel"),
        }
    }
}

impl FromStr for ProcessingType {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(ProcessingType::Simple),
            "remodel" => Ok(ProcessingType::Remodel),
            _ => Err(ScriptError::invalid_processing_type(s)),
        }
    }
}

// =============================================================================
// NICHE
// =============================================================================

/// Subject terms identified for the source text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Niche {
    pub domain: String,
    pub sub_domain: String,
    pub micro_sub_domain: String,
}

impl Niche {
    pub fn new(
        domain: impl Into<String>,
        sub_domain: impl Into<String>,
        micro_sub_domain: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            sub_domain: sub_domain.into(),
            micro_sub_domain: micro_sub_domain.into(),
        }
    }

    /// Language-specific stand-in used when no niche was identified.
    pub fn placeholder(language: Language) -> Self {
        let (domain, sub_domain, micro_sub_domain) = language.placeholder_niche();
        Self::new(domain, sub_domain, micro_sub_domain)
    }
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Largest block count a single call produces.
pub const MAX_BLOCK_COUNT: usize = 1_000;

/// Options for a single processing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScriptConfiguration {
    pub processing_type: ProcessingType,

    /// Requested number of blocks. Zero or negative yields no blocks; counts
    /// above [`MAX_BLOCK_COUNT`] are capped.
    pub block_count: i64,

    /// Raw language code; resolved once per call.
    pub language: String,

    pub cta_style: CtaStyle,
    pub generate_image_prompts: bool,
    pub generate_master_prompt: bool,
    pub convert_to_subtitles: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_identified_niche: Option<Niche>,

    /// Substitute words of simple-mode blocks into `language`.
    pub translate_blocks: bool,

    /// Language the source text is written in.
    pub source_language: String,
}

impl Default for ScriptConfiguration {
    fn default() -> Self {
        Self {
            processing_type: ProcessingType::Simple,
            block_count: 3,
            language: Language::DEFAULT.code().to_string(),
            cta_style: CtaStyle::None,
            generate_image_prompts: false,
            generate_master_prompt: false,
            convert_to_subtitles: false,
            auto_identified_niche: None,
            translate_blocks: false,
            source_language: Language::DEFAULT.code().to_string(),
        }
    }
}

impl ScriptConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON; missing fields take defaults.
    pub fn from_json(json: &str) -> ScriptResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder: Set processing type.
    pub fn with_processing_type(mut self, processing_type: ProcessingType) -> Self {
        self.processing_type = processing_type;
        self
    }

    /// Builder: Set block count.
    pub fn with_block_count(mut self, block_count: i64) -> Self {
        self.block_count = block_count;
        self
    }

    /// Builder: Set language code.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder: Set CTA style.
    pub fn with_cta_style(mut self, cta_style: CtaStyle) -> Self {
        self.cta_style = cta_style;
        self
    }

    /// Builder: Toggle per-block image prompts.
    pub fn with_image_prompts(mut self, enabled: bool) -> Self {
        self.generate_image_prompts = enabled;
        self
    }

    /// Builder: Toggle the master prompt.
    pub fn with_master_prompt(mut self, enabled: bool) -> Self {
        self.generate_master_prompt = enabled;
        self
    }

    /// Builder: Toggle subtitle track generation.
    pub fn with_subtitles(mut self, enabled: bool) -> Self {
        self.convert_to_subtitles = enabled;
        self
    }

    /// Builder: Set the identified niche.
    pub fn with_niche(mut self, niche: Niche) -> Self {
        self.auto_identified_niche = Some(niche);
        self
    }

    /// Builder: Toggle lexical translation of simple-mode blocks.
    pub fn with_translation(mut self, source_language: impl Into<String>) -> Self {
        self.translate_blocks = true;
        self.source_language = source_language.into();
        self
    }

    /// The language every template lookup of this call uses.
    pub fn resolved_language(&self) -> Language {
        Language::resolve(&self.language)
    }

    /// Block count clamped to `0..=MAX_BLOCK_COUNT`.
    pub fn effective_block_count(&self) -> usize {
        usize::try_from(self.block_count.max(0))
            .unwrap_or(usize::MAX)
            .min(MAX_BLOCK_COUNT)
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// One block of the processed script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptBlock {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mini_cta: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
}

impl ScriptBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mini_cta: None,
            image_prompt: None,
        }
    }

    /// Builder: Set mini CTA.
    pub fn with_mini_cta(mut self, mini_cta: impl Into<String>) -> Self {
        self.mini_cta = Some(mini_cta.into());
        self
    }

    /// Builder: Set image prompt.
    pub fn with_image_prompt(mut self, image_prompt: impl Into<String>) -> Self {
        self.image_prompt = Some(image_prompt.into());
        self
    }
}

/// Content statistics. `characters_without_spaces <= characters_with_spaces`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptStatistics {
    pub characters_with_spaces: usize,
    pub characters_without_spaces: usize,
    pub word_count: usize,
    pub line_count: usize,
}

/// Generated framing of a remodeled script. Every field is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemodeledScript {
    pub title: String,
    pub hook: String,
    pub introduction: String,
    pub conclusion: String,
}

/// Result of a processing call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedScript {
    pub original_text: String,

    /// Language the script was produced in.
    pub language: Language,

    pub blocks: Vec<ScriptBlock>,
    pub statistics: ScriptStatistics,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_prompt: Option<String>,

    /// SRT-formatted track.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_track: Option<String>,

    /// Cues the track was rendered from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cues: Vec<SubtitleCue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remodeled: Option<RemodeledScript>,
}

impl ProcessedScript {
    /// Returns the number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if there are no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Converts to a JSON value using the camelCase contract.
    pub fn to_json_value(&self) -> ScriptResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_defaults() {
        let config = ScriptConfiguration::default();
        assert_eq!(config.processing_type, ProcessingType::Simple);
        assert_eq!(config.block_count, 3);
        assert_eq!(config.resolved_language(), Language::Pt);
        assert_eq!(config.cta_style, CtaStyle::None);
        assert!(config.auto_identified_niche.is_none());
    }

    #[test]
    fn test_configuration_builder() {
        let config = ScriptConfiguration::new()
            .with_processing_type(ProcessingType::Remodel)
            .with_block_count(5)
            .with_language("en-US")
            .with_cta_style(CtaStyle::Appeal)
            .with_image_prompts(true)
            .with_subtitles(true)
            .with_niche(Niche::new("Tech", "Programming", "Rust"));

        assert_eq!(config.processing_type, ProcessingType::Remodel);
        assert_eq!(config.effective_block_count(), 5);
        assert_eq!(config.resolved_language(), Language::En);
        assert!(config.generate_image_prompts);
        assert!(!config.generate_master_prompt);
        assert_eq!(
            config.auto_identified_niche.unwrap().micro_sub_domain,
            "Rust"
        );
    }

    #[test]
    fn test_negative_block_count_clamps() {
        let config = ScriptConfiguration::new().with_block_count(-4);
        assert_eq!(config.effective_block_count(), 0);

        let config = ScriptConfiguration::new().with_block_count(i64::MAX);
        assert_eq!(config.effective_block_count(), MAX_BLOCK_COUNT);
    }

    #[test]
    fn test_configuration_from_camel_case_json() {
        let json = r#"{
            "processingType": "remodel",
            "blockCount": 2,
            "language": "fr",
            "ctaStyle": "reflective",
            "convertToSubtitles": true,
            "autoIdentifiedNiche": { "domain": "Cuisine", "microSubDomain": "pain au levain" }
        }"#;
        let config = ScriptConfiguration::from_json(json).unwrap();
        assert_eq!(config.processing_type, ProcessingType::Remodel);
        assert_eq!(config.block_count, 2);
        assert_eq!(config.cta_style, CtaStyle::Reflective);
        assert!(config.convert_to_subtitles);
        let niche = config.auto_identified_niche.unwrap();
        assert_eq!(niche.domain, "Cuisine");
        assert_eq!(niche.sub_domain, "");
        assert_eq!(niche.micro_sub_domain, "pain au levain");
    }

    #[test]
    fn test_configuration_rejects_unknown_enum_values() {
        assert!(ScriptConfiguration::from_json(r#"{"ctaStyle": "loud"}"#).is_err());
        assert!("split".parse::<ProcessingType>().is_err());
        assert_eq!("Remodel".parse::<ProcessingType>().unwrap(), ProcessingType::Remodel);
    }

    #[test]
    fn test_block_builder() {
        let block = ScriptBlock::new("text")
            .with_mini_cta("like")
            .with_image_prompt("cinematic");
        assert_eq!(block.text, "text");
        assert_eq!(block.mini_cta.as_deref(), Some("like"));
        assert_eq!(block.image_prompt.as_deref(), Some("cinematic"));
    }

    #[test]
    fn test_processed_script_json_contract() {
        let script = ProcessedScript {
            original_text: "hello".into(),
            blocks: vec![ScriptBlock::new("hello")],
            ..Default::default()
        };
        let json = script.to_json_value().unwrap();
        assert_eq!(json["originalText"], "hello");
        assert_eq!(json["language"], "pt");
        assert_eq!(json["statistics"]["charactersWithSpaces"], 0);
        assert!(json.get("subtitleTrack").is_none());
        assert!(json["blocks"][0].get("miniCta").is_none());
    }
}
