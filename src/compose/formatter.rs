//! Calls-to-action and illustration prompts.

use std::collections::HashSet;
use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use tracing::trace;

use crate::templates::{phrases, pick_from, CtaStyle, Language, Slot};

/// Maximum number of tokens carried into an image prompt.
const IMAGE_PROMPT_TOKENS: usize = 5;

static POSITIVE_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(feliz|felizes|felicidade|alegria|amor|sucesso|vitória|vitórias|esperança|conquista|conquistas|sonho|sonhos|happy|happiness|joy|love|success|victory|hope|dream|dreams|alegría|éxito|esperanza|glück|glücklich|freude|liebe|erfolg|hoffnung|bonheur|heureux|joie|amour|succès|victoire|espoir|rêve)\b",
    )
    .expect("positive marker pattern is valid")
});

static NEGATIVE_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(triste|tristeza|medo|dor|perda|perdas|fracasso|morte|raiva|crise|sad|sadness|fear|pain|loss|failure|death|anger|crisis|miedo|dolor|pérdida|fracaso|muerte|traurig|angst|schmerz|verlust|tod|wut|krise|peur|douleur|perte|échec|mort|colère)\b",
    )
    .expect("negative marker pattern is valid")
});

const POSITIVE_MOOD_PROMPT: &str = "Bright cinematic visual style, warm golden-hour lighting, vibrant saturated colors, uplifting atmosphere, soft lens flares, hopeful and energetic mood, consistent across every scene";
const NEGATIVE_MOOD_PROMPT: &str = "Dark cinematic visual style, low-key dramatic lighting, desaturated cold palette, heavy shadows, tense and melancholic atmosphere, consistent across every scene";
const NEUTRAL_MOOD_PROMPT: &str = "Clean cinematic visual style, balanced natural lighting, realistic color grading, documentary atmosphere, calm and focused mood, consistent across every scene";

/// Overall emotional tone detected in a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
}

impl Mood {
    /// Positive markers win when both sets match.
    pub fn detect(text: &str) -> Mood {
        if POSITIVE_MARKERS.is_match(text) {
            Mood::Positive
        } else if NEGATIVE_MARKERS.is_match(text) {
            Mood::Negative
        } else {
            Mood::Neutral
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Mood::Positive => POSITIVE_MOOD_PROMPT,
            Mood::Negative => NEGATIVE_MOOD_PROMPT,
            Mood::Neutral => NEUTRAL_MOOD_PROMPT,
        }
    }
}

/// Fixed call-to-action for a style; empty for `None`.
pub fn generate_cta(style: CtaStyle, language: Language) -> String {
    phrases(language, Slot::Cta(style))
        .first()
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Short call-to-action closing a block. The block position does not change
/// which phrases are eligible.
pub fn generate_mini_cta<R: Rng + ?Sized>(
    block_index: usize,
    total_blocks: usize,
    language: Language,
    rng: &mut R,
) -> String {
    trace!(block_index, total_blocks, "mini cta");
    pick_from(rng, language, Slot::MiniCta).to_string()
}

/// Illustration prompt built from the first distinct long words of `text`.
pub fn generate_image_prompt(text: &str) -> String {
    let mut seen = HashSet::new();
    let tokens: Vec<&str> = text
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|t| t.chars().count() > 3)
        .filter(|t| seen.insert(t.to_lowercase()))
        .take(IMAGE_PROMPT_TOKENS)
        .collect();

    let subject = if tokens.is_empty() {
        "the narrated scene".to_string()
    } else {
        tokens.join(", ")
    };
    format!(
        "Cinematic illustration of {subject}, dramatic lighting, shallow depth of field, highly detailed, 16:9 composition"
    )
}

/// Visual mood prompt for the whole script.
pub fn generate_master_prompt(text: &str) -> String {
    Mood::detect(text).prompt().to_string()
}
