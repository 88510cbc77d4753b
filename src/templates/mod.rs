//! Template bank: per-language, per-slot phrase lists.
//!
//! The bank is pure data. It is built once on first access and never
//! mutated. Looking up a slot ([`phrases`]) and choosing one of its variants
//! ([`pick`]) are kept apart so either can be tested on its own.
//!
//! Phrases may contain two placeholders:
//! - `{subject}`: the domain term being discussed
//! - `{keyword}`: a keyword lifted from the source text

mod de;
mod en;
mod es;
mod fr;
pub mod language;
mod pt;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ScriptError;
pub use language::Language;

/// Subject placeholder token.
pub const SUBJECT: &str = "{subject}";

/// Keyword placeholder token.
pub const KEYWORD: &str = "{keyword}";

// =============================================================================
// CTA STYLE
// =============================================================================

/// Tone of the calls-to-action appended to a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaStyle {
    #[default]
    Emotional,
    Appeal,
    Reflective,
    None,
}

impl CtaStyle {
    /// Returns true unless the style is `None`.
    pub fn is_enabled(self) -> bool {
        self != CtaStyle::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CtaStyle::Emotional => "emotional",
            CtaStyle::Appeal => "appeal",
            CtaStyle::Reflective => "reflective",
            CtaStyle::None => "none",
        }
    }
}

impl fmt::Display for CtaStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CtaStyle {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emotional" => Ok(CtaStyle::Emotional),
            "appeal" => Ok(CtaStyle::Appeal),
            "reflective" => Ok(CtaStyle::Reflective),
            "none" => Ok(CtaStyle::None),
            _ => Err(ScriptError::invalid_cta_style(s)),
        }
    }
}

// =============================================================================
// SLOTS
// =============================================================================

/// A named template category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Situation,
    Conflict,
    Resolution,
    Question,
    ForwardReference,
    /// Stands in for the forward reference on the last block.
    Closing,
    TitlePersonas,
    TitleActions,
    TitleHooks,
    HookPhrases,
    IntroPhrases,
    ConclusionBase,
    ConclusionCta(CtaStyle),
    /// Standalone call-to-action block; one fixed phrase per style.
    Cta(CtaStyle),
    MiniCta,
}

impl Slot {
    /// Every slot a complete language bank must fill.
    pub const REQUIRED: [Slot; 19] = [
        Slot::Situation,
        Slot::Conflict,
        Slot::Resolution,
        Slot::Question,
        Slot::ForwardReference,
        Slot::Closing,
        Slot::TitlePersonas,
        Slot::TitleActions,
        Slot::TitleHooks,
        Slot::HookPhrases,
        Slot::IntroPhrases,
        Slot::ConclusionBase,
        Slot::ConclusionCta(CtaStyle::Emotional),
        Slot::ConclusionCta(CtaStyle::Appeal),
        Slot::ConclusionCta(CtaStyle::Reflective),
        Slot::Cta(CtaStyle::Emotional),
        Slot::Cta(CtaStyle::Appeal),
        Slot::Cta(CtaStyle::Reflective),
        Slot::MiniCta,
    ];

    /// Slot name as used in template tables (`conclusion-cta-emotional`, ...).
    pub fn name(self) -> String {
        match self {
            Slot::Situation => "situation".into(),
            Slot::Conflict => "conflict".into(),
            Slot::Resolution => "resolution".into(),
            Slot::Question => "question".into(),
            Slot::ForwardReference => "forwardReference".into(),
            Slot::Closing => "closing".into(),
            Slot::TitlePersonas => "title-personas".into(),
            Slot::TitleActions => "title-actions".into(),
            Slot::TitleHooks => "title-hooks".into(),
            Slot::HookPhrases => "hook-phrases".into(),
            Slot::IntroPhrases => "intro-phrases".into(),
            Slot::ConclusionBase => "conclusion-base".into(),
            Slot::ConclusionCta(style) => format!("conclusion-cta-{style}"),
            Slot::Cta(style) => format!("cta-{style}"),
            Slot::MiniCta => "mini-cta".into(),
        }
    }
}

type Entries = &'static [(Slot, &'static [&'static str])];

// =============================================================================
// BANK
// =============================================================================

/// Immutable (language, slot) → phrases map.
pub struct TemplateBank {
    entries: HashMap<(Language, Slot), &'static [&'static str]>,
}

static BANK: LazyLock<TemplateBank> = LazyLock::new(TemplateBank::build);

impl TemplateBank {
    fn build() -> Self {
        let tables: [(Language, Entries); 5] = [
            (Language::Pt, pt::ENTRIES),
            (Language::En, en::ENTRIES),
            (Language::Es, es::ENTRIES),
            (Language::De, de::ENTRIES),
            (Language::Fr, fr::ENTRIES),
        ];
        let mut entries = HashMap::new();
        for (language, table) in tables {
            for &(slot, phrases) in table {
                entries.insert((language, slot), phrases);
            }
        }
        Self { entries }
    }

    /// The process-wide bank.
    pub fn global() -> &'static TemplateBank {
        &BANK
    }

    /// Phrases for a slot; empty if the slot is not filled for the language.
    pub fn get(&self, language: Language, slot: Slot) -> &'static [&'static str] {
        self.entries.get(&(language, slot)).copied().unwrap_or(&[])
    }
}

/// Looks up the phrase list for a slot in the global bank.
pub fn phrases(language: Language, slot: Slot) -> &'static [&'static str] {
    TemplateBank::global().get(language, slot)
}

/// Uniformly picks one phrase; empty string for an empty list.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, phrases: &[&'static str]) -> &'static str {
    phrases.choose(rng).copied().unwrap_or_default()
}

/// Picks a phrase from a slot of the global bank.
pub fn pick_from<R: Rng + ?Sized>(rng: &mut R, language: Language, slot: Slot) -> &'static str {
    pick(rng, phrases(language, slot))
}

/// Replaces every `{subject}` in a template.
pub fn fill(template: &str, subject: &str) -> String {
    template.replace(SUBJECT, subject)
}

/// Replaces `{subject}` and `{keyword}` in a template.
pub fn fill_keyword(template: &str, subject: &str, keyword: &str) -> String {
    template.replace(SUBJECT, subject).replace(KEYWORD, keyword)
}
