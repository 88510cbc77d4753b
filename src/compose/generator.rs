//! Title, hook, introduction and conclusion generation.

use rand::Rng;

use crate::analyzer::extract_keywords;
use crate::templates::{fill, fill_keyword, pick_from, CtaStyle, Language, Slot};

/// Keywords shorter than this are not used to anchor an introduction.
const MIN_INTRO_KEYWORD_CHARS: usize = 5;

/// Composes `persona action subject hook`.
///
/// The subject is the micro-sub-domain, falling back to the sub-domain, the
/// domain and finally the language's placeholder subject when blank.
pub fn generate_title<R: Rng + ?Sized>(
    domain: &str,
    sub_domain: &str,
    micro_sub_domain: &str,
    language: Language,
    rng: &mut R,
) -> String {
    let subject = [micro_sub_domain, sub_domain, domain]
        .into_iter()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(language.placeholder_niche().2);

    let persona = pick_from(rng, language, Slot::TitlePersonas);
    let action = pick_from(rng, language, Slot::TitleActions);
    let hook = pick_from(rng, language, Slot::TitleHooks);

    [persona, action, subject, hook]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn generate_hook<R: Rng + ?Sized>(
    micro_sub_domain: &str,
    language: Language,
    rng: &mut R,
) -> String {
    fill(pick_from(rng, language, Slot::HookPhrases), micro_sub_domain)
}

/// Opens on the most frequent long keyword of the source text, or on the
/// subject itself when the text has none.
pub fn generate_introduction<R: Rng + ?Sized>(
    source_text: &str,
    micro_sub_domain: &str,
    language: Language,
    rng: &mut R,
) -> String {
    let keywords = extract_keywords(source_text, 5, language);
    let keyword = keywords
        .iter()
        .find(|k| k.chars().count() >= MIN_INTRO_KEYWORD_CHARS)
        .map(String::as_str)
        .unwrap_or(micro_sub_domain);

    fill_keyword(
        pick_from(rng, language, Slot::IntroPhrases),
        micro_sub_domain,
        keyword,
    )
}

/// Base conclusion, followed by the style's closing call-to-action unless the
/// style is `None`.
pub fn generate_conclusion<R: Rng + ?Sized>(
    micro_sub_domain: &str,
    cta_style: CtaStyle,
    language: Language,
    rng: &mut R,
) -> String {
    let base = fill(pick_from(rng, language, Slot::ConclusionBase), micro_sub_domain);
    if !cta_style.is_enabled() {
        return base;
    }
    let cta = pick_from(rng, language, Slot::ConclusionCta(cta_style));
    format!("{base} {cta}")
}
