//! Script processing pipelines.
//!
//! [`process_script`] runs one of two pipelines chosen by the configuration:
//! - **simple**: split the source text into word-balanced blocks
//! - **remodel**: regenerate a framed script (title, hook, introduction,
//!   thematic blocks with mini CTAs, conclusion)
//!
//! Both are total: any configuration produces a [`ProcessedScript`]. The
//! language is resolved once per call and passed down to every component,
//! so one script never mixes template banks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::model::{
    Niche, ProcessedScript, ProcessingType, RemodeledScript, ScriptBlock, ScriptConfiguration,
};
use crate::analyzer::{compute_statistics, compute_statistics_from_parts, extract_keywords};
use crate::compose::{
    generate_conclusion, generate_cta, generate_hook, generate_image_prompt,
    generate_introduction, generate_master_prompt, generate_mini_cta, generate_title,
    remodel_block,
};
use crate::subtitles::{srt, timeline};
use crate::templates::Language;
use crate::translate::translate_text;

/// Size of the keyword pool shared by all remodeled blocks.
const KEYWORD_POOL_SIZE: usize = 10;

/// Owns the random source used for phrase selection.
///
/// `ScriptProcessor::new()` seeds from OS entropy, so repeated calls vary.
/// Tests and reproducible runs use [`ScriptProcessor::seeded`] or
/// [`ScriptProcessor::with_rng`].
pub struct ScriptProcessor<R: Rng = StdRng> {
    rng: R,
}

impl ScriptProcessor<StdRng> {
    /// Creates a processor with an entropy-seeded random source.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a processor whose output is reproducible for a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ScriptProcessor<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ScriptProcessor<R> {
    /// Creates a processor drawing from the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Processes `text` according to `config`.
    pub fn process(&mut self, text: &str, config: &ScriptConfiguration) -> ProcessedScript {
        process_script(text, config, &mut self.rng)
    }
}

/// Processes `text` according to `config`, drawing phrase choices from `rng`.
pub fn process_script<R: Rng + ?Sized>(
    text: &str,
    config: &ScriptConfiguration,
    rng: &mut R,
) -> ProcessedScript {
    let language = config.resolved_language();
    let mut script = match config.processing_type {
        ProcessingType::Simple => process_simple(text, config, language),
        ProcessingType::Remodel => process_remodel(text, config, language, rng),
    };

    if config.generate_master_prompt {
        script.master_prompt = Some(generate_master_prompt(text));
    }

    debug!(
        pipeline = %config.processing_type,
        language = %language,
        requested_blocks = config.block_count,
        blocks = script.blocks.len(),
        cues = script.cues.len(),
        "processed script"
    );
    script
}

// =============================================================================
// SIMPLE PIPELINE
// =============================================================================

/// Splits `text` into at most `block_count` chunks of `ceil(words / block_count)`
/// words. Fewer chunks come back when the words run out first.
pub fn split_into_blocks(text: &str, block_count: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if block_count == 0 || words.is_empty() {
        return Vec::new();
    }
    let chunk_size = words.len().div_ceil(block_count);
    words.chunks(chunk_size).map(|chunk| chunk.join(" ")).collect()
}

fn process_simple(text: &str, config: &ScriptConfiguration, language: Language) -> ProcessedScript {
    let source_language = Language::resolve(&config.source_language);
    let translate = config.translate_blocks && source_language != language;

    let mut blocks: Vec<ScriptBlock> = split_into_blocks(text, config.effective_block_count())
        .into_iter()
        .map(|chunk| {
            let chunk = if translate {
                translate_text(&chunk, source_language, language)
            } else {
                chunk
            };
            if config.generate_image_prompts {
                let image_prompt = generate_image_prompt(&chunk);
                ScriptBlock::new(chunk).with_image_prompt(image_prompt)
            } else {
                ScriptBlock::new(chunk)
            }
        })
        .collect();

    if config.cta_style.is_enabled() && !blocks.is_empty() {
        blocks.push(ScriptBlock::new(generate_cta(config.cta_style, language)));
    }

    let mut script = ProcessedScript {
        original_text: text.to_string(),
        language,
        statistics: compute_statistics(text),
        ..Default::default()
    };

    if config.convert_to_subtitles {
        let cues = timeline::build_simple(&blocks);
        script.subtitle_track = Some(srt::render(&cues));
        script.cues = cues;
    }
    script.blocks = blocks;
    script
}

// =============================================================================
// REMODEL PIPELINE
// =============================================================================

/// Fills blank niche fields from the language placeholder. A blank
/// micro-sub-domain borrows the nearest non-blank broader term.
fn resolve_niche(niche: Option<&Niche>, language: Language) -> Niche {
    let placeholder = Niche::placeholder(language);
    let Some(niche) = niche else {
        return placeholder;
    };

    let pick = |value: &str, fallback: &str| {
        let value = value.trim();
        if value.is_empty() {
            fallback.to_string()
        } else {
            value.to_string()
        }
    };
    let domain = pick(&niche.domain, &placeholder.domain);
    let sub_domain = pick(&niche.sub_domain, &placeholder.sub_domain);
    let micro_fallback = [niche.sub_domain.trim(), niche.domain.trim()]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or(placeholder.micro_sub_domain.as_str());
    let micro_sub_domain = pick(&niche.micro_sub_domain, micro_fallback);

    Niche::new(domain, sub_domain, micro_sub_domain)
}

fn process_remodel<R: Rng + ?Sized>(
    text: &str,
    config: &ScriptConfiguration,
    language: Language,
    rng: &mut R,
) -> ProcessedScript {
    let niche = resolve_niche(config.auto_identified_niche.as_ref(), language);
    let micro = niche.micro_sub_domain.as_str();

    let title = generate_title(&niche.domain, &niche.sub_domain, micro, language, rng);
    let hook = generate_hook(micro, language, rng);
    let introduction = generate_introduction(text, micro, language, rng);

    // every block draws from the same pool
    let keyword_pool = extract_keywords(text, KEYWORD_POOL_SIZE, language).join(" ");
    let total_blocks = config.effective_block_count();
    let mut blocks = Vec::new();
    for block_index in 1..=total_blocks {
        let body = remodel_block(&keyword_pool, block_index, total_blocks, micro, language, rng);
        let mini_cta = generate_mini_cta(block_index, total_blocks, language, rng);
        let mut block = ScriptBlock::new(body).with_mini_cta(mini_cta);
        if config.generate_image_prompts {
            let image_prompt = generate_image_prompt(&block.text);
            block = block.with_image_prompt(image_prompt);
        }
        blocks.push(block);
    }

    let conclusion = generate_conclusion(micro, config.cta_style, language, rng);
    let statistics =
        compute_statistics_from_parts(&title, &hook, &introduction, &blocks, &conclusion);

    let remodeled = RemodeledScript {
        title,
        hook,
        introduction,
        conclusion,
    };

    let mut script = ProcessedScript {
        original_text: text.to_string(),
        language,
        statistics,
        ..Default::default()
    };

    if config.convert_to_subtitles {
        let cues = timeline::build_remodeled(&remodeled, &blocks);
        script.subtitle_track = Some(srt::render(&cues));
        script.cues = cues;
    }
    script.blocks = blocks;
    script.remodeled = Some(remodeled);
    script
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::model::MAX_BLOCK_COUNT;
    use crate::subtitles::timeline::{
        CONCLUSION_SECS, HOOK_SECS, INTRODUCTION_SECS, MINI_CTA_SECS, TITLE_SECS,
    };
    use crate::templates::{phrases, CtaStyle, Slot};
    use rand::rngs::mock::StepRng;

    fn distinct_words(n: usize) -> String {
        (0..n).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ")
    }

    fn simple(blocks: i64, cta: CtaStyle) -> ScriptConfiguration {
        ScriptConfiguration::new()
            .with_processing_type(ProcessingType::Simple)
            .with_block_count(blocks)
            .with_cta_style(cta)
    }

    fn remodel(blocks: i64) -> ScriptConfiguration {
        ScriptConfiguration::new()
            .with_processing_type(ProcessingType::Remodel)
            .with_block_count(blocks)
    }

    #[test]
    fn test_split_into_blocks() {
        assert_eq!(split_into_blocks("a b c d e", 2), vec!["a b c", "d e"]);
        assert_eq!(split_into_blocks("a b c", 1), vec!["a b c"]);
        assert!(split_into_blocks("a b c", 0).is_empty());
        assert!(split_into_blocks("   ", 3).is_empty());
    }

    #[test]
    fn test_split_yields_fewer_blocks_when_words_run_out() {
        // chunk size ceil(5 / 4) = 2 leaves only three chunks
        assert_eq!(split_into_blocks("a b c d e", 4), vec!["a b", "c d", "e"]);
        assert_eq!(split_into_blocks("a b", 5), vec!["a", "b"]);
    }

    #[test]
    fn test_simple_three_blocks_of_twenty() {
        let text = distinct_words(60);
        let mut processor = ScriptProcessor::seeded(1);
        let script = processor.process(&text, &simple(3, CtaStyle::None));

        assert_eq!(script.len(), 3);
        for block in &script.blocks {
            assert_eq!(block.text.split_whitespace().count(), 20);
            assert!(block.mini_cta.is_none());
        }
        assert!(script.remodeled.is_none());
    }

    #[test]
    fn test_simple_appends_emotional_cta() {
        let text = distinct_words(60);
        let mut processor = ScriptProcessor::seeded(1);
        let script = processor.process(&text, &simple(3, CtaStyle::Emotional));

        assert_eq!(script.len(), 4);
        assert_eq!(
            script.blocks[3].text,
            generate_cta(CtaStyle::Emotional, Language::Pt)
        );
    }

    #[test]
    fn test_simple_split_covers_every_word_in_order() {
        let text = "  The quick\tbrown fox\njumps over\r\nthe lazy dog, again and again.  ";
        for count in 1..=12 {
            let script = ScriptProcessor::seeded(0).process(text, &simple(count, CtaStyle::Appeal));
            let content = &script.blocks[..script.len() - 1];
            let rebuilt: Vec<&str> = content
                .iter()
                .flat_map(|b| b.text.split_whitespace())
                .collect();
            let original: Vec<&str> = text.split_whitespace().collect();
            assert_eq!(rebuilt, original, "block count {count}");
            assert!(content.len() <= count as usize);
        }
    }

    #[test]
    fn test_simple_statistics_use_original_text() {
        let text = "one two\nthree";
        let script = ScriptProcessor::seeded(0).process(text, &simple(2, CtaStyle::Reflective));
        assert_eq!(script.statistics, compute_statistics(text));
        assert_eq!(script.original_text, text);
    }

    #[test]
    fn test_simple_empty_text_yields_no_blocks() {
        let script = ScriptProcessor::seeded(0).process("", &simple(3, CtaStyle::Emotional));
        assert!(script.is_empty());
        assert_eq!(script.statistics.word_count, 0);
        assert_eq!(script.statistics.characters_with_spaces, 0);
    }

    #[test]
    fn test_zero_block_count() {
        let text = distinct_words(10);
        let mut processor = ScriptProcessor::seeded(2);

        let script = processor.process(&text, &simple(0, CtaStyle::Emotional));
        assert!(script.is_empty());
        assert_eq!(script.statistics.word_count, 10);

        let script = processor.process(&text, &remodel(0).with_subtitles(true));
        assert!(script.is_empty());
        assert!(script.statistics.word_count > 0);
        // title, hook, introduction, conclusion
        assert_eq!(script.cues.len(), 4);

        let script = processor.process(&text, &simple(-3, CtaStyle::None));
        assert!(script.is_empty());
    }

    #[test]
    fn test_huge_block_count_is_capped() {
        let mut processor = ScriptProcessor::seeded(3);

        let script = processor.process("", &remodel(i64::MAX));
        assert_eq!(script.len(), MAX_BLOCK_COUNT);
        assert!(script.remodeled.is_some());

        let script = processor.process("one two three", &simple(i64::MAX, CtaStyle::None));
        assert_eq!(script.len(), 3);
    }

    #[test]
    fn test_remodel_image_prompts_on_every_block() {
        let config = remodel(2).with_language("en").with_image_prompts(true);
        let script = ScriptProcessor::seeded(4).process("Lighthouses guard stormy coasts", &config);
        for block in &script.blocks {
            let prompt = block.image_prompt.as_deref().unwrap();
            assert_eq!(prompt, generate_image_prompt(&block.text));
        }
    }

    #[test]
    fn test_simple_whitespace_only_text_yields_no_blocks() {
        let config = simple(3, CtaStyle::Emotional).with_subtitles(true);
        let script = ScriptProcessor::seeded(0).process(" \t\n ", &config);
        assert!(script.is_empty());
        assert!(script.cues.is_empty());
        assert_eq!(script.statistics.word_count, 0);
        assert_eq!(script.statistics.characters_without_spaces, 0);
        assert_eq!(script.statistics.line_count, 2);
    }

    #[test]
    fn test_simple_image_prompts_on_content_blocks_only() {
        let text = "Mountains rising above quiet valleys while rivers carve ancient stone";
        let config = simple(2, CtaStyle::Appeal).with_image_prompts(true);
        let script = ScriptProcessor::seeded(0).process(text, &config);

        assert_eq!(script.len(), 3);
        assert!(script.blocks[0].image_prompt.as_deref().unwrap().contains("Mountains"));
        assert!(script.blocks[1].image_prompt.is_some());
        assert!(script.blocks[2].image_prompt.is_none());
    }

    #[test]
    fn test_simple_subtitles() {
        let text = distinct_words(30);
        let config = simple(3, CtaStyle::Emotional).with_subtitles(true);
        let script = ScriptProcessor::seeded(0).process(&text, &config);

        assert_eq!(script.cues.len(), 4);
        assert_eq!(script.cues[3].end_ms, 40_000);
        let track = script.subtitle_track.unwrap();
        assert!(track.starts_with("1\n00:00:00,000 --> 00:00:10,000\nword0 "));
        assert_eq!(srt::parse(&track).unwrap(), script.cues);
    }

    #[test]
    fn test_simple_translation() {
        let config = simple(1, CtaStyle::None)
            .with_language("en")
            .with_translation("pt");
        let script = ScriptProcessor::seeded(0).process("A vida é um livro", &config);
        assert_eq!(script.blocks[0].text, "A life é um book");
        assert_eq!(script.statistics, compute_statistics("A vida é um livro"));

        // no translation without the flag
        let config = simple(1, CtaStyle::None).with_language("en");
        let script = ScriptProcessor::seeded(0).process("A vida é um livro", &config);
        assert_eq!(script.blocks[0].text, "A vida é um livro");
    }

    #[test]
    fn test_remodel_scenario_two_blocks_with_subtitles() {
        let text = "Sourdough bread needs patience. Sourdough starters need feeding and warmth.";
        let config = remodel(2)
            .with_language("en")
            .with_cta_style(CtaStyle::Reflective)
            .with_subtitles(true)
            .with_niche(Niche::new("Food", "Baking", "sourdough"));
        let script = ScriptProcessor::seeded(42).process(text, &config);

        assert_eq!(script.len(), 2);
        let mini_ctas = script.blocks.iter().filter(|b| b.mini_cta.is_some()).count();
        assert_eq!(script.cues.len(), 3 + 2 + mini_ctas + 1);

        let conclusion = script.cues.last().unwrap();
        let preceding: u64 = script.cues[..script.cues.len() - 1]
            .iter()
            .map(|c| c.duration_ms())
            .sum();
        assert_eq!(conclusion.start_ms, preceding);
        assert_eq!(conclusion.duration_ms(), CONCLUSION_SECS * 1000);

        let durations: Vec<u64> = script.cues[..3].iter().map(|c| c.duration_ms() / 1000).collect();
        assert_eq!(durations, vec![TITLE_SECS, HOOK_SECS, INTRODUCTION_SECS]);
        assert_eq!(script.cues[4].duration_ms(), MINI_CTA_SECS * 1000);

        for pair in script.cues.windows(2) {
            assert_eq!(pair[0].end_ms, pair[1].start_ms);
        }
    }

    #[test]
    fn test_remodel_slots_non_empty_for_empty_text() {
        for language in ["pt", "en", "es", "de", "fr", "xx"] {
            for seed in 0..5 {
                let config = remodel(3).with_language(language).with_cta_style(CtaStyle::None);
                let script = ScriptProcessor::seeded(seed).process("", &config);
                let remodeled = script.remodeled.unwrap();
                assert!(!remodeled.title.trim().is_empty());
                assert!(!remodeled.hook.trim().is_empty());
                assert!(!remodeled.introduction.trim().is_empty());
                assert!(!remodeled.conclusion.trim().is_empty());
                assert_eq!(script.blocks.len(), 3);
            }
        }
    }

    #[test]
    fn test_remodel_statistics_cover_generated_parts() {
        let config = remodel(2);
        let script = ScriptProcessor::seeded(9).process("texto curto", &config);
        let r = script.remodeled.as_ref().unwrap();
        let expected = compute_statistics_from_parts(
            &r.title,
            &r.hook,
            &r.introduction,
            &script.blocks,
            &r.conclusion,
        );
        assert_eq!(script.statistics, expected);
        assert!(script.statistics.word_count > 2);
    }

    #[test]
    fn test_remodel_blocks_share_keyword_anchor() {
        let text = "Photography photography lighting composition lenses";
        let config = remodel(3).with_language("en");
        let script = ScriptProcessor::with_rng(StepRng::new(0, 0)).process(text, &config);

        let situation =
            phrases(Language::En, Slot::Situation)[0].replace("{subject}", "photography");
        for block in &script.blocks {
            assert!(block.text.starts_with(&situation));
        }
        let closing = phrases(Language::En, Slot::Closing)[0];
        assert!(script.blocks[2].text.ends_with(closing));
        assert!(!script.blocks[0].text.ends_with(closing));
    }

    #[test]
    fn test_unsupported_language_falls_back_everywhere() {
        let config = remodel(2)
            .with_language("tlh")
            .with_cta_style(CtaStyle::Emotional)
            .with_niche(Niche::new("Tech", "Code", "rust"));
        let script = ScriptProcessor::with_rng(StepRng::new(0, 0)).process("", &config);
        assert_eq!(script.language, Language::Pt);

        let fallback = Language::DEFAULT;
        let r = script.remodeled.unwrap();
        assert!(r.title.starts_with(phrases(fallback, Slot::TitlePersonas)[0]));
        assert_eq!(
            r.hook,
            phrases(fallback, Slot::HookPhrases)[0].replace("{subject}", "rust")
        );
        let closing_cta = phrases(fallback, Slot::ConclusionCta(CtaStyle::Emotional))[0];
        assert!(r.conclusion.ends_with(closing_cta));
        let situation = phrases(fallback, Slot::Situation)[0].replace("{subject}", "rust");
        for block in &script.blocks {
            assert!(block.text.starts_with(&situation));
            assert_eq!(
                block.mini_cta.as_deref(),
                Some(phrases(fallback, Slot::MiniCta)[0])
            );
        }
    }

    #[test]
    fn test_placeholder_niche_follows_language() {
        let config = remodel(1).with_language("fr");
        let script = ScriptProcessor::with_rng(StepRng::new(0, 0)).process("", &config);
        let hook = script.remodeled.unwrap().hook;
        assert!(hook.contains("ce sujet"));
    }

    #[test]
    fn test_resolve_niche_fills_blanks() {
        let niche = Niche::new("Food", " ", "");
        let resolved = resolve_niche(Some(&niche), Language::En);
        assert_eq!(resolved.domain, "Food");
        assert_eq!(resolved.sub_domain, "General knowledge");
        assert_eq!(resolved.micro_sub_domain, "Food");

        let resolved = resolve_niche(None, Language::De);
        assert_eq!(resolved.micro_sub_domain, "dieses Thema");
    }

    #[test]
    fn test_master_prompt_both_pipelines() {
        let text = "A story about hope and love";
        for kind in [ProcessingType::Simple, ProcessingType::Remodel] {
            let config = ScriptConfiguration::new()
                .with_processing_type(kind)
                .with_master_prompt(true);
            let script = ScriptProcessor::seeded(0).process(text, &config);
            assert_eq!(script.master_prompt, Some(generate_master_prompt(text)));
        }
        let script = ScriptProcessor::seeded(0).process(text, &ScriptConfiguration::new());
        assert!(script.master_prompt.is_none());
    }

    #[test]
    fn test_seeded_processors_are_reproducible() {
        let config = remodel(4).with_cta_style(CtaStyle::Appeal).with_subtitles(true);
        let text = "Aprender a programar muda a forma como pensamos problemas";
        let a = ScriptProcessor::seeded(77).process(text, &config);
        let b = ScriptProcessor::seeded(77).process(text, &config);
        assert_eq!(a, b);
    }
}
