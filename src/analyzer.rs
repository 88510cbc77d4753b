//! Text statistics and keyword extraction.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::script::model::{ScriptBlock, ScriptStatistics};
use crate::templates::Language;

/// Tokens shorter than this never count as keywords.
pub const MIN_KEYWORD_CHARS: usize = 4;

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s]").expect("punctuation pattern is valid"));

static STOP_WORDS: LazyLock<HashMap<Language, HashSet<&'static str>>> = LazyLock::new(|| {
    let table: [(Language, &[&str]); 5] = [
        (
            Language::Pt,
            &[
                "para", "como", "mais", "mas", "isso", "esse", "essa", "este", "esta", "isto",
                "pelo", "pela", "pelos", "pelas", "quando", "muito", "muita", "também", "sobre",
                "entre", "depois", "antes", "ainda", "sempre", "nunca", "onde", "porque", "aqui",
                "você", "vocês", "nós", "eles", "elas", "seus", "suas", "nosso", "nossa", "dele",
                "dela", "tudo", "todo", "toda", "todos", "todas", "qual", "quais", "então", "assim",
                "cada", "mesmo", "mesma", "outro", "outra", "outros", "outras", "será", "foram",
                "está", "estão", "estava", "tinha", "temos", "pode", "podem", "fazer", "vamos",
                "agora", "apenas", "nada", "algo", "alguns", "algumas", "numa", "num", "das", "dos",
            ],
        ),
        (
            Language::En,
            &[
                "that", "this", "with", "from", "have", "were", "they", "them", "their", "there",
                "what", "when", "where", "which", "while", "will", "would", "could", "should",
                "about", "into", "your", "yours", "been", "being", "than", "then", "also", "just",
                "more", "most", "some", "such", "only", "very", "even", "much", "many", "over",
                "because", "these", "those", "here", "does", "doing", "each", "every", "after",
                "before", "again", "other", "whose", "shall", "might", "must", "ours", "hers",
            ],
        ),
        (
            Language::Es,
            &[
                "para", "como", "pero", "más", "esto", "este", "esta", "estos", "estas", "porque",
                "cuando", "donde", "también", "sobre", "entre", "después", "antes", "todavía",
                "siempre", "nunca", "aquí", "ustedes", "nosotros", "ellos", "ellas", "todo", "toda",
                "todos", "todas", "cual", "cuales", "entonces", "así", "cada", "mismo", "misma",
                "otro", "otra", "otros", "otras", "será", "fueron", "está", "están", "estaba",
                "tenía", "puede", "pueden", "hacer", "vamos", "ahora", "solo", "nada", "algo",
            ],
        ),
        (
            Language::De,
            &[
                "und", "oder", "aber", "dass", "weil", "wenn", "dann", "denn", "eine", "einer",
                "einem", "einen", "eines", "sich", "nicht", "auch", "noch", "schon", "mehr", "sehr",
                "über", "unter", "nach", "durch", "gegen", "ohne", "diese", "dieser", "dieses",
                "diesem", "jede", "jeder", "jedes", "alle", "alles", "wird", "werden", "wurde",
                "sind", "sein", "seine", "ihre", "ihren", "haben", "hatte", "kann", "können",
                "muss", "soll", "hier", "immer", "wieder", "etwas", "nichts", "euch", "unser",
            ],
        ),
        (
            Language::Fr,
            &[
                "pour", "comme", "mais", "plus", "cela", "celle", "celui", "cette", "ceux", "dans",
                "avec", "sans", "sous", "vers", "chez", "parce", "quand", "aussi", "encore",
                "toujours", "jamais", "très", "tout", "toute", "tous", "toutes", "leur", "leurs",
                "nous", "vous", "elle", "elles", "sont", "était", "avait", "avoir", "être", "fait",
                "faire", "peut", "peuvent", "donc", "alors", "ainsi", "même", "autre", "autres",
                "quel", "quelle", "quels", "quelles", "rien", "ici", "notre", "votre", "depuis",
            ],
        ),
    ];
    table
        .into_iter()
        .map(|(language, words)| (language, words.iter().copied().collect()))
        .collect()
});

/// Stop words for a language.
pub fn stop_words(language: Language) -> &'static HashSet<&'static str> {
    static EMPTY: LazyLock<HashSet<&'static str>> = LazyLock::new(HashSet::new);
    STOP_WORDS.get(&language).unwrap_or(&EMPTY)
}

/// Computes statistics over raw text.
///
/// Characters are Unicode scalar values. Lines are separated by CRLF, CR or
/// LF; empty text has zero lines.
pub fn compute_statistics(text: &str) -> ScriptStatistics {
    let characters_with_spaces = text.chars().count();
    let characters_without_spaces = text.chars().filter(|c| !c.is_whitespace()).count();
    let word_count = text.split_whitespace().count();
    let line_count = if text.is_empty() {
        0
    } else {
        count_line_breaks(text) + 1
    };

    ScriptStatistics {
        characters_with_spaces,
        characters_without_spaces,
        word_count,
        line_count,
    }
}

fn count_line_breaks(text: &str) -> usize {
    let mut breaks = 0;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                breaks += 1;
            }
            '\n' => breaks += 1,
            _ => {}
        }
    }
    breaks
}

/// Statistics over a full remodeled script, mini CTAs included.
pub fn compute_statistics_from_parts(
    title: &str,
    hook: &str,
    introduction: &str,
    blocks: &[ScriptBlock],
    conclusion: &str,
) -> ScriptStatistics {
    let mut parts: Vec<&str> = vec![title, hook, introduction];
    for block in blocks {
        parts.push(&block.text);
        if let Some(mini_cta) = &block.mini_cta {
            parts.push(mini_cta);
        }
    }
    parts.push(conclusion);
    compute_statistics(&parts.join(" "))
}

/// Returns up to `count` of the most frequent keywords in `text`.
///
/// Text is lower-cased and stripped of punctuation; tokens shorter than
/// [`MIN_KEYWORD_CHARS`] and stop words of `language` are dropped. Equal
/// frequencies keep first-occurrence order.
pub fn extract_keywords(text: &str, count: usize, language: Language) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = PUNCTUATION.replace_all(&lowered, "");
    let stops = stop_words(language);

    // (token, frequency) in first-seen order
    let mut frequencies: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for token in cleaned.split_whitespace() {
        if token.chars().count() < MIN_KEYWORD_CHARS || stops.contains(token) {
            continue;
        }
        match positions.get(token) {
            Some(&pos) => frequencies[pos].1 += 1,
            None => {
                positions.insert(token, frequencies.len());
                frequencies.push((token, 1));
            }
        }
    }

    // sort_by is stable, so ties stay in first-seen order
    frequencies.sort_by(|a, b| b.1.cmp(&a.1));
    frequencies
        .into_iter()
        .take(count)
        .map(|(token, _)| token.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_basic() {
        let stats = compute_statistics("Hello world\nsecond line");
        assert_eq!(stats.characters_with_spaces, 23);
        assert_eq!(stats.characters_without_spaces, 20);
        assert_eq!(stats.word_count, 4);
        assert_eq!(stats.line_count, 2);
    }

    #[test]
    fn test_statistics_empty_is_all_zero() {
        let stats = compute_statistics("");
        assert_eq!(stats, ScriptStatistics::default());
    }

    #[test]
    fn test_statistics_whitespace_only() {
        let stats = compute_statistics(" \t ");
        assert_eq!(stats.characters_with_spaces, 3);
        assert_eq!(stats.characters_without_spaces, 0);
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.line_count, 1);
    }

    #[test]
    fn test_line_breaks_all_styles() {
        assert_eq!(compute_statistics("a\r\nb\rc\nd").line_count, 4);
        assert_eq!(compute_statistics("a\n\nb").line_count, 3);
        assert_eq!(compute_statistics("trailing\n").line_count, 2);
    }

    #[test]
    fn test_unicode_counts_characters_not_bytes() {
        let stats = compute_statistics("ação é\u{00A0}boa");
        assert_eq!(stats.characters_with_spaces, 10);
        // U+00A0 is whitespace too
        assert_eq!(stats.characters_without_spaces, 8);
        assert_eq!(stats.word_count, 3);
    }

    #[test]
    fn test_statistics_invariant_over_samples() {
        let samples = ["", "   ", "one", "a b  c", "x\r\ny", "emoji 🎬 scene", "\n\n\n"];
        for sample in samples {
            let stats = compute_statistics(sample);
            assert!(stats.characters_without_spaces <= stats.characters_with_spaces);
            assert_eq!(stats.characters_with_spaces, sample.chars().count());
            assert_eq!(stats.word_count == 0, sample.trim().is_empty());
        }
    }

    #[test]
    fn test_extract_keywords_by_frequency() {
        let text = "Rust rust RUST! Ownership, ownership and borrowing.";
        let keywords = extract_keywords(text, 3, Language::En);
        assert_eq!(keywords, vec!["rust", "ownership", "borrowing"]);
    }

    #[test]
    fn test_extract_keywords_tie_keeps_first_seen() {
        let text = "zebra apple mango apple zebra mango";
        let keywords = extract_keywords(text, 3, Language::En);
        assert_eq!(keywords, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_extract_keywords_filters_short_and_stop_words() {
        let text = "para o sol que brilha como nunca brilha";
        let keywords = extract_keywords(text, 10, Language::Pt);
        assert_eq!(keywords, vec!["brilha"]);
    }

    #[test]
    fn test_extract_keywords_respects_count() {
        let text = "alpha bravo charlie delta echoes foxtrot";
        assert_eq!(extract_keywords(text, 2, Language::En).len(), 2);
        assert!(extract_keywords(text, 0, Language::En).is_empty());
        assert!(extract_keywords("", 5, Language::En).is_empty());
    }

    #[test]
    fn test_statistics_from_parts_includes_mini_ctas() {
        let blocks = vec![
            ScriptBlock::new("block one").with_mini_cta("like it"),
            ScriptBlock::new("block two"),
        ];
        let stats = compute_statistics_from_parts("Title", "Hook", "Intro", &blocks, "End");
        // "Title Hook Intro block one like it block two End"
        assert_eq!(stats.word_count, 10);
        assert_eq!(stats.line_count, 1);
    }
}
