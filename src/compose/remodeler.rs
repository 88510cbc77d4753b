//! Thematic block synthesis.
//!
//! A block is five beats in fixed order: situation, conflict, resolution,
//! question, then a forward reference to the next block (or a closing line
//! on the last one).

use rand::Rng;

use crate::templates::{fill, pick_from, Language, Slot};

/// Anchor keywords must be longer than this.
const MIN_ANCHOR_CHARS: usize = 4;

/// First token of `keyword_text` longer than four characters.
pub fn anchor_keyword<'a>(keyword_text: &'a str, fallback: &'a str) -> &'a str {
    keyword_text
        .split_whitespace()
        .find(|token| token.chars().count() > MIN_ANCHOR_CHARS)
        .unwrap_or(fallback)
}

/// Builds one block. `block_index` is 1-based.
pub fn remodel_block<R: Rng + ?Sized>(
    keyword_text: &str,
    block_index: usize,
    total_blocks: usize,
    micro_sub_domain: &str,
    language: Language,
    rng: &mut R,
) -> String {
    let anchor = anchor_keyword(keyword_text, micro_sub_domain);

    let mut beats: Vec<String> = [
        Slot::Situation,
        Slot::Conflict,
        Slot::Resolution,
        Slot::Question,
    ]
    .into_iter()
    .map(|slot| fill(pick_from(rng, language, slot), anchor))
    .collect();

    if block_index < total_blocks {
        beats.push(fill(
            pick_from(rng, language, Slot::ForwardReference),
            micro_sub_domain,
        ));
    } else {
        beats.push(pick_from(rng, language, Slot::Closing).to_string());
    }

    beats.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::phrases;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_anchor_keyword() {
        assert_eq!(anchor_keyword("cat dogs horses", "pets"), "horses");
        assert_eq!(anchor_keyword("cat dogs", "pets"), "pets");
        assert_eq!(anchor_keyword("", "pets"), "pets");
    }

    #[test]
    fn test_block_beat_order() {
        let mut rng = StepRng::new(0, 0);
        let block = remodel_block("gardens water", 1, 2, "gardening", Language::En, &mut rng);
        let expected = [
            phrases(Language::En, Slot::Situation)[0].replace("{subject}", "gardens"),
            phrases(Language::En, Slot::Conflict)[0].replace("{subject}", "gardens"),
            phrases(Language::En, Slot::Resolution)[0].replace("{subject}", "gardens"),
            phrases(Language::En, Slot::Question)[0].replace("{subject}", "gardens"),
            phrases(Language::En, Slot::ForwardReference)[0].replace("{subject}", "gardening"),
        ]
        .join(" ");
        assert_eq!(block, expected);
    }

    #[test]
    fn test_last_block_closes() {
        let mut rng = StdRng::seed_from_u64(11);
        let closing = phrases(Language::De, Slot::Closing)[0];
        let block = remodel_block("", 3, 3, "Schach", Language::De, &mut rng);
        assert!(block.ends_with(closing));
        assert!(block.contains("Schach"));
        assert!(!block.contains('{'));
    }

    #[test]
    fn test_middle_block_refers_forward() {
        let mut rng = StdRng::seed_from_u64(5);
        let block = remodel_block("ownership", 2, 3, "rust", Language::En, &mut rng);
        let forward = phrases(Language::En, Slot::ForwardReference);
        assert!(forward
            .iter()
            .any(|p| block.ends_with(&p.replace("{subject}", "rust"))));
    }
}
