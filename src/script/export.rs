//! Plain-text and subtitle exports of a processed script.

use super::model::ProcessedScript;

/// Longest file stem produced by [`file_stem`].
const MAX_STEM_CHARS: usize = 48;

/// Fallback stem when a title has no usable characters.
const DEFAULT_STEM: &str = "script";

/// Readable script, one paragraph per part.
///
/// Remodeled scripts read title, hook, introduction, each block followed by
/// its mini CTA, then the conclusion. Simple scripts are their blocks.
pub fn plain_text(script: &ProcessedScript) -> String {
    let mut paragraphs: Vec<&str> = Vec::new();

    if let Some(remodeled) = &script.remodeled {
        paragraphs.extend([
            remodeled.title.as_str(),
            remodeled.hook.as_str(),
            remodeled.introduction.as_str(),
        ]);
    }
    for block in &script.blocks {
        paragraphs.push(&block.text);
        if let Some(mini_cta) = &block.mini_cta {
            paragraphs.push(mini_cta);
        }
    }
    if let Some(remodeled) = &script.remodeled {
        paragraphs.push(&remodeled.conclusion);
    }

    let mut out = paragraphs
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// The SubRip track, when one was generated.
pub fn subtitle_file(script: &ProcessedScript) -> Option<&str> {
    script.subtitle_track.as_deref()
}

/// Lower-case, dash-separated file stem built from `title`.
pub fn file_stem(title: &str) -> String {
    let mut stem = String::new();
    for c in title.chars().flat_map(char::to_lowercase) {
        if stem.chars().count() >= MAX_STEM_CHARS {
            break;
        }
        if c.is_alphanumeric() {
            stem.push(c);
        } else if !stem.is_empty() && !stem.ends_with('-') {
            stem.push('-');
        }
    }
    let stem = stem.trim_end_matches('-');
    if stem.is_empty() {
        DEFAULT_STEM.to_string()
    } else {
        stem.to_string()
    }
}

/// Stem for a script: its title when remodeled, otherwise the opening words.
pub fn script_stem(script: &ProcessedScript) -> String {
    match &script.remodeled {
        Some(remodeled) => file_stem(&remodeled.title),
        None => {
            let opening: Vec<&str> = script.original_text.split_whitespace().take(6).collect();
            file_stem(&opening.join(" "))
        }
    }
}

pub fn txt_file_name(script: &ProcessedScript) -> String {
    format!("{}.txt", script_stem(script))
}

pub fn srt_file_name(script: &ProcessedScript) -> String {
    format!("{}.srt", script_stem(script))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::model::{RemodeledScript, ScriptBlock};

    fn remodeled_script() -> ProcessedScript {
        ProcessedScript {
            original_text: "source".into(),
            blocks: vec![
                ScriptBlock::new("First block.").with_mini_cta("Like it."),
                ScriptBlock::new("Second block.").with_mini_cta("Share it."),
            ],
            remodeled: Some(RemodeledScript {
                title: "The Truth About Sourdough!".into(),
                hook: "Hook.".into(),
                introduction: "Intro.".into(),
                conclusion: "The end.".into(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_plain_text_remodeled_order() {
        let text = plain_text(&remodeled_script());
        assert_eq!(
            text,
            "The Truth About Sourdough!\n\nHook.\n\nIntro.\n\nFirst block.\n\nLike it.\n\nSecond block.\n\nShare it.\n\nThe end.\n"
        );
    }

    #[test]
    fn test_plain_text_simple() {
        let script = ProcessedScript {
            blocks: vec![ScriptBlock::new("one two"), ScriptBlock::new("three")],
            ..Default::default()
        };
        assert_eq!(plain_text(&script), "one two\n\nthree\n");
        assert_eq!(plain_text(&ProcessedScript::default()), "");
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("The Truth About Sourdough!"), "the-truth-about-sourdough");
        assert_eq!(file_stem("  Ação & Reação  "), "ação-reação");
        assert_eq!(file_stem("!!!"), "script");
        assert!(file_stem(&"word ".repeat(40)).chars().count() <= MAX_STEM_CHARS);
    }

    #[test]
    fn test_file_names() {
        let script = remodeled_script();
        assert_eq!(txt_file_name(&script), "the-truth-about-sourdough.txt");
        assert_eq!(srt_file_name(&script), "the-truth-about-sourdough.srt");

        let simple = ProcessedScript {
            original_text: "Once upon a time, in a quiet village far away".into(),
            ..Default::default()
        };
        assert_eq!(txt_file_name(&simple), "once-upon-a-time-in-a.txt");
    }

    #[test]
    fn test_subtitle_file() {
        let mut script = remodeled_script();
        assert!(subtitle_file(&script).is_none());
        script.subtitle_track = Some("1\n00:00:00,000 --> 00:00:03,000\nT\n\n".into());
        assert!(subtitle_file(&script).unwrap().starts_with("1\n"));
    }
}
