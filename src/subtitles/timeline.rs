//! Cursor-based cue timeline.
//!
//! Every cue starts where the previous one ended, so a track built here has
//! no gaps and no overlaps. Durations depend on what the cue holds:
//!
//! | Cue            | Duration                          |
//! |----------------|-----------------------------------|
//! | simple block   | 10 s                              |
//! | title          | 3 s                               |
//! | hook           | 7 s                               |
//! | introduction   | 15 s                              |
//! | remodel block  | max(10, ceil(chars / 40)) s       |
//! | mini CTA       | 5 s                               |
//! | conclusion     | 20 s                              |

use tracing::trace;

use super::SubtitleCue;
use crate::script::model::{RemodeledScript, ScriptBlock};

pub const SIMPLE_BLOCK_SECS: u64 = 10;
pub const TITLE_SECS: u64 = 3;
pub const HOOK_SECS: u64 = 7;
pub const INTRODUCTION_SECS: u64 = 15;
pub const MIN_BLOCK_SECS: u64 = 10;
pub const MINI_CTA_SECS: u64 = 5;
pub const CONCLUSION_SECS: u64 = 20;

/// Narration pace used to size remodeled blocks.
pub const CHARS_PER_SECOND: usize = 40;

/// Accumulates cues behind a running cursor.
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    cursor_ms: u64,
    cues: Vec<SubtitleCue>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cue lasting `secs` seconds at the cursor.
    pub fn push(&mut self, secs: u64, text: impl Into<String>) -> &mut Self {
        let start_ms = self.cursor_ms;
        self.cursor_ms += secs * 1000;
        let cue = SubtitleCue::new(self.cues.len() + 1, start_ms, self.cursor_ms, text);
        trace!(index = cue.index, start_ms, end_ms = cue.end_ms, "cue");
        self.cues.push(cue);
        self
    }

    /// Current cursor position in milliseconds.
    pub fn cursor_ms(&self) -> u64 {
        self.cursor_ms
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn finish(self) -> Vec<SubtitleCue> {
        self.cues
    }
}

/// Seconds allotted to a remodeled block of text.
pub fn block_duration_secs(text: &str) -> u64 {
    let chars = text.chars().count();
    (chars.div_ceil(CHARS_PER_SECOND) as u64).max(MIN_BLOCK_SECS)
}

/// One fixed-length cue per block.
pub fn build_simple(blocks: &[ScriptBlock]) -> Vec<SubtitleCue> {
    let mut timeline = TimelineBuilder::new();
    for block in blocks {
        timeline.push(SIMPLE_BLOCK_SECS, block.text.as_str());
    }
    timeline.finish()
}

/// Title, hook, introduction, each block followed by its mini CTA, then the
/// conclusion.
pub fn build_remodeled(script: &RemodeledScript, blocks: &[ScriptBlock]) -> Vec<SubtitleCue> {
    let mut timeline = TimelineBuilder::new();
    timeline
        .push(TITLE_SECS, script.title.as_str())
        .push(HOOK_SECS, script.hook.as_str())
        .push(INTRODUCTION_SECS, script.introduction.as_str());

    for block in blocks {
        timeline.push(block_duration_secs(&block.text), block.text.as_str());
        if let Some(mini_cta) = &block.mini_cta {
            timeline.push(MINI_CTA_SECS, mini_cta.as_str());
        }
    }

    timeline.push(CONCLUSION_SECS, script.conclusion.as_str());
    timeline.finish()
}
