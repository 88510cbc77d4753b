//! Subtitle track synthesis.
//!
//! - `timeline`: turns script parts into contiguous timed cues
//! - `srt`: renders cues as SubRip text and reads them back

pub mod srt;
pub mod timeline;

use serde::{Deserialize, Serialize};

pub use timeline::TimelineBuilder;

/// One timed subtitle entry. Times are milliseconds from the track start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleCue {
    /// 1-based position in the track.
    pub index: usize,
    pub start_ms: u64,
    pub end_ms: u64,
    pub text: String,
}

impl SubtitleCue {
    pub fn new(index: usize, start_ms: u64, end_ms: u64, text: impl Into<String>) -> Self {
        Self {
            index,
            start_ms,
            end_ms,
            text: text.into(),
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }
}
