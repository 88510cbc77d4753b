//! SubRip (`.srt`) rendering and parsing.

use crate::error::{ScriptError, ScriptResult};

use super::SubtitleCue;

/// Formats milliseconds as `HH:MM:SS,mmm`.
pub fn format_timestamp(ms: u64) -> String {
    let millis = ms % 1000;
    let total_secs = ms / 1000;
    let secs = total_secs % 60;
    let mins = (total_secs / 60) % 60;
    let hours = total_secs / 3600;
    format!("{:02}:{:02}:{:02},{:03}", hours, mins, secs, millis)
}

/// Parses `HH:MM:SS,mmm` (a `.` separator is tolerated).
pub fn parse_timestamp(value: &str) -> Option<u64> {
    let (clock, millis) = value.trim().split_once([',', '.'])?;
    let mut parts = clock.split(':');
    let hours: u64 = parts.next()?.parse().ok()?;
    let mins: u64 = parts.next()?.parse().ok()?;
    let secs: u64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || mins >= 60 || secs >= 60 || millis.len() != 3 {
        return None;
    }
    let millis: u64 = millis.parse().ok()?;
    Some(((hours * 60 + mins) * 60 + secs) * 1000 + millis)
}

/// Renders cues as a SubRip track.
///
/// Blank lines inside a cue's text would end the cue early, so they are
/// dropped.
pub fn render(cues: &[SubtitleCue]) -> String {
    let mut out = String::new();
    for cue in cues {
        let text: Vec<&str> = cue.text.lines().filter(|l| !l.trim().is_empty()).collect();
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            cue.index,
            format_timestamp(cue.start_ms),
            format_timestamp(cue.end_ms),
            text.join("\n")
        ));
    }
    out
}

/// Parses a SubRip track, checking sequential indices and `start < end`.
pub fn parse(track: &str) -> ScriptResult<Vec<SubtitleCue>> {
    let normalized = track.replace("\r\n", "\n").replace('\r', "\n");
    let mut cues = Vec::new();

    for chunk in normalized.split("\n\n") {
        if chunk.trim().is_empty() {
            continue;
        }
        let position = cues.len() + 1;
        let mut lines = chunk.lines().skip_while(|l| l.trim().is_empty());

        let index: usize = lines
            .next()
            .and_then(|l| l.trim().parse().ok())
            .ok_or_else(|| ScriptError::invalid_subtitle(position, "missing index"))?;
        if index != position {
            return Err(ScriptError::invalid_subtitle(
                position,
                format!("expected index {position}, found {index}"),
            ));
        }

        let timing = lines
            .next()
            .ok_or_else(|| ScriptError::invalid_subtitle(position, "missing timing line"))?;
        let (start, end) = timing
            .split_once("-->")
            .ok_or_else(|| ScriptError::invalid_subtitle(position, "malformed timing line"))?;
        let start_ms = parse_timestamp(start)
            .ok_or_else(|| ScriptError::invalid_subtitle(position, "bad start time"))?;
        let end_ms = parse_timestamp(end)
            .ok_or_else(|| ScriptError::invalid_subtitle(position, "bad end time"))?;
        if start_ms >= end_ms {
            return Err(ScriptError::invalid_subtitle(position, "end is not after start"));
        }

        let text: Vec<&str> = lines.collect();
        cues.push(SubtitleCue::new(index, start_ms, end_ms, text.join("\n")));
    }

    Ok(cues)
}

/// Checks that cues form one contiguous, non-overlapping run.
pub fn validate_contiguous(cues: &[SubtitleCue]) -> ScriptResult<()> {
    for pair in cues.windows(2) {
        if pair[0].end_ms != pair[1].start_ms {
            return Err(ScriptError::invalid_subtitle(
                pair[1].index,
                format!(
                    "starts at {} but previous cue ends at {}",
                    format_timestamp(pair[1].start_ms),
                    format_timestamp(pair[0].end_ms)
                ),
            ));
        }
    }
    Ok(())
}
