pub mod config;
pub mod error;
pub mod provider;
pub mod summarize;
pub mod timedtext;

#[cfg(test)]
mod test_support;

use std::fmt;

/// Character bound applied to transcript text returned to the caller
pub const TRANSCRIPT_MAX_CHARS: usize = 150_000;

/// Tighter bound applied just before sending text to the summarizer
pub const SUMMARY_INPUT_MAX_CHARS: usize = 100_000;

/// Marker appended when transcript text is cut at a bound
pub const TRUNCATION_MARKER: &str = "[transcript truncated]";

/// A validated 11-character YouTube video ID.
///
/// Only constructed through [`extract_video_id`], so holders can assume the
/// token already matched the ID alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract a video ID from a URL or bare ID string.
///
/// Recognizes `v=`, `/v/`, `/embed/`, and `youtu.be/` URL forms first, then a
/// bare 11-character token. Returns `None` when nothing matches; an
/// unrecognized input is a validation outcome, not an error.
pub fn extract_video_id(input: &str) -> Option<VideoId> {
    let input = input.trim();

    // URL forms: the ID immediately follows one of the known markers
    if let Some(caps) = regex::Regex::new(r"(?:v=|v/|embed/|watch\?v=|youtu\.be/)([0-9A-Za-z_-]{11})")
        .unwrap()
        .captures(input)
    {
        return Some(VideoId(caps[1].to_string()));
    }

    // Bare 11-character video ID
    if regex::Regex::new(r"^[0-9A-Za-z_-]{11}$").unwrap().is_match(input) {
        return Some(VideoId(input.to_string()));
    }

    None
}

/// Bound text to `max_chars` characters, appending a truncation marker when
/// anything was cut. Text within the bound is returned unchanged.
pub fn bound_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{head}\n\n{TRUNCATION_MARKER}")
}
