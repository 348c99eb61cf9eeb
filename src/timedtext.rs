use std::time::Duration;

use log::debug;
use regex::Regex;

/// Public timedtext caption host
pub const DEFAULT_BASE_URL: &str = "https://video.google.com";

/// Deadline for the track-listing request
pub const LIST_TIMEOUT: Duration = Duration::from_secs(8);

/// Deadline for the cue-text request
pub const CUE_TIMEOUT: Duration = Duration::from_secs(10);

/// A caption track declared in a timedtext listing document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionTrack {
    pub lang: Option<String>,
    pub name: String,
}

/// Parse a timedtext track-listing document into its declared tracks.
///
/// A regex scan rather than a strict XML parse: real listing responses are
/// loosely structured and must not be rejected over malformed tags. Malformed
/// or empty input yields an empty list, never an error. Document order is
/// preserved.
pub fn parse_track_list(xml: &str) -> Vec<CaptionTrack> {
    let track_re = Regex::new(r"(?i)<track\s+([^>]+?)/?>").unwrap();
    let lang_re = Regex::new(r#"(?i)lang_code="([^"]+)""#).unwrap();
    let name_re = Regex::new(r#"(?i)name="([^"]*)""#).unwrap();

    track_re
        .captures_iter(xml)
        .map(|caps| {
            let attrs = &caps[1];
            CaptionTrack {
                lang: lang_re.captures(attrs).map(|c| c[1].to_string()),
                name: name_re.captures(attrs).map(|c| c[1].to_string()).unwrap_or_default(),
            }
        })
        .collect()
}

/// Parse a timedtext cue document into individual cue strings.
///
/// Each cue has its inner markup stripped, whitespace runs collapsed to
/// single spaces, HTML entities decoded, and surrounding whitespace trimmed.
/// Empty cues are dropped.
pub fn parse_cues(xml: &str) -> Vec<String> {
    let cue_re = Regex::new(r"(?is)<text[^>]*?>(.*?)</text>").unwrap();
    let tag_re = Regex::new(r"<[^>]+>").unwrap();
    let ws_re = Regex::new(r"\s+").unwrap();

    cue_re
        .captures_iter(xml)
        .map(|caps| {
            let inner = tag_re.replace_all(&caps[1], "");
            let collapsed = ws_re.replace_all(&inner, " ");
            decode_entities(collapsed.trim())
        })
        .filter(|cue| !cue.is_empty())
        .collect()
}

/// Parse a cue document into a single plain-text transcript string, cues
/// joined with single spaces in document order.
pub fn parse_cue_text(xml: &str) -> String {
    parse_cues(xml).join(" ")
}

/// Decode HTML entities in cue text.
///
/// Applied twice: timedtext responses double-encode entities behind `&amp;`
/// (e.g. `&amp;#39;` for an apostrophe).
pub fn decode_entities(text: &str) -> String {
    let once = html_escape::decode_html_entities(text).into_owned();
    html_escape::decode_html_entities(&once).into_owned()
}

/// Pick the track to fetch: the first `en` / `en-*` track (case-insensitive)
/// when one exists, otherwise the first track in document order.
pub fn select_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    tracks
        .iter()
        .find(|t| t.lang.as_deref().is_some_and(is_english))
        .or_else(|| tracks.first())
}

pub(crate) fn is_english(code: &str) -> bool {
    let code = code.to_ascii_lowercase();
    code == "en" || code.starts_with("en-")
}

/// Fetch and parse the track listing for a video.
pub async fn fetch_track_list(
    client: &reqwest::Client,
    base_url: &str,
    video_id: &str,
    timeout: Duration,
) -> Result<Vec<CaptionTrack>, reqwest::Error> {
    let url = format!("{base_url}/timedtext?type=list&v={video_id}");
    debug!("Fetching track listing: {url}");

    let xml = client
        .get(&url)
        .timeout(timeout)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(parse_track_list(&xml))
}

/// Fetch and parse cue text for a video in the given language.
pub async fn fetch_cue_text(
    client: &reqwest::Client,
    base_url: &str,
    video_id: &str,
    lang: &str,
    timeout: Duration,
) -> Result<String, reqwest::Error> {
    let url = cue_url(base_url, video_id, lang);
    debug!("Fetching cue text: {url}");

    let xml = client
        .get(&url)
        .timeout(timeout)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(parse_cue_text(&xml))
}

// The language code comes out of a parsed attribute of an untrusted listing
// document, so it is percent-encoded; the video ID is alphabet-validated and
// safe as-is.
fn cue_url(base_url: &str, video_id: &str, lang: &str) -> String {
    format!("{base_url}/timedtext?lang={}&v={video_id}", urlencoding::encode(lang))
}
