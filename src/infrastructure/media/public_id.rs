//! Public id generation and URL parsing for hosted images.
//!
//! Hosted image URLs follow the shape
//! `{public_base}/image/upload/{version}/{folder}/{id}.{ext}`. The id under
//! which an image was stored has to be recoverable from that URL alone,
//! because deletion starts from a `cover_image_url` column, not from a stored
//! id.

use base64::Engine as _;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Length of random bytes before base64 encoding.
const ID_LENGTH_BYTES: usize = 9;

/// Random suffix bytes appended to filename-derived ids.
const SUFFIX_LENGTH_BYTES: usize = 4;

/// Characters that survive filename sanitization.
static UNSAFE_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Generates a random URL-safe public id.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character id.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn random_public_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Derives a public id from an uploaded filename.
///
/// The extension is dropped, the stem is lowercased and squashed to
/// `[a-z0-9-]`, and a short random suffix is appended so repeated uploads of
/// the same file never collide. Falls back to [`random_public_id`] when
/// sanitization leaves nothing usable.
///
/// # Examples
///
/// ```ignore
/// // "Team Photo (2).JPG" -> "team-photo-2-Xk3aQw"
/// let id = public_id_from_filename(Some("Team Photo (2).JPG"));
/// ```
pub fn public_id_from_filename(filename: Option<&str>) -> String {
    let Some(filename) = filename else {
        return random_public_id();
    };

    let stem = match filename.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => filename,
    };

    let sanitized = UNSAFE_CHARS
        .replace_all(&stem.to_lowercase(), "-")
        .trim_matches('-')
        .chars()
        .take(40)
        .collect::<String>();

    if sanitized.is_empty() {
        return random_public_id();
    }

    let mut suffix = [0u8; SUFFIX_LENGTH_BYTES];
    getrandom::fill(&mut suffix).expect("Failed to generate random bytes");

    format!(
        "{}-{}",
        sanitized,
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(suffix)
    )
}

/// Recovers the host-side public id from a hosted image URL.
///
/// Takes the path segments after the `upload` marker, keeps the last two
/// (folder and file; a version segment before them is ignored), and strips
/// the file extension. Returns `None` for URLs that do not look like hosted
/// images, including anything served from a different origin.
///
/// # Examples
///
/// ```ignore
/// let id = parse_public_id("https://media.example/acct/image/upload/v17/blog/abc123.jpg");
/// assert_eq!(id.as_deref(), Some("blog/abc123"));
/// ```
pub fn parse_public_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segments: Vec<&str> = parsed.path_segments()?.filter(|s| !s.is_empty()).collect();

    let upload_pos = segments.iter().position(|s| *s == "upload")?;
    let after = &segments[upload_pos + 1..];
    if after.is_empty() {
        return None;
    }

    let tail = if after.len() >= 2 {
        &after[after.len() - 2..]
    } else {
        after
    };

    let mut parts: Vec<String> = tail.iter().map(|s| (*s).to_string()).collect();
    if let Some(last) = parts.last_mut()
        && let Some(dot) = last.rfind('.')
        && dot > 0
    {
        last.truncate(dot);
    }

    Some(parts.join("/"))
}
