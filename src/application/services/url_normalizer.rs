//! Image URL normalization.
//!
//! Spreadsheet authors paste whatever link their storage gives them. Google
//! Drive viewer links do not render as images, so they are rewritten into the
//! direct content host. Only plain web URLs and relative paths pass through;
//! everything else is rejected.

use regex::Regex;
use std::sync::LazyLock;

/// Host marker identifying a Google Drive share link.
pub const DRIVE_HOST: &str = "drive.google.com";

/// Size hint appended to rewritten Drive images.
pub const DRIVE_SIZE_HINT: &str = "w600-h400-k-rw";

const DRIVE_CONTENT_BASE: &str = "https://lh3.googleusercontent.com/d";

static DRIVE_PATH_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/file/d/([a-zA-Z0-9_-]+)").unwrap());

static DRIVE_QUERY_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]id=([a-zA-Z0-9_-]+)").unwrap());

/// Normalizes an image URL for direct display.
///
/// Returns `None` for blank input, for Drive links without a recognizable
/// file id, and for anything that is neither an `http` URL nor a `./`
/// relative path.
#[must_use]
pub fn normalize_image_url(url: &str) -> Option<String> {
    if url.trim().is_empty() {
        return None;
    }

    if is_drive_share_url(url) {
        return extract_drive_file_id(url).map(drive_direct_url);
    }

    if url.starts_with("http") || url.starts_with("./") {
        return Some(url.to_string());
    }

    None
}

/// Checks if a URL is a Google Drive share link.
#[must_use]
pub fn is_drive_share_url(url: &str) -> bool {
    url.contains(DRIVE_HOST)
}

/// Extracts the file id from a Drive link.
///
/// The `/file/d/<id>` path form wins over the `id=<id>` query form.
#[must_use]
pub fn extract_drive_file_id(url: &str) -> Option<&str> {
    DRIVE_PATH_ID_RE
        .captures(url)
        .or_else(|| DRIVE_QUERY_ID_RE.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Builds the direct-embed URL for a Drive file id.
#[must_use]
pub fn drive_direct_url(file_id: &str) -> String {
    format!("{DRIVE_CONTENT_BASE}/{file_id}={DRIVE_SIZE_HINT}")
}
