//! Short-code charset validation.

use regex::Regex;
use std::sync::LazyLock;

/// Codes are restricted to alphanumerics plus hyphen and underscore.
static SHORT_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Returns true when the (already trimmed, non-empty) code uses only the
/// allowed charset.
pub fn is_valid_short_code(code: &str) -> bool {
    SHORT_CODE_REGEX.is_match(code)
}
