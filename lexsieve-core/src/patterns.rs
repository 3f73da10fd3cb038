//! Web locator and UUID recognition

use regex::Regex;
use std::sync::OnceLock;
use uuid::Uuid;

/// Generic URI grammar from RFC 3986, appendix B, anchored at both ends.
///
/// Every component is optional, so this is a coarse heuristic rather than a
/// URL validator: anything without `?` or `#` falls into the path branch, and
/// in practice every string matches.
pub const URI_PATTERN: &str = r"^(([^:/?#]+):)?(//([^/?#]*))?([^?#]*)(\?([^#]*))?(#(.*))?$";

/// Length of the hyphenated 8-4-4-4-12 textual form
const HYPHENATED_LEN: usize = 36;

static URI_REGEX: OnceLock<Regex> = OnceLock::new();

fn uri_regex() -> &'static Regex {
    URI_REGEX.get_or_init(|| Regex::new(URI_PATTERN).expect("URI_PATTERN is a valid regex"))
}

/// Whether the token matches the permissive URI grammar
pub fn is_web(token: &str) -> bool {
    uri_regex().is_match(token)
}

/// Parse a canonical hyphenated UUID, `None` on any failure
pub fn parse_uuid(token: &str) -> Option<Uuid> {
    if token.len() != HYPHENATED_LEN {
        return None;
    }
    Uuid::try_parse(token).ok()
}

/// Whether the token is a hyphenated UUID carrying a defined version (1 to 8)
pub fn is_uuid(token: &str) -> bool {
    parse_uuid(token).is_some_and(|uuid| matches!(uuid.get_version_num(), 1..=8))
}
