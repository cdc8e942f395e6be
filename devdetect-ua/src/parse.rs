//! Token scanners shared by the classifiers.
//!
//! Each scanner mirrors one user agent token shape. A scanner walks the
//! occurrences of its marker from left to right and returns the first one
//! that carries a well formed value.

use devdetect_utils::str::{contains_word_ignore_ascii_case, match_indices_ignore_ascii_case};

/// Value of the first `{prefix}{value}` token with a non-empty value,
/// where the value runs until whitespace or `;`.
pub(crate) fn token_value<'a>(ua: &'a str, prefix: &str) -> Option<&'a str> {
    ua.match_indices(prefix)
        .find_map(|(loc, _)| value_at(ua, loc + prefix.len()))
}

/// Same as [`token_value`] but only for tokens starting at a word boundary,
/// such that `Messenger/` does not match within `MicroMessenger/`.
pub(crate) fn word_token_value<'a>(ua: &'a str, prefix: &str) -> Option<&'a str> {
    ua.match_indices(prefix)
        .filter(|(loc, _)| at_word_start(ua, *loc))
        .find_map(|(loc, _)| value_at(ua, loc + prefix.len()))
}

/// Same as [`token_value`] but matching `prefix` ASCII case insensitive.
pub(crate) fn token_value_ignore_ascii_case<'a>(
    ua: &'a str,
    prefix: &'static str,
) -> Option<&'a str> {
    match_indices_ignore_ascii_case(ua, prefix).find_map(|loc| value_at(ua, loc + prefix.len()))
}

fn value_at(ua: &str, start: usize) -> Option<&str> {
    let rest = ua.get(start..)?;
    let end = rest
        .find(|c: char| c.is_whitespace() || c == ';')
        .unwrap_or(rest.len());
    rest.get(..end).filter(|value| !value.is_empty())
}

/// Leading run of ASCII digits and the bytes accepted by `extra`.
fn leading_run(s: &str, extra: impl Fn(u8) -> bool) -> &str {
    let end = s
        .bytes()
        .position(|b| !(b.is_ascii_digit() || extra(b)))
        .unwrap_or(s.len());
    s.get(..end).unwrap_or_default()
}

fn leading_digits(s: &str) -> &str {
    leading_run(s, |_| false)
}

/// Parse the `OS {major}_{minor}_{patch}` token found in iOS user agents.
///
/// Two component versions (e.g. `OS 17_4`) yield `None`.
pub(crate) fn parse_ios_version(ua: &str) -> Option<String> {
    ua.match_indices("OS ").find_map(|(loc, _)| {
        let mut rest = ua.get(loc + 3..)?;
        let mut parts = [""; 3];
        for (index, part) in parts.iter_mut().enumerate() {
            if index > 0 {
                rest = rest.strip_prefix('_')?;
            }
            let digits = leading_digits(rest);
            if digits.is_empty() {
                return None;
            }
            *part = digits;
            rest = rest.get(digits.len()..)?;
        }
        Some(parts.join("."))
    })
}

/// Parse the version following a `Mac OS X` marker, `_` separators normalised to `.`.
///
/// Returns `None` if there is no marker followed by whitespace,
/// and `Some("")` if the marker carries no version.
pub(crate) fn parse_mac_os_x_version(ua: &str) -> Option<String> {
    versioned_marker(ua, "Mac OS X", |b| b == b'.' || b == b'_')
        .map(|version| version.replace('_', "."))
}

/// Parse the dotted version following an `Android` marker.
///
/// Returns `None` if there is no marker followed by whitespace,
/// and `Some("")` if the marker carries no version.
pub(crate) fn parse_android_version(ua: &str) -> Option<&str> {
    versioned_marker(ua, "android", |b| b == b'.')
}

/// `{marker}` (ASCII case insensitive) followed by a single whitespace char
/// and an optional run of digits and `extra` bytes.
fn versioned_marker<'a>(
    ua: &'a str,
    marker: &'static str,
    extra: impl Fn(u8) -> bool + Copy,
) -> Option<&'a str> {
    match_indices_ignore_ascii_case(ua, marker).find_map(|loc| {
        let rest = ua.get(loc + marker.len()..)?;
        let ws = rest.chars().next().filter(|c| c.is_whitespace())?;
        let rest = rest.get(ws.len_utf8()..)?;
        Some(leading_run(rest, extra))
    })
}

/// The value following the first `Edg` marker that is followed by a `/`,
/// e.g. `Edg/118.0`, `Edge/18.19041` or `EdgA/120.0`.
pub(crate) fn edge_version(ua: &str) -> Option<&str> {
    ua.match_indices("Edg").find_map(|(loc, _)| {
        let rest = ua.get(loc..)?;
        let slash = rest.find('/')?;
        value_at(rest, slash + 1)
    })
}

/// True if any `Edg` marker is followed by a `/` somewhere later in the user agent.
pub(crate) fn has_edge_marker(ua: &str) -> bool {
    ua.find("Edg")
        .and_then(|loc| ua.get(loc..))
        .is_some_and(|rest| rest.contains('/'))
}

/// The major version of an `rv:11` (or `rv 11`) token, as used by IE 11.
pub(crate) fn ie_rv_version(ua: &str) -> Option<&str> {
    ua.match_indices("rv").find_map(|(loc, _)| {
        if !at_word_start(ua, loc) {
            return None;
        }
        let after = ua.get(loc + 2..)?;
        let rest = after.trim_start_matches([' ', ':']);
        if rest.len() == after.len() {
            // at least one separator is required
            return None;
        }
        let digits = leading_digits(rest);
        (!digits.is_empty()).then_some(digits)
    })
}

/// The dotted version of an `MSIE 10.0` token.
pub(crate) fn msie_version(ua: &str) -> Option<&str> {
    ua.match_indices("MSIE").find_map(|(loc, _)| {
        if !at_word_start(ua, loc) {
            return None;
        }
        let rest = ua.get(loc + 4..)?;
        let ws = rest.chars().next().filter(|c| c.is_whitespace())?;
        let version = leading_run(rest.get(ws.len_utf8()..)?, |b| b == b'.');
        (!version.is_empty()).then_some(version)
    })
}

fn at_word_start(s: &str, loc: usize) -> bool {
    loc == 0
        || s.as_bytes()
            .get(loc - 1)
            .is_none_or(|b| !(b.is_ascii_alphanumeric() || *b == b'_'))
}

/// Whole word (ASCII case insensitive) match for any of the given words.
pub(crate) fn contains_any_word(ua: &str, words: &[&str]) -> bool {
    words
        .iter()
        .any(|word| contains_word_ignore_ascii_case(ua, word).is_some())
}
