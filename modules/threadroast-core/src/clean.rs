//! Cleaning transforms for raw profile-page text.
//!
//! The rendered layout container carries login-wall chrome, engagement
//! counters, and "More" expanders alongside the actual profile text. The
//! transforms run in a fixed order and replace in place; interior
//! whitespace is never re-collapsed.

use regex::Regex;

/// Everything from this marker onward is the login wall, not profile content.
pub const LOGIN_WALL_MARKER: &str = "Log in to see more from";

pub const SITE_DOMAIN: &str = "threads.net";

pub struct Cleaner {
    engagement: Regex,
}

impl Cleaner {
    pub fn new() -> Self {
        Self {
            engagement: Regex::new(r"Like\d*Comment\d*Repost\d*Share\d*").expect("valid regex"),
        }
    }

    /// Apply the cleaning transforms in order. `bare_username` is the
    /// lowercased handle without the leading `@`.
    pub fn clean(&self, raw: &str, bare_username: &str) -> String {
        let truncated = match raw.find(LOGIN_WALL_MARKER) {
            Some(idx) => &raw[..idx],
            None => raw,
        };

        let text = truncated.replace(SITE_DOMAIN, " ");
        let text = replace_all_ascii_ci(&text, &format!("@{bare_username}"), " ");
        let text = replace_all_ascii_ci(&text, bare_username, " ");
        let text = self.engagement.replace_all(&text, "");
        let text = strip_more_tokens(&text);
        text.trim().to_string()
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace every occurrence of an ASCII `needle`, case-insensitively.
fn replace_all_ascii_ci(text: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return text.to_string();
    }

    let bytes = text.as_bytes();
    let needle_bytes = needle.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < bytes.len() {
        if i + needle_bytes.len() <= bytes.len()
            && bytes[i..i + needle_bytes.len()].eq_ignore_ascii_case(needle_bytes)
        {
            out.push_str(replacement);
            i += needle_bytes.len();
        } else if let Some(c) = text[i..].chars().next() {
            out.push(c);
            i += c.len_utf8();
        } else {
            break;
        }
    }

    out
}

/// Replace the "More" expander token with a space wherever it is not part
/// of a longer word. The token shows up both glued to post captions
/// ("…captionMore") and free-standing between sections.
fn strip_more_tokens(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for (idx, token) in text.match_indices("More") {
        let end = idx + token.len();
        let continues_word = matches!(text[end..].chars().next(), Some(c) if c.is_ascii_lowercase());
        if continues_word {
            continue;
        }
        out.push_str(&text[last..idx]);
        out.push(' ');
        last = end;
    }

    out.push_str(&text[last..]);
    out
}
