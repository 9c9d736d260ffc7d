//! Supported output languages for generated roasts.
//!
//! Fixed code → display-name table with one designated default. Read-only
//! for the life of the process; unknown codes fall back to the default
//! rather than erroring.

/// The designated default (code, display name) pair.
pub const DEFAULT_LANG: (&str, &str) = ("id", "Indonesia");

pub const SUPPORTED_LANGS: &[(&str, &str)] = &[DEFAULT_LANG];

pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGS.iter().any(|(c, _)| *c == code)
}

/// Display name for a language code, falling back to the default language.
pub fn display_name(code: &str) -> &'static str {
    SUPPORTED_LANGS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(DEFAULT_LANG.1)
}

/// Clamp a requested code to a supported one.
pub fn normalize(code: &str) -> &str {
    if is_supported(code) {
        code
    } else {
        DEFAULT_LANG.0
    }
}
