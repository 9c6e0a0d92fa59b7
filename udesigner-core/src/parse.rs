//! Splitting of comma-separated form input.

/// Splits a comma-separated list exactly as typed.
///
/// Entries are not trimmed and empty segments are kept, so `""` yields a
/// single empty entry and `"a,,b"` yields three.
#[must_use]
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',').map(str::to_owned).collect()
}

/// Splits a comma-separated list and trims whitespace around each entry.
///
/// Empty segments are still kept so positional pairing is unchanged.
#[must_use]
pub fn split_list_trimmed(text: &str) -> Vec<String> {
    text.split(',').map(|s| s.trim().to_owned()).collect()
}
