//! Log sanitization utilities
//!
//! Keeps provider payloads (HTML error pages, long JSON bodies) and API
//! tokens from being dumped verbatim into CI logs.

/// Maximum number of bytes of a payload included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret left visible by [`mask_secret`].
const SECRET_VISIBLE_PREFIX: usize = 4;

/// Largest char boundary `<= index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a payload for logging.
///
/// Returns the input unchanged when it fits, otherwise the first
/// `TRUNCATE_LIMIT` bytes followed by the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a secret, keeping only a short prefix, e.g. `"abcd****** (40 chars)"`.
///
/// Secrets no longer than the prefix are masked completely.
pub fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    if len <= SECRET_VISIBLE_PREFIX {
        return "*".repeat(len);
    }
    let prefix: String = secret.chars().take(SECRET_VISIBLE_PREFIX).collect();
    format!("{prefix}****** ({len} chars)")
}
