//! Log sanitization utilities
//!
//! Keeps large provider payloads (feature geometries, asset maps) and the
//! API key out of debug/error logs.

/// Maximum number of bytes of a payload included in log output.
const TRUNCATE_LIMIT: usize = 512;

/// Visible prefix length of a masked secret.
const SECRET_VISIBLE_PREFIX: usize = 4;

/// Truncate a payload for logging.
///
/// Payloads within the limit are returned unchanged; longer ones are cut on
/// a char boundary and suffixed with their total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);

    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Mask a secret, keeping only a short prefix so keys can be told apart.
pub fn mask_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(SECRET_VISIBLE_PREFIX).collect();
    if secret.chars().count() <= SECRET_VISIBLE_PREFIX * 2 {
        "***".to_string()
    } else {
        format!("{prefix}***")
    }
}
