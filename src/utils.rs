use std::time::{SystemTime, UNIX_EPOCH};

const TOKEN_PREVIEW_CHARS: usize = 15;

/// Leading characters of a token, safe to write to logs
pub(crate) fn token_preview(token: &str) -> &str {
    match token.char_indices().nth(TOKEN_PREVIEW_CHARS) {
        Some((idx, _)) => &token[..idx],
        None => token,
    }
}

pub(crate) fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
