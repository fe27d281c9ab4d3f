//! Status code from the `X-Code` header.

use axum::http::{HeaderValue, StatusCode};

/// Code used when the header is missing or not an integer.
pub const DEFAULT_CODE: i64 = 404;

/// Parse the `X-Code` header as a decimal integer, defaulting to 404.
///
/// No range check is applied: whatever parses is used for the file lookup.
pub fn resolve_code(header: Option<&HeaderValue>) -> i64 {
    let raw = header.and_then(|value| value.to_str().ok()).unwrap_or("");

    match raw.parse::<i64>() {
        Ok(code) => code,
        Err(err) => {
            tracing::warn!(
                header = ?header,
                raw = raw,
                error = %err,
                code = DEFAULT_CODE,
                "unexpected error reading return code, using default"
            );
            DEFAULT_CODE
        }
    }
}

/// Status line for a resolved code.
///
/// Codes HTTP cannot carry (outside 100-999) are answered with 404.
pub fn status_line(code: i64) -> StatusCode {
    u16::try_from(code)
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or_else(|| {
            tracing::warn!(code, "code is not a valid HTTP status, replying 404");
            StatusCode::NOT_FOUND
        })
}
