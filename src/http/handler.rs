//! The catch-all error page handler.
//!
//! One pass per request:
//! ```text
//! resolve format → resolve code → open exact → open class
//!     found     → stream page with resolved status, record metrics once
//!                 the last byte has been read
//!     not found → plain 404, no metrics
//! ```

use std::time::Instant;

use axum::{
    extract::State,
    http::{HeaderMap, Version},
    response::Response,
};

use crate::http::response::{copy_debug_headers, not_found, page_response};
use crate::http::server::AppState;
use crate::pages::{open_page, status_line, ResolvedTarget};

/// Serve the error page selected by `X-Code` and `X-Format`.
pub async fn error_page(
    State(state): State<AppState>,
    version: Version,
    headers: HeaderMap,
) -> Response {
    let start = Instant::now();
    let target = ResolvedTarget::from_headers(&headers);

    let mut response = match open_page(&state.root, target.code, &target.extension).await {
        Ok(page) => {
            tracing::info!(
                code = target.code,
                format = ?target.format,
                file = %page.path.display(),
                tier = ?page.tier,
                "serving custom error response"
            );
            let metrics = state.metrics.clone();
            page_response(status_line(target.code), target.format, page, move || {
                metrics.record_request(version, start.elapsed());
            })
        }
        Err(err) => {
            tracing::warn!(
                code = target.code,
                format = ?target.format,
                error = %err,
                "no error page available"
            );
            not_found()
        }
    };

    if state.debug_headers {
        copy_debug_headers(&headers, response.headers_mut());
    }

    response
}
