//! Liveness endpoint.
//!
//! The service holds no state that can go bad, so liveness is just
//! "the process answers HTTP".

use axum::http::StatusCode;

/// `GET /healthz`: always 200 with an empty body.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
