//! Error page resolution.
//!
//! # Data Flow
//! ```text
//! X-Format header → format.rs → (content type, ".ext")
//! X-Code header   → code.rs   → status code (default 404)
//!                        │
//!                        ▼
//! resolver.rs: <root>/<code><ext>  →  <root>/<d>xx<ext>  →  not found
//! ```
//!
//! # Design Decisions
//! - Header problems never fail a request; they degrade to defaults and
//!   are only visible in logs
//! - The class fallback is derived from the resolved code, never from the
//!   raw header text
//!
//! The `X-Format` and `X-Code` headers are trusted input. This service must
//! sit behind a proxy that owns them, otherwise any caller can choose the
//! status and content type of the reply.

pub mod code;
pub mod format;
pub mod resolver;

use axum::http::{HeaderMap, HeaderValue};

pub use self::code::{resolve_code, status_line, DEFAULT_CODE};
pub use self::format::{resolve_format, ResolvedFormat, DEFAULT_FORMAT};
pub use self::resolver::{open_page, ErrorPage, PageNotFound, Tier};

/// Header carrying the media type the client expects.
pub const FORMAT_HEADER: &str = "x-format";

/// Header carrying the status code to reply with.
pub const CODE_HEADER: &str = "x-code";

/// Everything derived from one request's headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub code: i64,
    /// Sent verbatim as `Content-Type`.
    pub format: HeaderValue,
    /// Always starts with `.`.
    pub extension: String,
}

impl ResolvedTarget {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let ResolvedFormat {
            content_type,
            extension,
        } = resolve_format(headers.get(FORMAT_HEADER));
        let code = resolve_code(headers.get(CODE_HEADER));

        Self {
            code,
            format: content_type,
            extension,
        }
    }
}
