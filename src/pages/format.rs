//! Media type to file extension.

use axum::http::HeaderValue;
use mime::Mime;

/// Format used when the request does not name one.
pub const DEFAULT_FORMAT: &str = "text/html";

/// Extension used whenever no better one can be derived.
pub const DEFAULT_EXTENSION: &str = ".html";

/// Why a format could not be mapped to an extension.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("format header is not visible ASCII")]
    Opaque,

    #[error("invalid media type {format:?}: {source}")]
    InvalidMediaType {
        format: String,
        #[source]
        source: mime::FromStrError,
    },

    #[error("no extension registered for {0}")]
    NoExtension(String),
}

/// Content type to send and extension to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFormat {
    pub content_type: HeaderValue,
    pub extension: String,
}

/// Resolve the `X-Format` header.
///
/// A missing or empty header means `text/html`. Any lookup failure keeps the
/// header as the content type but falls back to `.html` for the file.
pub fn resolve_format(header: Option<&HeaderValue>) -> ResolvedFormat {
    let content_type = match header.filter(|value| !value.is_empty()) {
        Some(value) => value.clone(),
        None => {
            tracing::info!(format = DEFAULT_FORMAT, "format not specified, using default");
            return ResolvedFormat {
                content_type: HeaderValue::from_static(DEFAULT_FORMAT),
                extension: DEFAULT_EXTENSION.to_string(),
            };
        }
    };

    let lookup = content_type
        .to_str()
        .map_err(|_| FormatError::Opaque)
        .and_then(extension_for);

    let extension = match lookup {
        Ok(ext) => with_leading_dot(ext),
        Err(err) => {
            tracing::warn!(
                format = ?content_type,
                error = %err,
                extension = DEFAULT_EXTENSION,
                "couldn't get media type extension, using default"
            );
            DEFAULT_EXTENSION.to_string()
        }
    };

    ResolvedFormat {
        content_type,
        extension,
    }
}

/// Registered extension for a media type, without the leading dot.
///
/// Parameters such as `charset` are ignored. When several extensions are
/// registered the one spelled like the subtype wins (`text/html` gives
/// `html`, not `htm`); otherwise the first one the registry lists.
pub fn extension_for(format: &str) -> Result<&'static str, FormatError> {
    let media: Mime = format
        .trim()
        .parse()
        .map_err(|source| FormatError::InvalidMediaType {
            format: format.to_string(),
            source,
        })?;

    let candidates = mime_guess::get_mime_extensions_str(media.essence_str())
        .filter(|exts| !exts.is_empty())
        .ok_or_else(|| FormatError::NoExtension(media.essence_str().to_string()))?;

    let subtype = media.subtype().as_str();
    let ext = candidates
        .iter()
        .copied()
        .find(|ext| ext.eq_ignore_ascii_case(subtype))
        .unwrap_or(candidates[0]);

    Ok(ext)
}

fn with_leading_dot(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}
