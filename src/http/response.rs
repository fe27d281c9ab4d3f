//! Response writing.
//!
//! # Responsibilities
//! - Stream an opened page file with the resolved status and content type
//! - Produce the plain not-found reply when no page exists
//! - Echo ingress context headers when debugging
//!
//! # Design Decisions
//! - The body is streamed from the file, never buffered whole
//! - The file handle lives inside the body stream, so it is closed when
//!   the body finishes or the client goes away
//! - Read errors after the status is committed are logged, not rewritten
//! - Completion hooks run when the file is exhausted, before the body
//!   reports its end to the server

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use futures_util::{future, stream, StreamExt, TryStreamExt};
use tokio_util::io::ReaderStream;

use crate::pages::ErrorPage;

/// Body of the terminal not-found reply.
pub const NOT_FOUND_BODY: &str = "404 page not found\n";

/// Request headers copied to the response in debug mode.
pub const DEBUG_HEADERS: &[&str] = &[
    "x-code",
    "x-format",
    "x-original-uri",
    "x-namespace",
    "x-ingress-name",
    "x-service-name",
    "x-service-port",
    "x-request-id",
];

/// Stream `page` with `status`, declaring `content_type` verbatim.
///
/// `on_complete` runs once the whole file has been read. A body dropped
/// before that point never runs it.
pub fn page_response<F>(
    status: StatusCode,
    content_type: HeaderValue,
    page: ErrorPage,
    on_complete: F,
) -> Response
where
    F: FnOnce() + Send + 'static,
{
    let path = page.path;
    let finished = stream::once(async move { on_complete() })
        .filter_map(|()| future::ready(None::<Result<Bytes, std::io::Error>>));

    let body = ReaderStream::new(page.file)
        .inspect_err(move |err| {
            tracing::error!(
                path = %path.display(),
                error = %err,
                "error page stream failed after headers were sent"
            );
        })
        .chain(finished);

    let mut response = Response::new(Body::from_stream(body));
    *response.status_mut() = status;
    response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    response
}

/// Reply used when neither the exact nor the class page exists.
pub fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::X_CONTENT_TYPE_OPTIONS, "nosniff")],
        NOT_FOUND_BODY,
    )
        .into_response()
}

/// Copy the ingress context headers present in `request` onto `response`.
pub fn copy_debug_headers(request: &HeaderMap, response: &mut HeaderMap) {
    for &name in DEBUG_HEADERS {
        if let Some(value) = request.get(name) {
            response.insert(HeaderName::from_static(name), value.clone());
        }
    }
}
