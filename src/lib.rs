//! Custom error page backend.
//!
//! Sits behind an ingress proxy that forwards failed requests here with
//! `X-Code` and `X-Format` headers, and answers with a static page picked
//! from a directory: `<root>/<code><ext>`, else `<root>/<d>xx<ext>`.

pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pages;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use observability::Metrics;
