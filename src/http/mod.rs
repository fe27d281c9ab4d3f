//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routes, middleware)
//!     → handler.rs (resolve target, open page, record metrics)
//!     → response.rs (status, content type, streamed body)
//!     → Send to client
//! ```

pub mod handler;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
