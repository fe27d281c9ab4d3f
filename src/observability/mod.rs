//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request handler produces:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counter and latency histogram per protocol)
//!
//! Consumers:
//!     → stdout (fmt subscriber)
//!     → /metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - The metrics registry is an owned object passed to the server, not a
//!   process-global recorder
//! - Metric updates are atomic increments inside the recorder

pub mod logging;
pub mod metrics;

pub use self::logging::init_logging;
pub use self::metrics::Metrics;
