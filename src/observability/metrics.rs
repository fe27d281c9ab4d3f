//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Own the Prometheus recorder for the process
//! - Count served error pages and observe their latency
//! - Render the text exposition for `/metrics`
//!
//! # Metrics
//! - `default_http_backend_http_request_count_total` (counter): requests
//!   that located and served a page, by protocol version
//! - `default_http_backend_http_request_duration_seconds` (histogram):
//!   latency of those requests, by protocol version
//!
//! # Design Decisions
//! - The recorder is never installed globally; handlers receive it through
//!   state, so every server (and every test) has its own registry
//! - Buckets start at 1ms and 3ms, then follow the Prometheus defaults

use std::sync::Arc;
use std::time::Duration;

use axum::http::Version;
use metrics::{Key, KeyName, Label, Level, Metadata, Recorder};
use metrics_exporter_prometheus::{
    BuildError, Matcher, PrometheusBuilder, PrometheusHandle, PrometheusRecorder,
};

pub const REQUEST_COUNT: &str = "default_http_backend_http_request_count_total";
pub const REQUEST_DURATION: &str = "default_http_backend_http_request_duration_seconds";

const PROTO_LABEL: &str = "proto";

const DURATION_BUCKETS: &[f64] = &[
    0.001, 0.003, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Process-scoped metrics registry shared by all request handlers.
#[derive(Clone)]
pub struct Metrics {
    recorder: Arc<PrometheusRecorder>,
    handle: PrometheusHandle,
}

impl Metrics {
    /// Build a fresh registry with the request metrics described.
    pub fn new() -> Result<Self, BuildError> {
        let recorder = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(REQUEST_DURATION.to_string()),
                DURATION_BUCKETS,
            )?
            .build_recorder();

        recorder.describe_counter(
            KeyName::from_const_str(REQUEST_COUNT),
            None,
            "Counter of HTTP requests made.".into(),
        );
        recorder.describe_histogram(
            KeyName::from_const_str(REQUEST_DURATION),
            None,
            "Histogram of the time (in seconds) each request took.".into(),
        );

        let handle = recorder.handle();
        Ok(Self {
            recorder: Arc::new(recorder),
            handle,
        })
    }

    /// Count one served request and observe how long it took.
    pub fn record_request(&self, version: Version, elapsed: Duration) {
        let labels = vec![Label::new(PROTO_LABEL, proto_label(version))];
        let metadata = Metadata::new(module_path!(), Level::INFO, Some(module_path!()));

        self.recorder
            .register_counter(&Key::from_parts(REQUEST_COUNT, labels.clone()), &metadata)
            .increment(1);
        self.recorder
            .register_histogram(&Key::from_parts(REQUEST_DURATION, labels), &metadata)
            .record(elapsed.as_secs_f64());
    }

    /// Prometheus text exposition of everything recorded so far.
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// `major.minor` label for an HTTP version.
pub fn proto_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_11 => "1.1",
        Version::HTTP_2 => "2.0",
        Version::HTTP_3 => "3.0",
        _ => "unknown",
    }
}
