/*!
 * Probe Tracing
 * Structured tracing for probe runs using the tracing crate
 *
 * Features:
 * - Run ID generation for correlating a probe's events
 * - JSON-formatted logs for structured parsing
 * - Logs on stderr so stdout stays the human-readable report
 */

use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use uuid::Uuid;

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn)
/// - PROBE_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var("PROBE_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        debug!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_names(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        debug!("Structured tracing initialized");
    }
}

/// Generate a unique run ID
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Emit a report as a structured `info` event
pub fn emit_report<R: Serialize>(probe: &'static str, report: &R) {
    match serde_json::to_string(report) {
        Ok(json) => info!(probe, report = %json, "probe report"),
        Err(e) => warn!(probe, error = %e, "failed to serialize probe report"),
    }
}

/// Span covering one probe measurement
pub struct ProbeSpan {
    span: tracing::Span,
    start: Instant,
    probe: &'static str,
    variant: String,
    run_id: String,
}

impl ProbeSpan {
    pub fn new(probe: &'static str, variant: impl Into<String>) -> Self {
        let run_id = generate_run_id();
        let variant = variant.into();

        let span = span!(
            Level::DEBUG,
            "probe",
            run_id = %run_id,
            probe = probe,
            variant = %variant,
            duration_us = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        span.in_scope(|| debug!(probe, variant = %variant, "probe started"));

        Self {
            span,
            start: Instant::now(),
            probe,
            variant,
            run_id,
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Record the measured duration and mark the run successful
    pub fn finish(self, measured: Duration) {
        self.span.record("duration_us", measured.as_micros() as u64);
        self.span.record("result", "success");
    }

    /// Record an error and mark the run failed
    pub fn fail(self, error: &dyn std::fmt::Display) {
        let message = error.to_string();
        self.span.record("error", message.as_str());
        self.span.record("result", "error");
        let _entered = self.span.enter();
        warn!(probe = self.probe, variant = %self.variant, error = %message, "probe failed");
    }
}

impl Drop for ProbeSpan {
    fn drop(&mut self) {
        let _entered = self.span.enter();
        debug!(
            run_id = %self.run_id,
            probe = self.probe,
            variant = %self.variant,
            wall_us = self.start.elapsed().as_micros() as u64,
            "probe span closed"
        );
    }
}
