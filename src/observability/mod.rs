//! Observability subsystem.
//!
//! Structured logging through `tracing`. Per-request access logs are emitted
//! at DEBUG by tower-http's `TraceLayer`, so they stay silent at the default
//! `info` level.

pub mod logging;

pub use logging::{default_filter, init_logging};
