//! Telemetry utilities for devdetect.

pub mod tracing;
