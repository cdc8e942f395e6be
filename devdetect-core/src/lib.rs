//! Core types shared by all devdetect crates.
//!
//! - [`error`]: type-erased errors and context helpers;
//! - [`env`]: the [`Environment`](env::Environment) capability trait through which
//!   every classifier receives the facts it needs (user agent, touch points,
//!   client hints, locale tags, ...), together with the adapters that provide them;
//! - [`telemetry`]: re-export of the tracing facade used across the workspace.
//!
//! # devdetect
//!
//! Crate used by the end-user `devdetect` crate and `devdetect` crate authors alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

pub mod env;
pub mod error;
pub mod telemetry;
