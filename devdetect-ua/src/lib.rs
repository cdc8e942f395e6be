//! Client environment classification for devdetect.
//!
//! Classifiers for the operating system ([`os`]), browser ([`browser`])
//! and device ([`device`]) of a client, as well as a couple of privacy and
//! embedding [`probe`]s. Every classifier takes an
//! [`Environment`](devdetect_core::env::Environment): a bare
//! [`UserAgent`](devdetect_core::env::UserAgent) is enough to classify a
//! user agent string, richer environments unlock the capability based checks.
//!
//! Classification is best effort substring matching over popular user agents,
//! not a formal grammar. Unrecognised input never fails but resolves
//! to a sentinel such as `Unknown` or `-`.
//!
//! # Example
//!
//! ```
//! use devdetect_core::env::UserAgent;
//! use devdetect_ua::{browser::classify_browser, device::device_type, os::classify_os_sync};
//!
//! let ua = UserAgent::new(
//!     "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Mobile Safari/537.36",
//! );
//!
//! assert_eq!(classify_browser(&ua).to_string(), "Chrome 118.0.0.0");
//! assert_eq!(classify_os_sync(&ua).to_string(), "Android 13");
//! assert_eq!(device_type(&ua).to_string(), "Mobile");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod browser;
pub mod device;
pub mod os;
pub mod probe;

mod parse;
