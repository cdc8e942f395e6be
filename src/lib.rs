//! 🔎 devdetect detects the client environment a request or page runs in.
//!
//! Given the facts an environment exposes, be it only a user agent string,
//! the client hint headers of an HTTP request or a full snapshot of the
//! navigator data captured client side, devdetect tells you:
//!
//! | category | support list |
//! |-|-|
//! | ✅ operating system | ✅ [rule based](crate::ua::os::OS_RULES) ⸱ ✅ [Windows 11](crate::ua::os::is_windows_11) ⸱ ✅ Android / iOS / macOS versions ⸱ ✅ iPadOS |
//! | ✅ browser | ✅ [ordered detectors](crate::ua::browser::BROWSER_DETECTORS) ⸱ ✅ in-app browsers (Facebook, Instagram, WeChat, Telegram, ...) |
//! | ✅ device | ✅ [device type](crate::ua::device::device_type) ⸱ ✅ [pointer](crate::ua::device::is_pointer_device) / [sensor](crate::ua::device::is_sensor_device) ⸱ ✅ [device model](crate::ua::device::device_model) |
//! | ✅ probes | ✅ [webview](crate::ua::probe::is_webview) ⸱ ✅ [incognito](crate::ua::probe::is_incognito_mode) |
//! | ✅ locale | ✅ [ISO 639-1](crate::locale::language_name) ⸱ ✅ [ISO 3166-1](crate::locale::country_name) ⸱ ✅ [supported languages](crate::locale::format_supported_languages) ⸱ ✅ [time zone](crate::locale::current_time_zone) |
//!
//! Every classifier takes an [`Environment`](crate::env::Environment) as explicit input,
//! there is no ambient global state. Use [`UserAgent`](crate::env::UserAgent) to classify a
//! bare user agent, [`ClientHintsEnvironment`](crate::env::ClientHintsEnvironment) on the
//! server side or [`EnvironmentSnapshot`](crate::env::EnvironmentSnapshot) for captured data.
//!
//! # Example
//!
//! ```
//! use devdetect::{env::EnvironmentSnapshot, report::ClientReport, ua::device::DeviceConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let env = EnvironmentSnapshot::new(
//!     "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Mobile Safari/537.36",
//! )
//! .with_languages(["en-US", "en-GB", "fr"]);
//!
//! let report = ClientReport::collect(&env, &DeviceConfig::default()).await;
//! assert_eq!(report.browser.to_string(), "Chrome 118.0.0.0");
//! assert_eq!(report.os.to_string(), "Android 13");
//! assert_eq!(report.device_type.to_string(), "Mobile");
//! assert_eq!(report.device_model, "Pixel");
//! assert_eq!(
//!     report.supported_languages,
//!     ["English (United States, United Kingdom)", "French"],
//! );
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(inline)]
pub use ::devdetect_core::error;

#[doc(inline)]
pub use ::devdetect_core::env;

#[doc(inline)]
pub use ::devdetect_core::telemetry;

#[doc(inline)]
pub use ::devdetect_utils as utils;

#[cfg(feature = "ua")]
#[cfg_attr(docsrs, doc(cfg(feature = "ua")))]
#[doc(inline)]
pub use ::devdetect_ua as ua;

#[cfg(feature = "locale")]
#[cfg_attr(docsrs, doc(cfg(feature = "locale")))]
#[doc(inline)]
pub use ::devdetect_locale as locale;

#[cfg(all(feature = "ua", feature = "locale"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "ua", feature = "locale"))))]
pub mod report;
