//! Locale lookups for devdetect.
//!
//! Static ISO 639-1 (language) and ISO 3166-1 alpha-2 (country) tables,
//! together with the helpers that turn the locale facts of an
//! [`Environment`](devdetect_core::env::Environment) into display strings.
//!
//! # Example
//!
//! ```
//! use devdetect_core::env::EnvironmentSnapshot;
//! use devdetect_locale::{country_name, format_supported_languages, language_name};
//!
//! assert_eq!(language_name("EN"), "English");
//! assert_eq!(country_name("us").unwrap(), "United States of America");
//! assert!(country_name("USA").is_err());
//!
//! let env = EnvironmentSnapshot::new("Mozilla/5.0").with_languages(["en-US", "en-GB", "fr"]);
//! assert_eq!(
//!     format_supported_languages(&env),
//!     ["English (United States, United Kingdom)", "French"],
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod country;
mod format;
mod language;
mod time_zone;

#[doc(inline)]
pub use country::{
    ISO_3166_1, InvalidCountryCode, country_display_name, country_name, lookup_country,
};
#[doc(inline)]
pub use format::{browser_language, format_locale_tags, format_supported_languages, languages};
#[doc(inline)]
pub use language::{ISO_639_1, language_name, lookup_language};
#[doc(inline)]
pub use time_zone::current_time_zone;
