//! Environment capabilities consumed by the devdetect classifiers.
//!
//! A classifier never reaches for ambient global state: everything it needs is
//! asked from an [`Environment`]. Every capability except the user agent is
//! optional and defaults to "unavailable", so a bare [`UserAgent`] is already a
//! valid environment, while an [`EnvironmentSnapshot`] or a
//! [`ClientHintsEnvironment`] can provide richer data.

use crate::error::{BoxError, OpaqueError};
use devdetect_utils::macros::{error::static_str_error, match_ignore_ascii_case_str};
use serde::{Deserialize, Deserializer, Serialize};
use std::{convert::Infallible, fmt, str::FromStr, sync::Arc};

mod hints;
pub use hints::{HighEntropyHint, HighEntropyValues};

mod snapshot;
pub use snapshot::{EnvironmentSnapshot, UserAgentDataSnapshot};

mod client_hints;
pub use client_hints::ClientHintsEnvironment;

static_str_error! {
    /// Returned by an [`Environment`] for a capability it does not provide.
    pub struct CapabilityUnavailable = "environment capability unavailable";
}

/// Facts about the runtime a client operates in.
///
/// Only [`Environment::user_agent`] is required. All other methods default to
/// reporting the capability as unavailable, which every classifier treats as a
/// negative or absent answer.
pub trait Environment: Send + Sync {
    /// The raw user agent string.
    fn user_agent(&self) -> &str;

    /// The navigator platform string (e.g. `iPhone`, `MacIntel`, `Win32`).
    fn platform(&self) -> Option<&str> {
        None
    }

    /// Maximum number of simultaneous touch points, if the property exists.
    fn max_touch_points(&self) -> Option<u32> {
        None
    }

    /// Legacy vendor prefixed touch point count, if the property exists.
    fn ms_max_touch_points(&self) -> Option<u32> {
        None
    }

    /// Evaluate a pointer media query.
    ///
    /// Returns an error if media queries are not supported or the evaluation failed.
    fn match_media(&self, query: PointerQuery) -> Result<bool, BoxError> {
        let _ = query;
        Err(CapabilityUnavailable::new().into())
    }

    /// Whether the (deprecated) window orientation property is supported.
    fn has_orientation(&self) -> bool {
        false
    }

    /// Whether the page runs as a home screen web app (Apple only).
    fn standalone(&self) -> Option<bool> {
        None
    }

    /// Whether the embedded Telegram webview marker is present.
    fn has_telegram_webview(&self) -> bool {
        false
    }

    /// The low entropy `mobile` flag of the structured user agent data.
    fn ua_mobile(&self) -> Option<bool> {
        None
    }

    /// The low entropy `platform` of the structured user agent data (e.g. `Windows`).
    fn ua_platform(&self) -> Option<&str> {
        None
    }

    /// Query privacy gated high entropy values.
    ///
    /// Resolves to `Ok(None)` when structured user agent data is not available at all,
    /// and to an error if the query was rejected.
    fn high_entropy_values(
        &self,
        hints: &[HighEntropyHint],
    ) -> impl Future<Output = Result<Option<HighEntropyValues>, BoxError>> + Send {
        let _ = hints;
        std::future::ready(Ok(None))
    }

    /// Verdict of an (external) private browsing mode probe.
    fn private_mode(&self) -> impl Future<Output = Result<bool, BoxError>> + Send {
        std::future::ready(Err(CapabilityUnavailable::new().into()))
    }

    /// Logical screen size.
    fn screen(&self) -> Option<ScreenSize> {
        None
    }

    /// The preferred locale tag.
    fn language(&self) -> Option<&str> {
        None
    }

    /// All reported locale tags, most preferred first.
    fn languages(&self) -> &[String] {
        &[]
    }

    /// The resolved IANA time zone name.
    fn time_zone(&self) -> Result<&str, BoxError> {
        Err(CapabilityUnavailable::new().into())
    }
}

macro_rules! impl_environment_deref {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<E: Environment> Environment for $ty {
                fn user_agent(&self) -> &str {
                    (**self).user_agent()
                }

                fn platform(&self) -> Option<&str> {
                    (**self).platform()
                }

                fn max_touch_points(&self) -> Option<u32> {
                    (**self).max_touch_points()
                }

                fn ms_max_touch_points(&self) -> Option<u32> {
                    (**self).ms_max_touch_points()
                }

                fn match_media(&self, query: PointerQuery) -> Result<bool, BoxError> {
                    (**self).match_media(query)
                }

                fn has_orientation(&self) -> bool {
                    (**self).has_orientation()
                }

                fn standalone(&self) -> Option<bool> {
                    (**self).standalone()
                }

                fn has_telegram_webview(&self) -> bool {
                    (**self).has_telegram_webview()
                }

                fn ua_mobile(&self) -> Option<bool> {
                    (**self).ua_mobile()
                }

                fn ua_platform(&self) -> Option<&str> {
                    (**self).ua_platform()
                }

                fn high_entropy_values(
                    &self,
                    hints: &[HighEntropyHint],
                ) -> impl Future<Output = Result<Option<HighEntropyValues>, BoxError>> + Send {
                    (**self).high_entropy_values(hints)
                }

                fn private_mode(&self) -> impl Future<Output = Result<bool, BoxError>> + Send {
                    (**self).private_mode()
                }

                fn screen(&self) -> Option<ScreenSize> {
                    (**self).screen()
                }

                fn language(&self) -> Option<&str> {
                    (**self).language()
                }

                fn languages(&self) -> &[String] {
                    (**self).languages()
                }

                fn time_zone(&self) -> Result<&str, BoxError> {
                    (**self).time_zone()
                }
            }
        )+
    };
}

impl_environment_deref!(&E, Arc<E>);

/// A pointer media query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerQuery {
    /// `(pointer:fine)`: an accurate pointing device such as a mouse.
    Fine,
    /// `(pointer:coarse)`: a pointing device of limited accuracy such as a finger.
    Coarse,
}

impl PointerQuery {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fine => "(pointer:fine)",
            Self::Coarse => "(pointer:coarse)",
        }
    }
}

impl fmt::Display for PointerQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PointerQuery {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "fine" | "(pointer:fine)" => Ok(Self::Fine),
                "coarse" | "(pointer:coarse)" => Ok(Self::Coarse),
                _ => Err(OpaqueError::from_display(format!("invalid pointer query: {s}"))),
            }
        }
    }
}

/// Logical screen size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A raw user agent string.
///
/// As an [`Environment`] it exposes only the user agent itself,
/// which is how a classifier is run against an explicit user agent override.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserAgent(Arc<str>);

impl UserAgent {
    /// Create a new [`UserAgent`] from a `User-Agent` (header) value.
    pub fn new(ua: impl Into<Arc<str>>) -> Self {
        Self(ua.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UserAgent {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl Serialize for UserAgent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserAgent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Ok(Self::new(s.as_ref()))
    }
}

impl Environment for UserAgent {
    fn user_agent(&self) -> &str {
        &self.0
    }
}
