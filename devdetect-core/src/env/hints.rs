use crate::error::OpaqueError;
use devdetect_utils::macros::match_ignore_ascii_case_str;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// A key that can be requested from the privacy gated high entropy values query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighEntropyHint {
    /// The device model, e.g. `Pixel 7`.
    Model,
    /// The platform version, e.g. `13.0.0` for Android 13 or `15.0.0` for Windows 11.
    PlatformVersion,
    /// CPU architecture, e.g. `x86` or `arm`.
    Architecture,
    /// CPU bitness, e.g. `64`.
    Bitness,
    /// Full version of each brand.
    FullVersionList,
    /// Full version of the user agent (deprecated by browsers).
    UaFullVersion,
}

impl HighEntropyHint {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::PlatformVersion => "platformVersion",
            Self::Architecture => "architecture",
            Self::Bitness => "bitness",
            Self::FullVersionList => "fullVersionList",
            Self::UaFullVersion => "uaFullVersion",
        }
    }
}

impl fmt::Display for HighEntropyHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HighEntropyHint {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "model" => Ok(Self::Model),
                "platformVersion" | "platform_version" => Ok(Self::PlatformVersion),
                "architecture" => Ok(Self::Architecture),
                "bitness" => Ok(Self::Bitness),
                "fullVersionList" | "full_version_list" => Ok(Self::FullVersionList),
                "uaFullVersion" | "ua_full_version" => Ok(Self::UaFullVersion),
                _ => Err(OpaqueError::from_display(format!("invalid high entropy hint: {s}"))),
            }
        }
    }
}

impl Serialize for HighEntropyHint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HighEntropyHint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Values resolved by a high entropy values query.
///
/// Only the requested keys are expected to be present,
/// see [`HighEntropyValues::select`].
pub struct HighEntropyValues {
    /// The device model, empty on desktop platforms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Version of the platform (operating system).
    #[serde(
        default,
        alias = "platformVersion",
        skip_serializing_if = "Option::is_none"
    )]
    pub platform_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitness: Option<String>,
    /// Brand and full version pairs, formatted as `Brand;v=version`.
    #[serde(
        default,
        alias = "fullVersionList",
        skip_serializing_if = "Option::is_none"
    )]
    pub full_version_list: Option<Vec<String>>,
    #[serde(
        default,
        alias = "uaFullVersion",
        skip_serializing_if = "Option::is_none"
    )]
    pub ua_full_version: Option<String>,
}

impl HighEntropyValues {
    /// Get the string value for the given hint, if present.
    ///
    /// [`HighEntropyHint::FullVersionList`] has no single string value and always returns `None`.
    #[must_use]
    pub fn get(&self, hint: HighEntropyHint) -> Option<&str> {
        match hint {
            HighEntropyHint::Model => self.model.as_deref(),
            HighEntropyHint::PlatformVersion => self.platform_version.as_deref(),
            HighEntropyHint::Architecture => self.architecture.as_deref(),
            HighEntropyHint::Bitness => self.bitness.as_deref(),
            HighEntropyHint::FullVersionList => None,
            HighEntropyHint::UaFullVersion => self.ua_full_version.as_deref(),
        }
    }

    /// Return a copy containing only the requested hints.
    #[must_use]
    pub fn select(&self, hints: &[HighEntropyHint]) -> Self {
        let wants = |hint| hints.contains(&hint);
        Self {
            model: self
                .model
                .clone()
                .filter(|_| wants(HighEntropyHint::Model)),
            platform_version: self
                .platform_version
                .clone()
                .filter(|_| wants(HighEntropyHint::PlatformVersion)),
            architecture: self
                .architecture
                .clone()
                .filter(|_| wants(HighEntropyHint::Architecture)),
            bitness: self
                .bitness
                .clone()
                .filter(|_| wants(HighEntropyHint::Bitness)),
            full_version_list: self
                .full_version_list
                .clone()
                .filter(|_| wants(HighEntropyHint::FullVersionList)),
            ua_full_version: self
                .ua_full_version
                .clone()
                .filter(|_| wants(HighEntropyHint::UaFullVersion)),
        }
    }

    /// True if no value is present at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_entropy_hint_parse() {
        for (input, expected) in [
            ("model", Some(HighEntropyHint::Model)),
            ("platformVersion", Some(HighEntropyHint::PlatformVersion)),
            ("PLATFORMVERSION", Some(HighEntropyHint::PlatformVersion)),
            ("platform_version", Some(HighEntropyHint::PlatformVersion)),
            ("bitness", Some(HighEntropyHint::Bitness)),
            ("fullVersionList", Some(HighEntropyHint::FullVersionList)),
            ("wow64", None),
        ] {
            assert_eq!(
                input.parse::<HighEntropyHint>().ok(),
                expected,
                "test_case: '{input}'"
            );
        }
    }

    #[test]
    fn test_high_entropy_values_select() {
        let values = HighEntropyValues {
            model: Some("Pixel 7".to_owned()),
            platform_version: Some("13.0.0".to_owned()),
            bitness: Some("64".to_owned()),
            ..Default::default()
        };

        let selected = values.select(&[HighEntropyHint::Model]);
        assert_eq!(selected.get(HighEntropyHint::Model), Some("Pixel 7"));
        assert_eq!(selected.get(HighEntropyHint::PlatformVersion), None);
        assert_eq!(selected.get(HighEntropyHint::Bitness), None);

        assert!(values.select(&[]).is_empty());
        assert!(!values.is_empty());
    }

    #[test]
    fn test_high_entropy_values_deserialize_camel_case() {
        let values: HighEntropyValues =
            serde_json::from_str(r#"{"model":"","platformVersion":"15.0.0"}"#).unwrap();
        assert_eq!(values.model.as_deref(), Some(""));
        assert_eq!(values.platform_version.as_deref(), Some("15.0.0"));
    }
}
