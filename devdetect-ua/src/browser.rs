//! Browser classification.
//!
//! Detectors in [`BROWSER_DETECTORS`] run in order and the first one that
//! recognises the user agent decides the result. In-app browsers come first
//! as they embed the tokens of the engine they are built on.

use crate::parse::{
    edge_version, has_edge_marker, ie_rv_version, msie_version, token_value,
    token_value_ignore_ascii_case, word_token_value,
};
use devdetect_core::{env::Environment, error::OpaqueError, telemetry::tracing};
use devdetect_utils::{
    macros::match_ignore_ascii_case_str,
    str::{any_submatch_ignore_ascii_case, submatch_ignore_ascii_case},
};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// Browser family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserKind {
    Yandex,
    /// The standalone Messenger app.
    Messenger,
    /// The Facebook in-app browser.
    Facebook,
    /// The Instagram in-app browser.
    Instagram,
    /// The Telegram in-app browser.
    Telegram,
    WeChat,
    SeaMonkey,
    Firefox,
    Chrome,
    Chromium,
    Edge,
    Safari,
    Opera,
    InternetExplorer,
    Unknown,
}

impl BrowserKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yandex => "Yandex",
            Self::Messenger => "Messenger",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::Telegram => "Telegram InApp Browser",
            Self::WeChat => "WeChat",
            Self::SeaMonkey => "SeaMonkey",
            Self::Firefox => "Firefox",
            Self::Chrome => "Chrome",
            Self::Chromium => "Chromium",
            Self::Edge => "Edge",
            Self::Safari => "Safari",
            Self::Opera => "Opera",
            Self::InternetExplorer => "IE",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrowserKind {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "Yandex" => Ok(Self::Yandex),
                "Messenger" => Ok(Self::Messenger),
                "Facebook" => Ok(Self::Facebook),
                "Instagram" => Ok(Self::Instagram),
                "Telegram" | "Telegram InApp Browser" => Ok(Self::Telegram),
                "WeChat" => Ok(Self::WeChat),
                "SeaMonkey" => Ok(Self::SeaMonkey),
                "Firefox" => Ok(Self::Firefox),
                "Chrome" => Ok(Self::Chrome),
                "Chromium" => Ok(Self::Chromium),
                "Edge" => Ok(Self::Edge),
                "Safari" => Ok(Self::Safari),
                "Opera" => Ok(Self::Opera),
                "IE" | "Internet Explorer" => Ok(Self::InternetExplorer),
                "Unknown" => Ok(Self::Unknown),
                _ => Err(OpaqueError::from_display(format!("invalid browser kind: {s}"))),
            }
        }
    }
}

impl Serialize for BrowserKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BrowserKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A classified browser.
///
/// Displays as the family label followed by the app build and version when known,
/// e.g. `Edge 118.0`, `Facebook FBIOS 410.0`, `WeChat` or `Unknown`.
pub struct BrowserInfo {
    pub kind: BrowserKind,
    /// Build label of an in-app browser (e.g. the `FBAN` value of Facebook).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl BrowserInfo {
    #[must_use]
    pub fn new(kind: BrowserKind) -> Self {
        Self {
            kind,
            app: None,
            version: None,
        }
    }

    pub fn with_version(kind: BrowserKind, version: impl Into<String>) -> Self {
        Self {
            kind,
            app: None,
            version: Some(version.into()),
        }
    }
}

impl fmt::Display for BrowserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.as_str())?;
        for part in [&self.app, &self.version].into_iter().flatten() {
            write!(f, " {part}")?;
        }
        Ok(())
    }
}

/// The facts a browser detector works with.
pub struct BrowserInput<'a> {
    pub ua: &'a str,
    /// Whether the Telegram webview marker is present.
    pub telegram_webview: bool,
}

/// A browser detector, `None` if it does not recognise the input.
pub type BrowserDetector = fn(&BrowserInput<'_>) -> Option<BrowserInfo>;

/// Ordered browser detectors, the first detector returning a result wins.
pub const BROWSER_DETECTORS: &[BrowserDetector] = &[
    detect_yandex,
    detect_messenger,
    detect_facebook,
    detect_instagram,
    detect_telegram,
    detect_wechat,
    detect_seamonkey,
    detect_firefox,
    detect_chrome,
    detect_chromium,
    detect_edge,
    detect_safari,
    detect_opera,
    detect_internet_explorer,
];

/// Classify the browser of the environment.
pub fn classify_browser(env: &impl Environment) -> BrowserInfo {
    let input = BrowserInput {
        ua: env.user_agent(),
        telegram_webview: env.has_telegram_webview(),
    };
    let info = BROWSER_DETECTORS
        .iter()
        .find_map(|detect| detect(&input))
        .unwrap_or_else(|| BrowserInfo::new(BrowserKind::Unknown));
    tracing::trace!(browser = %info, "classified browser");
    info
}

fn detect_yandex(input: &BrowserInput<'_>) -> Option<BrowserInfo> {
    token_value_ignore_ascii_case(input.ua, "YaBrowser/")
        .map(|version| BrowserInfo::with_version(BrowserKind::Yandex, version))
}

fn detect_messenger(input: &BrowserInput<'_>) -> Option<BrowserInfo> {
    word_token_value(input.ua, "Messenger/")
        .map(|version| BrowserInfo::with_version(BrowserKind::Messenger, version))
}

fn detect_facebook(input: &BrowserInput<'_>) -> Option<BrowserInfo> {
    if !any_submatch_ignore_ascii_case(input.ua, ["FBAN", "FBAV"]) {
        return None;
    }
    Some(BrowserInfo {
        kind: BrowserKind::Facebook,
        app: token_value_ignore_ascii_case(input.ua, "FBAN/").map(ToOwned::to_owned),
        version: token_value_ignore_ascii_case(input.ua, "FBAV/").map(ToOwned::to_owned),
    })
}

fn detect_instagram(input: &BrowserInput<'_>) -> Option<BrowserInfo> {
    token_value_ignore_ascii_case(input.ua, "Instagram ")
        .map(|version| BrowserInfo::with_version(BrowserKind::Instagram, version))
}

fn detect_telegram(input: &BrowserInput<'_>) -> Option<BrowserInfo> {
    input
        .telegram_webview
        .then(|| BrowserInfo::new(BrowserKind::Telegram))
}

fn detect_wechat(input: &BrowserInput<'_>) -> Option<BrowserInfo> {
    any_submatch_ignore_ascii_case(input.ua, ["micromessenger", "weixin"])
        .then(|| BrowserInfo::new(BrowserKind::WeChat))
}

fn detect_seamonkey(input: &BrowserInput<'_>) -> Option<BrowserInfo> {
    token_value(input.ua, "SeaMonkey/")
        .map(|version| BrowserInfo::with_version(BrowserKind::SeaMonkey, version))
}

fn detect_firefox(input: &BrowserInput<'_>) -> Option<BrowserInfo> {
    let version = token_value(input.ua, "Firefox/")?;
    token_value(input.ua, "SeaMonkey/")
        .is_none()
        .then(|| BrowserInfo::with_version(BrowserKind::Firefox, version))
}

fn detect_chrome(input: &BrowserInput<'_>) -> Option<BrowserInfo> {
    let version = token_value(input.ua, "Chrome/")?;
    (!input.ua.contains("Chromium/") && !has_edge_marker(input.ua))
        .then(|| BrowserInfo::with_version(BrowserKind::Chrome, version))
}

fn detect_chromium(input: &BrowserInput<'_>) -> Option<BrowserInfo> {
    token_value(input.ua, "Chromium/")
        .map(|version| BrowserInfo::with_version(BrowserKind::Chromium, version))
}

fn detect_edge(input: &BrowserInput<'_>) -> Option<BrowserInfo> {
    edge_version(input.ua).map(|version| BrowserInfo::with_version(BrowserKind::Edge, version))
}

/// Safari reports its version in a separate `Version/` token,
/// the `Safari/` token carries the WebKit build.
fn detect_safari(input: &BrowserInput<'_>) -> Option<BrowserInfo> {
    token_value(input.ua, "Safari/")?;
    if token_value(input.ua, "Chrome/").is_some() || token_value(input.ua, "Chromium/").is_some()
    {
        return None;
    }
    token_value(input.ua, "Version/")
        .map(|version| BrowserInfo::with_version(BrowserKind::Safari, version))
}

fn detect_opera(input: &BrowserInput<'_>) -> Option<BrowserInfo> {
    token_value(input.ua, "OPR/")
        .or_else(|| token_value(input.ua, "Opera/"))
        .map(|version| BrowserInfo::with_version(BrowserKind::Opera, version))
}

fn detect_internet_explorer(input: &BrowserInput<'_>) -> Option<BrowserInfo> {
    if !submatch_ignore_ascii_case(input.ua, "trident") {
        return None;
    }
    Some(
        ie_rv_version(input.ua)
            .or_else(|| msie_version(input.ua))
            .map_or_else(
                || BrowserInfo::new(BrowserKind::InternetExplorer),
                |version| BrowserInfo::with_version(BrowserKind::InternetExplorer, version),
            ),
    )
}
