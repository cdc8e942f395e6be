//! Operating system classification.
//!
//! The operating system family is decided by the first matching rule of
//! [`OS_RULES`], after which a family specific refinement extracts the version.

use crate::{
    device::is_ipad,
    parse::{
        parse_android_version, parse_ios_version, parse_mac_os_x_version, token_value,
        token_value_ignore_ascii_case,
    },
};
use devdetect_core::{
    env::{Environment, HighEntropyHint},
    error::OpaqueError,
    telemetry::tracing,
};
use devdetect_utils::macros::match_ignore_ascii_case_str;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsKind {
    Ios,
    Android,
    BlackBerryOs,
    WindowsMobile,
    AmazonOs,
    Windows311,
    Windows95,
    Windows98,
    Windows2000,
    WindowsXp,
    WindowsServer2003,
    WindowsVista,
    Windows7,
    Windows8,
    Windows81,
    Windows10,
    /// Windows 11 still reports `Windows NT 10.0`,
    /// it can only be told apart through the platform version.
    Windows11,
    WindowsMe,
    WindowsCe,
    OpenBsd,
    SunOs,
    ChromeOs,
    Linux,
    MacOs,
    /// iPadOS 13+ running in desktop mode, which reports itself as a Mac.
    IpadOs,
    Qnx,
    BeOs,
    Os2,
    Aurora,
    Unknown,
}

impl OsKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "iOS",
            Self::Android => "Android",
            Self::BlackBerryOs => "BlackBerry OS",
            Self::WindowsMobile => "Windows Mobile",
            Self::AmazonOs => "Amazon OS",
            Self::Windows311 => "Windows 3.11",
            Self::Windows95 => "Windows 95",
            Self::Windows98 => "Windows 98",
            Self::Windows2000 => "Windows 2000",
            Self::WindowsXp => "Windows XP",
            Self::WindowsServer2003 => "Windows Server 2003",
            Self::WindowsVista => "Windows Vista",
            Self::Windows7 => "Windows 7",
            Self::Windows8 => "Windows 8",
            Self::Windows81 => "Windows 8.1",
            Self::Windows10 => "Windows 10",
            Self::Windows11 => "Windows 11",
            Self::WindowsMe => "Windows ME",
            Self::WindowsCe => "Windows CE",
            Self::OpenBsd => "Open BSD",
            Self::SunOs => "Sun OS",
            Self::ChromeOs => "Chrome OS",
            Self::Linux => "Linux",
            Self::MacOs => "Mac OS",
            Self::IpadOs => "iPad OS",
            Self::Qnx => "QNX",
            Self::BeOs => "BeOS",
            Self::Os2 => "OS/2",
            Self::Aurora => "Aurora",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsKind {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "iOS" => Ok(Self::Ios),
                "Android" => Ok(Self::Android),
                "BlackBerry OS" => Ok(Self::BlackBerryOs),
                "Windows Mobile" => Ok(Self::WindowsMobile),
                "Amazon OS" => Ok(Self::AmazonOs),
                "Windows 3.11" => Ok(Self::Windows311),
                "Windows 95" => Ok(Self::Windows95),
                "Windows 98" => Ok(Self::Windows98),
                "Windows 2000" => Ok(Self::Windows2000),
                "Windows XP" => Ok(Self::WindowsXp),
                "Windows Server 2003" => Ok(Self::WindowsServer2003),
                "Windows Vista" => Ok(Self::WindowsVista),
                "Windows 7" => Ok(Self::Windows7),
                "Windows 8" => Ok(Self::Windows8),
                "Windows 8.1" => Ok(Self::Windows81),
                "Windows 10" => Ok(Self::Windows10),
                "Windows 11" => Ok(Self::Windows11),
                "Windows ME" => Ok(Self::WindowsMe),
                "Windows CE" => Ok(Self::WindowsCe),
                "Open BSD" | "OpenBSD" => Ok(Self::OpenBsd),
                "Sun OS" | "SunOS" => Ok(Self::SunOs),
                "Chrome OS" | "ChromeOS" => Ok(Self::ChromeOs),
                "Linux" => Ok(Self::Linux),
                "Mac OS" | "macOS" => Ok(Self::MacOs),
                "iPad OS" | "iPadOS" => Ok(Self::IpadOs),
                "QNX" => Ok(Self::Qnx),
                "BeOS" => Ok(Self::BeOs),
                "OS/2" => Ok(Self::Os2),
                "Aurora" => Ok(Self::Aurora),
                "Unknown" => Ok(Self::Unknown),
                _ => Err(OpaqueError::from_display(format!("invalid os kind: {s}"))),
            }
        }
    }
}

impl Serialize for OsKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OsKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// Ordered operating system rules, the first rule with a matching
/// (case sensitive) marker wins.
///
/// Order encodes priority: mobile systems embed desktop markers
/// (e.g. Android user agents contain `Linux`), so they come first.
pub const OS_RULES: &[(OsKind, &[&str])] = &[
    (OsKind::Ios, &["iPhone", "iPod", "iPad"]),
    (OsKind::Android, &["Android"]),
    (OsKind::BlackBerryOs, &["BlackBerry", "BB10"]),
    (OsKind::WindowsMobile, &["IEMobile"]),
    (OsKind::AmazonOs, &["Kindle"]),
    (OsKind::Windows311, &["Win16"]),
    (OsKind::Windows95, &["Windows 95", "Win95", "Windows_95"]),
    (OsKind::Windows98, &["Windows 98", "Win98"]),
    (OsKind::Windows2000, &["Windows NT 5.0", "Windows 2000"]),
    (OsKind::WindowsXp, &["Windows NT 5.1", "Windows XP"]),
    (OsKind::WindowsServer2003, &["Windows NT 5.2"]),
    (OsKind::WindowsVista, &["Windows NT 6.0"]),
    (OsKind::Windows7, &["Windows NT 6.1"]),
    (OsKind::Windows8, &["Windows NT 6.2"]),
    (OsKind::Windows81, &["Windows NT 6.3"]),
    (OsKind::Windows10, &["Windows NT 10.0"]),
    (OsKind::WindowsMe, &["Windows ME"]),
    (
        OsKind::WindowsCe,
        &["Windows CE", "WinCE", "Microsoft Pocket Internet Explorer"],
    ),
    (OsKind::OpenBsd, &["OpenBSD"]),
    (OsKind::SunOs, &["SunOS"]),
    (OsKind::ChromeOs, &["CrOS"]),
    (OsKind::Linux, &["Linux", "X11"]),
    (OsKind::MacOs, &["Mac_PowerPC", "Macintosh"]),
    (OsKind::Qnx, &["QNX"]),
    (OsKind::BeOs, &["BeOS"]),
    (OsKind::Os2, &["OS/2"]),
    (OsKind::Aurora, &["Aurora"]),
];

/// Operating system family of the first rule in [`OS_RULES`] matching the user agent.
#[must_use]
pub fn match_os_rule(ua: &str) -> OsKind {
    OS_RULES
        .iter()
        .find(|(_, markers)| markers.iter().any(|marker| ua.contains(marker)))
        .map(|(kind, _)| *kind)
        .unwrap_or(OsKind::Unknown)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A classified operating system.
///
/// Displays as the family label, followed by the version if known,
/// e.g. `Android 13`, `iOS 16.6.1` or `Unknown`.
pub struct OsInfo {
    pub kind: OsKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl OsInfo {
    #[must_use]
    pub fn new(kind: OsKind) -> Self {
        Self {
            kind,
            version: None,
        }
    }

    /// Create a new [`OsInfo`], an empty version is treated as absent.
    pub fn with_version(kind: OsKind, version: Option<impl Into<String>>) -> Self {
        Self {
            kind,
            version: version.map(Into::into).filter(|v| !v.is_empty()),
        }
    }
}

impl fmt::Display for OsInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} {version}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Classify the operating system of the environment.
///
/// Compared to [`classify_os_sync`] this also consults the high entropy platform version,
/// to tell Windows 11 apart from Windows 10 and to get the exact Android version.
pub async fn classify_os(env: &impl Environment) -> OsInfo {
    let info = match match_os_rule(env.user_agent()) {
        OsKind::Windows10 => {
            if is_windows_11(env).await {
                OsInfo::new(OsKind::Windows11)
            } else {
                OsInfo::new(OsKind::Windows10)
            }
        }
        OsKind::Android => OsInfo::with_version(OsKind::Android, android_version(env).await),
        kind => refine(env, kind),
    };
    tracing::trace!(os = %info, "classified operating system");
    info
}

/// Classify the operating system of the environment using the user agent only.
///
/// Windows 11 is reported as Windows 10.
pub fn classify_os_sync(env: &impl Environment) -> OsInfo {
    let info = match match_os_rule(env.user_agent()) {
        OsKind::Android => {
            OsInfo::with_version(OsKind::Android, parse_android_version(env.user_agent()))
        }
        kind => refine(env, kind),
    };
    tracing::trace!(os = %info, "classified operating system (sync)");
    info
}

fn refine(env: &impl Environment, kind: OsKind) -> OsInfo {
    let ua = env.user_agent();
    match kind {
        OsKind::Ios => OsInfo::with_version(kind, parse_ios_version(ua)),
        OsKind::Aurora => {
            OsInfo::with_version(kind, token_value_ignore_ascii_case(ua, "Aurora/"))
        }
        OsKind::MacOs => match parse_mac_os_x_version(ua) {
            Some(_) if is_ipad(env) => {
                OsInfo::with_version(OsKind::IpadOs, token_value(ua, "Version/"))
            }
            version => OsInfo::with_version(kind, version),
        },
        kind => OsInfo::new(kind),
    }
}

async fn android_version(env: &impl Environment) -> Option<String> {
    match env
        .high_entropy_values(&[HighEntropyHint::PlatformVersion])
        .await
    {
        Ok(Some(values)) => {
            if let Some(version) = values.platform_version.filter(|v| !v.is_empty()) {
                return Some(version);
            }
        }
        Ok(None) => (),
        Err(err) => tracing::debug!("high entropy platform version query failed: {err}"),
    }
    parse_android_version(env.user_agent())
        .filter(|v| !v.is_empty())
        .map(ToOwned::to_owned)
}

/// True if the environment reports a Windows platform with a major
/// platform version of at least 13, which is how Windows 11 identifies itself.
///
/// Always false if the structured user agent data or the platform version is unavailable.
pub async fn is_windows_11(env: &impl Environment) -> bool {
    if env.ua_platform() != Some("Windows") {
        return false;
    }
    let values = match env
        .high_entropy_values(&[HighEntropyHint::PlatformVersion])
        .await
    {
        Ok(Some(values)) => values,
        Ok(None) => return false,
        Err(err) => {
            tracing::debug!("high entropy platform version query failed: {err}");
            return false;
        }
    };
    values
        .platform_version
        .as_deref()
        .and_then(major_version)
        .is_some_and(|major| major >= 13)
}

fn major_version(version: &str) -> Option<u32> {
    let major = version.trim_start().split('.').next()?;
    let end = major
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(major.len());
    major.get(..end)?.parse().ok()
}
