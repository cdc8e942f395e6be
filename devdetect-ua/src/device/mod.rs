//! Device classification: form factor, input capabilities and model.

use crate::parse::contains_any_word;
use devdetect_core::{
    env::{Environment, HighEntropyHint, PointerQuery},
    error::OpaqueError,
    telemetry::tracing,
};
use devdetect_utils::{
    macros::match_ignore_ascii_case_str,
    str::{any_submatch_ignore_ascii_case, submatch_ignore_ascii_case},
};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

mod config;
pub use config::{DeviceConfig, MobileTokens};

mod model;
pub use model::{android_device_name, ios_device_name_for_resolution};

/// Apple family markers used to gate Apple specific heuristics.
pub(crate) const APPLE_FAMILY_TOKENS: &[&str] = &["iphone", "ipod", "ipad", "macintosh"];

const TOUCH_DEVICE_WORDS: &[&str] = &["BlackBerry", "webOS", "iPhone", "IEMobile", "Mobile"];
const TOUCH_PLATFORM_WORDS: &[&str] = &["Android", "Windows Phone", "iPad", "iPod"];

const MODEL_UNKNOWN: &str = "-";

/// Form factor of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    Tablet,
    Mobile,
    Desktop,
}

impl DeviceType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tablet => "Tablet",
            Self::Mobile => "Mobile",
            Self::Desktop => "Desktop",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "tablet" => Ok(Self::Tablet),
                "mobile" => Ok(Self::Mobile),
                "desktop" => Ok(Self::Desktop),
                _ => Err(OpaqueError::from_display(format!("invalid device type: {s}"))),
            }
        }
    }
}

impl Serialize for DeviceType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DeviceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// True if the primary pointing device is accurate, e.g. a mouse.
///
/// An environment without (working) media queries is treated as not having one.
pub fn is_pointer_device(env: &impl Environment) -> bool {
    match env.match_media(PointerQuery::Fine) {
        Ok(matches) => matches,
        Err(err) => {
            tracing::debug!("fine pointer media query failed: {err}");
            false
        }
    }
}

/// True if the device has a touch screen or another coarse pointing device.
///
/// Each signal is only consulted if the previous one is unavailable:
/// touch point count, legacy touch point count, coarse pointer media query,
/// orientation support and finally user agent sniffing.
pub fn is_sensor_device(env: &impl Environment) -> bool {
    if let Some(n) = env.max_touch_points() {
        return n > 0;
    }
    if let Some(n) = env.ms_max_touch_points() {
        return n > 0;
    }
    match env.match_media(PointerQuery::Coarse) {
        Ok(matches) => return matches,
        Err(err) => tracing::debug!("coarse pointer media query failed: {err}"),
    }
    if env.has_orientation() {
        return true;
    }

    let ua = env.user_agent();
    contains_any_word(ua, TOUCH_DEVICE_WORDS) || contains_any_word(ua, TOUCH_PLATFORM_WORDS)
}

/// True if the client runs on a mobile device, using the default [`DeviceConfig`].
pub fn is_mobile(env: &impl Environment) -> bool {
    is_mobile_with(env, &DeviceConfig::default())
}

/// True if the client runs on a mobile device.
///
/// The structured mobile flag of the client wins if exposed,
/// otherwise the user agent is matched against the configured mobile tokens.
pub fn is_mobile_with(env: &impl Environment, cfg: &DeviceConfig) -> bool {
    if let Some(mobile) = env.ua_mobile() {
        return mobile;
    }
    any_submatch_ignore_ascii_case(env.user_agent(), cfg.mobile_tokens.iter())
}

pub fn is_iphone(env: &impl Environment) -> bool {
    submatch_ignore_ascii_case(env.user_agent(), "iphone")
}

/// True for iPads, including iPadOS 13+ which identifies itself as a desktop Mac.
///
/// Never true for a user agent that [`is_iphone`].
pub fn is_ipad(env: &impl Environment) -> bool {
    if is_iphone(env) {
        return false;
    }
    let ua = env.user_agent();
    if submatch_ignore_ascii_case(ua, "ipad") {
        return true;
    }
    submatch_ignore_ascii_case(ua, "macintosh")
        && env.max_touch_points().is_some_and(|n| n > 2)
        && env.platform() != Some("iPhone")
}

/// True for Apple devices that are neither an iPhone nor an iPad.
pub fn is_mac(env: &impl Environment) -> bool {
    any_submatch_ignore_ascii_case(env.user_agent(), ["iphone", "ipad", "macintosh"])
        && !is_iphone(env)
        && !is_ipad(env)
}

pub(crate) fn is_apple_family(ua: &str) -> bool {
    any_submatch_ignore_ascii_case(ua, APPLE_FAMILY_TOKENS)
}

/// Classify the form factor, using the default [`DeviceConfig`].
pub fn device_type(env: &impl Environment) -> DeviceType {
    device_type_with(env, &DeviceConfig::default())
}

/// Classify the form factor.
///
/// Tablet signals take priority over phone signals, which take priority over
/// the generic mobile check. Everything else is a desktop.
pub fn device_type_with(env: &impl Environment, cfg: &DeviceConfig) -> DeviceType {
    let device_type = if is_ipad(env)
        || any_submatch_ignore_ascii_case(env.user_agent(), ["tablet", "ipad"])
    {
        DeviceType::Tablet
    } else if is_iphone(env) || is_mobile_with(env, cfg) {
        DeviceType::Mobile
    } else {
        DeviceType::Desktop
    };
    tracing::trace!(%device_type, "classified device type");
    device_type
}

/// Apple device name(s) for the screen resolution, using the default [`DeviceConfig`].
pub fn ios_device_name(env: &impl Environment) -> &'static str {
    ios_device_name_with(env, &DeviceConfig::default())
}

/// Apple device name(s) for the screen resolution of the environment.
///
/// Returns an empty string if the screen size is unknown, not in the table,
/// or (when gated) the user agent is not of the Apple family.
pub fn ios_device_name_with(env: &impl Environment, cfg: &DeviceConfig) -> &'static str {
    if cfg.gate_resolution_lookup && !is_apple_family(env.user_agent()) {
        return "";
    }
    env.screen()
        .map(|screen| ios_device_name_for_resolution(screen.width, screen.height))
        .unwrap_or_default()
}

/// Resolve a human readable device model, using the default [`DeviceConfig`].
pub async fn device_model(env: &impl Environment) -> String {
    device_model_with(env, &DeviceConfig::default()).await
}

/// Resolve a human readable device model.
///
/// Apple devices are resolved from the screen resolution table, other devices
/// through the high entropy `model` value and, for Android, the user agent.
/// Returns `"-"` if no model could be resolved.
pub async fn device_model_with(env: &impl Environment, cfg: &DeviceConfig) -> String {
    if is_ipad(env) {
        return apple_model(env, cfg, "iPad");
    }
    if is_iphone(env) {
        return apple_model(env, cfg, "iPhone");
    }
    if is_mac(env) {
        return "Mac".to_owned();
    }

    match env.high_entropy_values(&[HighEntropyHint::Model]).await {
        Ok(Some(values)) => {
            if let Some(model) = values.model.filter(|model| !model.is_empty()) {
                tracing::trace!(%model, "device model resolved from high entropy values");
                return model;
            }
        }
        Ok(None) => (),
        Err(err) => tracing::debug!("high entropy model query failed: {err}"),
    }

    if !is_mobile_with(env, cfg) {
        return MODEL_UNKNOWN.to_owned();
    }

    let ua = env.user_agent();
    if ua.contains("Android") {
        let name = android_device_name(ua);
        if !name.is_empty() {
            return name.to_owned();
        }
    }

    MODEL_UNKNOWN.to_owned()
}

fn apple_model(env: &impl Environment, cfg: &DeviceConfig, fallback: &str) -> String {
    let name = ios_device_name_with(env, cfg);
    if name.is_empty() {
        fallback.to_owned()
    } else {
        name.to_owned()
    }
}

#[cfg(test)]
mod tests;
