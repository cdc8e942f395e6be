//! Aggregate report of everything devdetect can tell about an environment.

use crate::{
    env::Environment,
    locale::{browser_language, current_time_zone, format_supported_languages},
    telemetry::tracing,
    ua::{
        browser::{BrowserInfo, classify_browser},
        device::{
            DeviceConfig, DeviceType, device_model_with, device_type_with, is_mobile_with,
            is_pointer_device, is_sensor_device,
        },
        os::{OsInfo, classify_os},
        probe::{is_incognito_mode, is_webview},
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Outcome of all classifiers and lookups for a single [`Environment`].
pub struct ClientReport {
    /// The user agent the report was made for.
    pub user_agent: String,
    /// Browser classification, see [`classify_browser`].
    pub browser: BrowserInfo,
    /// Operating system classification, see [`classify_os`].
    pub os: OsInfo,
    /// Tablet, mobile or desktop.
    pub device_type: DeviceType,
    /// Model name of the device, `"-"` if unknown.
    pub device_model: String,
    pub is_mobile: bool,
    pub is_pointer_device: bool,
    pub is_sensor_device: bool,
    pub is_webview: bool,
    pub is_incognito: bool,
    /// Display name of the current locale, `"-"` if unknown.
    pub browser_language: String,
    /// All reported locales, grouped per language.
    pub supported_languages: Vec<String>,
    /// IANA time zone name, `"-"` if unknown.
    pub time_zone: String,
}

impl ClientReport {
    /// Run all classifiers and lookups against the given environment.
    ///
    /// The asynchronous capability queries (high entropy values, private mode)
    /// are awaited one after the other. A failing capability never fails
    /// the report, it only makes the affected field fall back to its default.
    pub async fn collect(env: &impl Environment, cfg: &DeviceConfig) -> Self {
        let device_type = device_type_with(env, cfg);
        let os = classify_os(env).await;
        let device_model = device_model_with(env, cfg).await;
        let is_incognito = is_incognito_mode(env).await;

        let report = Self {
            user_agent: env.user_agent().to_owned(),
            browser: classify_browser(env),
            os,
            device_type,
            device_model,
            is_mobile: is_mobile_with(env, cfg),
            is_pointer_device: is_pointer_device(env),
            is_sensor_device: is_sensor_device(env),
            is_webview: is_webview(env),
            is_incognito,
            browser_language: browser_language(env),
            supported_languages: format_supported_languages(env),
            time_zone: current_time_zone(env),
        };

        tracing::debug!(
            browser = %report.browser,
            os = %report.os,
            device_type = %report.device_type,
            "collected client report",
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        env::{EnvironmentSnapshot, HighEntropyValues, UserAgent, UserAgentDataSnapshot},
        ua::{browser::BrowserKind, os::OsKind},
    };

    const PIXEL_7: &str = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Mobile Safari/537.36";

    #[tokio::test]
    async fn test_report_bare_user_agent() {
        let report = ClientReport::collect(&UserAgent::new(PIXEL_7), &DeviceConfig::default()).await;

        assert_eq!(report.user_agent, PIXEL_7);
        assert_eq!(report.browser.to_string(), "Chrome 118.0.0.0");
        assert_eq!(report.os.to_string(), "Android 13");
        assert_eq!(report.device_type, DeviceType::Mobile);
        assert_eq!(report.device_model, "Pixel");
        assert!(report.is_mobile);
        assert!(!report.is_pointer_device);
        assert!(!report.is_webview);
        assert!(!report.is_incognito);
        assert_eq!(report.browser_language, "-");
        assert!(report.supported_languages.is_empty());
        assert_eq!(report.time_zone, "-");
    }

    #[tokio::test]
    async fn test_report_snapshot() {
        let env = EnvironmentSnapshot::new(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36 Edg/118.0.2088.46",
        )
        .with_pointer(true, false)
        .with_user_agent_data(
            UserAgentDataSnapshot::new(false, "Windows").with_high_entropy(HighEntropyValues {
                platform_version: Some("15.0.0".to_owned()),
                ..Default::default()
            }),
        )
        .with_private_mode(true)
        .with_language("nl")
        .with_languages(["nl-BE", "en-US", "nl-NL"])
        .with_time_zone("Europe/Brussels");

        let report = ClientReport::collect(&env, &DeviceConfig::default()).await;

        assert_eq!(report.browser.kind, BrowserKind::Edge);
        assert_eq!(report.browser.to_string(), "Edge 118.0.2088.46");
        assert_eq!(report.os.kind, OsKind::Windows11);
        assert_eq!(report.device_type, DeviceType::Desktop);
        assert!(!report.is_mobile);
        assert!(report.is_pointer_device);
        assert!(report.is_incognito);
        assert_eq!(report.browser_language, "Dutch");
        assert_eq!(
            report.supported_languages,
            ["Dutch (Belgium, Netherlands)", "English (United States)"]
        );
        assert_eq!(report.time_zone, "Europe/Brussels");
    }

    #[tokio::test]
    async fn test_report_full_model_name_from_high_entropy() {
        let env = EnvironmentSnapshot::new(PIXEL_7).with_user_agent_data(
            UserAgentDataSnapshot::new(true, "Android").with_high_entropy(HighEntropyValues {
                model: Some("Pixel 7".to_owned()),
                ..Default::default()
            }),
        );

        let report = ClientReport::collect(&env, &DeviceConfig::default()).await;
        assert_eq!(report.device_model, "Pixel 7");

        let bare = ClientReport::collect(&UserAgent::new(PIXEL_7), &DeviceConfig::default()).await;
        assert_eq!(bare.device_model, "Pixel");
    }

    #[tokio::test]
    async fn test_report_serialize() {
        let report = ClientReport::collect(&UserAgent::new(PIXEL_7), &DeviceConfig::default()).await;
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["deviceType"], "Mobile");
        assert_eq!(value["deviceModel"], "Pixel");
        assert_eq!(value["isMobile"], true);
        assert_eq!(value["timeZone"], "-");

        let back: ClientReport = serde_json::from_value(value).unwrap();
        assert_eq!(back, report);
    }
}
