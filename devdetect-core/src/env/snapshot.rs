use super::{
    CapabilityUnavailable, Environment, HighEntropyHint, HighEntropyValues, PointerQuery,
    ScreenSize,
};
use crate::error::{BoxError, OpaqueError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// A captured copy of the environment facts a client exposes.
///
/// Typically collected client side (navigator, screen, media queries)
/// and posted as JSON to a service, or built by hand in tests
/// using the `with_*` builder methods.
///
/// Absent fields mean the capability is unavailable.
pub struct EnvironmentSnapshot {
    /// The raw user agent string.
    #[serde(alias = "userAgent")]
    pub user_agent: String,
    /// The navigator platform string.
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default, alias = "maxTouchPoints")]
    pub max_touch_points: Option<u32>,
    #[serde(default, alias = "msMaxTouchPoints")]
    pub ms_max_touch_points: Option<u32>,
    /// Result of the `(pointer:fine)` media query, absent if media queries are unsupported.
    #[serde(default, alias = "pointerFine")]
    pub pointer_fine: Option<bool>,
    /// Result of the `(pointer:coarse)` media query, absent if media queries are unsupported.
    #[serde(default, alias = "pointerCoarse")]
    pub pointer_coarse: Option<bool>,
    /// Whether the window orientation property exists.
    #[serde(default, alias = "hasOrientation")]
    pub has_orientation: bool,
    #[serde(default)]
    pub standalone: Option<bool>,
    /// Whether the Telegram webview marker is present.
    #[serde(default, alias = "telegramWebview")]
    pub telegram_webview: bool,
    /// Structured user agent data, if the client supports it.
    #[serde(default, alias = "userAgentData")]
    pub user_agent_data: Option<UserAgentDataSnapshot>,
    /// Verdict of the private browsing probe, if it ran.
    #[serde(default, alias = "privateMode")]
    pub private_mode: Option<bool>,
    #[serde(default)]
    pub screen: Option<ScreenSize>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    /// The resolved IANA time zone.
    #[serde(default, alias = "timeZone")]
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// Structured user agent data (client hints) as captured from the client.
pub struct UserAgentDataSnapshot {
    #[serde(default)]
    pub mobile: Option<bool>,
    #[serde(default)]
    pub platform: Option<String>,
    /// Values resolved by the high entropy query,
    /// absent if the query is not available.
    #[serde(default, alias = "highEntropy")]
    pub high_entropy: Option<HighEntropyValues>,
    /// Set if the high entropy query was rejected by the privacy gate.
    #[serde(default, alias = "highEntropyRejected")]
    pub high_entropy_rejected: bool,
}

impl EnvironmentSnapshot {
    /// Create a new snapshot containing only a user agent.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    #[must_use]
    pub fn with_max_touch_points(mut self, n: u32) -> Self {
        self.max_touch_points = Some(n);
        self
    }

    #[must_use]
    pub fn with_ms_max_touch_points(mut self, n: u32) -> Self {
        self.ms_max_touch_points = Some(n);
        self
    }

    /// Set the outcome of both pointer media queries.
    #[must_use]
    pub fn with_pointer(mut self, fine: bool, coarse: bool) -> Self {
        self.pointer_fine = Some(fine);
        self.pointer_coarse = Some(coarse);
        self
    }

    #[must_use]
    pub fn with_orientation(mut self) -> Self {
        self.has_orientation = true;
        self
    }

    #[must_use]
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = Some(standalone);
        self
    }

    #[must_use]
    pub fn with_telegram_webview(mut self) -> Self {
        self.telegram_webview = true;
        self
    }

    #[must_use]
    pub fn with_user_agent_data(mut self, data: UserAgentDataSnapshot) -> Self {
        self.user_agent_data = Some(data);
        self
    }

    #[must_use]
    pub fn with_private_mode(mut self, private: bool) -> Self {
        self.private_mode = Some(private);
        self
    }

    #[must_use]
    pub fn with_screen(mut self, width: u32, height: u32) -> Self {
        self.screen = Some(ScreenSize::new(width, height));
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_time_zone(mut self, tz: impl Into<String>) -> Self {
        self.time_zone = Some(tz.into());
        self
    }

    fn resolve_high_entropy(
        &self,
        hints: &[HighEntropyHint],
    ) -> Result<Option<HighEntropyValues>, BoxError> {
        let Some(data) = self.user_agent_data.as_ref() else {
            return Ok(None);
        };
        if data.high_entropy_rejected {
            return Err(OpaqueError::from_display("high entropy values query rejected").into());
        }
        Ok(data.high_entropy.as_ref().map(|values| values.select(hints)))
    }
}

impl UserAgentDataSnapshot {
    #[must_use]
    pub fn new(mobile: bool, platform: impl Into<String>) -> Self {
        Self {
            mobile: Some(mobile),
            platform: Some(platform.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_high_entropy(mut self, values: HighEntropyValues) -> Self {
        self.high_entropy = Some(values);
        self
    }

    #[must_use]
    pub fn with_high_entropy_rejected(mut self) -> Self {
        self.high_entropy_rejected = true;
        self
    }
}

impl Environment for EnvironmentSnapshot {
    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    fn max_touch_points(&self) -> Option<u32> {
        self.max_touch_points
    }

    fn ms_max_touch_points(&self) -> Option<u32> {
        self.ms_max_touch_points
    }

    fn match_media(&self, query: PointerQuery) -> Result<bool, BoxError> {
        let outcome = match query {
            PointerQuery::Fine => self.pointer_fine,
            PointerQuery::Coarse => self.pointer_coarse,
        };
        outcome.ok_or_else(|| CapabilityUnavailable::new().into())
    }

    fn has_orientation(&self) -> bool {
        self.has_orientation
    }

    fn standalone(&self) -> Option<bool> {
        self.standalone
    }

    fn has_telegram_webview(&self) -> bool {
        self.telegram_webview
    }

    fn ua_mobile(&self) -> Option<bool> {
        self.user_agent_data.as_ref().and_then(|data| data.mobile)
    }

    fn ua_platform(&self) -> Option<&str> {
        self.user_agent_data
            .as_ref()
            .and_then(|data| data.platform.as_deref())
    }

    fn high_entropy_values(
        &self,
        hints: &[HighEntropyHint],
    ) -> impl Future<Output = Result<Option<HighEntropyValues>, BoxError>> + Send {
        std::future::ready(self.resolve_high_entropy(hints))
    }

    fn private_mode(&self) -> impl Future<Output = Result<bool, BoxError>> + Send {
        let verdict: Result<bool, BoxError> = self
            .private_mode
            .ok_or_else(|| CapabilityUnavailable::new().into());
        std::future::ready(verdict)
    }

    fn screen(&self) -> Option<ScreenSize> {
        self.screen
    }

    fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    fn languages(&self) -> &[String] {
        &self.languages
    }

    fn time_zone(&self) -> Result<&str, BoxError> {
        self.time_zone
            .as_deref()
            .ok_or_else(|| CapabilityUnavailable::new().into())
    }
}
