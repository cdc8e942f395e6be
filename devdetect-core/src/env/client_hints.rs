use super::{Environment, HighEntropyHint, HighEntropyValues};
use crate::error::BoxError;
use crate::telemetry::tracing;
use http::{
    HeaderMap,
    header::{ACCEPT_LANGUAGE, USER_AGENT},
};

const SEC_CH_UA: &str = "sec-ch-ua";
const SEC_CH_UA_MOBILE: &str = "sec-ch-ua-mobile";
const SEC_CH_UA_PLATFORM: &str = "sec-ch-ua-platform";
const SEC_CH_UA_PLATFORM_VERSION: &str = "sec-ch-ua-platform-version";
const SEC_CH_UA_MODEL: &str = "sec-ch-ua-model";

#[derive(Debug, Clone, Default)]
/// An [`Environment`] backed by the headers of an incoming HTTP request.
///
/// User agent client hints take the role of the structured user agent data:
/// `Sec-CH-UA-Mobile` and `Sec-CH-UA-Platform` are the low entropy values,
/// while `Sec-CH-UA-Platform-Version` and `Sec-CH-UA-Model` serve the
/// high entropy query. The latter is only considered available
/// if the request carries at least one `Sec-CH-UA*` header.
pub struct ClientHintsEnvironment {
    user_agent: String,
    mobile: Option<bool>,
    platform: Option<String>,
    platform_version: Option<String>,
    model: Option<String>,
    languages: Vec<String>,
    has_client_hints: bool,
}

impl ClientHintsEnvironment {
    /// Capture the relevant request headers.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header_str = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());

        let has_client_hints = headers
            .keys()
            .any(|name| name.as_str().starts_with(SEC_CH_UA));

        let env = Self {
            user_agent: headers
                .get(USER_AGENT)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_owned(),
            mobile: header_str(SEC_CH_UA_MOBILE).and_then(parse_sf_boolean),
            platform: header_str(SEC_CH_UA_PLATFORM).map(unquote_sf_string),
            platform_version: header_str(SEC_CH_UA_PLATFORM_VERSION).map(unquote_sf_string),
            model: header_str(SEC_CH_UA_MODEL).map(unquote_sf_string),
            languages: headers
                .get(ACCEPT_LANGUAGE)
                .and_then(|value| value.to_str().ok())
                .map(parse_accept_language)
                .unwrap_or_default(),
            has_client_hints,
        };
        tracing::trace!(
            has_client_hints,
            languages = env.languages.len(),
            "captured client hints environment from request headers"
        );
        env
    }
}

/// Parse a structured field boolean (`?1` / `?0`).
fn parse_sf_boolean(s: &str) -> Option<bool> {
    match s.trim() {
        "?1" => Some(true),
        "?0" => Some(false),
        _ => None,
    }
}

/// Strip the quotes of a structured field string.
fn unquote_sf_string(s: &str) -> String {
    let s = s.trim();
    s.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(s)
        .to_owned()
}

/// Locale tags in header order, quality values stripped.
fn parse_accept_language(s: &str) -> Vec<String> {
    s.split(',')
        .filter_map(|item| {
            let tag = item.split(';').next().unwrap_or_default().trim();
            (!tag.is_empty() && tag != "*").then(|| tag.to_owned())
        })
        .collect()
}

impl Environment for ClientHintsEnvironment {
    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn ua_mobile(&self) -> Option<bool> {
        self.mobile
    }

    fn ua_platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    fn high_entropy_values(
        &self,
        hints: &[HighEntropyHint],
    ) -> impl Future<Output = Result<Option<HighEntropyValues>, BoxError>> + Send {
        let values = self.has_client_hints.then(|| {
            HighEntropyValues {
                model: self.model.clone(),
                platform_version: self.platform_version.clone(),
                ..Default::default()
            }
            .select(hints)
        });
        std::future::ready(Ok(values))
    }

    fn language(&self) -> Option<&str> {
        self.languages.first().map(String::as_str)
    }

    fn languages(&self) -> &[String] {
        &self.languages
    }
}
