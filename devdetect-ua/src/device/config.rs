use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Tunables of the device classifier.
pub struct DeviceConfig {
    /// Tokens that mark a user agent as mobile when the client
    /// does not expose a structured mobile flag.
    #[serde(default)]
    pub mobile_tokens: MobileTokens,
    /// Only consult the screen resolution table for Apple family user agents.
    ///
    /// Without this gate a non Apple device that happens to share
    /// a resolution with an iPhone is reported as that iPhone.
    #[serde(default = "default_gate_resolution_lookup")]
    pub gate_resolution_lookup: bool,
}

const fn default_gate_resolution_lookup() -> bool {
    true
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            mobile_tokens: MobileTokens::default(),
            gate_resolution_lookup: default_gate_resolution_lookup(),
        }
    }
}

impl DeviceConfig {
    /// The classifier as it behaved before BlackBerry detection
    /// and resolution lookup gating were introduced.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            mobile_tokens: MobileTokens::legacy(),
            gate_resolution_lookup: false,
        }
    }

    #[must_use]
    pub fn with_mobile_tokens(mut self, tokens: MobileTokens) -> Self {
        self.mobile_tokens = tokens;
        self
    }

    #[must_use]
    pub fn with_gate_resolution_lookup(mut self, gate: bool) -> Self {
        self.gate_resolution_lookup = gate;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// ASCII case insensitive substrings that mark a user agent as mobile.
pub struct MobileTokens(Vec<String>);

const LEGACY_MOBILE_TOKENS: &[&str] = &["mobi", "tablet", "uzard", "opera mini"];

impl MobileTokens {
    /// Create a token list from the given substrings.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    /// The token list without `blackberry`.
    #[must_use]
    pub fn legacy() -> Self {
        Self::new(LEGACY_MOBILE_TOKENS.iter().copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for MobileTokens {
    fn default() -> Self {
        Self::new(
            LEGACY_MOBILE_TOKENS
                .iter()
                .copied()
                .chain(std::iter::once("blackberry")),
        )
    }
}
