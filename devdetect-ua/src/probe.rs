//! Privacy and embedding probes.

use crate::device::is_apple_family;
use devdetect_core::{env::Environment, telemetry::tracing};
use devdetect_utils::str::submatch_ignore_ascii_case;

/// True if the page is rendered inside an embedded webview rather than a browser.
///
/// Apple webviews drop the `Safari` token, Android webviews add a `wv` token.
pub fn is_webview(env: &impl Environment) -> bool {
    let ua = env.user_agent();
    if is_apple_family(ua) {
        !submatch_ignore_ascii_case(ua, "safari")
    } else {
        submatch_ignore_ascii_case(ua, "wv")
    }
}

/// Verdict of the private browsing probe of the environment.
///
/// A failing or unavailable probe is reported as not private.
pub async fn is_incognito_mode(env: &impl Environment) -> bool {
    match env.private_mode().await {
        Ok(private) => private,
        Err(err) => {
            tracing::warn!("private mode probe failed: {err}");
            false
        }
    }
}
