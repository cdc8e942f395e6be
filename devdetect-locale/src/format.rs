//! Locale tag formatting on top of the ISO tables.

use crate::{country::country_display_name, language::language_name};
use devdetect_core::env::Environment;
use itertools::Itertools;

/// Separators accepted between the subtags of a locale tag (`en-US`, `en_US`).
const SUBTAG_SEPARATORS: [char; 2] = ['-', '_'];

/// Formats the locale tags reported by the environment as display names,
/// grouped per language.
///
/// Region variants of the same language are merged into a single entry,
/// e.g. `["en-US", "en-GB", "fr"]` becomes
/// `["English (United States, United Kingdom)", "French"]`.
/// Entries keep the order in which each language was first seen.
/// Languages without a known region are emitted as the bare name.
pub fn format_supported_languages(env: &impl Environment) -> Vec<String> {
    format_locale_tags(env.languages())
}

/// Formats a list of locale tags, see [`format_supported_languages`].
pub fn format_locale_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let mut groups: Vec<(&str, Vec<&'static str>)> = Vec::new();

    for tag in tags {
        let mut subtags = tag.as_ref().trim().split(SUBTAG_SEPARATORS);
        let Some(primary) = subtags.next().filter(|s| !s.is_empty()) else {
            continue;
        };
        let name = language_name(primary);
        let regions = subtags.filter_map(country_display_name);

        match groups.iter().position(|(n, _)| n.eq_ignore_ascii_case(name)) {
            Some(index) => groups[index].1.extend(regions),
            None => groups.push((name, regions.collect())),
        }
    }

    groups
        .into_iter()
        .map(|(name, regions)| {
            if regions.is_empty() {
                name.to_owned()
            } else {
                format!("{name} ({})", regions.into_iter().unique().join(", "))
            }
        })
        .collect()
}

/// The raw locale tags reported by the environment, lower-cased.
///
/// No name resolution or grouping happens here,
/// use [`format_supported_languages`] for display purposes.
pub fn languages(env: &impl Environment) -> Vec<String> {
    env.languages()
        .iter()
        .map(|tag| tag.to_ascii_lowercase())
        .collect()
}

/// Display name of the current locale tag, or `"-"` if the environment has none.
///
/// The full tag is looked up as is, so only bare language codes (`"fr"`)
/// resolve to a name; a tag with a region (`"en-US"`) is returned unchanged.
pub fn browser_language(env: &impl Environment) -> String {
    match env.language() {
        Some(tag) if !tag.is_empty() => language_name(tag).to_owned(),
        _ => "-".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devdetect_core::env::{EnvironmentSnapshot, UserAgent};

    fn env_with_languages(tags: &[&str]) -> EnvironmentSnapshot {
        EnvironmentSnapshot::new("test").with_languages(tags.iter().map(|t| (*t).to_owned()))
    }

    #[test]
    fn test_format_supported_languages() {
        for (tags, expected) in [
            (
                vec!["en-US", "en-GB", "fr"],
                vec!["English (United States, United Kingdom)", "French"],
            ),
            (vec!["fr", "en-US", "fr-BE"], vec!["French (Belgium)", "English (United States)"]),
            (vec!["en-US", "en-us", "en"], vec!["English (United States)"]),
            (vec!["nl_BE", "nl-NL"], vec!["Dutch (Belgium, Netherlands)"]),
            (vec!["zh-Hant-TW"], vec!["Chinese (Taiwan)"]),
            (vec!["es-419"], vec!["Spanish"]),
            (vec!["xx-US", "de-XX"], vec!["xx (United States)", "German"]),
            (vec!["", "-US"], vec![]),
            (vec![], vec![]),
        ] {
            assert_eq!(
                format_supported_languages(&env_with_languages(&tags)),
                expected,
                "test_case: '{tags:?}'"
            );
        }
    }

    #[test]
    fn test_languages_raw_contract() {
        let env = env_with_languages(&["en-US", "NL-be", "fr"]);
        assert_eq!(languages(&env), ["en-us", "nl-be", "fr"]);
        assert!(languages(&UserAgent::new("test")).is_empty());
    }

    #[test]
    fn test_browser_language() {
        for (language, expected) in [
            (Some("fr"), "French"),
            (Some("EN"), "English"),
            (Some("en-US"), "en-US"),
            (Some(""), "-"),
            (None, "-"),
        ] {
            let mut env = EnvironmentSnapshot::new("test");
            if let Some(language) = language {
                env = env.with_language(language);
            }
            assert_eq!(browser_language(&env), expected, "test_case: '{language:?}'");
        }
    }
}
