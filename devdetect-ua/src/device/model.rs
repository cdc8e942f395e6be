use ahash::HashMap;
use std::sync::OnceLock;

/// Apple device names by logical `{width}x{height}` screen resolution.
///
/// Several models share a resolution, in which case all of them are listed.
pub(super) const IOS_RESOLUTIONS: &[(&str, &str)] = &[
    ("320x480", "IPhone 4S, 4, 3GS, 3G, 1st gen"),
    ("414x896", "iPhone 11, 11 Pro Max, XR, XS Max"),
    ("375x812", "iPhone 11 Pro, X"),
    ("390x844", "iPhone 12, 12 Pro, 13, 13 Pro, 14"),
    ("360x780", "iPhone 12 mini, 13 mini"),
    ("428x926", "iPhone 12 Pro Max, 13 Pro Max, 14 Plus"),
    ("393x852", "iPhone 14 Pro, 15, 15 Pro, 16"),
    ("430x932", "iPhone 14 Pro Max, 15 Plus, 15 Pro Max, 16 Plus"),
    ("320x568", "iPhone 5, 5c, 5s, SE"),
    ("375x667", "iPhone 6, 6s, 7, 8, SE (2020), SE (2022)"),
    ("414x736", "iPhone 6s Plus, 7 Plus, 8 Plus"),
    ("402x874", "iPhone 16 Pro"),
    ("440x956", "iPhone 16 Pro Max"),
    (
        "820x1180",
        "iPad iPad Air (5th gen), iPad Air (4th gen), iPad (10th gen)",
    ),
    ("834x1112", "iPad iPad Air (3rd gen)"),
    ("744x1133", "iPad iPad Mini (6th gen)"),
    (
        "768x1024",
        "iPad iPad Mini (5th gen), iPad Mini 4, iPad (6th gen), iPad (5th gen), iPad III & IV gen, iPad Air 1 & 2, iPad Mini 2 & 3, iPad Mini",
    ),
    ("810x1080", "iPad iPad (9th gen), iPad (8th gen), iPad (7th gen)"),
    ("1024x1366", "iPad iPad Pro"),
];

fn ios_resolution_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| IOS_RESOLUTIONS.iter().copied().collect())
}

/// Look up the Apple device name(s) for an exact logical screen resolution.
///
/// Returns an empty string for resolutions not in the table.
#[must_use]
pub fn ios_device_name_for_resolution(width: u32, height: u32) -> &'static str {
    let key = format!("{width}x{height}");
    ios_resolution_map()
        .get(key.as_str())
        .copied()
        .unwrap_or_default()
}

/// Extract the Android device code name from a user agent.
///
/// Takes the segment between the first `"; "` after the `Android` marker
/// and the closing `)`, and keeps its first word only, dropping build information.
/// Returns an empty string if there is no `Android` marker or no closing parenthesis.
#[must_use]
pub fn android_device_name(ua: &str) -> &str {
    let Some(rest) = ua.find("Android").and_then(|loc| ua.get(loc..)) else {
        return "";
    };
    let Some(end) = rest.find(')') else {
        return "";
    };
    let start = rest.find("; ").map(|loc| loc + 1).unwrap_or_default();
    rest.get(start..end)
        .map(str::trim)
        .and_then(|segment| segment.split(' ').next())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ios_resolution_table_coverage() {
        for (key, name) in IOS_RESOLUTIONS {
            let (width, height) = key.split_once('x').unwrap();
            let found =
                ios_device_name_for_resolution(width.parse().unwrap(), height.parse().unwrap());
            assert_eq!(found, *name, "test_case: '{key}'");
            assert!(!found.is_empty(), "test_case: '{key}'");
        }
        assert_eq!(ios_resolution_map().len(), IOS_RESOLUTIONS.len());
    }

    #[test]
    fn test_ios_resolution_miss() {
        for (width, height) in [(1, 1), (0, 0), (844, 390), (1920, 1080)] {
            assert_eq!(
                ios_device_name_for_resolution(width, height),
                "",
                "test_case: '{width}x{height}'"
            );
        }
    }

    #[test]
    fn test_android_device_name() {
        for (ua, expected) in [
            (
                "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Mobile Safari/537.36",
                "Pixel",
            ),
            (
                "Mozilla/5.0 (Linux; Android 12; SM-S906N Build/QP1A.190711.020; wv) AppleWebKit/537.36",
                "SM-S906N",
            ),
            (
                "Mozilla/5.0 (Linux; Android 10; K) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36",
                "K",
            ),
            ("Mozilla/5.0 (Android) Gecko", "Android"),
            ("Mozilla/5.0 (Android 14; Mobile; rv:128.0) Gecko/128.0 Firefox/128.0", "Mobile;"),
            ("Mozilla/5.0 (Linux; Android 13; Pixel 7", ""),
            ("Mozilla/5.0 (X11; Linux x86_64)", ""),
            ("", ""),
        ] {
            assert_eq!(android_device_name(ua), expected, "test_case: '{ua}'");
        }
    }
}
