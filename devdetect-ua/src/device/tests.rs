use super::*;
use devdetect_core::env::{
    EnvironmentSnapshot, HighEntropyValues, UserAgent, UserAgentDataSnapshot,
};
use quickcheck::quickcheck;

const UA_PIXEL_7: &str = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Mobile Safari/537.36";
const UA_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4.1 Mobile/15E148 Safari/604.1";
const UA_IPAD: &str = "Mozilla/5.0 (iPad; CPU OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
const UA_MACINTOSH: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15";
const UA_WINDOWS_CHROME: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
const UA_GALAXY_TAB: &str = "Mozilla/5.0 (Linux; Android 12; SM-X700) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Tablet";
const UA_BLACKBERRY: &str = "BlackBerry9700/5.0.0.351 Profile/MIDP-2.1 Configuration/CLDC-1.1 VendorID/123";

#[test]
fn test_device_type() {
    for (env, expected) in [
        (EnvironmentSnapshot::new(UA_PIXEL_7), DeviceType::Mobile),
        (EnvironmentSnapshot::new(UA_IPHONE), DeviceType::Mobile),
        (EnvironmentSnapshot::new(UA_IPAD), DeviceType::Tablet),
        (EnvironmentSnapshot::new(UA_MACINTOSH), DeviceType::Desktop),
        (
            EnvironmentSnapshot::new(UA_MACINTOSH).with_max_touch_points(5),
            DeviceType::Tablet,
        ),
        (
            EnvironmentSnapshot::new(UA_MACINTOSH)
                .with_max_touch_points(5)
                .with_platform("iPhone"),
            DeviceType::Desktop,
        ),
        (EnvironmentSnapshot::new(UA_WINDOWS_CHROME), DeviceType::Desktop),
        (EnvironmentSnapshot::new(UA_GALAXY_TAB), DeviceType::Tablet),
        (EnvironmentSnapshot::new(UA_BLACKBERRY), DeviceType::Mobile),
        (
            EnvironmentSnapshot::new(UA_WINDOWS_CHROME)
                .with_user_agent_data(UserAgentDataSnapshot::new(true, "Windows")),
            DeviceType::Mobile,
        ),
        (EnvironmentSnapshot::new(""), DeviceType::Desktop),
    ] {
        assert_eq!(device_type(&env), expected, "test_case: '{}'", env.user_agent);
    }
}

#[test]
fn test_device_type_display() {
    for (device_type, expected) in [
        (DeviceType::Tablet, "Tablet"),
        (DeviceType::Mobile, "Mobile"),
        (DeviceType::Desktop, "Desktop"),
    ] {
        assert_eq!(device_type.to_string(), expected);
        assert_eq!(expected.parse::<DeviceType>().unwrap(), device_type);
    }
    assert!("phablet".parse::<DeviceType>().is_err());
}

#[test]
fn test_is_mobile_tokens() {
    let blackberry = UserAgent::new(UA_BLACKBERRY);
    assert!(is_mobile(&blackberry));
    assert!(!is_mobile_with(&blackberry, &DeviceConfig::legacy()));

    for ua in [
        "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80 (S60; SymbOS; Opera Mobi/23.348; U; en) Presto/2.5.25 Version/10.54",
        "Mozilla/5.0 (Linux; U; en-us; uZardWeb/1.0) Safari",
        UA_PIXEL_7,
    ] {
        assert!(is_mobile(&UserAgent::new(ua)), "test_case: '{ua}'");
    }

    let cfg = DeviceConfig::default().with_mobile_tokens(MobileTokens::new(["kaios"]));
    assert!(is_mobile_with(
        &UserAgent::new("Mozilla/5.0 (Mobile; LYF/F300B; KAIOS/2.5)"),
        &cfg
    ));
    assert!(!is_mobile_with(&UserAgent::new(UA_PIXEL_7), &cfg));
}

#[test]
fn test_is_mobile_prefers_structured_flag() {
    let env = EnvironmentSnapshot::new(UA_PIXEL_7)
        .with_user_agent_data(UserAgentDataSnapshot::new(false, "Android"));
    assert!(!is_mobile(&env));
}

#[test]
fn test_apple_detection() {
    for (env, iphone, ipad, mac) in [
        (EnvironmentSnapshot::new(UA_IPHONE), true, false, false),
        (EnvironmentSnapshot::new(UA_IPAD), false, true, false),
        (EnvironmentSnapshot::new(UA_MACINTOSH), false, false, true),
        (
            EnvironmentSnapshot::new(UA_MACINTOSH).with_max_touch_points(2),
            false,
            false,
            true,
        ),
        (
            EnvironmentSnapshot::new(UA_MACINTOSH).with_max_touch_points(5),
            false,
            true,
            false,
        ),
        (EnvironmentSnapshot::new("iPhone iPad"), true, false, false),
        (EnvironmentSnapshot::new(UA_PIXEL_7), false, false, false),
    ] {
        let ua = env.user_agent.clone();
        assert_eq!(is_iphone(&env), iphone, "[iphone] test_case: '{ua}'");
        assert_eq!(is_ipad(&env), ipad, "[ipad] test_case: '{ua}'");
        assert_eq!(is_mac(&env), mac, "[mac] test_case: '{ua}'");
    }
}

#[test]
fn test_is_pointer_device() {
    assert!(is_pointer_device(
        &EnvironmentSnapshot::new(UA_WINDOWS_CHROME).with_pointer(true, false)
    ));
    assert!(!is_pointer_device(
        &EnvironmentSnapshot::new(UA_PIXEL_7).with_pointer(false, true)
    ));
    assert!(!is_pointer_device(&UserAgent::new(UA_WINDOWS_CHROME)));
}

#[test]
fn test_is_sensor_device_tiers() {
    for (env, expected, description) in [
        (
            EnvironmentSnapshot::new(UA_PIXEL_7).with_max_touch_points(0),
            false,
            "touch points win over user agent",
        ),
        (
            EnvironmentSnapshot::new(UA_WINDOWS_CHROME)
                .with_max_touch_points(10)
                .with_ms_max_touch_points(0),
            true,
            "touch points win over legacy touch points",
        ),
        (
            EnvironmentSnapshot::new(UA_WINDOWS_CHROME).with_ms_max_touch_points(1),
            true,
            "legacy touch points",
        ),
        (
            EnvironmentSnapshot::new(UA_PIXEL_7).with_pointer(true, false),
            false,
            "coarse media query wins over orientation and user agent",
        ),
        (
            EnvironmentSnapshot::new(UA_WINDOWS_CHROME).with_orientation(),
            true,
            "orientation support",
        ),
        (
            EnvironmentSnapshot::new(UA_PIXEL_7),
            true,
            "user agent: Mobile and Android words",
        ),
        (
            EnvironmentSnapshot::new("Mozilla/5.0 (Windows Phone 10.0; Android 6.0.1)"),
            true,
            "user agent: Windows Phone",
        ),
        (
            EnvironmentSnapshot::new("Mozilla/5.0 (webOS/1.4.5; U; en-US) AppleWebKit/532.2"),
            true,
            "user agent: webOS",
        ),
        (
            EnvironmentSnapshot::new(UA_WINDOWS_CHROME),
            false,
            "user agent: desktop",
        ),
        (
            EnvironmentSnapshot::new("Mozilla/5.0 (MobileSafari)"),
            false,
            "user agent: no whole word",
        ),
    ] {
        assert_eq!(is_sensor_device(&env), expected, "test_case: '{description}'");
    }
}

#[test]
fn test_ios_device_name() {
    let iphone = EnvironmentSnapshot::new(UA_IPHONE).with_screen(393, 852);
    assert_eq!(ios_device_name(&iphone), "iPhone 14 Pro, 15, 15 Pro, 16");

    let unknown = EnvironmentSnapshot::new(UA_IPHONE).with_screen(1, 1);
    assert_eq!(ios_device_name(&unknown), "");

    let no_screen = EnvironmentSnapshot::new(UA_IPHONE);
    assert_eq!(ios_device_name(&no_screen), "");

    let android = EnvironmentSnapshot::new(UA_PIXEL_7).with_screen(390, 844);
    assert_eq!(ios_device_name(&android), "");
    assert_eq!(
        ios_device_name_with(&android, &DeviceConfig::legacy()),
        "iPhone 12, 12 Pro, 13, 13 Pro, 14"
    );
}

#[tokio::test]
async fn test_device_model() {
    for (env, expected) in [
        (
            EnvironmentSnapshot::new(UA_IPHONE).with_screen(390, 844),
            "iPhone 12, 12 Pro, 13, 13 Pro, 14",
        ),
        (EnvironmentSnapshot::new(UA_IPHONE), "iPhone"),
        (
            EnvironmentSnapshot::new(UA_IPAD).with_screen(1024, 1366),
            "iPad iPad Pro",
        ),
        (EnvironmentSnapshot::new(UA_IPAD).with_screen(1, 1), "iPad"),
        (EnvironmentSnapshot::new(UA_MACINTOSH).with_screen(1440, 900), "Mac"),
        (EnvironmentSnapshot::new(UA_PIXEL_7), "Pixel"),
        (
            EnvironmentSnapshot::new(UA_PIXEL_7).with_user_agent_data(
                UserAgentDataSnapshot::new(true, "Android").with_high_entropy(HighEntropyValues {
                    model: Some("Pixel 7".to_owned()),
                    ..Default::default()
                }),
            ),
            "Pixel 7",
        ),
        (
            EnvironmentSnapshot::new(UA_PIXEL_7).with_user_agent_data(
                UserAgentDataSnapshot::new(true, "Android").with_high_entropy(HighEntropyValues {
                    model: Some(String::new()),
                    ..Default::default()
                }),
            ),
            "Pixel",
        ),
        (
            EnvironmentSnapshot::new(UA_PIXEL_7).with_user_agent_data(
                UserAgentDataSnapshot::new(true, "Android").with_high_entropy_rejected(),
            ),
            "Pixel",
        ),
        (EnvironmentSnapshot::new(UA_WINDOWS_CHROME), "-"),
        (EnvironmentSnapshot::new(UA_BLACKBERRY), "-"),
        (EnvironmentSnapshot::new(""), "-"),
    ] {
        assert_eq!(
            device_model(&env).await,
            expected,
            "test_case: '{}'",
            env.user_agent
        );
    }
}

quickcheck! {
    fn prop_ipad_and_iphone_are_exclusive(ua: String, touch_points: Option<u32>) -> bool {
        let mut env = EnvironmentSnapshot::new(ua);
        env.max_touch_points = touch_points;
        !(is_ipad(&env) && is_iphone(&env))
    }

    fn prop_ipad_and_iphone_are_exclusive_with_markers(prefix: String, suffix: String) -> bool {
        let env = EnvironmentSnapshot::new(format!("{prefix} iPhone Macintosh iPad {suffix}"))
            .with_max_touch_points(5);
        is_iphone(&env) && !is_ipad(&env)
    }

    fn prop_device_type_is_total_and_deterministic(ua: String, mobile: Option<bool>) -> bool {
        let mut env = EnvironmentSnapshot::new(ua);
        if let Some(mobile) = mobile {
            env.user_agent_data = Some(UserAgentDataSnapshot {
                mobile: Some(mobile),
                ..Default::default()
            });
        }
        let first = device_type(&env);
        first == device_type(&env)
            && matches!(first, DeviceType::Tablet | DeviceType::Mobile | DeviceType::Desktop)
    }
}
