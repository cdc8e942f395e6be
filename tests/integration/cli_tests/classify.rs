use super::utils::{DevdetectCli, PIXEL_7};

#[test]
#[ignore]
fn test_browser() {
    let output = DevdetectCli::run(&["browser", PIXEL_7]).unwrap();
    assert_eq!(output.trim(), "Chrome 118.0.0.0");
}

#[test]
#[ignore]
fn test_browser_json() {
    let output = DevdetectCli::run(&["browser", "--json", PIXEL_7]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["kind"], "Chrome");
    assert_eq!(value["version"], "118.0.0.0");
}

#[test]
#[ignore]
fn test_os() {
    let output = DevdetectCli::run(&["os", PIXEL_7]).unwrap();
    assert_eq!(output.trim(), "Android 13");

    let output = DevdetectCli::run(&["os", "curl/8.4.0"]).unwrap();
    assert_eq!(output.trim(), "Unknown");
}
