use super::utils::{DevdetectCli, PIXEL_7};

const IPAD_SNAPSHOT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/integration/cli_tests/data/ipad_snapshot.json"
);

#[test]
#[ignore]
fn test_report_user_agent() {
    let output = DevdetectCli::run(&["report", "--ua", PIXEL_7]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["deviceType"], "Mobile");
    assert_eq!(value["deviceModel"], "Pixel");
    assert_eq!(value["os"]["kind"], "Android");
    assert_eq!(value["os"]["version"], "13");
}

#[test]
#[ignore]
fn test_report_snapshot() {
    let output = DevdetectCli::run(&["report", "--snapshot", IPAD_SNAPSHOT, "--pretty"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["deviceType"], "Tablet");
    assert_eq!(value["os"]["kind"], "iPad OS");
    assert_eq!(value["os"]["version"], "17.4");
    assert_eq!(
        value["supportedLanguages"],
        serde_json::json!(["English (United States, United Kingdom)", "French"])
    );
    assert_eq!(value["timeZone"], "America/New_York");
}

#[test]
#[ignore]
fn test_report_requires_input() {
    let stderr = DevdetectCli::run_failure(&["report"]).unwrap();
    assert!(stderr.contains("either --ua or --snapshot is required"));
}
