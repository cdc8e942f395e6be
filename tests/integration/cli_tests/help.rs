use super::utils::DevdetectCli;

#[test]
#[ignore]
fn test_help() {
    let lines = DevdetectCli::run(&["help"]).unwrap();
    assert!(lines.contains("devdetect cli to classify user agents and client environments"));
    assert!(lines.contains("Usage:"));
    assert!(lines.contains("Commands:"));
    assert!(lines.contains("Options:"));
}

#[test]
#[ignore]
fn test_help_report() {
    let lines = DevdetectCli::run(&["help", "report"]).unwrap();
    assert!(lines.contains("collect a full report"));
    assert!(lines.contains("--snapshot"));
    assert!(lines.contains("--config"));
}
