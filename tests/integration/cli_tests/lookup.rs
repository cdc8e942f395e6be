use super::utils::DevdetectCli;

#[test]
#[ignore]
fn test_country() {
    let output = DevdetectCli::run(&["country", "be"]).unwrap();
    assert_eq!(output.trim(), "Belgium");

    let output = DevdetectCli::run(&["country", "XX"]).unwrap();
    assert_eq!(output.trim(), "XX");
}

#[test]
#[ignore]
fn test_country_invalid_code() {
    let stderr = DevdetectCli::run_failure(&["country", "USA"]).unwrap();
    assert!(stderr.contains("invalid country code 'USA'"));
}

#[test]
#[ignore]
fn test_language() {
    let output = DevdetectCli::run(&["language", "NL"]).unwrap();
    assert_eq!(output.trim(), "Dutch");
}
