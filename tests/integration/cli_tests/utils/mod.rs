use std::process::Output;

#[derive(Debug)]
/// A wrapper around a devdetect cli process.
pub(super) struct DevdetectCli;

impl DevdetectCli {
    fn output(args: &[&str]) -> Result<Output, Box<dyn std::error::Error>> {
        let output = escargot::CargoBuild::new()
            .package("devdetect-cli")
            .bin("devdetect")
            .target_dir("./target/")
            .run()?
            .command()
            .args(args)
            .env(
                "RUST_LOG",
                std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
            )
            .output()?;
        Ok(output)
    }

    /// Run the cli and return its stdout, asserting that it succeeded.
    pub(super) fn run(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
        let output = Self::output(args)?;
        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        Ok(String::from_utf8(output.stdout)?)
    }

    /// Run the cli and return its stderr, asserting that it failed.
    pub(super) fn run_failure(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
        let output = Self::output(args)?;
        assert!(!output.status.success());
        Ok(String::from_utf8(output.stderr)?)
    }
}

pub(super) const PIXEL_7: &str = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Mobile Safari/537.36";
