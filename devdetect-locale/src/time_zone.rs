use devdetect_core::{env::Environment, telemetry::tracing};

/// The IANA time zone name resolved by the environment, or `"-"` if it cannot be resolved.
pub fn current_time_zone(env: &impl Environment) -> String {
    match env.time_zone() {
        Ok(tz) if !tz.is_empty() => tz.to_owned(),
        Ok(_) => "-".to_owned(),
        Err(err) => {
            tracing::debug!("time zone resolution failed: {err}");
            "-".to_owned()
        }
    }
}
