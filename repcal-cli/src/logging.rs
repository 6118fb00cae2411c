use repcal_core::config::RepcalConfig;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "REPCAL_LOG";
const FALLBACK_LEVEL: &str = "warn";

/// Install the stderr subscriber. `REPCAL_LOG` wins over the config's `log_level`.
pub fn init(config: &RepcalConfig) {
    let env_value = std::env::var(LOG_ENV).ok();
    let (filter, rejected) = build_filter(env_value.as_deref(), &config.log_level);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    for (source, value) in rejected {
        tracing::warn!(source, value = %value, "Invalid log filter, ignoring it");
    }
}

/// Pick the first filter that parses. Returns the sources that were set but invalid.
fn build_filter(
    env_value: Option<&str>,
    config_level: &str,
) -> (EnvFilter, Vec<(&'static str, String)>) {
    let mut rejected = Vec::new();

    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        match EnvFilter::try_new(value) {
            Ok(filter) => return (filter, rejected),
            Err(_) => rejected.push((LOG_ENV, value.to_string())),
        }
    }

    match EnvFilter::try_new(config_level) {
        Ok(filter) => (filter, rejected),
        Err(_) => {
            rejected.push(("log_level", config_level.to_string()));
            (EnvFilter::new(FALLBACK_LEVEL), rejected)
        }
    }
}
