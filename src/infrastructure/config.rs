use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// Telemetry endpoint queried as `<endpoint>?range=<token>`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

fn default_endpoint() -> String {
    "http://localhost:8080/data".to_string()
}

fn default_poll_interval_secs() -> u64 {
    300 // 5 minutes
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("solar-dashboard.log")
}

impl DashboardConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Load `config/dashboard.*` (or `path` when given), then `SOLAR_*` environment overrides.
pub fn load_dashboard_config(path: Option<&Path>) -> anyhow::Result<DashboardConfig> {
    build_config(path, config::Environment::with_prefix("SOLAR"))
}

fn build_config(
    path: Option<&Path>,
    environment: config::Environment,
) -> anyhow::Result<DashboardConfig> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("config/dashboard").required(false),
    };

    let settings = config::Config::builder()
        .add_source(file)
        .add_source(environment.try_parsing(true))
        .build()
        .context("Failed to load dashboard configuration")?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("SOLAR").source(Some(map))
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = build_config(None, env(&[])).unwrap();

        assert_eq!(config.endpoint, "http://localhost:8080/data");
        assert_eq!(config.poll_interval(), Duration::from_secs(300));
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_file_then_environment_override() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "endpoint = \"https://example.com/dev/data\"\npoll_interval_secs = 60"
        )
        .unwrap();

        let config = build_config(
            Some(file.path()),
            env(&[("SOLAR_POLL_INTERVAL_SECS", "30")]),
        )
        .unwrap();

        assert_eq!(config.endpoint, "https://example.com/dev/data");
        assert_eq!(config.poll_interval_secs, 30);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(build_config(Some(&missing), env(&[])).is_err());
    }

    #[test]
    fn test_zero_poll_interval_is_clamped() {
        let config = build_config(None, env(&[("SOLAR_POLL_INTERVAL_SECS", "0")])).unwrap();
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
    }
}
