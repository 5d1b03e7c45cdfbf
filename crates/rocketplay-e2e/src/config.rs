// Environment configuration.
//
// Built once at process start from environment variables; never mutated
// afterwards. Browser emulation settings (Canadian locale, Toronto timezone
// and geolocation) come from the target site's market: registration must
// auto-detect Canada/CAD.

use std::time::Duration;

use crate::error::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://rocketplay.com";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_NAVIGATION_TIMEOUT_MS: u64 = 60_000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Browser locale used for every context
pub const LOCALE: &str = "en-CA";
/// Timezone identifier used for every context
pub const TIMEZONE_ID: &str = "America/Toronto";
/// Toronto coordinates for geolocation emulation
pub const GEOLOCATION: (f64, f64) = (43.6532, -79.3832);

/// Suite configuration assembled from environment variables
#[derive(Debug, Clone)]
pub struct Environment {
    /// Root URL of the application under test (`BASE_URL`)
    pub base_url: String,
    /// Per-operation wait bound (`DEFAULT_TIMEOUT`, milliseconds)
    pub default_timeout: Duration,
    /// Navigation wait bound (`NAVIGATION_TIMEOUT`, milliseconds)
    pub navigation_timeout: Duration,
    /// Log verbosity (`LOG_LEVEL`)
    pub log_level: String,
    /// Run the browser headless (`CI_HEADLESS`)
    pub ci_headless: bool,
    /// Worker count hint for the external runner (`CI_WORKERS`)
    pub ci_workers: usize,
}

impl Environment {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through a lookup function.
    ///
    /// Factored out so parsing is testable without mutating the real process
    /// environment, which is racy under the multithreaded test runner.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            base_url: lookup("BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            default_timeout: Duration::from_millis(parse_ms(
                "DEFAULT_TIMEOUT",
                lookup("DEFAULT_TIMEOUT"),
                DEFAULT_TIMEOUT_MS,
            )?),
            navigation_timeout: Duration::from_millis(parse_ms(
                "NAVIGATION_TIMEOUT",
                lookup("NAVIGATION_TIMEOUT"),
                DEFAULT_NAVIGATION_TIMEOUT_MS,
            )?),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            ci_headless: lookup("CI_HEADLESS").as_deref() == Some("true"),
            ci_workers: match lookup("CI_WORKERS") {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| Error::Config(format!("CI_WORKERS is not a number: '{raw}'")))?,
                None => 1,
            },
        })
    }
}

fn parse_ms(key: &str, raw: Option<String>, default: u64) -> Result<u64> {
    match raw {
        Some(raw) => raw
            .parse()
            .map_err(|_| Error::Config(format!("{key} is not a millisecond count: '{raw}'"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_with(vars: &[(&str, &str)]) -> Result<Environment> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let env = env_with(&[]).unwrap();
        assert_eq!(env.base_url, "https://rocketplay.com");
        assert_eq!(env.default_timeout, Duration::from_secs(30));
        assert_eq!(env.navigation_timeout, Duration::from_secs(60));
        assert_eq!(env.log_level, "info");
        assert!(!env.ci_headless);
        assert_eq!(env.ci_workers, 1);
    }

    #[test]
    fn reads_overrides() {
        let env = env_with(&[
            ("BASE_URL", "http://127.0.0.1:8080"),
            ("DEFAULT_TIMEOUT", "5000"),
            ("NAVIGATION_TIMEOUT", "15000"),
            ("LOG_LEVEL", "debug"),
            ("CI_HEADLESS", "true"),
            ("CI_WORKERS", "4"),
        ])
        .unwrap();
        assert_eq!(env.base_url, "http://127.0.0.1:8080");
        assert_eq!(env.default_timeout, Duration::from_millis(5000));
        assert_eq!(env.navigation_timeout, Duration::from_millis(15000));
        assert_eq!(env.log_level, "debug");
        assert!(env.ci_headless);
        assert_eq!(env.ci_workers, 4);
    }

    #[test]
    fn headless_requires_exactly_true() {
        let env = env_with(&[("CI_HEADLESS", "1")]).unwrap();
        assert!(!env.ci_headless);
    }

    #[test]
    fn malformed_timeout_is_a_config_error() {
        let err = env_with(&[("DEFAULT_TIMEOUT", "30s")]).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("DEFAULT_TIMEOUT")));
    }

    #[test]
    fn malformed_workers_is_a_config_error() {
        let err = env_with(&[("CI_WORKERS", "many")]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
