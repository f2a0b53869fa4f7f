//! Property-test run profile read from the environment.
//!
//! Suites call [`suite_proptest_config`] so that CI and local runs tune case
//! counts and forking through the same two variables.

use std::env;

use proptest::test_runner::Config;

/// Environment variable overriding the number of cases per property.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable enabling forked proptest execution.
pub const GRAPHGEN_PBT_FORK_ENV_KEY: &str = "GRAPHGEN_PBT_FORK";

/// Case count and fork policy for a property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the overrides, falling back to the defaults when a variable is
    /// unset or malformed. Malformed values are reported with `warn!`.
    ///
    /// # Examples
    /// ```
    /// use graphgen_test_support::profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROGTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(GRAPHGEN_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Cases to run per property.
    #[must_use]
    pub const fn cases(self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub const fn fork(self) -> bool {
        self.fork
    }

    /// Proptest configuration carrying this profile.
    #[must_use]
    pub fn config(self) -> Config {
        Config {
            cases: self.cases,
            fork: self.fork,
            ..Config::default()
        }
    }
}

/// Standard proptest configuration for a suite whose default case count is
/// `default_cases`.
#[must_use]
pub fn suite_proptest_config(default_cases: u32) -> Config {
    ProptestRunProfile::load(default_cases, false).config()
}

fn override_or<T: Copy>(key: &'static str, default: T, parse: fn(&str) -> Result<T, String>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "ignoring malformed property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("case count must be positive".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("not a case count: {error}")),
    }
}

fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("not a boolean flag: {other:?}")),
    }
}
