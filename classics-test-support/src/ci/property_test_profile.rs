//! Property-test run profile read from the environment.
//!
//! Suites call [`ProptestRunProfile::load`] with their own defaults; CI then
//! scales every suite at once through two variables.

use std::env;

/// Overrides the number of cases each property runs.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Runs each property case in a forked subprocess when truthy.
pub const CLASSICS_PBT_FORK_ENV_KEY: &str = "CLASSICS_PBT_FORK";

/// Case count and fork mode for a property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the overrides, falling back to the given defaults for unset or
    /// malformed values. Malformed values are reported with a warning.
    ///
    /// # Examples
    /// ```
    /// use classics_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(128, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROPTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(CLASSICS_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }

    #[must_use]
    #[rustfmt::skip]
    pub fn fork(&self) -> bool { self.fork }
}

fn override_or<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, &'static str>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(env = key, raw = %raw, reason, "ignoring property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, &'static str> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("case count must be positive"),
        Ok(cases) => Ok(cases),
        Err(_) => Err("case count must be an unsigned integer"),
    }
}

fn parse_flag(raw: &str) -> Result<bool, &'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected a boolean such as true, false, 1 or 0"),
    }
}
