//! Shared test utilities for `classics-core`.

use classics_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a proptest configuration from the shared CI profile.
///
/// Every property suite in the crate reads `PROPTEST_CASES` and
/// `CLASSICS_PBT_FORK` the same way through this helper.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
