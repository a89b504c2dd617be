//! Shared proptest configuration for engine property tests.

use proptest::test_runner::Config;

/// Default configuration for engine property tests.
///
/// Case count can be overridden with `PROPTEST_CASES`; proptest reads the
/// environment variable on top of whatever config we hand it.
pub fn proptest_config() -> Config {
    Config {
        cases: 256,
        ..Config::default()
    }
}
