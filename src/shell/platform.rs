//! Host environment detection.

/// Environment variables set by common CI providers.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BITRISE_IO",
];

/// Check if running in a CI environment.
///
/// Used in `main()` to select the non-interactive UI so pipeline logs stay
/// free of terminal styling.
pub fn is_ci() -> bool {
    is_ci_with(|key| std::env::var(key))
}

/// Check for CI with a custom env var lookup function.
pub fn is_ci_with<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    CI_VARS.iter().any(|var| env_fn(var).is_ok())
}
