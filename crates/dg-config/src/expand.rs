//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand environment variable references in a configuration value.
///
/// Supports:
/// - `${VAR}` - expands to the value of VAR, errors if unset
/// - `${VAR:-default}` - expands to VAR if set, otherwise uses default
///
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces), so
/// literal path values pass through untouched.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    // Fast path: no expansion needed
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DG_TEST_VAR_SIMPLE", "docs");
        }
        let result = expand_env("${DG_TEST_VAR_SIMPLE}", "build.output_dir").unwrap();
        assert_eq!(result, "docs");
        unsafe {
            std::env::remove_var("DG_TEST_VAR_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DG_TEST_UNSET_VAR");
        }
        let result = expand_env("${DG_TEST_UNSET_VAR:-build}", "build.output_dir").unwrap();
        assert_eq!(result, "build");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DG_TEST_MISSING_VAR");
        }
        let err = expand_env("${DG_TEST_MISSING_VAR}", "build.output_dir").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("DG_TEST_MISSING_VAR"));
        assert!(err.to_string().contains("build.output_dir"));
    }

    #[test]
    fn test_expand_literal_unchanged() {
        let result = expand_env("plain/relative/path", "build.output_dir").unwrap();
        assert_eq!(result, "plain/relative/path");
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DG_TEST_BASE", "/srv/site");
        }
        let result = expand_env("${DG_TEST_BASE}/public", "build.output_dir").unwrap();
        assert_eq!(result, "/srv/site/public");
        unsafe {
            std::env::remove_var("DG_TEST_BASE");
        }
    }
}
