//! `${VAR}` expansion for configuration strings.
//!
//! Origin and brand may reference environment variables so one
//! `lucien.toml` can serve local, preview, and production builds. Only the
//! braced forms are recognized:
//!
//! - `${VAR}` requires the variable to be set
//! - `${VAR:-default}` falls back to the default when it is not

use crate::ConfigError;

/// Unset variable reported back through the expansion context.
struct UnsetVar {
    name: String,
}

fn lookup(name: &str) -> Result<Option<String>, UnsetVar> {
    std::env::var(name).map(Some).map_err(|_| UnsetVar {
        name: name.to_owned(),
    })
}

/// Expand every `${...}` reference in `value`.
///
/// `field` is the dotted config key, carried into the error so the message
/// points at the offending line of `lucien.toml`. A value without `${` is
/// returned as-is, which keeps bare `$` characters in origins and brands
/// out of the expander entirely.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    match shellexpand::env_with_context(value, lookup) {
        Ok(expanded) => Ok(expanded.into_owned()),
        Err(err) => Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{0}}} not set", err.cause.name),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_passes_through() {
        let result = expand_env("https://lucien.technology", "site.origin").unwrap();
        assert_eq!(result, "https://lucien.technology");
    }

    #[test]
    fn test_bare_dollar_passes_through() {
        let result = expand_env("https://lucien.technology/$path", "site.origin").unwrap();
        assert_eq!(result, "https://lucien.technology/$path");
    }

    #[test]
    fn test_expands_set_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("EXPAND_TEST_HOST", "preview.lucien.technology");
        }

        let result = expand_env("https://${EXPAND_TEST_HOST}", "site.origin").unwrap();
        assert_eq!(result, "https://preview.lucien.technology");

        unsafe {
            std::env::remove_var("EXPAND_TEST_HOST");
        }
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("EXPAND_TEST_UNSET");
        }

        let result = expand_env("${EXPAND_TEST_UNSET:-fallback}", "site.brand").unwrap();
        assert_eq!(result, "fallback");
    }

    #[test]
    fn test_unset_without_default_errors() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("EXPAND_TEST_REQUIRED");
        }

        let err = expand_env("${EXPAND_TEST_REQUIRED}", "site.origin").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("EXPAND_TEST_REQUIRED"));
        assert!(err.to_string().contains("site.origin"));
    }

    #[test]
    fn test_multiple_references() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("EXPAND_TEST_SCHEME", "https");
            std::env::set_var("EXPAND_TEST_DOMAIN", "lucien.technology");
        }

        let result = expand_env(
            "${EXPAND_TEST_SCHEME}://${EXPAND_TEST_DOMAIN}",
            "site.origin",
        )
        .unwrap();
        assert_eq!(result, "https://lucien.technology");

        unsafe {
            std::env::remove_var("EXPAND_TEST_SCHEME");
            std::env::remove_var("EXPAND_TEST_DOMAIN");
        }
    }
}
