//! Build configuration for lucien.
//!
//! Parses `lucien.toml` with serde and provides auto-discovery of the
//! config file in parent directories. Every setting has a sensible
//! default, so a missing file is not an error: the site builds against the
//! production origin out of the box.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.origin`
//! - `site.brand`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the canonical site origin.
    pub origin: Option<String>,
    /// Override the brand name.
    pub brand: Option<String>,
    /// Override the template path.
    pub template: Option<PathBuf>,
    /// Override the output directory.
    pub output_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "lucien.toml";

/// Template path used when the config names none.
const DEFAULT_TEMPLATE: &str = "dist/index.html";

/// Build configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity.
    pub site: SiteSection,
    /// Build paths as parsed from TOML (relative strings).
    #[serde(default)]
    build: BuildSectionRaw,

    /// Resolved build paths (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildPaths,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site identity configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Canonical origin every generated URL is joined to.
    pub origin: String,
    /// Brand name for titles, meta authorship, and structured data.
    pub brand: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            origin: lucien_content::DEFAULT_ORIGIN.to_owned(),
            brand: lucien_content::BRAND.to_owned(),
        }
    }
}

/// Raw build configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildSectionRaw {
    template: Option<String>,
    output_dir: Option<String>,
}

/// Resolved build paths.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildPaths {
    /// Base HTML template, the client bundle's shell.
    pub template: PathBuf,
    /// Directory the static pages and sitemap are written into.
    pub output_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.origin`").
        field: String,
        /// Error message (e.g., "${`SITE_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `lucien.toml` in the current directory and parents and
    /// falls back to defaults when none exists.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, parsing
    /// fails, or the merged result fails validation.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(origin) = &settings.origin {
            self.site.origin.clone_from(origin);
        }
        if let Some(brand) = &settings.brand {
            self.site.brand.clone_from(brand);
        }
        if let Some(template) = &settings.template {
            self.build_resolved.template.clone_from(template);
            if settings.output_dir.is_none() {
                self.build_resolved.output_dir = parent_dir(template);
            }
        }
        if let Some(output_dir) = &settings.output_dir {
            self.build_resolved.output_dir.clone_from(output_dir);
        }
    }

    /// Search for the config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to the working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to the given base.
    fn default_with_base(base: &Path) -> Self {
        let template = base.join(DEFAULT_TEMPLATE);
        Self {
            site: SiteSection::default(),
            build: BuildSectionRaw::default(),
            build_resolved: BuildPaths {
                output_dir: parent_dir(&template),
                template,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.origin, "site.origin")?;
        require_http_url(&self.site.origin, "site.origin")?;
        require_non_empty(&self.site.brand, "site.brand")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.origin = expand::expand_env(&self.site.origin, "site.origin")?;
        self.site.brand = expand::expand_env(&self.site.brand, "site.brand")?;
        Ok(())
    }

    /// Resolve relative paths against the config file's directory.
    ///
    /// The output directory defaults to the template's own directory, which
    /// is what lets the root route overwrite the shell in place.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let template = config_dir.join(self.build.template.as_deref().unwrap_or(DEFAULT_TEMPLATE));
        let output_dir = self
            .build
            .output_dir
            .as_deref()
            .map_or_else(|| parent_dir(&template), |dir| config_dir.join(dir));
        self.build_resolved = BuildPaths {
            template,
            output_dir,
        };
    }
}

/// Parent directory of a path, or `.` at the filesystem root.
fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/site"));
        assert_eq!(config.site.origin, "https://adamkarl.lucien.technology");
        assert_eq!(config.site.brand, "Adam Karl Lucien");
        assert_eq!(
            config.build_resolved.template,
            PathBuf::from("/site/dist/index.html")
        );
        assert_eq!(config.build_resolved.output_dir, PathBuf::from("/site/dist"));
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.origin, "https://adamkarl.lucien.technology");
    }

    #[test]
    fn test_parse_site_section() {
        let toml = r#"
[site]
origin = "https://preview.lucien.technology"
brand = "Adam Karl Lucien (preview)"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.origin, "https://preview.lucien.technology");
        assert_eq!(config.site.brand, "Adam Karl Lucien (preview)");
    }

    #[test]
    fn test_resolve_paths_against_config_dir() {
        let toml = r#"
[build]
template = "public/shell.html"
output_dir = "out"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.build_resolved.template,
            PathBuf::from("/project/public/shell.html")
        );
        assert_eq!(config.build_resolved.output_dir, PathBuf::from("/project/out"));
    }

    #[test]
    fn test_output_dir_defaults_to_template_dir() {
        let toml = r#"
[build]
template = "public/shell.html"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(
            config.build_resolved.output_dir,
            PathBuf::from("/project/public")
        );
    }

    #[test]
    fn test_apply_cli_settings_origin_and_brand() {
        let mut config = Config::default_with_base(Path::new("/site"));
        let overrides = CliSettings {
            origin: Some("http://localhost:4173".to_owned()),
            brand: Some("Local".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.site.origin, "http://localhost:4173");
        assert_eq!(config.site.brand, "Local");
    }

    #[test]
    fn test_apply_cli_settings_template_moves_output_dir() {
        let mut config = Config::default_with_base(Path::new("/site"));
        let overrides = CliSettings {
            template: Some(PathBuf::from("/tmp/build/index.html")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.build_resolved.template,
            PathBuf::from("/tmp/build/index.html")
        );
        assert_eq!(config.build_resolved.output_dir, PathBuf::from("/tmp/build"));
    }

    #[test]
    fn test_apply_cli_settings_explicit_output_dir_wins() {
        let mut config = Config::default_with_base(Path::new("/site"));
        let overrides = CliSettings {
            template: Some(PathBuf::from("/tmp/build/index.html")),
            output_dir: Some(PathBuf::from("/srv/www")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.build_resolved.output_dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let before = Config::default_with_base(Path::new("/site"));
        let mut config = Config::default_with_base(Path::new("/site"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.site.origin, before.site.origin);
        assert_eq!(config.build_resolved, before.build_resolved);
    }

    #[test]
    fn test_expand_env_vars_origin() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("TEST_LUCIEN_ORIGIN", "https://staging.lucien.technology");
        }

        let toml = r#"
[site]
origin = "${TEST_LUCIEN_ORIGIN}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.site.origin, "https://staging.lucien.technology");

        unsafe {
            std::env::remove_var("TEST_LUCIEN_ORIGIN");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MISSING_LUCIEN_ORIGIN");
        }

        let toml = r#"
[site]
origin = "${MISSING_LUCIEN_ORIGIN}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let result = config.expand_env_vars();

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MISSING_LUCIEN_ORIGIN"));
        assert!(err.to_string().contains("site.origin"));
    }

    #[test]
    fn test_expand_env_vars_default_value() {
        let toml = r#"
[site]
brand = "${LUCIEN_BRAND_UNSET_FOR_TEST:-Adam Karl Lucien}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        assert_eq!(config.site.brand, "Adam Karl Lucien");
    }

    // ==== validation ====

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/site"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_http_origin() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.site.origin = "ftp://lucien.technology".to_owned();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.origin"));
    }

    #[test]
    fn test_validate_rejects_empty_brand() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.site.brand = "   ".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.brand"));
    }

    #[test]
    fn test_load_missing_explicit_path_is_not_found() {
        let err = Config::load(Some(Path::new("/nonexistent/lucien.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
