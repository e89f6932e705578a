//! Configuration management for tagtree.
//!
//! Parses `tagtree.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! Programmatic overrides can be applied during load via [`Overrides`].
//!
//! ## File format
//!
//! ```toml
//! [render]
//! minified = false
//! indent = "    "
//! max_depth = 512  # unlimited when omitted
//! escape = "raw"   # or "html"
//! ```
//!
//! Every key is optional; missing keys use the renderer defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tagtree::{DEFAULT_INDENT, Escape, RenderOptions, RenderStyle};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "tagtree.toml";

/// Settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct Overrides {
    /// Override minified output.
    pub minified: Option<bool>,
    /// Override the indentation unit.
    pub indent: Option<String>,
    /// Override the maximum nesting depth.
    pub max_depth: Option<usize>,
    /// Override value escaping.
    pub escape: Option<Escape>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Render configuration.
    pub render: RenderConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Render configuration (`[render]` section).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Render on a single line without whitespace between tags.
    pub minified: bool,
    /// Indentation unit for indented output.
    pub indent: String,
    /// Maximum nesting depth, unlimited when unset.
    pub max_depth: Option<usize>,
    /// Value escaping.
    pub escape: Escape,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            minified: false,
            indent: DEFAULT_INDENT.to_owned(),
            max_depth: None,
            escape: Escape::Raw,
        }
    }
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
}

impl Config {
    /// Load configuration from file with optional overrides.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `tagtree.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// Overrides are applied after loading and are validated together with the
    /// file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the resulting values are invalid.
    pub fn load(
        config_path: Option<&Path>,
        overrides: Option<&Overrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(overrides) = overrides {
            config.apply_overrides(overrides);
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Validation` for invalid values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render options described by this configuration.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            style: RenderStyle::from_minified(self.render.minified),
            indent: self.render.indent.clone(),
            max_depth: self.render.max_depth,
            escape: self.render.escape,
        }
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render.indent.is_empty() {
            return Err(ConfigError::Validation("render.indent must not be empty".to_owned()));
        }
        if !self.render.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(ConfigError::Validation(
                "render.indent may only contain spaces and tabs".to_owned(),
            ));
        }
        if self.render.max_depth == Some(0) {
            return Err(ConfigError::Validation(
                "render.max_depth must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Apply overrides to the configuration.
    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(minified) = overrides.minified {
            self.render.minified = minified;
        }
        if let Some(indent) = &overrides.indent {
            self.render.indent.clone_from(indent);
        }
        if let Some(max_depth) = overrides.max_depth {
            self.render.max_depth = Some(max_depth);
        }
        if let Some(escape) = overrides.escape {
            self.render.escape = escape;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_from(&cwd)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered configuration file");
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.render.minified);
        assert_eq!(config.render.indent, "    ");
        assert_eq!(config.render.max_depth, None);
        assert_eq!(config.render.escape, Escape::Raw);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_default_render_options_match_renderer_defaults() {
        assert_eq!(Config::default().render_options(), RenderOptions::default());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.render, RenderConfig::default());
    }

    #[test]
    fn test_parse_render_config() {
        let toml = r#"
[render]
minified = true
indent = "\t"
max_depth = 64
escape = "html"
"#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(
            config.render_options(),
            RenderOptions {
                style: RenderStyle::Minified,
                indent: "\t".to_owned(),
                max_depth: Some(64),
                escape: Escape::Html,
            }
        );
    }

    #[test]
    fn test_parse_partial_render_config() {
        let toml = r"
[render]
max_depth = 10
";
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.render.max_depth, Some(10));
        assert_eq!(config.render.indent, DEFAULT_INDENT);
        assert!(!config.render.minified);
    }

    #[test]
    fn test_invalid_escape_value() {
        let toml = r#"
[render]
escape = "xml"
"#;
        let err = Config::from_toml_str(toml).unwrap_err();
        assert!(
            matches!(err, ConfigError::Parse(_)),
            "Expected ConfigError::Parse, got {err:?}"
        );
    }

    #[test]
    fn test_indent_must_be_whitespace() {
        let toml = r#"
[render]
indent = "--"
"#;
        let err = Config::from_toml_str(toml).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        assert!(err.to_string().contains("render.indent"));
    }

    #[test]
    fn test_indent_must_not_be_empty() {
        let toml = r#"
[render]
indent = ""
"#;
        let err = Config::from_toml_str(toml).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        assert_eq!(err.to_string(), "Configuration error: render.indent must not be empty");
    }

    #[test]
    fn test_empty_indent_override_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "").unwrap();
        let overrides = Overrides {
            indent: Some(String::new()),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_max_depth_must_be_positive() {
        let toml = r"
[render]
max_depth = 0
";
        let err = Config::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("render.max_depth"));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[render]\nminified = true\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert!(config.render.minified);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(
            matches!(err, ConfigError::NotFound(_)),
            "Expected ConfigError::NotFound, got {err:?}"
        );
    }

    #[test]
    fn test_load_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "[render]\nmax_depth = 32\n").unwrap();
        let overrides = Overrides {
            minified: Some(true),
            ..Default::default()
        };

        let config = Config::load(Some(&path), Some(&overrides)).unwrap();
        assert!(config.render.minified);
        assert_eq!(config.render.max_depth, Some(32)); // Unchanged
    }

    #[test]
    fn test_invalid_overrides_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "").unwrap();
        let overrides = Overrides {
            max_depth: Some(0),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_apply_all_overrides() {
        let mut config = Config::default();
        let overrides = Overrides {
            minified: Some(true),
            indent: Some("  ".to_owned()),
            max_depth: Some(8),
            escape: Some(Escape::Html),
        };

        config.apply_overrides(&overrides);

        assert_eq!(
            config.render,
            RenderConfig {
                minified: true,
                indent: "  ".to_owned(),
                max_depth: Some(8),
                escape: Escape::Html,
            }
        );
    }

    #[test]
    fn test_discover_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        let found = Config::discover_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILENAME));
    }

    #[test]
    fn test_discover_prefers_nearest_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();
        fs::write(nested.join(CONFIG_FILENAME), "").unwrap();

        let found = Config::discover_from(&nested).unwrap();
        assert_eq!(found, nested.join(CONFIG_FILENAME));
    }

    #[test]
    fn test_parse_error_message() {
        let err = Config::from_toml_str("[render\n").unwrap_err();
        assert!(err.to_string().starts_with("TOML parse error"));
    }
}
