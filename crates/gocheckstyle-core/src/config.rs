//! Configuration types for gocheckstyle.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::types::RuleType;

/// Checker configuration.
///
/// Every rule is opt-in: a threshold of `0` or a flag of `false` disables
/// it. Unknown keys are ignored, so documents may carry `_comment` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum physical lines per non-test file.
    #[serde(default)]
    pub file_line: usize,

    /// Maximum lines spanned by a function.
    #[serde(default)]
    pub func_line: usize,

    /// Maximum parameter fields per signature.
    #[serde(default)]
    pub params_num: usize,

    /// Maximum result fields per signature.
    #[serde(default)]
    pub results_num: usize,

    /// Requires sources to match their canonical formatting.
    #[serde(default, alias = "formatted")]
    pub formated: bool,

    /// Checks the package name convention.
    #[serde(default)]
    pub pkg_name: bool,

    /// Checks identifier naming conventions.
    #[serde(default)]
    pub camel_name: bool,

    /// Rule tags whose problems are fatal.
    #[serde(default)]
    pub fatal: Vec<String>,

    /// Glob patterns of files and directories to skip.
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Reserved: function doc comment requirement. No rule reads it.
    #[serde(default)]
    pub func_comment: bool,

    /// Reserved: maximum indentation depth. No rule reads it.
    #[serde(default)]
    pub max_indent: usize,
}

impl Config {
    /// Creates a new configuration with every rule disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or a value has the
    /// wrong type.
    pub fn from_slice(content: &[u8]) -> Result<Self, ConfigError> {
        serde_json::from_slice(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Parses a TOML configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Loads configuration from a file.
    ///
    /// Files ending in `.toml` are read as TOML, everything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        if path.extension().is_some_and(|ext| ext == "toml") {
            let text = String::from_utf8(content).map_err(|e| ConfigError::Parse {
                message: e.to_string(),
            })?;
            Self::parse_toml(&text)
        } else {
            Self::from_slice(&content)
        }
    }

    /// Resolves the `fatal` list into rule types.
    ///
    /// Unknown tags are logged and dropped.
    #[must_use]
    pub fn fatal_rules(&self) -> HashSet<RuleType> {
        self.fatal
            .iter()
            .filter_map(|tag| match tag.parse::<RuleType>() {
                Ok(rule) => Some(rule),
                Err(e) => {
                    tracing::warn!("Ignoring fatal entry: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Returns true if any rule would run with this configuration.
    #[must_use]
    pub fn has_enabled_rules(&self) -> bool {
        self.file_line != 0
            || self.func_line != 0
            || self.params_num != 0
            || self.results_num != 0
            || self.formated
            || self.pkg_name
            || self.camel_name
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config document.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_disables_everything() {
        let config = Config::default();
        assert!(!config.has_enabled_rules());
        assert!(config.fatal_rules().is_empty());
    }

    #[test]
    fn test_parse_json_config() {
        let json = br#"{
            "file_line": 200,
            "_file_line_comment": "file line count limit",
            "func_line": 50,
            "params_num": 4,
            "results_num": 3,
            "formated": true,
            "pkg_name": true,
            "camel_name": true,
            "ignore": ["tmp/*", "src/tmp.go"],
            "fatal": ["formated"]
        }"#;

        let config = Config::from_slice(json).expect("Failed to parse");
        assert_eq!(config.file_line, 200);
        assert_eq!(config.func_line, 50);
        assert_eq!(config.params_num, 4);
        assert_eq!(config.results_num, 3);
        assert!(config.formated && config.pkg_name && config.camel_name);
        assert_eq!(config.ignore, vec!["tmp/*", "src/tmp.go"]);
        assert_eq!(
            config.fatal_rules(),
            HashSet::from([RuleType::Formated])
        );
    }

    #[test]
    fn test_parse_toml_config() {
        let toml = r#"
file_line = 9
formatted = true
fatal = ["file_line", "camel_name"]
"#;

        let config = Config::parse_toml(toml).expect("Failed to parse");
        assert_eq!(config.file_line, 9);
        assert!(config.formated);
        assert_eq!(
            config.fatal_rules(),
            HashSet::from([RuleType::FileLine, RuleType::CamelName])
        );
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Config::from_slice(b"{\"file_line\": ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_negative_threshold_is_parse_error() {
        let err = Config::from_slice(br#"{"func_line": -1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_fatal_tags_are_dropped() {
        let config = Config {
            fatal: vec!["no_defer".into(), "pkg_name".into()],
            ..Config::default()
        };
        assert_eq!(config.fatal_rules(), HashSet::from([RuleType::PkgName]));
    }

    #[test]
    fn test_reserved_options_are_accepted_but_do_not_enable_rules() {
        let config =
            Config::from_slice(br#"{"func_comment": true, "max_indent": 3}"#).expect("parse");
        assert!(config.func_comment);
        assert_eq!(config.max_indent, 3);
        assert!(!config.has_enabled_rules());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::from_file(Path::new("/nonexistent/gocheckstyle.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
