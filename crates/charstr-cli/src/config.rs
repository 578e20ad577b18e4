//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`. Every key is optional;
//! command-line flags take precedence over file values.
//!
//! ```yaml
//! default_variant: BMPString
//! uppercase_hex: true
//! check_alphabet: false
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use charstr_core::Variant;

/// Settings loaded from the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Type used when a command does not pass `--type`.
    pub default_variant: Option<Variant>,
    /// Print hex digits in upper case.
    pub uppercase_hex: bool,
    /// Check each value against its type's X.680 alphabet.
    pub check_alphabet: bool,
}

impl CliConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_gives_defaults() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.default_variant.is_none());
    }

    #[test]
    fn loads_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charstr.yaml");
        std::fs::write(
            &path,
            "default_variant: BMPString\nuppercase_hex: true\n",
        )
        .unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.default_variant, Some(Variant::BmpString));
        assert!(config.uppercase_hex);
        assert!(!config.check_alphabet);
    }

    #[test]
    fn rejects_unknown_keys_and_types() {
        let dir = tempfile::tempdir().unwrap();

        let unknown_key = dir.path().join("a.yaml");
        std::fs::write(&unknown_key, "colour: blue\n").unwrap();
        assert!(CliConfig::load(Some(&unknown_key)).is_err());

        let unknown_type = dir.path().join("b.yaml");
        std::fs::write(&unknown_type, "default_variant: OctetString\n").unwrap();
        assert!(CliConfig::load(Some(&unknown_type)).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(Some(&dir.path().join("absent.yaml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }
}
