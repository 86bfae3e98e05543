//! Config file discovery and command line precedence.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use suitegen_manifest::{Config, SortOrder, Target};
use tracing::debug;

/// Load `explicit`, or `suitegen.toml` from the working directory when it
/// exists, or the defaults.
pub fn load_config(explicit: Option<&Path>) -> suitegen_manifest::Result<Config> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(PathBuf::from(Config::FILE_NAME)).filter(|p| p.is_file()),
    };

    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Config::open(&path)
        }
        None => {
            debug!("no config file, using defaults");
            Ok(Config::default())
        }
    }
}

/// Settings for one `generate` run after applying precedence:
/// command line, then config file, then defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSettings {
    pub fixtures: String,
    pub target: Target,
    pub order: SortOrder,
}

impl GenerateSettings {
    pub fn resolve(
        fixtures: Option<&str>,
        target: Option<Target>,
        order: Option<SortOrder>,
        config: &Config,
    ) -> Result<Self> {
        let fixtures = fixtures
            .or(config.fixtures.as_deref())
            .ok_or_else(|| {
                eyre!(
                    "no fixture directory given; pass FIXTURES or set `fixtures` in {}",
                    Config::FILE_NAME
                )
            })?
            .to_string();

        Ok(Self {
            fixtures,
            target: target.or(config.target).unwrap_or_default(),
            order: order.or(config.ordering).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, str::FromStr};

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults_without_config() {
        let settings =
            GenerateSettings::resolve(Some("fixtures"), None, None, &Config::default()).unwrap();
        assert_eq!(
            settings,
            GenerateSettings {
                fixtures: "fixtures".to_string(),
                target: Target::JUnit,
                order: SortOrder::Manifest,
            }
        );
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let config = Config::from_str(
            "fixtures = \"from/config\"\ntarget = \"rust\"\nordering = \"identifier\"\n",
        )
        .unwrap();
        let settings = GenerateSettings::resolve(None, None, None, &config).unwrap();
        assert_eq!(settings.fixtures, "from/config");
        assert_eq!(settings.target, Target::Rust);
        assert_eq!(settings.order, SortOrder::Identifier);
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config::from_str("fixtures = \"from/config\"\ntarget = \"rust\"\n").unwrap();
        let settings = GenerateSettings::resolve(
            Some("from/cli"),
            Some(Target::JUnit),
            Some(SortOrder::Identifier),
            &config,
        )
        .unwrap();
        assert_eq!(settings.fixtures, "from/cli");
        assert_eq!(settings.target, Target::JUnit);
        assert_eq!(settings.order, SortOrder::Identifier);
    }

    #[test]
    fn test_missing_fixtures_is_an_error() {
        let err = GenerateSettings::resolve(None, None, None, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("no fixture directory"));
    }

    #[test]
    fn test_load_explicit_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "target = \"rust\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.target, Some(Target::Rust));
    }

    #[test]
    fn test_load_missing_explicit_config_fails() {
        let temp = TempDir::new().unwrap();
        assert!(load_config(Some(&temp.path().join("missing.toml"))).is_err());
    }
}
