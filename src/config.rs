use crate::options::Options;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Presets to use when the program starts
    pub(crate) defaults: Options,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{CellSize, Speed};
    use std::io::Write;

    #[test]
    fn load_missing_allowed() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let cfg = Config::load(&dir.path().join("config.toml"), true)
            .expect("missing file should yield defaults");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_missing_not_allowed() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let r = Config::load(&dir.path().join("config.toml"), false);
        assert!(matches!(r, Err(ConfigError::Read(_))));
    }

    #[test]
    fn load_presets() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("config.toml");
        let mut f = fs_err::File::create(&path).expect("file should be created");
        writeln!(f, "[defaults]").expect("write should succeed");
        writeln!(f, "speed = \"hard\"").expect("write should succeed");
        writeln!(f, "size = \"small\"").expect("write should succeed");
        drop(f);
        let cfg = Config::load(&path, false).expect("config should parse");
        assert_eq!(cfg.defaults.speed, Speed::Hard);
        assert_eq!(cfg.defaults.size, CellSize::Small);
    }

    #[test]
    fn load_empty_file() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "").expect("write should succeed");
        let cfg = Config::load(&path, false).expect("empty config should parse");
        assert_eq!(cfg.defaults, Options::default());
    }

    #[test]
    fn load_invalid_toml() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "defaults = \"fast\"").expect("write should succeed");
        let r = Config::load(&path, false);
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }
}
