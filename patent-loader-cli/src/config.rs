//! Loader configuration: a YAML (or TOML) key/value file plus overrides
//!
//! Keys keep their upper-case names so existing batch configs load
//! unchanged:
//!
//! ```yaml
//! REST_ENDPOINT: http://localhost:8080/fcrepo/rest
//! FEDORA_USER: fedoraAdmin
//! FEDORA_PASSWORD: secret
//! ASSET_DIR: ./binaries
//! METADATA_FILE: ./metadata.csv
//! LOG_FILE: ./load.log
//! ```

use crate::error::{CliError, CliResult};
use patent_fcrepo::{Credentials, RepositoryConfig, DEFAULT_TIMEOUT_SECS};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const USER_ENV: &str = "FEDORA_USER";
const PASSWORD_ENV: &str = "FEDORA_PASSWORD";

const METADATA_FILE_NAME: &str = "metadata.csv";
const LOG_FILE_NAME: &str = "load.log";

/// Raw contents of the config file
#[derive(Debug, Default, Deserialize)]
pub struct LoaderFileConfig {
    #[serde(rename = "REST_ENDPOINT")]
    pub rest_endpoint: Option<String>,
    #[serde(rename = "FEDORA_USER", default)]
    pub fedora_user: Option<String>,
    #[serde(rename = "FEDORA_PASSWORD", default)]
    pub fedora_password: Option<String>,
    #[serde(rename = "ASSET_DIR", default)]
    pub asset_dir: Option<PathBuf>,
    #[serde(rename = "METADATA_FILE", default)]
    pub metadata_file: Option<PathBuf>,
    #[serde(rename = "LOG_FILE", default)]
    pub log_file: Option<PathBuf>,
    #[serde(rename = "TARGET_CONTAINER", default)]
    pub target_container: Option<String>,
    #[serde(rename = "REQUEST_TIMEOUT_SECS", default)]
    pub request_timeout_secs: Option<u64>,
}

impl LoaderFileConfig {
    /// Parse `text`, choosing TOML for a `.toml` path and YAML otherwise.
    pub fn parse(path: &Path, text: &str) -> CliResult<Self> {
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            Ok(toml::from_str(text)?)
        } else {
            Ok(serde_yaml::from_str(text)?)
        }
    }
}

/// Fully resolved settings for one batch
#[derive(Clone, Debug)]
pub struct LoaderConfig {
    pub repository: RepositoryConfig,
    pub asset_dir: PathBuf,
    pub metadata_file: PathBuf,
    pub log_file: PathBuf,
}

impl LoaderConfig {
    /// Load from `path`, apply the positional `directory` layout and the
    /// credential environment variables.
    pub fn load(path: &Path, directory: Option<&Path>) -> CliResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("cannot read config {}: {e}", path.display()))
        })?;
        let file = LoaderFileConfig::parse(path, &text)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::resolve(file, base, directory, |key| std::env::var(key).ok())
    }

    /// Merge file values, the optional batch directory and environment
    /// lookups into a complete configuration.
    ///
    /// Relative paths in the file are taken relative to `base` (the config
    /// file's directory).
    pub fn resolve(
        file: LoaderFileConfig,
        base: &Path,
        directory: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> CliResult<Self> {
        let endpoint = file
            .rest_endpoint
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| CliError::Config("missing REST_ENDPOINT in config".into()))?;

        let credentials = Credentials {
            user: env(USER_ENV).or(file.fedora_user).unwrap_or_default(),
            password: env(PASSWORD_ENV).or(file.fedora_password).unwrap_or_default(),
        };

        let mut repository = RepositoryConfig::new(endpoint.trim(), credentials)
            .with_timeout_secs(file.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        if let Some(container) = file.target_container.filter(|c| !c.trim().is_empty()) {
            repository = repository.with_container(container.trim());
        }

        let (asset_dir, metadata_file, log_file) = match directory {
            Some(dir) => (
                dir.to_path_buf(),
                dir.join(METADATA_FILE_NAME),
                dir.join(LOG_FILE_NAME),
            ),
            None => (
                require_path(file.asset_dir, "ASSET_DIR", base)?,
                require_path(file.metadata_file, "METADATA_FILE", base)?,
                require_path(file.log_file, "LOG_FILE", base)?,
            ),
        };

        Ok(Self {
            repository,
            asset_dir,
            metadata_file,
            log_file,
        })
    }
}

fn require_path(value: Option<PathBuf>, key: &str, base: &Path) -> CliResult<PathBuf> {
    let path = value
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| {
            CliError::Config(format!(
                "missing {key} in config (or pass a batch directory argument)"
            ))
        })?;
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(base.join(path))
    }
}
