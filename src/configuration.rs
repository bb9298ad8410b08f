use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};
use tracing::debug;
use url::Url;

pub const DEFAULT_APPLICATION_ID: &str = "idcli";
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "config.yml";

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "IDCLI_CONFIG_DIR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the configuration directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to load configuration data, because of: {cause:?}")]
    FailedToLoadData { cause: Box<dyn std::error::Error> },
    #[error("failed to write configuration data to file, because of: {cause:?}")]
    FailedToWriteData { cause: Box<dyn std::error::Error> },
    #[error("no organization URL configured; run 'idcli config set --url <url>' first")]
    MissingOrgUrl,
    #[error("invalid organization URL: {0}")]
    InvalidOrgUrl(#[from] url::ParseError),
}

/// Persistent CLI configuration.
///
/// Holds the base URL of the organization's administration API. The API
/// token is deliberately not part of this file; it lives in the OS keyring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    org_url: Option<Url>,
}

impl Configuration {
    pub fn org_url(&self) -> Option<&Url> {
        self.org_url.as_ref()
    }

    pub fn set_org_url(&mut self, url: Url) {
        self.org_url = Some(url);
    }

    /// The API base URL, without a trailing slash.
    pub fn get_api_base_url(&self) -> Result<String, ConfigurationError> {
        match &self.org_url {
            Some(url) => Ok(url.as_str().trim_end_matches('/').to_string()),
            None => Err(ConfigurationError::MissingOrgUrl),
        }
    }

    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        // Check for IDCLI_CONFIG_DIR environment variable first
        if let Ok(config_dir_str) = std::env::var(CONFIG_DIR_ENV) {
            let mut config_path = PathBuf::from(config_dir_str);
            config_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
            return Ok(config_path);
        }

        let configuration_directory = config_dir();
        match configuration_directory {
            Some(configuration_directory) => {
                let mut default_config_file_path = configuration_directory;
                default_config_file_path.push(DEFAULT_APPLICATION_ID);
                default_config_file_path.push(DEFAULT_CONFIGURATION_FILE_NAME);

                Ok(default_config_file_path)
            }
            None => Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }
    }

    /// Load default configuration, creating a default one if none exists
    /// This is more user-friendly for first-time users
    pub fn load_or_create_default() -> Result<Configuration, ConfigurationError> {
        let default_file_path = Configuration::get_default_configuration_file_path()?;
        debug!(
            "Loading or creating configuration from {:?}...",
            default_file_path
        );

        match Configuration::load_from_file(default_file_path.clone()) {
            Ok(config) => Ok(config),
            Err(e) => match &e {
                ConfigurationError::FailedToLoadData { cause } => {
                    let not_found = cause
                        .downcast_ref::<std::io::Error>()
                        .map(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
                        .unwrap_or(false);
                    if not_found {
                        debug!("Configuration file not found, creating default configuration");
                        let default_config = Configuration::default();
                        default_config.save(&default_file_path)?;
                        Ok(default_config)
                    } else {
                        Err(e)
                    }
                }
                _ => Err(e),
            },
        }
    }

    pub fn load_from_file(path: PathBuf) -> Result<Configuration, ConfigurationError> {
        match fs::read_to_string(path) {
            Ok(configuration) => {
                let configuration = serde_yaml::from_str(&configuration);
                match configuration {
                    Ok(configuration) => Ok(configuration),
                    Err(cause) => Err(ConfigurationError::FailedToLoadData {
                        cause: Box::new(cause),
                    }),
                }
            }
            Err(cause) => Err(ConfigurationError::FailedToLoadData {
                cause: Box::new(cause),
            }),
        }
    }

    pub fn write(&self, writer: Box<dyn Write>) -> Result<(), ConfigurationError> {
        match serde_yaml::to_writer(writer, &self.clone()) {
            Ok(()) => Ok(()),
            Err(e) => Err(ConfigurationError::FailedToWriteData { cause: Box::new(e) }),
        }
    }

    pub fn save(&self, path: &PathBuf) -> Result<(), ConfigurationError> {
        // first check if the parent directory exists and try to create it if not
        let configuration_directory = path.parent();
        match configuration_directory {
            Some(path) => {
                // this operation only executes if the directory does not exist
                match fs::create_dir_all(path) {
                    Ok(()) => (),
                    Err(_) => return Err(ConfigurationError::FailedToFindConfigurationDirectory),
                }
            }
            None => return Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }

        let file = File::create(path);
        match file {
            Ok(file) => {
                let writer: Box<dyn Write> = Box::new(file);
                self.write(writer)
            }
            Err(e) => Err(ConfigurationError::FailedToWriteData { cause: Box::new(e) }),
        }
    }

    pub fn save_to_default(&self) -> Result<(), ConfigurationError> {
        self.save(&Self::get_default_configuration_file_path()?)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigurationError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigurationError::FailedToWriteData { cause: Box::new(e) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_has_no_org_url() {
        let config = Configuration::default();
        assert!(config.org_url().is_none());
        assert!(matches!(
            config.get_api_base_url(),
            Err(ConfigurationError::MissingOrgUrl)
        ));
    }

    #[test]
    fn base_url_strips_trailing_slash() {
        let mut config = Configuration::default();
        config.set_org_url(Url::parse("https://example.identity.test/").unwrap());
        assert_eq!(
            config.get_api_base_url().unwrap(),
            "https://example.identity.test"
        );
    }

    #[test]
    fn configuration_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");

        let mut config = Configuration::default();
        config.set_org_url(Url::parse("https://org.identity.test").unwrap());
        config.save(&path).unwrap();

        let loaded = Configuration::load_from_file(path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.yml");
        assert!(matches!(
            Configuration::load_from_file(path),
            Err(ConfigurationError::FailedToLoadData { .. })
        ));
    }

    #[test]
    fn yaml_export_omits_missing_org_url() {
        let config = Configuration::default();
        let yaml = config.to_yaml().unwrap();
        assert!(!yaml.contains("org_url"));
    }
}
