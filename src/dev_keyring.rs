//! File-backed credential store used when the `dev-keyring` feature is on.
//!
//! Stores credentials as plain JSON next to the configuration file. Not
//! suitable for production use; intended for development and CI where the
//! OS keyring is unavailable.

use dirs::config_dir;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::configuration::{CONFIG_DIR_ENV, DEFAULT_APPLICATION_ID};

const DEV_CREDENTIALS_FILE_NAME: &str = "dev_credentials.json";

#[derive(Debug, Error)]
pub enum DevKeyringError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub struct DevKeyring {
    file_path: PathBuf,
    credentials: Option<BTreeMap<String, String>>,
}

impl Default for DevKeyring {
    fn default() -> DevKeyring {
        // Honor the same directory override as the configuration module so
        // that tests and sandboxed runs stay self-contained.
        let mut file_path = match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => {
                let mut path = config_dir().unwrap_or_else(|| PathBuf::from("."));
                path.push(DEFAULT_APPLICATION_ID);
                path
            }
        };
        file_path.push(DEV_CREDENTIALS_FILE_NAME);

        DevKeyring {
            file_path,
            credentials: None,
        }
    }
}

impl DevKeyring {
    pub fn new() -> Self {
        Self::default()
    }

    fn load_credentials(&mut self) -> Result<(), DevKeyringError> {
        if self.file_path.exists() {
            let content = fs::read_to_string(&self.file_path)?;
            self.credentials = Some(serde_json::from_str(&content)?);
        } else {
            self.credentials = None;
        }
        Ok(())
    }

    fn save_credentials(&self) -> Result<(), DevKeyringError> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if let Some(credentials) = &self.credentials {
            let content = serde_json::to_string_pretty(credentials)?;
            fs::write(&self.file_path, content)?;
        }
        Ok(())
    }

    pub fn get(&mut self, key: &str) -> Result<Option<String>, DevKeyringError> {
        self.load_credentials()?;
        Ok(self
            .credentials
            .as_ref()
            .and_then(|credentials| credentials.get(key).cloned()))
    }

    pub fn put(&mut self, key: &str, value: &str) -> Result<(), DevKeyringError> {
        self.load_credentials()?;
        let mut credentials = self.credentials.take().unwrap_or_default();
        credentials.insert(key.to_string(), value.to_string());
        self.credentials = Some(credentials);
        self.save_credentials()
    }

    pub fn delete(&mut self, key: &str) -> Result<(), DevKeyringError> {
        self.load_credentials()?;
        if let Some(mut credentials) = self.credentials.take() {
            credentials.remove(key);
            self.credentials = Some(credentials);
            self.save_credentials()?;
        }
        Ok(())
    }
}
