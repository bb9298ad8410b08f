use thiserror::Error;

/// Environment variable that, when set, takes precedence over the keyring.
pub const API_TOKEN_ENV: &str = "IDCLI_API_TOKEN";

/// Keyring entry key under which the API token is stored.
pub const API_TOKEN_KEY: &str = "api-token";

#[cfg(not(feature = "dev-keyring"))]
const SERVICE: &str = "idcli";

#[derive(Debug, Error)]
pub enum KeyringError {
    #[error("keyring error: {0}")]
    KeyringAccessError(#[from] keyring::Error),
    #[cfg(feature = "dev-keyring")]
    #[error("dev keyring error: {0}")]
    DevKeyringError(#[from] crate::dev_keyring::DevKeyringError),
}

/// Credential store for the API token.
///
/// Backed by the OS keyring, or by a plain file in the configuration
/// directory when the `dev-keyring` feature is enabled.
#[derive(Default)]
pub struct Keyring {}

#[cfg(not(feature = "dev-keyring"))]
impl Keyring {
    pub fn get(&self, key: &str) -> Result<Option<String>, KeyringError> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(KeyringError::from(e)),
        }
    }

    pub fn put(&self, key: &str, value: &str) -> Result<(), KeyringError> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        entry.set_password(value)?;
        Ok(())
    }

    pub fn delete(&self, key: &str) -> Result<(), KeyringError> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.delete_password() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(KeyringError::from(e)),
        }
    }
}

#[cfg(feature = "dev-keyring")]
impl Keyring {
    pub fn get(&self, key: &str) -> Result<Option<String>, KeyringError> {
        let mut store = crate::dev_keyring::DevKeyring::new();
        Ok(store.get(key)?)
    }

    pub fn put(&self, key: &str, value: &str) -> Result<(), KeyringError> {
        let mut store = crate::dev_keyring::DevKeyring::new();
        Ok(store.put(key, value)?)
    }

    pub fn delete(&self, key: &str) -> Result<(), KeyringError> {
        let mut store = crate::dev_keyring::DevKeyring::new();
        Ok(store.delete(key)?)
    }
}

/// Resolve the API token: environment first, then the keyring.
pub fn resolve_api_token() -> Result<Option<String>, KeyringError> {
    if let Ok(token) = std::env::var(API_TOKEN_ENV) {
        if !token.is_empty() {
            return Ok(Some(token));
        }
    }
    Keyring::default().get(API_TOKEN_KEY)
}
