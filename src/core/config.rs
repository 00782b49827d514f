use std::collections::HashMap;

use serde::Deserialize;

use crate::core::error::ConfigError;

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Args {
    #[serde(default = "default_log_level")]
    pub(crate) log_level: String,
    #[serde(default = "default_port")]
    pub(crate) port: u16,
    pub(crate) secret: String,
    pub(crate) users: String,
    #[serde(default = "default_token_lifetime")]
    pub(crate) token_lifetime_minutes: i64,
}

fn default_log_level() -> String {
    "info".into()
}

fn default_port() -> u16 {
    3000
}

fn default_token_lifetime() -> i64 {
    60
}

/// Parses `user:secret` pairs separated by commas into a credential map.
///
/// Only the first `:` splits a pair, so secrets may contain colons.
pub(crate) fn create_credentials_map(users: &str) -> Result<HashMap<String, String>, ConfigError> {
    let mut credentials = HashMap::new();

    for entry in users.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
        let (username, secret) = entry
            .split_once(':')
            .ok_or_else(|| ConfigError::InvalidCredentials(entry.to_owned()))?;

        if username.is_empty() || secret.is_empty() {
            return Err(ConfigError::InvalidCredentials(entry.to_owned()));
        }

        if credentials
            .insert(username.to_owned(), secret.to_owned())
            .is_some()
        {
            return Err(ConfigError::DuplicateUser(username.to_owned()));
        }
    }

    if credentials.is_empty() {
        return Err(ConfigError::NoCredentials);
    }

    Ok(credentials)
}
