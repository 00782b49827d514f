use std::collections::HashMap;
use std::sync::Arc;

use crate::core::error::LoginError;

#[derive(Clone, Debug)]
pub(crate) struct CredentialController {
    credentials: Arc<HashMap<String, String>>,
}

impl CredentialController {
    pub(crate) fn new(credentials: HashMap<String, String>) -> Self {
        Self {
            credentials: Arc::new(credentials),
        }
    }

    /// Checks a username/secret pair against the configured credential set.
    ///
    /// Unknown users and wrong secrets are reported separately.
    pub(crate) fn validate(
        &self,
        username: Option<&str>,
        secret: Option<&str>,
    ) -> Result<String, LoginError> {
        let (username, secret) = match (username, secret) {
            (Some(username), Some(secret)) if !username.is_empty() && !secret.is_empty() => {
                (username, secret)
            }
            _ => return Err(LoginError::IncompleteFields),
        };

        let expected = self
            .credentials
            .get(username)
            .ok_or(LoginError::UnknownUser)?;

        if expected != secret {
            return Err(LoginError::InvalidSecret);
        }

        Ok(username.to_owned())
    }
}
