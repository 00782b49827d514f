use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;

use crate::controllers::credentials::CredentialController;
use crate::controllers::token::TokenController;
use crate::core::clock::Clock;
use crate::core::error::ConfigError;
use crate::token::codec::TokenCodec;

#[derive(Clone, Debug)]
pub(crate) struct AppState {
    pub(crate) credential_controller: CredentialController,
    pub(crate) token_controller: TokenController,
}

impl AppState {
    pub(crate) fn new(
        credentials: HashMap<String, String>,
        secret: &str,
        token_lifetime: Duration,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        if secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }

        if token_lifetime <= Duration::zero() {
            return Err(ConfigError::InvalidLifetime);
        }

        Ok(AppState {
            credential_controller: CredentialController::new(credentials),
            token_controller: TokenController::new(
                TokenCodec::new(secret),
                clock,
                token_lifetime,
            ),
        })
    }
}
