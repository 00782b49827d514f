use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("Invalid credential entry: {0}")]
    InvalidCredentials(String),
    #[error("Duplicate user: {0}")]
    DuplicateUser(String),
    #[error("No credentials configured")]
    NoCredentials,
    #[error("Token secret must not be empty")]
    EmptySecret,
    #[error("Token lifetime must be positive")]
    InvalidLifetime,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum LoginError {
    #[error("Incomplete fields")]
    IncompleteFields,
    #[error("Unknown user")]
    UnknownUser,
    #[error("Invalid secret")]
    InvalidSecret,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum LookupError {
    #[error("Null token")]
    NullToken,
    #[error("Token not found")]
    NotFound,
    #[error("Expired token")]
    Expired,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("Login error: {0}")]
    Login(#[from] LoginError),
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Error::Login(LoginError::IncompleteFields) => {
                (StatusCode::BAD_REQUEST, json!({ "error": "Campos incompleto" }))
            }
            Error::Login(LoginError::UnknownUser) => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Clave o Usuario incorrecto" }),
            ),
            Error::Login(LoginError::InvalidSecret) => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Clave o Usuario incorrecto" }),
            ),
            Error::Lookup(LookupError::NullToken) => {
                (StatusCode::NOT_FOUND, json!({ "err": "token null" }))
            }
            Error::Lookup(LookupError::Expired) => {
                (StatusCode::NOT_FOUND, json!({ "err": "token expirado" }))
            }
            Error::Lookup(LookupError::NotFound) => (
                StatusCode::NOT_FOUND,
                json!({ "message": "Token no encontrado." }),
            ),
            Error::Jwt(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            ),
        };

        if status.is_server_error() {
            tracing::error!("{:?}", self);
        } else {
            tracing::debug!("{}", self);
        }

        (status, Json(body)).into_response()
    }
}
