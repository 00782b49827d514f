use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::core::error::{Error, LoginError, LookupError};
use crate::core::state::AppState;
use crate::types::request::LoginData;
use crate::types::response;

pub(crate) async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginData>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(login_data) = payload.map_err(|e| {
        tracing::debug!("unreadable login body: {}", e);
        LoginError::IncompleteFields
    })?;

    let username = state
        .credential_controller
        .validate(login_data.usuario.as_deref(), login_data.clave.as_deref())?;

    let token = state.token_controller.issue(&username)?;

    tracing::info!(user = %username, "issued token");

    Ok((StatusCode::CREATED, Json(response::Login::new(token))))
}

pub(crate) async fn lookup(
    State(state): State<AppState>,
    payload: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(token) = payload.map_err(|e| {
        tracing::debug!("unreadable token segment: {}", e);
        LookupError::NotFound
    })?;

    let token = state.token_controller.resolve(&token)?;

    Ok(Json(response::Token { token }))
}

/// `GET /login/` with no token segment.
pub(crate) async fn lookup_empty(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let token = state.token_controller.resolve("")?;

    Ok(Json(response::Token { token }))
}
