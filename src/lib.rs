pub(crate) mod controllers;
pub(crate) mod core;
pub(crate) mod routes;
pub(crate) mod token;
pub(crate) mod types;

use std::sync::Arc;

use chrono::Duration;
use config::Config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use crate::core::error::ConfigError as Error;

use crate::core::clock::SystemClock;
use crate::core::config::{create_credentials_map, Args};
use crate::core::state::AppState;

pub async fn run() -> Result<(), Error> {
    let config = Config::builder()
        .add_source(config::File::with_name("tokengate").required(false))
        .add_source(config::Environment::with_prefix("TOKENGATE"))
        .build()
        .map_err(Error::Config)?;

    let config = config.try_deserialize::<Args>().map_err(Error::Config)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.log_level).unwrap_or_default())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let credentials = create_credentials_map(&config.users)?;

    tracing::info!("loaded {} credentials", credentials.len());

    let state = AppState::new(
        credentials,
        &config.secret,
        Duration::try_minutes(config.token_lifetime_minutes).ok_or(Error::InvalidLifetime)?,
        Arc::new(SystemClock),
    )?;

    let app = routes::router::routes(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(Error::IO)?;

    tracing::debug!("listening on port {}", config.port);

    axum::serve(listener, app).await.map_err(Error::IO)?;

    Ok(())
}
