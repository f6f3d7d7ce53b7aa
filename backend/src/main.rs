//! Server entry-point: loads settings, wires the user store and serves HTTP.

mod server;

use std::io;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use authgate::domain::UserStore;
use authgate::inbound::http::health::HealthState;
use authgate::outbound::connect_user_repository;
use authgate::outbound::hashing::BcryptPasswordHasher;
use authgate::settings::ServerSettings;
use server::{ServerConfig, create_server, drain, shutdown_signal};

#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;

    let repository = connect_user_repository(settings.database_url())
        .await
        .map_err(|e| io::Error::other(format!("failed to prepare user store: {e}")))?;
    let store = UserStore::new(repository, Arc::new(BcryptPasswordHasher::default()));

    let bind_addr = settings.bind_addr();
    info!(host = %bind_addr.0, port = bind_addr.1, "starting authgate");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(bind_addr, Arc::new(store)),
    )?;

    let handle = server.handle();
    actix_web::rt::spawn(async move {
        shutdown_signal().await;
        drain(health_state, handle).await;
    });
    server.await
}
