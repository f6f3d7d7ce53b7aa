//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use authgate::Trace;
#[cfg(debug_assertions)]
use authgate::doc::ApiDoc;
use authgate::inbound::http::auth::{authenticate, index};
use authgate::inbound::http::error::query_error_handler;
use authgate::inbound::http::health::{HealthState, live, ready};
use authgate::inbound::http::state::HttpState;
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .wrap(Trace)
        .service(index)
        .service(authenticate)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the listener and mark the service ready.
///
/// Signal handling is left to [`shutdown_signal`] so liveness can fail before
/// the listener stops.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, login } = config;
    let http_state = web::Data::new(HttpState::new(login));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .disable_signals()
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}

/// Resolve once SIGINT or, on Unix, SIGTERM arrives.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                warn!(error = %e, "SIGINT handler unavailable");
                std::future::pending::<()>().await;
            }
        }
        () = terminate => {}
    }
}

/// Fail liveness probes, then stop accepting connections and let in-flight
/// requests finish.
pub async fn drain(health_state: web::Data<HealthState>, handle: ServerHandle) {
    health_state.mark_unhealthy();
    info!("draining HTTP server");
    handle.stop(true).await;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use authgate::domain::UserStore;
    use authgate::outbound::hashing::BcryptPasswordHasher;
    use authgate::outbound::memory::InMemoryUserRepository;

    use super::*;

    #[actix_web::test]
    async fn drain_fails_liveness_and_stops_the_server() {
        let health_state = web::Data::new(HealthState::new());
        let login = Arc::new(UserStore::new(
            Arc::new(InMemoryUserRepository::default()),
            Arc::new(BcryptPasswordHasher::with_cost(4)),
        ));
        let server = create_server(
            health_state.clone(),
            ServerConfig::new(("127.0.0.1".to_owned(), 0), login),
        )
        .expect("ephemeral port binds");
        let handle = server.handle();
        let running = actix_web::rt::spawn(server);
        assert!(health_state.is_ready());
        assert!(health_state.is_alive());

        drain(health_state.clone(), handle).await;

        assert!(!health_state.is_alive());
        running
            .await
            .expect("server task joins")
            .expect("server stops cleanly");
    }
}
