//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;
pub(crate) use state_builders::build_http_state;

use std::future::Future;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use movies_gateway::Trace;
#[cfg(debug_assertions)]
use movies_gateway::doc::ApiDoc;
use movies_gateway::inbound::http::health::{HealthState, live, ready};
use movies_gateway::inbound::http::movies::get_movie;
use movies_gateway::inbound::http::state::HttpState;
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
    let api = web::scope("/v1").service(get_movie);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        http_state,
    } = config;

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "movies gateway listening");
    health_state.mark_ready();
    Ok(server)
}

/// Wait for `signal`, flag the gateway as draining, then stop the server
/// gracefully.
pub async fn drain_on<F>(signal: F, health_state: web::Data<HealthState>, handle: ServerHandle)
where
    F: Future<Output = ()>,
{
    signal.await;
    info!("shutdown requested, draining movies gateway");
    health_state.mark_unhealthy();
    handle.stop(true).await;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use movies_gateway::domain::ports::{FixtureMovieInfoSource, FixtureMovieReviewsSource};

    use super::*;

    #[actix_web::test]
    async fn drain_fails_liveness_and_stops_the_server() {
        let health_state = web::Data::new(HealthState::new());
        let http_state = web::Data::new(HttpState::from_sources(
            Arc::new(FixtureMovieInfoSource),
            Arc::new(FixtureMovieReviewsSource),
        ));
        let bind_addr = "127.0.0.1:0".parse().expect("socket address");
        let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, http_state))
            .expect("server binds");
        let handle = server.handle();
        let running = actix_web::rt::spawn(server);
        assert!(health_state.is_alive());

        drain_on(std::future::ready(()), health_state.clone(), handle).await;

        assert!(!health_state.is_alive());
        running
            .await
            .expect("server task joins")
            .expect("server stops cleanly");
    }
}
