//! Server construction and wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use backend::ApiDoc;
use backend::domain::UserService;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::users::{create_user, delete_user, update_user};
use backend::outbound::persistence::InMemoryUserRepository;

fn build_http_state() -> HttpState {
    let repository = Arc::new(InMemoryUserRepository::new());
    HttpState::new(Arc::new(UserService::new(repository)))
}

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
        .service(create_user)
        .service(update_user)
        .service(delete_user)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state());
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
