//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for the
//! REST API. It registers the user resource and health paths together with
//! the inbound schema wrappers, keeping domain types free of framework
//! concerns. The document backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{UserPayload, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User account API",
        description = "HTTP interface for creating, updating, and deleting users."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserPayload, UserResponse, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "users", description = "Operations on the user resource"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
