//! User resource HTTP handlers.
//!
//! ```text
//! POST /users {"name":"Alice","email":"alice@example.com","password":"secret123"}
//! PATCH /users/{id}
//! DELETE /users/{id}
//! ```
//!
//! Handlers translate between the wire shapes and the domain port; business
//! rules live behind [`HttpState::users`].

use actix_web::{HttpResponse, delete, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{User, UserDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request payload carrying a user's mutable fields.
///
/// Shared by create and update. All three fields are required; an absent or
/// blank value fails validation with a field-level error rather than meaning
/// "leave unchanged".
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UserPayload {
    #[schema(example = "Alice")]
    pub name: Option<String>,
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    #[schema(example = "secret123")]
    pub password: Option<String>,
}

impl From<UserPayload> for UserDraft {
    fn from(value: UserPayload) -> Self {
        let UserPayload {
            name,
            email,
            password,
        } = value;
        Self {
            name,
            email,
            password,
        }
    }
}

/// Response payload for a persisted user.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "secret123")]
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id().value(),
            name: value.name().to_string(),
            email: value.email().to_string(),
            password: value.password().as_ref().to_owned(),
        }
    }
}

/// Create a user.
///
/// The payload is validated before the service runs so an invalid request
/// causes no repository traffic at all.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let profile = UserDraft::from(payload.into_inner()).validate()?;
    let created = state.users.create_user(profile).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(created)))
}

/// Replace the mutable fields of an existing user.
///
/// The identifier comes from the path, never the body. An unknown identifier
/// answers 404 even when the body is also invalid; the lookup runs first.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    request_body = UserPayload,
    params(
        ("id" = i64, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<UserResponse>> {
    let updated = state
        .users
        .update_user(UserId::new(id.into_inner()), payload.into_inner().into())
        .await?;
    Ok(web::Json(UserResponse::from(updated)))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = i64, Path, description = "User identifier")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(state: web::Data<HttpState>, id: web::Path<i64>) -> ApiResult<HttpResponse> {
    state
        .users
        .delete_user(UserId::new(id.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::UserService;
    use crate::outbound::persistence::InMemoryUserRepository;

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let repository = Arc::new(InMemoryUserRepository::new());
        let state = HttpState::new(Arc::new(UserService::new(repository)));
        App::new()
            .app_data(web::Data::new(state))
            .service(create_user)
            .service(update_user)
            .service(delete_user)
    }

    fn alice() -> Value {
        json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "secret123",
        })
    }

    fn bob() -> Value {
        json!({
            "name": "Bob",
            "email": "bob@example.com",
            "password": "newpass1",
        })
    }

    async fn read_json(response: actix_web::dev::ServiceResponse) -> Value {
        let body = actix_test::read_body(response).await;
        serde_json::from_slice(&body).expect("JSON body")
    }

    #[actix_web::test]
    async fn create_returns_created_user_with_assigned_identifier() {
        let app = actix_test::init_service(test_app()).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/users")
                .set_json(alice())
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let value = read_json(response).await;
        assert_eq!(value.get("id"), Some(&json!(1)));
        assert_eq!(value.get("name"), Some(&json!("Alice")));
        assert_eq!(value.get("email"), Some(&json!("alice@example.com")));
        assert_eq!(value.get("password"), Some(&json!("secret123")));
    }

    #[actix_web::test]
    async fn create_without_name_reports_the_field_and_writes_nothing() {
        let app = actix_test::init_service(test_app()).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/users")
                .set_json(json!({
                    "email": "alice@example.com",
                    "password": "secret123",
                }))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value = read_json(response).await;
        assert_eq!(value.get("code"), Some(&json!("invalid_request")));
        assert_eq!(
            value.get("details").and_then(|d| d.get("field")),
            Some(&json!("name"))
        );

        // The rejected request must not have consumed an identifier.
        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/users")
                .set_json(alice())
                .to_request(),
        )
        .await;
        assert_eq!(read_json(created).await.get("id"), Some(&json!(1)));
    }

    #[rstest]
    #[case(json!({ "name": "Alice", "email": " ", "password": "secret123" }), "email", "blank_field")]
    #[case(json!({ "name": "Alice", "email": "alice.example.com", "password": "secret123" }), "email", "malformed_email")]
    #[case(json!({ "name": "Alice", "email": "alice@example.com", "password": "" }), "password", "blank_field")]
    #[actix_web::test]
    async fn create_rejects_malformed_fields_with_details(
        #[case] payload: Value,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let app = actix_test::init_service(test_app()).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/users")
                .set_json(payload)
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let details = read_json(response)
            .await
            .get("details")
            .cloned()
            .expect("details present");
        assert_eq!(details.get("field"), Some(&json!(field)));
        assert_eq!(details.get("code"), Some(&json!(code)));
    }

    #[actix_web::test]
    async fn update_replaces_every_mutable_field_and_keeps_the_identifier() {
        let app = actix_test::init_service(test_app()).await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/users")
                .set_json(alice())
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::patch()
                .uri("/users/1")
                .set_json(bob())
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let value = read_json(response).await;
        assert_eq!(value.get("id"), Some(&json!(1)));
        assert_eq!(value.get("name"), Some(&json!("Bob")));
        assert_eq!(value.get("email"), Some(&json!("bob@example.com")));
        assert_eq!(value.get("password"), Some(&json!("newpass1")));
    }

    #[actix_web::test]
    async fn update_of_unknown_identifier_answers_not_found() {
        let app = actix_test::init_service(test_app()).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::patch()
                .uri("/users/100")
                .set_json(bob())
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let value = read_json(response).await;
        assert_eq!(value.get("code"), Some(&json!("not_found")));
        assert_eq!(
            value.get("details").and_then(|d| d.get("id")),
            Some(&json!(100))
        );
    }

    #[actix_web::test]
    async fn update_of_unknown_identifier_beats_body_validation() {
        let app = actix_test::init_service(test_app()).await;

        // The empty body would fail validation; the missing id must win.
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::patch()
                .uri("/users/100")
                .set_json(json!({}))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn update_with_missing_field_reports_the_field() {
        let app = actix_test::init_service(test_app()).await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/users")
                .set_json(alice())
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::patch()
                .uri("/users/1")
                .set_json(json!({ "email": "bob@example.com", "password": "newpass1" }))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value = read_json(response).await;
        assert_eq!(
            value.get("details").and_then(|d| d.get("field")),
            Some(&json!("name"))
        );
    }

    #[actix_web::test]
    async fn delete_answers_no_content_and_makes_the_user_unreachable() {
        let app = actix_test::init_service(test_app()).await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/users")
                .set_json(alice())
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/users/1")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let body = actix_test::read_body(response).await;
        assert!(body.is_empty(), "delete response carries no body");

        let repeat = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/users/1")
                .to_request(),
        )
        .await;
        assert_eq!(repeat.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn delete_of_unknown_identifier_answers_not_found() {
        let app = actix_test::init_service(test_app()).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/users/100")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let value = read_json(response).await;
        assert_eq!(value.get("code"), Some(&json!("not_found")));
    }
}
