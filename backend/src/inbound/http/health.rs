//! Health endpoints backing orchestrator liveness and readiness probes.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Readiness flag shared with the server bootstrap.
#[derive(Default)]
pub struct HealthState {
    ready: AtomicBool,
}

impl HealthState {
    /// Create a state that starts as not ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service ready to receive traffic.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

fn probe_response(probe_ok: bool) -> HttpResponse {
    let mut response = if probe_ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };

    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Liveness probe. Returns 200 while the process can serve requests at all.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive")
    )
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    probe_response(true)
}

/// Readiness probe. Returns 200 once startup wiring has completed and 503
/// before that.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_ready())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};

    #[actix_web::test]
    async fn readiness_reports_unavailable_until_marked_ready() {
        let state = web::Data::new(HealthState::new());
        let app =
            actix_test::init_service(App::new().app_data(state.clone()).service(ready)).await;

        let before = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/ready")
                .to_request(),
        )
        .await;
        assert_eq!(before.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.mark_ready();
        let after = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/ready")
                .to_request(),
        )
        .await;
        assert_eq!(after.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn liveness_always_reports_ok() {
        let app = actix_test::init_service(App::new().service(live)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/live")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
