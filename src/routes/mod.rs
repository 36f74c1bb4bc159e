// Route exports
pub mod matches;
pub mod sessions;

use crate::core::{EngineError, Matcher, PaymentPolicy};
use crate::models::ErrorResponse;
use crate::services::{SessionStore, SimulatedBackend};
use actix_web::{web, HttpResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub payment_policy: PaymentPolicy,
    pub sessions: SessionStore,
    pub search_backend: SimulatedBackend,
    pub payment_backend: SimulatedBackend,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(sessions::configure),
    );
}

/// Map an engine error to its JSON response
pub(crate) fn error_response(err: &EngineError) -> HttpResponse {
    let body = |status_code: u16| ErrorResponse {
        error: err.kind().to_string(),
        message: err.to_string(),
        status_code,
    };

    match err {
        EngineError::Validation(_) => {
            tracing::info!("Rejected request: {}", err);
            HttpResponse::BadRequest().json(body(400))
        }
        EngineError::SessionNotFound(_) => HttpResponse::NotFound().json(body(404)),
        EngineError::SimulationFailure(_) => {
            tracing::error!("Backend simulation failed: {}", err);
            HttpResponse::BadGateway().json(body(502))
        }
    }
}

/// Response for payloads rejected by `validator`
pub(crate) fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed: field_errors={:?}", errors);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}
