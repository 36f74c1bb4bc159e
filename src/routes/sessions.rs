use crate::core::{EngineResult, Session};
use crate::models::{
    ContractActionRequest, ContractRole, CreateSessionResponse, InitiateDisputeRequest,
    InitiatePaymentRequest, ResolveDisputeRequest, VerifyPaymentRequest,
};
use crate::routes::{error_response, validation_failed, AppState};
use crate::services::SimulatedBackend;
use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

/// Configure session, payment, contract and dispute routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/sessions", web::post().to(create_session))
        .route("/sessions/{id}", web::get().to(get_session))
        .route("/sessions/{id}", web::delete().to(end_session))
        .route("/sessions/{id}/payment", web::post().to(initiate_payment))
        .route("/sessions/{id}/payment/verify", web::post().to(verify_payment))
        .route("/sessions/{id}/contract/accept", web::post().to(accept_contract))
        .route("/sessions/{id}/contract/reject", web::post().to(reject_contract))
        .route("/sessions/{id}/dispute", web::post().to(initiate_dispute))
        .route("/sessions/{id}/dispute/resolve", web::post().to(resolve_dispute));
}

/// Run one transition against a session under its lock
///
/// The transition is applied only after the backend round trip succeeds.
async fn apply<T, F>(
    state: &AppState,
    id: &Uuid,
    backend: SimulatedBackend,
    name: &str,
    op: F,
) -> HttpResponse
where
    T: Serialize,
    F: FnOnce(&mut Session) -> EngineResult<T>,
{
    let handle = match state.sessions.get(id).await {
        Ok(handle) => handle,
        Err(e) => return error_response(&e),
    };
    let mut session = handle.lock().await;

    match backend.call(name, || op(&mut *session)).await {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => {
            tracing::debug!("{} failed for session {}: {}", name, id, e);
            error_response(&e)
        }
    }
}

/// POST /api/v1/sessions
async fn create_session(state: web::Data<AppState>) -> impl Responder {
    let session_id = state.sessions.create().await;
    HttpResponse::Created().json(CreateSessionResponse { session_id })
}

/// GET /api/v1/sessions/{id}
async fn get_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.sessions.snapshot(&path).await {
        Ok(session) => HttpResponse::Ok().json(session),
        Err(e) => error_response(&e),
    }
}

/// DELETE /api/v1/sessions/{id}
async fn end_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.sessions.remove(&path).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

/// POST /api/v1/sessions/{id}/payment
///
/// Request body:
/// ```json
/// { "amount": 15000, "method": "orange_money", "phoneNumber": "+226 70 12 34 56" }
/// ```
async fn initiate_payment(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<InitiatePaymentRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let policy = state.payment_policy;
    apply(&state, &path, state.payment_backend, "initiate_payment", |session| {
        session
            .initiate_payment(&policy, req.amount, req.method, &req.phone_number)
            .cloned()
    })
    .await
}

/// POST /api/v1/sessions/{id}/payment/verify
async fn verify_payment(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<VerifyPaymentRequest>,
) -> impl Responder {
    apply(&state, &path, state.payment_backend, "verify_payment", |session| {
        session.verify_payment(&req.code).cloned()
    })
    .await
}

/// POST /api/v1/sessions/{id}/contract/accept
async fn accept_contract(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<ContractActionRequest>,
) -> impl Responder {
    let role = match req.role.parse::<ContractRole>() {
        Ok(role) => role,
        Err(e) => return error_response(&e),
    };

    apply(&state, &path, SimulatedBackend::instant(), "accept_contract", |session| {
        session.accept_contract(role).cloned()
    })
    .await
}

/// POST /api/v1/sessions/{id}/contract/reject
async fn reject_contract(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<ContractActionRequest>,
) -> impl Responder {
    let role = match req.role.parse::<ContractRole>() {
        Ok(role) => role,
        Err(e) => return error_response(&e),
    };

    apply(&state, &path, SimulatedBackend::instant(), "reject_contract", |session| {
        Ok(session.reject_contract(role).clone())
    })
    .await
}

/// POST /api/v1/sessions/{id}/dispute
async fn initiate_dispute(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<InitiateDisputeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    apply(&state, &path, SimulatedBackend::instant(), "initiate_dispute", |session| {
        session.initiate_dispute(&req.reason, &req.description).cloned()
    })
    .await
}

/// POST /api/v1/sessions/{id}/dispute/resolve
async fn resolve_dispute(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<ResolveDisputeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    apply(&state, &path, SimulatedBackend::instant(), "resolve_dispute", |session| {
        session.resolve_dispute(&req.resolution).cloned()
    })
    .await
}
