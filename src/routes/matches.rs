use crate::core::{calculate_distance, parse_criteria};
use crate::models::{
    DistanceRequest, DistanceResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse,
    JobType, PriceQuoteRequest,
};
use crate::routes::{error_response, validation_failed, AppState};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure search and pricing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/distance", web::post().to(distance))
        .route("/pricing/quote", web::post().to(price_quote));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        active_sessions: state.sessions.len(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "jobType": "technician|worker",
///   "maxDistance": 50,
///   "origin": { "latitude": 12.37, "longitude": -1.52 },
///   "limit": 5
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let criteria = match parse_criteria(
        &req.job_type,
        req.max_distance,
        req.origin,
        req.limit.map(usize::from),
    ) {
        Ok(criteria) => criteria,
        Err(e) => return error_response(&e),
    };

    tracing::info!(
        "Finding matches: jobType={}, maxDistance={}, origin={}",
        criteria.job_type,
        criteria.max_distance_km,
        criteria.origin.is_some()
    );

    let matcher = &state.matcher;
    let result = state
        .search_backend
        .call("find_matches", || matcher.find_matches(&criteria))
        .await;

    match result {
        Ok(matches) => {
            tracing::info!("Returning {} matches for {}", matches.len(), criteria.job_type);
            HttpResponse::Ok().json(FindMatchesResponse {
                total_results: matches.len(),
                matches,
            })
        }
        Err(e) => error_response(&e),
    }
}

/// Great-circle distance endpoint
///
/// POST /api/v1/distance
async fn distance(req: web::Json<DistanceRequest>) -> impl Responder {
    if let Err(e) = req.from.validate().and_then(|_| req.to.validate()) {
        return error_response(&e);
    }

    HttpResponse::Ok().json(DistanceResponse {
        distance_km: calculate_distance(&req.from, &req.to),
    })
}

/// Price quote endpoint
///
/// POST /api/v1/pricing/quote
///
/// Request body:
/// ```json
/// { "jobType": "worker", "distanceKm": 12.5, "complexity": 1.2 }
/// ```
async fn price_quote(
    state: web::Data<AppState>,
    req: web::Json<PriceQuoteRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let quote = req
        .job_type
        .parse::<JobType>()
        .and_then(|job_type| state.matcher.policy().quote(job_type, req.distance_km, req.complexity));

    match quote {
        Ok(pricing) => HttpResponse::Ok().json(pricing),
        Err(e) => error_response(&e),
    }
}
