use crate::models::domain::{Location, PaymentMethod};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to find matches
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "job_type", rename = "jobType")]
    pub job_type: String,
    #[validate(range(exclusive_min = 0.0))]
    #[serde(alias = "max_distance", rename = "maxDistance")]
    pub max_distance: f64,
    #[serde(default)]
    pub origin: Option<Location>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Great-circle distance between two points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceRequest {
    pub from: Location,
    pub to: Location,
}

/// Price quote for a mission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PriceQuoteRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "job_type", rename = "jobType")]
    pub job_type: String,
    #[validate(range(min = 0.0))]
    #[serde(alias = "distance_km", rename = "distanceKm")]
    pub distance_km: f64,
    #[validate(range(exclusive_min = 0.0))]
    #[serde(default = "default_complexity")]
    pub complexity: f64,
}

fn default_complexity() -> f64 {
    1.0
}

/// Request to start a mobile-money payment
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InitiatePaymentRequest {
    #[validate(range(min = 1))]
    pub amount: u64,
    pub method: PaymentMethod,
    #[validate(length(min = 8, max = 20))]
    #[serde(alias = "phone_number", rename = "phoneNumber")]
    pub phone_number: String,
}

/// OTP confirmation; its length is checked by the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPaymentRequest {
    pub code: String,
}

/// Accept or reject a contract on behalf of `worker` or `employer`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractActionRequest {
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InitiateDisputeRequest {
    #[validate(length(min = 1, max = 200))]
    pub reason: String,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResolveDisputeRequest {
    #[validate(length(min = 1, max = 2000))]
    pub resolution: String,
}
