use crate::core::error::EngineError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Job category a search is made for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    /// Advisor or technician, the skilled-labour category
    Technician,
    /// General agricultural worker
    Worker,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Technician => "technician",
            JobType::Worker => "worker",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "technician" => Ok(JobType::Technician),
            "worker" => Ok(JobType::Worker),
            other => Err(EngineError::validation(format!(
                "jobType must be one of: technician, worker (got '{}')",
                other
            ))),
        }
    }
}

/// Geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Reject non-finite or out-of-range coordinates
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(EngineError::validation(format!(
                "latitude must be within [-90, 90] (got {})",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(EngineError::validation(format!(
                "longitude must be within [-180, 180] (got {})",
                self.longitude
            )));
        }
        Ok(())
    }
}

/// Search input for the matching engine
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingCriteria {
    pub job_type: JobType,
    pub max_distance_km: f64,
    /// Where the mission takes place. Without it the distance fee is a flat surcharge.
    pub origin: Option<Location>,
    /// Optional cap on the number of candidates returned
    pub limit: Option<usize>,
}

impl MatchingCriteria {
    pub fn new(job_type: JobType, max_distance_km: f64) -> Self {
        Self {
            job_type,
            max_distance_km,
            origin: None,
            limit: None,
        }
    }

    pub fn with_origin(mut self, origin: Location) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.max_distance_km.is_finite() || self.max_distance_km <= 0.0 {
            return Err(EngineError::validation(format!(
                "maxDistance must be a positive number (got {})",
                self.max_distance_km
            )));
        }
        if let Some(origin) = &self.origin {
            origin.validate()?;
        }
        if self.limit == Some(0) {
            return Err(EngineError::validation("limit must be at least 1"));
        }
        Ok(())
    }
}

/// Price breakdown in FCFA
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    #[serde(rename = "baseRate")]
    pub base_rate: f64,
    #[serde(rename = "distanceFee")]
    pub distance_fee: f64,
    #[serde(rename = "complexityMultiplier")]
    pub complexity_multiplier: f64,
    #[serde(rename = "finalPrice")]
    pub final_price: f64,
}

/// One ranked candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: String,
    pub score: f64,
    #[serde(rename = "skillMatch")]
    pub skill_match: f64,
    #[serde(rename = "distanceScore")]
    pub distance_score: f64,
    #[serde(rename = "availabilityScore")]
    pub availability_score: f64,
    #[serde(rename = "ratingScore")]
    pub rating_score: f64,
    /// Present only when the search carried an origin
    #[serde(rename = "distanceKm", skip_serializing_if = "Option::is_none", default)]
    pub distance_km: Option<f64>,
    pub pricing: Pricing,
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Mobile-money operators available in Burkina Faso
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    OrangeMoney,
    MoovMoney,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentState {
    Pending,
    Completed,
}

/// In-flight mobile-money transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentStatus {
    pub status: PaymentState,
    /// Amount paid by the employer, FCFA
    pub amount: u64,
    /// Platform share, FCFA
    pub commission: u64,
    /// Amount credited to the worker, FCFA
    #[serde(rename = "netAmount")]
    pub net_amount: u64,
    #[serde(rename = "paymentMethod")]
    pub payment_method: PaymentMethod,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(default)]
    pub otp: Option<String>,
    #[serde(rename = "transactionId", default)]
    pub transaction_id: Option<String>,
    #[serde(rename = "initiatedAt")]
    pub initiated_at: DateTime<Utc>,
    #[serde(rename = "completedAt", default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Party to a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractRole {
    Worker,
    Employer,
}

impl FromStr for ContractRole {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "worker" => Ok(ContractRole::Worker),
            "employer" => Ok(ContractRole::Employer),
            other => Err(EngineError::validation(format!(
                "role must be one of: worker, employer (got '{}')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractState {
    Pending,
    Accepted,
    Rejected,
}

/// Bilateral acceptance record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractStatus {
    pub status: ContractState,
    #[serde(rename = "workerAccepted")]
    pub worker_accepted: bool,
    #[serde(rename = "employerAccepted")]
    pub employer_accepted: bool,
    #[serde(rename = "workerSignedAt", default)]
    pub worker_signed_at: Option<DateTime<Utc>>,
    #[serde(rename = "employerSignedAt", default)]
    pub employer_signed_at: Option<DateTime<Utc>>,
    #[serde(rename = "startDate", default)]
    pub start_date: Option<DateTime<Utc>>,
}

impl Default for ContractStatus {
    fn default() -> Self {
        Self {
            status: ContractState::Pending,
            worker_accepted: false,
            employer_accepted: false,
            worker_signed_at: None,
            employer_signed_at: None,
            start_date: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisputeState {
    Open,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisputeStatus {
    pub reason: String,
    pub description: String,
    pub status: DisputeState,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(rename = "resolvedAt", default)]
    pub resolved_at: Option<DateTime<Utc>>,
}
