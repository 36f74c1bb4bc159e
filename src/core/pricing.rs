use crate::core::error::{EngineError, EngineResult};
use crate::models::{JobType, Pricing};
use std::ops::Range;

/// Pricing configuration in FCFA
///
/// `per_km_rate` is the explicit distance tariff. The simulated ranges are
/// only used when the engine has no real distance or complexity to work with.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingPolicy {
    pub technician_base_rate: f64,
    pub worker_base_rate: f64,
    pub per_km_rate: f64,
    pub distance_fee_range: Range<f64>,
    pub complexity_range: Range<f64>,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            technician_base_rate: 25_000.0,
            worker_base_rate: 15_000.0,
            per_km_rate: 100.0,
            distance_fee_range: 500.0..1_500.0,
            complexity_range: 1.0..1.5,
        }
    }
}

impl PricingPolicy {
    /// Daily base rate for a job category
    pub fn base_rate(&self, job_type: JobType) -> f64 {
        match job_type {
            JobType::Technician => self.technician_base_rate,
            JobType::Worker => self.worker_base_rate,
        }
    }

    /// Quote a mission of the given category, distance and complexity
    pub fn quote(
        &self,
        job_type: JobType,
        distance_km: f64,
        complexity: f64,
    ) -> EngineResult<Pricing> {
        calculate_price(self.base_rate(job_type), distance_km, complexity, self.per_km_rate)
    }
}

/// Combine a base rate, a distance and a complexity multiplier into a price
///
/// `finalPrice = baseRate × complexity + distance × perKmRate`
pub fn calculate_price(
    base_rate: f64,
    distance_km: f64,
    complexity: f64,
    per_km_rate: f64,
) -> EngineResult<Pricing> {
    ensure_non_negative("baseRate", base_rate)?;
    ensure_non_negative("distance", distance_km)?;
    ensure_non_negative("perKmRate", per_km_rate)?;
    if !complexity.is_finite() || complexity <= 0.0 {
        return Err(EngineError::validation(format!(
            "complexity must be a positive number (got {})",
            complexity
        )));
    }

    Ok(compose_price(base_rate, distance_km * per_km_rate, complexity))
}

/// Assemble a [`Pricing`] from an already computed distance fee
#[inline]
pub fn compose_price(base_rate: f64, distance_fee: f64, complexity_multiplier: f64) -> Pricing {
    Pricing {
        base_rate,
        distance_fee,
        complexity_multiplier,
        final_price: base_rate * complexity_multiplier + distance_fee,
    }
}

fn ensure_non_negative(field: &str, value: f64) -> EngineResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(EngineError::validation(format!(
            "{} must be a non-negative number (got {})",
            field, value
        )));
    }
    Ok(())
}
