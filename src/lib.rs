//! Agri-Match - match scoring and dynamic pricing for an agricultural labour marketplace
//!
//! This library ranks simulated worker/technician candidates for a mission,
//! prices each candidate in FCFA, and tracks the per-session payment, contract
//! and dispute state that follows a match.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_distance, calculate_price, EngineError, Matcher, PricingPolicy, Session};
pub use crate::models::{JobType, Location, MatchResult, MatchingCriteria, Pricing};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let ouaga = Location::new(12.3714, -1.5197);
        assert_eq!(calculate_distance(&ouaga, &ouaga), 0.0);

        let criteria = MatchingCriteria::new(JobType::Worker, 50.0);
        assert!(Matcher::default().find_matches(&criteria).is_ok());
    }
}
