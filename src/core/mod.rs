// Core engine exports
pub mod contract;
pub mod dispute;
pub mod distance;
pub mod error;
pub mod matcher;
pub mod payment;
pub mod pricing;
pub mod scoring;
pub mod session;

pub use distance::{calculate_bounding_box, calculate_distance, haversine_distance, is_within_bounding_box};
pub use error::{EngineError, EngineResult};
pub use matcher::{parse_criteria, Matcher};
pub use payment::{normalize_phone_number, PaymentPolicy, OTP_LENGTH};
pub use pricing::{calculate_price, PricingPolicy};
pub use scoring::{draw_sub_scores, SubScoreRanges, SubScores};
pub use session::Session;
