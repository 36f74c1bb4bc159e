// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BoundingBox, ContractRole, ContractState, ContractStatus, DisputeState, DisputeStatus, JobType,
    Location, MatchResult, MatchingCriteria, PaymentMethod, PaymentState, PaymentStatus, Pricing,
};
pub use requests::{
    ContractActionRequest, DistanceRequest, FindMatchesRequest, InitiateDisputeRequest,
    InitiatePaymentRequest, PriceQuoteRequest, ResolveDisputeRequest, VerifyPaymentRequest,
};
pub use responses::{
    CreateSessionResponse, DistanceResponse, ErrorResponse, FindMatchesResponse, HealthResponse,
};
