// Service exports
pub mod gateway;
pub mod sessions;

pub use gateway::SimulatedBackend;
pub use sessions::{SessionHandle, SessionStore};
