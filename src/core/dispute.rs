use crate::core::error::{EngineError, EngineResult};
use crate::models::{DisputeState, DisputeStatus};
use chrono::Utc;

/// Open a dispute
pub fn initiate_dispute(reason: &str, description: &str) -> EngineResult<DisputeStatus> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(EngineError::validation("dispute reason is required"));
    }

    Ok(DisputeStatus {
        reason: reason.to_string(),
        description: description.trim().to_string(),
        status: DisputeState::Open,
        created_at: Utc::now(),
        resolution: None,
        resolved_at: None,
    })
}

/// Close an open dispute with a resolution note
pub fn resolve_dispute(dispute: &mut DisputeStatus, resolution: &str) -> EngineResult<()> {
    if dispute.status != DisputeState::Open {
        return Err(EngineError::validation("dispute is already resolved"));
    }

    dispute.status = DisputeState::Resolved;
    dispute.resolution = Some(resolution.trim().to_string());
    dispute.resolved_at = Some(Utc::now());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initiate_dispute() {
        let dispute = initiate_dispute("non-payment", " Mission finished, not paid ").unwrap();

        assert_eq!(dispute.status, DisputeState::Open);
        assert_eq!(dispute.reason, "non-payment");
        assert_eq!(dispute.description, "Mission finished, not paid");
    }

    #[test]
    fn test_empty_reason_rejected() {
        assert!(matches!(
            initiate_dispute("  ", "details"),
            Err(EngineError::Validation(_))
        ));
    }

    #[test]
    fn test_resolve_once() {
        let mut dispute = initiate_dispute("quality", "").unwrap();

        resolve_dispute(&mut dispute, "partial refund").unwrap();
        assert_eq!(dispute.status, DisputeState::Resolved);
        assert_eq!(dispute.resolution.as_deref(), Some("partial refund"));

        assert!(resolve_dispute(&mut dispute, "again").is_err());
    }
}
