use crate::core::error::{EngineError, EngineResult};
use crate::models::{ContractRole, ContractState, ContractStatus};
use chrono::Utc;

/// Record one party's acceptance
///
/// The contract only becomes `accepted`, and gets its start date, once both
/// parties have signed. A rejected contract cannot be accepted again.
pub fn accept_contract(contract: &mut ContractStatus, role: ContractRole) -> EngineResult<()> {
    if contract.status == ContractState::Rejected {
        return Err(EngineError::validation("contract has been rejected"));
    }

    let now = Utc::now();
    match role {
        ContractRole::Worker => {
            contract.worker_accepted = true;
            contract.worker_signed_at = Some(now);
        }
        ContractRole::Employer => {
            contract.employer_accepted = true;
            contract.employer_signed_at = Some(now);
        }
    }

    if contract.worker_accepted
        && contract.employer_accepted
        && contract.status != ContractState::Accepted
    {
        contract.status = ContractState::Accepted;
        contract.start_date = Some(now);
    }
    Ok(())
}

/// Reject the contract on behalf of one party
pub fn reject_contract(contract: &mut ContractStatus, role: ContractRole) {
    let now = Utc::now();
    match role {
        ContractRole::Worker => contract.worker_signed_at = Some(now),
        ContractRole::Employer => contract.employer_signed_at = Some(now),
    }
    contract.status = ContractState::Rejected;
}
