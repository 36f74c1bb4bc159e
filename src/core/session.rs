use crate::core::{
    contract::{accept_contract, reject_contract},
    dispute::{initiate_dispute, resolve_dispute},
    error::{EngineError, EngineResult},
    payment::{verify_payment, PaymentPolicy},
};
use crate::models::{
    ContractRole, ContractStatus, DisputeStatus, PaymentMethod, PaymentStatus,
};
use serde::Serialize;

/// Per-session payment, contract and dispute state
///
/// Each caller owns its own `Session`; nothing here is shared between sessions.
/// Every operation either applies its transition fully or leaves the session
/// as it was.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Session {
    pub payment: Option<PaymentStatus>,
    pub contract: ContractStatus,
    pub dispute: Option<DisputeStatus>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a payment, replacing any previous one
    pub fn initiate_payment(
        &mut self,
        policy: &PaymentPolicy,
        amount: u64,
        method: PaymentMethod,
        phone_number: &str,
    ) -> EngineResult<&PaymentStatus> {
        let payment = policy.initiate(amount, method, phone_number)?;
        tracing::info!(
            "Payment initiated: {} FCFA via {:?} (commission {}, net {})",
            payment.amount,
            payment.payment_method,
            payment.commission,
            payment.net_amount
        );
        Ok(self.payment.insert(payment))
    }

    pub fn verify_payment(&mut self, code: &str) -> EngineResult<&PaymentStatus> {
        let payment = self
            .payment
            .as_mut()
            .ok_or_else(|| EngineError::validation("no payment has been initiated"))?;
        verify_payment(payment, code)?;
        tracing::info!(
            "Payment completed: transaction {}",
            payment.transaction_id.as_deref().unwrap_or_default()
        );
        Ok(payment)
    }

    pub fn accept_contract(&mut self, role: ContractRole) -> EngineResult<&ContractStatus> {
        accept_contract(&mut self.contract, role)?;
        tracing::info!("Contract accepted by {:?}, status {:?}", role, self.contract.status);
        Ok(&self.contract)
    }

    pub fn reject_contract(&mut self, role: ContractRole) -> &ContractStatus {
        reject_contract(&mut self.contract, role);
        tracing::info!("Contract rejected by {:?}", role);
        &self.contract
    }

    /// Open a dispute, overwriting any earlier one
    pub fn initiate_dispute(
        &mut self,
        reason: &str,
        description: &str,
    ) -> EngineResult<&DisputeStatus> {
        let dispute = initiate_dispute(reason, description)?;
        tracing::info!("Dispute opened: {}", dispute.reason);
        Ok(self.dispute.insert(dispute))
    }

    pub fn resolve_dispute(&mut self, resolution: &str) -> EngineResult<&DisputeStatus> {
        let dispute = self
            .dispute
            .as_mut()
            .ok_or_else(|| EngineError::validation("no dispute has been opened"))?;
        resolve_dispute(dispute, resolution)?;
        tracing::info!("Dispute resolved: {}", dispute.reason);
        Ok(dispute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContractState, DisputeState, PaymentState};

    #[test]
    fn test_payment_flow() {
        let mut session = Session::new();
        let policy = PaymentPolicy::default();

        session
            .initiate_payment(&policy, 15_000, PaymentMethod::OrangeMoney, "70123456")
            .unwrap();
        let payment = session.verify_payment("000111").unwrap();

        assert_eq!(payment.status, PaymentState::Completed);
    }

    #[test]
    fn test_verify_without_payment() {
        let mut session = Session::new();
        assert!(matches!(
            session.verify_payment("123456"),
            Err(EngineError::Validation(_))
        ));
    }

    #[test]
    fn test_bad_otp_keeps_pending() {
        let mut session = Session::new();
        session
            .initiate_payment(&PaymentPolicy::default(), 15_000, PaymentMethod::MoovMoney, "70123456")
            .unwrap();

        assert!(session.verify_payment("12").is_err());
        assert_eq!(session.payment.as_ref().unwrap().status, PaymentState::Pending);
    }

    #[test]
    fn test_failed_initiation_keeps_previous_payment() {
        let mut session = Session::new();
        let policy = PaymentPolicy::default();
        session
            .initiate_payment(&policy, 15_000, PaymentMethod::OrangeMoney, "70123456")
            .unwrap();

        assert!(session
            .initiate_payment(&policy, 0, PaymentMethod::OrangeMoney, "70123456")
            .is_err());
        assert_eq!(session.payment.as_ref().unwrap().amount, 15_000);
    }

    #[test]
    fn test_contract_and_dispute() {
        let mut session = Session::new();
        session.accept_contract(ContractRole::Worker).unwrap();
        let contract = session.accept_contract(ContractRole::Employer).unwrap();
        assert_eq!(contract.status, ContractState::Accepted);

        session.initiate_dispute("late arrival", "Worker arrived two days late").unwrap();
        let dispute = session.resolve_dispute("warning issued").unwrap();
        assert_eq!(dispute.status, DisputeState::Resolved);
    }

    #[test]
    fn test_resolve_without_dispute() {
        let mut session = Session::new();
        assert!(session.resolve_dispute("n/a").is_err());
    }
}
