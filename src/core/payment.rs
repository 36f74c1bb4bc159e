use crate::core::error::{EngineError, EngineResult};
use crate::models::{PaymentMethod, PaymentState, PaymentStatus};
use chrono::Utc;

/// Length of the mobile-money confirmation code
pub const OTP_LENGTH: usize = 6;

/// Burkina Faso country calling code
const COUNTRY_CODE: &str = "226";

/// Commission applied to every payment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentPolicy {
    /// Platform share of each payment, in [0, 1)
    pub commission_rate: f64,
}

impl Default for PaymentPolicy {
    fn default() -> Self {
        Self {
            commission_rate: 0.10,
        }
    }
}

impl PaymentPolicy {
    /// Split an amount into (commission, net amount for the worker)
    pub fn split(&self, amount: u64) -> (u64, u64) {
        let commission = ((amount as f64) * self.commission_rate).round() as u64;
        let commission = commission.min(amount);
        (commission, amount - commission)
    }

    /// Build a pending payment after validating its inputs
    pub fn initiate(
        &self,
        amount: u64,
        method: PaymentMethod,
        phone_number: &str,
    ) -> EngineResult<PaymentStatus> {
        if amount == 0 {
            return Err(EngineError::validation("amount must be greater than 0 FCFA"));
        }
        let phone_number = normalize_phone_number(phone_number)?;
        let (commission, net_amount) = self.split(amount);

        Ok(PaymentStatus {
            status: PaymentState::Pending,
            amount,
            commission,
            net_amount,
            payment_method: method,
            phone_number,
            otp: None,
            transaction_id: None,
            initiated_at: Utc::now(),
            completed_at: None,
        })
    }
}

/// Confirm a pending payment with its OTP
///
/// The payment is left untouched on any error.
pub fn verify_payment(payment: &mut PaymentStatus, code: &str) -> EngineResult<()> {
    if payment.status != PaymentState::Pending {
        return Err(EngineError::validation("payment is not pending"));
    }
    if code.chars().count() != OTP_LENGTH {
        return Err(EngineError::validation(format!(
            "verification code must be exactly {} characters",
            OTP_LENGTH
        )));
    }

    payment.status = PaymentState::Completed;
    payment.otp = Some(code.to_string());
    payment.transaction_id = Some(format!("TX-{}", uuid::Uuid::new_v4()));
    payment.completed_at = Some(Utc::now());
    Ok(())
}

/// Normalize a Burkina Faso mobile number to `+226XXXXXXXX`
///
/// Accepts 8 local digits with an optional `+226` or `00226` prefix;
/// spaces, dots and dashes are ignored.
pub fn normalize_phone_number(raw: &str) -> EngineResult<String> {
    let compact: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-'))
        .collect();

    let local = compact
        .strip_prefix('+')
        .and_then(|rest| rest.strip_prefix(COUNTRY_CODE))
        .or_else(|| compact.strip_prefix("00").and_then(|rest| rest.strip_prefix(COUNTRY_CODE)))
        .unwrap_or(&compact);

    if local.len() != 8 || !local.chars().all(|c| c.is_ascii_digit()) {
        return Err(EngineError::validation(format!(
            "phone number must be an 8-digit Burkina Faso number (got '{}')",
            raw
        )));
    }

    Ok(format!("+{}{}", COUNTRY_CODE, local))
}
