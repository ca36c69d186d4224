use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::LoanType;
use super::PdnError;

/// Bounds a loan request must satisfy for its loan type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanLimits {
    pub max_principal: Decimal,
    pub min_rate: Decimal,
    pub max_rate: Decimal,
    pub min_term_months: u32,
    pub max_term_months: u32,
}

/// A single violated bound reported by [`validate_loan_terms`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum LoanTermViolation {
    #[error("principal must be positive")]
    NonPositivePrincipal,
    #[error("principal exceeds the {} maximum of {max}", loan_type.label())]
    PrincipalAboveMaximum { loan_type: LoanType, max: Decimal },
    #[error("annual rate must be between {min}% and {max}%")]
    RateOutOfRange { min: Decimal, max: Decimal },
    #[error("term must be between {min} and {max} months")]
    TermOutOfRange { min: u32, max: u32 },
}

/// Outcome of checking loan terms; lists every violated bound, not only the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanValidation {
    pub valid: bool,
    pub errors: Vec<LoanTermViolation>,
}

impl LoanValidation {
    pub fn into_result(self) -> Result<(), PdnError> {
        if self.valid {
            Ok(())
        } else {
            Err(PdnError::ValidationFailed(self.errors))
        }
    }
}

pub fn validate_loan_terms(
    loan_type: LoanType,
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_months: u32,
) -> LoanValidation {
    let limits = loan_type.limits();
    let mut errors = Vec::new();

    if principal <= Decimal::ZERO {
        errors.push(LoanTermViolation::NonPositivePrincipal);
    } else if principal > limits.max_principal {
        errors.push(LoanTermViolation::PrincipalAboveMaximum {
            loan_type,
            max: limits.max_principal,
        });
    }

    if annual_rate_percent < limits.min_rate || annual_rate_percent > limits.max_rate {
        errors.push(LoanTermViolation::RateOutOfRange {
            min: limits.min_rate,
            max: limits.max_rate,
        });
    }

    if term_months < limits.min_term_months || term_months > limits.max_term_months {
        errors.push(LoanTermViolation::TermOutOfRange {
            min: limits.min_term_months,
            max: limits.max_term_months,
        });
    }

    if !errors.is_empty() {
        debug!(
            loan_type = loan_type.label(),
            violations = errors.len(),
            "loan terms rejected"
        );
    }

    LoanValidation {
        valid: errors.is_empty(),
        errors,
    }
}
