//! Amortization and debt-to-income ("PDN") calculations.
//!
//! All money and percentage math runs on [`rust_decimal::Decimal`] and rounds to two decimal
//! places half-up, so identical inputs always give identical outputs.

mod annuity;
mod domain;
mod limits;

pub use annuity::{compute_dti, compute_monthly_payment};
pub use domain::{DtiResult, DtiThresholds, LoanTerms, LoanType, RiskBand};
pub use limits::{validate_loan_terms, LoanLimits, LoanTermViolation, LoanValidation};

use rust_decimal::Decimal;

/// Caller-input failures raised by the calculator. None of them are retryable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PdnError {
    #[error("principal and term must be positive and the rate non-negative")]
    InvalidParameters,
    #[error("monthly income must be positive")]
    InvalidIncome,
    #[error("loan terms violate {} bound(s)", .0.len())]
    ValidationFailed(Vec<LoanTermViolation>),
    #[error("computation exceeds the supported decimal range")]
    ArithmeticOverflow,
}

/// Risk band for `dti_percent` under the standard 35% / 50% cut-offs.
pub fn classify_dti(dti_percent: Decimal) -> RiskBand {
    DtiThresholds::STANDARD.classify(dti_percent)
}

/// Whether a loan may be submitted onward: DTI of at most 50%.
pub fn loan_is_fundable(dti_percent: Decimal) -> bool {
    DtiThresholds::STANDARD.is_fundable(dti_percent)
}

/// Full debt picture for validated terms under the standard thresholds.
pub fn assess(
    terms: &LoanTerms,
    monthly_income: Decimal,
    other_monthly_payments: Decimal,
) -> Result<DtiResult, PdnError> {
    assess_with(
        &DtiThresholds::STANDARD,
        terms,
        monthly_income,
        other_monthly_payments,
    )
}

pub fn assess_with(
    thresholds: &DtiThresholds,
    terms: &LoanTerms,
    monthly_income: Decimal,
    other_monthly_payments: Decimal,
) -> Result<DtiResult, PdnError> {
    let monthly_payment = compute_monthly_payment(
        terms.principal(),
        terms.annual_rate_percent(),
        terms.term_months(),
    )?;
    let dti_percent = compute_dti(monthly_payment, monthly_income, other_monthly_payments)?;

    Ok(DtiResult {
        monthly_payment,
        dti_percent,
        risk_band: thresholds.classify(dti_percent),
        is_fundable: thresholds.is_fundable(dti_percent),
    })
}
