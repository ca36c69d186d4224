use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::limits::{validate_loan_terms, LoanLimits};
use super::PdnError;

/// Loan products offered to applicants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    Microloan,
    Carloan,
}

impl LoanType {
    pub const fn label(self) -> &'static str {
        match self {
            LoanType::Microloan => "microloan",
            LoanType::Carloan => "carloan",
        }
    }

    /// Static bounds for principal (UZS), annual rate (%) and term (months).
    pub const fn limits(self) -> LoanLimits {
        match self {
            LoanType::Microloan => LoanLimits {
                max_principal: dec!(100000000),
                min_rate: dec!(18),
                max_rate: dec!(79),
                min_term_months: 1,
                max_term_months: 36,
            },
            LoanType::Carloan => LoanLimits {
                max_principal: dec!(1000000000),
                min_rate: dec!(4),
                max_rate: dec!(48),
                min_term_months: 6,
                max_term_months: 60,
            },
        }
    }
}

/// Validated loan request. Only constructible through [`LoanTerms::new`], so every instance
/// satisfies the bounds of its loan type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanTerms {
    loan_type: LoanType,
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_months: u32,
}

impl LoanTerms {
    pub fn new(
        loan_type: LoanType,
        principal: Decimal,
        annual_rate_percent: Decimal,
        term_months: u32,
    ) -> Result<Self, PdnError> {
        validate_loan_terms(loan_type, principal, annual_rate_percent, term_months)
            .into_result()?;

        Ok(Self {
            loan_type,
            principal,
            annual_rate_percent,
            term_months,
        })
    }

    pub fn loan_type(&self) -> LoanType {
        self.loan_type
    }

    pub fn principal(&self) -> Decimal {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> Decimal {
        self.annual_rate_percent
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }
}

/// Debt burden severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub const fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Medium => "medium",
            RiskBand::High => "high",
        }
    }
}

/// DTI cut-offs in percent. Below `warning` is low risk, up to and including `danger` is
/// medium, above `danger` is high and not fundable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtiThresholds {
    pub warning: Decimal,
    pub danger: Decimal,
}

impl DtiThresholds {
    pub const STANDARD: DtiThresholds = DtiThresholds {
        warning: dec!(35),
        danger: dec!(50),
    };

    pub fn classify(&self, dti_percent: Decimal) -> RiskBand {
        if dti_percent < self.warning {
            RiskBand::Low
        } else if dti_percent <= self.danger {
            RiskBand::Medium
        } else {
            RiskBand::High
        }
    }

    pub fn is_fundable(&self, dti_percent: Decimal) -> bool {
        dti_percent <= self.danger
    }
}

impl Default for DtiThresholds {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Debt figures derived from a loan request and the applicant's income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtiResult {
    pub monthly_payment: Decimal,
    pub dti_percent: Decimal,
    pub risk_band: RiskBand,
    pub is_fundable: bool,
}
