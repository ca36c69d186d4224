//! Debt-to-income and credit scoring engine for consumer loan applications.
//!
//! Everything under [`pdn`], [`scoring`], [`protection`] and [`referral`] is pure computation
//! over explicit inputs. Persistence, conversation flow and presentation belong to callers.

pub mod applicant;
pub mod config;
pub mod error;
pub mod pdn;
pub mod protection;
pub mod referral;
pub mod scoring;
pub mod telemetry;

pub use applicant::{
    ApplicantProfile, DeviceType, Education, FieldValue, Gender, HousingStatus, MaritalStatus,
    ProfileField, Region,
};
pub use pdn::{
    assess, classify_dti, compute_dti, compute_monthly_payment, loan_is_fundable,
    validate_loan_terms, DtiResult, DtiThresholds, LoanLimits, LoanTermViolation, LoanTerms,
    LoanType, LoanValidation, PdnError, RiskBand,
};
pub use protection::{
    apply_edit, apply_edit_with, editable_fields, field_status, is_protected, protected_fields,
    FieldStatus, ProtectionError, ALWAYS_EDITABLE_FIELDS, PROTECTED_FIELDS,
};
pub use scoring::{
    calculate_score, completion_percentage, refresh_score, score_breakdown, score_level,
    ScoreBreakdown, ScoreComponent, ScoreLevel, ScoreRule, ScoringConfig, ScoringEngine,
};
