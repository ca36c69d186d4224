use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use kredit_score::config::AppConfig;
use kredit_score::error::AppError;
use kredit_score::pdn::assess_with;
use kredit_score::referral::{referral_code, referral_link};
use kredit_score::{
    completion_percentage, field_status, validate_loan_terms, ApplicantProfile, DtiResult,
    FieldStatus, LoanTerms, LoanType, LoanValidation, ProfileField, ScoreBreakdown, ScoreLevel,
    ScoringEngine,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::QuoteArgs;

#[derive(Debug, Serialize)]
pub(crate) struct QuoteResponse {
    pub(crate) loan_type: LoanType,
    pub(crate) validation: LoanValidation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) assessment: Option<DtiResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) score: i32,
    pub(crate) level: ScoreLevel,
    pub(crate) completion_percentage: u8,
    pub(crate) breakdown: ScoreBreakdown,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReferralResponse {
    pub(crate) code: String,
    pub(crate) link: String,
}

/// Validation problems are part of the response rather than a failure, so every violated
/// bound reaches the caller.
pub(crate) fn quote(config: &AppConfig, args: &QuoteArgs) -> QuoteResponse {
    let validation = validate_loan_terms(args.loan_type, args.principal, args.rate, args.term);
    let mut response = QuoteResponse {
        loan_type: args.loan_type,
        validation: validation.clone(),
        assessment: None,
        error: None,
    };

    if !validation.valid {
        return response;
    }

    let outcome = LoanTerms::new(args.loan_type, args.principal, args.rate, args.term)
        .and_then(|terms| {
            assess_with(
                &config.thresholds,
                &terms,
                args.income,
                args.other_payments.unwrap_or(Decimal::ZERO),
            )
        });

    match outcome {
        Ok(assessment) => response.assessment = Some(assessment),
        Err(err) => response.error = Some(err.to_string()),
    }
    response
}

pub(crate) fn score(config: &AppConfig, path: &Path) -> Result<ScoreResponse, AppError> {
    let profile = load_profile(path)?;
    let engine = ScoringEngine::new(config.scoring);
    let breakdown = engine.breakdown(&profile);

    Ok(ScoreResponse {
        score: breakdown.total_score,
        level: ScoreLevel::from_score(breakdown.total_score),
        completion_percentage: completion_percentage(&profile),
        breakdown,
    })
}

pub(crate) fn fields(path: &Path) -> Result<BTreeMap<ProfileField, FieldStatus>, AppError> {
    let profile = load_profile(path)?;
    Ok(field_status(&profile))
}

pub(crate) fn referral(config: &AppConfig, user_id: i64) -> ReferralResponse {
    ReferralResponse {
        code: referral_code(user_id, &config.referral.salt),
        link: referral_link(&config.referral.bot_username, user_id, &config.referral.salt),
    }
}

fn load_profile(path: &Path) -> Result<ApplicantProfile, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
