use tracing::{debug, warn};

use super::{is_field_protected, ProtectionError};
use crate::applicant::{ApplicantProfile, FieldValue, ProfileField};
use crate::scoring::ScoringEngine;

/// Normal edit path for a profile attribute, scored under the standard rubric.
///
/// Writes to a filled protected field are refused; anything else is applied and the stored
/// score is recomputed. Returns the refreshed score.
pub fn apply_edit(
    profile: &mut ApplicantProfile,
    field_name: &str,
    value: FieldValue,
) -> Result<i32, ProtectionError> {
    apply_edit_with(&ScoringEngine::default(), profile, field_name, value)
}

/// [`apply_edit`] with the stored score recomputed by `engine`.
pub fn apply_edit_with(
    engine: &ScoringEngine,
    profile: &mut ApplicantProfile,
    field_name: &str,
    value: FieldValue,
) -> Result<i32, ProtectionError> {
    let field = ProfileField::from_name(field_name)
        .ok_or_else(|| ProtectionError::UnknownField(field_name.to_string()))?;

    if is_field_protected(profile, field) {
        warn!(field = field.name(), "rejected edit of protected field");
        return Err(ProtectionError::FieldProtected { field });
    }

    write_field(profile, field, value)?;
    let score = engine.refresh(profile);
    debug!(field = field.name(), score, "applied profile edit");
    Ok(score)
}

fn write_field(
    profile: &mut ApplicantProfile,
    field: ProfileField,
    value: FieldValue,
) -> Result<(), ProtectionError> {
    match (field, value) {
        (ProfileField::Age, FieldValue::Count(age)) => profile.age = Some(age),
        (ProfileField::Gender, FieldValue::Gender(gender)) => profile.gender = Some(gender),
        (ProfileField::WorkExperienceMonths, FieldValue::Count(months)) => {
            profile.work_experience_months = Some(months)
        }
        (ProfileField::AddressStabilityYears, FieldValue::Count(years)) => {
            profile.address_stability_years = Some(years)
        }
        (ProfileField::HousingStatus, FieldValue::Housing(status)) => {
            profile.housing_status = Some(status)
        }
        (ProfileField::MaritalStatus, FieldValue::Marital(status)) => {
            profile.marital_status = Some(status)
        }
        (ProfileField::Education, FieldValue::Education(education)) => {
            profile.education = Some(education)
        }
        (ProfileField::ClosedLoansCount, FieldValue::Count(count)) => {
            profile.closed_loans_count = Some(count)
        }
        (ProfileField::Region, FieldValue::Region(region)) => profile.region = Some(region),
        (ProfileField::MonthlyIncome, FieldValue::Amount(amount)) => {
            profile.monthly_income = Some(amount)
        }
        (ProfileField::HasOtherLoans, FieldValue::Flag(flag)) => {
            profile.has_other_loans = Some(flag)
        }
        (ProfileField::OtherLoansMonthlyPayment, FieldValue::Amount(amount)) => {
            profile.other_loans_monthly_payment = Some(amount)
        }
        (field, _) => return Err(ProtectionError::TypeMismatch { field }),
    }

    Ok(())
}
