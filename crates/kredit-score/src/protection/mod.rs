//! Field protection policy: scoring answers lock once filled.
//!
//! Protection is derived from the profile's current values on every call. There is no stored
//! lock flag, so a field is protected exactly when it is a protected field and holds a value.

mod edit;

pub use edit::{apply_edit, apply_edit_with};

use std::collections::BTreeMap;

use crate::applicant::{ApplicantProfile, FieldValue, ProfileField};
use serde::{Deserialize, Serialize};

/// Scoring answers that become read-only once set.
pub const PROTECTED_FIELDS: [ProfileField; 9] = [
    ProfileField::Age,
    ProfileField::Gender,
    ProfileField::WorkExperienceMonths,
    ProfileField::AddressStabilityYears,
    ProfileField::HousingStatus,
    ProfileField::MaritalStatus,
    ProfileField::Education,
    ProfileField::ClosedLoansCount,
    ProfileField::Region,
];

/// Financial attributes the applicant may update at any time.
pub const ALWAYS_EDITABLE_FIELDS: [ProfileField; 3] = [
    ProfileField::MonthlyIncome,
    ProfileField::HasOtherLoans,
    ProfileField::OtherLoansMonthlyPayment,
];

/// Rejections raised on the normal edit path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtectionError {
    #[error("field `{}` is already filled and locked", .field.name())]
    FieldProtected { field: ProfileField },
    #[error("unknown profile field `{0}`")]
    UnknownField(String),
    #[error("value does not fit field `{}`", .field.name())]
    TypeMismatch { field: ProfileField },
}

/// Edit-policy view of a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldStatus {
    pub is_protected: bool,
    pub is_filled: bool,
    pub current_value: Option<FieldValue>,
    pub is_always_editable: bool,
}

pub(crate) fn is_always_editable(field: ProfileField) -> bool {
    ALWAYS_EDITABLE_FIELDS.contains(&field)
}

pub(crate) fn is_field_protected(profile: &ApplicantProfile, field: ProfileField) -> bool {
    if is_always_editable(field) {
        return false;
    }

    PROTECTED_FIELDS.contains(&field) && field.value(profile).is_some()
}

/// Whether `field_name` is locked on `profile`. Unknown names are never protected.
pub fn is_protected(profile: &ApplicantProfile, field_name: &str) -> bool {
    ProfileField::from_name(field_name)
        .map(|field| is_field_protected(profile, field))
        .unwrap_or(false)
}

/// Filled protected fields, in policy order.
pub fn protected_fields(profile: &ApplicantProfile) -> Vec<ProfileField> {
    PROTECTED_FIELDS
        .into_iter()
        .filter(|field| is_field_protected(profile, *field))
        .collect()
}

/// Fields open for editing: the always-editable ones, then protected fields still unset.
pub fn editable_fields(profile: &ApplicantProfile) -> Vec<ProfileField> {
    ALWAYS_EDITABLE_FIELDS
        .into_iter()
        .chain(
            PROTECTED_FIELDS
                .into_iter()
                .filter(|field| !is_field_protected(profile, *field)),
        )
        .collect()
}

/// Status of every policy-governed field, rebuilt from the profile on each call.
pub fn field_status(profile: &ApplicantProfile) -> BTreeMap<ProfileField, FieldStatus> {
    PROTECTED_FIELDS
        .into_iter()
        .chain(ALWAYS_EDITABLE_FIELDS)
        .map(|field| {
            let current_value = field.value(profile);
            let status = FieldStatus {
                is_protected: is_field_protected(profile, field),
                is_filled: current_value.is_some(),
                current_value,
                is_always_editable: is_always_editable(field),
            };
            (field, status)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applicant::{DeviceType, Gender};
    use rust_decimal_macros::dec;

    #[test]
    fn empty_field_is_not_protected() {
        let profile = ApplicantProfile::default();
        assert!(!is_protected(&profile, "age"));
    }

    #[test]
    fn filled_protected_field_is_protected() {
        let profile = ApplicantProfile {
            age: Some(30),
            ..ApplicantProfile::default()
        };
        assert!(is_protected(&profile, "age"));
    }

    #[test]
    fn always_editable_field_is_never_protected() {
        let profile = ApplicantProfile {
            monthly_income: Some(dec!(100000)),
            has_other_loans: Some(true),
            other_loans_monthly_payment: Some(dec!(25000)),
            ..ApplicantProfile::default()
        };
        assert!(!is_protected(&profile, "monthly_income"));
        assert!(!is_protected(&profile, "has_other_loans"));
        assert!(!is_protected(&profile, "other_loans_monthly_payment"));
    }

    #[test]
    fn unknown_and_unmanaged_names_are_editable() {
        let profile = ApplicantProfile {
            device_type: Some(DeviceType::Apple),
            referral_count: 3,
            ..ApplicantProfile::default()
        };
        assert!(!is_protected(&profile, "device_type"));
        assert!(!is_protected(&profile, "referral_count"));
        assert!(!is_protected(&profile, "favourite_colour"));
        assert!(!is_protected(&profile, ""));
    }

    #[test]
    fn protection_is_stable_and_ignores_income_updates() {
        let mut profile = ApplicantProfile {
            age: Some(30),
            gender: Some(Gender::Female),
            ..ApplicantProfile::default()
        };
        let before: Vec<bool> = PROTECTED_FIELDS
            .iter()
            .map(|field| is_protected(&profile, field.name()))
            .collect();

        assert!(is_protected(&profile, "age"));
        assert!(is_protected(&profile, "age"));

        profile.monthly_income = Some(dec!(9000000));
        let after: Vec<bool> = PROTECTED_FIELDS
            .iter()
            .map(|field| is_protected(&profile, field.name()))
            .collect();

        assert_eq!(before, after);
    }

    #[test]
    fn protected_fields_lists_filled_answers_only() {
        let empty = ApplicantProfile::default();
        assert!(protected_fields(&empty).is_empty());

        let profile = ApplicantProfile {
            age: Some(30),
            gender: Some(Gender::Female),
            monthly_income: Some(dec!(100000)),
            ..ApplicantProfile::default()
        };
        assert_eq!(
            protected_fields(&profile),
            vec![ProfileField::Age, ProfileField::Gender]
        );
    }

    #[test]
    fn editable_fields_include_unset_answers() {
        let profile = ApplicantProfile {
            age: Some(30),
            monthly_income: Some(dec!(100000)),
            ..ApplicantProfile::default()
        };
        let editable = editable_fields(&profile);

        assert_eq!(&editable[..3], &ALWAYS_EDITABLE_FIELDS[..]);
        assert!(editable.contains(&ProfileField::Gender));
        assert!(!editable.contains(&ProfileField::Age));
        assert_eq!(editable.len(), 11);
    }

    #[test]
    fn field_status_covers_both_sets() {
        let profile = ApplicantProfile {
            age: Some(30),
            monthly_income: Some(dec!(100000)),
            ..ApplicantProfile::default()
        };
        let status = field_status(&profile);

        assert_eq!(status.len(), 12);

        let age = &status[&ProfileField::Age];
        assert!(age.is_protected);
        assert!(age.is_filled);
        assert_eq!(age.current_value, Some(FieldValue::Count(30)));
        assert!(!age.is_always_editable);

        let income = &status[&ProfileField::MonthlyIncome];
        assert!(!income.is_protected);
        assert!(income.is_filled);
        assert!(income.is_always_editable);

        let gender = &status[&ProfileField::Gender];
        assert!(!gender.is_protected);
        assert!(!gender.is_filled);
        assert_eq!(gender.current_value, None);
    }

    #[test]
    fn field_status_reflects_latest_values() {
        let mut profile = ApplicantProfile::default();
        assert!(!field_status(&profile)[&ProfileField::Region].is_protected);

        profile.region = Some(crate::applicant::Region::Namangan);
        assert!(field_status(&profile)[&ProfileField::Region].is_protected);
    }
}
