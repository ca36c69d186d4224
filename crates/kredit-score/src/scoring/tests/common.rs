use rust_decimal_macros::dec;

use crate::applicant::{
    ApplicantProfile, DeviceType, Education, Gender, HousingStatus, MaritalStatus, Region,
};

pub(super) fn empty_profile() -> ApplicantProfile {
    ApplicantProfile::default()
}

/// Profile that matches every rubric row.
pub(super) fn strongest_profile() -> ApplicantProfile {
    ApplicantProfile {
        age: Some(40),
        gender: Some(Gender::Female),
        work_experience_months: Some(36),
        address_stability_years: Some(5),
        housing_status: Some(HousingStatus::Own),
        marital_status: Some(MaritalStatus::Married),
        education: Some(Education::Higher),
        closed_loans_count: Some(5),
        region: Some(Region::Tashkent),
        device_type: Some(DeviceType::Apple),
        has_other_loans: Some(true),
        pdn_with_other_loans: Some(dec!(30)),
        ..ApplicantProfile::default()
    }
}

/// Fully answered profile that matches no rubric row.
pub(super) fn weakest_complete_profile() -> ApplicantProfile {
    ApplicantProfile {
        age: Some(22),
        gender: Some(Gender::Male),
        work_experience_months: Some(6),
        address_stability_years: Some(1),
        housing_status: Some(HousingStatus::Rent),
        marital_status: Some(MaritalStatus::Single),
        education: Some(Education::Secondary),
        closed_loans_count: Some(0),
        region: Some(Region::Andijan),
        device_type: Some(DeviceType::Android),
        has_other_loans: Some(false),
        ..ApplicantProfile::default()
    }
}
