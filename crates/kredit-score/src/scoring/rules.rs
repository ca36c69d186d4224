use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::ScoreRule;
use crate::applicant::{
    ApplicantProfile, DeviceType, Education, Gender, HousingStatus, MaritalStatus,
};

/// Ceiling on the self-reported debt ratio for the other-loans bonus.
const OTHER_LOANS_PDN_CEILING: Decimal = dec!(50);

/// One row of the rubric: a predicate over a single attribute and the points it earns.
pub(crate) struct RuleDefinition {
    pub rule: ScoreRule,
    pub label: &'static str,
    pub points: i64,
    pub applies: fn(&ApplicantProfile) -> bool,
}

/// Scoring rubric in evaluation order. The referral bonus scales with the referral count and
/// is applied separately.
pub(crate) static RULES: [RuleDefinition; 11] = [
    RuleDefinition {
        rule: ScoreRule::Age,
        label: "age 35 or older",
        points: 70,
        applies: mature_age,
    },
    RuleDefinition {
        rule: ScoreRule::Gender,
        label: "female applicant",
        points: 20,
        applies: female,
    },
    RuleDefinition {
        rule: ScoreRule::WorkExperience,
        label: "work experience of 24 months or more",
        points: 20,
        applies: established_career,
    },
    RuleDefinition {
        rule: ScoreRule::AddressStability,
        label: "3 or more years at the current address",
        points: 30,
        applies: stable_address,
    },
    RuleDefinition {
        rule: ScoreRule::Housing,
        label: "owns housing outright",
        points: 20,
        applies: owns_home,
    },
    RuleDefinition {
        rule: ScoreRule::Marital,
        label: "married",
        points: 10,
        applies: married,
    },
    RuleDefinition {
        rule: ScoreRule::Education,
        label: "higher education",
        points: 20,
        applies: higher_education,
    },
    RuleDefinition {
        rule: ScoreRule::ClosedLoans,
        label: "3 or more closed loans",
        points: 20,
        applies: repayment_track_record,
    },
    RuleDefinition {
        rule: ScoreRule::OtherLoansManageable,
        label: "other loans with debt ratio at or below 50%",
        points: 30,
        applies: other_loans_manageable,
    },
    RuleDefinition {
        rule: ScoreRule::Region,
        label: "resides in Tashkent or Tashkent region",
        points: 20,
        applies: capital_area,
    },
    RuleDefinition {
        rule: ScoreRule::Device,
        label: "uses an Apple device",
        points: 20,
        applies: apple_device,
    },
];

fn mature_age(profile: &ApplicantProfile) -> bool {
    profile.age.is_some_and(|age| age >= 35)
}

fn female(profile: &ApplicantProfile) -> bool {
    profile.gender == Some(Gender::Female)
}

fn established_career(profile: &ApplicantProfile) -> bool {
    profile
        .work_experience_months
        .is_some_and(|months| months >= 24)
}

fn stable_address(profile: &ApplicantProfile) -> bool {
    profile
        .address_stability_years
        .is_some_and(|years| years >= 3)
}

fn owns_home(profile: &ApplicantProfile) -> bool {
    profile.housing_status == Some(HousingStatus::Own)
}

fn married(profile: &ApplicantProfile) -> bool {
    profile.marital_status == Some(MaritalStatus::Married)
}

fn higher_education(profile: &ApplicantProfile) -> bool {
    profile.education == Some(Education::Higher)
}

fn repayment_track_record(profile: &ApplicantProfile) -> bool {
    profile.closed_loans_count.is_some_and(|count| count >= 3)
}

fn other_loans_manageable(profile: &ApplicantProfile) -> bool {
    profile.has_other_loans()
        && profile
            .pdn_with_other_loans
            .is_some_and(|pdn| pdn <= OTHER_LOANS_PDN_CEILING)
}

fn capital_area(profile: &ApplicantProfile) -> bool {
    profile.region.is_some_and(|region| region.is_capital_area())
}

fn apple_device(profile: &ApplicantProfile) -> bool {
    profile.device_type == Some(DeviceType::Apple)
}

/// Rules matched by `profile`, in rubric order.
pub(crate) fn matched_rules(
    profile: &ApplicantProfile,
) -> impl Iterator<Item = &'static RuleDefinition> + '_ {
    RULES.iter().filter(move |definition| (definition.applies)(profile))
}
