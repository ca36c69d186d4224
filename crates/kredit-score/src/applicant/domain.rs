use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Education {
    Secondary,
    Vocational,
    IncompleteHigher,
    Higher,
    Postgraduate,
}

/// Housing situation; only [`HousingStatus::Own`] means owned outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HousingStatus {
    Own,
    OwnWithMortgage,
    Rent,
    Relatives,
}

/// Regions of residence in Uzbekistan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Tashkent,
    TashkentRegion,
    Andijan,
    Bukhara,
    Fergana,
    Jizzakh,
    Namangan,
    Navoiy,
    Qashqadaryo,
    Samarkand,
    Sirdaryo,
    Surxondaryo,
    Xorazm,
    Karakalpakstan,
}

impl Region {
    pub const fn is_capital_area(self) -> bool {
        matches!(self, Region::Tashkent | Region::TashkentRegion)
    }
}

/// Device the applicant uses; filled in by the calling layer, never asked directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Apple,
    Android,
    Other,
}

/// Applicant snapshot collected progressively during onboarding.
///
/// Every scoring attribute is optional: an unset attribute simply earns no points. The
/// always-editable financial attributes (`monthly_income`, `has_other_loans`,
/// `other_loans_monthly_payment`) may change at any time, while the rest become locked once
/// filled (see [`crate::protection`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicantProfile {
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub work_experience_months: Option<u32>,
    pub address_stability_years: Option<u32>,
    pub housing_status: Option<HousingStatus>,
    pub marital_status: Option<MaritalStatus>,
    pub education: Option<Education>,
    pub closed_loans_count: Option<u32>,
    pub region: Option<Region>,
    pub device_type: Option<DeviceType>,
    pub referral_count: u32,
    pub monthly_income: Option<Decimal>,
    pub has_other_loans: Option<bool>,
    pub other_loans_monthly_payment: Option<Decimal>,
    /// Debt ratio including other loans, entered separately from any computed application DTI.
    pub pdn_with_other_loans: Option<Decimal>,
    pub current_score: Option<i32>,
}

impl ApplicantProfile {
    pub fn has_other_loans(&self) -> bool {
        self.has_other_loans.unwrap_or(false)
    }

    /// Number of filled attributes among those counted for profile completeness.
    pub fn filled_completion_fields(&self) -> usize {
        [
            self.age.is_some(),
            self.gender.is_some(),
            self.work_experience_months.is_some(),
            self.address_stability_years.is_some(),
            self.housing_status.is_some(),
            self.marital_status.is_some(),
            self.education.is_some(),
            self.closed_loans_count.is_some(),
            self.region.is_some(),
            self.device_type.is_some(),
        ]
        .into_iter()
        .filter(|filled| *filled)
        .count()
    }
}

/// Attributes governed by the edit policy, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Age,
    Gender,
    WorkExperienceMonths,
    AddressStabilityYears,
    HousingStatus,
    MaritalStatus,
    Education,
    ClosedLoansCount,
    Region,
    MonthlyIncome,
    HasOtherLoans,
    OtherLoansMonthlyPayment,
}

impl ProfileField {
    pub const ALL: [ProfileField; 12] = [
        ProfileField::Age,
        ProfileField::Gender,
        ProfileField::WorkExperienceMonths,
        ProfileField::AddressStabilityYears,
        ProfileField::HousingStatus,
        ProfileField::MaritalStatus,
        ProfileField::Education,
        ProfileField::ClosedLoansCount,
        ProfileField::Region,
        ProfileField::MonthlyIncome,
        ProfileField::HasOtherLoans,
        ProfileField::OtherLoansMonthlyPayment,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ProfileField::Age => "age",
            ProfileField::Gender => "gender",
            ProfileField::WorkExperienceMonths => "work_experience_months",
            ProfileField::AddressStabilityYears => "address_stability_years",
            ProfileField::HousingStatus => "housing_status",
            ProfileField::MaritalStatus => "marital_status",
            ProfileField::Education => "education",
            ProfileField::ClosedLoansCount => "closed_loans_count",
            ProfileField::Region => "region",
            ProfileField::MonthlyIncome => "monthly_income",
            ProfileField::HasOtherLoans => "has_other_loans",
            ProfileField::OtherLoansMonthlyPayment => "other_loans_monthly_payment",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Current value of this attribute on `profile`, `None` when unset.
    pub fn value(self, profile: &ApplicantProfile) -> Option<FieldValue> {
        match self {
            ProfileField::Age => profile.age.map(FieldValue::Count),
            ProfileField::Gender => profile.gender.map(FieldValue::Gender),
            ProfileField::WorkExperienceMonths => {
                profile.work_experience_months.map(FieldValue::Count)
            }
            ProfileField::AddressStabilityYears => {
                profile.address_stability_years.map(FieldValue::Count)
            }
            ProfileField::HousingStatus => profile.housing_status.map(FieldValue::Housing),
            ProfileField::MaritalStatus => profile.marital_status.map(FieldValue::Marital),
            ProfileField::Education => profile.education.map(FieldValue::Education),
            ProfileField::ClosedLoansCount => profile.closed_loans_count.map(FieldValue::Count),
            ProfileField::Region => profile.region.map(FieldValue::Region),
            ProfileField::MonthlyIncome => profile.monthly_income.map(FieldValue::Amount),
            ProfileField::HasOtherLoans => profile.has_other_loans.map(FieldValue::Flag),
            ProfileField::OtherLoansMonthlyPayment => {
                profile.other_loans_monthly_payment.map(FieldValue::Amount)
            }
        }
    }
}

/// Typed value of a single profile attribute, used for status reports and edits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Count(u32),
    Amount(Decimal),
    Flag(bool),
    Gender(Gender),
    Housing(HousingStatus),
    Marital(MaritalStatus),
    Education(Education),
    Region(Region),
}
