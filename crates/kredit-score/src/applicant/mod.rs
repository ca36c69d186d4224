//! Applicant snapshot shared by the scoring and field protection components.

pub mod domain;

pub use domain::{
    ApplicantProfile, DeviceType, Education, FieldValue, Gender, HousingStatus, MaritalStatus,
    ProfileField, Region,
};
