use super::common::*;
use crate::applicant::{ApplicantProfile, Gender};
use crate::scoring::{calculate_score, score_breakdown, ScoreRule};

#[test]
fn breakdown_itemizes_matched_rules_and_referrals() {
    let profile = ApplicantProfile {
        age: Some(40),
        gender: Some(Gender::Female),
        referral_count: 2,
        ..empty_profile()
    };

    let breakdown = score_breakdown(&profile);

    assert_eq!(breakdown.base_score, 600);
    assert_eq!(breakdown.referral_bonus, 40);
    assert_eq!(breakdown.total_score, 730);

    let rules: Vec<ScoreRule> = breakdown
        .components
        .iter()
        .map(|component| component.rule)
        .collect();
    assert_eq!(
        rules,
        vec![ScoreRule::Age, ScoreRule::Gender, ScoreRule::Referral]
    );

    let age = &breakdown.components[0];
    assert_eq!(age.points, 70);
    assert!(age.rule_name.contains("35"));

    let referral = &breakdown.components[2];
    assert_eq!(referral.points, 40);
    assert_eq!(referral.rule_name, "referrals (2)");
}

#[test]
fn breakdown_of_empty_profile_has_no_components() {
    let breakdown = score_breakdown(&empty_profile());

    assert!(breakdown.components.is_empty());
    assert_eq!(breakdown.referral_bonus, 0);
    assert_eq!(breakdown.total_score, 600);
}

#[test]
fn breakdown_follows_rubric_order() {
    let breakdown = score_breakdown(&strongest_profile());

    let rules: Vec<ScoreRule> = breakdown
        .components
        .iter()
        .map(|component| component.rule)
        .collect();
    assert_eq!(
        rules,
        vec![
            ScoreRule::Age,
            ScoreRule::Gender,
            ScoreRule::WorkExperience,
            ScoreRule::AddressStability,
            ScoreRule::Housing,
            ScoreRule::Marital,
            ScoreRule::Education,
            ScoreRule::ClosedLoans,
            ScoreRule::OtherLoansManageable,
            ScoreRule::Region,
            ScoreRule::Device,
        ]
    );

    let points: i64 = breakdown.components.iter().map(|c| c.points).sum();
    assert_eq!(points, 280);
    assert_eq!(breakdown.total_score, 880);
}

#[test]
fn breakdown_total_is_clamped_like_the_score() {
    let mut profile = strongest_profile();
    profile.referral_count = 10;

    let breakdown = score_breakdown(&profile);
    let raw: i64 = i64::from(breakdown.base_score)
        + breakdown.components.iter().map(|c| c.points).sum::<i64>();

    assert_eq!(raw, 1080);
    assert_eq!(breakdown.referral_bonus, 200);
    assert_eq!(breakdown.total_score, 900);
    assert_eq!(breakdown.total_score, calculate_score(&profile));
}
