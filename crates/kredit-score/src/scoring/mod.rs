//! Rule-weighted credit score aggregation.

mod config;
mod rules;

#[cfg(test)]
mod tests;

pub use config::ScoringConfig;

use crate::applicant::ApplicantProfile;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of attributes counted towards profile completeness.
const COMPLETION_FIELD_COUNT: usize = 10;

/// Identifies the rubric row that produced a score component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRule {
    Age,
    Gender,
    WorkExperience,
    AddressStability,
    Housing,
    Marital,
    Education,
    ClosedLoans,
    OtherLoansManageable,
    Region,
    Device,
    Referral,
}

/// Matched rule and the points it contributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: ScoreRule,
    pub rule_name: String,
    pub points: i64,
}

/// Itemized score for display and audits. Never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base_score: i32,
    pub components: Vec<ScoreComponent>,
    pub referral_bonus: i64,
    pub total_score: i32,
}

/// Qualitative bucket for a score, checked from the top down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLevel {
    Excellent,
    Good,
    Average,
    BelowAverage,
    Low,
}

impl ScoreLevel {
    pub const fn from_score(score: i32) -> Self {
        if score >= 800 {
            ScoreLevel::Excellent
        } else if score >= 700 {
            ScoreLevel::Good
        } else if score >= 600 {
            ScoreLevel::Average
        } else if score >= 500 {
            ScoreLevel::BelowAverage
        } else {
            ScoreLevel::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreLevel::Excellent => "excellent",
            ScoreLevel::Good => "good",
            ScoreLevel::Average => "average",
            ScoreLevel::BelowAverage => "below_average",
            ScoreLevel::Low => "low",
        }
    }
}

/// Stateless evaluator that applies the rubric to a profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, profile: &ApplicantProfile) -> i32 {
        let rule_points: i64 = rules::matched_rules(profile)
            .map(|definition| definition.points)
            .sum();
        let score = self.clamp(rule_points + self.referral_bonus(profile));

        debug!(score, rule_points, referrals = profile.referral_count, "scored profile");
        score
    }

    pub fn breakdown(&self, profile: &ApplicantProfile) -> ScoreBreakdown {
        let mut components: Vec<ScoreComponent> = rules::matched_rules(profile)
            .map(|definition| ScoreComponent {
                rule: definition.rule,
                rule_name: definition.label.to_string(),
                points: definition.points,
            })
            .collect();

        let referral_bonus = self.referral_bonus(profile);
        if profile.referral_count > 0 {
            components.push(ScoreComponent {
                rule: ScoreRule::Referral,
                rule_name: format!("referrals ({})", profile.referral_count),
                points: referral_bonus,
            });
        }

        ScoreBreakdown {
            base_score: self.config.base_score,
            components,
            referral_bonus,
            total_score: self.score(profile),
        }
    }

    /// Recomputes the stored score after an input changed and returns it.
    pub fn refresh(&self, profile: &mut ApplicantProfile) -> i32 {
        let score = self.score(profile);
        profile.current_score = Some(score);
        score
    }

    fn referral_bonus(&self, profile: &ApplicantProfile) -> i64 {
        i64::from(profile.referral_count) * i64::from(self.config.referral_bonus_points)
    }

    fn clamp(&self, points: i64) -> i32 {
        let raw = i64::from(self.config.base_score) + points;
        let bounded = raw
            .max(i64::from(self.config.min_score))
            .min(i64::from(self.config.max_score));
        // Bounded by i32 limits, so the conversion cannot fail.
        i32::try_from(bounded).unwrap_or(self.config.max_score)
    }
}

/// Score under the standard rubric: `clamp(600 + matched points + 20 * referrals, 300, 900)`.
pub fn calculate_score(profile: &ApplicantProfile) -> i32 {
    ScoringEngine::default().score(profile)
}

pub fn score_breakdown(profile: &ApplicantProfile) -> ScoreBreakdown {
    ScoringEngine::default().breakdown(profile)
}

pub fn score_level(score: i32) -> ScoreLevel {
    ScoreLevel::from_score(score)
}

/// Share of the ten completeness attributes that are filled, truncated to a whole percent.
/// Income and referrals do not count.
pub fn completion_percentage(profile: &ApplicantProfile) -> u8 {
    let filled = profile.filled_completion_fields();
    // At most 100 by construction.
    u8::try_from(filled * 100 / COMPLETION_FIELD_COUNT).unwrap_or(100)
}

/// [`ScoringEngine::refresh`] under the standard rubric.
pub fn refresh_score(profile: &mut ApplicantProfile) -> i32 {
    ScoringEngine::default().refresh(profile)
}
