use std::env;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::pdn::DtiThresholds;
use crate::scoring::ScoringConfig;

const DEFAULT_REFERRAL_SALT: &str = "kreditscore_referral_salt";
const DEFAULT_BOT_USERNAME: &str = "KreditScoreBot";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the engine and its callers.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringConfig,
    pub thresholds: DtiThresholds,
    pub referral: ReferralConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let defaults = ScoringConfig::STANDARD;
        let scoring = ScoringConfig {
            base_score: parse_var("SCORING_BASE", defaults.base_score)?,
            min_score: parse_var("SCORING_MIN", defaults.min_score)?,
            max_score: parse_var("SCORING_MAX", defaults.max_score)?,
            referral_bonus_points: parse_var(
                "REFERRAL_BONUS_POINTS",
                defaults.referral_bonus_points,
            )?,
        };
        if scoring.min_score > scoring.max_score
            || scoring.base_score < scoring.min_score
            || scoring.base_score > scoring.max_score
        {
            return Err(ConfigError::InconsistentScoring {
                base: scoring.base_score,
                min: scoring.min_score,
                max: scoring.max_score,
            });
        }
        if scoring.referral_bonus_points < 0 {
            return Err(ConfigError::NegativeReferralBonus(scoring.referral_bonus_points));
        }

        let thresholds = DtiThresholds {
            warning: parse_var("PDN_WARNING_THRESHOLD", DtiThresholds::STANDARD.warning)?,
            danger: parse_var("PDN_DANGER_THRESHOLD", DtiThresholds::STANDARD.danger)?,
        };
        if thresholds.warning > thresholds.danger {
            return Err(ConfigError::InconsistentThresholds {
                warning: thresholds.warning,
                danger: thresholds.danger,
            });
        }

        let referral = ReferralConfig {
            salt: env::var("REFERRAL_SALT").unwrap_or_else(|_| DEFAULT_REFERRAL_SALT.to_string()),
            bot_username: env::var("BOT_USERNAME")
                .unwrap_or_else(|_| DEFAULT_BOT_USERNAME.to_string()),
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            scoring,
            thresholds,
            referral,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Settings for referral code derivation and deep links.
#[derive(Debug, Clone)]
pub struct ReferralConfig {
    pub salt: String,
    pub bot_username: String,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
    InconsistentScoring { base: i32, min: i32, max: i32 },
    NegativeReferralBonus(i32),
    InconsistentThresholds { warning: Decimal, danger: Decimal },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a number, got '{value}'")
            }
            ConfigError::InconsistentScoring { base, min, max } => write!(
                f,
                "scoring bounds must satisfy min <= base <= max (min {min}, base {base}, max {max})"
            ),
            ConfigError::NegativeReferralBonus(points) => {
                write!(f, "REFERRAL_BONUS_POINTS must not be negative, got {points}")
            }
            ConfigError::InconsistentThresholds { warning, danger } => write!(
                f,
                "PDN warning threshold {warning} must not exceed danger threshold {danger}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
