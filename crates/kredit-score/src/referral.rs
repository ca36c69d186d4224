//! Referral codes carried in bot deep links.
//!
//! A code is the first eight hex characters of `sha256("{user_id}_{salt}")`, so it can be
//! recomputed for any user without storing it.

use sha2::{Digest, Sha256};

pub const CODE_LENGTH: usize = 8;
pub const DEEPLINK_PREFIX: &str = "ref_";

pub fn referral_code(user_id: i64, salt: &str) -> String {
    let digest = Sha256::digest(format!("{user_id}_{salt}").as_bytes());
    let mut code = hex::encode(digest);
    code.truncate(CODE_LENGTH);
    code
}

/// Telegram deep link that starts the bot with the user's referral code.
pub fn referral_link(bot_username: &str, user_id: i64, salt: &str) -> String {
    let bot = bot_username.trim_start_matches('@');
    format!(
        "https://t.me/{bot}?start={DEEPLINK_PREFIX}{}",
        referral_code(user_id, salt)
    )
}

/// Extracts the code from a `/start` parameter; `None` unless it carries the referral prefix.
pub fn parse_referral_code(start_param: &str) -> Option<&str> {
    start_param.strip_prefix(DEEPLINK_PREFIX)
}

pub fn is_valid_referral_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.chars().all(|c| c.is_ascii_hexdigit())
}

/// Resolves a code back to its owner among `candidates`, refusing self-referrals.
pub fn find_referrer<I>(code: &str, new_user_id: i64, salt: &str, candidates: I) -> Option<i64>
where
    I: IntoIterator<Item = i64>,
{
    if !is_valid_referral_code(code) {
        return None;
    }

    candidates
        .into_iter()
        .filter(|candidate| *candidate != new_user_id)
        .find(|candidate| referral_code(*candidate, salt) == code)
}
