use serde::{Deserialize, Serialize};

use crate::shared::record::ensure;
use crate::shared::{DecodeError, StoreRecord};

/// `referralData`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub invited_count: u32,
    #[serde(default)]
    pub reward_earned: f64,
}

impl Referral {
    pub const REWARD_PER_INVITE: f64 = 100.0;

    /// Code derived from the user's name and id: "PRIYA" + last 4 id chars
    pub fn for_user(name: &str, user_id: &str) -> Self {
        let prefix: String = name
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .take(5)
            .collect::<String>()
            .to_ascii_uppercase();
        let suffix: String = user_id
            .chars()
            .rev()
            .filter(|c| c.is_ascii_alphanumeric())
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect::<String>()
            .to_ascii_uppercase();
        let prefix = if prefix.is_empty() { "FRIEND".to_string() } else { prefix };
        Self {
            code: format!("{}{}", prefix, suffix),
            invited_count: 0,
            reward_earned: 0.0,
        }
    }

    pub fn record_invite(&mut self) {
        self.invited_count = self.invited_count.saturating_add(1);
        self.reward_earned = self.invited_count as f64 * Self::REWARD_PER_INVITE;
    }

    pub fn share_message(&self) -> String {
        format!(
            "Book flights, order food, grab movie tickets and shop in one app. Use my code {} to get ₹{} off your first order!",
            self.code,
            Self::REWARD_PER_INVITE
        )
    }
}

impl StoreRecord for Referral {
    fn validate(&self) -> Result<(), DecodeError> {
        ensure(self.reward_earned.is_finite(), "reward must be a number")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_from_name_and_id() {
        let referral = Referral::for_user("Priya Sharma", "u-7f3a");
        assert_eq!(referral.code, "PRIYA7F3A");
        assert_eq!(Referral::for_user("", "42").code, "FRIEND42");
    }

    #[test]
    fn test_invites_accumulate_reward() {
        let mut referral = Referral::for_user("Ravi", "abcd");
        referral.record_invite();
        referral.record_invite();
        assert_eq!(referral.invited_count, 2);
        assert_eq!(referral.reward_earned, 200.0);
    }

    #[test]
    fn test_invite_count_saturates() {
        let mut referral = Referral {
            code: "ASHA0001".to_string(),
            invited_count: u32::MAX,
            reward_earned: 0.0,
        };
        referral.record_invite();
        assert_eq!(referral.invited_count, u32::MAX);
        assert_eq!(referral.reward_earned, u32::MAX as f64 * Referral::REWARD_PER_INVITE);
    }
}
