pub mod card;
pub mod error;
pub mod game;

use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

pub use card::{Card, Rank, Suit};
pub use error::GameError;
pub use game::bank::{BankLedger, LedgerStats};
pub use game::hand::Hand;
pub use game::shoe::Shoe;
pub use game::{
    Banner, Display, Input, Outcome, Question, Round, RoundOutcome, RoundPhase, Seat, Session,
    SessionPhase,
};

/// Table options for one session.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub starting_bank: i64,
    /// Where the cut card sits, as a proportion of the 52-card shoe.
    pub cut_card_proportion: f64,
    pub shoe_policy: ShoePolicy,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            starting_bank: 1000,
            cut_card_proportion: 0.5,
            shoe_policy: ShoePolicy::RestockAtCutCard,
        }
    }
}

/// What happens to the shoe as rounds consume it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize_enum_str, Deserialize_enum_str)]
pub enum ShoePolicy {
    /// Rebuild and reshuffle the shoe between rounds once the cut card has
    /// been passed.
    RestockAtCutCard,
    /// Play the whole session from one shoe; a long session can exhaust it
    /// and abort the round with `EmptyShoe`.
    SingleShoe,
}

/// A player decision during the player turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stand,
}

impl std::str::FromStr for Decision {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "hit" => Ok(Decision::Hit),
            "s" | "stand" => Ok(Decision::Stand),
            _ => Err(GameError::InvalidChoice {
                token: s.trim().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_parses_short_and_long_tokens() {
        assert_eq!("h".parse::<Decision>().unwrap(), Decision::Hit);
        assert_eq!("HIT".parse::<Decision>().unwrap(), Decision::Hit);
        assert_eq!(" s ".parse::<Decision>().unwrap(), Decision::Stand);
        assert_eq!("stand".parse::<Decision>().unwrap(), Decision::Stand);
    }

    #[test]
    fn unknown_decision_token_is_rejected() {
        let err = "double".parse::<Decision>().unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidChoice {
                token: String::from("double")
            }
        );
    }

    #[test]
    fn shoe_policy_parses_from_config_strings() {
        let policy: ShoePolicy = "RestockAtCutCard".parse().unwrap();
        assert_eq!(policy, ShoePolicy::RestockAtCutCard);
        let policy: ShoePolicy = "SingleShoe".parse().unwrap();
        assert_eq!(policy, ShoePolicy::SingleShoe);
        assert!("NoSuchPolicy".parse::<ShoePolicy>().is_err());
    }
}
