use crate::error::GameError;
use serde::{Deserialize, Serialize};

/// Cumulative round counters for one bank lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub draws: u32,
}

impl LedgerStats {
    /// Percentage of played rounds won. None until a round has been played.
    pub fn win_rate(&self) -> Option<f64> {
        if self.played == 0 {
            None
        } else {
            Some(self.won as f64 / self.played as f64 * 100.0)
        }
    }
}

/// Stores the bank balance, the active bet and the round counters, and
/// checks the betting precondition. Settlement arithmetic is applied by the
/// round controller; the ledger holds no game logic of its own.
#[derive(Debug, Clone)]
pub struct BankLedger {
    starting_balance: i64,
    balance: i64,
    bet: Option<i64>,
    stats: LedgerStats,
}

impl BankLedger {
    pub fn new(starting_balance: i64) -> BankLedger {
        BankLedger {
            starting_balance,
            balance: starting_balance,
            bet: None,
            stats: LedgerStats::default(),
        }
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// The bet of the round in progress, if one has been placed.
    pub fn bet(&self) -> Option<i64> {
        self.bet
    }

    pub fn stats(&self) -> LedgerStats {
        self.stats
    }

    /// A new round may start only while money remains.
    pub fn can_start_round(&self) -> bool {
        self.balance > 0
    }

    /// Records the bet for the round about to be dealt. Rejected bets leave
    /// the ledger untouched.
    pub fn place_bet(&mut self, bet: i64) -> Result<(), GameError> {
        if bet < 1 || bet > self.balance {
            return Err(GameError::InvalidBet {
                bet,
                balance: self.balance,
            });
        }
        self.bet = Some(bet);
        Ok(())
    }

    /// Applies a signed settlement delta and retires the active bet.
    pub(crate) fn credit(&mut self, delta: i64) {
        self.balance += delta;
        self.bet = None;
    }

    pub(crate) fn record_win(&mut self) {
        self.stats.played += 1;
        self.stats.won += 1;
    }

    pub(crate) fn record_loss(&mut self) {
        self.stats.played += 1;
        self.stats.lost += 1;
    }

    pub(crate) fn record_draw(&mut self) {
        self.stats.played += 1;
        self.stats.draws += 1;
    }

    /// Restores the starting balance and zeroes the counters. Used when the
    /// player goes bankrupt and chooses to start over.
    pub fn reset(&mut self) {
        self.balance = self.starting_balance;
        self.bet = None;
        self.stats = LedgerStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bets_must_fit_the_balance() {
        let mut ledger = BankLedger::new(500);
        assert!(ledger.place_bet(0).is_err());
        assert!(ledger.place_bet(-5).is_err());
        assert!(ledger.place_bet(501).is_err());
        assert_eq!(ledger.bet(), None);

        assert!(ledger.place_bet(1).is_ok());
        assert_eq!(ledger.bet(), Some(1));
        assert!(ledger.place_bet(500).is_ok());
        assert_eq!(ledger.bet(), Some(500));
    }

    #[test]
    fn rejected_bet_reports_the_limits() {
        let mut ledger = BankLedger::new(200);
        let err = ledger.place_bet(300).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidBet {
                bet: 300,
                balance: 200
            }
        );
    }

    #[test]
    fn credit_retires_the_bet() {
        let mut ledger = BankLedger::new(1000);
        ledger.place_bet(100).unwrap();
        ledger.credit(-100);
        assert_eq!(ledger.balance(), 900);
        assert_eq!(ledger.bet(), None);
    }

    #[test]
    fn rounds_stop_at_an_empty_bank() {
        let mut ledger = BankLedger::new(100);
        assert!(ledger.can_start_round());
        ledger.place_bet(100).unwrap();
        ledger.credit(-100);
        assert!(!ledger.can_start_round());
    }

    #[test]
    fn reset_restores_the_starting_state() {
        let mut ledger = BankLedger::new(1000);
        ledger.place_bet(400).unwrap();
        ledger.credit(-400);
        ledger.record_loss();
        ledger.reset();
        assert_eq!(ledger.balance(), 1000);
        assert_eq!(ledger.bet(), None);
        assert_eq!(ledger.stats(), LedgerStats::default());
    }

    #[test]
    fn win_rate_needs_at_least_one_round() {
        let mut ledger = BankLedger::new(1000);
        assert_eq!(ledger.stats().win_rate(), None);
        ledger.record_win();
        ledger.record_loss();
        ledger.record_win();
        ledger.record_draw();
        assert_eq!(ledger.stats().win_rate(), Some(50.0));
    }
}
