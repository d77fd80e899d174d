pub mod bank;
pub mod hand;
pub mod shoe;

use crate::card::Card;
use crate::error::GameError;
use crate::{Decision, Options, ShoePolicy};

use self::bank::{BankLedger, LedgerStats};
use self::hand::Hand;
use self::shoe::Shoe;

use pontoon_macros::allowed_phase;
use serde::{Deserialize, Serialize};

/// The dealer draws below this total and stands at or above it.
const DEALER_STAND: u8 = 17;
const TWENTY_ONE: u8 = 21;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundPhase {
    Betting,
    Dealing,
    PlayerTurn,
    DealerTurn,
    Settlement,
    Idle,
}

/// Which party a hand belongs to. Handed to the display so it can label
/// what it draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Player,
    Dealer,
}

/// How a settled round came out, in rule-precedence order: the first
/// matching variant wins, and the order is the law of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Player over 21; the dealer never plays.
    PlayerBust,
    /// Dealer over 21; pays 1:1.
    DealerBust,
    /// Player finished on exactly 21, with any number of cards; pays
    /// double, and beats a dealer 21.
    TwentyOne,
    /// Player closer to 21; pays 1:1.
    PlayerWins,
    /// Dealer closer to 21.
    DealerWins,
    /// Equal totals; the bet is returned.
    Push,
}

impl Outcome {
    fn resolve(player: u8, dealer: u8) -> Outcome {
        if player > TWENTY_ONE {
            Outcome::PlayerBust
        } else if dealer > TWENTY_ONE {
            Outcome::DealerBust
        } else if player == TWENTY_ONE {
            Outcome::TwentyOne
        } else if player > dealer {
            Outcome::PlayerWins
        } else if player < dealer {
            Outcome::DealerWins
        } else {
            Outcome::Push
        }
    }

    /// The signed change this outcome applies to the bank.
    fn payout(&self, bet: i64) -> i64 {
        match self {
            Outcome::PlayerBust | Outcome::DealerWins => -bet,
            Outcome::DealerBust | Outcome::PlayerWins => bet,
            Outcome::TwentyOne => 2 * bet,
            Outcome::Push => 0,
        }
    }
}

/// The settlement result handed back to the session layer, together with a
/// snapshot of the ledger after the bank was updated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub outcome: Outcome,
    pub player_value: u8,
    pub dealer_value: u8,
    pub bet: i64,
    pub payout: i64,
    pub balance: i64,
    pub stats: LedgerStats,
}

/// One betting round as a state machine:
/// `Betting → Dealing → PlayerTurn → DealerTurn → Settlement → Idle`,
/// where the dealer turn is skipped when the player busts or is dealt a
/// two-card 21. The round borrows the session's shoe and ledger; the hands
/// live only as long as the round itself.
///
/// Every operation is gated on its phase and returns `WrongPhase` when
/// called out of turn.
pub struct Round<'a> {
    shoe: &'a mut Shoe,
    ledger: &'a mut BankLedger,
    player: Hand,
    dealer: Hand,
    current_phase: RoundPhase,
}

impl<'a> Round<'a> {
    pub fn new(shoe: &'a mut Shoe, ledger: &'a mut BankLedger) -> Round<'a> {
        Round {
            shoe,
            ledger,
            player: Hand::new(),
            dealer: Hand::new(),
            current_phase: RoundPhase::Betting,
        }
    }

    /// Can be called at Betting phase. Validation is the ledger's: the bet
    /// must be in `[1, balance]`. A rejected bet leaves the phase unchanged
    /// so the caller can prompt again.
    #[allowed_phase(Betting)]
    pub fn submit_bet(&mut self, bet: i64) -> Result<(), GameError> {
        self.ledger.place_bet(bet)?;
        self.current_phase = RoundPhase::Dealing;
        Ok(())
    }

    /// Can be called at Dealing phase. Deals two cards each, alternating
    /// player, dealer, player, dealer. A two-card 21 settles immediately:
    /// the dealer keeps the two cards and never acts.
    #[allowed_phase(Dealing)]
    pub fn deal_initial(&mut self) -> Result<(), GameError> {
        for _ in 0..2 {
            let card = self.shoe.draw()?;
            self.player.add_card(card);
            let card = self.shoe.draw()?;
            self.dealer.add_card(card);
        }
        self.current_phase = if self.player.value() == TWENTY_ONE {
            log::debug!("two-card twenty-one, straight to settlement");
            RoundPhase::Settlement
        } else {
            RoundPhase::PlayerTurn
        };
        Ok(())
    }

    /// Can be called at PlayerTurn phase. A hit that busts settles the
    /// round at once; a hit that lands exactly on 21 stands implicitly.
    /// Returns the card drawn, if any, so the caller can render it.
    #[allowed_phase(PlayerTurn)]
    pub fn submit_choice(&mut self, decision: Decision) -> Result<Option<Card>, GameError> {
        match decision {
            Decision::Stand => {
                self.current_phase = RoundPhase::DealerTurn;
                Ok(None)
            }
            Decision::Hit => {
                let card = self.shoe.draw()?;
                self.player.add_card(card);
                let value = self.player.value();
                if value > TWENTY_ONE {
                    self.current_phase = RoundPhase::Settlement;
                } else if value == TWENTY_ONE {
                    self.current_phase = RoundPhase::DealerTurn;
                }
                Ok(Some(card))
            }
        }
    }

    /// Can be called at DealerTurn phase. Draws one card while the dealer
    /// is below 17 and hands it back for rendering; returns None once the
    /// dealer stands (or busts) and the round is ready to settle.
    #[allowed_phase(DealerTurn)]
    pub fn dealer_step(&mut self) -> Result<Option<Card>, GameError> {
        if self.dealer.value() < DEALER_STAND {
            let card = self.shoe.draw()?;
            self.dealer.add_card(card);
            Ok(Some(card))
        } else {
            self.current_phase = RoundPhase::Settlement;
            Ok(None)
        }
    }

    /// Can be called at Settlement phase. Applies the settlement ladder to
    /// the bank, bumps the counters exactly once and ends the round.
    #[allowed_phase(Settlement)]
    pub fn settle(&mut self) -> Result<RoundOutcome, GameError> {
        let bet = self
            .ledger
            .bet()
            .expect("a bet is placed before settlement");
        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        let outcome = Outcome::resolve(player_value, dealer_value);
        let payout = outcome.payout(bet);

        self.ledger.credit(payout);
        match outcome {
            Outcome::DealerBust | Outcome::TwentyOne | Outcome::PlayerWins => {
                self.ledger.record_win()
            }
            Outcome::PlayerBust | Outcome::DealerWins => self.ledger.record_loss(),
            Outcome::Push => self.ledger.record_draw(),
        }
        self.current_phase = RoundPhase::Idle;
        log::debug!(
            "round settled: {:?} ({} vs {}), payout {}",
            outcome,
            player_value,
            dealer_value,
            payout
        );

        Ok(RoundOutcome {
            outcome,
            player_value,
            dealer_value,
            bet,
            payout,
            balance: self.ledger.balance(),
            stats: self.ledger.stats(),
        })
    }

    pub fn phase(&self) -> RoundPhase {
        self.current_phase
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }
}

/// The banner art the display can draw. Which one is wanted is decided by
/// the session; how it looks is up to the implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Welcome,
    RoundStart,
    TwentyOne,
    Result,
    Bankrupt,
    Farewell,
}

/// A yes/no question the session puts to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    PlayAgain,
    NewBank,
}

/// Rendering seam. Implementations draw hands and banners however they
/// like; nothing here takes part in rule evaluation.
pub trait Display {
    fn render_hand(&mut self, seat: Seat, hand: &Hand, hide_first: bool);
    fn render_banner(&mut self, banner: Banner);
    fn render_outcome(&mut self, outcome: &RoundOutcome);
    fn render_stats(&mut self, stats: &LedgerStats, balance: i64);
    fn render_error(&mut self, error: &GameError);
}

/// Blocking input seam. The session retries reads that come back with a
/// recoverable error.
pub trait Input {
    /// Reads a bet amount. Non-numeric input comes back as `InvalidBet`;
    /// the range check happens in the ledger.
    fn read_bet(&mut self, balance: i64) -> Result<i64, GameError>;
    /// Reads a hit/stand token; unrecognized tokens come back as
    /// `InvalidChoice`.
    fn read_choice(&mut self) -> Result<Decision, GameError>;
    fn read_yes_no(&mut self, question: Question) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Playing,
    Bankrupt,
    Ended,
}

/// A whole sitting at the table: one shoe, one bank, many rounds. The
/// outer state machine around the per-round one; bankruptcy and the
/// continue/quit questions drive its transitions.
pub struct Session {
    options: Options,
    shoe: Shoe,
    ledger: BankLedger,
    phase: SessionPhase,
}

impl Session {
    pub fn new(options: Options) -> Session {
        Session::with_shoe(options, Shoe::new(options.cut_card_proportion))
    }

    /// Builds a session over a prepared shoe, so callers can inject a
    /// seeded generator and reproduce whole games.
    pub fn with_shoe(options: Options, shoe: Shoe) -> Session {
        Session {
            options,
            shoe,
            ledger: BankLedger::new(options.starting_bank),
            phase: SessionPhase::Playing,
        }
    }

    /// Runs rounds until the player quits, or goes bankrupt and declines a
    /// new bank. Only fatal errors (an exhausted shoe, a closed input
    /// stream) come back as Err.
    pub fn run<I: Input, D: Display>(
        &mut self,
        input: &mut I,
        display: &mut D,
    ) -> Result<(), GameError> {
        display.render_banner(Banner::Welcome);
        loop {
            match self.phase {
                SessionPhase::Playing => {
                    self.play_round(input, display)?;
                    if !self.ledger.can_start_round() {
                        log::debug!("bank is empty, session goes bankrupt");
                        self.phase = SessionPhase::Bankrupt;
                    } else if !input.read_yes_no(Question::PlayAgain) {
                        self.phase = SessionPhase::Ended;
                    }
                }
                SessionPhase::Bankrupt => {
                    display.render_banner(Banner::Bankrupt);
                    if input.read_yes_no(Question::NewBank) {
                        self.reset_bank();
                        self.phase = SessionPhase::Playing;
                    } else {
                        self.phase = SessionPhase::Ended;
                    }
                }
                SessionPhase::Ended => {
                    display.render_banner(Banner::Farewell);
                    display.render_stats(&self.ledger.stats(), self.ledger.balance());
                    return Ok(());
                }
            }
        }
    }

    /// Runs the round state machine once: bet, deal, player turn, dealer
    /// turn, settlement. Recoverable input errors re-prompt without
    /// touching the round state; an empty shoe aborts the round and
    /// propagates.
    pub fn play_round<I: Input, D: Display>(
        &mut self,
        input: &mut I,
        display: &mut D,
    ) -> Result<RoundOutcome, GameError> {
        debug_assert!(
            self.ledger.can_start_round(),
            "play_round called with an empty bank"
        );
        if self.options.shoe_policy == ShoePolicy::RestockAtCutCard && self.shoe.reached_cut_card()
        {
            log::info!("cut card passed, restocking the shoe");
            self.shoe.restock();
        }

        display.render_banner(Banner::RoundStart);
        let balance = self.ledger.balance();
        let mut round = Round::new(&mut self.shoe, &mut self.ledger);

        loop {
            match input.read_bet(balance).and_then(|bet| round.submit_bet(bet)) {
                Ok(()) => break,
                Err(err @ GameError::InvalidBet { .. }) => display.render_error(&err),
                Err(err) => return Err(err),
            }
        }

        round.deal_initial()?;
        display.render_hand(Seat::Player, round.player(), false);
        display.render_hand(Seat::Dealer, round.dealer(), true);

        if round.phase() == RoundPhase::Settlement {
            display.render_banner(Banner::TwentyOne);
        }

        while round.phase() == RoundPhase::PlayerTurn {
            match input.read_choice() {
                Ok(choice) => {
                    if round.submit_choice(choice)?.is_some() {
                        display.render_hand(Seat::Player, round.player(), false);
                    }
                }
                Err(err @ GameError::InvalidChoice { .. }) => display.render_error(&err),
                Err(err) => return Err(err),
            }
        }

        if round.phase() == RoundPhase::DealerTurn {
            display.render_hand(Seat::Dealer, round.dealer(), false);
            while round.dealer_step()?.is_some() {
                display.render_hand(Seat::Dealer, round.dealer(), false);
            }
        }

        let outcome = round.settle()?;
        display.render_banner(Banner::Result);
        display.render_hand(Seat::Player, round.player(), false);
        display.render_hand(Seat::Dealer, round.dealer(), false);
        display.render_outcome(&outcome);
        Ok(outcome)
    }

    /// Starts a fresh bank after bankruptcy.
    pub fn reset_bank(&mut self) {
        log::info!("bank reset to {}", self.options.starting_bank);
        self.ledger.reset();
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn ledger(&self) -> &BankLedger {
        &self.ledger
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }
}
