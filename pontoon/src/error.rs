use crate::game::RoundPhase;
use thiserror::Error;

/// Everything that can go wrong inside the game core. Only `EmptyShoe` and
/// `InputClosed` are fatal to a round; the rest are re-prompted by the
/// session layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// The shoe ran out of cards mid-round. Propagates to the session
    /// layer, which decides whether the game can continue.
    #[error("the shoe is empty")]
    EmptyShoe,

    /// A bet outside `[1, balance]`, or input that could not be read as a
    /// number at all.
    #[error("invalid bet: {bet} (bank holds {balance})")]
    InvalidBet { bet: i64, balance: i64 },

    /// An input token that names neither hit nor stand.
    #[error("invalid choice: {token:?}")]
    InvalidChoice { token: String },

    /// A round operation invoked outside the phase it is allowed in.
    #[error("{operation} is only allowed in {required:?} phase (current phase is {current:?})")]
    WrongPhase {
        operation: &'static str,
        required: RoundPhase,
        current: RoundPhase,
    },

    /// The input stream ended or failed mid-prompt.
    #[error("input stream closed")]
    InputClosed,
}
