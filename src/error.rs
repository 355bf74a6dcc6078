//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when taking cards out of a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// The pile has no cards.
    #[error("pile is empty")]
    Empty,
    /// Fewer cards were available than requested. The available cards were
    /// still moved.
    #[error("requested {requested} cards but only {dealt} were available")]
    Shortfall {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards actually moved.
        dealt: usize,
    },
}

/// Errors that can occur while seating players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Player count is outside 2..=4.
    #[error("number of players must be between 2 and 4, got {0}")]
    InvalidPlayerCount(usize),
    /// Player name is blank.
    #[error("player name is empty")]
    EmptyName,
    /// Players can no longer join.
    #[error("game has already started")]
    AlreadyStarted,
    /// Not enough cards in the draw pile to deal a hand.
    #[error("not enough cards in the draw pile")]
    NotEnoughCards,
    /// Input was closed before setup finished.
    #[error("setup aborted")]
    Aborted,
}

/// Errors that can occur while taking turns.
///
/// Apart from [`TurnError::GameOver`] and [`TurnError::Aborted`], every
/// variant means an engine invariant was broken and the game cannot continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Player is not seated at this table.
    #[error("player {0} is not seated")]
    UnknownPlayer(u8),
    /// Both the draw pile and the buried discards are empty.
    #[error("draw pile and discard pile are both exhausted")]
    DeckExhausted,
    /// The discard pile has no top card.
    #[error("discard pile is empty")]
    EmptyDiscard,
    /// The game has already finished.
    #[error("game is over")]
    GameOver,
    /// Input was closed while waiting for the next turn.
    #[error("input closed before the next turn")]
    Aborted,
    /// The configured turn limit was reached without a winner.
    #[error("no winner after {0} turns")]
    TurnLimitReached(usize),
}

/// Errors that can end a full game run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Seating failed.
    #[error(transparent)]
    Setup(#[from] SetupError),
    /// A turn failed.
    #[error(transparent)]
    Turn(#[from] TurnError),
}
