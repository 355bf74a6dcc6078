//! Game state types.

use crate::card::Card;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for players to be seated.
    Seating,
    /// Turns are being taken.
    InProgress,
    /// Someone has emptied their hand.
    Finished,
}

/// A read-only snapshot of the table, as reported before each turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a> {
    /// Top of the discard pile.
    pub discard_top: Card,
    /// Cards left in the draw pile.
    pub draw_pile_size: usize,
    /// Every seat, in turn order.
    pub seats: Vec<SeatView<'a>>,
}

/// One seat in a [`TableView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatView<'a> {
    /// The player ID.
    pub player_id: u8,
    /// The player's name.
    pub name: &'a str,
    /// The player's hand, in the order it was received.
    pub hand: &'a [Card],
}
