//! Seated players and their hands.

use crate::card::Card;
use crate::error::TurnError;
use crate::game::Table;
use crate::pile::Pile;

/// What a player did on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// The player played this card from their hand.
    Played(Card),
    /// The player held no legal card and drew one instead.
    Drew,
}

/// A player seated at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Seat id, assigned in seating order.
    id: u8,
    /// Display name.
    name: String,
    /// Cards in the hand, in the order they were received.
    hand: Pile,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(id: u8, name: impl Into<String>) -> Self {
        let name = name.into();
        let hand = Pile::new(name.clone());
        Self { id, name, hand }
    }

    /// Returns the seat id.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Pile {
        &self.hand
    }

    /// Returns the hand mutably.
    pub const fn hand_mut(&mut self) -> &mut Pile {
        &mut self.hand
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }

    /// Returns the index of the first card in the hand that can be played on
    /// `top`, scanning in the order the cards were received.
    #[must_use]
    pub fn playable_index(&self, top: &Card) -> Option<usize> {
        self.hand.cards().iter().position(|card| card.can_play_on(top))
    }

    /// Plays one turn against `top`.
    ///
    /// The first legal card is removed and returned. Without a legal card the
    /// player draws exactly one card from `table` into the hand and the turn
    /// passes, even if the drawn card would have been legal.
    ///
    /// # Errors
    ///
    /// Returns an error if a card has to be drawn and none is left.
    pub fn play(&mut self, table: &mut Table, top: Card) -> Result<Move, TurnError> {
        if let Some(card) = self
            .playable_index(&top)
            .and_then(|index| self.hand.remove(index))
        {
            return Ok(Move::Played(card));
        }

        let card = table.draw()?;
        log::debug!("{} draws {card}", self.name);
        self.hand.push(card);
        Ok(Move::Drew)
    }

    /// Penalty score of the remaining hand. Lower is better; an empty hand
    /// scores 0.
    ///
    /// ```
    /// use crazy_eights::{Card, Player, Suit};
    ///
    /// let mut player = Player::new(0, "Ada");
    /// assert_eq!(player.score(), 0);
    ///
    /// player.hand_mut().push(Card::new(Suit::Clubs, 8));
    /// player.hand_mut().push(Card::new(Suit::Diamonds, 13));
    /// player.hand_mut().push(Card::new(Suit::Spades, 3));
    /// assert_eq!(player.score(), 63);
    /// ```
    #[must_use]
    pub fn score(&self) -> u32 {
        self.hand.cards().iter().map(Card::points).sum()
    }
}
