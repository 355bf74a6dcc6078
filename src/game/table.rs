use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::TurnError;
use crate::pile::Pile;

/// The shared piles: face-down draw pile and face-up discard pile.
#[derive(Debug, Clone)]
pub struct Table {
    /// Cards players draw from.
    pub draw_pile: Pile,
    /// Played cards. The top card decides what can be played next.
    pub discard_pile: Pile,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Shuffles a fresh deck, turns one card face up and puts the rest face
    /// down.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Pile::standard("Deck");
        deck.shuffle(&mut rng);

        let mut discard_pile = Pile::new("Discards");
        let mut draw_pile = Pile::new("Draw pile");
        if let Ok(card) = deck.pop() {
            discard_pile.push(card);
        }
        deck.deal_all(&mut draw_pile);

        Self {
            draw_pile,
            discard_pile,
            rng,
        }
    }

    /// Returns the discard top.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::EmptyDiscard`] if the discard pile is empty.
    pub fn top(&self) -> Result<Card, TurnError> {
        self.discard_pile
            .last()
            .map_err(|_| TurnError::EmptyDiscard)
    }

    /// Draws a card, reshuffling the discards first if the draw pile is empty.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::DeckExhausted`] if both piles are empty or no card
    /// is left to draw after reshuffling.
    pub fn draw(&mut self) -> Result<Card, TurnError> {
        if self.is_empty() {
            return Err(TurnError::DeckExhausted);
        }
        if self.draw_pile.is_empty() {
            self.reshuffle()?;
        }

        self.draw_pile.pop().map_err(|_| TurnError::DeckExhausted)
    }

    /// Moves every discard except the top card into the draw pile and
    /// shuffles it.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::EmptyDiscard`] if there is no top card to keep.
    pub fn reshuffle(&mut self) -> Result<(), TurnError> {
        let top = self
            .discard_pile
            .pop()
            .map_err(|_| TurnError::EmptyDiscard)?;

        self.discard_pile.deal_all(&mut self.draw_pile);
        self.discard_pile.push(top);
        self.draw_pile.shuffle(&mut self.rng);

        log::info!(
            "reshuffled discards, {} cards in the draw pile",
            self.draw_pile.len()
        );
        Ok(())
    }

    /// Number of cards on the table (both piles).
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    /// Returns whether both piles are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty() && self.discard_pile.is_empty()
    }
}
