//! Named card piles: decks, draw and discard piles, and hands.

use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, CardOrder, standard_deck};
use crate::error::PileError;

/// An ordered, named collection of cards.
///
/// The top of the pile is the end of the sequence: [`Pile::push`] adds there
/// and [`Pile::pop`] and [`Pile::last`] read from there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    /// Label shown when the pile is displayed.
    name: String,
    /// Cards, bottom first.
    cards: Vec<Card>,
}

impl Pile {
    /// Creates an empty pile.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Creates a pile holding a full, unshuffled 52-card deck.
    #[must_use]
    pub fn standard(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: standard_deck(),
        }
    }

    /// Creates a pile from cards listed bottom first.
    #[must_use]
    pub fn from_cards(name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }

    /// Returns the pile's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the pile holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Shuffles the pile uniformly.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Adds a card to the top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::Empty`] if the pile has no cards.
    pub fn pop(&mut self) -> Result<Card, PileError> {
        self.cards.pop().ok_or(PileError::Empty)
    }

    /// Returns the top card without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::Empty`] if the pile has no cards.
    pub fn last(&self) -> Result<Card, PileError> {
        self.cards.last().copied().ok_or(PileError::Empty)
    }

    /// Removes the card at `index` (0 is the bottom).
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Moves the top `n` cards onto `target`, keeping their relative order.
    ///
    /// # Errors
    ///
    /// If fewer than `n` cards are available, every remaining card is still
    /// moved and [`PileError::Shortfall`] reports how many were dealt.
    ///
    /// ```
    /// use crazy_eights::{Pile, PileError};
    ///
    /// let mut deck = Pile::standard("Deck");
    /// let mut hand = Pile::new("Hand");
    /// deck.deal(&mut hand, 5).unwrap();
    /// assert_eq!((deck.len(), hand.len()), (47, 5));
    ///
    /// let mut rest = Pile::new("Rest");
    /// let err = deck.deal(&mut rest, 50).unwrap_err();
    /// assert_eq!(err, PileError::Shortfall { requested: 50, dealt: 47 });
    /// assert!(deck.is_empty());
    /// ```
    pub fn deal(&mut self, target: &mut Self, n: usize) -> Result<(), PileError> {
        let available = self.cards.len();
        let dealt = n.min(available);
        let moved = self.cards.split_off(available - dealt);
        target.cards.extend(moved);

        if dealt < n {
            return Err(PileError::Shortfall { requested: n, dealt });
        }
        Ok(())
    }

    /// Moves every card onto `target`, keeping their order.
    pub fn deal_all(&mut self, target: &mut Self) {
        target.cards.append(&mut self.cards);
    }

    /// Sorts the pile for display.
    pub fn sort(&mut self, order: CardOrder) {
        self.cards.sort_by(|a, b| a.cmp_by(b, order));
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        for card in &self.cards {
            write!(f, "\n  {card}")?;
        }
        Ok(())
    }
}
