//! Card types and deck utilities.

use core::cmp::Ordering;
use core::fmt;

/// Card suit, in index order (Clubs = 0 .. Spades = 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in index order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit index (0 to 3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rank of the wild card.
pub const WILD_RANK: u8 = 8;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Selects one of the two display orderings of cards.
///
/// Both orders are suit-dominant. They only differ in where the Ace sits.
/// Neither is used to decide whether a card can be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardOrder {
    /// Aces rank below Two.
    #[default]
    AcesLow,
    /// Aces rank above King.
    AcesHigh,
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but render and score as non-standard cards.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether this card is an eight.
    #[must_use]
    pub const fn is_wild(&self) -> bool {
        self.rank == WILD_RANK
    }

    /// Returns whether this card may be played on `top`.
    ///
    /// A card is legal when it matches the rank or the suit of `top`, or when
    /// it is an eight.
    ///
    /// ```
    /// use crazy_eights::{Card, Suit};
    ///
    /// let top = Card::new(Suit::Hearts, 5);
    /// assert!(Card::new(Suit::Clubs, 5).can_play_on(&top));
    /// assert!(Card::new(Suit::Spades, 8).can_play_on(&top));
    /// assert!(!Card::new(Suit::Diamonds, 3).can_play_on(&top));
    /// ```
    #[must_use]
    pub fn can_play_on(&self, top: &Self) -> bool {
        self.is_wild() || self.rank == top.rank || self.suit == top.suit
    }

    /// Penalty points for this card when it is left in a hand at the end.
    #[must_use]
    pub fn points(&self) -> u32 {
        match self.rank {
            WILD_RANK => 50,
            11..=13 => 10,
            rank => u32::from(rank),
        }
    }

    /// Compares with aces low and suit dominant.
    #[must_use]
    pub fn cmp_aces_low(&self, other: &Self) -> Ordering {
        self.suit
            .cmp(&other.suit)
            .then_with(|| self.rank.cmp(&other.rank))
    }

    /// Compares with aces high and suit dominant.
    #[must_use]
    pub fn cmp_aces_high(&self, other: &Self) -> Ordering {
        const fn high(rank: u8) -> u8 {
            if rank == 1 { 14 } else { rank }
        }

        self.suit
            .cmp(&other.suit)
            .then_with(|| high(self.rank).cmp(&high(other.rank)))
    }

    /// Compares using the given order.
    #[must_use]
    pub fn cmp_by(&self, other: &Self, order: CardOrder) -> Ordering {
        match order {
            CardOrder::AcesLow => self.cmp_aces_low(other),
            CardOrder::AcesHigh => self.cmp_aces_high(other),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            1 => write!(f, "Ace of {}", self.suit),
            11 => write!(f, "Jack of {}", self.suit),
            12 => write!(f, "Queen of {}", self.suit),
            13 => write!(f, "King of {}", self.suit),
            rank => write!(f, "{rank} of {}", self.suit),
        }
    }
}

/// Builds an unshuffled 52-card deck, suit by suit, Ace to King.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in 1..=13 {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}
