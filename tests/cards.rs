//! Card and pile tests.

use std::cmp::Ordering;
use std::collections::HashSet;

use crazy_eights::{Card, CardOrder, DECK_SIZE, Pile, PileError, Suit, standard_deck};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

#[test]
fn standard_deck_has_52_unique_cards() {
    let deck = standard_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert!(deck.iter().all(|c| (1..=13).contains(&c.rank)));
}

#[test]
fn card_renders_rank_and_suit_names() {
    assert_eq!(card(Suit::Clubs, 1).to_string(), "Ace of Clubs");
    assert_eq!(card(Suit::Diamonds, 11).to_string(), "Jack of Diamonds");
    assert_eq!(card(Suit::Hearts, 12).to_string(), "Queen of Hearts");
    assert_eq!(card(Suit::Spades, 13).to_string(), "King of Spades");
    assert_eq!(card(Suit::Spades, 10).to_string(), "10 of Spades");
    assert_eq!(Suit::Hearts.index(), 2);
}

#[test]
fn legality_matches_rank_suit_or_eight() {
    let top = card(Suit::Hearts, 5);

    assert!(card(Suit::Clubs, 5).can_play_on(&top));
    assert!(card(Suit::Spades, 8).can_play_on(&top));
    assert!(card(Suit::Hearts, 2).can_play_on(&top));
    assert!(!card(Suit::Diamonds, 3).can_play_on(&top));

    // An eight on top is matched like any other card.
    let eight = card(Suit::Clubs, 8);
    assert!(card(Suit::Hearts, 8).can_play_on(&eight));
    assert!(card(Suit::Clubs, 13).can_play_on(&eight));
    assert!(!card(Suit::Hearts, 13).can_play_on(&eight));
}

#[test]
fn points_per_rank() {
    assert_eq!(card(Suit::Clubs, 8).points(), 50);
    assert_eq!(card(Suit::Diamonds, 13).points(), 10);
    assert_eq!(card(Suit::Hearts, 11).points(), 10);
    assert_eq!(card(Suit::Spades, 1).points(), 1);
    assert_eq!(card(Suit::Spades, 3).points(), 3);
}

#[test]
fn orders_are_suit_dominant_and_differ_on_aces() {
    let ace = card(Suit::Clubs, 1);
    let king = card(Suit::Clubs, 13);
    let two_of_diamonds = card(Suit::Diamonds, 2);

    assert_eq!(ace.cmp_aces_low(&king), Ordering::Less);
    assert_eq!(ace.cmp_aces_high(&king), Ordering::Greater);
    assert_eq!(king.cmp_aces_high(&ace), Ordering::Less);
    assert_eq!(ace.cmp_aces_high(&ace), Ordering::Equal);

    assert_eq!(king.cmp_aces_low(&two_of_diamonds), Ordering::Less);
    assert_eq!(ace.cmp_aces_high(&two_of_diamonds), Ordering::Less);
}

#[test]
fn sort_uses_selected_order() {
    let mut pile = Pile::from_cards(
        "Hand",
        vec![
            card(Suit::Spades, 2),
            card(Suit::Clubs, 13),
            card(Suit::Clubs, 1),
        ],
    );

    pile.sort(CardOrder::AcesLow);
    assert_eq!(
        pile.cards(),
        [card(Suit::Clubs, 1), card(Suit::Clubs, 13), card(Suit::Spades, 2)]
    );

    pile.sort(CardOrder::AcesHigh);
    assert_eq!(
        pile.cards(),
        [card(Suit::Clubs, 13), card(Suit::Clubs, 1), card(Suit::Spades, 2)]
    );
}

#[test]
fn deal_moves_top_cards_in_order() {
    let cards = vec![
        card(Suit::Clubs, 2),
        card(Suit::Clubs, 3),
        card(Suit::Clubs, 4),
        card(Suit::Clubs, 5),
    ];
    let mut source = Pile::from_cards("Source", cards);
    let mut target = Pile::from_cards("Target", vec![card(Suit::Hearts, 9)]);

    source.deal(&mut target, 2).unwrap();

    assert_eq!(source.cards(), [card(Suit::Clubs, 2), card(Suit::Clubs, 3)]);
    assert_eq!(
        target.cards(),
        [
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 4),
            card(Suit::Clubs, 5)
        ]
    );
}

#[test]
fn deal_reports_shortfall_and_moves_what_it_can() {
    let mut source = Pile::from_cards("Source", vec![card(Suit::Clubs, 2), card(Suit::Clubs, 3)]);
    let mut target = Pile::new("Target");

    let err = source.deal(&mut target, 5).unwrap_err();

    assert_eq!(
        err,
        PileError::Shortfall {
            requested: 5,
            dealt: 2
        }
    );
    assert!(source.is_empty());
    assert_eq!(target.len(), 2);

    // Dealing nothing from an empty pile is not a shortfall.
    assert_eq!(source.deal(&mut target, 0), Ok(()));
}

#[test]
fn deal_conserves_cards() {
    let mut deck = Pile::standard("Deck");
    let mut hands: Vec<Pile> = (0..4).map(|i| Pile::new(format!("Hand {i}"))).collect();

    for hand in &mut hands {
        deck.deal(hand, 5).unwrap();
    }
    assert_eq!(deck.len(), DECK_SIZE - 20);

    let mut seen = HashSet::new();
    for card in deck.cards().iter().chain(hands.iter().flat_map(Pile::cards)) {
        assert!(seen.insert(*card), "{card} dealt twice");
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn deal_all_empties_source() {
    let mut deck = Pile::standard("Deck");
    let mut draw = Pile::from_cards("Draw pile", vec![card(Suit::Hearts, 9)]);

    deck.deal_all(&mut draw);

    assert!(deck.is_empty());
    assert_eq!(draw.len(), DECK_SIZE + 1);
    assert_eq!(draw.cards()[0], card(Suit::Hearts, 9));
    assert_eq!(draw.last(), Ok(card(Suit::Spades, 13)));
}

#[test]
fn pop_and_last_on_empty_pile() {
    let mut pile = Pile::new("Discards");
    assert_eq!(pile.pop(), Err(PileError::Empty));
    assert_eq!(pile.last(), Err(PileError::Empty));

    pile.push(card(Suit::Hearts, 4));
    assert_eq!(pile.last(), Ok(card(Suit::Hearts, 4)));
    assert_eq!(pile.len(), 1);
    assert_eq!(pile.pop(), Ok(card(Suit::Hearts, 4)));
    assert!(pile.is_empty());
}

#[test]
fn shuffle_is_a_permutation() {
    use rand::SeedableRng;

    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(3);
    let mut pile = Pile::standard("Deck");
    pile.shuffle(&mut rng);

    assert_eq!(pile.len(), DECK_SIZE);
    assert_ne!(pile.cards(), standard_deck().as_slice());
    assert!(standard_deck().iter().all(|c| pile.contains(c)));
}

#[test]
fn display_lists_name_and_cards() {
    let pile = Pile::from_cards("Discards", vec![card(Suit::Hearts, 1), card(Suit::Clubs, 8)]);
    assert_eq!(
        pile.to_string(),
        "Discards:\n  Ace of Hearts\n  8 of Clubs"
    );
}
