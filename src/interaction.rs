//! The boundary between the engine and whoever is sitting at the console.
//!
//! The engine never reads or writes the terminal itself. It asks an
//! [`Interaction`] for setup input, reports every state change to it, and
//! blocks on [`Interaction::await_acknowledgment`] between turns.

use std::collections::VecDeque;

use crate::card::Card;
use crate::game::TableView;
use crate::result::PlayerScore;

/// Input and output collaborator consumed by [`Game`](crate::Game).
pub trait Interaction {
    /// Asks how many players will play. `None` means input was closed.
    ///
    /// Implementations should re-prompt until the answer is in 2..=4; the
    /// engine rejects anything else.
    fn prompt_player_count(&mut self) -> Option<usize>;

    /// Asks for the name of the player in `seat` (0-based). `None` means input
    /// was closed.
    fn prompt_player_name(&mut self, seat: usize) -> Option<String>;

    /// Reports the table before a turn.
    fn notify_state(&mut self, view: &TableView<'_>);

    /// Reports a played card.
    fn notify_move(&mut self, player: &str, card: Card);

    /// Reports that a player drew instead of playing.
    fn notify_draw(&mut self, player: &str) {
        let _ = player;
    }

    /// Reports final scores in turn order.
    fn notify_final_scores(&mut self, scores: &[PlayerScore]);

    /// Blocks until the user is ready for the next turn. Returns `false` if
    /// input was closed, which ends the game.
    fn await_acknowledgment(&mut self) -> bool;
}

/// Something reported to a [`Scripted`] interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Table state before a turn.
    State {
        /// Discard top.
        discard_top: Card,
        /// Cards left in the draw pile.
        draw_pile_size: usize,
        /// Hand sizes in turn order.
        hand_sizes: Vec<usize>,
    },
    /// A card was played.
    Played {
        /// Who played it.
        player: String,
        /// The card.
        card: Card,
    },
    /// A player drew.
    Drew {
        /// Who drew.
        player: String,
    },
    /// The game ended with these scores.
    FinalScores(Vec<PlayerScore>),
    /// The engine waited for an acknowledgment.
    Acknowledged,
}

/// A deterministic interaction fed from a script, recording everything the
/// engine reports.
///
/// ```
/// use crazy_eights::Scripted;
///
/// let script = Scripted::new().with_player_count(2).with_names(["Ada", "Bo"]);
/// assert!(script.events().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    player_count: Option<usize>,
    names: VecDeque<String>,
    acknowledgments: Option<usize>,
    events: Vec<Event>,
}

impl Scripted {
    /// Creates an empty script. Prompts answer `None` until configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the answer to the player count prompt.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = Some(count);
        self
    }

    /// Closes input after `count` acknowledgments. Unlimited by default.
    #[must_use]
    pub fn with_acknowledgments(mut self, count: usize) -> Self {
        self.acknowledgments = Some(count);
        self
    }

    /// Queues answers to the name prompts.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Returns every recorded event in order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns the cards played, in order, with who played them.
    #[must_use]
    pub fn moves(&self) -> Vec<(&str, Card)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Played { player, card } => Some((player.as_str(), *card)),
                _ => None,
            })
            .collect()
    }
}

impl Interaction for Scripted {
    fn prompt_player_count(&mut self) -> Option<usize> {
        self.player_count
    }

    fn prompt_player_name(&mut self, _seat: usize) -> Option<String> {
        self.names.pop_front()
    }

    fn notify_state(&mut self, view: &TableView<'_>) {
        self.events.push(Event::State {
            discard_top: view.discard_top,
            draw_pile_size: view.draw_pile_size,
            hand_sizes: view.seats.iter().map(|seat| seat.hand.len()).collect(),
        });
    }

    fn notify_move(&mut self, player: &str, card: Card) {
        self.events.push(Event::Played {
            player: player.to_owned(),
            card,
        });
    }

    fn notify_draw(&mut self, player: &str) {
        self.events.push(Event::Drew {
            player: player.to_owned(),
        });
    }

    fn notify_final_scores(&mut self, scores: &[PlayerScore]) {
        self.events.push(Event::FinalScores(scores.to_vec()));
    }

    fn await_acknowledgment(&mut self) -> bool {
        match &mut self.acknowledgments {
            Some(0) => return false,
            Some(left) => *left -= 1,
            None => {}
        }
        self.events.push(Event::Acknowledged);
        true
    }
}
