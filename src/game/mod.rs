//! Game engine and state management.

use crate::card::Card;
use crate::error::{SetupError, TurnError};
use crate::interaction::Interaction;
use crate::options::GameOptions;
use crate::player::Player;

mod state;
mod table;
mod turn;

pub use state::{GameState, SeatView, TableView};
pub use table::Table;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;
/// Most players a table can seat.
pub const MAX_PLAYERS: usize = 4;
/// Cards dealt to each player when they are seated.
pub const HAND_SIZE: usize = 5;

/// A Crazy Eights game engine that manages the piles, the roster and turn
/// order.
///
/// The game owns the table and every player. All console traffic goes through
/// the [`Interaction`] given at construction, so a scripted one makes a game
/// fully deterministic for a given seed.
pub struct Game<I> {
    /// Draw and discard piles.
    pub table: Table,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Seated players in turn order.
    players: Vec<Player>,
    /// Turns taken so far.
    turns: usize,
    /// Console collaborator.
    interaction: I,
}

impl<I> Game<I> {
    /// Creates a new game with the given seed.
    ///
    /// A fresh deck is shuffled, one card is turned face up on the discard
    /// pile and the other 51 form the draw pile.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy_eights::{Game, GameOptions, Scripted};
    ///
    /// let game = Game::new(GameOptions::default(), 42, Scripted::new());
    /// assert_eq!(game.draw_pile_len(), 51);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64, interaction: I) -> Self {
        Self {
            table: Table::new(seed),
            options,
            state: GameState::Seating,
            players: Vec::new(),
            turns: 0,
            interaction,
        }
    }

    /// Seats a player and deals them a hand.
    ///
    /// Returns the assigned player ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has started, the name is blank, the table
    /// is full, or the draw pile cannot cover a full hand. A short hand is put
    /// back on the draw pile.
    pub fn add_player(&mut self, name: &str) -> Result<u8, SetupError> {
        if self.state != GameState::Seating {
            return Err(SetupError::AlreadyStarted);
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(SetupError::EmptyName);
        }

        if self.players.len() >= MAX_PLAYERS {
            return Err(SetupError::InvalidPlayerCount(self.players.len() + 1));
        }

        let id = self.players.len() as u8;
        let mut player = Player::new(id, name);
        if self
            .table
            .draw_pile
            .deal(player.hand_mut(), HAND_SIZE)
            .is_err()
        {
            player.hand_mut().deal_all(&mut self.table.draw_pile);
            return Err(SetupError::NotEnoughCards);
        }

        log::debug!("seated {name} as player {id}");
        self.players.push(player);
        Ok(id)
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the seated players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given ID.
    pub fn player(&self, player_id: u8) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == player_id)
    }

    /// Returns the player with the given ID mutably.
    pub fn player_mut(&mut self, player_id: u8) -> Option<&mut Player> {
        self.players
            .iter_mut()
            .find(|player| player.id() == player_id)
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the top of the discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the discard pile is empty.
    pub fn discard_top(&self) -> Result<Card, TurnError> {
        self.table.top()
    }

    /// Returns the number of cards left in the draw pile.
    pub fn draw_pile_len(&self) -> usize {
        self.table.draw_pile.len()
    }

    /// Draws a card, reshuffling the discards if the draw pile is empty.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::DeckExhausted`] if both piles are out of cards.
    pub fn draw(&mut self) -> Result<Card, TurnError> {
        self.table.draw()
    }

    /// Moves all discards but the top card back into the draw pile and
    /// shuffles it.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::EmptyDiscard`] if the discard pile is empty.
    pub fn reshuffle(&mut self) -> Result<(), TurnError> {
        self.table.reshuffle()
    }

    /// Returns the number of turns taken.
    pub const fn turns_taken(&self) -> usize {
        self.turns
    }

    /// Counts every card in the game: both piles and all hands.
    pub fn total_cards(&self) -> usize {
        self.table.len()
            + self
                .players
                .iter()
                .map(|player| player.hand().len())
                .sum::<usize>()
    }

    /// Returns a snapshot of the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the discard pile is empty.
    pub fn view(&self) -> Result<TableView<'_>, TurnError> {
        view_of(&self.table, &self.players)
    }

    /// Returns the interaction.
    pub const fn interaction(&self) -> &I {
        &self.interaction
    }

    /// Consumes the game and returns the interaction.
    pub fn into_interaction(self) -> I {
        self.interaction
    }
}

impl<I: Interaction> Game<I> {
    /// Asks the interaction for a player count and each player's name, then
    /// seats them.
    ///
    /// # Errors
    ///
    /// Returns an error if input is closed, the count is outside 2..=4, or a
    /// player cannot be seated.
    pub fn seat_players(&mut self) -> Result<(), SetupError> {
        let count = self
            .interaction
            .prompt_player_count()
            .ok_or(SetupError::Aborted)?;

        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            log::warn!("rejected player count {count}");
            return Err(SetupError::InvalidPlayerCount(count));
        }

        for seat in 0..count {
            let name = self
                .interaction
                .prompt_player_name(seat)
                .ok_or(SetupError::Aborted)?;
            self.add_player(&name)?;
        }

        Ok(())
    }
}

fn view_of<'a>(table: &Table, players: &'a [Player]) -> Result<TableView<'a>, TurnError> {
    Ok(TableView {
        discard_top: table.top()?,
        draw_pile_size: table.draw_pile.len(),
        seats: players
            .iter()
            .map(|player| SeatView {
                player_id: player.id(),
                name: player.name(),
                hand: player.hand().cards(),
            })
            .collect(),
    })
}
