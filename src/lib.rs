//! A Crazy Eights game engine for 2 to 4 players sharing one console.
//!
//! The crate provides a [`Game`] type that manages the draw and discard piles,
//! the roster, turn order, reshuffling, win detection and scoring. All input and
//! output goes through an [`Interaction`], so the engine can be driven by a
//! terminal or by a [`Scripted`] collaborator in tests.
//!
//! # Example
//!
//! ```
//! use crazy_eights::{Game, GameOptions, Scripted};
//!
//! let script = Scripted::new().with_player_count(3).with_names(["Ada", "Bo", "Cy"]);
//! let mut game = Game::new(GameOptions::default(), 42, script);
//! game.seat_players().unwrap();
//! assert_eq!(game.draw_pile_len(), 52 - 1 - 15);
//! ```

pub mod card;
pub mod error;
pub mod game;
pub mod interaction;
pub mod options;
pub mod pile;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, CardOrder, DECK_SIZE, Suit, WILD_RANK, standard_deck};
pub use error::{GameError, PileError, SetupError, TurnError};
pub use game::{
    Game, GameState, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS, SeatView, Table, TableView,
};
pub use interaction::{Event, Interaction, Scripted};
pub use options::GameOptions;
pub use pile::Pile;
pub use player::{Move, Player};
pub use result::{GameResult, PlayerScore};
