use crate::error::{GameError, SetupError, TurnError};
use crate::interaction::Interaction;
use crate::player::{Move, Player};
use crate::result::{GameResult, PlayerScore};

use super::{Game, GameState, MAX_PLAYERS, MIN_PLAYERS, view_of};

impl<I> Game<I> {
    fn seat_index(&self, player_id: u8) -> Result<usize, TurnError> {
        self.players
            .iter()
            .position(|player| player.id() == player_id)
            .ok_or(TurnError::UnknownPlayer(player_id))
    }

    /// Returns the player after `current` in turn order, wrapping from the
    /// last seat to the first.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::UnknownPlayer`] if `current` is not seated.
    pub fn next_player(&self, current: u8) -> Result<u8, TurnError> {
        let index = self.seat_index(current)?;
        let next = (index + 1) % self.players.len();
        Ok(self.players[next].id())
    }

    /// Returns whether any player has emptied their hand.
    pub fn is_over(&self) -> bool {
        self.players.iter().any(Player::has_won)
    }

    /// Returns the first player with an empty hand.
    pub fn winner(&self) -> Option<u8> {
        self.players
            .iter()
            .find(|player| player.has_won())
            .map(Player::id)
    }

    /// Scores every player's remaining hand, in turn order.
    pub fn final_scores(&self) -> Vec<PlayerScore> {
        self.players
            .iter()
            .map(|player| PlayerScore {
                player_id: player.id(),
                name: player.name().to_owned(),
                score: player.score(),
            })
            .collect()
    }

    /// Returns the result of the game once someone has won.
    pub fn result(&self) -> Option<GameResult> {
        self.winner().map(|winner| GameResult {
            scores: self.final_scores(),
            winner,
            turns: self.turns,
        })
    }
}

impl<I: Interaction> Game<I> {
    /// Plays one turn for the given player.
    ///
    /// The player plays the first legal card in their hand onto the discard
    /// pile, or draws a single card if they hold none. The first turn closes
    /// the table to new players.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the player is not seated, the
    /// discard pile is empty, or a draw finds no cards left.
    pub fn take_turn(&mut self, player_id: u8) -> Result<Move, TurnError> {
        if self.state == GameState::Finished || self.is_over() {
            return Err(TurnError::GameOver);
        }

        let index = self.seat_index(player_id)?;
        let top = self.table.top()?;
        self.state = GameState::InProgress;

        let player = &mut self.players[index];
        let played = player.play(&mut self.table, top)?;
        match played {
            Move::Played(card) => {
                log::debug!("{} plays {card} on {top}", player.name());
                self.table.discard_pile.push(card);
                self.interaction.notify_move(player.name(), card);
            }
            Move::Drew => self.interaction.notify_draw(player.name()),
        }

        self.turns += 1;
        if player.has_won() {
            log::info!("{} wins after {} turns", player.name(), self.turns);
            self.state = GameState::Finished;
        }

        Ok(played)
    }

    /// Plays the game to the end and reports the final scores.
    ///
    /// Before every turn the table is reported to the interaction and, if
    /// [`GameOptions::pause_each_turn`](crate::GameOptions::pause_each_turn)
    /// is set, the game waits for an acknowledgment.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 or more than 4 players are seated, a
    /// turn fails, the turn limit is reached, or input closes while waiting
    /// for an acknowledgment.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy_eights::{Game, GameOptions, Scripted};
    ///
    /// let script = Scripted::new().with_player_count(2).with_names(["Ada", "Bo"]);
    /// let options = GameOptions::default().with_pause_each_turn(false);
    /// let mut game = Game::new(options, 7, script);
    /// game.seat_players().unwrap();
    ///
    /// let result = game.run().unwrap();
    /// assert_eq!(result.winner_score().map(|s| s.score), Some(0));
    /// ```
    pub fn run(&mut self) -> Result<GameResult, GameError> {
        let count = self.players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(SetupError::InvalidPlayerCount(count).into());
        }
        let Some(mut current) = self.players.first().map(Player::id) else {
            return Err(SetupError::InvalidPlayerCount(count).into());
        };

        log::info!("starting game with {count} players");
        self.state = GameState::InProgress;

        while !self.is_over() {
            if let Some(limit) = self.options.max_turns {
                if self.turns >= limit {
                    return Err(TurnError::TurnLimitReached(limit).into());
                }
            }

            let view = view_of(&self.table, &self.players)?;
            self.interaction.notify_state(&view);
            if self.options.pause_each_turn && !self.interaction.await_acknowledgment() {
                log::warn!("input closed after {} turns", self.turns);
                return Err(TurnError::Aborted.into());
            }

            self.take_turn(current)?;
            current = self.next_player(current)?;
        }

        self.state = GameState::Finished;
        let Some(result) = self.result() else {
            return Err(TurnError::GameOver.into());
        };
        self.interaction.notify_final_scores(&result.scores);
        Ok(result)
    }
}
