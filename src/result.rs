//! Final score types.

/// Final score of a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    /// The player ID.
    pub player_id: u8,
    /// The player's name.
    pub name: String,
    /// Penalty points left in the hand (0 for the winner).
    pub score: u32,
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Scores for each player, in turn order.
    pub scores: Vec<PlayerScore>,
    /// The player who emptied their hand.
    pub winner: u8,
    /// Number of turns taken.
    pub turns: usize,
}

impl GameResult {
    /// Returns the score record of the winner.
    #[must_use]
    pub fn winner_score(&self) -> Option<&PlayerScore> {
        self.scores
            .iter()
            .find(|score| score.player_id == self.winner)
    }
}
