//! Game configuration options.
//!
//! Options only control how the engine drives a game. The rules themselves
//! are fixed.

/// Configuration options for a Crazy Eights game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use crazy_eights::GameOptions;
///
/// let options = GameOptions::default()
///     .with_pause_each_turn(false)
///     .with_max_turns(Some(500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Whether to wait for an acknowledgment before every turn.
    pub pause_each_turn: bool,
    /// Number of turns after which a game without a winner is abandoned.
    /// `None` to play until someone wins.
    pub max_turns: Option<usize>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            pause_each_turn: true,
            max_turns: None,
        }
    }
}

impl GameOptions {
    /// Sets whether to wait for an acknowledgment before every turn.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy_eights::GameOptions;
    ///
    /// let options = GameOptions::default().with_pause_each_turn(false);
    /// assert_eq!(options.pause_each_turn, false);
    /// ```
    #[must_use]
    pub const fn with_pause_each_turn(mut self, pause: bool) -> Self {
        self.pause_each_turn = pause;
        self
    }

    /// Sets the turn limit.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy_eights::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_turns(Some(200));
    /// assert_eq!(options.max_turns, Some(200));
    /// ```
    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: Option<usize>) -> Self {
        self.max_turns = max_turns;
        self
    }
}
