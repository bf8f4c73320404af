//! Game status.

/// Status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Moves remain to be played.
    #[default]
    InProgress,
    /// Every foundation is complete.
    Won,
    /// No productive move is left. Only recorded on request, see
    /// [`Game::check_stuck`](crate::Game::check_stuck).
    Stuck,
}

impl GameStatus {
    /// Returns whether the game has ended, won or stuck.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Stuck)
    }
}
