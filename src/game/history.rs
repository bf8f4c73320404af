use tracing::debug;

use crate::error::HistoryError;
use crate::moves;
use crate::view::GameView;

use super::Game;

impl Game {
    /// Reverses the most recent move, including any card it turned up, and
    /// makes it available to [`redo`](Self::redo).
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NothingToUndo`] if no move has been applied.
    pub fn undo(&mut self) -> Result<GameView, HistoryError> {
        let applied = self.undo_stack.pop().ok_or(HistoryError::NothingToUndo)?;
        if moves::revert(&mut self.board, &applied).is_none() {
            self.undo_stack.push(applied);
            return Err(HistoryError::NothingToUndo);
        }
        self.score -= applied.score_delta;
        self.status = applied.status_before;
        self.redo_stack.push(applied);

        debug!(sequence = applied.mv.sequence, "undid move");
        Ok(self.view())
    }

    /// Re-applies the most recently undone move.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NothingToRedo`] if nothing has been undone since
    /// the last new move.
    pub fn redo(&mut self) -> Result<GameView, HistoryError> {
        let applied = self.redo_stack.pop().ok_or(HistoryError::NothingToRedo)?;
        let replayed = moves::execute(
            &mut self.board,
            &applied.mv,
            applied.transfer,
            applied.revealed,
        );
        if replayed.is_none() {
            self.redo_stack.push(applied);
            return Err(HistoryError::NothingToRedo);
        }
        self.score += applied.score_delta;
        self.status = applied.status_after;
        self.undo_stack.push(applied);

        debug!(sequence = applied.mv.sequence, "redid move");
        Ok(self.view())
    }
}
