use alloc::vec::Vec;
use tracing::{debug, trace};

use crate::error::{IllegalMove, MoveError};
use crate::moves::{self, AppliedMove, Move, ScoreEvent, Transfer};
use crate::pile::{Pile, PileId, PileKind};
use crate::view::GameView;

use super::{Game, GameStatus};

impl Game {
    /// Checks a move without applying it.
    ///
    /// # Errors
    ///
    /// Returns the reason the move is illegal.
    pub fn validate(
        &self,
        source: PileId,
        dest: PileId,
        count: usize,
    ) -> Result<Transfer, IllegalMove> {
        moves::validate(&*self.rules, &self.board, &Move::new(source, dest, count))
    }

    /// Returns whether a move is legal.
    #[must_use]
    pub fn is_legal(&self, source: PileId, dest: PileId, count: usize) -> bool {
        self.validate(source, dest, count).is_ok()
    }

    /// Moves the top `count` cards of `source` onto `dest`.
    ///
    /// On success the newly exposed tableau card is turned up if the rule set
    /// says so, the move is recorded for undo, the redo history is discarded,
    /// and the status is re-evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::IllegalMove`] if the move fails validation. The game
    /// is left exactly as it was.
    pub fn apply_move(
        &mut self,
        source: PileId,
        dest: PileId,
        count: usize,
    ) -> Result<GameView, MoveError> {
        let mut mv = Move::new(source, dest, count);
        let transfer = match moves::validate(&*self.rules, &self.board, &mv) {
            Ok(transfer) => transfer,
            Err(reason) => {
                trace!(%source, %dest, count, %reason, "rejected move");
                return Err(reason.into());
            }
        };
        let (Some(source_kind), Some(dest_kind)) = (self.pile_kind(source), self.pile_kind(dest))
        else {
            return Err(IllegalMove::UnknownPile.into());
        };

        let revealed = moves::execute(&mut self.board, &mv, transfer, self.rules.auto_reveal())
            .ok_or(IllegalMove::UnknownPile)?;

        self.sequence += 1;
        mv.sequence = self.sequence;

        let delta = self.rules.score(&ScoreEvent {
            source: source_kind,
            dest: dest_kind,
            transfer,
            count,
            revealed,
        });
        let score = self.score.saturating_add(delta).max(0);
        let score_delta = score - self.score;
        self.score = score;

        let status_before = self.status;
        self.status = self.evaluate_status();

        self.undo_stack.push(AppliedMove {
            mv,
            transfer,
            revealed,
            score_delta,
            status_before,
            status_after: self.status,
        });
        self.redo_stack.clear();

        debug!(
            sequence = mv.sequence,
            %source,
            %dest,
            count,
            revealed,
            score = self.score,
            status = ?self.status,
            "applied move"
        );
        Ok(self.view())
    }

    /// Applies a move value. Its sequence number is ignored and reassigned.
    ///
    /// # Errors
    ///
    /// See [`apply_move`](Self::apply_move).
    pub fn apply(&mut self, mv: Move) -> Result<GameView, MoveError> {
        self.apply_move(mv.source, mv.dest, mv.count)
    }

    /// Deals from the stock, or recycles the waste when the stock is empty.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::IllegalMove`] if the layout has no stock, or if both
    /// piles are exhausted or the redeal limit is reached.
    pub fn draw_or_recycle(&mut self) -> Result<GameView, MoveError> {
        let stock = self.pile_len(PileId::Stock);
        if stock > 0 {
            let count = self.rules.draw_count().clamp(1, stock);
            self.apply_move(PileId::Stock, PileId::Waste, count)
        } else {
            let waste = self.pile_len(PileId::Waste).max(1);
            self.apply_move(PileId::Waste, PileId::Stock, waste)
        }
    }

    /// Lists every legal move on the current board.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let piles = self.board.piles();
        let mut legal = Vec::new();
        for source in piles {
            for dest in piles {
                if source.id() == dest.id() {
                    continue;
                }
                for count in 1..=source.len() {
                    let mv = Move::new(source.id(), dest.id(), count);
                    if moves::validate(&*self.rules, &self.board, &mv).is_ok() {
                        legal.push(mv);
                    }
                }
            }
        }
        legal
    }

    /// Returns whether no legal move is left apart from taking cards back off
    /// the foundations.
    ///
    /// Dealing and recycling count as legal moves, so a game is only stuck
    /// once the stock is empty and cycling the waste is exhausted or not
    /// allowed. This enumerates every move and is not run automatically.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        if self.status == GameStatus::Won {
            return false;
        }
        self.legal_moves()
            .iter()
            .all(|mv| matches!(self.pile_kind(mv.source), Some(PileKind::Foundation { .. })))
    }

    /// Runs stuck detection and records [`GameStatus::Stuck`] if it applies.
    ///
    /// Returns the resulting status. A later move or undo re-evaluates the
    /// status as usual.
    pub fn check_stuck(&mut self) -> GameStatus {
        if self.status == GameStatus::InProgress && self.is_stuck() {
            self.status = GameStatus::Stuck;
            debug!("game is stuck");
        }
        self.status
    }

    fn pile_kind(&self, id: PileId) -> Option<PileKind> {
        self.board.pile(id).map(|pile| *pile.kind())
    }

    fn pile_len(&self, id: PileId) -> usize {
        self.board.pile(id).map_or(0, Pile::len)
    }
}
