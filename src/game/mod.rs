//! Game engine and state management.

use alloc::sync::Arc;
use alloc::vec::Vec;
use tracing::{debug, instrument};

use crate::board::Board;
use crate::deck::Deck;
use crate::error::{DealError, NewGameError};
use crate::moves::AppliedMove;
use crate::pile::Pile;
use crate::rules::{self, RuleSet};
use crate::view::GameView;

mod actions;
mod history;
pub mod state;

pub use state::GameStatus;

/// A patience game session: the board, its move history, and the rule set
/// that governs it.
///
/// The game exclusively owns its piles and is mutated only through
/// [`apply_move`](Self::apply_move), [`undo`](Self::undo), and
/// [`redo`](Self::redo). It holds no locks; callers sharing one game across
/// threads must serialize access themselves. The rule set is immutable and may
/// be shared by any number of games.
#[derive(Debug, Clone)]
pub struct Game {
    rules: Arc<dyn RuleSet>,
    board: Board,
    initial: Board,
    status: GameStatus,
    score: i32,
    seed: Option<u64>,
    undo_stack: Vec<AppliedMove>,
    redo_stack: Vec<AppliedMove>,
    sequence: u64,
}

impl Game {
    /// Creates a new game by dealing a deck shuffled with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use patience::{Game, rules};
    ///
    /// let rules = rules::by_id("klondike").unwrap();
    /// let game = Game::new(rules, 42).unwrap();
    /// assert_eq!(game.board().stock().unwrap().len(), 24);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the rule set fails to deal.
    #[instrument(skip(rules), fields(rule_set = rules.id()))]
    pub fn new(rules: Arc<dyn RuleSet>, seed: u64) -> Result<Self, DealError> {
        let piles = rules.initial_deal(Deck::shuffled(seed))?;
        let mut game = Self::assemble(rules, Board::new(piles));
        game.seed = Some(seed);
        debug!(seed, "dealt new game");
        Ok(game)
    }

    /// Creates a new game from a registered rule set id.
    ///
    /// # Errors
    ///
    /// Returns [`NewGameError::UnknownRuleSet`] if no rule set is registered
    /// under `rule_set_id`.
    pub fn from_id(rule_set_id: &str, seed: u64) -> Result<Self, NewGameError> {
        let rules = rules::by_id(rule_set_id).ok_or(NewGameError::UnknownRuleSet)?;
        Ok(Self::new(rules, seed)?)
    }

    /// Creates a game from an explicit layout, for example one restored from an
    /// external snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::IncompleteDeck`] unless the piles hold exactly the
    /// 52 standard cards.
    pub fn from_piles(rules: Arc<dyn RuleSet>, piles: Vec<Pile>) -> Result<Self, DealError> {
        Self::from_board(rules, Board::new(piles))
    }

    /// Creates a game from a prepared board, keeping its redeal counter.
    ///
    /// ```
    /// use patience::{Board, Game, rules};
    ///
    /// let dealt = patience::new_game("klondike", 3).unwrap();
    /// let board = Board::new(dealt.board().piles().to_vec()).with_redeals(2);
    /// let game = Game::from_board(rules::by_id("klondike").unwrap(), board).unwrap();
    /// assert_eq!(game.view().redeals, 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DealError::IncompleteDeck`] unless the board holds exactly the
    /// 52 standard cards.
    pub fn from_board(rules: Arc<dyn RuleSet>, board: Board) -> Result<Self, DealError> {
        if !board.is_conserved() {
            return Err(DealError::IncompleteDeck);
        }
        let mut game = Self::assemble(rules, board);
        game.status = game.evaluate_status();
        Ok(game)
    }

    fn assemble(rules: Arc<dyn RuleSet>, board: Board) -> Self {
        Self {
            rules,
            initial: board.clone(),
            board,
            status: GameStatus::InProgress,
            score: 0,
            seed: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            sequence: 0,
        }
    }

    /// Returns to the initial layout, clearing history and score.
    ///
    /// Sequence numbers keep counting from where they were.
    pub fn restart(&mut self) {
        self.board = self.initial.clone();
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.score = 0;
        self.status = self.evaluate_status();
        debug!("restarted game");
    }

    /// The rule set governing this game.
    #[must_use]
    pub fn rule_set(&self) -> &Arc<dyn RuleSet> {
        &self.rules
    }

    /// The current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The current status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The current score.
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// The seed the game was dealt from, if it was dealt from one.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[AppliedMove] {
        &self.undo_stack
    }

    /// Undone moves available to redo, the next redo last.
    #[must_use]
    pub fn redo_history(&self) -> &[AppliedMove] {
        &self.redo_stack
    }

    /// Returns whether [`undo`](Self::undo) would succeed.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns whether [`redo`](Self::redo) would succeed.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Returns a read-only snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::capture(self)
    }

    fn evaluate_status(&self) -> GameStatus {
        if self.rules.is_win(&self.board) {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}
