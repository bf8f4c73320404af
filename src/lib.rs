//! A patience (solitaire) game engine core with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the board of a single session,
//! validates and applies moves, keeps undo/redo history, and detects wins.
//! Variants are [`RuleSet`] implementations; [`Klondike`] and [`FreeCell`] are
//! included.
//!
//! # Example
//!
//! ```
//! use patience::{GameStatus, PileId, new_game};
//!
//! let mut game = new_game("klondike", 42).unwrap();
//! let view = game.apply_move(PileId::Stock, PileId::Waste, 1).unwrap();
//! assert_eq!(view.status, GameStatus::InProgress);
//! game.undo().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod moves;
pub mod options;
pub mod pile;
pub mod rules;
pub mod view;

// Re-export main types
pub use board::Board;
pub use card::{Card, Color, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    CardError, DealError, DeckError, HistoryError, IllegalMove, MoveError, NewGameError, PileError,
};
pub use game::{Game, GameStatus};
pub use moves::{AppliedMove, Move, Transfer};
pub use options::{FreeCellOptions, KlondikeOptions};
pub use pile::{Build, EmptyTableau, Pile, PileId, PileKind};
pub use rules::{FreeCell, Klondike, RuleSet};
pub use view::{CardView, GameView, PileView};

/// Starts a game of the rule set registered under `rule_set_id`, dealt from
/// `seed`.
///
/// # Errors
///
/// Returns [`NewGameError::UnknownRuleSet`] if the id is not registered.
pub fn new_game(rule_set_id: &str, seed: u64) -> Result<Game, NewGameError> {
    Game::from_id(rule_set_id, seed)
}
