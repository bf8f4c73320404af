//! Error types for engine operations.
//!
//! Every error is local to the call that produced it: the game, deck, or pile
//! involved is left unchanged and the call may be retried.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `1..=13`.
    #[error("invalid rank {0}, expected 1..=13")]
    InvalidRank(u8),
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Fewer cards remain than were requested.
    #[error("cannot draw {requested} cards, only {remaining} remain")]
    EmptyDeck {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur during direct pile operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// The pile kind does not accept this card in its current state.
    #[error("pile cannot accept this card")]
    CapacityExceeded,
    /// The pile holds fewer cards than requested, or the requested group is not
    /// a movable run.
    #[error("pile does not hold a movable group of that size")]
    InsufficientCards,
}

/// Errors that can occur while dealing the initial layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck is not a complete standard deck.
    #[error("deck is not a complete 52-card deck")]
    IncompleteDeck,
    /// Drawing from the deck failed.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Reason a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum IllegalMove {
    /// A move must transfer at least one card.
    #[error("move transfers no cards")]
    ZeroCount,
    /// Source and destination are the same pile.
    #[error("source and destination are the same pile")]
    SamePile,
    /// A pile named by the move does not exist in this layout.
    #[error("pile does not exist in this layout")]
    UnknownPile,
    /// The source holds fewer cards than requested.
    #[error("source pile holds too few cards")]
    NotEnoughCards,
    /// The requested cards do not form a movable group.
    #[error("cards are not a movable group")]
    NotMovable,
    /// The destination does not accept the leading card.
    #[error("destination pile does not accept the card")]
    DestinationRejects,
    /// The group is larger than the variant allows for this move.
    #[error("group is too large to move")]
    GroupTooLarge,
    /// A deal from the stock must move exactly the draw count.
    #[error("wrong number of cards dealt from the stock")]
    WrongDrawCount,
    /// The waste can only be recycled into an empty stock.
    #[error("stock is not empty")]
    StockNotEmpty,
    /// The variant's redeal limit has been reached.
    #[error("no redeals remaining")]
    RedealLimitReached,
}

/// Errors that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The move failed validation; the game is unchanged.
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),
}

/// Errors that can occur when walking the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// No applied move to undo.
    #[error("nothing to undo")]
    NothingToUndo,
    /// No undone move to redo.
    #[error("nothing to redo")]
    NothingToRedo,
}

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewGameError {
    /// No rule set is registered under the given id.
    #[error("unknown rule set")]
    UnknownRuleSet,
    /// The rule set failed to deal.
    #[error(transparent)]
    Deal(#[from] DealError),
}
