//! Variant policies.
//!
//! A [`RuleSet`] is a stateless, immutable policy object. One instance can be
//! shared by any number of games, across threads.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::board::Board;
use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::moves::ScoreEvent;
use crate::options::{FreeCellOptions, KlondikeOptions};
use crate::pile::Pile;

mod freecell;
mod klondike;

pub use freecell::{FREECELL_COLUMNS, FreeCell};
pub use klondike::{KLONDIKE_COLUMNS, Klondike};

/// Ids accepted by [`by_id`].
pub const RULE_SET_IDS: [&str; 3] = ["klondike", "klondike-draw3", "freecell"];

/// Legality, layout, and win policy for one patience variant.
///
/// The default methods express the behaviour shared by single-deck variants:
/// pile-kind rules decide movability and acceptance, foundations complete the
/// game, and nothing scores.
pub trait RuleSet: fmt::Debug + Send + Sync {
    /// Stable identifier of the variant.
    ///
    /// Registered presets report the id [`by_id`] knows them by. Any other
    /// configuration reports a `-custom` id that [`by_id`] does not resolve,
    /// so callers restoring such a game must keep the options themselves.
    fn id(&self) -> &'static str;

    /// Human-readable variant name.
    fn name(&self) -> &'static str;

    /// Distributes a shuffled deck into the variant's initial piles, in display
    /// order, with orientations set.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::IncompleteDeck`] if `deck` is not a full standard
    /// deck.
    fn initial_deal(&self, deck: Deck) -> Result<Vec<Pile>, DealError>;

    /// Returns whether the top `count` cards of `pile` may be moved together.
    fn is_movable_group(&self, pile: &Pile, count: usize) -> bool {
        pile.is_movable_group(count)
    }

    /// Returns whether `dest` accepts a group led by `leading`.
    fn can_accept(&self, dest: &Pile, leading: &Card) -> bool {
        dest.accepts(leading)
    }

    /// Largest group that may move onto `dest` given the rest of the board.
    fn max_group_len(&self, _board: &Board, _dest: &Pile) -> usize {
        usize::MAX
    }

    /// Cards dealt from the stock to the waste per deal.
    fn draw_count(&self) -> usize {
        1
    }

    /// Maximum number of waste recycles, or `None` for unlimited.
    fn redeal_limit(&self) -> Option<u32> {
        None
    }

    /// Whether a face-down tableau card exposed by a move is turned up.
    fn auto_reveal(&self) -> bool {
        true
    }

    /// Score change for an applied move.
    fn score(&self, _event: &ScoreEvent) -> i32 {
        0
    }

    /// Returns whether the board is won.
    fn is_win(&self, board: &Board) -> bool {
        board.all_foundations_complete()
    }
}

/// Returns the default rule set registered under `id`.
///
/// ```
/// let rules = patience::rules::by_id("klondike").unwrap();
/// assert_eq!(rules.id(), "klondike");
/// assert!(patience::rules::by_id("spider").is_none());
/// ```
#[must_use]
pub fn by_id(id: &str) -> Option<Arc<dyn RuleSet>> {
    match id {
        "klondike" => Some(Arc::new(Klondike::default())),
        "klondike-draw3" => Some(Arc::new(Klondike::new(
            KlondikeOptions::default().with_draw_count(3),
        ))),
        "freecell" => Some(Arc::new(FreeCell::new(FreeCellOptions::default()))),
        _ => None,
    }
}

/// Checks the deck and draws it whole, in deal order.
pub(crate) fn draw_full(mut deck: Deck) -> Result<Vec<Card>, DealError> {
    if !deck.is_complete() {
        return Err(DealError::IncompleteDeck);
    }
    let remaining = deck.remaining();
    Ok(deck.draw(remaining)?)
}
