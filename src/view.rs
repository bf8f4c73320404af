//! Read-only snapshots for rendering.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::game::{Game, GameStatus};
use crate::pile::{Pile, PileId, PileKind};

/// A card as shown on the board. Unlike [`Card`], equality includes the
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardView {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
    /// Whether the card is face up.
    pub face_up: bool,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            suit: card.suit(),
            rank: card.rank(),
            face_up: card.is_face_up(),
        }
    }
}

impl From<CardView> for Card {
    fn from(view: CardView) -> Self {
        let mut card = Self::new(view.suit, view.rank);
        card.set_face_up(view.face_up);
        card
    }
}

/// Contents of one pile.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PileView {
    /// The pile's identifier.
    pub id: PileId,
    /// The pile's kind.
    pub kind: PileKind,
    /// Cards, bottom first.
    pub cards: Vec<CardView>,
}

impl PileView {
    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&CardView> {
        self.cards.last()
    }

    /// Rebuilds the pile this view was taken from.
    #[must_use]
    pub fn to_pile(&self) -> Pile {
        Pile::with_cards(
            self.id,
            self.kind,
            self.cards.iter().copied().map(Card::from).collect(),
        )
    }
}

impl From<&Pile> for PileView {
    fn from(pile: &Pile) -> Self {
        Self {
            id: pile.id(),
            kind: *pile.kind(),
            cards: pile.cards().iter().map(CardView::from).collect(),
        }
    }
}

/// Snapshot of a whole game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameView {
    /// Id of the rule set in play.
    pub rule_set: String,
    /// Every pile, in display order.
    pub piles: Vec<PileView>,
    /// Current status.
    pub status: GameStatus,
    /// Current score.
    pub score: i32,
    /// Number of moves in the undo history.
    pub moves: usize,
    /// Number of waste recycles so far.
    pub redeals: u32,
}

impl GameView {
    pub(crate) fn capture(game: &Game) -> Self {
        let board = game.board();
        Self {
            rule_set: String::from(game.rule_set().id()),
            piles: board.piles().iter().map(PileView::from).collect(),
            status: game.status(),
            score: game.score(),
            moves: game.history().len(),
            redeals: board.redeals(),
        }
    }

    /// Returns the view of the pile with the given id.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&PileView> {
        self.piles.iter().find(|pile| pile.id == id)
    }
}
