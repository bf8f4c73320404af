//! Piles and their kind-specific push/pop rules.

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank, Suit};
use crate::error::PileError;

/// Identifies a pile within a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PileId {
    /// The draw pile.
    Stock,
    /// The face-up discard pile fed by the stock.
    Waste,
    /// Foundation by index.
    Foundation(u8),
    /// Tableau column by index.
    Tableau(u8),
    /// Free cell by index.
    FreeCell(u8),
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stock => f.write_str("stock"),
            Self::Waste => f.write_str("waste"),
            Self::Foundation(i) => write!(f, "foundation {}", u16::from(*i) + 1),
            Self::Tableau(i) => write!(f, "tableau {}", u16::from(*i) + 1),
            Self::FreeCell(i) => write!(f, "free cell {}", u16::from(*i) + 1),
        }
    }
}

/// How cards are built down on a tableau column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Build {
    /// Descending rank, alternating red and black.
    #[default]
    AlternatingColors,
    /// Descending rank within one suit.
    SameSuit,
    /// Descending rank regardless of suit.
    AnySuit,
}

/// What an empty tableau column accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmptyTableau {
    /// Only a King may start a column.
    #[default]
    KingOnly,
    /// Any card may start a column.
    AnyCard,
}

/// Pile kind, carrying the parameters its rules depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PileKind {
    /// Face-down draw pile.
    Stock,
    /// Face-up discard pile.
    Waste,
    /// Built up from Ace to King in one suit.
    Foundation {
        /// The suit this foundation is bound to.
        suit: Suit,
    },
    /// Cascading column.
    Tableau {
        /// Building rule for face-up runs.
        build: Build,
        /// Rule for starting an empty column.
        empty: EmptyTableau,
    },
    /// Holding slot for a single card.
    FreeCell,
}

impl PileKind {
    /// Largest number of cards this kind can receive in one move.
    #[must_use]
    pub const fn max_incoming(&self) -> usize {
        match self {
            Self::Foundation { .. } | Self::FreeCell => 1,
            Self::Stock | Self::Waste | Self::Tableau { .. } => usize::MAX,
        }
    }
}

/// Returns whether `card` may be placed on a pile of `kind` whose top is `top`.
#[must_use]
pub fn accepts(kind: &PileKind, top: Option<&Card>, card: &Card) -> bool {
    match *kind {
        PileKind::Stock | PileKind::Waste => true,
        PileKind::Foundation { suit } => {
            card.suit() == suit
                && match top {
                    None => card.rank() == Rank::Ace,
                    Some(top) => top.rank().next() == Some(card.rank()),
                }
        }
        PileKind::Tableau { build, empty } => match top {
            None => match empty {
                EmptyTableau::KingOnly => card.rank() == Rank::King,
                EmptyTableau::AnyCard => true,
            },
            Some(top) => top.is_face_up() && builds_on(build, top, card),
        },
        PileKind::FreeCell => top.is_none(),
    }
}

/// Returns whether `upper` may sit directly on `lower` under `build`.
#[must_use]
pub fn builds_on(build: Build, lower: &Card, upper: &Card) -> bool {
    if lower.rank().prev() != Some(upper.rank()) {
        return false;
    }
    match build {
        Build::AlternatingColors => lower.is_opposite_color(upper),
        Build::SameSuit => lower.suit() == upper.suit(),
        Build::AnySuit => true,
    }
}

/// Returns whether the top `count` cards of `cards` may leave a pile of `kind`
/// together.
#[must_use]
pub fn is_movable_group(kind: &PileKind, cards: &[Card], count: usize) -> bool {
    if count == 0 || count > cards.len() {
        return false;
    }
    let group = &cards[cards.len() - count..];
    match *kind {
        PileKind::Stock => true,
        PileKind::Waste | PileKind::Foundation { .. } | PileKind::FreeCell => count == 1,
        PileKind::Tableau { build, .. } => {
            group.iter().all(Card::is_face_up)
                && group.windows(2).all(|pair| builds_on(build, &pair[0], &pair[1]))
        }
    }
}

/// A named, ordered stack of cards. The top of the pile is the last card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    id: PileId,
    kind: PileKind,
    cards: Vec<Card>,
}

impl Pile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new(id: PileId, kind: PileKind) -> Self {
        Self {
            id,
            kind,
            cards: Vec::new(),
        }
    }

    /// Creates a pile holding `cards` as dealt, bottom first. No rules are
    /// checked and orientations are kept as given.
    #[must_use]
    pub const fn with_cards(id: PileId, kind: PileKind, cards: Vec<Card>) -> Self {
        Self { id, kind, cards }
    }

    /// The pile's identifier.
    #[must_use]
    pub const fn id(&self) -> PileId {
        self.id
    }

    /// The pile's kind.
    #[must_use]
    pub const fn kind(&self) -> &PileKind {
        &self.kind
    }

    /// The cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The top card, if any.
    #[must_use]
    pub fn peek_top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether this pile's kind accepts `card` on its current top.
    #[must_use]
    pub fn accepts(&self, card: &Card) -> bool {
        accepts(&self.kind, self.peek_top(), card)
    }

    /// Returns whether the top `count` cards form a group that may leave this
    /// pile together.
    #[must_use]
    pub fn is_movable_group(&self, count: usize) -> bool {
        is_movable_group(&self.kind, &self.cards, count)
    }

    /// Returns whether this is a foundation holding Ace through King of its
    /// own suit, in order.
    #[must_use]
    pub fn is_complete_foundation(&self) -> bool {
        let PileKind::Foundation { suit } = self.kind else {
            return false;
        };
        self.cards.len() == Rank::ALL.len()
            && self
                .cards
                .iter()
                .zip(Rank::ALL)
                .all(|(card, rank)| card.suit() == suit && card.rank() == rank)
    }

    /// Pushes a card onto the pile.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::CapacityExceeded`] if the pile kind does not accept
    /// the card in its current state.
    pub fn push(&mut self, card: Card) -> Result<(), PileError> {
        if !self.accepts(&card) {
            return Err(PileError::CapacityExceeded);
        }
        self.cards.push(card);
        Ok(())
    }

    /// Removes the top `n` cards as an ordered group, bottom first.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::InsufficientCards`] if fewer than `n` cards exist or
    /// they do not form a movable group for this pile kind.
    pub fn pop(&mut self, n: usize) -> Result<Vec<Card>, PileError> {
        if !self.is_movable_group(n) {
            return Err(PileError::InsufficientCards);
        }
        Ok(self.take(n))
    }

    /// Removes the top `n` cards without checking any rule. `n` must not exceed
    /// the pile size.
    pub(crate) fn take(&mut self, n: usize) -> Vec<Card> {
        let at = self.cards.len().saturating_sub(n);
        self.cards.split_off(at)
    }

    /// Appends cards without checking any rule.
    pub(crate) fn place(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }
}
