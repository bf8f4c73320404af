//! The full set of piles in play.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;
use crate::deck::is_full_set;
use crate::pile::{Pile, PileId, PileKind};

/// Every pile of a layout plus the counters rule sets consult.
///
/// The board exclusively owns its piles. It is read-only outside the crate; a
/// [`Game`](crate::Game) mutates it only through validated moves.
#[derive(Debug, Clone)]
pub struct Board {
    piles: Vec<Pile>,
    index: HashMap<PileId, usize>,
    redeals: u32,
}

impl Board {
    /// Creates a board from dealt piles, in display order.
    ///
    /// If two piles share an id, the later one is unreachable by id.
    #[must_use]
    pub fn new(piles: Vec<Pile>) -> Self {
        let mut index = HashMap::with_capacity(piles.len());
        for (position, pile) in piles.iter().enumerate() {
            index.entry(pile.id()).or_insert(position);
        }
        Self {
            piles,
            index,
            redeals: 0,
        }
    }

    /// Sets the redeal counter, for boards restored from a snapshot.
    #[must_use]
    pub const fn with_redeals(mut self, redeals: u32) -> Self {
        self.redeals = redeals;
        self
    }

    /// Returns the pile with the given id.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        self.index.get(&id).and_then(|&position| self.piles.get(position))
    }

    pub(crate) fn pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        let position = *self.index.get(&id)?;
        self.piles.get_mut(position)
    }

    /// All piles, in display order.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// The stock, if this layout has one.
    #[must_use]
    pub fn stock(&self) -> Option<&Pile> {
        self.pile(PileId::Stock)
    }

    /// The waste, if this layout has one.
    #[must_use]
    pub fn waste(&self) -> Option<&Pile> {
        self.pile(PileId::Waste)
    }

    /// Iterates over the foundations.
    pub fn foundations(&self) -> impl Iterator<Item = &Pile> {
        self.piles_of(|kind| matches!(kind, PileKind::Foundation { .. }))
    }

    /// Iterates over the tableau columns.
    pub fn tableau(&self) -> impl Iterator<Item = &Pile> {
        self.piles_of(|kind| matches!(kind, PileKind::Tableau { .. }))
    }

    /// Iterates over the free cells.
    pub fn free_cells(&self) -> impl Iterator<Item = &Pile> {
        self.piles_of(|kind| matches!(kind, PileKind::FreeCell))
    }

    fn piles_of(&self, filter: impl Fn(&PileKind) -> bool) -> impl Iterator<Item = &Pile> {
        self.piles.iter().filter(move |pile| filter(pile.kind()))
    }

    /// Number of times the waste has been recycled into the stock.
    #[must_use]
    pub const fn redeals(&self) -> u32 {
        self.redeals
    }

    pub(crate) const fn set_redeals(&mut self, redeals: u32) {
        self.redeals = redeals;
    }

    /// Iterates over every card on the board.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.piles.iter().flat_map(|pile| pile.cards().iter())
    }

    /// Returns whether the board holds exactly one of each of the 52 cards.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        is_full_set(self.cards())
    }

    /// Returns whether every foundation holds all thirteen ranks.
    #[must_use]
    pub fn all_foundations_complete(&self) -> bool {
        let mut foundations = self.foundations().peekable();
        foundations.peek().is_some() && foundations.all(Pile::is_complete_foundation)
    }
}
