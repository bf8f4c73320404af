use alloc::vec::Vec;

use crate::board::Board;
use crate::card::{Card, Suit};
use crate::deck::Deck;
use crate::error::DealError;
use crate::options::FreeCellOptions;
use crate::pile::{Build, Pile, PileId, PileKind};

use super::{RuleSet, draw_full};

/// Number of tableau columns.
pub const FREECELL_COLUMNS: usize = 8;

/// FreeCell: eight open columns, free cells, and four foundations.
///
/// Every card is dealt face up. Multi-card moves are limited by the number of
/// empty free cells and empty columns available to stage them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FreeCell {
    options: FreeCellOptions,
}

impl FreeCell {
    /// Creates the rule set with the given options.
    #[must_use]
    pub const fn new(options: FreeCellOptions) -> Self {
        Self { options }
    }

    /// The options in effect.
    #[must_use]
    pub const fn options(&self) -> &FreeCellOptions {
        &self.options
    }
}

impl RuleSet for FreeCell {
    fn id(&self) -> &'static str {
        if self.options == FreeCellOptions::default() {
            "freecell"
        } else {
            "freecell-custom"
        }
    }

    fn name(&self) -> &'static str {
        "FreeCell"
    }

    fn initial_deal(&self, deck: Deck) -> Result<Vec<Pile>, DealError> {
        let mut columns: Vec<Vec<Card>> = (0..FREECELL_COLUMNS).map(|_| Vec::new()).collect();
        for (i, card) in draw_full(deck)?.into_iter().enumerate() {
            columns[i % FREECELL_COLUMNS].push(card.turned_up());
        }

        let cells = usize::from(self.options.free_cells);
        let mut piles = Vec::with_capacity(cells + Suit::ALL.len() + FREECELL_COLUMNS);
        for i in 0..cells {
            piles.push(Pile::new(PileId::FreeCell(i as u8), PileKind::FreeCell));
        }
        for (i, suit) in Suit::ALL.into_iter().enumerate() {
            piles.push(Pile::new(
                PileId::Foundation(i as u8),
                PileKind::Foundation { suit },
            ));
        }
        let tableau = PileKind::Tableau {
            build: Build::AlternatingColors,
            empty: self.options.empty_tableau,
        };
        for (i, column) in columns.into_iter().enumerate() {
            piles.push(Pile::with_cards(PileId::Tableau(i as u8), tableau, column));
        }
        Ok(piles)
    }

    fn is_movable_group(&self, pile: &Pile, count: usize) -> bool {
        !matches!(pile.kind(), PileKind::Foundation { .. }) && pile.is_movable_group(count)
    }

    fn max_group_len(&self, board: &Board, dest: &Pile) -> usize {
        let free_cells = board.free_cells().filter(|cell| cell.is_empty()).count();
        let empty_columns = board
            .tableau()
            .filter(|column| column.is_empty() && column.id() != dest.id())
            .count();
        (free_cells + 1).saturating_mul(1 << empty_columns.min(16))
    }
}
