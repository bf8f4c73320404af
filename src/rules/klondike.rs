use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::deck::Deck;
use crate::error::DealError;
use crate::moves::{ScoreEvent, Transfer};
use crate::options::KlondikeOptions;
use crate::pile::{Build, Pile, PileId, PileKind};

use super::{RuleSet, draw_full};

/// Number of tableau columns.
pub const KLONDIKE_COLUMNS: usize = 7;

/// Klondike: seven cascading columns, a stock, a waste, and four foundations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Klondike {
    options: KlondikeOptions,
}

impl Klondike {
    /// Creates the rule set with the given options.
    #[must_use]
    pub const fn new(options: KlondikeOptions) -> Self {
        Self { options }
    }

    /// The options in effect.
    #[must_use]
    pub const fn options(&self) -> &KlondikeOptions {
        &self.options
    }

    const fn tableau_kind(&self) -> PileKind {
        PileKind::Tableau {
            build: Build::AlternatingColors,
            empty: self.options.empty_tableau,
        }
    }
}

impl RuleSet for Klondike {
    fn id(&self) -> &'static str {
        let preset = KlondikeOptions::default();
        if self.options == preset {
            "klondike"
        } else if self.options == preset.with_draw_count(3) {
            "klondike-draw3"
        } else {
            "klondike-custom"
        }
    }

    fn name(&self) -> &'static str {
        "Klondike"
    }

    fn initial_deal(&self, deck: Deck) -> Result<Vec<Pile>, DealError> {
        let mut cards = draw_full(deck)?.into_iter();

        // Deal row by row; the last card of each column lands face up.
        let mut columns: Vec<Vec<Card>> = (0..KLONDIKE_COLUMNS)
            .map(|col| Vec::with_capacity(col + 1))
            .collect();
        for row in 0..KLONDIKE_COLUMNS {
            for (col, column) in columns.iter_mut().enumerate().skip(row) {
                let mut card = cards.next().ok_or(DealError::IncompleteDeck)?;
                card.set_face_up(row == col);
                column.push(card);
            }
        }

        // The next card to deal sits on top of the stock.
        let mut stock: Vec<Card> = cards
            .map(|mut card| {
                card.set_face_up(false);
                card
            })
            .collect();
        stock.reverse();

        let mut piles = Vec::with_capacity(2 + Suit::ALL.len() + KLONDIKE_COLUMNS);
        piles.push(Pile::with_cards(PileId::Stock, PileKind::Stock, stock));
        piles.push(Pile::new(PileId::Waste, PileKind::Waste));
        for (i, suit) in Suit::ALL.into_iter().enumerate() {
            piles.push(Pile::new(
                PileId::Foundation(i as u8),
                PileKind::Foundation { suit },
            ));
        }
        for (i, column) in columns.into_iter().enumerate() {
            piles.push(Pile::with_cards(
                PileId::Tableau(i as u8),
                self.tableau_kind(),
                column,
            ));
        }
        Ok(piles)
    }

    fn is_movable_group(&self, pile: &Pile, count: usize) -> bool {
        if matches!(pile.kind(), PileKind::Foundation { .. }) && !self.options.allow_foundation_return
        {
            return false;
        }
        pile.is_movable_group(count)
    }

    fn draw_count(&self) -> usize {
        usize::from(self.options.draw_count.max(1))
    }

    fn redeal_limit(&self) -> Option<u32> {
        self.options.redeal_limit
    }

    fn score(&self, event: &ScoreEvent) -> i32 {
        match event.transfer {
            Transfer::Deal => 0,
            Transfer::Recycle => {
                if self.draw_count() == 1 {
                    -self.options.recycle_penalty
                } else {
                    0
                }
            }
            Transfer::Plain => {
                let base = match (event.source, event.dest) {
                    (PileKind::Waste, PileKind::Tableau { .. }) => 5,
                    (_, PileKind::Foundation { .. }) => 10,
                    (PileKind::Foundation { .. }, PileKind::Tableau { .. }) => -15,
                    _ => 0,
                };
                if event.revealed { base + 5 } else { base }
            }
        }
    }
}
