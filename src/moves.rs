//! Moves and move validation.

use crate::board::Board;
use crate::error::IllegalMove;
use crate::game::GameStatus;
use crate::pile::{Pile, PileId, PileKind};
use crate::rules::RuleSet;

/// A request to transfer the top `count` cards of one pile onto another.
///
/// A move is a plain value. Applying it either succeeds entirely or leaves the
/// game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Pile the cards leave.
    pub source: PileId,
    /// Pile the cards land on.
    pub dest: PileId,
    /// Number of cards moved.
    pub count: usize,
    /// Position of the move in the game's sequence of applied moves, starting
    /// at 1. Zero for a move that has not been applied.
    pub sequence: u64,
}

impl Move {
    /// Creates an unapplied move.
    #[must_use]
    pub const fn new(source: PileId, dest: PileId, count: usize) -> Self {
        Self {
            source,
            dest,
            count,
            sequence: 0,
        }
    }
}

/// How cards travel between piles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transfer {
    /// The group keeps its order and orientation.
    Plain,
    /// Stock to waste: cards are dealt one by one and turned face up.
    Deal,
    /// Waste to stock: the waste is turned over as a block, face down.
    Recycle,
}

/// Reorientation applied to a group in transit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Keep,
    Over { face_up: bool },
}

impl Transfer {
    const fn forward(self) -> Turn {
        match self {
            Self::Plain => Turn::Keep,
            Self::Deal => Turn::Over { face_up: true },
            Self::Recycle => Turn::Over { face_up: false },
        }
    }

    const fn backward(self) -> Turn {
        match self {
            Self::Plain => Turn::Keep,
            Self::Deal => Turn::Over { face_up: false },
            Self::Recycle => Turn::Over { face_up: true },
        }
    }
}

/// What a rule set sees when scoring a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEvent {
    /// Kind of the source pile.
    pub source: PileKind,
    /// Kind of the destination pile.
    pub dest: PileKind,
    /// How the cards travelled.
    pub transfer: Transfer,
    /// Number of cards moved.
    pub count: usize,
    /// Whether a tableau card was turned up as a result.
    pub revealed: bool,
}

/// A move as recorded in a game's history, with everything needed to reverse
/// it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppliedMove {
    /// The move, with its sequence number.
    pub mv: Move,
    /// How the cards travelled.
    pub transfer: Transfer,
    /// Whether the move turned up a newly exposed tableau card.
    pub revealed: bool,
    /// Score change actually applied.
    pub score_delta: i32,
    /// Status before the move.
    pub status_before: GameStatus,
    /// Status after the move.
    pub status_after: GameStatus,
}

/// Checks `mv` against the board and rule set without mutating anything.
///
/// # Errors
///
/// Returns the [`IllegalMove`] reason when the move is not legal.
pub fn validate(rules: &dyn RuleSet, board: &Board, mv: &Move) -> Result<Transfer, IllegalMove> {
    if mv.count == 0 {
        return Err(IllegalMove::ZeroCount);
    }
    if mv.source == mv.dest {
        return Err(IllegalMove::SamePile);
    }
    let source = board.pile(mv.source).ok_or(IllegalMove::UnknownPile)?;
    let dest = board.pile(mv.dest).ok_or(IllegalMove::UnknownPile)?;

    match (source.kind(), dest.kind()) {
        (PileKind::Stock, PileKind::Waste) => validate_deal(rules, source, mv.count),
        (PileKind::Waste, PileKind::Stock) => validate_recycle(rules, board, source, dest, mv.count),
        (PileKind::Stock, _) => Err(IllegalMove::NotMovable),
        (_, PileKind::Stock | PileKind::Waste) => Err(IllegalMove::DestinationRejects),
        _ => validate_plain(rules, board, source, dest, mv.count),
    }
}

fn validate_deal(rules: &dyn RuleSet, stock: &Pile, count: usize) -> Result<Transfer, IllegalMove> {
    if stock.is_empty() {
        return Err(IllegalMove::NotEnoughCards);
    }
    if count != rules.draw_count().clamp(1, stock.len()) {
        return Err(IllegalMove::WrongDrawCount);
    }
    Ok(Transfer::Deal)
}

fn validate_recycle(
    rules: &dyn RuleSet,
    board: &Board,
    waste: &Pile,
    stock: &Pile,
    count: usize,
) -> Result<Transfer, IllegalMove> {
    if !stock.is_empty() {
        return Err(IllegalMove::StockNotEmpty);
    }
    if waste.is_empty() {
        return Err(IllegalMove::NotEnoughCards);
    }
    if count != waste.len() {
        return Err(IllegalMove::NotMovable);
    }
    if rules
        .redeal_limit()
        .is_some_and(|limit| board.redeals() >= limit)
    {
        return Err(IllegalMove::RedealLimitReached);
    }
    Ok(Transfer::Recycle)
}

fn validate_plain(
    rules: &dyn RuleSet,
    board: &Board,
    source: &Pile,
    dest: &Pile,
    count: usize,
) -> Result<Transfer, IllegalMove> {
    if count > source.len() {
        return Err(IllegalMove::NotEnoughCards);
    }
    if !rules.is_movable_group(source, count) {
        return Err(IllegalMove::NotMovable);
    }
    if count > dest.kind().max_incoming() || count > rules.max_group_len(board, dest) {
        return Err(IllegalMove::GroupTooLarge);
    }
    let leading = &source.cards()[source.len() - count];
    if !rules.can_accept(dest, leading) {
        return Err(IllegalMove::DestinationRejects);
    }
    Ok(Transfer::Plain)
}

/// Carries out a validated move. Returns whether a tableau card was revealed,
/// or `None` if a pile id is missing, in which case nothing was changed.
pub(crate) fn execute(
    board: &mut Board,
    mv: &Move,
    transfer: Transfer,
    auto_reveal: bool,
) -> Option<bool> {
    board.pile(mv.source)?;
    relocate(board, mv.source, mv.dest, mv.count, transfer.forward())?;
    if transfer == Transfer::Recycle {
        board.set_redeals(board.redeals() + 1);
    }

    let source = board.pile_mut(mv.source)?;
    let exposes_tableau = matches!(source.kind(), PileKind::Tableau { .. });
    let revealed = match source.top_mut() {
        Some(top) if auto_reveal && exposes_tableau && !top.is_face_up() => {
            top.set_face_up(true);
            true
        }
        _ => false,
    };
    Some(revealed)
}

/// Reverses an applied move exactly, including any reveal it caused.
pub(crate) fn revert(board: &mut Board, applied: &AppliedMove) -> Option<()> {
    let mv = &applied.mv;
    board.pile(mv.source)?;
    board.pile(mv.dest)?;
    if applied.revealed {
        board.pile_mut(mv.source)?.top_mut()?.set_face_up(false);
    }
    relocate(board, mv.dest, mv.source, mv.count, applied.transfer.backward())?;
    if applied.transfer == Transfer::Recycle {
        board.set_redeals(board.redeals().saturating_sub(1));
    }
    Some(())
}

fn relocate(board: &mut Board, from: PileId, to: PileId, count: usize, turn: Turn) -> Option<()> {
    board.pile(to)?;
    let mut group = board.pile_mut(from)?.take(count);
    if let Turn::Over { face_up } = turn {
        group.reverse();
        for card in &mut group {
            card.set_face_up(face_up);
        }
    }
    board.pile_mut(to)?.place(group);
    Some(())
}
