//! Card, deck, and pile tests.

use patience::{
    Build, Card, CardError, DECK_SIZE, Deck, DeckError, EmptyTableau, Pile, PileError, PileId,
    PileKind, Rank, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

const fn up(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank).turned_up()
}

const TABLEAU: PileKind = PileKind::Tableau {
    build: Build::AlternatingColors,
    empty: EmptyTableau::KingOnly,
};

#[test]
fn card_starts_face_down_and_flips() {
    let mut king = card(Suit::Spades, Rank::King);
    assert_eq!(king.suit(), Suit::Spades);
    assert_eq!(king.rank(), Rank::King);
    assert!(!king.is_face_up());

    king.flip();
    assert!(king.is_face_up());
    king.flip();
    assert!(!king.is_face_up());
}

#[test]
fn card_copy_is_independent() {
    let mut ace = card(Suit::Hearts, Rank::Ace);
    ace.flip();
    let mut copy = ace;
    assert_eq!(copy.suit(), ace.suit());
    assert_eq!(copy.rank(), ace.rank());
    assert_eq!(copy.is_face_up(), ace.is_face_up());

    copy.flip();
    assert!(ace.is_face_up());
    assert!(!copy.is_face_up());
}

#[test]
fn card_equality_ignores_orientation() {
    let a = card(Suit::Hearts, Rank::Ace);
    let b = up(Suit::Hearts, Rank::Ace);
    let c = card(Suit::Spades, Rank::Ace);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a < c);
}

#[test]
fn rank_conversion_rejects_out_of_range() {
    assert_eq!(Rank::try_from(1), Ok(Rank::Ace));
    assert_eq!(Rank::try_from(13), Ok(Rank::King));
    assert_eq!(Rank::try_from(0), Err(CardError::InvalidRank(0)));
    assert_eq!(Rank::try_from(14), Err(CardError::InvalidRank(14)));
    assert_eq!(
        Card::from_value(Suit::Clubs, 20).unwrap_err(),
        CardError::InvalidRank(20)
    );

    assert_eq!(Rank::King.next(), None);
    assert_eq!(Rank::Ace.prev(), None);
    assert_eq!(Rank::Queen.next(), Some(Rank::King));
}

#[test]
fn card_display_uses_short_labels() {
    assert_eq!(card(Suit::Hearts, Rank::Ace).to_string(), "AH");
    assert_eq!(card(Suit::Clubs, Rank::Ten).to_string(), "10C");
}

#[test]
fn standard_deck_is_complete_and_face_down() {
    let deck = Deck::standard();
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert!(deck.is_complete());
    assert!(deck.cards().iter().all(|c| !c.is_face_up()));
    assert_eq!(deck.cards()[0], card(Suit::Hearts, Rank::Ace));
    assert_eq!(deck.cards()[51], card(Suit::Spades, Rank::King));
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    let a = Deck::shuffled(42);
    let b = Deck::shuffled(42);
    let c = Deck::shuffled(43);

    assert_eq!(a.cards(), b.cards());
    assert_ne!(a.cards(), c.cards());
    assert_ne!(a.cards(), Deck::standard().cards());
    assert!(a.is_complete());
}

#[test]
fn draw_takes_from_the_top() {
    let mut deck = Deck::standard();
    let drawn = deck.draw(2).unwrap();
    assert_eq!(
        drawn,
        vec![card(Suit::Spades, Rank::King), card(Suit::Spades, Rank::Queen)]
    );
    assert_eq!(deck.remaining(), 50);
}

#[test]
fn draw_beyond_remaining_fails_without_change() {
    let mut deck = Deck::standard();
    deck.draw(50).unwrap();

    assert_eq!(
        deck.draw(3).unwrap_err(),
        DeckError::EmptyDeck {
            requested: 3,
            remaining: 2
        }
    );
    assert_eq!(deck.remaining(), 2);
    assert_eq!(deck.draw(2).unwrap().len(), 2);
    assert!(deck.is_empty());
}

#[test]
fn foundation_builds_up_in_suit_from_ace() {
    let mut pile = Pile::new(
        PileId::Foundation(0),
        PileKind::Foundation { suit: Suit::Hearts },
    );

    assert_eq!(
        pile.push(up(Suit::Hearts, Rank::Two)).unwrap_err(),
        PileError::CapacityExceeded
    );
    pile.push(up(Suit::Hearts, Rank::Ace)).unwrap();
    assert_eq!(
        pile.push(up(Suit::Spades, Rank::Two)).unwrap_err(),
        PileError::CapacityExceeded
    );
    assert_eq!(
        pile.push(up(Suit::Hearts, Rank::Three)).unwrap_err(),
        PileError::CapacityExceeded
    );
    pile.push(up(Suit::Hearts, Rank::Two)).unwrap();
    assert_eq!(pile.len(), 2);
    assert_eq!(pile.peek_top(), Some(&card(Suit::Hearts, Rank::Two)));
    assert!(!pile.is_complete_foundation());
}

#[test]
fn free_cell_holds_one_card() {
    let mut cell = Pile::new(PileId::FreeCell(0), PileKind::FreeCell);
    cell.push(up(Suit::Clubs, Rank::Nine)).unwrap();
    assert_eq!(
        cell.push(up(Suit::Clubs, Rank::Eight)).unwrap_err(),
        PileError::CapacityExceeded
    );
    assert_eq!(cell.pop(1).unwrap(), vec![card(Suit::Clubs, Rank::Nine)]);
    assert!(cell.is_empty());
}

#[test]
fn empty_tableau_rule_is_respected() {
    let mut kings_only = Pile::new(PileId::Tableau(0), TABLEAU);
    assert_eq!(
        kings_only.push(up(Suit::Hearts, Rank::Queen)).unwrap_err(),
        PileError::CapacityExceeded
    );
    kings_only.push(up(Suit::Hearts, Rank::King)).unwrap();
    kings_only.push(up(Suit::Spades, Rank::Queen)).unwrap();
    assert_eq!(
        kings_only.push(up(Suit::Clubs, Rank::Jack)).unwrap_err(),
        PileError::CapacityExceeded
    );

    let mut open = Pile::new(
        PileId::Tableau(1),
        PileKind::Tableau {
            build: Build::AlternatingColors,
            empty: EmptyTableau::AnyCard,
        },
    );
    open.push(up(Suit::Diamonds, Rank::Four)).unwrap();
}

#[test]
fn tableau_pops_only_face_up_runs() {
    let mut pile = Pile::with_cards(
        PileId::Tableau(0),
        TABLEAU,
        vec![
            card(Suit::Clubs, Rank::Two),
            up(Suit::Spades, Rank::Nine),
            up(Suit::Hearts, Rank::Eight),
            up(Suit::Clubs, Rank::Seven),
        ],
    );

    assert!(pile.is_movable_group(3));
    assert!(!pile.is_movable_group(4));
    assert_eq!(pile.pop(4).unwrap_err(), PileError::InsufficientCards);
    assert_eq!(pile.pop(5).unwrap_err(), PileError::InsufficientCards);
    assert_eq!(pile.pop(0).unwrap_err(), PileError::InsufficientCards);

    let run = pile.pop(2).unwrap();
    assert_eq!(
        run,
        vec![card(Suit::Hearts, Rank::Eight), card(Suit::Clubs, Rank::Seven)]
    );
    assert_eq!(pile.len(), 2);
}

#[test]
fn broken_runs_are_not_movable() {
    let pile = Pile::with_cards(
        PileId::Tableau(0),
        TABLEAU,
        vec![up(Suit::Spades, Rank::Nine), up(Suit::Clubs, Rank::Eight)],
    );
    assert!(pile.is_movable_group(1));
    assert!(!pile.is_movable_group(2));
    assert!(!pile.is_empty());
}

#[test]
fn pile_never_flips_cards() {
    let mut pile = Pile::with_cards(
        PileId::Tableau(0),
        TABLEAU,
        vec![card(Suit::Clubs, Rank::Two), up(Suit::Hearts, Rank::Nine)],
    );
    pile.pop(1).unwrap();
    assert!(!pile.peek_top().unwrap().is_face_up());
}
