#![cfg(feature = "serde")]

use patience::{Game, GameView, Pile, PileId, new_game, rules};

#[test]
fn view_survives_json() {
    let mut game = new_game("klondike", 42).unwrap();
    game.apply_move(PileId::Stock, PileId::Waste, 1).unwrap();
    let view = game.view();

    let json = serde_json::to_string(&view).unwrap();
    let restored: GameView = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, view);
}

#[test]
fn game_restores_from_view() {
    let mut game = new_game("freecell", 8).unwrap();
    game.apply_move(PileId::Tableau(0), PileId::FreeCell(0), 1)
        .unwrap();
    let view = game.view();

    let piles: Vec<Pile> = view.piles.iter().map(|pile| pile.to_pile()).collect();
    let rules = rules::by_id(&view.rule_set).unwrap();
    let restored = Game::from_piles(rules, piles).unwrap();
    assert_eq!(restored.view().piles, view.piles);
    assert_eq!(restored.status(), view.status);
}

#[test]
fn history_serializes() {
    let mut game = new_game("klondike", 1).unwrap();
    game.draw_or_recycle().unwrap();
    let json = serde_json::to_string(game.history()).unwrap();
    let history: Vec<patience::AppliedMove> = serde_json::from_str(&json).unwrap();
    assert_eq!(history, game.history());
}
