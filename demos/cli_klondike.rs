//! CLI patience example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use patience::{CardView, Game, GameStatus, GameView, PileId, PileView, Suit, rules};

fn main() {
    let rule_set = std::env::args().nth(1).unwrap_or_else(|| "klondike".to_string());
    let Some(variant) = rules::by_id(&rule_set) else {
        println!("Unknown rule set '{rule_set}'. Known: {:?}", rules::RULE_SET_IDS);
        return;
    };

    println!("{} CLI example (type 'q' to quit)", variant.name());

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = match Game::new(variant, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Deal error: {err:?}");
            return;
        }
    };
    println!("Seed: {seed}");

    loop {
        print_board(&game.view());

        if game.check_stuck() == GameStatus::Stuck {
            println!("No moves left. Type 'u' to undo or 'q' to quit.");
        }
        if game.status() == GameStatus::Won {
            println!("You won with a score of {}.", game.score());
            break;
        }

        println!("Commands: [d]raw  [m]ove SRC DST N  [u]ndo  [r]edo  restart  [q]uit");
        println!("Piles: s w f1-f4 t1-t8 c1-c4");
        let line = prompt_line("Command: ");
        let words: Vec<&str> = line.split_whitespace().collect();

        let result = match words.as_slice() {
            ["d" | "draw"] => game.draw_or_recycle().map(|_| ()).map_err(|e| format!("{e:?}")),
            ["m" | "move", source, dest, rest @ ..] => {
                let count = match rest {
                    [] => Some(1),
                    [n] => n.parse::<usize>().ok(),
                    _ => None,
                };
                match (parse_pile(source), parse_pile(dest), count) {
                    (Some(source), Some(dest), Some(count)) => game
                        .apply_move(source, dest, count)
                        .map(|_| ())
                        .map_err(|e| format!("{e:?}")),
                    _ => Err("could not parse move".to_string()),
                }
            }
            ["u" | "undo"] => game.undo().map(|_| ()).map_err(|e| format!("{e:?}")),
            ["r" | "redo"] => game.redo().map(|_| ()).map_err(|e| format!("{e:?}")),
            ["restart"] => {
                game.restart();
                Ok(())
            }
            ["q" | "quit"] => return,
            _ => {
                println!("Unknown command.");
                continue;
            }
        };

        if let Err(err) = result {
            println!("Move error: {err}");
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

/// Parses `s`, `w`, or a letter followed by a 1-based index.
fn parse_pile(text: &str) -> Option<PileId> {
    match text {
        "s" => return Some(PileId::Stock),
        "w" => return Some(PileId::Waste),
        _ => {}
    }
    let (kind, index) = text.split_at_checked(1)?;
    let index = index.parse::<u8>().ok()?.checked_sub(1)?;
    match kind {
        "f" => Some(PileId::Foundation(index)),
        "t" => Some(PileId::Tableau(index)),
        "c" => Some(PileId::FreeCell(index)),
        _ => None,
    }
}

fn print_board(view: &GameView) {
    println!(
        "\n{} | score {} | moves {} | redeals {} | {:?}",
        view.rule_set, view.score, view.moves, view.redeals, view.status
    );
    for pile in &view.piles {
        println!("{:>12}: {}", pile.id.to_string(), format_pile(pile));
    }
    println!();
}

fn format_pile(pile: &PileView) -> String {
    if pile.cards.is_empty() {
        return "(empty)".to_string();
    }
    if pile.id == PileId::Stock {
        return format!("[{} cards]", pile.cards.len());
    }
    pile.cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &CardView) -> String {
    if !card.face_up {
        return colorize("##", "90");
    }
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    let text = format!("{}{}", card.rank.label(), card.suit.short());
    colorize(&text, color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
