use std::fmt::Write;

use gomoku_common::gomoku::{Cell, GameSnapshot, GameStatus, Player};

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Gomoku</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<div class="container">
<h1>Gomoku</h1>
"#;

const PAGE_TAIL: &str = r#"<div class="controls">
<button id="reset-btn">New game</button>
<button id="about-btn">About</button>
</div>
<p class="hint">Shortcuts: R starts a new game, Esc closes dialogs.</p>
</div>
<div id="winner-modal" class="modal">
<div class="modal-content">
<p id="winner-message"></p>
<button id="play-again-btn">Play again</button>
<button id="close-modal-btn">Close</button>
</div>
</div>
<div id="about-modal" class="modal">
<div class="modal-content">
<h2>About Gomoku</h2>
<p>Black and White take turns placing one stone on an empty intersection.
Black moves first. The first player with five or more stones in an unbroken
row, horizontally, vertically or diagonally, wins.</p>
<button id="close-about-btn">Close</button>
</div>
</div>
<script src="/static/script.js"></script>
</body>
</html>
"#;

fn stone_class(player: Player) -> &'static str {
    match player {
        Player::Black => "black",
        Player::White => "white",
    }
}

/// Renders the board page with the stones already on the board, so a
/// reload shows the game as it stands before the script syncs.
pub fn render(snapshot: &GameSnapshot) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str(PAGE_HEAD);

    let player_class = stone_class(snapshot.current_player);
    let status_line = match snapshot.status() {
        GameStatus::Won(winner) => format!("{} wins!", winner.display_name()),
        GameStatus::InProgress => format!("{} to move", snapshot.current_player.display_name()),
    };
    let _ = writeln!(
        html,
        "<div class=\"status\">Current player: \
         <span id=\"current-player-display\" class=\"{}\">{}</span> \
         <span id=\"game-status\" data-game-over=\"{}\">{}</span></div>",
        player_class,
        snapshot.current_player.display_name(),
        snapshot.game_over,
        status_line,
    );
    let _ = writeln!(
        html,
        "<div class=\"stone-counts\">Black stones: <span id=\"black-count\">{}</span> \
         White stones: <span id=\"white-count\">{}</span></div>",
        snapshot.board.stones_of(Player::Black),
        snapshot.board.stones_of(Player::White),
    );

    let _ = writeln!(
        html,
        "<div id=\"game-board\" class=\"board\" data-size=\"{}\">",
        snapshot.board.size()
    );
    for (row, cells) in snapshot.board.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            match cell {
                Cell::Empty => {
                    let _ = writeln!(
                        html,
                        "<div class=\"intersection\" data-row=\"{}\" data-col=\"{}\"></div>",
                        row, col
                    );
                }
                Cell::Stone(player) => {
                    let _ = writeln!(
                        html,
                        "<div class=\"intersection\" data-row=\"{}\" data-col=\"{}\">\
                         <div class=\"piece {}\"></div></div>",
                        row,
                        col,
                        stone_class(*player)
                    );
                }
            }
        }
    }
    html.push_str("</div>\n");

    html.push_str(PAGE_TAIL);
    html
}
