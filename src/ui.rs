#![cfg(feature = "std")]

use std::fmt::Write as _;
use std::string::String;

use crate::{
    board::Board,
    config::{GRID_SIZE, NUM_SHIPS},
    coordinate::Coordinate,
    game::{Game, Phase, Preview, Winner},
    ship::Ship,
};

/// Which ships a rendered board reveals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Reveal every ship, not only the destroyed ones.
    pub show_ships: bool,
}

/// Column letter and one-based row, e.g. `B7`.
pub fn coord_to_string(c: Coordinate) -> String {
    let col = (b'A' + c.x as u8) as char;
    std::format!("{}{}", col, c.y + 1)
}

/// Parse `B7` style input. Returns `None` for malformed or off-grid input.
pub fn parse_coord(input: &str) -> Option<Coordinate> {
    let input = input.trim();
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as i32;
    let row: i32 = chars.as_str().parse().ok()?;
    let coord = Coordinate::new(col, row.checked_sub(1)?);
    coord.is_in_bounds().then_some(coord)
}

fn header(out: &mut String) {
    out.push_str("   ");
    for x in 0..GRID_SIZE {
        let ch = (b'A' + x as u8) as char;
        let _ = write!(out, " {}", ch);
    }
    out.push('\n');
}

/// Text picture of `board`: `X` hit, `o` miss, `#` visible ship, `.` water.
/// With a `preview`, the ship being placed is drawn as `+` (or `!` when it
/// cannot go there).
pub fn render_board(board: &Board, opts: RenderOptions, preview: Option<&Preview>) -> String {
    let mut out = String::new();
    header(&mut out);
    for y in 0..GRID_SIZE {
        let _ = write!(out, "{:2} ", y + 1);
        for x in 0..GRID_SIZE {
            let c = Coordinate::new(x, y);
            let cell = board.cell_at(c);
            let in_preview =
                preview.is_some_and(|p| Ship::new(p.origin, p.length, p.orientation).contains(c));
            let ch = if in_preview {
                if preview.is_some_and(|p| p.valid) {
                    '+'
                } else {
                    '!'
                }
            } else if cell.is_hit() {
                'X'
            } else if cell.is_miss() {
                'o'
            } else if cell.is_occupied() && (opts.show_ships || cell.is_ship_destroyed()) {
                '#'
            } else {
                '.'
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Both boards with a status line. Computer ships show in debug mode or once
/// destroyed; the player's own ships always show.
pub fn render_game(game: &Game, debug: bool) -> String {
    let mut out = String::new();
    out.push_str("Computer fleet:\n");
    out.push_str(&render_board(
        game.computer_board(),
        RenderOptions { show_ships: debug },
        None,
    ));
    out.push_str("\nYour fleet:\n");
    let preview = game.preview();
    out.push_str(&render_board(
        game.player_board(),
        RenderOptions { show_ships: true },
        preview.as_ref(),
    ));
    match game.phase() {
        Phase::PlacingShips => {
            if let Some(p) = preview {
                let _ = writeln!(
                    out,
                    "\nPlace ship {} of {} (length {}, {:?})",
                    p.index + 1,
                    NUM_SHIPS,
                    p.length,
                    p.orientation
                );
            }
        }
        Phase::Playing => {
            let _ = writeln!(
                out,
                "\nShips afloat: computer {}, you {}",
                game.computer_board().ships_afloat(),
                game.player_board().ships_afloat()
            );
        }
        Phase::GameOver(Winner::Player) => out.push_str("\nYou sank the whole computer fleet. You win!\n"),
        Phase::GameOver(Winner::Computer) => out.push_str("\nThe computer sank your fleet. You lose.\n"),
    }
    out
}
