//! Server-side HTML rendering of the game page.

use crate::games::connect_four::{COLS, Cell, GameStatus, Player};
use crate::session::GameSnapshot;
use std::fmt::Write;

/// Renders the full game page from a state snapshot.
///
/// A formatting failure propagates to the handler, which surfaces it
/// as a server error; game-logic problems never reach this path.
pub fn render_page(snapshot: &GameSnapshot) -> Result<String, std::fmt::Error> {
    let mut page = String::with_capacity(4096);
    writeln!(page, "<!DOCTYPE html>")?;
    writeln!(page, "<html lang=\"en\">")?;
    writeln!(page, "<head>")?;
    writeln!(page, "  <meta charset=\"utf-8\">")?;
    writeln!(page, "  <title>Drop Four</title>")?;
    writeln!(
        page,
        "  <link rel=\"stylesheet\" href=\"/static/style.css\">"
    )?;
    writeln!(page, "</head>")?;
    writeln!(page, "<body>")?;
    writeln!(page, "  <h1>Drop Four</h1>")?;
    render_status(&mut page, snapshot)?;
    if !snapshot.message().is_empty() {
        writeln!(
            page,
            "  <p class=\"message\">{}</p>",
            escape(snapshot.message())
        )?;
    }
    render_columns(&mut page, snapshot)?;
    render_board(&mut page, snapshot)?;
    writeln!(page, "  <form method=\"post\" action=\"/reset\">")?;
    writeln!(
        page,
        "    <button type=\"submit\" class=\"reset\">Reset</button>"
    )?;
    writeln!(page, "  </form>")?;
    writeln!(
        page,
        "  <p class=\"moves\">Moves played: {}</p>",
        snapshot.moves()
    )?;
    writeln!(page, "</body>")?;
    writeln!(page, "</html>")?;
    Ok(page)
}

/// Writes the status banner: whose turn it is, or how the game ended.
fn render_status(page: &mut String, snapshot: &GameSnapshot) -> std::fmt::Result {
    let banner = match snapshot.status() {
        GameStatus::InProgress => format!("{} to move.", snapshot.to_move()),
        GameStatus::Won(player) => format!("{player} has won the game."),
        GameStatus::Draw => "The game is a draw.".to_string(),
    };
    writeln!(page, "  <p class=\"status\">{banner}</p>")
}

/// Writes one drop button per column, disabled once the game is over
/// or the column is full.
fn render_columns(page: &mut String, snapshot: &GameSnapshot) -> std::fmt::Result {
    writeln!(page, "  <form method=\"post\" action=\"/play\" class=\"columns\">")?;
    let game_over = snapshot.status().is_terminal();
    for col in 0..COLS {
        let column_full = snapshot.board()[0][col] != Cell::Empty;
        let disabled = if game_over || column_full {
            " disabled"
        } else {
            ""
        };
        writeln!(
            page,
            "    <button type=\"submit\" name=\"column\" value=\"{col}\"{disabled}>&#8595;</button>"
        )?;
    }
    writeln!(page, "  </form>")
}

/// Writes the board as a table, top row first.
fn render_board(page: &mut String, snapshot: &GameSnapshot) -> std::fmt::Result {
    writeln!(page, "  <table class=\"board\">")?;
    for row in snapshot.board() {
        writeln!(page, "    <tr>")?;
        for cell in row {
            let class = match cell {
                Cell::Empty => "empty",
                Cell::Occupied(Player::One) => "p1",
                Cell::Occupied(Player::Two) => "p2",
            };
            writeln!(page, "      <td class=\"{class}\"></td>")?;
        }
        writeln!(page, "    </tr>")?;
    }
    writeln!(page, "  </table>")
}

/// Escapes text for safe interpolation into HTML.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
