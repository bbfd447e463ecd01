use triplerow_core::logic::board::{Board, Cell};

/// Renders the grid one row per line, `.` for empty cells.
pub fn board_to_string(board: &Board) -> String {
    let mut out = String::new();
    for y in 0..board.height() {
        let mut row = String::new();
        for x in 0..board.width() {
            if x > 0 {
                row.push(' ');
            }
            row.push(match board.cell(x, y) {
                Cell::Taken(player) => player.as_char(),
                Cell::Empty | Cell::Off => '.',
            });
        }
        out.push_str(&row);
        out.push('\n');
    }
    out
}
